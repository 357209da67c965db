use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{
    AddEventListenerOptions, Document, Element, Event, EventTarget, HtmlElement, IntersectionObserver,
    IntersectionObserverEntry, IntersectionObserverInit, NodeList, ScrollBehavior,
    ScrollIntoViewOptions, ScrollLogicalPosition, Window,
};

/// Undoes one registration (listener or observer). Runs at most once.
pub type Disposer = Box<dyn FnOnce()>;

pub trait ClassList {
    fn add_class(&self, class: &str);
    fn remove_class(&self, class: &str);
    fn has_class(&self, class: &str) -> bool;

    /// Flips `class` and returns whether it is now present.
    fn toggle_class(&self, class: &str) -> bool {
        if self.has_class(class) {
            self.remove_class(class);
            false
        } else {
            self.add_class(class);
            true
        }
    }
}

pub trait Attributes {
    fn set_attr(&self, name: &str, value: &str);
}

pub trait SmoothScroll {
    fn scroll_smoothly(&self);
}

/// Inline `style` declarations.
pub trait InlineStyle {
    fn set_style(&self, property: &str, value: &str);
}

impl ClassList for Element {
    fn add_class(&self, class: &str) {
        let _ = self.class_list().add_1(class);
    }

    fn remove_class(&self, class: &str) {
        let _ = self.class_list().remove_1(class);
    }

    fn has_class(&self, class: &str) -> bool {
        self.class_list().contains(class)
    }
}

impl Attributes for Element {
    fn set_attr(&self, name: &str, value: &str) {
        let _ = self.set_attribute(name, value);
    }
}

impl SmoothScroll for Element {
    fn scroll_smoothly(&self) {
        let options = ScrollIntoViewOptions::new();
        options.set_behavior(ScrollBehavior::Smooth);
        options.set_block(ScrollLogicalPosition::Start);
        self.scroll_into_view_with_scroll_into_view_options(&options);
    }
}

impl InlineStyle for Element {
    fn set_style(&self, property: &str, value: &str) {
        // only HTML elements carry a style declaration
        if let Some(el) = self.dyn_ref::<HtmlElement>() {
            let _ = el.style().set_property(property, value);
        }
    }
}

/// Every element in `list`, skipping non-element nodes.
pub fn elements(list: NodeList) -> Vec<Element> {
    (0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect()
}

pub fn query_all(document: &Document, selector: &str) -> Vec<Element> {
    match document.query_selector_all(selector) {
        Ok(list) => elements(list),
        Err(e) => {
            log::warn!("bad selector {}: {:?}", selector, e);
            Vec::new()
        }
    }
}

pub fn query(document: &Document, selector: &str) -> Option<Element> {
    document.query_selector(selector).ok().flatten()
}

pub fn window_of(document: &Document) -> Option<Window> {
    document.default_view()
}

/// Adds `handler` for `event` on `target` and returns the matching removal.
pub fn listen<E, F>(target: &EventTarget, event: &'static str, handler: F) -> Result<Disposer, JsValue>
where
    E: JsCast + 'static,
    F: FnMut(E) + 'static,
{
    register(target, event, handler, false)
}

/// Same as [`listen`] but marks the listener passive (scroll, pointer tracking).
pub fn listen_passive<E, F>(target: &EventTarget, event: &'static str, handler: F) -> Result<Disposer, JsValue>
where
    E: JsCast + 'static,
    F: FnMut(E) + 'static,
{
    register(target, event, handler, true)
}

fn register<E, F>(target: &EventTarget, event: &'static str, mut handler: F, passive: bool) -> Result<Disposer, JsValue>
where
    E: JsCast + 'static,
    F: FnMut(E) + 'static,
{
    let callback = Closure::<dyn FnMut(Event)>::new(move |e: Event| {
        handler(e.unchecked_into::<E>());
    });

    if passive {
        let options = AddEventListenerOptions::new();
        options.set_passive(true);
        target.add_event_listener_with_callback_and_add_event_listener_options(
            event,
            callback.as_ref().unchecked_ref(),
            &options,
        )?;
    } else {
        target.add_event_listener_with_callback(event, callback.as_ref().unchecked_ref())?;
    }

    let target = target.clone();
    Ok(Box::new(move || {
        let _ = target.remove_event_listener_with_callback(event, callback.as_ref().unchecked_ref());
    }))
}

pub fn has_intersection_observer(window: &Window) -> bool {
    js_sys::Reflect::has(window, &JsValue::from_str("IntersectionObserver")).unwrap_or(false)
}

/// Watches `targets` with a fresh IntersectionObserver. The disposer disconnects it.
pub fn observe<F>(
    targets: &[Element],
    threshold: f64,
    root_margin: Option<&str>,
    mut handler: F,
) -> Result<Disposer, JsValue>
where
    F: FnMut(Vec<IntersectionObserverEntry>, &IntersectionObserver) + 'static,
{
    let callback = Closure::<dyn FnMut(js_sys::Array, IntersectionObserver)>::new(
        move |entries: js_sys::Array, observer: IntersectionObserver| {
            let entries = entries
                .iter()
                .map(|entry| entry.unchecked_into::<IntersectionObserverEntry>())
                .collect();
            handler(entries, &observer);
        },
    );

    let options = IntersectionObserverInit::new();
    options.set_threshold(&JsValue::from_f64(threshold));
    if let Some(margin) = root_margin {
        options.set_root_margin(margin);
    }
    let observer = IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)?;
    for target in targets {
        observer.observe(target);
    }

    Ok(Box::new(move || {
        observer.disconnect();
        drop(callback);
    }))
}
