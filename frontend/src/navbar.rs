use std::rc::Rc;

use log::debug;
use wasm_bindgen::JsValue;
use web_sys::{Document, Element, Event};

use crate::config::{ACTIVE_SECTION_THRESHOLD, SHRINK_OFFSET};
use crate::dom::{self, Attributes, ClassList, Disposer, SmoothScroll};

pub const SHRINK: &str = "shrink";
pub const OPEN: &str = "open";
pub const ACTIVE: &str = "active";

const NAV_LINKS: &str = ".nav-menu a";

pub fn should_shrink(scroll_y: f64) -> bool {
    scroll_y > SHRINK_OFFSET
}

pub fn apply_shrink<N: ClassList>(navbar: &N, scroll_y: f64) {
    if should_shrink(scroll_y) {
        navbar.add_class(SHRINK);
    } else {
        navbar.remove_class(SHRINK);
    }
}

/// The selector a nav link points at, or `None` when the browser should
/// follow it normally.
pub fn in_page_target(href: Option<&str>) -> Option<&str> {
    href.filter(|h| h.starts_with('#'))
}

/// Mobile menu plus the button that opens it.
pub struct NavPanel<M, T> {
    menu: M,
    toggle: Option<T>,
}

impl<M: ClassList, T: Attributes> NavPanel<M, T> {
    pub fn new(menu: M, toggle: Option<T>) -> Self {
        Self { menu, toggle }
    }

    pub fn is_open(&self) -> bool {
        self.menu.has_class(OPEN)
    }

    pub fn toggle(&self) -> bool {
        let open = self.menu.toggle_class(OPEN);
        self.mirror(open);
        open
    }

    pub fn close(&self) {
        if self.is_open() {
            self.menu.remove_class(OPEN);
            self.mirror(false);
        }
    }

    fn mirror(&self, open: bool) {
        if let Some(toggle) = &self.toggle {
            toggle.set_attr("aria-expanded", if open { "true" } else { "false" });
        }
    }
}

/// Scrolls to an in-page target and folds the mobile menu away.
pub fn follow_in_page<S, M, T>(target: Option<S>, panel: Option<&NavPanel<M, T>>)
where
    S: SmoothScroll,
    M: ClassList,
    T: Attributes,
{
    let Some(target) = target else {
        return;
    };
    target.scroll_smoothly();
    if let Some(panel) = panel {
        panel.close();
    }
}

/// One section as reported by an intersection callback.
#[derive(Debug, Clone, PartialEq)]
pub struct SectionHit {
    pub id: String,
    pub top: f64,
    pub intersecting: bool,
}

/// Topmost intersecting section of a batch.
pub fn topmost_section(hits: &[SectionHit]) -> Option<&str> {
    hits.iter()
        .filter(|hit| hit.intersecting)
        .min_by(|a, b| a.top.total_cmp(&b.top))
        .map(|hit| hit.id.as_str())
}

/// Clears every link and marks the first one pointing at `#section_id`.
pub fn highlight<L: ClassList>(links: &[(L, Option<String>)], section_id: &str) {
    let wanted = format!("#{}", section_id);
    for (link, _) in links {
        link.remove_class(ACTIVE);
    }
    if let Some((link, _)) = links.iter().find(|(_, href)| href.as_deref() == Some(wanted.as_str())) {
        link.add_class(ACTIVE);
    }
}

pub fn setup(document: &Document, disposers: &mut Vec<Disposer>) -> Result<(), JsValue> {
    let Some(window) = dom::window_of(document) else {
        return Ok(());
    };

    match dom::query(document, ".navbar") {
        Some(navbar) => {
            let win = window.clone();
            disposers.push(dom::listen_passive(&window, "scroll", move |_: Event| {
                apply_shrink(&navbar, win.scroll_y().unwrap_or(0.0));
            })?);
        }
        None => debug!("no .navbar"),
    }

    let panel = document
        .get_element_by_id("navMenu")
        .map(|menu| Rc::new(NavPanel::new(menu, dom::query(document, ".nav-toggle"))));

    if let Some(panel) = &panel {
        if let Some(toggle) = dom::query(document, ".nav-toggle") {
            let panel = panel.clone();
            disposers.push(dom::listen(&toggle, "click", move |_: Event| {
                panel.toggle();
            })?);
        }
    }

    let links = dom::query_all(document, NAV_LINKS);
    for link in &links {
        let doc = document.clone();
        let panel = panel.clone();
        let anchor = link.clone();
        disposers.push(dom::listen(link, "click", move |e: Event| {
            let href = anchor.get_attribute("href");
            let Some(selector) = in_page_target(href.as_deref()) else {
                return;
            };
            e.prevent_default();
            follow_in_page(doc.query_selector(selector).ok().flatten(), panel.as_deref());
        })?);
    }

    let sections = dom::query_all(document, "section[id]");
    if !sections.is_empty() && dom::has_intersection_observer(&window) {
        let links: Vec<(Element, Option<String>)> = links
            .into_iter()
            .map(|link| {
                let href = link.get_attribute("href");
                (link, href)
            })
            .collect();
        disposers.push(dom::observe(&sections, ACTIVE_SECTION_THRESHOLD, None, move |entries, _| {
            let hits: Vec<SectionHit> = entries
                .iter()
                .map(|entry| SectionHit {
                    id: entry.target().id(),
                    top: entry.bounding_client_rect().top(),
                    intersecting: entry.is_intersecting(),
                })
                .collect();
            if let Some(id) = topmost_section(&hits) {
                highlight(&links, id);
            }
        })?);
    }

    Ok(())
}
