use std::rc::Rc;

use log::debug;
use wasm_bindgen::JsValue;
use web_sys::{Document, Element, EventTarget, KeyboardEvent, MouseEvent};

use crate::dom::{self, ClassList, Disposer};

pub const ACTIVE: &str = "active";

/// Confirmation dialog shown after a successful contact submission.
#[derive(Debug, Clone)]
pub struct Modal<E> {
    element: E,
}

impl<E: ClassList> Modal<E> {
    pub fn new(element: E) -> Self {
        Self { element }
    }

    pub fn element(&self) -> &E {
        &self.element
    }

    pub fn is_open(&self) -> bool {
        self.element.has_class(ACTIVE)
    }

    pub fn show(&self) {
        self.element.add_class(ACTIVE);
    }

    pub fn hide(&self) {
        self.element.remove_class(ACTIVE);
    }

    /// Escape closes an open modal. Returns whether the key was consumed.
    pub fn handle_key(&self, key: &str) -> bool {
        if key == "Escape" && self.is_open() {
            self.hide();
            true
        } else {
            false
        }
    }

    /// Clicks on the backdrop itself close; clicks inside the content do not.
    pub fn handle_click(&self, on_backdrop: bool) {
        if on_backdrop {
            self.hide();
        }
    }
}

pub fn find(document: &Document) -> Option<Modal<Element>> {
    document.get_element_by_id("successModal").map(Modal::new)
}

pub fn setup(
    document: &Document,
    modal: Option<Modal<Element>>,
    disposers: &mut Vec<Disposer>,
) -> Result<(), JsValue> {
    let Some(modal) = modal.map(Rc::new) else {
        debug!("no #successModal");
        return Ok(());
    };

    for id in ["modalClose", "modalOk"] {
        if let Some(button) = document.get_element_by_id(id) {
            let modal = modal.clone();
            disposers.push(dom::listen(&button, "click", move |_: MouseEvent| modal.hide())?);
        }
    }

    {
        let backdrop = modal.clone();
        disposers.push(dom::listen(modal.element(), "click", move |e: MouseEvent| {
            let own: &EventTarget = backdrop.element().as_ref();
            backdrop.handle_click(e.target().as_ref() == Some(own));
        })?);
    }

    let modal = modal.clone();
    disposers.push(dom::listen(document, "keydown", move |e: KeyboardEvent| {
        modal.handle_key(&e.key());
    })?);

    Ok(())
}
