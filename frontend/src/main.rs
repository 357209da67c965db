use std::cell::RefCell;

use log::info;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{window, Document};

mod config;
mod contact;
mod controller;
mod dom;
mod effects;
mod modal;
mod navbar;
mod reveal;
mod typing;

use controller::Controller;

thread_local! {
    static CONTROLLER: RefCell<Option<Controller>> = RefCell::new(None);
}

fn boot(document: &Document) {
    let controller = controller::init(document);
    CONTROLLER.with(|slot| {
        // a second boot replaces (and tears down) the first
        slot.replace(Some(controller));
    });
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(config::log_level()).expect("error initializing log");

    info!("Starting portfolio enhancements");
    let Some(document) = window().and_then(|w| w.document()) else {
        return;
    };

    if document.ready_state() == "loading" {
        let doc = document.clone();
        let on_ready = Closure::once_into_js(move || boot(&doc));
        if let Err(e) = document.add_event_listener_with_callback("DOMContentLoaded", on_ready.unchecked_ref()) {
            log::error!("Could not wait for DOMContentLoaded: {:?}", e);
        }
    } else {
        boot(&document);
    }
}
