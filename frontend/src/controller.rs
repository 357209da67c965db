use std::fmt::Debug;

use log::{debug, info, warn};
use web_sys::Document;

use crate::dom::Disposer;
use crate::{contact, effects, modal, navbar, reveal, typing};

/// Owns every listener and observer registered on the page.
/// Dropping it (or calling [`Controller::dispose`]) unregisters them all.
#[derive(Default)]
pub struct Controller {
    disposers: Vec<Disposer>,
}

impl Controller {
    /// Runs one setup routine against the controller's own disposer list, so
    /// whatever it registered before failing is still torn down later.
    fn register<F, E>(&mut self, routine: &str, setup: F)
    where
        F: FnOnce(&mut Vec<Disposer>) -> Result<(), E>,
        E: Debug,
    {
        let before = self.disposers.len();
        let result = setup(&mut self.disposers);
        let added = self.disposers.len() - before;
        match result {
            Ok(()) => debug!("{}: {} registrations", routine, added),
            Err(e) => warn!("{} setup failed after {} registrations: {:?}", routine, added, e),
        }
    }

    pub fn registrations(&self) -> usize {
        self.disposers.len()
    }

    pub fn dispose(mut self) {
        self.teardown();
    }

    fn teardown(&mut self) {
        for dispose in self.disposers.drain(..) {
            dispose();
        }
    }
}

impl Drop for Controller {
    fn drop(&mut self) {
        self.teardown();
    }
}

/// Wires up the whole page. Call once the document has been parsed.
pub fn init(document: &Document) -> Controller {
    let mut controller = Controller::default();

    reveal::mark_ready(document);
    typing::start(document);

    controller.register("reveal", |d| reveal::setup(document, d));
    controller.register("navbar", |d| navbar::setup(document, d));
    controller.register("tilt", |d| effects::setup_tilt(document, d));
    controller.register("parallax", |d| effects::setup_parallax(document, d));
    controller.register("contact", |d| contact::setup(document, modal::find(document), d));
    controller.register("modal", |d| modal::setup(document, modal::find(document), d));
    controller.register("cursor glow", |d| effects::setup_cursor_glow(document, d));

    info!("Page controller ready with {} registrations", controller.registrations());
    controller
}
