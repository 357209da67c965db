use log::debug;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element, HtmlElement, MouseEvent};

use crate::config::{PARALLAX_PERCENT, TILT_DEGREES};
use crate::dom::{self, Disposer};

const GLOW_STYLE: &str = "position: fixed; width: 300px; height: 300px; border-radius: 50%; \
background: radial-gradient(circle, rgba(108,99,255,0.07) 0%, transparent 70%); \
pointer-events: none; z-index: 0; transform: translate(-50%, -50%); \
transition: left 120ms linear, top 120ms linear;";

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CardRect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl CardRect {
    fn of(el: &Element) -> Self {
        let rect = el.get_bounding_client_rect();
        Self { left: rect.left(), top: rect.top(), width: rect.width(), height: rect.height() }
    }

    /// Pointer position in card units, (0, 0) top-left to (1, 1) bottom-right.
    /// `None` for a collapsed card.
    fn relative(&self, x: f64, y: f64) -> Option<(f64, f64)> {
        if self.width <= 0.0 || self.height <= 0.0 {
            return None;
        }
        Some((
            ((x - self.left) / self.width).clamp(0.0, 1.0),
            ((y - self.top) / self.height).clamp(0.0, 1.0),
        ))
    }
}

// keeps "-0" out of generated css
fn tidy(v: f64) -> f64 {
    if v == 0.0 {
        0.0
    } else {
        v
    }
}

pub fn tilt_transform(rect: &CardRect, x: f64, y: f64) -> Option<String> {
    let (rx, ry) = rect.relative(x, y)?;
    let (dx, dy) = (rx - 0.5, ry - 0.5);
    Some(format!(
        "perspective(400px) rotateY({}deg) rotateX({}deg) translateY(-6px)",
        tidy(dx * TILT_DEGREES),
        tidy(-dy * TILT_DEGREES)
    ))
}

pub fn parallax_position(rect: &CardRect, x: f64, y: f64) -> Option<String> {
    let (rx, ry) = rect.relative(x, y)?;
    Some(format!("{}% {}%", tidy(rx * PARALLAX_PERCENT), tidy(ry * PARALLAX_PERCENT)))
}

fn set_style(el: &HtmlElement, property: &str, value: &str) {
    let _ = el.style().set_property(property, value);
}

pub fn setup_tilt(document: &Document, disposers: &mut Vec<Disposer>) -> Result<(), JsValue> {
    for card in dom::query_all(document, ".skill-card") {
        let Ok(card) = card.dyn_into::<HtmlElement>() else {
            continue;
        };
        let moving = card.clone();
        disposers.push(dom::listen(&card, "mousemove", move |e: MouseEvent| {
            let rect = CardRect::of(&moving);
            if let Some(transform) = tilt_transform(&rect, e.client_x() as f64, e.client_y() as f64) {
                set_style(&moving, "transform", &transform);
            }
        })?);
        let leaving = card.clone();
        disposers.push(dom::listen(&card, "mouseleave", move |_: MouseEvent| {
            let _ = leaving.style().remove_property("transform");
        })?);
    }
    Ok(())
}

pub fn setup_parallax(document: &Document, disposers: &mut Vec<Disposer>) -> Result<(), JsValue> {
    for card in dom::query_all(document, ".project-card") {
        let Some(media) = card
            .query_selector(".project-media")
            .ok()
            .flatten()
            .and_then(|m| m.dyn_into::<HtmlElement>().ok())
        else {
            continue;
        };
        let rect_source = card.clone();
        disposers.push(dom::listen(&card, "mousemove", move |e: MouseEvent| {
            let rect = CardRect::of(&rect_source);
            if let Some(position) = parallax_position(&rect, e.client_x() as f64, e.client_y() as f64) {
                set_style(&media, "background-position", &position);
            }
        })?);
    }
    Ok(())
}

/// Decorative glow under the pointer, fine pointers only.
pub fn setup_cursor_glow(document: &Document, disposers: &mut Vec<Disposer>) -> Result<(), JsValue> {
    let Some(window) = dom::window_of(document) else {
        return Ok(());
    };
    let fine_pointer = window
        .match_media("(pointer: fine)")
        .ok()
        .flatten()
        .map(|query| query.matches())
        .unwrap_or(false);
    let Some(body) = document.body() else {
        return Ok(());
    };
    if !fine_pointer {
        debug!("coarse pointer, skipping cursor glow");
        return Ok(());
    }

    let glow = document.create_element("div")?.dyn_into::<HtmlElement>()?;
    glow.style().set_css_text(GLOW_STYLE);
    body.append_child(&glow)?;
    let attached = glow.clone();
    disposers.push(Box::new(move || attached.remove()));

    disposers.push(dom::listen_passive(&window, "mousemove", move |e: MouseEvent| {
        set_style(&glow, "left", &format!("{}px", e.client_x()));
        set_style(&glow, "top", &format!("{}px", e.client_y()));
    })?);
    Ok(())
}
