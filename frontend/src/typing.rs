use gloo_timers::future::TimeoutFuture;
use log::debug;
use wasm_bindgen_futures::spawn_local;
use web_sys::Document;

use crate::config::{TYPING_JITTER_MS, TYPING_MIN_DELAY_MS, TYPING_START_DELAY_MS};
use crate::dom;

/// Yields ever longer prefixes of `text`, one character at a time.
pub struct Typewriter<'a> {
    text: &'a str,
    end: usize,
}

impl<'a> Typewriter<'a> {
    pub fn new(text: &'a str) -> Self {
        Self { text, end: 0 }
    }
}

impl<'a> Iterator for Typewriter<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<&'a str> {
        let ch = self.text[self.end..].chars().next()?;
        self.end += ch.len_utf8();
        Some(&self.text[..self.end])
    }
}

/// Delay before the next character, `sample` being a uniform draw in [0, 1).
pub fn char_delay_ms(sample: f64) -> u32 {
    TYPING_MIN_DELAY_MS + (sample.clamp(0.0, 1.0) * TYPING_JITTER_MS as f64) as u32
}

/// Retypes the first `.typing` element. Fire and forget.
pub fn start(document: &Document) {
    let Some(el) = dom::query(document, ".typing") else {
        debug!("no .typing element");
        return;
    };
    let full = el.text_content().unwrap_or_default().trim().to_string();
    el.set_text_content(Some(""));

    spawn_local(async move {
        TimeoutFuture::new(TYPING_START_DELAY_MS).await;
        for typed in Typewriter::new(&full) {
            el.set_text_content(Some(typed));
            TimeoutFuture::new(char_delay_ms(js_sys::Math::random())).await;
        }
    });
}
