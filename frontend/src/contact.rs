use std::rc::Rc;

use gloo_net::http::Request;
use log::{debug, error, info};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::spawn_local;
use web_sys::{Document, Element, Event, FormData, HtmlButtonElement, HtmlFormElement, Window};

use crate::config::{self, CONTACT_PENDING_LABEL};
use crate::dom::{self, Disposer};
use crate::modal::Modal;

pub const REJECTED_FALLBACK: &str = "Failed to send message. Please try again.";
pub const NETWORK_ERROR: &str = "Network error. Please try again later.";

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ContactPayload {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ContactResponse {
    #[serde(default)]
    pub success: bool,
    pub error: Option<String>,
}

#[derive(Debug, Error, PartialEq)]
pub enum SubmitError {
    #[error("rejected: {0}")]
    Rejected(String),
    #[error("request failed: {0}")]
    Network(String),
}

impl SubmitError {
    /// What the visitor gets to read.
    pub fn user_message(&self) -> &str {
        match self {
            SubmitError::Rejected(message) => message,
            SubmitError::Network(_) => NETWORK_ERROR,
        }
    }
}

/// Success needs both a 2xx status and `success: true` in the body.
pub fn interpret(status_ok: bool, body: ContactResponse) -> Result<(), SubmitError> {
    if status_ok && body.success {
        return Ok(());
    }
    let message = body
        .error
        .filter(|e| !e.is_empty())
        .unwrap_or_else(|| REJECTED_FALLBACK.to_string());
    Err(SubmitError::Rejected(message))
}

#[allow(async_fn_in_trait)]
pub trait ContactTransport {
    async fn send(&self, payload: &ContactPayload) -> Result<(), SubmitError>;
}

/// Everything the submit flow does to the page.
pub trait ContactView {
    /// Disables the submit button, swaps in the pending label and returns the old one.
    fn begin_pending(&self) -> String;
    fn end_pending(&self, original_label: &str);
    fn show_success(&self, name: &str);
    fn reset(&self);
    fn alert(&self, message: &str);
}

pub async fn submit<T, V>(transport: &T, view: &V, payload: ContactPayload) -> Result<(), SubmitError>
where
    T: ContactTransport,
    V: ContactView,
{
    let original_label = view.begin_pending();
    let outcome = transport.send(&payload).await;
    match &outcome {
        Ok(()) => {
            info!("Contact message sent");
            view.show_success(&payload.name);
            view.reset();
        }
        Err(e) => {
            if let SubmitError::Network(detail) = e {
                error!("Contact request failed: {}", detail);
            }
            view.alert(e.user_message());
        }
    }
    view.end_pending(&original_label);
    outcome
}

pub struct HttpTransport {
    endpoint: String,
}

impl HttpTransport {
    pub fn new(base_url: &str) -> Self {
        Self { endpoint: format!("{}/api/contact", base_url) }
    }
}

impl ContactTransport for HttpTransport {
    async fn send(&self, payload: &ContactPayload) -> Result<(), SubmitError> {
        let response = Request::post(&self.endpoint)
            .json(payload)
            .map_err(|e| SubmitError::Network(e.to_string()))?
            .send()
            .await
            .map_err(|e| SubmitError::Network(e.to_string()))?;
        let status_ok = response.ok();
        debug!("Contact response status: {}", response.status());
        let body = response
            .json::<ContactResponse>()
            .await
            .map_err(|e| SubmitError::Network(e.to_string()))?;
        interpret(status_ok, body)
    }
}

struct DomContactView {
    window: Window,
    form: HtmlFormElement,
    button: Option<HtmlButtonElement>,
    user_name: Option<Element>,
    modal: Option<Modal<Element>>,
}

impl DomContactView {
    fn payload(&self) -> Result<ContactPayload, JsValue> {
        let data = FormData::new_with_form(&self.form)?;
        let field = |name: &str| data.get(name).as_string().unwrap_or_default();
        Ok(ContactPayload {
            name: field("name"),
            email: field("email"),
            subject: field("subject"),
            message: field("message"),
        })
    }
}

impl ContactView for DomContactView {
    fn begin_pending(&self) -> String {
        let Some(button) = &self.button else {
            return String::new();
        };
        let original = button.inner_html();
        button.set_inner_html(CONTACT_PENDING_LABEL);
        button.set_disabled(true);
        original
    }

    fn end_pending(&self, original_label: &str) {
        if let Some(button) = &self.button {
            button.set_inner_html(original_label);
            button.set_disabled(false);
        }
    }

    fn show_success(&self, name: &str) {
        if let Some(user_name) = &self.user_name {
            user_name.set_text_content(Some(name));
        }
        if let Some(modal) = &self.modal {
            modal.show();
        }
    }

    fn reset(&self) {
        self.form.reset();
    }

    fn alert(&self, message: &str) {
        let _ = self.window.alert_with_message(message);
    }
}

pub fn setup(
    document: &Document,
    modal: Option<Modal<Element>>,
    disposers: &mut Vec<Disposer>,
) -> Result<(), JsValue> {
    let Some(form) = document
        .get_element_by_id("contactForm")
        .and_then(|el| el.dyn_into::<HtmlFormElement>().ok())
    else {
        debug!("no #contactForm");
        return Ok(());
    };
    let Some(window) = dom::window_of(document) else {
        return Ok(());
    };

    let button = form
        .query_selector("button[type=\"submit\"]")?
        .and_then(|el| el.dyn_into::<HtmlButtonElement>().ok());
    let view = Rc::new(DomContactView {
        window,
        form: form.clone(),
        button,
        user_name: document.get_element_by_id("userName"),
        modal,
    });
    let transport = Rc::new(HttpTransport::new(config::get_backend_url()));

    disposers.push(dom::listen(&form, "submit", move |e: Event| {
        e.prevent_default();
        let payload = match view.payload() {
            Ok(payload) => payload,
            Err(err) => {
                error!("Could not read contact form: {:?}", err);
                return;
            }
        };
        let view = view.clone();
        let transport = transport.clone();
        spawn_local(async move {
            let _ = submit(&*transport, &*view, payload).await;
        });
    })?);
    Ok(())
}
