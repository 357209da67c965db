use std::collections::BTreeMap;

use lettre::Address;
use once_cell::sync::Lazy;
use regex::Regex;
use serde_json::Value;

pub const DEFAULT_SUBJECT: &str = "Portfolio Contact";
const MAX_NAME_CHARS: usize = 120;
const MAX_SUBJECT_CHARS: usize = 200;
const MAX_MESSAGE_CHARS: usize = 5000;

static EMAIL_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[a-zA-Z0-9._%+\-]+@[a-zA-Z0-9.\-]+\.[a-zA-Z]{2,}$").expect("email regex must compile")
});

/// Raw body of `POST /api/contact`. Anything missing, `null` or not a string
/// counts as empty.
#[derive(Debug, Default)]
pub struct ContactRequest {
    pub name: Option<String>,
    pub email: Option<String>,
    pub subject: Option<String>,
    pub message: Option<String>,
}

/// A submission that passed validation, fields trimmed.
#[derive(Debug, Clone, PartialEq)]
pub struct ContactMessage {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

/// Field name -> human readable problem.
pub type FieldErrors = BTreeMap<&'static str, &'static str>;

/// Must also be something the mailer can put in a `Reply-To` header.
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_REGEX.is_match(email) && email.parse::<Address>().is_ok()
}

fn trimmed(value: Option<String>) -> String {
    value.map(|v| v.trim().to_string()).unwrap_or_default()
}

impl ContactRequest {
    /// Picks the string fields out of a JSON document, field by field.
    pub fn from_json(body: &Value) -> Self {
        let field = |key: &str| body.get(key).and_then(Value::as_str).map(str::to_string);
        Self {
            name: field("name"),
            email: field("email"),
            subject: field("subject"),
            message: field("message"),
        }
    }

    pub fn validate(self) -> Result<ContactMessage, FieldErrors> {
        let name = trimmed(self.name);
        let email = trimmed(self.email);
        let message = trimmed(self.message);
        let mut subject = trimmed(self.subject);
        if subject.is_empty() {
            subject = DEFAULT_SUBJECT.to_string();
        }

        let mut errors = FieldErrors::new();
        if name.is_empty() {
            errors.insert("name", "Name is required.");
        } else if name.chars().count() > MAX_NAME_CHARS {
            errors.insert("name", "Name must be under 120 characters.");
        }

        if email.is_empty() {
            errors.insert("email", "Email is required.");
        } else if !is_valid_email(&email) {
            errors.insert("email", "Invalid email address.");
        }

        if message.is_empty() {
            errors.insert("message", "Message is required.");
        } else if message.chars().count() > MAX_MESSAGE_CHARS {
            errors.insert("message", "Message must be under 5,000 characters.");
        }

        if subject.chars().count() > MAX_SUBJECT_CHARS {
            errors.insert("subject", "Subject must be under 200 characters.");
        }

        if !errors.is_empty() {
            return Err(errors);
        }
        Ok(ContactMessage { name, email, subject, message })
    }
}
