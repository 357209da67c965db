use std::env;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("MAIL_PORT must be a port number, got {0:?}")]
    InvalidPort(String),
}

#[derive(Clone, Debug)]
pub struct MailSettings {
    pub server: String,
    pub port: u16,
    pub use_tls: bool,
    pub username: String,
    pub password: String,
}

#[derive(Clone, Debug)]
pub struct Config {
    pub mail: MailSettings,
    pub testing: bool, // log contact emails instead of sending them
    pub static_dir: PathBuf,
    pub bind_address: String,
}

fn var_or(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_string())
}

fn flag(key: &str, default: bool) -> bool {
    match env::var(key) {
        Ok(value) => value.trim().eq_ignore_ascii_case("true"),
        Err(_) => default,
    }
}

impl Config {
    /// Reads the process environment (call `dotenv()` first to pick up `.env`).
    pub fn from_env() -> Result<Self, ConfigError> {
        let port = var_or("MAIL_PORT", "587");
        let port = port
            .trim()
            .parse::<u16>()
            .map_err(|_| ConfigError::InvalidPort(port.clone()))?;

        Ok(Config {
            mail: MailSettings {
                server: var_or("MAIL_SERVER", "smtp.gmail.com"),
                port,
                use_tls: flag("MAIL_USE_TLS", true),
                username: var_or("MAIL_USERNAME", ""),
                password: var_or("MAIL_PASSWORD", ""),
            },
            testing: flag("TESTING", false),
            static_dir: PathBuf::from(var_or("STATIC_DIR", "static")),
            bind_address: var_or("BIND_ADDRESS", "127.0.0.1:3000"),
        })
    }
}
