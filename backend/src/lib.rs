use tracing_subscriber::EnvFilter;

pub mod config {
    pub mod app_config;
}
pub mod handlers {
    pub mod contact_handlers;
    pub mod portfolio_handlers;
}
pub mod models {
    pub mod contact_models;
    pub mod portfolio_models;
}
pub mod utils {
    pub mod mailer;
}
pub mod startup;

use config::app_config::Config;
use utils::mailer::Mailer;

pub struct AppState {
    pub config: Config,
    pub mailer: Mailer,
}

/// `RUST_LOG` wins when set, `info` otherwise.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}
