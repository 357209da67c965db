use std::sync::Arc;

use dotenvy::dotenv;
use tokio::net::TcpListener;
use tracing::info;

use backend::config::app_config::Config;
use backend::utils::mailer::Mailer;
use backend::{startup, AppState};

#[tokio::main]
async fn main() {
    dotenv().ok();

    // Initialize tracing
    backend::init_tracing();

    let config = Config::from_env().expect("Invalid configuration");
    let mailer = Mailer::from_config(&config).expect("Failed to set up mailer");
    if config.testing {
        info!("TESTING is on, contact emails are logged instead of sent");
    }

    let listener = TcpListener::bind(&config.bind_address).await.unwrap();
    info!("Serving {} on {}", config.static_dir.display(), config.bind_address);

    let state = Arc::new(AppState { config, mailer });
    startup::run(listener, state).await.unwrap();
}
