//! tests/api/helpers.rs

use std::path::PathBuf;
use std::sync::Arc;

use backend::config::app_config::{Config, MailSettings};
use backend::utils::mailer::Mailer;
use backend::{startup, AppState};
use tokio::net::TcpListener;

pub struct TestApp {
    pub address: String,
    pub client: reqwest::Client,
}

impl TestApp {
    pub async fn post_contact(&self, body: &serde_json::Value) -> reqwest::Response {
        self.client
            .post(format!("{}/api/contact", self.address))
            .json(body)
            .send()
            .await
            .expect("Failed to execute request.")
    }

    pub async fn post_contact_raw(&self, content_type: &str, body: &'static str) -> reqwest::Response {
        self.client
            .post(format!("{}/api/contact", self.address))
            .header("Content-Type", content_type)
            .body(body)
            .send()
            .await
            .expect("Failed to execute request.")
    }

    pub async fn get(&self, path: &str) -> reqwest::Response {
        self.client
            .get(format!("{}{}", self.address, path))
            .send()
            .await
            .expect("Failed to execute request.")
    }
}

/// Console mailer, fixture page, nothing leaves the machine.
pub fn test_config() -> Config {
    Config {
        mail: MailSettings {
            server: "localhost".to_string(),
            port: 2525,
            use_tls: false,
            username: String::new(),
            password: String::new(),
        },
        testing: true,
        static_dir: PathBuf::from("tests/fixtures"),
        bind_address: "127.0.0.1:0".to_string(),
    }
}

pub async fn spawn_app() -> TestApp {
    spawn_app_with(test_config()).await
}

pub async fn spawn_app_with(config: Config) -> TestApp {
    let listener = TcpListener::bind(&config.bind_address)
        .await
        .expect("Failed to bind random port");
    let port = listener.local_addr().unwrap().port();

    let mailer = Mailer::from_config(&config).expect("Failed to build mailer");
    let state = Arc::new(AppState { config, mailer });
    tokio::spawn(startup::run(listener, state));

    TestApp {
        address: format!("http://127.0.0.1:{}", port),
        client: reqwest::Client::new(),
    }
}
