use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};
use tokio::net::TcpListener;
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;

use crate::handlers::{contact_handlers, portfolio_handlers};
use crate::AppState;

async fn health_check() -> &'static str {
    "OK"
}

/// API routes plus the page itself (HTML, CSS, wasm bundle) from `static_dir`.
pub fn app(state: Arc<AppState>) -> Router {
    let static_files = ServeDir::new(&state.config.static_dir);

    Router::new()
        .route("/api/health", get(health_check))
        .route("/api/portfolio", get(portfolio_handlers::get_portfolio))
        .route("/api/contact", post(contact_handlers::submit_contact))
        .fallback_service(static_files)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        .layer(
            CorsLayer::new()
                .allow_methods([
                    axum::http::Method::GET,
                    axum::http::Method::POST,
                    axum::http::Method::OPTIONS,
                ])
                .allow_origin(Any) // the debug frontend runs on its own dev server
                .allow_headers([axum::http::header::CONTENT_TYPE]),
        )
        .with_state(state)
}

pub async fn run(listener: TcpListener, state: Arc<AppState>) -> std::io::Result<()> {
    axum::serve(listener, app(state).into_make_service()).await
}
