use std::sync::Arc;

use axum::{
    body::Bytes,
    extract::State,
    http::{header, HeaderMap, StatusCode},
    Json,
};
use serde_json::{json, Value};
use tracing::{error, info, warn};

use crate::models::contact_models::ContactRequest;
use crate::AppState;

/// `application/json` or any `application/*+json`, parameters ignored.
fn is_json(headers: &HeaderMap) -> bool {
    let Some(value) = headers.get(header::CONTENT_TYPE).and_then(|v| v.to_str().ok()) else {
        return false;
    };
    let mime = value.split(';').next().unwrap_or_default().trim().to_ascii_lowercase();
    mime == "application/json" || (mime.starts_with("application/") && mime.ends_with("+json"))
}

/// `POST /api/contact`. The body is read leniently: a non-JSON content type
/// or a malformed document is validated as if every field were empty.
pub async fn submit_contact(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<Json<Value>, (StatusCode, Json<Value>)> {
    let document = if is_json(&headers) {
        serde_json::from_slice(&body).unwrap_or_else(|e| {
            warn!("Unreadable contact body: {}", e);
            Value::Null
        })
    } else {
        warn!("Contact body is not JSON: {:?}", headers.get(header::CONTENT_TYPE));
        Value::Null
    };
    let request = ContactRequest::from_json(&document);

    let message = request.validate().map_err(|errors| {
        info!("Rejected contact submission: {:?}", errors);
        (
            StatusCode::BAD_REQUEST,
            Json(json!({"success": false, "errors": errors})),
        )
    })?;

    match state.mailer.send(&message).await {
        Ok(()) => Ok(Json(json!({
            "success": true,
            "message": "Message sent successfully."
        }))),
        Err(e) => {
            error!("Failed to send contact email: {}", e);
            Err((
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({
                    "success": false,
                    "error": "Failed to send your message. Please try again later."
                })),
            ))
        }
    }
}
