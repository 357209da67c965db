//! tests/api/contact.rs

use serde_json::{json, Value};

use crate::helpers::{spawn_app, spawn_app_with, test_config};

#[tokio::test]
async fn contact_returns_200_for_valid_submission() {
    let app = spawn_app().await;

    let response = app
        .post_contact(&json!({"name": "A", "email": "a@b.com", "subject": "", "message": "hi"}))
        .await;

    assert_eq!(200, response.status().as_u16());
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["success"], true);
    assert_eq!(body["message"], "Message sent successfully.");
}

#[tokio::test]
async fn contact_returns_400_when_fields_are_missing() {
    let app = spawn_app().await;
    let test_cases = vec![
        (json!({"email": "a@b.com", "message": "hi"}), "name"),
        (json!({"name": "A", "message": "hi"}), "email"),
        (json!({"name": "A", "email": "a@b.com"}), "message"),
        (json!({"name": "   ", "email": "a@b.com", "message": "hi"}), "name"),
        (json!({"name": null, "email": "a@b.com", "message": "hi"}), "name"),
    ];

    for (payload, field) in test_cases {
        let response = app.post_contact(&payload).await;

        assert_eq!(
            400,
            response.status().as_u16(),
            "The API did not fail with 400 when {} was missing: {}",
            field,
            payload
        );
        let body: Value = response.json().await.unwrap();
        assert_eq!(body["success"], false);
        assert!(body["errors"][field].is_string(), "no error reported for {}", field);
    }
}

#[tokio::test]
async fn contact_returns_400_when_fields_are_present_but_invalid() {
    let app = spawn_app().await;
    let long_name = "n".repeat(121);
    let long_subject = "s".repeat(201);
    let long_message = "m".repeat(5001);
    let test_cases = vec![
        (json!({"name": "A", "email": "not_an_email", "message": "hi"}), "email", "Invalid email address."),
        (json!({"name": "A", "email": "a@b..com", "message": "hi"}), "email", "Invalid email address."),
        (json!({"name": "A", "email": ".a@b.com", "message": "hi"}), "email", "Invalid email address."),
        (json!({"name": long_name, "email": "a@b.com", "message": "hi"}), "name", "Name must be under 120 characters."),
        (json!({"name": "A", "email": "a@b.com", "subject": long_subject, "message": "hi"}), "subject", "Subject must be under 200 characters."),
        (json!({"name": "A", "email": "a@b.com", "message": long_message}), "message", "Message must be under 5,000 characters."),
    ];

    for (payload, field, expected) in test_cases {
        let response = app.post_contact(&payload).await;

        assert_eq!(400, response.status().as_u16(), "expected 400 for invalid {}", field);
        let body: Value = response.json().await.unwrap();
        assert_eq!(body["errors"][field], expected);
    }
}

#[tokio::test]
async fn malformed_body_is_treated_as_empty() {
    let app = spawn_app().await;

    let response = app.post_contact_raw("application/json", "{not json").await;

    assert_eq!(400, response.status().as_u16());
    let body: Value = response.json().await.unwrap();
    let errors = body["errors"].as_object().unwrap();
    assert_eq!(errors.len(), 3);
    assert_eq!(body["errors"]["email"], "Email is required.");
}

#[tokio::test]
async fn wrongly_typed_field_is_reported_on_its_own() {
    let app = spawn_app().await;

    let response = app
        .post_contact(&json!({"name": 5, "email": "a@b.com", "message": "hi"}))
        .await;

    assert_eq!(400, response.status().as_u16());
    let body: Value = response.json().await.unwrap();
    let errors = body["errors"].as_object().unwrap();
    assert_eq!(errors.len(), 1, "unexpected errors: {:?}", errors);
    assert_eq!(body["errors"]["name"], "Name is required.");
}

#[tokio::test]
async fn non_json_content_type_is_treated_as_empty() {
    let app = spawn_app().await;

    let response = app
        .post_contact_raw("text/plain", r#"{"name": "A", "email": "a@b.com", "message": "hi"}"#)
        .await;

    assert_eq!(400, response.status().as_u16());
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["errors"].as_object().unwrap().len(), 3);
}

#[tokio::test]
async fn bad_mailbox_on_smtp_path_is_a_400_not_a_500() {
    let mut config = test_config();
    config.testing = false;
    let app = spawn_app_with(config).await;

    let response = app
        .post_contact(&json!({"name": "A", "email": "a.@b.com", "message": "hi"}))
        .await;

    assert_eq!(400, response.status().as_u16());
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["errors"]["email"], "Invalid email address.");
}

#[tokio::test]
async fn contact_returns_500_when_mail_cannot_be_sent() {
    let mut config = test_config();
    config.testing = false; // real SMTP path, but MAIL_USERNAME is empty
    let app = spawn_app_with(config).await;

    let response = app
        .post_contact(&json!({"name": "A", "email": "a@b.com", "message": "hi"}))
        .await;

    assert_eq!(500, response.status().as_u16());
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["success"], false);
    assert_eq!(body["error"], "Failed to send your message. Please try again later.");
}
