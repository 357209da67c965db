//! tests/api/health_check.rs

use crate::helpers::spawn_app;

#[tokio::test]
async fn health_check_works() {
    let app = spawn_app().await;

    let response = app.get("/api/health").await;

    assert!(response.status().is_success());
    assert_eq!(response.text().await.unwrap(), "OK");
}

#[tokio::test]
async fn page_is_served_from_static_dir() {
    let app = spawn_app().await;

    let response = app.get("/").await;

    assert_eq!(200, response.status().as_u16());
    let html = response.text().await.unwrap();
    assert!(html.contains("class=\"typing\""));
}

#[tokio::test]
async fn unknown_static_path_is_404() {
    let app = spawn_app().await;

    let response = app.get("/nope.css").await;

    assert_eq!(404, response.status().as_u16());
}
