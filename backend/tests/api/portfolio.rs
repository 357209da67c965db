//! tests/api/portfolio.rs

use crate::helpers::spawn_app;

#[tokio::test]
async fn portfolio_lists_skills_and_projects() {
    let app = spawn_app().await;

    let response = app.get("/api/portfolio").await;
    assert_eq!(200, response.status().as_u16());

    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body["name"], "May Sigrid Dimaano");
    assert_eq!(body["skills"].as_array().unwrap().len(), 5);
    assert_eq!(body["skills"][0]["level"], 90);

    let projects = body["projects"].as_array().unwrap();
    assert_eq!(projects.len(), 3);
    assert!(projects
        .iter()
        .all(|p| p["technologies"].as_array().map_or(false, |t| !t.is_empty())));
}
