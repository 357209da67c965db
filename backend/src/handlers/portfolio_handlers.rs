use axum::Json;

use crate::models::portfolio_models::{Portfolio, PORTFOLIO};

pub async fn get_portfolio() -> Json<Portfolio> {
    Json(PORTFOLIO.clone())
}
