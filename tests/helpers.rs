use std::sync::Arc;

use axum::{
    Router,
    routing::{get, post},
};
use chrono::NaiveDate;

use warranty_checker::{
    app_state::AppState,
    auth::handlers::{login, signup},
    clock::FixedClock,
    health,
    items::handlers::{create_item, delete_item, get_item, list_items, update_item},
};

/// Full application router over fresh in-memory stores, with "today"
/// pinned so warranty assertions are deterministic.
pub fn test_app(today: NaiveDate) -> Router {
    let state = AppState::with_clock(Arc::new(FixedClock(today)));

    Router::new()
        .route("/healthz", get(health::health_check))
        .route("/auth/signup", post(signup))
        .route("/auth/login", post(login))
        .route("/items", get(list_items))
        .route("/items/create", post(create_item))
        .route(
            "/items/{id}",
            get(get_item).put(update_item).delete(delete_item),
        )
        .with_state(state)
}

pub fn fixed_today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 1, 1).unwrap()
}
