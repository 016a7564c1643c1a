use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::{get, post, put};
use axum::{Json, Router};
use serde_json::json;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::state::AppState;
use crate::{alerts, chat, donations, export, users};

/// The full application router. Built here rather than in the binary so
/// integration tests can drive it in-process.
pub fn router(state: AppState) -> Router {
    let api = Router::new()
        .route("/users", get(users::list_users).post(users::create_user))
        .route("/users/{id}", get(users::get_user))
        .route(
            "/donations",
            get(donations::list_donations).post(donations::create_donation),
        )
        .route(
            "/donations/{id}",
            put(donations::update_donation).delete(donations::delete_donation),
        )
        .route("/donations/match", post(donations::match_donations))
        .route("/alerts", get(alerts::list_alerts).post(alerts::create_alert))
        .route("/alerts/active", get(alerts::list_active_alerts))
        .route(
            "/alerts/{id}",
            put(alerts::update_alert).delete(alerts::delete_alert),
        )
        .route("/alerts/demo", post(alerts::demo_alert))
        .route("/alerts/generate-weather", post(alerts::generate_weather_alert))
        .route("/chat/messages", get(chat::list_messages))
        .route("/chat/send", post(chat::send_message))
        .route("/export/json", get(export::export_json))
        .method_not_allowed_fallback(method_not_allowed)
        .with_state(state);

    Router::new()
        .nest("/api", api)
        .fallback(not_found)
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
}

async fn method_not_allowed() -> impl IntoResponse {
    (
        StatusCode::METHOD_NOT_ALLOWED,
        Json(json!({ "message": "Method Not Allowed" })),
    )
}

async fn not_found() -> impl IntoResponse {
    (
        StatusCode::NOT_FOUND,
        Json(json!({ "message": "Route not found" })),
    )
}
