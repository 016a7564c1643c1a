use axum::Json;
use axum::extract::{Path, Query, State};
use axum::response::IntoResponse;
use rand::Rng;
use serde::Deserialize;
use serde_json::json;

use shoal_types::api::{CreateAlertRequest, GenerateWeatherAlertRequest, UpdateAlertRequest};
use shoal_types::models::{AlertKind, Severity};

use crate::error::ApiError;
use crate::extract::ApiJson;
use crate::state::AppState;

struct DemoAlert {
    kind: AlertKind,
    message: &'static str,
    severity: Severity,
    location: &'static str,
}

const DEMO_ALERTS: [DemoAlert; 3] = [
    DemoAlert {
        kind: AlertKind::Weather,
        message: "Heavy rainfall expected in coastal areas. Fishing boats advised to return to port immediately.",
        severity: Severity::High,
        location: "Bay of Bengal",
    },
    DemoAlert {
        kind: AlertKind::Info,
        message: "Fish market prices have increased by 15% due to high demand. Good time for donations!",
        severity: Severity::Low,
        location: "Mumbai Fish Market",
    },
    DemoAlert {
        kind: AlertKind::Disaster,
        message: "Cyclone warning issued for next 48 hours. All fishing activities suspended.",
        severity: Severity::High,
        location: "Arabian Sea",
    },
];

#[derive(Debug, Deserialize)]
pub struct AlertListQuery {
    pub active: Option<bool>,
}

pub async fn list_alerts(
    State(state): State<AppState>,
    Query(query): Query<AlertListQuery>,
) -> impl IntoResponse {
    let alerts = if query.active == Some(true) {
        state.store.get_active_alerts()
    } else {
        state.store.get_alerts()
    };
    Json(alerts)
}

pub async fn list_active_alerts(State(state): State<AppState>) -> impl IntoResponse {
    Json(state.store.get_active_alerts())
}

pub async fn create_alert(
    State(state): State<AppState>,
    ApiJson(req): ApiJson<CreateAlertRequest>,
) -> impl IntoResponse {
    Json(state.store.create_alert(req))
}

pub async fn update_alert(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    ApiJson(req): ApiJson<UpdateAlertRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let alert = state.store.update_alert(id, req)?;
    Ok(Json(alert))
}

pub async fn delete_alert(State(state): State<AppState>, Path(id): Path<i64>) -> impl IntoResponse {
    state.store.delete_alert(id);
    Json(json!({ "message": "Alert deleted successfully" }))
}

/// One of three fixed templates, picked at random. Handy for demoing the
/// front-end notification flow without real alert sources.
pub async fn demo_alert(State(state): State<AppState>) -> impl IntoResponse {
    let template = &DEMO_ALERTS[rand::rng().random_range(0..DEMO_ALERTS.len())];
    let alert = state.store.create_alert(CreateAlertRequest {
        kind: template.kind,
        message: template.message.to_string(),
        severity: Some(template.severity),
        location: Some(template.location.to_string()),
        active: Some(true),
    });
    Json(alert)
}

/// Generate alert text for a location/condition via the assistant and store
/// it as a weather alert. The assistant's fallback guarantees this succeeds
/// even when the language-model service is down.
pub async fn generate_weather_alert(
    State(state): State<AppState>,
    ApiJson(req): ApiJson<GenerateWeatherAlertRequest>,
) -> impl IntoResponse {
    let message = state
        .assistant
        .weather_alert(&req.location, &req.condition)
        .await;

    let alert = state.store.create_alert(CreateAlertRequest {
        kind: AlertKind::Weather,
        message,
        severity: req.severity.or(Some(Severity::Medium)),
        location: Some(req.location),
        active: Some(true),
    });
    Json(alert)
}
