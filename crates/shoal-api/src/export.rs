use axum::Json;
use axum::extract::State;
use axum::http::header;
use axum::response::IntoResponse;
use chrono::{DateTime, Utc};
use serde::Serialize;

use shoal_types::models::{Alert, ChatMessage, Donation, DonationStatus, User};

use crate::state::AppState;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ExportDocument {
    export_date: DateTime<Utc>,
    platform: &'static str,
    version: &'static str,
    data: ExportData,
    statistics: ExportStatistics,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ExportData {
    users: Vec<User>,
    donations: Vec<Donation>,
    alerts: Vec<Alert>,
    chat_messages: Vec<ChatMessage>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ExportStatistics {
    total_users: usize,
    total_donations: usize,
    total_alerts: usize,
    total_messages: usize,
    total_fish_donated: i64,
    active_donations: usize,
    active_alerts: usize,
}

/// Full-dataset snapshot plus aggregate statistics, served as a download.
pub async fn export_json(State(state): State<AppState>) -> impl IntoResponse {
    let users = state.store.get_users();
    let donations = state.store.get_donations();
    let alerts = state.store.get_alerts();
    let chat_messages = state.store.get_chat_messages(None);

    let statistics = ExportStatistics {
        total_users: users.len(),
        total_donations: donations.len(),
        total_alerts: alerts.len(),
        total_messages: chat_messages.len(),
        total_fish_donated: donations.iter().map(|d| d.quantity).sum(),
        active_donations: donations
            .iter()
            .filter(|d| d.status == DonationStatus::Pending)
            .count(),
        active_alerts: alerts.iter().filter(|a| a.active).count(),
    };

    let document = ExportDocument {
        export_date: Utc::now(),
        platform: "Shoal Fish Donation Network",
        version: env!("CARGO_PKG_VERSION"),
        data: ExportData {
            users,
            donations,
            alerts,
            chat_messages,
        },
        statistics,
    };

    (
        [(
            header::CONTENT_DISPOSITION,
            "attachment; filename=\"shoal-data.json\"",
        )],
        Json(document),
    )
}
