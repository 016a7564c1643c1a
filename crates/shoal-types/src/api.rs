use serde::{Deserialize, Serialize};

use crate::models::{AlertKind, Donation, DonationKind, DonationStatus, Severity, Urgency};

// -- Users --

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct CreateUserRequest {
    pub name: String,
    pub email: String,
    pub avatar: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct UpdateUserRequest {
    pub name: Option<String>,
    pub email: Option<String>,
    pub avatar: Option<String>,
    pub role: Option<String>,
}

// -- Donations --

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct CreateDonationRequest {
    pub user_id: i64,
    #[serde(rename = "type")]
    pub kind: DonationKind,
    pub fish_type: String,
    pub quantity: i64,
    pub location: String,
    pub contact_info: Option<String>,
    pub urgency: Option<Urgency>,
    pub description: Option<String>,
    pub status: Option<DonationStatus>,
    pub matched_with: Option<i64>,
}

/// Partial update: only supplied fields are overwritten.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct UpdateDonationRequest {
    pub user_id: Option<i64>,
    #[serde(rename = "type")]
    pub kind: Option<DonationKind>,
    pub fish_type: Option<String>,
    pub quantity: Option<i64>,
    pub location: Option<String>,
    pub contact_info: Option<String>,
    pub urgency: Option<Urgency>,
    pub description: Option<String>,
    pub status: Option<DonationStatus>,
    pub matched_with: Option<i64>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct MatchRequest {
    pub donation_id: i64,
}

#[derive(Debug, Serialize)]
pub struct MatchResponse {
    pub matches: Vec<Donation>,
}

// -- Alerts --

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct CreateAlertRequest {
    #[serde(rename = "type")]
    pub kind: AlertKind,
    pub message: String,
    pub severity: Option<Severity>,
    pub location: Option<String>,
    pub active: Option<bool>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct UpdateAlertRequest {
    #[serde(rename = "type")]
    pub kind: Option<AlertKind>,
    pub message: Option<String>,
    pub severity: Option<Severity>,
    pub location: Option<String>,
    pub active: Option<bool>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct GenerateWeatherAlertRequest {
    pub location: String,
    pub condition: String,
    pub severity: Option<Severity>,
}

// -- Chat --

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct ChatSendRequest {
    pub message: String,
    pub user_id: Option<i64>,
    pub language: Option<String>,
}

/// What the assistant came back with. `intent` is the assistant's own
/// classification of the question (weather, law, practice, donation,
/// safety, general) or "error" when the fallback branch was taken.
#[derive(Debug, Clone, Serialize)]
pub struct ChatReply {
    pub message: String,
    pub language: String,
    pub intent: String,
}
