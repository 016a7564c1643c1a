use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub avatar: Option<String>,
    pub role: String,
    pub created_at: DateTime<Utc>,
}

/// A listing is either surplus fish offered up ("donation") or a community
/// asking for fish ("request"). Matching pairs one against the other.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DonationKind {
    Donation,
    Request,
}

impl DonationKind {
    pub fn opposite(self) -> Self {
        match self {
            DonationKind::Donation => DonationKind::Request,
            DonationKind::Request => DonationKind::Donation,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Urgency {
    Low,
    Medium,
    High,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DonationStatus {
    Pending,
    Matched,
    Completed,
    Cancelled,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Donation {
    pub id: i64,
    /// Owner reference. Not validated against the users table; deleting a
    /// user leaves its donations behind with a dangling id.
    pub user_id: i64,
    #[serde(rename = "type")]
    pub kind: DonationKind,
    pub fish_type: String,
    /// Kilograms.
    pub quantity: i64,
    /// Free-text location. Exact string equality on this field is the
    /// entire matching key — no normalization of case or whitespace.
    pub location: String,
    pub contact_info: Option<String>,
    pub urgency: Urgency,
    pub description: Option<String>,
    pub status: DonationStatus,
    /// Schema carry-over from the front-end contract. Matching is advisory
    /// and never writes this; it only changes through a client update.
    pub matched_with: Option<i64>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AlertKind {
    Weather,
    Disaster,
    Info,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Low,
    Medium,
    High,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Alert {
    pub id: i64,
    #[serde(rename = "type")]
    pub kind: AlertKind,
    pub message: String,
    pub severity: Severity,
    pub location: Option<String>,
    pub active: bool,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatMessage {
    pub id: i64,
    pub user_id: Option<i64>,
    pub message: String,
    /// True for the person's message, false for the assistant's reply.
    pub is_user: bool,
    pub language: Option<String>,
    pub created_at: DateTime<Utc>,
}
