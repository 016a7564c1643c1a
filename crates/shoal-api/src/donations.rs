use axum::Json;
use axum::extract::{Path, Query, State};
use axum::response::IntoResponse;
use serde::Deserialize;
use serde_json::json;

use shoal_types::api::{CreateDonationRequest, MatchRequest, MatchResponse, UpdateDonationRequest};

use crate::error::ApiError;
use crate::extract::ApiJson;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DonationListQuery {
    pub user_id: Option<i64>,
}

pub async fn list_donations(
    State(state): State<AppState>,
    Query(query): Query<DonationListQuery>,
) -> impl IntoResponse {
    let donations = match query.user_id {
        Some(user_id) => state.store.get_donations_by_user(user_id),
        None => state.store.get_donations(),
    };
    Json(donations)
}

pub async fn create_donation(
    State(state): State<AppState>,
    ApiJson(req): ApiJson<CreateDonationRequest>,
) -> impl IntoResponse {
    Json(state.store.create_donation(req))
}

pub async fn update_donation(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    ApiJson(req): ApiJson<UpdateDonationRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let donation = state.store.update_donation(id, req)?;
    Ok(Json(donation))
}

pub async fn delete_donation(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> impl IntoResponse {
    state.store.delete_donation(id);
    Json(json!({ "message": "Donation deleted successfully" }))
}

/// Advisory matching: returns counterpart candidates without touching any
/// donation's status.
pub async fn match_donations(
    State(state): State<AppState>,
    ApiJson(req): ApiJson<MatchRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let matches = state.store.match_candidates(req.donation_id)?;
    Ok(Json(MatchResponse { matches }))
}
