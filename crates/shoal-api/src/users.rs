use axum::Json;
use axum::extract::{Path, Query, State};
use axum::response::{IntoResponse, Response};
use serde::Deserialize;

use shoal_types::api::CreateUserRequest;

use crate::error::ApiError;
use crate::extract::ApiJson;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct UserListQuery {
    pub id: Option<i64>,
}

pub async fn create_user(
    State(state): State<AppState>,
    ApiJson(req): ApiJson<CreateUserRequest>,
) -> impl IntoResponse {
    Json(state.store.create_user(req))
}

pub async fn get_user(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, ApiError> {
    let user = state
        .store
        .get_user(id)
        .ok_or_else(|| ApiError::NotFound("User not found".to_string()))?;
    Ok(Json(user))
}

/// `?id=` is the query-string spelling of the path lookup, kept for the
/// front-end's older fetch helpers; without it, the full list.
pub async fn list_users(
    State(state): State<AppState>,
    Query(query): Query<UserListQuery>,
) -> Result<Response, ApiError> {
    match query.id {
        Some(id) => {
            let user = state
                .store
                .get_user(id)
                .ok_or_else(|| ApiError::NotFound("User not found".to_string()))?;
            Ok(Json(user).into_response())
        }
        None => Ok(Json(state.store.get_users()).into_response()),
    }
}
