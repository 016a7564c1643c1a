use axum::Json;
use axum::extract::{Query, State};
use axum::response::IntoResponse;
use serde::Deserialize;

use shoal_store::NewChatMessage;
use shoal_types::api::ChatSendRequest;

use crate::extract::ApiJson;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatListQuery {
    pub user_id: Option<i64>,
}

pub async fn list_messages(
    State(state): State<AppState>,
    Query(query): Query<ChatListQuery>,
) -> impl IntoResponse {
    Json(state.store.get_chat_messages(query.user_id))
}

/// Persist the person's message, ask the assistant, persist the reply.
/// Two sequential store writes, no rollback — if the assistant degrades to
/// its fallback the exchange is still recorded and the request still
/// succeeds.
pub async fn send_message(
    State(state): State<AppState>,
    ApiJson(req): ApiJson<ChatSendRequest>,
) -> impl IntoResponse {
    let language = req.language.unwrap_or_else(|| "en".to_string());

    state.store.create_chat_message(NewChatMessage {
        user_id: req.user_id,
        message: req.message.clone(),
        is_user: true,
        language: Some(language.clone()),
    });

    let reply = state.assistant.reply(&req.message, &language).await;

    state.store.create_chat_message(NewChatMessage {
        user_id: req.user_id,
        message: reply.message.clone(),
        is_user: false,
        language: Some(reply.language.clone()),
    });

    Json(reply)
}
