use axum::{
    Json,
    extract::{
        Path, Query, State,
        rejection::{JsonRejection, QueryRejection},
    },
    http::StatusCode,
    response::IntoResponse,
};
use chrono::Utc;
use tracing::info;
use uuid::Uuid;

use cricconnect_db::Database;
use cricconnect_types::api::{DataEnvelope, Empty, MessagePage, SendMessageRequest};
use cricconnect_types::models::ChatMessage;

use crate::error::ApiError;
use crate::pagination::{PageQuery, PageRequest};
use crate::presentation::to_response;
use crate::state::{AppState, run_blocking};
use crate::validation::validate_message;

/// One page of messages, oldest first within the page.
///
/// The store returns the page newest first; it is reversed here so a client
/// can append it directly to a chat log. Only the first page lines up with
/// the end of the global timeline.
pub fn fetch_page(db: &Database, req: PageRequest) -> anyhow::Result<(Vec<ChatMessage>, u64)> {
    let (mut messages, total) = db.list_page(req.limit, req.page)?;
    messages.reverse();
    Ok((messages, total))
}

/// GET /api/messages
pub async fn get_messages(
    State(state): State<AppState>,
    query: Result<Query<PageQuery>, QueryRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let Query(query) = query.map_err(ApiError::from)?;
    let req = query.parse(state.config.max_page_limit)?;

    let context = "Server error while fetching chat messages";
    let (messages, total) = run_blocking(&state, context, move |db| fetch_page(db, req)).await?;

    let now = Utc::now();
    let data: Vec<_> = messages.into_iter().map(|m| to_response(m, now)).collect();

    Ok(Json(MessagePage {
        success: true,
        count: data.len(),
        total,
        page: req.page,
        pages: req.page_count(total),
        data,
    }))
}

/// POST /api/messages
pub async fn send_message(
    State(state): State<AppState>,
    payload: Result<Json<SendMessageRequest>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let Json(req) = payload.map_err(ApiError::from)?;
    let new = validate_message(req)?;

    let message = run_blocking(&state, "Server error while creating chat message", move |db| {
        db.insert_message(&new.username, &new.message, new.is_own)
    })
    .await?;

    info!("Message {} posted by {}", message.id, message.username);

    Ok((
        StatusCode::CREATED,
        Json(DataEnvelope::with_message(
            "Chat message created successfully",
            to_response(message, Utc::now()),
        )),
    ))
}

/// DELETE /api/messages/{id}
pub async fn delete_message(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let message_id: Uuid = id.parse().map_err(|_| ApiError::MalformedId(id))?;

    let removed = run_blocking(&state, "Server error while deleting chat message", move |db| {
        db.delete_message(&message_id)
    })
    .await?;

    if !removed {
        return Err(ApiError::NotFound("Chat message not found"));
    }

    info!("Message {} deleted", message_id);
    Ok(Json(DataEnvelope::with_message("Chat message deleted successfully", Empty {})))
}
