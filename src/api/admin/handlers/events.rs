use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use uuid::Uuid;

use crate::api::admin::helpers::event_to_response;
use crate::api::errors::ApiError;
use crate::api::validation::{event_details, require_non_empty};
use crate::core::state::AppState;
use crate::core::time::primitive_now_utc;
use crate::repositories;
use crate::repositories::events::CreateEvent;
use crate::schemas::admin::{EventCreate, EventDetailsInput, EventResponse, EventStatusUpdate};
use crate::schemas::MessageResponse;

const EVENT_NOT_FOUND: &str = "Exam event not found";

pub(in crate::api::admin) async fn create_event(
    State(state): State<AppState>,
    Json(payload): Json<EventCreate>,
) -> Result<(StatusCode, Json<EventResponse>), ApiError> {
    let college_id = require_non_empty(&payload.college_id, "college_id")?.to_string();
    let details = event_details(payload.details)?;

    repositories::colleges::find_by_id(state.db(), &college_id)
        .await
        .map_err(|e| ApiError::internal(e, "Failed to fetch college"))?
        .ok_or_else(|| ApiError::NotFound("College not found".to_string()))?;

    let event = repositories::events::create(
        state.db(),
        CreateEvent {
            id: &Uuid::new_v4().to_string(),
            college_id: &college_id,
            details,
            now: primitive_now_utc(),
        },
    )
    .await
    .map_err(|e| ApiError::internal(e, "Failed to create exam event"))?;

    tracing::info!(event_id = %event.id, college_id = %event.college_id, "Exam event created");

    Ok((StatusCode::CREATED, Json(event_to_response(event))))
}

pub(in crate::api::admin) async fn update_event(
    State(state): State<AppState>,
    Path(event_id): Path<String>,
    Json(payload): Json<EventDetailsInput>,
) -> Result<Json<EventResponse>, ApiError> {
    let details = event_details(payload)?;

    let event =
        repositories::events::update_details(state.db(), &event_id, details, primitive_now_utc())
            .await
            .map_err(|e| ApiError::internal(e, "Failed to update exam event"))?
            .ok_or_else(|| ApiError::NotFound(EVENT_NOT_FOUND.to_string()))?;

    Ok(Json(event_to_response(event)))
}

pub(in crate::api::admin) async fn update_event_status(
    State(state): State<AppState>,
    Path(event_id): Path<String>,
    Json(payload): Json<EventStatusUpdate>,
) -> Result<Json<EventResponse>, ApiError> {
    let is_active = payload.resolve().ok_or_else(|| {
        ApiError::BadRequest("is_active (or status YES/NO) is required".to_string())
    })?;

    let event =
        repositories::events::set_active(state.db(), &event_id, is_active, primitive_now_utc())
            .await
            .map_err(|e| ApiError::internal(e, "Failed to update exam event status"))?
            .ok_or_else(|| ApiError::NotFound(EVENT_NOT_FOUND.to_string()))?;

    tracing::info!(event_id = %event.id, is_active, "Exam event status changed");

    Ok(Json(event_to_response(event)))
}

pub(in crate::api::admin) async fn delete_event(
    State(state): State<AppState>,
    Path(event_id): Path<String>,
) -> Result<Json<MessageResponse>, ApiError> {
    let deleted = repositories::events::soft_delete(state.db(), &event_id, primitive_now_utc())
        .await
        .map_err(|e| ApiError::internal(e, "Failed to delete exam event"))?;
    if !deleted {
        return Err(ApiError::NotFound(EVENT_NOT_FOUND.to_string()));
    }

    Ok(Json(MessageResponse::new("Exam event deleted")))
}

pub(in crate::api::admin) async fn list_college_events(
    State(state): State<AppState>,
    Path(college_id): Path<String>,
) -> Result<Json<Vec<EventResponse>>, ApiError> {
    let events = repositories::events::list_by_college(state.db(), &college_id)
        .await
        .map_err(|e| ApiError::internal(e, "Failed to list exam events"))?;

    Ok(Json(events.into_iter().map(event_to_response).collect()))
}
