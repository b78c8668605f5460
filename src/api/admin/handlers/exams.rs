use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use uuid::Uuid;

use crate::api::admin::helpers::{exam_summary, exam_to_response};
use crate::api::errors::ApiError;
use crate::api::validation::{require_non_empty, validate_payload};
use crate::core::state::AppState;
use crate::core::time::primitive_now_utc;
use crate::db::is_unique_violation;
use crate::repositories;
use crate::repositories::exams::CreateExam;
use crate::schemas::admin::{ExamCreate, ExamResponse, ExamSummary};
use crate::schemas::MessageResponse;

const DUPLICATE_EXAM: &str = "Exam already exists for this course";

pub(in crate::api::admin) async fn create_exam(
    State(state): State<AppState>,
    Json(payload): Json<ExamCreate>,
) -> Result<(StatusCode, Json<ExamResponse>), ApiError> {
    validate_payload(&payload)?;
    let course = require_non_empty(&payload.course, "course")?;

    let event = repositories::events::find_by_id(state.db(), &payload.event_id)
        .await
        .map_err(|e| ApiError::internal(e, "Failed to fetch exam event"))?
        .filter(|event| !event.is_deleted)
        .ok_or_else(|| ApiError::NotFound("Exam event not found".to_string()))?;

    let existing = repositories::exams::find_by_event_and_course(state.db(), &event.id, course)
        .await
        .map_err(|e| ApiError::internal(e, "Failed to check existing exam"))?;
    if existing.is_some() {
        return Err(ApiError::Conflict(DUPLICATE_EXAM.to_string()));
    }

    let exam = repositories::exams::create(
        state.db(),
        CreateExam {
            id: &Uuid::new_v4().to_string(),
            event_id: &event.id,
            course,
            created_at: primitive_now_utc(),
        },
    )
    .await
    .map_err(|e| {
        if is_unique_violation(&e) {
            ApiError::Conflict(DUPLICATE_EXAM.to_string())
        } else {
            ApiError::internal(e, "Failed to create exam")
        }
    })?;

    tracing::info!(exam_id = %exam.id, event_id = %exam.event_id, course = %exam.course, "Exam created");

    Ok((StatusCode::CREATED, Json(exam_to_response(exam))))
}

pub(in crate::api::admin) async fn list_event_exams(
    State(state): State<AppState>,
    Path(event_id): Path<String>,
) -> Result<Json<Vec<ExamSummary>>, ApiError> {
    let rows = repositories::exams::list_by_event_with_counts(state.db(), &event_id)
        .await
        .map_err(|e| ApiError::internal(e, "Failed to list exams"))?;

    Ok(Json(rows.into_iter().map(exam_summary).collect()))
}

pub(in crate::api::admin) async fn delete_exam(
    State(state): State<AppState>,
    Path(exam_id): Path<String>,
) -> Result<Json<MessageResponse>, ApiError> {
    let mut tx = state
        .db()
        .begin()
        .await
        .map_err(|e| ApiError::internal(e, "Failed to start transaction"))?;

    let deleted = repositories::exams::delete_cascade(&mut *tx, &exam_id)
        .await
        .map_err(|e| ApiError::internal(e, "Failed to delete exam"))?;
    if !deleted {
        return Err(ApiError::NotFound("Exam not found".to_string()));
    }

    tx.commit().await.map_err(|e| ApiError::internal(e, "Failed to commit transaction"))?;

    tracing::info!(exam_id = %exam_id, "Exam deleted");

    Ok(Json(MessageResponse::new("Exam deleted")))
}
