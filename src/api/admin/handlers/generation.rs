use axum::{
    extract::{Path, State},
    Json,
};

use crate::api::errors::ApiError;
use crate::api::validation::question_count;
use crate::core::state::AppState;
use crate::db::types::{EventType, ExamStatus};
use crate::repositories;
use crate::schemas::admin::{GenerateQuestionsRequest, GenerateQuestionsResponse};

/// Fills a draft exam with generated questions and marks it ready. Walk-in
/// events get stream questions, everything else course questions. A missing
/// or unreadable body falls back to the configured default count.
pub(in crate::api::admin) async fn generate_questions(
    State(state): State<AppState>,
    Path(exam_id): Path<String>,
    payload: Option<Json<GenerateQuestionsRequest>>,
) -> Result<Json<GenerateQuestionsResponse>, ApiError> {
    let request = payload.map(|Json(request)| request).unwrap_or_default();
    let count = question_count(request.question_count, state.settings().generation())?;

    let exam = repositories::exams::find_with_event(state.db(), &exam_id)
        .await
        .map_err(|e| ApiError::internal(e, "Failed to fetch exam"))?
        .ok_or_else(|| ApiError::NotFound("Exam not found".to_string()))?;

    if exam.exam_status != ExamStatus::Draft {
        return Err(ApiError::Conflict("Questions already generated".to_string()));
    }

    let generator = state.generator();
    let generated = match exam.event_type {
        Some(EventType::Walkin) => generator.generate_questions_for_stream(&exam.course, count).await,
        _ => generator.generate_questions_for_course(&exam.course, count).await,
    };
    let questions = generated.map_err(|err| {
        tracing::error!(
            exam_id = %exam.id,
            course = %exam.course,
            kind = err.kind(),
            error = %err,
            "Question generation failed"
        );
        ApiError::BadGateway("Question generation failed")
    })?;

    let mut tx = state
        .db()
        .begin()
        .await
        .map_err(|e| ApiError::internal(e, "Failed to start transaction"))?;

    repositories::questions::insert_generated(&mut *tx, &exam.id, &questions)
        .await
        .map_err(|e| ApiError::internal(e, "Failed to store generated questions"))?;

    let marked = repositories::exams::mark_ready(&mut *tx, &exam.id)
        .await
        .map_err(|e| ApiError::internal(e, "Failed to update exam status"))?;
    if !marked {
        return Err(ApiError::Conflict("Questions already generated".to_string()));
    }

    tx.commit().await.map_err(|e| ApiError::internal(e, "Failed to commit transaction"))?;

    tracing::info!(
        exam_id = %exam.id,
        requested = count,
        generated = questions.len(),
        "Exam questions generated"
    );

    Ok(Json(GenerateQuestionsResponse {
        exam_id: exam.id,
        exam_status: ExamStatus::Ready,
        requested: count,
        generated: questions.len(),
    }))
}
