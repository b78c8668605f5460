use std::collections::HashSet;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use crate::api::errors::ApiError;
use crate::api::validation::validate_payload;
use crate::core::state::AppState;
use crate::core::time::primitive_now_utc;
use crate::db::is_unique_violation;
use crate::db::models::Question;
use crate::db::types::AnswerOption;
use crate::repositories;
use crate::repositories::attempts::AnswerRecord;
use crate::schemas::attempt::{
    AttemptStatusResponse, ExamSubmission, QuestionView, ResultRequest, ResultResponse,
    SubmittedAnswer,
};
use crate::schemas::MessageResponse;
use crate::services::scoring;

const ALREADY_SUBMITTED: &str = "Exam already submitted";

pub(super) async fn attempt_status(
    State(state): State<AppState>,
    Path((student_id, exam_id)): Path<(String, String)>,
) -> Result<Json<AttemptStatusResponse>, ApiError> {
    let attempted = repositories::attempts::has_attempted(state.db(), &student_id, &exam_id)
        .await
        .map_err(|e| ApiError::internal(e, "Failed to check attempt status"))?;

    Ok(Json(AttemptStatusResponse { attempted }))
}

pub(super) async fn list_questions(
    State(state): State<AppState>,
    Path(exam_id): Path<String>,
) -> Result<Json<Vec<QuestionView>>, ApiError> {
    let questions = repositories::questions::list_for_exam(state.db(), &exam_id)
        .await
        .map_err(|e| ApiError::internal(e, "Failed to fetch questions"))?;

    Ok(Json(questions.into_iter().map(question_view).collect()))
}

pub(super) async fn submit_exam(
    State(state): State<AppState>,
    Json(payload): Json<ExamSubmission>,
) -> Result<(StatusCode, Json<MessageResponse>), ApiError> {
    validate_payload(&payload)?;
    let answers = parse_answers(&payload.answers)?;

    let exam_question_ids: HashSet<String> =
        repositories::questions::list_ids_for_exam(state.db(), &payload.exam_id)
            .await
            .map_err(|e| ApiError::internal(e, "Failed to fetch questions"))?
            .into_iter()
            .collect();
    if let Some(foreign) =
        answers.iter().find(|answer| !exam_question_ids.contains(&answer.question_id))
    {
        return Err(ApiError::BadRequest(format!(
            "question {} does not belong to this exam",
            foreign.question_id
        )));
    }

    let mut tx = state
        .db()
        .begin()
        .await
        .map_err(|e| ApiError::internal(e, "Failed to start transaction"))?;

    let attempted =
        repositories::attempts::has_attempted(&mut *tx, &payload.student_id, &payload.exam_id)
            .await
            .map_err(|e| ApiError::internal(e, "Failed to check attempt status"))?;
    if attempted {
        return Err(ApiError::Conflict(ALREADY_SUBMITTED.to_string()));
    }

    repositories::attempts::insert_answers(&mut *tx, &payload.student_id, &payload.exam_id, &answers)
        .await
        .map_err(|e| ApiError::internal(e, "Failed to store answers"))?;

    repositories::attempts::insert_result(
        &mut *tx,
        &payload.student_id,
        &payload.exam_id,
        primitive_now_utc(),
    )
    .await
    .map_err(|e| {
        if is_unique_violation(&e) {
            ApiError::Conflict(ALREADY_SUBMITTED.to_string())
        } else {
            ApiError::internal(e, "Failed to store result")
        }
    })?;

    tx.commit().await.map_err(|e| ApiError::internal(e, "Failed to commit transaction"))?;

    tracing::info!(
        student_id = %payload.student_id,
        exam_id = %payload.exam_id,
        answers = answers.len(),
        "Exam submitted"
    );

    Ok((StatusCode::CREATED, Json(MessageResponse::new("Exam submitted successfully"))))
}

pub(super) async fn exam_result(
    State(state): State<AppState>,
    Json(payload): Json<ResultRequest>,
) -> Result<Json<ResultResponse>, ApiError> {
    validate_payload(&payload)?;

    let total = repositories::questions::count_for_exam(state.db(), &payload.exam_id)
        .await
        .map_err(|e| ApiError::internal(e, "Failed to count questions"))?;
    if total == 0 {
        return Err(ApiError::NotFound("No questions found".to_string()));
    }

    let correct =
        repositories::attempts::count_correct(state.db(), &payload.student_id, &payload.exam_id)
            .await
            .map_err(|e| ApiError::internal(e, "Failed to count correct answers"))?;

    let cutoff = repositories::exams::find_with_event(state.db(), &payload.exam_id)
        .await
        .map_err(|e| ApiError::internal(e, "Failed to fetch exam"))?
        .and_then(|exam| exam.cutoff_percentage)
        .unwrap_or(0.0);

    let outcome = scoring::evaluate(to_u32(correct), to_u32(total), cutoff);

    Ok(Json(ResultResponse {
        student_id: payload.student_id,
        exam_id: payload.exam_id,
        correct: outcome.correct,
        total: outcome.total,
        total_marks: outcome.total_marks(),
        score_percent: outcome.score_percent,
        cutoff_percentage: outcome.cutoff_percentage,
        result_status: outcome.result_status,
    }))
}

fn question_view(question: Question) -> QuestionView {
    QuestionView {
        question_id: question.id,
        question_text: question.question_text,
        option_a: question.option_a,
        option_b: question.option_b,
        option_c: question.option_c,
        option_d: question.option_d,
    }
}

/// Rejects blank question ids, options outside A-D and answering the same
/// question twice.
pub(super) fn parse_answers(answers: &[SubmittedAnswer]) -> Result<Vec<AnswerRecord>, ApiError> {
    let mut seen = HashSet::new();
    let mut records = Vec::with_capacity(answers.len());

    for answer in answers {
        let question_id = answer.question_id.trim();
        if question_id.is_empty() {
            return Err(ApiError::BadRequest("question_id is required".to_string()));
        }
        let selected_option = AnswerOption::parse(&answer.selected_option).ok_or_else(|| {
            ApiError::BadRequest(format!(
                "selected_option for question {question_id} must be one of A, B, C, D"
            ))
        })?;
        if !seen.insert(question_id.to_string()) {
            return Err(ApiError::BadRequest(format!("question {question_id} answered twice")));
        }
        records.push(AnswerRecord { question_id: question_id.to_string(), selected_option });
    }

    Ok(records)
}

fn to_u32(value: i64) -> u32 {
    u32::try_from(value).unwrap_or(u32::MAX)
}
