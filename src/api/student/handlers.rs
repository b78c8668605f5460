use axum::{
    extract::{Path, State},
    Json,
};

use crate::api::auth::{self, INVALID_CREDENTIALS};
use crate::api::errors::ApiError;
use crate::api::validation::validate_payload;
use crate::core::redis::student_login_key;
use crate::core::state::AppState;
use crate::core::time::{format_clock, format_date, format_primitive};
use crate::repositories;
use crate::repositories::students::{AttemptedExamRow, AvailableExamRow};
use crate::schemas::student::{
    AttemptedExam, AvailableExam, StudentLoginRequest, StudentLoginResponse,
};

pub(super) async fn login(
    State(state): State<AppState>,
    Json(payload): Json<StudentLoginRequest>,
) -> Result<Json<StudentLoginResponse>, ApiError> {
    validate_payload(&payload)?;

    auth::enforce_login_rate(&state, &student_login_key(&payload.email)).await?;

    let student = repositories::students::find_login_by_email(state.db(), &payload.email)
        .await
        .map_err(|e| ApiError::internal(e, "Failed to fetch student"))?
        .ok_or(ApiError::Unauthorized(INVALID_CREDENTIALS))?;

    auth::check_password(&payload.password, &student.hashed_password)?;

    Ok(Json(StudentLoginResponse { student_id: student.id, name: student.name }))
}

pub(super) async fn available_exams(
    State(state): State<AppState>,
    Path(student_id): Path<String>,
) -> Result<Json<Vec<AvailableExam>>, ApiError> {
    repositories::students::find_by_id(state.db(), &student_id)
        .await
        .map_err(|e| ApiError::internal(e, "Failed to fetch student"))?
        .ok_or_else(|| ApiError::NotFound("Student not found".to_string()))?;

    let rows = repositories::students::list_available_exams(state.db(), &student_id)
        .await
        .map_err(|e| ApiError::internal(e, "Failed to list exams"))?;

    Ok(Json(rows.into_iter().map(available_exam).collect()))
}

pub(super) async fn attempted_exams(
    State(state): State<AppState>,
    Path(student_id): Path<String>,
) -> Result<Json<Vec<AttemptedExam>>, ApiError> {
    let rows = repositories::students::list_attempted_exams(state.db(), &student_id)
        .await
        .map_err(|e| ApiError::internal(e, "Failed to list attempted exams"))?;

    Ok(Json(rows.into_iter().map(attempted_exam).collect()))
}

fn available_exam(row: AvailableExamRow) -> AvailableExam {
    AvailableExam {
        exam_id: row.exam_id,
        exam_name: row.exam_name,
        exam_start_date: format_date(row.exam_start_date),
        exam_end_date: format_date(row.exam_end_date),
        start_time: format_clock(row.start_time),
        end_time: format_clock(row.end_time),
        course: row.course,
    }
}

fn attempted_exam(row: AttemptedExamRow) -> AttemptedExam {
    AttemptedExam {
        exam_id: row.exam_id,
        exam_name: row.exam_name,
        exam_start_date: format_date(row.exam_start_date),
        course: row.course,
        attempt_status: row.attempt_status,
        submitted_at: format_primitive(row.submitted_at),
    }
}
