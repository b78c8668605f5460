use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::db::types::AttemptStatus;

#[derive(Debug, Deserialize, Validate)]
pub(crate) struct StudentLoginRequest {
    #[serde(default)]
    #[validate(length(min = 1, message = "email is required"))]
    pub(crate) email: String,
    #[serde(default)]
    #[validate(length(min = 1, message = "password is required"))]
    pub(crate) password: String,
}

#[derive(Debug, Serialize)]
pub(crate) struct StudentLoginResponse {
    pub(crate) student_id: String,
    pub(crate) name: String,
}

#[derive(Debug, Serialize)]
pub(crate) struct AvailableExam {
    pub(crate) exam_id: String,
    pub(crate) exam_name: String,
    pub(crate) exam_start_date: String,
    pub(crate) exam_end_date: String,
    pub(crate) start_time: String,
    pub(crate) end_time: String,
    pub(crate) course: String,
}

#[derive(Debug, Serialize)]
pub(crate) struct AttemptedExam {
    pub(crate) exam_id: String,
    pub(crate) exam_name: String,
    pub(crate) exam_start_date: String,
    pub(crate) course: String,
    pub(crate) attempt_status: AttemptStatus,
    pub(crate) submitted_at: String,
}
