use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::db::types::{EventType, ExamStatus};

#[derive(Debug, Deserialize, Validate)]
pub(crate) struct AdminLoginRequest {
    #[serde(default)]
    #[validate(length(min = 1, message = "email is required"))]
    pub(crate) email: String,
    #[serde(default)]
    #[validate(length(min = 1, message = "password is required"))]
    pub(crate) password: String,
}

#[derive(Debug, Serialize)]
pub(crate) struct AdminLoginResponse {
    pub(crate) admin_id: String,
    pub(crate) college_id: String,
    pub(crate) college_name: String,
}

/// Schedule fields as typed by the admin. Dates are `YYYY-MM-DD`, times
/// `HH:MM[:SS]`; `exam_date` fills whichever of start/end date is missing.
#[derive(Debug, Clone, Deserialize, Validate)]
pub(crate) struct EventDetailsInput {
    #[serde(default)]
    #[validate(length(min = 1, message = "exam_name is required"))]
    pub(crate) exam_name: String,
    #[serde(default)]
    pub(crate) exam_start_date: Option<String>,
    #[serde(default)]
    pub(crate) exam_end_date: Option<String>,
    #[serde(default)]
    pub(crate) exam_date: Option<String>,
    #[serde(default)]
    #[validate(length(min = 1, message = "start_time is required"))]
    pub(crate) start_time: String,
    #[serde(default)]
    #[validate(length(min = 1, message = "end_time is required"))]
    pub(crate) end_time: String,
    #[serde(default)]
    #[validate(
        required(message = "cutoff_percentage is required"),
        range(min = 0.0, max = 100.0, message = "cutoff_percentage must be between 0 and 100")
    )]
    pub(crate) cutoff_percentage: Option<f64>,
    #[serde(default)]
    pub(crate) event_type: Option<String>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct EventCreate {
    #[serde(default)]
    pub(crate) college_id: String,
    #[serde(flatten)]
    pub(crate) details: EventDetailsInput,
}

#[derive(Debug, Deserialize)]
pub(crate) struct EventStatusUpdate {
    #[serde(default)]
    pub(crate) is_active: Option<bool>,
    #[serde(default)]
    pub(crate) status: Option<String>,
}

impl EventStatusUpdate {
    /// `is_active` wins; otherwise `status` must be `YES` or `NO`.
    pub(crate) fn resolve(&self) -> Option<bool> {
        if let Some(is_active) = self.is_active {
            return Some(is_active);
        }
        match self.status.as_deref().map(|value| value.trim().to_ascii_uppercase()) {
            Some(ref value) if value == "YES" => Some(true),
            Some(ref value) if value == "NO" => Some(false),
            _ => None,
        }
    }
}

#[derive(Debug, Serialize)]
pub(crate) struct EventResponse {
    pub(crate) event_id: String,
    pub(crate) college_id: String,
    pub(crate) exam_name: String,
    pub(crate) exam_start_date: String,
    pub(crate) exam_end_date: String,
    pub(crate) start_time: String,
    pub(crate) end_time: String,
    pub(crate) cutoff_percentage: f64,
    pub(crate) event_type: EventType,
    pub(crate) is_active: bool,
    pub(crate) updated_by: Option<String>,
    pub(crate) updated_at: String,
}

#[derive(Debug, Deserialize, Validate)]
pub(crate) struct ExamCreate {
    #[serde(default)]
    #[validate(length(min = 1, message = "event_id is required"))]
    pub(crate) event_id: String,
    #[serde(default)]
    pub(crate) course: String,
}

#[derive(Debug, Serialize)]
pub(crate) struct ExamResponse {
    pub(crate) exam_id: String,
    pub(crate) event_id: String,
    pub(crate) course: String,
    pub(crate) exam_status: ExamStatus,
    pub(crate) created_at: String,
}

#[derive(Debug, Serialize)]
pub(crate) struct ExamSummary {
    pub(crate) exam_id: String,
    pub(crate) course: String,
    pub(crate) exam_status: ExamStatus,
    pub(crate) question_count: i64,
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct GenerateQuestionsRequest {
    #[serde(default, alias = "questionCount")]
    pub(crate) question_count: Option<u32>,
}

#[derive(Debug, Serialize)]
pub(crate) struct GenerateQuestionsResponse {
    pub(crate) exam_id: String,
    pub(crate) exam_status: ExamStatus,
    pub(crate) requested: usize,
    pub(crate) generated: usize,
}
