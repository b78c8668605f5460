use serde::Serialize;
use sqlx::FromRow;
use time::{Date, PrimitiveDateTime, Time};

use crate::db::types::{AnswerOption, EventType, ExamStatus};

#[derive(Debug, Clone, Serialize, FromRow)]
pub(crate) struct College {
    pub(crate) id: String,
    pub(crate) college_name: String,
}

#[derive(Debug, Clone, FromRow)]
pub(crate) struct Admin {
    pub(crate) id: String,
    pub(crate) college_id: String,
    pub(crate) email: String,
    pub(crate) hashed_password: String,
    pub(crate) created_at: PrimitiveDateTime,
}

#[derive(Debug, Clone, FromRow)]
pub(crate) struct ExamEvent {
    pub(crate) id: String,
    pub(crate) college_id: String,
    pub(crate) exam_name: String,
    pub(crate) exam_start_date: Date,
    pub(crate) exam_end_date: Date,
    pub(crate) start_time: Time,
    pub(crate) end_time: Time,
    pub(crate) cutoff_percentage: f64,
    pub(crate) event_type: EventType,
    pub(crate) is_active: bool,
    pub(crate) is_deleted: bool,
    pub(crate) updated_by: Option<String>,
    pub(crate) updated_at: PrimitiveDateTime,
    pub(crate) created_at: PrimitiveDateTime,
}

#[derive(Debug, Clone, FromRow)]
pub(crate) struct Exam {
    pub(crate) id: String,
    pub(crate) event_id: String,
    pub(crate) course: String,
    pub(crate) exam_status: ExamStatus,
    pub(crate) created_at: PrimitiveDateTime,
}

#[derive(Debug, Clone, FromRow)]
pub(crate) struct Question {
    pub(crate) id: String,
    pub(crate) exam_id: String,
    pub(crate) question_text: String,
    pub(crate) option_a: String,
    pub(crate) option_b: String,
    pub(crate) option_c: String,
    pub(crate) option_d: String,
    pub(crate) correct_answer: AnswerOption,
}

#[derive(Debug, Clone, FromRow)]
pub(crate) struct Student {
    pub(crate) id: String,
    pub(crate) name: String,
    pub(crate) email: String,
    pub(crate) course: String,
}
