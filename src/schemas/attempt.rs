use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::services::scoring::ResultStatus;

#[derive(Debug, Serialize)]
pub(crate) struct AttemptStatusResponse {
    pub(crate) attempted: bool,
}

/// A question as shown to a candidate; the answer key is never included.
#[derive(Debug, Serialize)]
pub(crate) struct QuestionView {
    pub(crate) question_id: String,
    pub(crate) question_text: String,
    pub(crate) option_a: String,
    pub(crate) option_b: String,
    pub(crate) option_c: String,
    pub(crate) option_d: String,
}

#[derive(Debug, Deserialize, Serialize)]
pub(crate) struct SubmittedAnswer {
    #[serde(default, alias = "questionId")]
    pub(crate) question_id: String,
    #[serde(default, alias = "selectedOption")]
    pub(crate) selected_option: String,
}

#[derive(Debug, Deserialize, Validate)]
pub(crate) struct ExamSubmission {
    #[serde(default, alias = "studentId")]
    #[validate(length(min = 1, message = "student_id is required"))]
    pub(crate) student_id: String,
    #[serde(default, alias = "examId")]
    #[validate(length(min = 1, message = "exam_id is required"))]
    pub(crate) exam_id: String,
    #[serde(default)]
    #[validate(length(min = 1, message = "answers must not be empty"))]
    pub(crate) answers: Vec<SubmittedAnswer>,
}

#[derive(Debug, Deserialize, Validate)]
pub(crate) struct ResultRequest {
    #[serde(default, alias = "studentId")]
    #[validate(length(min = 1, message = "student_id is required"))]
    pub(crate) student_id: String,
    #[serde(default, alias = "examId")]
    #[validate(length(min = 1, message = "exam_id is required"))]
    pub(crate) exam_id: String,
}

#[derive(Debug, Serialize)]
pub(crate) struct ResultResponse {
    pub(crate) student_id: String,
    pub(crate) exam_id: String,
    pub(crate) correct: u32,
    pub(crate) total: u32,
    pub(crate) total_marks: String,
    pub(crate) score_percent: f64,
    pub(crate) cutoff_percentage: f64,
    pub(crate) result_status: ResultStatus,
}

#[cfg(test)]
mod tests {
    use serde_json::json;
    use validator::Validate;

    use super::ExamSubmission;

    #[test]
    fn submission_without_answers_fails_validation() {
        let submission: ExamSubmission =
            serde_json::from_value(json!({"studentId": "s-1", "examId": "e-1", "answers": []}))
                .expect("submission");

        let errors = submission.validate().expect_err("empty answers");
        let answers = &errors.field_errors()["answers"];
        assert_eq!(answers[0].message.as_deref(), Some("answers must not be empty"));
    }

    #[test]
    fn submission_with_answers_passes_validation() {
        let submission: ExamSubmission = serde_json::from_value(json!({
            "student_id": "s-1",
            "exam_id": "e-1",
            "answers": [{"questionId": "q-1", "selectedOption": "b"}]
        }))
        .expect("submission");

        assert!(submission.validate().is_ok());
        assert_eq!(submission.answers[0].question_id, "q-1");
        assert_eq!(submission.answers[0].selected_option, "b");
    }
}
