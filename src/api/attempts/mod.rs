mod handlers;

use axum::{
    routing::{get, post},
    Router,
};

use crate::core::state::AppState;

pub(crate) fn router() -> Router<AppState> {
    Router::new()
        .route("/attempted/:student_id/:exam_id", get(handlers::attempt_status))
        .route("/questions/:exam_id", get(handlers::list_questions))
        .route("/submit", post(handlers::submit_exam))
        .route("/result", post(handlers::exam_result))
}
