mod handlers;
mod helpers;

use axum::{
    routing::{delete, get, post, put},
    Router,
};

use crate::core::state::AppState;

pub(crate) fn router() -> Router<AppState> {
    Router::new()
        .route("/login", post(handlers::login))
        .route("/events", post(handlers::create_event))
        .route("/events/:event_id", put(handlers::update_event).delete(handlers::delete_event))
        .route("/events/:event_id/status", put(handlers::update_event_status))
        .route("/events/:event_id/exams", get(handlers::list_event_exams))
        .route("/colleges/:college_id/events", get(handlers::list_college_events))
        .route("/exams", post(handlers::create_exam))
        .route("/exams/:exam_id", delete(handlers::delete_exam))
        .route("/exams/:exam_id/generate-questions", post(handlers::generate_questions))
}
