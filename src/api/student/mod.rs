mod handlers;

use axum::{
    routing::{get, post},
    Router,
};

use crate::core::state::AppState;

pub(crate) fn router() -> Router<AppState> {
    Router::new()
        .route("/login", post(handlers::login))
        .route("/exams/:student_id", get(handlers::available_exams))
        .route("/attempted-exams/:student_id", get(handlers::attempted_exams))
}

#[cfg(test)]
mod tests;
