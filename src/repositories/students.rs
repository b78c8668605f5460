use sqlx::PgPool;
use time::{Date, PrimitiveDateTime, Time};

use crate::db::models::Student;
use crate::db::types::{AttemptStatus, ExamStatus};

#[derive(Debug, sqlx::FromRow)]
pub(crate) struct StudentLoginRow {
    pub(crate) id: String,
    pub(crate) name: String,
    pub(crate) hashed_password: String,
}

#[derive(Debug, sqlx::FromRow)]
pub(crate) struct AvailableExamRow {
    pub(crate) exam_id: String,
    pub(crate) exam_name: String,
    pub(crate) exam_start_date: Date,
    pub(crate) exam_end_date: Date,
    pub(crate) start_time: Time,
    pub(crate) end_time: Time,
    pub(crate) course: String,
}

#[derive(Debug, sqlx::FromRow)]
pub(crate) struct AttemptedExamRow {
    pub(crate) exam_id: String,
    pub(crate) exam_name: String,
    pub(crate) exam_start_date: Date,
    pub(crate) course: String,
    pub(crate) attempt_status: AttemptStatus,
    pub(crate) submitted_at: PrimitiveDateTime,
}

pub(crate) async fn find_by_id(pool: &PgPool, id: &str) -> Result<Option<Student>, sqlx::Error> {
    sqlx::query_as::<_, Student>("SELECT id, name, email, course FROM students WHERE id = $1")
        .bind(id)
        .fetch_optional(pool)
        .await
}

pub(crate) async fn find_login_by_email(
    pool: &PgPool,
    email: &str,
) -> Result<Option<StudentLoginRow>, sqlx::Error> {
    sqlx::query_as::<_, StudentLoginRow>(
        "SELECT s.id, s.name, c.hashed_password
         FROM students s
         JOIN student_credentials c ON c.student_id = s.id
         WHERE LOWER(s.email) = LOWER($1)",
    )
    .bind(email.trim())
    .fetch_optional(pool)
    .await
}

/// Ready exams for the student's course under live events, minus the ones
/// already submitted.
pub(crate) async fn list_available_exams(
    pool: &PgPool,
    student_id: &str,
) -> Result<Vec<AvailableExamRow>, sqlx::Error> {
    sqlx::query_as::<_, AvailableExamRow>(
        "SELECT e.id AS exam_id,
                ev.exam_name,
                ev.exam_start_date,
                ev.exam_end_date,
                ev.start_time,
                ev.end_time,
                e.course
         FROM students s
         JOIN exams e ON LOWER(e.course) = LOWER(s.course)
         JOIN exam_events ev ON ev.id = e.event_id
         WHERE s.id = $1
           AND e.exam_status = $2
           AND ev.is_active = TRUE
           AND ev.is_deleted = FALSE
           AND NOT EXISTS (
               SELECT 1 FROM results r WHERE r.student_id = s.id AND r.exam_id = e.id
           )
         ORDER BY ev.exam_start_date, ev.start_time",
    )
    .bind(student_id)
    .bind(ExamStatus::Ready)
    .fetch_all(pool)
    .await
}

pub(crate) async fn list_attempted_exams(
    pool: &PgPool,
    student_id: &str,
) -> Result<Vec<AttemptedExamRow>, sqlx::Error> {
    sqlx::query_as::<_, AttemptedExamRow>(
        "SELECT e.id AS exam_id,
                ev.exam_name,
                ev.exam_start_date,
                e.course,
                r.attempt_status,
                r.submitted_at
         FROM results r
         JOIN exams e ON e.id = r.exam_id
         JOIN exam_events ev ON ev.id = e.event_id
         WHERE r.student_id = $1
         ORDER BY r.submitted_at DESC",
    )
    .bind(student_id)
    .fetch_all(pool)
    .await
}
