use sqlx::{PgConnection, PgPool};
use time::PrimitiveDateTime;

use crate::db::models::Exam;
use crate::db::types::{EventType, ExamStatus};

pub(crate) const COLUMNS: &str = "id, event_id, course, exam_status, created_at";

#[derive(Debug)]
pub(crate) struct CreateExam<'a> {
    pub(crate) id: &'a str,
    pub(crate) event_id: &'a str,
    pub(crate) course: &'a str,
    pub(crate) created_at: PrimitiveDateTime,
}

#[derive(Debug, sqlx::FromRow)]
pub(crate) struct ExamSummaryRow {
    pub(crate) id: String,
    pub(crate) course: String,
    pub(crate) exam_status: ExamStatus,
    pub(crate) question_count: i64,
}

/// An exam together with the event settings that drive generation and grading.
#[derive(Debug, sqlx::FromRow)]
pub(crate) struct ExamWithEventRow {
    pub(crate) id: String,
    pub(crate) course: String,
    pub(crate) exam_status: ExamStatus,
    pub(crate) event_type: Option<EventType>,
    pub(crate) cutoff_percentage: Option<f64>,
}

pub(crate) async fn create(
    executor: impl sqlx::PgExecutor<'_>,
    params: CreateExam<'_>,
) -> Result<Exam, sqlx::Error> {
    sqlx::query_as::<_, Exam>(&format!(
        "INSERT INTO exams (id, event_id, course, exam_status, created_at)
         VALUES ($1, $2, $3, $4, $5)
         RETURNING {COLUMNS}"
    ))
    .bind(params.id)
    .bind(params.event_id)
    .bind(params.course)
    .bind(ExamStatus::Draft)
    .bind(params.created_at)
    .fetch_one(executor)
    .await
}

pub(crate) async fn find_by_event_and_course(
    pool: &PgPool,
    event_id: &str,
    course: &str,
) -> Result<Option<Exam>, sqlx::Error> {
    sqlx::query_as::<_, Exam>(&format!(
        "SELECT {COLUMNS} FROM exams WHERE event_id = $1 AND course = $2"
    ))
    .bind(event_id)
    .bind(course)
    .fetch_optional(pool)
    .await
}

pub(crate) async fn find_with_event(
    pool: &PgPool,
    id: &str,
) -> Result<Option<ExamWithEventRow>, sqlx::Error> {
    sqlx::query_as::<_, ExamWithEventRow>(
        "SELECT e.id, e.course, e.exam_status, ev.event_type, ev.cutoff_percentage
         FROM exams e
         LEFT JOIN exam_events ev ON ev.id = e.event_id
         WHERE e.id = $1",
    )
    .bind(id)
    .fetch_optional(pool)
    .await
}

pub(crate) async fn list_by_event_with_counts(
    pool: &PgPool,
    event_id: &str,
) -> Result<Vec<ExamSummaryRow>, sqlx::Error> {
    sqlx::query_as::<_, ExamSummaryRow>(
        "SELECT e.id,
                e.course,
                e.exam_status,
                (SELECT COUNT(*) FROM questions q WHERE q.exam_id = e.id) AS question_count
         FROM exams e
         WHERE e.event_id = $1
         ORDER BY e.course",
    )
    .bind(event_id)
    .fetch_all(pool)
    .await
}

/// Flips a draft exam to ready. Returns `false` if it was no longer a draft.
pub(crate) async fn mark_ready(conn: &mut PgConnection, id: &str) -> Result<bool, sqlx::Error> {
    let result = sqlx::query("UPDATE exams SET exam_status = $1 WHERE id = $2 AND exam_status = $3")
        .bind(ExamStatus::Ready)
        .bind(id)
        .bind(ExamStatus::Draft)
        .execute(conn)
        .await?;
    Ok(result.rows_affected() > 0)
}

/// Removes the exam with its answers, results and questions. Returns `false`
/// when the exam did not exist.
pub(crate) async fn delete_cascade(conn: &mut PgConnection, id: &str) -> Result<bool, sqlx::Error> {
    sqlx::query("DELETE FROM student_answers WHERE exam_id = $1").bind(id).execute(&mut *conn).await?;
    sqlx::query("DELETE FROM results WHERE exam_id = $1").bind(id).execute(&mut *conn).await?;
    sqlx::query("DELETE FROM questions WHERE exam_id = $1").bind(id).execute(&mut *conn).await?;
    let result = sqlx::query("DELETE FROM exams WHERE id = $1").bind(id).execute(&mut *conn).await?;
    Ok(result.rows_affected() > 0)
}
