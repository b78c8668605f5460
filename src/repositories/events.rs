use sqlx::PgPool;
use time::{Date, PrimitiveDateTime, Time};

use crate::db::models::ExamEvent;
use crate::db::types::EventType;

pub(crate) const COLUMNS: &str = "\
    id, college_id, exam_name, exam_start_date, exam_end_date, start_time, end_time, \
    cutoff_percentage, event_type, is_active, is_deleted, updated_by, updated_at, created_at";

const UPDATED_BY_ADMIN: &str = "ADMIN";

/// Schedule fields shared by create and update.
#[derive(Debug, Clone)]
pub(crate) struct EventDetails {
    pub(crate) exam_name: String,
    pub(crate) exam_start_date: Date,
    pub(crate) exam_end_date: Date,
    pub(crate) start_time: Time,
    pub(crate) end_time: Time,
    pub(crate) cutoff_percentage: f64,
    pub(crate) event_type: EventType,
}

#[derive(Debug)]
pub(crate) struct CreateEvent<'a> {
    pub(crate) id: &'a str,
    pub(crate) college_id: &'a str,
    pub(crate) details: EventDetails,
    pub(crate) now: PrimitiveDateTime,
}

/// New events start inactive.
pub(crate) async fn create(
    executor: impl sqlx::PgExecutor<'_>,
    params: CreateEvent<'_>,
) -> Result<ExamEvent, sqlx::Error> {
    let details = params.details;
    sqlx::query_as::<_, ExamEvent>(&format!(
        "INSERT INTO exam_events (
            id, college_id, exam_name, exam_start_date, exam_end_date, start_time, end_time,
            cutoff_percentage, event_type, is_active, is_deleted, updated_by, updated_at, created_at
         ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, FALSE, FALSE, $10, $11, $11)
         RETURNING {COLUMNS}"
    ))
    .bind(params.id)
    .bind(params.college_id)
    .bind(details.exam_name)
    .bind(details.exam_start_date)
    .bind(details.exam_end_date)
    .bind(details.start_time)
    .bind(details.end_time)
    .bind(details.cutoff_percentage)
    .bind(details.event_type)
    .bind(UPDATED_BY_ADMIN)
    .bind(params.now)
    .fetch_one(executor)
    .await
}

pub(crate) async fn find_by_id(pool: &PgPool, id: &str) -> Result<Option<ExamEvent>, sqlx::Error> {
    sqlx::query_as::<_, ExamEvent>(&format!("SELECT {COLUMNS} FROM exam_events WHERE id = $1"))
        .bind(id)
        .fetch_optional(pool)
        .await
}

pub(crate) async fn update_details(
    pool: &PgPool,
    id: &str,
    details: EventDetails,
    now: PrimitiveDateTime,
) -> Result<Option<ExamEvent>, sqlx::Error> {
    sqlx::query_as::<_, ExamEvent>(&format!(
        "UPDATE exam_events
         SET exam_name = $1,
             exam_start_date = $2,
             exam_end_date = $3,
             start_time = $4,
             end_time = $5,
             cutoff_percentage = $6,
             event_type = $7,
             updated_by = $8,
             updated_at = $9
         WHERE id = $10 AND is_deleted = FALSE
         RETURNING {COLUMNS}"
    ))
    .bind(details.exam_name)
    .bind(details.exam_start_date)
    .bind(details.exam_end_date)
    .bind(details.start_time)
    .bind(details.end_time)
    .bind(details.cutoff_percentage)
    .bind(details.event_type)
    .bind(UPDATED_BY_ADMIN)
    .bind(now)
    .bind(id)
    .fetch_optional(pool)
    .await
}

pub(crate) async fn set_active(
    pool: &PgPool,
    id: &str,
    is_active: bool,
    now: PrimitiveDateTime,
) -> Result<Option<ExamEvent>, sqlx::Error> {
    sqlx::query_as::<_, ExamEvent>(&format!(
        "UPDATE exam_events
         SET is_active = $1, updated_by = $2, updated_at = $3
         WHERE id = $4 AND is_deleted = FALSE
         RETURNING {COLUMNS}"
    ))
    .bind(is_active)
    .bind(UPDATED_BY_ADMIN)
    .bind(now)
    .bind(id)
    .fetch_optional(pool)
    .await
}

/// Returns `false` when no live event matched.
pub(crate) async fn soft_delete(
    pool: &PgPool,
    id: &str,
    now: PrimitiveDateTime,
) -> Result<bool, sqlx::Error> {
    let result = sqlx::query(
        "UPDATE exam_events
         SET is_deleted = TRUE, is_active = FALSE, updated_by = $1, updated_at = $2
         WHERE id = $3 AND is_deleted = FALSE",
    )
    .bind(UPDATED_BY_ADMIN)
    .bind(now)
    .bind(id)
    .execute(pool)
    .await?;

    Ok(result.rows_affected() > 0)
}

pub(crate) async fn list_by_college(
    pool: &PgPool,
    college_id: &str,
) -> Result<Vec<ExamEvent>, sqlx::Error> {
    sqlx::query_as::<_, ExamEvent>(&format!(
        "SELECT {COLUMNS}
         FROM exam_events
         WHERE college_id = $1 AND is_deleted = FALSE
         ORDER BY exam_start_date, start_time"
    ))
    .bind(college_id)
    .fetch_all(pool)
    .await
}
