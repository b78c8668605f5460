use sqlx::PgPool;
use time::PrimitiveDateTime;

use crate::db::models::Admin;

pub(crate) const COLUMNS: &str = "id, college_id, email, hashed_password, created_at";

#[derive(Debug)]
pub(crate) struct CreateAdmin<'a> {
    pub(crate) id: &'a str,
    pub(crate) college_id: &'a str,
    pub(crate) email: &'a str,
    pub(crate) hashed_password: &'a str,
    pub(crate) created_at: PrimitiveDateTime,
}

/// Emails are compared case-insensitively.
pub(crate) async fn find_by_email(pool: &PgPool, email: &str) -> Result<Option<Admin>, sqlx::Error> {
    sqlx::query_as::<_, Admin>(&format!(
        "SELECT {COLUMNS} FROM admins WHERE LOWER(email) = LOWER($1)"
    ))
    .bind(email.trim())
    .fetch_optional(pool)
    .await
}

pub(crate) async fn create(
    executor: impl sqlx::PgExecutor<'_>,
    params: CreateAdmin<'_>,
) -> Result<Admin, sqlx::Error> {
    sqlx::query_as::<_, Admin>(&format!(
        "INSERT INTO admins (id, college_id, email, hashed_password, created_at)
         VALUES ($1, $2, $3, $4, $5)
         RETURNING {COLUMNS}"
    ))
    .bind(params.id)
    .bind(params.college_id)
    .bind(params.email)
    .bind(params.hashed_password)
    .bind(params.created_at)
    .fetch_one(executor)
    .await
}

pub(crate) async fn update_credentials(
    pool: &PgPool,
    id: &str,
    college_id: &str,
    hashed_password: &str,
) -> Result<(), sqlx::Error> {
    sqlx::query("UPDATE admins SET college_id = $1, hashed_password = $2 WHERE id = $3")
        .bind(college_id)
        .bind(hashed_password)
        .bind(id)
        .execute(pool)
        .await?;
    Ok(())
}
