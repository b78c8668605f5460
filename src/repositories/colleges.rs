use sqlx::PgPool;

use crate::db::models::College;

pub(crate) async fn find_by_id(pool: &PgPool, id: &str) -> Result<Option<College>, sqlx::Error> {
    sqlx::query_as::<_, College>("SELECT id, college_name FROM colleges WHERE id = $1")
        .bind(id)
        .fetch_optional(pool)
        .await
}
