use sqlx::{PgConnection, PgPool, Postgres, QueryBuilder};
use uuid::Uuid;

use crate::db::models::Question;
use crate::services::question_generation::GeneratedQuestion;

pub(crate) const COLUMNS: &str =
    "id, exam_id, question_text, option_a, option_b, option_c, option_d, correct_answer";

pub(crate) async fn insert_generated(
    conn: &mut PgConnection,
    exam_id: &str,
    questions: &[GeneratedQuestion],
) -> Result<u64, sqlx::Error> {
    if questions.is_empty() {
        return Ok(0);
    }

    let mut builder = QueryBuilder::<Postgres>::new(
        "INSERT INTO questions (id, exam_id, question_text, option_a, option_b, option_c, option_d, correct_answer) ",
    );
    builder.push_values(questions, |mut row, question| {
        row.push_bind(Uuid::new_v4().to_string())
            .push_bind(exam_id)
            .push_bind(&question.question_text)
            .push_bind(&question.option_a)
            .push_bind(&question.option_b)
            .push_bind(&question.option_c)
            .push_bind(&question.option_d)
            .push_bind(question.correct_answer);
    });

    let result = builder.build().execute(conn).await?;
    Ok(result.rows_affected())
}

pub(crate) async fn list_for_exam(pool: &PgPool, exam_id: &str) -> Result<Vec<Question>, sqlx::Error> {
    sqlx::query_as::<_, Question>(&format!(
        "SELECT {COLUMNS} FROM questions WHERE exam_id = $1 ORDER BY id"
    ))
    .bind(exam_id)
    .fetch_all(pool)
    .await
}

pub(crate) async fn list_ids_for_exam(
    pool: &PgPool,
    exam_id: &str,
) -> Result<Vec<String>, sqlx::Error> {
    sqlx::query_scalar("SELECT id FROM questions WHERE exam_id = $1")
        .bind(exam_id)
        .fetch_all(pool)
        .await
}

pub(crate) async fn count_for_exam(pool: &PgPool, exam_id: &str) -> Result<i64, sqlx::Error> {
    sqlx::query_scalar("SELECT COUNT(*) FROM questions WHERE exam_id = $1")
        .bind(exam_id)
        .fetch_one(pool)
        .await
}
