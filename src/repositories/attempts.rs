use sqlx::{PgConnection, PgPool, Postgres, QueryBuilder};
use time::PrimitiveDateTime;
use uuid::Uuid;

use crate::db::types::{AnswerOption, AttemptStatus};

#[derive(Debug, Clone)]
pub(crate) struct AnswerRecord {
    pub(crate) question_id: String,
    pub(crate) selected_option: AnswerOption,
}

pub(crate) async fn has_attempted(
    executor: impl sqlx::PgExecutor<'_>,
    student_id: &str,
    exam_id: &str,
) -> Result<bool, sqlx::Error> {
    sqlx::query_scalar(
        "SELECT EXISTS (SELECT 1 FROM results WHERE student_id = $1 AND exam_id = $2)",
    )
    .bind(student_id)
    .bind(exam_id)
    .fetch_one(executor)
    .await
}

pub(crate) async fn insert_answers(
    conn: &mut PgConnection,
    student_id: &str,
    exam_id: &str,
    answers: &[AnswerRecord],
) -> Result<(), sqlx::Error> {
    if answers.is_empty() {
        return Ok(());
    }

    let mut builder = QueryBuilder::<Postgres>::new(
        "INSERT INTO student_answers (id, student_id, exam_id, question_id, selected_option) ",
    );
    builder.push_values(answers, |mut row, answer| {
        row.push_bind(Uuid::new_v4().to_string())
            .push_bind(student_id)
            .push_bind(exam_id)
            .push_bind(&answer.question_id)
            .push_bind(answer.selected_option);
    });
    builder.build().execute(conn).await?;
    Ok(())
}

pub(crate) async fn insert_result(
    conn: &mut PgConnection,
    student_id: &str,
    exam_id: &str,
    submitted_at: PrimitiveDateTime,
) -> Result<(), sqlx::Error> {
    sqlx::query(
        "INSERT INTO results (id, student_id, exam_id, attempt_status, submitted_at)
         VALUES ($1, $2, $3, $4, $5)",
    )
    .bind(Uuid::new_v4().to_string())
    .bind(student_id)
    .bind(exam_id)
    .bind(AttemptStatus::Submitted)
    .bind(submitted_at)
    .execute(conn)
    .await?;
    Ok(())
}

/// Answers whose selected option matches the stored correct answer.
pub(crate) async fn count_correct(
    pool: &PgPool,
    student_id: &str,
    exam_id: &str,
) -> Result<i64, sqlx::Error> {
    sqlx::query_scalar(
        "SELECT COUNT(*)
         FROM student_answers a
         JOIN questions q ON q.id = a.question_id
         WHERE a.student_id = $1
           AND a.exam_id = $2
           AND a.selected_option = q.correct_answer",
    )
    .bind(student_id)
    .bind(exam_id)
    .fetch_one(pool)
    .await
}
