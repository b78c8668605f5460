use axum::http::{Method, StatusCode};
use serde_json::json;
use tower::ServiceExt;

use crate::api::router::router;
use crate::core::config::Settings;
use crate::core::time::primitive_now_utc;
use crate::db::types::{AnswerOption, EventType};
use crate::repositories;
use crate::test_support;

#[tokio::test]
async fn login_requires_email() {
    let _guard = test_support::env_lock().await;
    test_support::set_test_env();
    let app = router(test_support::build_state(Settings::load().expect("settings")));

    let response = app
        .oneshot(test_support::json_request(
            Method::POST,
            "/student/login",
            Some(json!({"password": "secret"})),
        ))
        .await
        .expect("response");

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = test_support::read_json(response).await;
    assert!(body["detail"].as_str().unwrap().contains("email is required"));
}

#[tokio::test]
async fn login_with_empty_fields_is_rejected() {
    let _guard = test_support::env_lock().await;
    test_support::set_test_env();
    let app = router(test_support::build_state(Settings::load().expect("settings")));

    let response = app
        .oneshot(test_support::json_request(
            Method::POST,
            "/student/login",
            Some(json!({"email": "", "password": ""})),
        ))
        .await
        .expect("response");

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

async fn get(app: axum::Router, uri: &str) -> (StatusCode, serde_json::Value) {
    let response =
        app.oneshot(test_support::json_request(Method::GET, uri, None)).await.expect("response");
    let status = response.status();
    (status, test_support::read_json(response).await)
}

#[tokio::test]
async fn available_exams_hide_drafts_closed_events_other_courses_and_attempts() {
    let Some(ctx) = test_support::setup_test_context().await else {
        return;
    };
    let pool = ctx.state.db();
    let now = primitive_now_utc();
    let question = [test_support::sample_question(1, AnswerOption::A)];
    test_support::insert_college(pool, "college-1", "City College").await;
    test_support::insert_student(pool, "stu-1", "stu1@example.com", "bca", "pass-1").await;

    let live =
        test_support::insert_event(pool, "college-1", "Scholarship 2025", EventType::Regular, 40.0)
            .await;
    let open_exam = test_support::insert_exam(pool, &live.id, "BCA").await;
    test_support::insert_questions(pool, &open_exam.id, &question).await;
    let other_course = test_support::insert_exam(pool, &live.id, "MCA").await;
    test_support::insert_questions(pool, &other_course.id, &question).await;

    let drafts =
        test_support::insert_event(pool, "college-1", "Draft Drive", EventType::Regular, 40.0)
            .await;
    test_support::insert_exam(pool, &drafts.id, "BCA").await;

    let inactive =
        test_support::insert_event(pool, "college-1", "Closed Drive", EventType::Regular, 40.0)
            .await;
    let inactive_exam = test_support::insert_exam(pool, &inactive.id, "BCA").await;
    test_support::insert_questions(pool, &inactive_exam.id, &question).await;
    repositories::events::set_active(pool, &inactive.id, false, now).await.expect("deactivate");

    let deleted =
        test_support::insert_event(pool, "college-1", "Deleted Drive", EventType::Regular, 40.0)
            .await;
    let deleted_exam = test_support::insert_exam(pool, &deleted.id, "BCA").await;
    test_support::insert_questions(pool, &deleted_exam.id, &question).await;
    assert!(repositories::events::soft_delete(pool, &deleted.id, now).await.expect("delete"));

    let taken =
        test_support::insert_event(pool, "college-1", "Taken Drive", EventType::Walkin, 40.0)
            .await;
    let taken_exam = test_support::insert_exam(pool, &taken.id, "BCA").await;
    test_support::insert_questions(pool, &taken_exam.id, &question).await;
    let mut conn = pool.acquire().await.expect("connection");
    repositories::attempts::insert_result(&mut *conn, "stu-1", &taken_exam.id, now)
        .await
        .expect("insert result");
    drop(conn);

    let (status, available) = get(ctx.app.clone(), "/student/exams/stu-1").await;
    assert_eq!(status, StatusCode::OK);
    let available = available.as_array().unwrap();
    assert_eq!(available.len(), 1);
    assert_eq!(available[0]["exam_id"], open_exam.id.as_str());
    assert_eq!(available[0]["exam_name"], "Scholarship 2025");
    assert_eq!(available[0]["exam_start_date"], "2025-06-01");
    assert_eq!(available[0]["start_time"], "10:00:00");

    let (status, attempted) = get(ctx.app.clone(), "/student/attempted-exams/stu-1").await;
    assert_eq!(status, StatusCode::OK);
    let attempted = attempted.as_array().unwrap();
    assert_eq!(attempted.len(), 1);
    assert_eq!(attempted[0]["exam_id"], taken_exam.id.as_str());
    assert_eq!(attempted[0]["attempt_status"], "SUBMITTED");
}

#[tokio::test]
async fn available_exams_for_unknown_student_is_not_found() {
    let Some(ctx) = test_support::setup_test_context().await else {
        return;
    };

    let (status, body) = get(ctx.app.clone(), "/student/exams/nobody").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["detail"], "Student not found");
}

#[tokio::test]
async fn student_login_checks_password() {
    let Some(ctx) = test_support::setup_test_context().await else {
        return;
    };
    test_support::insert_student(ctx.state.db(), "stu-1", "stu1@example.com", "BCA", "pass-1")
        .await;

    let response = ctx
        .app
        .clone()
        .oneshot(test_support::json_request(
            Method::POST,
            "/student/login",
            Some(json!({"email": "STU1@example.com", "password": "pass-1"})),
        ))
        .await
        .expect("response");
    assert_eq!(response.status(), StatusCode::OK);
    let body = test_support::read_json(response).await;
    assert_eq!(body["student_id"], "stu-1");
    assert_eq!(body["name"], "Student stu-1");

    let response = ctx
        .app
        .clone()
        .oneshot(test_support::json_request(
            Method::POST,
            "/student/login",
            Some(json!({"email": "stu1@example.com", "password": "nope"})),
        ))
        .await
        .expect("response");
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}
