use axum::{extract::State, Json};

use crate::api::auth::{self, INVALID_CREDENTIALS};
use crate::api::errors::ApiError;
use crate::api::validation::validate_payload;
use crate::core::redis::admin_login_key;
use crate::core::state::AppState;
use crate::repositories;
use crate::schemas::admin::{AdminLoginRequest, AdminLoginResponse};

pub(in crate::api::admin) async fn login(
    State(state): State<AppState>,
    Json(payload): Json<AdminLoginRequest>,
) -> Result<Json<AdminLoginResponse>, ApiError> {
    validate_payload(&payload)?;

    auth::enforce_login_rate(&state, &admin_login_key(&payload.email)).await?;

    let admin = repositories::admins::find_by_email(state.db(), &payload.email)
        .await
        .map_err(|e| ApiError::internal(e, "Failed to fetch admin"))?
        .ok_or(ApiError::Unauthorized(INVALID_CREDENTIALS))?;

    auth::check_password(&payload.password, &admin.hashed_password)?;

    let college = repositories::colleges::find_by_id(state.db(), &admin.college_id)
        .await
        .map_err(|e| ApiError::internal(e, "Failed to fetch college"))?
        .ok_or_else(|| ApiError::NotFound("College not found".to_string()))?;

    tracing::info!(admin_id = %admin.id, college_id = %college.id, "Admin logged in");

    Ok(Json(AdminLoginResponse {
        admin_id: admin.id,
        college_id: college.id,
        college_name: college.college_name,
    }))
}
