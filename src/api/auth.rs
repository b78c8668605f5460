use crate::api::errors::ApiError;
use crate::core::redis::LOGIN_LIMIT;
use crate::core::security;
use crate::core::state::AppState;

pub(crate) const INVALID_CREDENTIALS: &str = "Invalid email or password";

/// Fails with 429 once `key` has used up its login budget. A Redis error
/// lets the attempt through.
pub(crate) async fn enforce_login_rate(state: &AppState, key: &str) -> Result<(), ApiError> {
    let allowed = state.redis().rate_limit(key, LOGIN_LIMIT).await.unwrap_or_else(|err| {
        tracing::warn!(error = %err, "Login rate limit check failed");
        true
    });
    if !allowed {
        return Err(ApiError::TooManyRequests("Too many login attempts, try again later"));
    }
    Ok(())
}

/// A malformed stored hash counts as a wrong password.
pub(crate) fn check_password(password: &str, hashed_password: &str) -> Result<(), ApiError> {
    let verified = security::verify_password(password, hashed_password)
        .map_err(|_| ApiError::Unauthorized(INVALID_CREDENTIALS))?;
    if !verified {
        return Err(ApiError::Unauthorized(INVALID_CREDENTIALS));
    }
    Ok(())
}
