use uuid::Uuid;

use crate::core::security;
use crate::core::state::AppState;
use crate::core::time::primitive_now_utc;
use crate::repositories;

/// Makes sure the configured first admin can log in. Creates the account, or
/// repairs its college and password when they drifted from the configuration.
pub(crate) async fn ensure_admin(state: &AppState) -> anyhow::Result<()> {
    let admin = state.settings().admin();
    if !admin.is_configured() {
        tracing::warn!(
            "FIRST_ADMIN_EMAIL, FIRST_ADMIN_PASSWORD or FIRST_ADMIN_COLLEGE_ID not configured; \
             skipping admin bootstrap"
        );
        return Ok(());
    }

    let email = admin.first_admin_email.trim();
    let college_id = admin.first_admin_college_id.trim();

    if repositories::colleges::find_by_id(state.db(), college_id).await?.is_none() {
        anyhow::bail!("FIRST_ADMIN_COLLEGE_ID {college_id} does not match any college");
    }

    if let Some(existing) = repositories::admins::find_by_email(state.db(), email).await? {
        let password_matches =
            security::verify_password(&admin.first_admin_password, &existing.hashed_password)
                .unwrap_or(false);

        if password_matches && existing.college_id == college_id {
            tracing::info!(email, "Bootstrap admin already up to date");
            return Ok(());
        }

        let hashed_password = if password_matches {
            existing.hashed_password.clone()
        } else {
            security::hash_password(&admin.first_admin_password)?
        };

        repositories::admins::update_credentials(
            state.db(),
            &existing.id,
            college_id,
            &hashed_password,
        )
        .await?;
        tracing::info!(email, "Updated bootstrap admin");
        return Ok(());
    }

    let hashed_password = security::hash_password(&admin.first_admin_password)?;
    repositories::admins::create(
        state.db(),
        repositories::admins::CreateAdmin {
            id: &Uuid::new_v4().to_string(),
            college_id,
            email,
            hashed_password: &hashed_password,
            created_at: primitive_now_utc(),
        },
    )
    .await?;

    tracing::info!(email, "Created bootstrap admin");
    Ok(())
}
