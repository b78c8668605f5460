use std::sync::Arc;

use redis::aio::ConnectionManager;
use redis::{cmd, Client, RedisError, Script};
use tokio::sync::RwLock;

const FIXED_WINDOW_SCRIPT: &str = r#"
    local current = redis.call("INCR", KEYS[1])
    if current == 1 then
        redis.call("EXPIRE", KEYS[1], ARGV[1])
    end
    return current
"#;

/// Fixed-window limit: at most `limit` hits per `window_seconds`.
#[derive(Debug, Clone, Copy)]
pub(crate) struct RateLimit {
    pub(crate) limit: u64,
    pub(crate) window_seconds: u64,
}

pub(crate) const LOGIN_LIMIT: RateLimit = RateLimit { limit: 10, window_seconds: 60 };

#[derive(Clone)]
pub(crate) struct RedisHandle {
    url: String,
    manager: Arc<RwLock<Option<ConnectionManager>>>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum RedisHealth {
    Healthy,
    Disconnected,
    Unhealthy(String),
}

impl RedisHealth {
    pub(crate) fn label(&self) -> String {
        match self {
            Self::Healthy => "healthy".to_string(),
            Self::Disconnected => "disconnected".to_string(),
            Self::Unhealthy(error) => format!("unhealthy: {error}"),
        }
    }
}

impl RedisHandle {
    pub(crate) fn new(url: String) -> Self {
        Self { url, manager: Arc::new(RwLock::new(None)) }
    }

    pub(crate) async fn connect(&self) -> Result<(), RedisError> {
        let client = Client::open(self.url.clone())?;
        let manager = ConnectionManager::new(client).await?;
        let mut guard = self.manager.write().await;
        *guard = Some(manager);
        Ok(())
    }

    pub(crate) async fn disconnect(&self) {
        let mut guard = self.manager.write().await;
        *guard = None;
    }

    pub(crate) async fn health(&self) -> RedisHealth {
        let manager = { self.manager.read().await.clone() };
        let Some(mut manager) = manager else {
            return RedisHealth::Disconnected;
        };

        match cmd("PING").query_async::<_, String>(&mut manager).await {
            Ok(_) => RedisHealth::Healthy,
            Err(err) => RedisHealth::Unhealthy(err.to_string()),
        }
    }

    /// Returns `true` while the caller is within its budget. Without a live
    /// connection every call is allowed.
    pub(crate) async fn rate_limit(&self, key: &str, rule: RateLimit) -> Result<bool, RedisError> {
        let manager = { self.manager.read().await.clone() };
        let Some(mut manager) = manager else {
            return Ok(true);
        };

        let current: i64 = Script::new(FIXED_WINDOW_SCRIPT)
            .key(key)
            .arg(rule.window_seconds as i64)
            .invoke_async(&mut manager)
            .await?;

        Ok(current <= rule.limit as i64)
    }
}

pub(crate) fn admin_login_key(email: &str) -> String {
    format!("rate-limit:admin-login:{}", email.trim().to_lowercase())
}

pub(crate) fn student_login_key(email: &str) -> String {
    format!("rate-limit:student-login:{}", email.trim().to_lowercase())
}
