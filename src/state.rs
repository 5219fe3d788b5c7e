use std::sync::Arc;

use sqlx::SqlitePool;
use tower_sessions::cookie::Key;
use tracing::warn;

use crate::{config::AppConfig, db};

#[derive(Clone)]
pub struct AppState {
    pub db: SqlitePool,
    pub config: Arc<AppConfig>,
    pub session_key: Key,
}

impl AppState {
    pub async fn init(config: AppConfig) -> anyhow::Result<Self> {
        let db = db::connect(&config).await?;
        db::migrate(&db).await?;

        let session_key = match &config.session.secret {
            Some(secret) => Key::try_from(secret.as_bytes())
                .map_err(|e| anyhow::anyhow!("invalid SESSION_SECRET: {e}"))?,
            None => {
                warn!("SESSION_SECRET not set; using a random key, sessions will not survive restarts");
                Key::generate()
            }
        };

        Ok(Self::from_parts(db, Arc::new(config), session_key))
    }

    pub fn from_parts(db: SqlitePool, config: Arc<AppConfig>, session_key: Key) -> Self {
        Self {
            db,
            config,
            session_key,
        }
    }

    /// Isolated state over a fresh in-memory database.
    pub async fn ephemeral() -> anyhow::Result<Self> {
        let db = db::connect_in_memory().await?;
        db::migrate(&db).await?;
        Ok(Self::from_parts(
            db,
            Arc::new(AppConfig::default()),
            Key::generate(),
        ))
    }
}
