use axum::{extract::FromRequestParts, http::request::Parts};
use tower_sessions::Session;
use tracing::warn;

use crate::error::AppError;

/// Session key holding the authenticated user's id.
pub const USER_ID_KEY: &str = "user_id";

/// The user id carried by the request's session; rejects with 401 otherwise.
#[derive(Debug, Clone, Copy)]
pub struct CurrentUser(pub i64);

impl<S> FromRequestParts<S> for CurrentUser
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let session = Session::from_request_parts(parts, state)
            .await
            .map_err(|(status, msg)| AppError::Internal(anyhow::anyhow!("{msg} ({status})")))?;

        session_user_id(&session)
            .await?
            .map(CurrentUser)
            .ok_or(AppError::Unauthorized)
    }
}

/// Reads `user_id` from the session. A value that does not decode as an id
/// counts as no session at all.
pub async fn session_user_id(session: &Session) -> Result<Option<i64>, AppError> {
    match session.get::<i64>(USER_ID_KEY).await {
        Ok(id) => Ok(id),
        Err(tower_sessions::session::Error::SerdeJson(e)) => {
            warn!(error = %e, "undecodable user_id in session");
            Ok(None)
        }
        Err(e) => Err(e.into()),
    }
}

/// Binds the session to `user_id` under a fresh session id.
pub async fn establish(session: &Session, user_id: i64) -> Result<(), AppError> {
    session.cycle_id().await?;
    session.insert(USER_ID_KEY, user_id).await?;
    Ok(())
}
