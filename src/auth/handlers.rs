use axum::{
    extract::State,
    http::StatusCode,
    routing::{delete, get, post},
    Json, Router,
};
use tower_sessions::Session;
use tracing::{info, instrument};

use crate::{
    auth::{
        dto::{LoginRequest, Profile, SignupRequest},
        extractors::{establish, session_user_id, CurrentUser},
        services,
    },
    error::AppError,
    extract::AppJson,
    state::AppState,
};

pub fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/signup", post(signup))
        .route("/login", post(login))
        .route("/logout", delete(logout))
}

pub fn session_routes() -> Router<AppState> {
    Router::new().route("/check_session", get(check_session))
}

#[instrument(skip(state, session, payload))]
pub async fn signup(
    State(state): State<AppState>,
    session: Session,
    AppJson(payload): AppJson<SignupRequest>,
) -> Result<(StatusCode, Json<Profile>), AppError> {
    let user = services::signup(&state.db, payload).await?;
    establish(&session, user.id).await?;
    Ok((StatusCode::CREATED, Json(user.into())))
}

#[instrument(skip(state))]
pub async fn check_session(
    State(state): State<AppState>,
    CurrentUser(user_id): CurrentUser,
) -> Result<Json<Profile>, AppError> {
    let user = services::session_user(&state.db, user_id).await?;
    Ok(Json(user.into()))
}

#[instrument(skip(state, session, payload))]
pub async fn login(
    State(state): State<AppState>,
    session: Session,
    AppJson(payload): AppJson<LoginRequest>,
) -> Result<Json<Profile>, AppError> {
    let user = services::authenticate(
        &state.db,
        payload.username.as_deref(),
        payload.password.as_deref(),
    )
    .await?;

    establish(&session, user.id).await?;
    info!(user_id = user.id, username = %user.username, "user logged in");
    Ok(Json(user.into()))
}

#[instrument(skip(session))]
pub async fn logout(session: Session) -> Result<StatusCode, AppError> {
    let user_id = session_user_id(&session)
        .await?
        .ok_or(AppError::Unauthorized)?;

    session.flush().await?;
    info!(user_id, "user logged out");
    Ok(StatusCode::NO_CONTENT)
}
