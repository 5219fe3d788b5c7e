use anyhow::Context;
use sqlx::SqlitePool;
use tracing::{info, warn};

use crate::{
    auth::{
        dto::SignupRequest,
        password::{hash_password, verify_password},
        repo_types::{NewUser, User},
    },
    error::AppError,
};

pub const USERNAME_TAKEN: &str = "Username already exists";
const SIGNUP_FAILED: &str = "Failed to create user";

/// Validates, hashes and persists a new user in its own transaction.
pub async fn signup(db: &SqlitePool, req: SignupRequest) -> Result<User, AppError> {
    let valid = req.validate()?;
    let password_hash = hash_password(&valid.password)?;
    let new = NewUser {
        username: valid.username,
        password_hash,
        image_url: valid.image_url,
        bio: valid.bio,
    };

    let mut tx = db
        .begin()
        .await
        .map_err(|e| AppError::storage(SIGNUP_FAILED, e))?;
    let user = User::insert(&mut *tx, &new).await.map_err(signup_error)?;
    tx.commit()
        .await
        .map_err(|e| AppError::storage(SIGNUP_FAILED, e))?;

    info!(user_id = user.id, username = %user.username, "user registered");
    Ok(user)
}

fn signup_error(e: sqlx::Error) -> AppError {
    let unique = matches!(&e, sqlx::Error::Database(db_err) if db_err.is_unique_violation());
    if unique {
        AppError::Conflict(USERNAME_TAKEN.into())
    } else {
        AppError::storage(SIGNUP_FAILED, e)
    }
}

/// Checks credentials. Unknown user and wrong password are indistinguishable
/// to the caller.
pub async fn authenticate(
    db: &SqlitePool,
    username: Option<&str>,
    password: Option<&str>,
) -> Result<User, AppError> {
    let (Some(username), Some(password)) = (username, password) else {
        warn!("login without credentials");
        return Err(AppError::Unauthorized);
    };

    let Some(user) = User::find_by_username(db, username)
        .await
        .context("find user by username")?
    else {
        warn!(%username, "login unknown username");
        return Err(AppError::Unauthorized);
    };

    if !verify_password(password, &user.password_hash)? {
        warn!(%username, user_id = user.id, "login invalid password");
        return Err(AppError::Unauthorized);
    }

    Ok(user)
}

/// The user behind a session id, or 401 when the record is gone.
pub async fn session_user(db: &SqlitePool, user_id: i64) -> Result<User, AppError> {
    User::find_by_id(db, user_id)
        .await
        .context("find user by id")?
        .ok_or_else(|| {
            warn!(user_id, "session refers to a missing user");
            AppError::Unauthorized
        })
}
