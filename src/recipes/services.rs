use anyhow::Context;
use sqlx::SqlitePool;
use tracing::{info, warn};

use crate::{
    auth::repo_types::User,
    error::AppError,
    recipes::{
        dto::{CreateRecipeRequest, RecipeResponse},
        repo,
    },
};

pub const CREATE_FAILED: &str = "Failed to create recipe";

pub async fn list_recipes(db: &SqlitePool) -> Result<Vec<RecipeResponse>, AppError> {
    let rows = repo::list_with_owners(db)
        .await
        .context("list recipes")?;
    Ok(rows.into_iter().map(RecipeResponse::from).collect())
}

/// Creates a recipe owned by `user_id`. The owner lookup and the insert share
/// one transaction, rolled back on any failure.
pub async fn create_recipe(
    db: &SqlitePool,
    user_id: i64,
    req: CreateRecipeRequest,
) -> Result<RecipeResponse, AppError> {
    let new = req.validate()?;

    let mut tx = db
        .begin()
        .await
        .map_err(|e| AppError::storage(CREATE_FAILED, e))?;

    let Some(owner) = User::find_by_id(&mut *tx, user_id)
        .await
        .map_err(|e| AppError::storage(CREATE_FAILED, e))?
    else {
        warn!(user_id, "recipe create for a missing user");
        return Err(AppError::Unauthorized);
    };

    let recipe = repo::insert_recipe(&mut *tx, owner.id, &new)
        .await
        .map_err(|e| AppError::storage(CREATE_FAILED, e))?;

    tx.commit()
        .await
        .map_err(|e| AppError::storage(CREATE_FAILED, e))?;

    info!(recipe_id = recipe.id, user_id, "recipe created");
    Ok(RecipeResponse::with_owner(recipe, owner.into()))
}
