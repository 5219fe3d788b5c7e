use serde::{Deserialize, Serialize};

use crate::{
    auth::dto::Profile,
    error::AppError,
    recipes::repo_types::{NewRecipe, Recipe, RecipeWithOwnerRow},
};

/// Minimum number of characters in a recipe's instructions.
pub const MIN_INSTRUCTIONS_LEN: usize = 50;

/// Request body for recipe creation. Unknown fields, `user_id` included, are
/// ignored: the owner always comes from the session.
#[derive(Debug, Default, Deserialize)]
pub struct CreateRecipeRequest {
    pub title: Option<String>,
    pub instructions: Option<String>,
    pub minutes_to_complete: Option<i64>,
}

impl CreateRecipeRequest {
    pub fn validate(self) -> Result<NewRecipe, AppError> {
        let title = self
            .title
            .filter(|t| !t.trim().is_empty())
            .ok_or_else(|| AppError::validation("Title is required"))?;

        let instructions = self
            .instructions
            .ok_or_else(|| AppError::validation("Instructions are required"))?;
        if instructions.chars().count() < MIN_INSTRUCTIONS_LEN {
            return Err(AppError::validation(format!(
                "Instructions must be at least {MIN_INSTRUCTIONS_LEN} characters long"
            )));
        }

        if matches!(self.minutes_to_complete, Some(m) if m < 0) {
            return Err(AppError::validation(
                "Minutes to complete must not be negative",
            ));
        }

        Ok(NewRecipe {
            title,
            instructions,
            minutes_to_complete: self.minutes_to_complete,
        })
    }
}

#[derive(Debug, Serialize)]
pub struct RecipeResponse {
    pub id: i64,
    pub title: String,
    pub instructions: String,
    pub minutes_to_complete: Option<i64>,
    pub user: Option<Profile>,
}

impl RecipeResponse {
    pub fn with_owner(recipe: Recipe, owner: Profile) -> Self {
        Self {
            id: recipe.id,
            title: recipe.title,
            instructions: recipe.instructions,
            minutes_to_complete: recipe.minutes_to_complete,
            user: Some(owner),
        }
    }
}

impl From<RecipeWithOwnerRow> for RecipeResponse {
    fn from(r: RecipeWithOwnerRow) -> Self {
        let user = r.owner();
        Self {
            id: r.id,
            title: r.title,
            instructions: r.instructions,
            minutes_to_complete: r.minutes_to_complete,
            user,
        }
    }
}
