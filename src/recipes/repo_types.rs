use sqlx::FromRow;

use crate::auth::dto::Profile;

#[derive(Debug, Clone, FromRow)]
pub struct Recipe {
    pub id: i64,
    pub title: String,
    pub instructions: String,
    pub minutes_to_complete: Option<i64>,
    pub user_id: i64,
}

/// A validated recipe awaiting its owner.
#[derive(Debug)]
pub struct NewRecipe {
    pub title: String,
    pub instructions: String,
    pub minutes_to_complete: Option<i64>,
}

/// Recipe joined to its owner. Owner columns are NULL when the user row is
/// missing.
#[derive(Debug, FromRow)]
pub struct RecipeWithOwnerRow {
    pub id: i64,
    pub title: String,
    pub instructions: String,
    pub minutes_to_complete: Option<i64>,
    pub owner_id: Option<i64>,
    pub owner_username: Option<String>,
    pub owner_image_url: Option<String>,
    pub owner_bio: Option<String>,
}

impl RecipeWithOwnerRow {
    pub fn owner(&self) -> Option<Profile> {
        let (Some(id), Some(username)) = (self.owner_id, self.owner_username.clone()) else {
            return None;
        };
        Some(Profile {
            id,
            username,
            image_url: self.owner_image_url.clone(),
            bio: self.owner_bio.clone(),
        })
    }
}
