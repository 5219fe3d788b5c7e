use sqlx::{SqliteConnection, SqlitePool};

use crate::recipes::repo_types::{NewRecipe, Recipe, RecipeWithOwnerRow};

/// All recipes, oldest first, each with its owner's public columns.
pub async fn list_with_owners(db: &SqlitePool) -> sqlx::Result<Vec<RecipeWithOwnerRow>> {
    sqlx::query_as::<_, RecipeWithOwnerRow>(
        r#"
        SELECT r.id, r.title, r.instructions, r.minutes_to_complete,
               u.id        AS owner_id,
               u.username  AS owner_username,
               u.image_url AS owner_image_url,
               u.bio       AS owner_bio
          FROM recipes r
          LEFT JOIN users u ON u.id = r.user_id
         ORDER BY r.id ASC
        "#,
    )
    .fetch_all(db)
    .await
}

/// Insert a recipe owned by `user_id` within the caller's transaction.
pub async fn insert_recipe(
    conn: &mut SqliteConnection,
    user_id: i64,
    new: &NewRecipe,
) -> sqlx::Result<Recipe> {
    sqlx::query_as::<_, Recipe>(
        r#"
        INSERT INTO recipes (title, instructions, minutes_to_complete, user_id)
        VALUES (?, ?, ?, ?)
        RETURNING id, title, instructions, minutes_to_complete, user_id
        "#,
    )
    .bind(&new.title)
    .bind(&new.instructions)
    .bind(new.minutes_to_complete)
    .bind(user_id)
    .fetch_one(conn)
    .await
}
