use axum::{
    extract::State,
    http::StatusCode,
    routing::get,
    Json, Router,
};
use tracing::instrument;

use crate::{
    auth::extractors::CurrentUser,
    error::AppError,
    extract::AppJson,
    recipes::{
        dto::{CreateRecipeRequest, RecipeResponse},
        services,
    },
    state::AppState,
};

pub fn recipe_routes() -> Router<AppState> {
    Router::new().route("/recipes", get(list_recipes).post(create_recipe))
}

#[instrument(skip(state))]
pub async fn list_recipes(
    State(state): State<AppState>,
    CurrentUser(user_id): CurrentUser,
) -> Result<Json<Vec<RecipeResponse>>, AppError> {
    let recipes = services::list_recipes(&state.db).await?;
    Ok(Json(recipes))
}

/// POST /recipes. The owner is the session user, whatever the body says.
#[instrument(skip(state, payload))]
pub async fn create_recipe(
    State(state): State<AppState>,
    CurrentUser(user_id): CurrentUser,
    AppJson(payload): AppJson<CreateRecipeRequest>,
) -> Result<(StatusCode, Json<RecipeResponse>), AppError> {
    let recipe = services::create_recipe(&state.db, user_id, payload).await?;
    Ok((StatusCode::CREATED, Json(recipe)))
}
