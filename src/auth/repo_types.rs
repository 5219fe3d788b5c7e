use sqlx::FromRow;

/// User record in the database.
#[derive(Debug, Clone, FromRow)]
pub struct User {
    pub id: i64,
    pub username: String,
    pub password_hash: String, // argon2 PHC string, never exposed
    pub image_url: Option<String>,
    pub bio: Option<String>,
}

/// A validated signup, password already hashed.
#[derive(Debug)]
pub struct NewUser {
    pub username: String,
    pub password_hash: String,
    pub image_url: Option<String>,
    pub bio: Option<String>,
}
