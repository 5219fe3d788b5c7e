use sqlx::{Executor, Sqlite, SqliteConnection};

use crate::auth::repo_types::{NewUser, User};

impl User {
    /// Find a user by username.
    pub async fn find_by_username<'e, E>(db: E, username: &str) -> sqlx::Result<Option<User>>
    where
        E: Executor<'e, Database = Sqlite>,
    {
        sqlx::query_as::<_, User>(
            r#"
            SELECT id, username, password_hash, image_url, bio
            FROM users
            WHERE username = ?
            "#,
        )
        .bind(username)
        .fetch_optional(db)
        .await
    }

    pub async fn find_by_id<'e, E>(db: E, id: i64) -> sqlx::Result<Option<User>>
    where
        E: Executor<'e, Database = Sqlite>,
    {
        sqlx::query_as::<_, User>(
            r#"
            SELECT id, username, password_hash, image_url, bio
            FROM users
            WHERE id = ?
            "#,
        )
        .bind(id)
        .fetch_optional(db)
        .await
    }

    /// Insert a new user inside the caller's transaction.
    pub async fn insert(conn: &mut SqliteConnection, new: &NewUser) -> sqlx::Result<User> {
        sqlx::query_as::<_, User>(
            r#"
            INSERT INTO users (username, password_hash, image_url, bio)
            VALUES (?, ?, ?, ?)
            RETURNING id, username, password_hash, image_url, bio
            "#,
        )
        .bind(&new.username)
        .bind(&new.password_hash)
        .bind(&new.image_url)
        .bind(&new.bio)
        .fetch_one(conn)
        .await
    }
}
