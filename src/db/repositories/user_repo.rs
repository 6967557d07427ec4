//! User repository
//!
//! Read-only: user rows are seeded and mutated by the external identity
//! collaborator, never by this codebase.

use sqlx::PgPool;

use crate::{error::AppResult, models::User};

/// Repository for user database operations
pub struct UserRepository;

impl UserRepository {
    /// List all users, stable by id
    pub async fn list(pool: &PgPool) -> AppResult<Vec<User>> {
        let users = sqlx::query_as::<_, User>(r#"SELECT * FROM users ORDER BY id"#)
            .fetch_all(pool)
            .await?;

        Ok(users)
    }

    /// Find user by ID
    pub async fn find_by_id(pool: &PgPool, id: i64) -> AppResult<Option<User>> {
        let user = sqlx::query_as::<_, User>(r#"SELECT * FROM users WHERE id = $1"#)
            .bind(id)
            .fetch_optional(pool)
            .await?;

        Ok(user)
    }

    /// Username for a user id, if the row still exists
    pub async fn username_by_id(pool: &PgPool, id: i64) -> AppResult<Option<String>> {
        let username: Option<String> =
            sqlx::query_scalar(r#"SELECT username FROM users WHERE id = $1"#)
                .bind(id)
                .fetch_optional(pool)
                .await?;

        Ok(username)
    }
}
