//! User service

use sqlx::PgPool;

use crate::{
    db::repositories::{OfferRepository, UserRepository},
    error::{AppError, AppResult},
    handlers::users::response::UserResponse,
    models::User,
};

/// User service for business logic
pub struct UserService;

impl UserService {
    /// List all users with their reverse-linked offer ids
    pub async fn list_users(pool: &PgPool) -> AppResult<Vec<UserResponse>> {
        let users = UserRepository::list(pool).await?;

        futures::future::try_join_all(users.into_iter().map(|u| Self::to_user_response(pool, u)))
            .await
    }

    /// Get user by ID
    pub async fn get_user(pool: &PgPool, id: i64) -> AppResult<UserResponse> {
        let user = UserRepository::find_by_id(pool, id)
            .await?
            .ok_or_else(|| AppError::NotFound("User not found".to_string()))?;

        Self::to_user_response(pool, user).await
    }

    async fn to_user_response(pool: &PgPool, user: User) -> AppResult<UserResponse> {
        let offers = OfferRepository::ids_by_author(pool, user.id).await?;

        Ok(UserResponse {
            id: user.id,
            username: user.username,
            offers,
        })
    }
}
