//! User handler implementations

use axum::{
    Json,
    extract::{Path, State},
};

use crate::{error::AppResult, services::UserService, state::AppState};

use super::response::UserResponse;

/// List all users
pub async fn list_users(State(state): State<AppState>) -> AppResult<Json<Vec<UserResponse>>> {
    let users = UserService::list_users(state.db()).await?;
    Ok(Json(users))
}

/// Get a specific user by ID
pub async fn get_user(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> AppResult<Json<UserResponse>> {
    let user = UserService::get_user(state.db(), id).await?;
    Ok(Json(user))
}
