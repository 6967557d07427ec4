//! HTTP Request Handlers
//!
//! This module contains all HTTP request handlers organized by domain,
//! plus the router assembly for each of the three deployable services.

pub mod health;
pub mod offers;
pub mod quizzes;
pub mod tasks;
pub mod users;

use axum::{Router, middleware};

use crate::{middleware::auth::optional_auth_middleware, state::AppState};

/// Quiz service router: read-only quiz and question retrieval
pub fn quiz_app(state: AppState) -> Router {
    Router::new()
        .merge(health::routes())
        .merge(quizzes::routes())
        .with_state(state)
}

/// Rental service router: offers and read-only users.
///
/// Bearer tokens are parsed for every request; individual handlers decide
/// whether an identity is required.
pub fn rental_app(state: AppState) -> Router {
    Router::new()
        .merge(health::routes())
        .merge(offers::routes())
        .merge(users::routes())
        .layer(middleware::from_fn_with_state(
            state.clone(),
            optional_auth_middleware,
        ))
        .with_state(state)
}

/// Task service router: task CRUD
pub fn task_app(state: AppState) -> Router {
    Router::new()
        .merge(health::routes())
        .merge(tasks::routes())
        .with_state(state)
}
