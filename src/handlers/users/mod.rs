//! User read-only handlers

mod handler;
pub mod response;

pub use handler::*;
pub use response::*;

use axum::{Router, routing::get};

use crate::state::AppState;

/// User routes
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/users/", get(handler::list_users))
        .route("/users/{id}/", get(handler::get_user))
}
