//! Task management handlers

mod handler;
pub mod request;
pub mod response;

pub use handler::*;
pub use request::*;
pub use response::*;

use axum::{
    Router,
    routing::{delete, get, patch, post, put},
};

use crate::state::AppState;

/// Task routes
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/tasks/", get(handler::list_tasks))
        .route("/tasks/", post(handler::create_task))
        .route("/tasks/{id}/", get(handler::get_task))
        .route("/tasks/{id}/", put(handler::update_task))
        .route("/tasks/{id}/", patch(handler::update_task))
        .route("/tasks/{id}/", delete(handler::delete_task))
}
