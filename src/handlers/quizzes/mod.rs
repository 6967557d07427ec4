//! Quiz retrieval handlers

mod handler;
pub mod response;

pub use handler::*;
pub use response::*;

use axum::{Router, routing::get};

use crate::state::AppState;

/// Quiz routes
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(handler::list_quizzes))
        .route("/r/{topic}/", get(handler::random_question))
        .route("/q/{topic}/", get(handler::list_questions))
}
