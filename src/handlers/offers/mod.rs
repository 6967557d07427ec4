//! Offer management handlers

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

/// Offer routes
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/offers/", get(handler::list_offers))
        .route("/offers/", post(handler::create_offer))
        .route("/offers/{id}/", get(handler::get_offer))
        .route("/offers/{id}/", put(handler::update_offer))
        .route("/offers/{id}/", patch(handler::update_offer))
        .route("/offers/{id}/", delete(handler::delete_offer))
}
