//! Offer response DTOs

use serde::Serialize;

/// Offer as exposed to clients; `author` is the author's username
#[derive(Debug, Serialize)]
pub struct OfferResponse {
    pub id: i64,
    pub address: String,
    pub size: String,
    pub property_type: String,
    pub price: i32,
    pub sharing: bool,
    pub text: String,
    pub author: String,
}
