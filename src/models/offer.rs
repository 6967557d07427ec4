//! Offer model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Rental offer database model
///
/// `author_id` is set once at creation from the authenticated caller and
/// never reassigned; it determines mutation rights.
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct Offer {
    pub id: i64,
    pub created: DateTime<Utc>,
    pub address: String,
    /// Size code: ST, 1BR, 2BR, 3BR, or MBR
    pub size: String,
    /// Property type code: H or APT
    pub property_type: String,
    pub price: i32,
    pub sharing: bool,
    pub text: String,
    pub author_id: i64,
}

impl Offer {
    /// Whether the given user may mutate this offer
    pub fn is_authored_by(&self, user_id: i64) -> bool {
        self.author_id == user_id
    }
}
