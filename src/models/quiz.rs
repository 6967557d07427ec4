//! Quiz model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Quiz database model
///
/// `category_id` is a plain column without a foreign-key constraint:
/// category deletion leaves stale references behind, tolerated by design.
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct Quiz {
    pub id: i64,
    pub title: String,
    pub category_id: i64,
    pub date_created: DateTime<Utc>,
}
