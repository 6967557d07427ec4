//! Question model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Question database model
///
/// `quiz_id` is a plain column without a foreign-key constraint: quiz
/// deletion leaves stale references behind, tolerated by design.
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct Question {
    pub id: i64,
    pub quiz_id: i64,
    /// Question technique; 0 = multiple choice, the only supported value
    pub technique: i32,
    pub title: String,
    /// Ordinal difficulty, 0 (fundamental) through 4 (expert)
    pub difficulty: i32,
    pub is_active: bool,
    pub date_created: DateTime<Utc>,
    pub date_updated: DateTime<Utc>,
}
