//! Answer model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Answer database model
///
/// Rows are removed by the database when their question is deleted.
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct Answer {
    pub id: i64,
    pub question_id: i64,
    pub answer_text: String,
    pub is_right: bool,
    pub date_updated: DateTime<Utc>,
}
