//! Task model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Task database model
///
/// `id`, `created_at`, and `updated_at` are server-assigned; client input
/// for them is discarded at the request-DTO boundary.
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct Task {
    pub id: Uuid,
    pub title: String,
    pub description: Option<String>,
    /// Priority 1 (lowest) through 5 (highest), inclusive
    pub priority: i32,
    pub completed: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
