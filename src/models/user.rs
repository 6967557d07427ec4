//! User model

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// User database model
///
/// Identity is an external collaborator: rows are seeded and managed
/// outside this codebase, and the rental service only reads them.
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    pub username: String,
}
