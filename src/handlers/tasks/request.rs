//! Task request DTOs
//!
//! `id`, `created_at`, and `updated_at` are server-owned; these structs
//! simply do not carry them, so client-supplied values are silently
//! discarded at deserialization.

use serde::Deserialize;
use validator::Validate;

use crate::constants::MAX_TASK_TITLE_LENGTH;

/// Create task request
#[derive(Debug, Deserialize, Validate)]
pub struct CreateTaskRequest {
    #[validate(length(min = 1, max = MAX_TASK_TITLE_LENGTH))]
    pub title: String,

    pub description: Option<String>,

    /// Priority 1..5 inclusive; defaults to 1 when omitted
    #[validate(range(min = 1, max = 5))]
    pub priority: Option<i32>,

    pub completed: Option<bool>,
}

/// Update task request; every field optional, omitted fields unchanged
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateTaskRequest {
    #[validate(length(min = 1, max = MAX_TASK_TITLE_LENGTH))]
    pub title: Option<String>,

    pub description: Option<String>,

    #[validate(range(min = 1, max = 5))]
    pub priority: Option<i32>,

    pub completed: Option<bool>,
}

/// List tasks query parameters
#[derive(Debug, Deserialize)]
pub struct ListTasksQuery {
    /// Raw string filter: "true"/"false" (case-insensitive); any other
    /// value is treated as falsy rather than rejected
    pub completed: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_readonly_fields_are_discarded() {
        let payload: CreateTaskRequest = serde_json::from_str(
            r#"{
                "id": "5f0c0f1e-0000-0000-0000-000000000000",
                "title": "New Task",
                "priority": 2,
                "created_at": "2020-01-01T00:00:00Z",
                "updated_at": "2020-01-01T00:00:00Z"
            }"#,
        )
        .unwrap();

        assert_eq!(payload.title, "New Task");
        assert_eq!(payload.priority, Some(2));
        assert!(payload.validate().is_ok());
    }

    #[test]
    fn test_priority_bounds_are_inclusive() {
        for priority in [1, 5] {
            let payload = CreateTaskRequest {
                title: "Boundary".to_string(),
                description: None,
                priority: Some(priority),
                completed: None,
            };
            assert!(payload.validate().is_ok(), "priority {priority} accepted");
        }
    }

    #[test]
    fn test_priority_out_of_range_rejected() {
        for priority in [0, 6] {
            let payload = CreateTaskRequest {
                title: "Invalid Task".to_string(),
                description: None,
                priority: Some(priority),
                completed: None,
            };
            let errors = payload.validate().unwrap_err();
            assert!(
                errors.field_errors().contains_key("priority"),
                "priority {priority} rejected with a priority error key"
            );
        }
    }

    #[test]
    fn test_update_allows_partial_body() {
        let payload: UpdateTaskRequest = serde_json::from_str(r#"{"completed": true}"#).unwrap();

        assert_eq!(payload.completed, Some(true));
        assert!(payload.title.is_none());
        assert!(payload.validate().is_ok());
    }
}
