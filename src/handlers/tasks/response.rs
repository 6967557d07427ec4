//! Task response DTOs

use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use crate::models::Task;

/// Task as exposed to clients, including the server-owned fields
#[derive(Debug, Serialize)]
pub struct TaskResponse {
    pub id: Uuid,
    pub title: String,
    pub description: Option<String>,
    pub priority: i32,
    pub completed: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Task> for TaskResponse {
    fn from(task: Task) -> Self {
        Self {
            id: task.id,
            title: task.title,
            description: task.description,
            priority: task.priority,
            completed: task.completed,
            created_at: task.created_at,
            updated_at: task.updated_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_task_response_field_names() {
        let value = serde_json::to_value(TaskResponse {
            id: Uuid::new_v4(),
            title: "Task 1".to_string(),
            description: Some("Description 1".to_string()),
            priority: 1,
            completed: false,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        })
        .unwrap();

        let mut names: Vec<_> = value.as_object().unwrap().keys().cloned().collect();
        names.sort();
        assert_eq!(
            names,
            vec![
                "completed",
                "created_at",
                "description",
                "id",
                "priority",
                "title",
                "updated_at"
            ]
        );
    }
}
