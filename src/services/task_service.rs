//! Task service

use sqlx::PgPool;
use uuid::Uuid;

use crate::{
    constants::DEFAULT_TASK_PRIORITY,
    db::repositories::TaskRepository,
    error::{AppError, AppResult},
    handlers::tasks::{
        request::{CreateTaskRequest, UpdateTaskRequest},
        response::TaskResponse,
    },
};

/// Task service for business logic
pub struct TaskService;

impl TaskService {
    /// List tasks, optionally narrowed by the raw `completed` query value
    pub async fn list_tasks(
        pool: &PgPool,
        completed_param: Option<&str>,
    ) -> AppResult<Vec<TaskResponse>> {
        let tasks = TaskRepository::list(pool, completed_filter(completed_param)).await?;

        Ok(tasks.into_iter().map(TaskResponse::from).collect())
    }

    /// Create a new task
    pub async fn create_task(pool: &PgPool, payload: CreateTaskRequest) -> AppResult<TaskResponse> {
        let task = TaskRepository::create(
            pool,
            &payload.title,
            payload.description.as_deref(),
            payload.priority.unwrap_or(DEFAULT_TASK_PRIORITY),
            payload.completed.unwrap_or(false),
        )
        .await?;

        Ok(TaskResponse::from(task))
    }

    /// Get task by ID
    pub async fn get_task(pool: &PgPool, id: &Uuid) -> AppResult<TaskResponse> {
        let task = TaskRepository::find_by_id(pool, id)
            .await?
            .ok_or_else(|| AppError::NotFound("Task not found".to_string()))?;

        Ok(TaskResponse::from(task))
    }

    /// Update task (full and partial updates share semantics: omitted
    /// fields are left unchanged)
    pub async fn update_task(
        pool: &PgPool,
        id: &Uuid,
        payload: UpdateTaskRequest,
    ) -> AppResult<TaskResponse> {
        // Existence check first so a missing row is 404, not a bare
        // RowNotFound from the update statement
        TaskRepository::find_by_id(pool, id)
            .await?
            .ok_or_else(|| AppError::NotFound("Task not found".to_string()))?;

        let task = TaskRepository::update(
            pool,
            id,
            payload.title.as_deref(),
            payload.description.as_deref(),
            payload.priority,
            payload.completed,
        )
        .await?;

        Ok(TaskResponse::from(task))
    }

    /// Delete task
    pub async fn delete_task(pool: &PgPool, id: &Uuid) -> AppResult<()> {
        TaskRepository::find_by_id(pool, id)
            .await?
            .ok_or_else(|| AppError::NotFound("Task not found".to_string()))?;

        TaskRepository::delete(pool, id).await
    }
}

/// Interpret the raw `completed` query parameter.
///
/// Absent means no filter; `"true"` (any casing) selects completed rows;
/// every other value is treated as falsy rather than rejected.
fn completed_filter(param: Option<&str>) -> Option<bool> {
    param.map(|v| v.eq_ignore_ascii_case("true"))
}
