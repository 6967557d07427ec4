//! Task repository

use sqlx::PgPool;
use uuid::Uuid;

use crate::{error::AppResult, models::Task};

/// Repository for task database operations
pub struct TaskRepository;

impl TaskRepository {
    /// Create a new task; id and timestamps are assigned by the database
    pub async fn create(
        pool: &PgPool,
        title: &str,
        description: Option<&str>,
        priority: i32,
        completed: bool,
    ) -> AppResult<Task> {
        let task = sqlx::query_as::<_, Task>(
            r#"
            INSERT INTO tasks (title, description, priority, completed)
            VALUES ($1, $2, $3, $4)
            RETURNING *
            "#,
        )
        .bind(title)
        .bind(description)
        .bind(priority)
        .bind(completed)
        .fetch_one(pool)
        .await?;

        Ok(task)
    }

    /// Find task by ID
    pub async fn find_by_id(pool: &PgPool, id: &Uuid) -> AppResult<Option<Task>> {
        let task = sqlx::query_as::<_, Task>(r#"SELECT * FROM tasks WHERE id = $1"#)
            .bind(id)
            .fetch_optional(pool)
            .await?;

        Ok(task)
    }

    /// Update task fields; omitted fields are left unchanged and
    /// `updated_at` is bumped server-side
    pub async fn update(
        pool: &PgPool,
        id: &Uuid,
        title: Option<&str>,
        description: Option<&str>,
        priority: Option<i32>,
        completed: Option<bool>,
    ) -> AppResult<Task> {
        let task = sqlx::query_as::<_, Task>(
            r#"
            UPDATE tasks
            SET
                title = COALESCE($2, title),
                description = COALESCE($3, description),
                priority = COALESCE($4, priority),
                completed = COALESCE($5, completed),
                updated_at = NOW()
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(title)
        .bind(description)
        .bind(priority)
        .bind(completed)
        .fetch_one(pool)
        .await?;

        Ok(task)
    }

    /// Delete task
    pub async fn delete(pool: &PgPool, id: &Uuid) -> AppResult<()> {
        sqlx::query(r#"DELETE FROM tasks WHERE id = $1"#)
            .bind(id)
            .execute(pool)
            .await?;

        Ok(())
    }

    /// List tasks, newest first, optionally narrowed by completion status
    pub async fn list(pool: &PgPool, completed: Option<bool>) -> AppResult<Vec<Task>> {
        let tasks = sqlx::query_as::<_, Task>(
            r#"
            SELECT * FROM tasks
            WHERE ($1::boolean IS NULL OR completed = $1)
            ORDER BY created_at DESC
            "#,
        )
        .bind(completed)
        .fetch_all(pool)
        .await?;

        Ok(tasks)
    }
}
