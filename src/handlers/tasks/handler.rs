//! Task handler implementations

use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
};
use uuid::Uuid;
use validator::Validate;

use crate::{error::AppResult, services::TaskService, state::AppState};

use super::{
    request::{CreateTaskRequest, ListTasksQuery, UpdateTaskRequest},
    response::TaskResponse,
};

/// List tasks, optionally filtered by completion status
pub async fn list_tasks(
    State(state): State<AppState>,
    Query(query): Query<ListTasksQuery>,
) -> AppResult<Json<Vec<TaskResponse>>> {
    let tasks = TaskService::list_tasks(state.db(), query.completed.as_deref()).await?;
    Ok(Json(tasks))
}

/// Create a new task
pub async fn create_task(
    State(state): State<AppState>,
    Json(payload): Json<CreateTaskRequest>,
) -> AppResult<(StatusCode, Json<TaskResponse>)> {
    payload.validate()?;

    let task = TaskService::create_task(state.db(), payload).await?;

    Ok((StatusCode::CREATED, Json(task)))
}

/// Get a specific task
pub async fn get_task(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<Json<TaskResponse>> {
    let task = TaskService::get_task(state.db(), &id).await?;
    Ok(Json(task))
}

/// Update a task; PUT and PATCH share semantics (all fields optional)
pub async fn update_task(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(payload): Json<UpdateTaskRequest>,
) -> AppResult<Json<TaskResponse>> {
    payload.validate()?;

    let task = TaskService::update_task(state.db(), &id, payload).await?;

    Ok(Json(task))
}

/// Delete a task
pub async fn delete_task(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<StatusCode> {
    TaskService::delete_task(state.db(), &id).await?;
    Ok(StatusCode::NO_CONTENT)
}
