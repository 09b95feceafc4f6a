// rest/routes/tasks.rs — Task CRUD routes.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde_json::{json, Value};
use std::sync::Arc;
use tracing::error;
use uuid::Uuid;

use crate::rest::error::ApiError;
use crate::tasks::{validate_fields, Task, TaskDraft, TaskPatch};
use crate::AppContext;

/// Well-formedness check for path ids, done before touching the store so a
/// malformed id is a client error rather than a store-layer fault.
fn parse_task_id(id: &str) -> Result<(), ApiError> {
    Uuid::parse_str(id).map(|_| ()).map_err(|_| ApiError::InvalidId)
}

pub async fn list_tasks(State(ctx): State<Arc<AppContext>>) -> Result<Json<Vec<Task>>, ApiError> {
    let rows = ctx.storage.list_tasks().await.map_err(|e| {
        error!(err = %e, "listing tasks failed");
        ApiError::Internal("Failed to fetch tasks")
    })?;
    Ok(Json(rows.into_iter().map(Task::from).collect()))
}

pub async fn create_task(
    State(ctx): State<Arc<AppContext>>,
    Json(body): Json<TaskDraft>,
) -> Result<(StatusCode, Json<Task>), ApiError> {
    body.validate()?;
    let row = ctx
        .storage
        .insert_task(&body.title, &body.description, body.completed)
        .await
        .map_err(|e| {
            error!(err = %e, "creating task failed");
            ApiError::Internal("Failed to create task")
        })?;
    Ok((StatusCode::CREATED, Json(row.into())))
}

pub async fn get_task(
    State(ctx): State<Arc<AppContext>>,
    Path(id): Path<String>,
) -> Result<Json<Task>, ApiError> {
    parse_task_id(&id)?;
    let row = ctx
        .storage
        .get_task(&id)
        .await
        .map_err(|e| {
            error!(err = %e, task_id = %id, "fetching task failed");
            ApiError::Internal("Failed to fetch task")
        })?
        .ok_or(ApiError::NotFound)?;
    Ok(Json(row.into()))
}

pub async fn update_task(
    State(ctx): State<Arc<AppContext>>,
    Path(id): Path<String>,
    Json(body): Json<TaskPatch>,
) -> Result<Json<Task>, ApiError> {
    parse_task_id(&id)?;
    let existing = ctx
        .storage
        .get_task(&id)
        .await
        .map_err(|e| {
            error!(err = %e, task_id = %id, "updating task failed");
            ApiError::Internal("Failed to update task")
        })?
        .ok_or(ApiError::NotFound)?;

    // Merge the patch over the stored record, then re-validate the result.
    let title = body.title.unwrap_or(existing.title);
    let description = body.description.unwrap_or(existing.description);
    let completed = body.completed.unwrap_or(existing.completed);
    validate_fields(&title, &description)?;

    let row = ctx
        .storage
        .update_task(&id, &title, &description, completed)
        .await
        .map_err(|e| {
            error!(err = %e, task_id = %id, "updating task failed");
            ApiError::Internal("Failed to update task")
        })?
        // Deleted between the read and the write — surface it as absent.
        .ok_or(ApiError::NotFound)?;
    Ok(Json(row.into()))
}

pub async fn delete_task(
    State(ctx): State<Arc<AppContext>>,
    Path(id): Path<String>,
) -> Result<Json<Value>, ApiError> {
    parse_task_id(&id)?;
    let removed = ctx.storage.delete_task(&id).await.map_err(|e| {
        error!(err = %e, task_id = %id, "deleting task failed");
        ApiError::Internal("Failed to delete task")
    })?;
    if !removed {
        return Err(ApiError::NotFound);
    }
    Ok(Json(json!({ "message": "Task deleted successfully" })))
}
