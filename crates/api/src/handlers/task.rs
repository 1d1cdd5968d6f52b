//! Handlers for the `/tasks` resource.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use serde::Serialize;
use taskdeck_core::error::CoreError;
use taskdeck_core::pagination::PageResult;
use taskdeck_core::types::DbId;
use taskdeck_db::models::task::{Task, TaskView};

use crate::error::{AppError, AppResult};
use crate::handlers::require_id;
use crate::middleware::auth::AuthUser;
use crate::query::PaginationParams;
use crate::response::DataResponse;
use crate::services::TaskService;
use crate::state::AppState;

/// Body of a successful create.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskCreated {
    pub task_id: DbId,
}

fn not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound { entity: "Task", id })
}

/// GET /api/v1/tasks
pub async fn list(
    _user: AuthUser,
    State(state): State<AppState>,
    Query(params): Query<PaginationParams>,
) -> AppResult<Json<DataResponse<PageResult<Task>>>> {
    let page = TaskService::get_all(&state.pool, params.page_request()).await?;
    Ok(Json(DataResponse { data: page }))
}

/// GET /api/v1/tasks/{id}
pub async fn get_by_id(
    _user: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<DataResponse<Task>>> {
    let id = require_id(id, "Task id")?;
    let task = TaskService::get(&state.pool, id)
        .await?
        .ok_or_else(|| not_found(id))?;
    Ok(Json(DataResponse { data: task }))
}

/// POST /api/v1/tasks
///
/// `projectId` must name an existing project; an unknown one is a 400.
pub async fn create(
    user: AuthUser,
    State(state): State<AppState>,
    Json(view): Json<TaskView>,
) -> AppResult<(StatusCode, Json<DataResponse<TaskCreated>>)> {
    require_id(view.project_id, "projectId")?;
    let record = view.into_record(None);
    let task = TaskService::create(&state.pool, &record).await?;
    tracing::debug!(subject = %user.subject, task_id = %task.id, "Created task");
    Ok((
        StatusCode::CREATED,
        Json(DataResponse {
            data: TaskCreated { task_id: task.id },
        }),
    ))
}

/// PUT /api/v1/tasks/{id}
///
/// Full replace of title, description and status. The body's `projectId`
/// must match the task's current project; tasks cannot move between projects.
pub async fn update(
    user: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(view): Json<TaskView>,
) -> AppResult<Json<DataResponse<Task>>> {
    let id = require_id(id, "Task id")?;
    require_id(view.project_id, "projectId")?;

    let existing = TaskService::get(&state.pool, id)
        .await?
        .ok_or_else(|| not_found(id))?;
    if existing.project_id != view.project_id {
        return Err(AppError::Core(CoreError::Conflict(format!(
            "Task {id} belongs to project {}",
            existing.project_id
        ))));
    }

    let record = view.into_record(Some(id));
    let task = TaskService::update(&state.pool, &record)
        .await?
        .ok_or_else(|| not_found(id))?;
    tracing::debug!(subject = %user.subject, task_id = %id, "Updated task");
    Ok(Json(DataResponse { data: task }))
}

/// DELETE /api/v1/tasks/{id}
///
/// Succeeds whether or not the task existed.
pub async fn delete(
    user: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    let id = require_id(id, "Task id")?;
    TaskService::delete(&state.pool, id).await?;
    tracing::debug!(subject = %user.subject, task_id = %id, "Deleted task");
    Ok(StatusCode::NO_CONTENT)
}
