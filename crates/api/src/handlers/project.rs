//! Handlers for the `/projects` resource.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use serde::Serialize;
use taskdeck_core::error::CoreError;
use taskdeck_core::pagination::PageResult;
use taskdeck_core::types::DbId;
use taskdeck_db::models::project::{Project, ProjectView};
use taskdeck_db::models::task::Task;

use crate::error::{AppError, AppResult};
use crate::handlers::require_id;
use crate::middleware::auth::AuthUser;
use crate::query::PaginationParams;
use crate::response::DataResponse;
use crate::services::{ProjectService, TaskService};
use crate::state::AppState;

/// Body of a successful create.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectCreated {
    pub project_id: DbId,
}

fn not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound {
        entity: "Project",
        id,
    })
}

/// GET /api/v1/projects
pub async fn list(
    _user: AuthUser,
    State(state): State<AppState>,
    Query(params): Query<PaginationParams>,
) -> AppResult<Json<DataResponse<PageResult<Project>>>> {
    let page = ProjectService::get_all(&state.pool, params.page_request()).await?;
    Ok(Json(DataResponse { data: page }))
}

/// GET /api/v1/projects/{id}
pub async fn get_by_id(
    _user: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<DataResponse<Project>>> {
    let id = require_id(id, "Project id")?;
    let project = ProjectService::get(&state.pool, id)
        .await?
        .ok_or_else(|| not_found(id))?;
    Ok(Json(DataResponse { data: project }))
}

/// POST /api/v1/projects
///
/// Uses the body's `id` when present and non-nil, otherwise assigns one.
pub async fn create(
    user: AuthUser,
    State(state): State<AppState>,
    Json(view): Json<ProjectView>,
) -> AppResult<(StatusCode, Json<DataResponse<ProjectCreated>>)> {
    let record = view.into_record(None);
    let project = ProjectService::create(&state.pool, &record).await?;
    tracing::debug!(subject = %user.subject, project_id = %project.id, "Created project");
    Ok((
        StatusCode::CREATED,
        Json(DataResponse {
            data: ProjectCreated {
                project_id: project.id,
            },
        }),
    ))
}

/// PUT /api/v1/projects/{id}
///
/// Full replace: omitted fields are written as empty strings.
pub async fn update(
    user: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(view): Json<ProjectView>,
) -> AppResult<Json<DataResponse<Project>>> {
    let id = require_id(id, "Project id")?;
    let record = view.into_record(Some(id));
    let project = ProjectService::update(&state.pool, &record)
        .await?
        .ok_or_else(|| not_found(id))?;
    tracing::debug!(subject = %user.subject, project_id = %id, "Updated project");
    Ok(Json(DataResponse { data: project }))
}

/// DELETE /api/v1/projects/{id}
///
/// Succeeds whether or not the project existed. Fails with 409 while the
/// project still owns tasks.
pub async fn delete(
    user: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    let id = require_id(id, "Project id")?;
    ProjectService::delete(&state.pool, id).await?;
    tracing::debug!(subject = %user.subject, project_id = %id, "Deleted project");
    Ok(StatusCode::NO_CONTENT)
}

/// GET /api/v1/projects/{id}/tasks
pub async fn list_tasks(
    _user: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Query(params): Query<PaginationParams>,
) -> AppResult<Json<DataResponse<PageResult<Task>>>> {
    let id = require_id(id, "Project id")?;
    if !ProjectService::exists(&state.pool, id).await? {
        return Err(not_found(id));
    }
    let page = TaskService::get_tasks_of_project(&state.pool, id, params.page_request()).await?;
    Ok(Json(DataResponse { data: page }))
}
