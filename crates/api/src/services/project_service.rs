use sqlx::PgPool;
use taskdeck_core::pagination::{PageRequest, PageResult};
use taskdeck_core::types::DbId;
use taskdeck_db::error::StorageResult;
use taskdeck_db::models::project::{Project, ProjectRecord};
use taskdeck_db::repositories::ProjectRepo;

use super::log_failure;

/// Facade over [`ProjectRepo`].
pub struct ProjectService;

impl ProjectService {
    /// One page of projects, each with its tasks.
    pub async fn get_all(pool: &PgPool, request: PageRequest) -> StorageResult<PageResult<Project>> {
        let page = ProjectRepo::list_page(pool, request)
            .await
            .inspect_err(|e| log_failure(e, "list projects"))?;
        tracing::debug!(
            page = page.current_page,
            records = page.records.len(),
            total = page.total_records,
            "Listed projects"
        );
        Ok(page)
    }

    pub async fn get(pool: &PgPool, id: DbId) -> StorageResult<Option<Project>> {
        ProjectRepo::find_by_id(pool, id)
            .await
            .inspect_err(|e| log_failure(e, "get project"))
    }

    pub async fn exists(pool: &PgPool, id: DbId) -> StorageResult<bool> {
        ProjectRepo::exists(pool, id)
            .await
            .inspect_err(|e| log_failure(e, "check project"))
    }

    pub async fn create(pool: &PgPool, record: &ProjectRecord) -> StorageResult<Project> {
        let project = ProjectRepo::create(pool, record)
            .await
            .inspect_err(|e| log_failure(e, "create project"))?;
        tracing::info!(project_id = %project.id, "Project created");
        Ok(project)
    }

    /// Full-record replace. `None` when no project has `record.id`.
    pub async fn update(pool: &PgPool, record: &ProjectRecord) -> StorageResult<Option<Project>> {
        let updated = ProjectRepo::update(pool, record)
            .await
            .inspect_err(|e| log_failure(e, "update project"))?;
        match &updated {
            Some(project) => tracing::info!(project_id = %project.id, "Project updated"),
            None => tracing::info!(project_id = %record.id, "Project to update not found"),
        }
        Ok(updated)
    }

    /// Delete by identifier. Deleting an unknown project succeeds.
    pub async fn delete(pool: &PgPool, id: DbId) -> StorageResult<()> {
        let deleted = ProjectRepo::delete(pool, id)
            .await
            .inspect_err(|e| log_failure(e, "delete project"))?;
        if deleted {
            tracing::info!(project_id = %id, "Project deleted");
        } else {
            tracing::warn!(project_id = %id, "No project deleted");
        }
        Ok(())
    }
}
