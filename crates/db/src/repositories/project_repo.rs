//! Repository for the `projects` table.

use std::collections::HashMap;

use sqlx::PgPool;
use taskdeck_core::pagination::{PageRequest, PageResult};
use taskdeck_core::types::DbId;

use crate::error::{StorageError, StorageResult};
use crate::models::project::{Project, ProjectRecord};
use crate::models::task::Task;
use crate::repositories::TaskRepo;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, name, description, created_at, updated_at";

const ENTITY: &str = "Project";

/// Provides CRUD and paginated listing for projects.
///
/// Every read returns projects with their `tasks` populated.
pub struct ProjectRepo;

impl ProjectRepo {
    /// Insert a new project, returning the created row (with no tasks).
    pub async fn create(pool: &PgPool, input: &ProjectRecord) -> StorageResult<Project> {
        let query = format!(
            "INSERT INTO projects (id, name, description)
             VALUES ($1, $2, $3)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Project>(&query)
            .bind(input.id)
            .bind(&input.name)
            .bind(&input.description)
            .fetch_one(pool)
            .await
            .map_err(|e| StorageError::from_write(e, ENTITY, input.id, None))
    }

    /// Find a project by its ID, with its tasks in insertion order.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> StorageResult<Option<Project>> {
        let query = format!("SELECT {COLUMNS} FROM projects WHERE id = $1");
        let project = sqlx::query_as::<_, Project>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await?;

        match project {
            Some(mut project) => {
                project.tasks = TaskRepo::list_all_by_project(pool, id).await?;
                Ok(Some(project))
            }
            None => Ok(None),
        }
    }

    /// Whether a project with this ID exists.
    pub async fn exists(pool: &PgPool, id: DbId) -> StorageResult<bool> {
        let (exists,): (bool,) = sqlx::query_as("SELECT EXISTS(SELECT 1 FROM projects WHERE id = $1)")
            .bind(id)
            .fetch_one(pool)
            .await?;
        Ok(exists)
    }

    /// One page of projects in insertion order, each with its tasks.
    ///
    /// The page, its tasks and the total count are separate queries with no
    /// shared snapshot.
    pub async fn list_page(
        pool: &PgPool,
        request: PageRequest,
    ) -> StorageResult<PageResult<Project>> {
        let query = format!(
            "SELECT {COLUMNS} FROM projects ORDER BY seq LIMIT $1 OFFSET $2"
        );
        let mut records = sqlx::query_as::<_, Project>(&query)
            .bind(request.limit())
            .bind(request.offset())
            .fetch_all(pool)
            .await?;

        let (total,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM projects")
            .fetch_one(pool)
            .await?;

        let ids: Vec<DbId> = records.iter().map(|p| p.id).collect();
        let tasks = TaskRepo::list_by_projects(pool, &ids).await?;
        attach_tasks(&mut records, tasks);

        tracing::debug!(
            page = request.page_number(),
            returned = records.len(),
            total,
            "Listed projects page"
        );
        Ok(PageResult::new(request, total, records))
    }

    /// Replace every editable field of a project.
    ///
    /// Returns `None` if no row with the record's `id` exists. Tasks are not
    /// touched; the returned project carries its current tasks.
    pub async fn update(pool: &PgPool, input: &ProjectRecord) -> StorageResult<Option<Project>> {
        let query = format!(
            "UPDATE projects SET
                name = $2,
                description = $3,
                updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        let project = sqlx::query_as::<_, Project>(&query)
            .bind(input.id)
            .bind(&input.name)
            .bind(&input.description)
            .fetch_optional(pool)
            .await
            .map_err(|e| StorageError::from_write(e, ENTITY, input.id, None))?;

        match project {
            Some(mut project) => {
                project.tasks = TaskRepo::list_all_by_project(pool, project.id).await?;
                Ok(Some(project))
            }
            None => Ok(None),
        }
    }

    /// Delete a project by ID. Returns `true` if a row was removed.
    ///
    /// A project that still owns tasks is rejected with
    /// [`StorageError::HasDependents`].
    pub async fn delete(pool: &PgPool, id: DbId) -> StorageResult<bool> {
        let result = sqlx::query("DELETE FROM projects WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await
            .map_err(|e| StorageError::from_delete(e, ENTITY, id))?;
        Ok(result.rows_affected() > 0)
    }
}

/// Distribute `tasks` onto their owning projects, preserving task order.
fn attach_tasks(projects: &mut [Project], tasks: Vec<Task>) {
    let mut by_project: HashMap<DbId, Vec<Task>> = HashMap::new();
    for task in tasks {
        by_project.entry(task.project_id).or_default().push(task);
    }
    for project in projects {
        project.tasks = by_project.remove(&project.id).unwrap_or_default();
    }
}
