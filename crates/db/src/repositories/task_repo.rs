//! Repository for the `tasks` table.

use sqlx::PgPool;
use taskdeck_core::pagination::{PageRequest, PageResult};
use taskdeck_core::types::DbId;

use crate::error::{StorageError, StorageResult};
use crate::models::task::{Task, TaskRecord};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, project_id, title, description, status, created_at, updated_at";

/// Insertion order, by the identity column. Rows inserted in one transaction
/// share `created_at`, so timestamps cannot order them.
const ORDER_BY: &str = "ORDER BY seq";

/// Predicate for the project-scoped listing. The page query and its count
/// query must both use exactly this fragment.
const PROJECT_FILTER: &str = "WHERE project_id = $1";

const ENTITY: &str = "Task";

/// Provides CRUD and paginated listing for tasks.
pub struct TaskRepo;

impl TaskRepo {
    /// Insert a new task, returning the created row.
    ///
    /// Fails with [`StorageError::MissingReference`] if `project_id` does not
    /// name an existing project, and [`StorageError::Duplicate`] if `id` is taken.
    pub async fn create(pool: &PgPool, input: &TaskRecord) -> StorageResult<Task> {
        let query = format!(
            "INSERT INTO tasks (id, project_id, title, description, status)
             VALUES ($1, $2, $3, $4, $5)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Task>(&query)
            .bind(input.id)
            .bind(input.project_id)
            .bind(&input.title)
            .bind(&input.description)
            .bind(input.status)
            .fetch_one(pool)
            .await
            .map_err(|e| {
                StorageError::from_write(e, ENTITY, input.id, Some(("Project", input.project_id)))
            })
    }

    /// Find a task by its ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> StorageResult<Option<Task>> {
        let query = format!("SELECT {COLUMNS} FROM tasks WHERE id = $1");
        let task = sqlx::query_as::<_, Task>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await?;
        Ok(task)
    }

    /// One page of all tasks in insertion order.
    pub async fn list_page(pool: &PgPool, request: PageRequest) -> StorageResult<PageResult<Task>> {
        let query = format!("SELECT {COLUMNS} FROM tasks {ORDER_BY} LIMIT $1 OFFSET $2");
        let records = sqlx::query_as::<_, Task>(&query)
            .bind(request.limit())
            .bind(request.offset())
            .fetch_all(pool)
            .await?;

        let (total,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM tasks")
            .fetch_one(pool)
            .await?;

        tracing::debug!(
            page = request.page_number(),
            returned = records.len(),
            total,
            "Listed tasks page"
        );
        Ok(PageResult::new(request, total, records))
    }

    /// One page of the tasks belonging to `project_id`, in insertion order.
    ///
    /// An unknown project yields an empty page, not an error.
    pub async fn list_by_project(
        pool: &PgPool,
        project_id: DbId,
        request: PageRequest,
    ) -> StorageResult<PageResult<Task>> {
        let query = format!(
            "SELECT {COLUMNS} FROM tasks {PROJECT_FILTER} {ORDER_BY} LIMIT $2 OFFSET $3"
        );
        let records = sqlx::query_as::<_, Task>(&query)
            .bind(project_id)
            .bind(request.limit())
            .bind(request.offset())
            .fetch_all(pool)
            .await?;

        let count_query = format!("SELECT COUNT(*) FROM tasks {PROJECT_FILTER}");
        let (total,): (i64,) = sqlx::query_as(&count_query)
            .bind(project_id)
            .fetch_one(pool)
            .await?;

        tracing::debug!(
            %project_id,
            page = request.page_number(),
            returned = records.len(),
            total,
            "Listed project tasks page"
        );
        Ok(PageResult::new(request, total, records))
    }

    /// Every task of `project_id`, unpaginated, in insertion order.
    pub async fn list_all_by_project(pool: &PgPool, project_id: DbId) -> StorageResult<Vec<Task>> {
        let query = format!("SELECT {COLUMNS} FROM tasks {PROJECT_FILTER} {ORDER_BY}");
        let tasks = sqlx::query_as::<_, Task>(&query)
            .bind(project_id)
            .fetch_all(pool)
            .await?;
        Ok(tasks)
    }

    /// Every task belonging to any of `project_ids`, in insertion order.
    pub async fn list_by_projects(pool: &PgPool, project_ids: &[DbId]) -> StorageResult<Vec<Task>> {
        if project_ids.is_empty() {
            return Ok(Vec::new());
        }
        let query = format!("SELECT {COLUMNS} FROM tasks WHERE project_id = ANY($1) {ORDER_BY}");
        let tasks = sqlx::query_as::<_, Task>(&query)
            .bind(project_ids)
            .fetch_all(pool)
            .await?;
        Ok(tasks)
    }

    /// Replace every editable field of a task.
    ///
    /// The owning project is part of the match, never of the `SET`: a record
    /// whose `project_id` differs from the stored one matches no row. Returns
    /// `None` if no row matched.
    pub async fn update(pool: &PgPool, input: &TaskRecord) -> StorageResult<Option<Task>> {
        let query = format!(
            "UPDATE tasks SET
                title = $3,
                description = $4,
                status = $5,
                updated_at = NOW()
             WHERE id = $1 AND project_id = $2
             RETURNING {COLUMNS}"
        );
        let task = sqlx::query_as::<_, Task>(&query)
            .bind(input.id)
            .bind(input.project_id)
            .bind(&input.title)
            .bind(&input.description)
            .bind(input.status)
            .fetch_optional(pool)
            .await
            .map_err(|e| StorageError::from_write(e, ENTITY, input.id, None))?;
        Ok(task)
    }

    /// Delete a task by ID. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> StorageResult<bool> {
        let result = sqlx::query("DELETE FROM tasks WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await
            .map_err(|e| StorageError::from_delete(e, ENTITY, id))?;
        Ok(result.rows_affected() > 0)
    }
}
