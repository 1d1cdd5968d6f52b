use sqlx::PgPool;
use taskdeck_core::pagination::{PageRequest, PageResult};
use taskdeck_core::types::DbId;
use taskdeck_db::error::StorageResult;
use taskdeck_db::models::task::{Task, TaskRecord};
use taskdeck_db::repositories::TaskRepo;

use super::log_failure;

/// Facade over [`TaskRepo`].
pub struct TaskService;

impl TaskService {
    pub async fn get_all(pool: &PgPool, request: PageRequest) -> StorageResult<PageResult<Task>> {
        TaskRepo::list_page(pool, request)
            .await
            .inspect_err(|e| log_failure(e, "list tasks"))
    }

    /// One page of the tasks owned by `project_id`.
    pub async fn get_tasks_of_project(
        pool: &PgPool,
        project_id: DbId,
        request: PageRequest,
    ) -> StorageResult<PageResult<Task>> {
        let page = TaskRepo::list_by_project(pool, project_id, request)
            .await
            .inspect_err(|e| log_failure(e, "list project tasks"))?;
        tracing::debug!(
            %project_id,
            page = page.current_page,
            records = page.records.len(),
            total = page.total_records,
            "Listed project tasks"
        );
        Ok(page)
    }

    pub async fn get(pool: &PgPool, id: DbId) -> StorageResult<Option<Task>> {
        TaskRepo::find_by_id(pool, id)
            .await
            .inspect_err(|e| log_failure(e, "get task"))
    }

    pub async fn create(pool: &PgPool, record: &TaskRecord) -> StorageResult<Task> {
        let task = TaskRepo::create(pool, record)
            .await
            .inspect_err(|e| log_failure(e, "create task"))?;
        tracing::info!(task_id = %task.id, project_id = %task.project_id, "Task created");
        Ok(task)
    }

    pub async fn update(pool: &PgPool, record: &TaskRecord) -> StorageResult<Option<Task>> {
        let updated = TaskRepo::update(pool, record)
            .await
            .inspect_err(|e| log_failure(e, "update task"))?;
        match &updated {
            Some(task) => tracing::info!(task_id = %task.id, status = %task.status, "Task updated"),
            None => tracing::info!(task_id = %record.id, "Task to update not found"),
        }
        Ok(updated)
    }

    /// Delete by identifier. Deleting an unknown task succeeds.
    pub async fn delete(pool: &PgPool, id: DbId) -> StorageResult<()> {
        let deleted = TaskRepo::delete(pool, id)
            .await
            .inspect_err(|e| log_failure(e, "delete task"))?;
        if deleted {
            tracing::info!(task_id = %id, "Task deleted");
        } else {
            tracing::warn!(task_id = %id, "No task deleted");
        }
        Ok(())
    }
}
