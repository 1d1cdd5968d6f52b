//! Task entity model and inbound view.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use taskdeck_core::types::{resolve_id, DbId, Timestamp};

use crate::models::status::TaskStatus;

/// A row from the `tasks` table.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    pub id: DbId,
    pub project_id: DbId,
    pub title: String,
    pub description: String,
    pub status: TaskStatus,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// The fields a task insert or full-record update writes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskRecord {
    pub id: DbId,
    pub project_id: DbId,
    pub title: String,
    pub description: String,
    pub status: TaskStatus,
}

/// Inbound task payload.
///
/// Every field is optional on the wire: text defaults to empty, `status` to
/// `Todo`, and a missing `projectId` to the nil sentinel (which handlers reject).
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TaskView {
    pub id: Option<DbId>,
    pub project_id: DbId,
    pub title: String,
    pub description: String,
    pub status: TaskStatus,
}

impl TaskView {
    /// Build the record to persist, resolving identity like
    /// [`ProjectView::into_record`](crate::models::project::ProjectView::into_record).
    pub fn into_record(self, id: Option<DbId>) -> TaskRecord {
        TaskRecord {
            id: resolve_id([id, self.id]),
            project_id: self.project_id,
            title: self.title,
            description: self.description,
            status: self.status,
        }
    }
}
