//! Project entity model and inbound view.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use taskdeck_core::types::{resolve_id, DbId, Timestamp};

use crate::models::task::Task;

/// A project row from the `projects` table, with its owned tasks.
///
/// `tasks` is not a column. Repositories populate it on reads; writes never
/// persist through it.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: DbId,
    pub name: String,
    pub description: String,
    #[sqlx(skip)]
    pub tasks: Vec<Task>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// The fields a project insert or full-record update writes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectRecord {
    pub id: DbId,
    pub name: String,
    pub description: String,
}

/// Inbound project payload. Omitted fields deserialize as empty strings.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ProjectView {
    pub id: Option<DbId>,
    pub name: String,
    pub description: String,
}

impl ProjectView {
    /// Build the record to persist.
    ///
    /// Identity is `id` if non-nil, else the view's own `id` if non-nil, else
    /// a fresh identifier.
    pub fn into_record(self, id: Option<DbId>) -> ProjectRecord {
        ProjectRecord {
            id: resolve_id([id, self.id]),
            name: self.name,
            description: self.description,
        }
    }
}
