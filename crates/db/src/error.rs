//! Storage-layer error type.
//!
//! Every repository method returns [`StorageResult`]. Constraint violations
//! that callers can act on are classified into dedicated variants; anything
//! else stays wrapped as [`StorageError::Database`].

use taskdeck_core::types::DbId;

/// PostgreSQL SQLSTATE for `foreign_key_violation`.
const FOREIGN_KEY_VIOLATION: &str = "23503";
/// PostgreSQL SQLSTATE for `unique_violation`.
const UNIQUE_VIOLATION: &str = "23505";

pub type StorageResult<T> = Result<T, StorageError>;

#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    /// A write referenced a parent row that does not exist.
    #[error("{entity} references missing {referenced} {referenced_id}")]
    MissingReference {
        entity: &'static str,
        referenced: &'static str,
        referenced_id: DbId,
    },

    /// An insert reused an identifier that is already taken.
    #[error("{entity} with id {id} already exists")]
    Duplicate { entity: &'static str, id: DbId },

    /// A delete was rejected because child rows still reference the row.
    #[error("{entity} {id} still has dependent rows")]
    HasDependents { entity: &'static str, id: DbId },

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

impl StorageError {
    /// Classify a failed insert or update of `entity` `id`.
    ///
    /// `parent` names the row the write points at through its foreign key, if any.
    pub(crate) fn from_write(
        err: sqlx::Error,
        entity: &'static str,
        id: DbId,
        parent: Option<(&'static str, DbId)>,
    ) -> Self {
        match (sqlstate(&err).as_deref(), parent) {
            (Some(UNIQUE_VIOLATION), _) => Self::Duplicate { entity, id },
            (Some(FOREIGN_KEY_VIOLATION), Some((referenced, referenced_id))) => {
                Self::MissingReference {
                    entity,
                    referenced,
                    referenced_id,
                }
            }
            _ => Self::Database(err),
        }
    }

    /// Classify a failed delete of `entity` `id`.
    pub(crate) fn from_delete(err: sqlx::Error, entity: &'static str, id: DbId) -> Self {
        match sqlstate(&err).as_deref() {
            Some(FOREIGN_KEY_VIOLATION) => Self::HasDependents { entity, id },
            _ => Self::Database(err),
        }
    }
}

fn sqlstate(err: &sqlx::Error) -> Option<String> {
    match err {
        sqlx::Error::Database(db_err) => db_err.code().map(|code| code.into_owned()),
        _ => None,
    }
}
