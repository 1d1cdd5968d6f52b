//! Service facade between handlers and repositories.
//!
//! Services forward to the repositories with the caller's pool handle and log
//! the outcome. They add no business rules and never retry.

pub mod project_service;
pub mod task_service;

pub use project_service::ProjectService;
pub use task_service::TaskService;

use taskdeck_db::error::StorageError;

/// Log a failed storage call. Constraint rejections are the caller's fault
/// and log at `warn`; database faults log at `error`.
pub(crate) fn log_failure(err: &StorageError, operation: &'static str) {
    match err {
        StorageError::Database(e) => {
            tracing::error!(error = %e, operation, "Storage fault");
        }
        other => {
            tracing::warn!(error = %other, operation, "Storage rejected request");
        }
    }
}
