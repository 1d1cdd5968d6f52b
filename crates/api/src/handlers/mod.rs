pub mod project;
pub mod task;

use taskdeck_core::error::CoreError;
use taskdeck_core::types::{is_sentinel, DbId};

use crate::error::{AppError, AppResult};

/// Reject the nil identifier where a real one is required.
pub(crate) fn require_id(id: DbId, what: &str) -> AppResult<DbId> {
    if is_sentinel(id) {
        return Err(AppError::Core(CoreError::Validation(format!(
            "{what} is required"
        ))));
    }
    Ok(id)
}
