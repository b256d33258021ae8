//! Error type for task store operations.
//!
//! Provides [`TaskError`] with HTTP status mapping for wire responses.

use http::StatusCode;
use thiserror::Error;

use crate::id_gen::TaskId;

/// Errors produced by task store operations.
///
/// The only failure a well-formed request can hit is a lookup on an id
/// with no task behind it. The offending id is carried so callers can
/// echo it back in diagnostics and responses. Use
/// [`status_code`](TaskError::status_code) to map to the HTTP status a
/// transport should answer with.
///
/// # Examples
///
/// ```
/// use tasktrack::{TaskError, TaskId};
///
/// let err = TaskError::NotFound { id: TaskId::new(4) };
/// assert_eq!(err.to_string(), "task not found: 4");
/// assert_eq!(err.status_code(), http::StatusCode::NOT_FOUND);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TaskError {
    /// No task with the given id exists in the store.
    #[error("task not found: {id}")]
    NotFound {
        /// The id that had no matching task.
        id: TaskId,
    },
}

impl TaskError {
    /// Maps this error to the HTTP status a transport should answer with.
    ///
    /// # Examples
    ///
    /// ```
    /// use tasktrack::{TaskError, TaskId};
    ///
    /// let err = TaskError::NotFound { id: TaskId::new(1) };
    /// assert_eq!(err.status_code().as_u16(), 404);
    /// ```
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::NotFound { .. } => StatusCode::NOT_FOUND,
        }
    }
}
