//! Request parameter types for router operations.
//!
//! These types correspond to the JSON payloads the request-handling layer
//! receives for each store operation, plus the error envelope it returns
//! when an operation fails.

use serde::{Deserialize, Serialize};

use crate::id_gen::TaskId;

/// Parameters for create requests.
///
/// # Examples
///
/// ```
/// use tasktrack::CreateTaskParams;
///
/// let params: CreateTaskParams =
///     serde_json::from_value(serde_json::json!({ "title": "buy milk" })).unwrap();
/// assert_eq!(params.title, "buy milk");
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateTaskParams {
    /// Title for the new task. Stored verbatim; any string is accepted.
    pub title: String,
}

/// Parameters for get requests.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GetTaskParams {
    /// The task id to retrieve.
    pub id: TaskId,
}

/// Parameters for update requests.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateTaskParams {
    /// The task id to update.
    pub id: TaskId,

    /// Replacement title.
    pub title: String,
}

/// Parameters for delete requests.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeleteTaskParams {
    /// The task id to remove.
    pub id: TaskId,
}

/// Error envelope a transport serializes alongside the mapped status code.
///
/// # Examples
///
/// ```
/// use tasktrack::ErrorResponse;
///
/// let body = ErrorResponse::new("task not found: 9");
/// let json = serde_json::to_value(&body).unwrap();
/// assert_eq!(json["message"], "task not found: 9");
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Human-readable description of the failure.
    pub message: String,
}

impl ErrorResponse {
    /// Creates an error envelope with the given message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}
