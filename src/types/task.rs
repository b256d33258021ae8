//! The task record.

use serde::{Deserialize, Serialize};

use crate::id_gen::TaskId;

/// A tracked task: an immutable id and a mutable title.
///
/// Two tasks are equal when both id and title match. The store owns the
/// canonical instance of every task; what store operations return are
/// snapshot clones, so a record in hand never changes under later store
/// mutations.
///
/// # Examples
///
/// ```
/// use tasktrack::{Task, TaskId};
///
/// let task = Task::new(TaskId::new(0), "write the report");
/// assert_eq!(task.id, TaskId::new(0));
/// assert_eq!(task.title, "write the report");
///
/// let json = serde_json::to_value(&task).unwrap();
/// assert_eq!(json, serde_json::json!({ "id": 0, "title": "write the report" }));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Task {
    /// Unique id assigned at creation. Never changes afterwards.
    pub id: TaskId,

    /// Human-readable title. Mutable through the store's update operation.
    pub title: String,
}

impl Task {
    /// Creates a task record with the given id and title.
    pub fn new(id: TaskId, title: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
        }
    }
}
