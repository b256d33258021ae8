//! Sequential task id allocation.
//!
//! [`IdGenerator`] issues [`TaskId`]s starting at 0 and strictly increasing
//! until [`reset`](IdGenerator::reset). Each store owns its own generator
//! instance, so two stores never share counter state.

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

use serde::{Deserialize, Serialize};

/// Unique identifier for a [`Task`](crate::types::task::Task).
///
/// Assigned once at creation and immutable afterwards. Serializes
/// transparently as its integer value.
///
/// # Examples
///
/// ```
/// use tasktrack::TaskId;
///
/// let id = TaskId::new(7);
/// assert_eq!(id.value(), 7);
/// assert_eq!(id.to_string(), "7");
/// assert_eq!(serde_json::to_value(id).unwrap(), serde_json::json!(7));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TaskId(u64);

impl TaskId {
    /// Creates a task id from its integer value.
    pub const fn new(value: u64) -> Self {
        Self(value)
    }

    /// Returns the integer value of this id.
    pub const fn value(self) -> u64 {
        self.0
    }
}

impl fmt::Display for TaskId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for TaskId {
    fn from(value: u64) -> Self {
        Self(value)
    }
}

impl From<TaskId> for u64 {
    fn from(id: TaskId) -> Self {
        id.0
    }
}

/// Allocator for unique, strictly increasing task ids.
///
/// The counter starts at 0 and advances by one per
/// [`next_id`](IdGenerator::next_id) call. Increments are atomic, so
/// concurrent callers always observe distinct ids.
///
/// [`reset`](IdGenerator::reset) restarts numbering from 0. Ids issued
/// before a reset may collide with ids issued after it, so a reset must be
/// paired with clearing whatever store referenced them (see
/// [`TaskStore::clear`](crate::store::TaskStore::clear)).
///
/// # Examples
///
/// ```
/// use tasktrack::IdGenerator;
///
/// let ids = IdGenerator::new();
/// assert_eq!(ids.next_id().value(), 0);
/// assert_eq!(ids.next_id().value(), 1);
///
/// ids.reset();
/// assert_eq!(ids.next_id().value(), 0);
/// ```
#[derive(Debug)]
pub struct IdGenerator {
    next: AtomicU64,
}

impl IdGenerator {
    /// Creates a generator whose first issued id is 0.
    pub fn new() -> Self {
        Self {
            next: AtomicU64::new(0),
        }
    }

    /// Returns the next unissued id and advances the counter.
    pub fn next_id(&self) -> TaskId {
        TaskId(self.next.fetch_add(1, Ordering::Relaxed))
    }

    /// Restarts numbering from 0.
    pub fn reset(&self) {
        self.next.store(0, Ordering::Relaxed);
    }
}

impl Default for IdGenerator {
    fn default() -> Self {
        Self::new()
    }
}
