//! Task store trait and the in-memory implementation.
//!
//! # Architecture
//!
//! The storage layer has two pieces:
//!
//! 1. **[`TaskStore`]** -- A type-erasure interface for use with
//!    `Arc<dyn TaskStore>` in [`TaskRouter`](crate::router::TaskRouter).
//!
//! 2. **[`InMemoryTaskStore`](memory::InMemoryTaskStore)** -- The in-memory
//!    implementation: an insertion-ordered id -> task map paired with an
//!    [`IdGenerator`](crate::id_gen::IdGenerator), both behind one lock.
//!
//! To serve requests: build an `InMemoryTaskStore`, wrap it in
//! `Arc<dyn TaskStore>`, and hand it to `TaskRouter`.

pub mod memory;

use async_trait::async_trait;

use crate::error::TaskError;
use crate::id_gen::TaskId;
use crate::types::task::Task;

/// Type-erasure interface for task storage.
///
/// Every operation returns snapshot clones: a [`Task`] or `Vec<Task>`
/// obtained from the store is decoupled from later store mutations.
///
/// # Thread Safety
///
/// Implementations must be `Send + Sync` to support concurrent access
/// from multiple request handlers.
///
/// # Atomicity
///
/// Each operation must be a single atomic transition of the store:
/// id allocation and insertion happen under one critical section in
/// [`create`](TaskStore::create), and [`clear`](TaskStore::clear) empties
/// the map and resets id numbering together, so no caller can observe one
/// without the other.
///
/// # Examples
///
/// ```
/// use std::sync::Arc;
///
/// use tasktrack::{InMemoryTaskStore, TaskStore};
///
/// # let rt = tokio::runtime::Runtime::new().unwrap();
/// # rt.block_on(async {
/// let store: Arc<dyn TaskStore> = Arc::new(InMemoryTaskStore::new());
/// let task = store.create("walk the dog").await;
/// assert_eq!(task.id.value(), 0);
/// assert_eq!(store.list().await, vec![task]);
/// # });
/// ```
#[async_trait]
pub trait TaskStore: Send + Sync {
    /// Returns all tasks in creation order.
    ///
    /// The returned vector is a snapshot; mutating the store afterwards
    /// never changes a vector obtained earlier.
    async fn list(&self) -> Vec<Task>;

    /// Retrieves a task by id.
    ///
    /// # Errors
    ///
    /// - [`TaskError::NotFound`] if no task with the given id exists.
    async fn get(&self, id: TaskId) -> Result<Task, TaskError>;

    /// Creates a task with a freshly allocated id and the given title.
    ///
    /// The title is stored verbatim; empty and duplicate titles are
    /// accepted. The new task is appended to the listing order. Always
    /// succeeds.
    async fn create(&self, title: &str) -> Task;

    /// Replaces the title of an existing task.
    ///
    /// The task's id and its position in listing order are unchanged.
    /// Returns the updated task.
    ///
    /// # Errors
    ///
    /// - [`TaskError::NotFound`] if no task with the given id exists.
    async fn update_title(&self, id: TaskId, title: &str) -> Result<Task, TaskError>;

    /// Removes a task.
    ///
    /// Remaining tasks keep their relative listing order.
    ///
    /// # Errors
    ///
    /// - [`TaskError::NotFound`] if no task with the given id exists.
    async fn delete(&self, id: TaskId) -> Result<(), TaskError>;

    /// Removes every task and restarts id numbering from 0.
    ///
    /// The next [`create`](TaskStore::create) receives id 0 regardless of
    /// prior history.
    async fn clear(&self);
}
