//! In-memory task store.
//!
//! [`InMemoryTaskStore`] keeps an insertion-ordered `IndexMap<TaskId, Task>`
//! and an [`IdGenerator`] inside a single `parking_lot::RwLock`. Guarding
//! the map and the counter together makes every operation one critical
//! section: two concurrent creates cannot read the same id before either
//! inserts, and a clear cannot interleave with a create between the map
//! wipe and the counter reset.
//!
//! # Concurrency
//!
//! Reads (`list`, `get`) take the read lock; mutations take the write
//! lock. No operation holds the lock across an await point or blocks on
//! I/O, so lock hold times are bounded by the map operation itself.
//!
//! # Examples
//!
//! ```
//! use tasktrack::{IdGenerator, InMemoryTaskStore};
//!
//! let store = InMemoryTaskStore::new();
//! assert!(store.is_empty());
//!
//! // Stores can share nothing: each one owns its generator.
//! let isolated = InMemoryTaskStore::with_id_generator(IdGenerator::new());
//! assert_eq!(isolated.len(), 0);
//! ```

use async_trait::async_trait;
use indexmap::IndexMap;
use parking_lot::RwLock;

use crate::error::TaskError;
use crate::id_gen::{IdGenerator, TaskId};
use crate::types::task::Task;

use super::TaskStore;

/// Map and id counter guarded as one unit. Invariant: every key equals
/// the `id` field of its task.
#[derive(Debug)]
struct StoreState {
    tasks: IndexMap<TaskId, Task>,
    ids: IdGenerator,
}

/// Thread-safe in-memory task store.
///
/// Tasks are listed in creation order; deleting a task keeps the relative
/// order of the rest. All returned records are snapshot clones.
///
/// # Construction
///
/// [`new`](InMemoryTaskStore::new) gives the store a fresh id counter.
/// [`with_id_generator`](InMemoryTaskStore::with_id_generator) accepts an
/// existing [`IdGenerator`], for callers that construct the counter
/// themselves:
///
/// ```
/// use tasktrack::{IdGenerator, InMemoryTaskStore};
///
/// let ids = IdGenerator::new();
/// let store = InMemoryTaskStore::with_id_generator(ids);
/// ```
#[derive(Debug)]
pub struct InMemoryTaskStore {
    state: RwLock<StoreState>,
}

impl InMemoryTaskStore {
    /// Creates an empty store with its own id generator.
    ///
    /// # Examples
    ///
    /// ```
    /// use tasktrack::InMemoryTaskStore;
    ///
    /// let store = InMemoryTaskStore::new();
    /// assert!(store.is_empty());
    /// ```
    pub fn new() -> Self {
        Self::with_id_generator(IdGenerator::new())
    }

    /// Creates an empty store around an existing id generator.
    ///
    /// The store takes ownership of the generator: ids issued through
    /// [`create`](TaskStore::create) advance it, and
    /// [`clear`](TaskStore::clear) resets it.
    pub fn with_id_generator(ids: IdGenerator) -> Self {
        Self {
            state: RwLock::new(StoreState {
                tasks: IndexMap::new(),
                ids,
            }),
        }
    }

    /// Returns the number of tasks stored.
    pub fn len(&self) -> usize {
        self.state.read().tasks.len()
    }

    /// Returns `true` if the store contains no tasks.
    pub fn is_empty(&self) -> bool {
        self.state.read().tasks.is_empty()
    }
}

impl Default for InMemoryTaskStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl TaskStore for InMemoryTaskStore {
    async fn list(&self) -> Vec<Task> {
        self.state.read().tasks.values().cloned().collect()
    }

    async fn get(&self, id: TaskId) -> Result<Task, TaskError> {
        self.state
            .read()
            .tasks
            .get(&id)
            .cloned()
            .ok_or(TaskError::NotFound { id })
    }

    async fn create(&self, title: &str) -> Task {
        let mut state = self.state.write();
        let id = state.ids.next_id();
        let task = Task::new(id, title);
        state.tasks.insert(id, task.clone());
        tracing::info!(id = %id, title = %task.title, "task created");
        task
    }

    async fn update_title(&self, id: TaskId, title: &str) -> Result<Task, TaskError> {
        let mut state = self.state.write();
        let task = state
            .tasks
            .get_mut(&id)
            .ok_or(TaskError::NotFound { id })?;
        task.title = title.to_string();
        let updated = task.clone();
        tracing::info!(id = %id, title = %updated.title, "task updated");
        Ok(updated)
    }

    async fn delete(&self, id: TaskId) -> Result<(), TaskError> {
        // shift_remove keeps the listing order of the remaining tasks.
        let removed = self.state.write().tasks.shift_remove(&id);
        match removed {
            Some(task) => {
                tracing::debug!(id = %id, title = %task.title, "task deleted");
                Ok(())
            }
            None => Err(TaskError::NotFound { id }),
        }
    }

    async fn clear(&self) {
        let mut state = self.state.write();
        let dropped = state.tasks.len();
        state.tasks.clear();
        state.ids.reset();
        tracing::debug!(dropped, "store cleared, id numbering restarted");
    }
}
