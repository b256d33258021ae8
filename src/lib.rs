//! In-memory task tracking.
//!
//! `tasktrack` keeps a collection of [`Task`] records, each identified by
//! a monotonically increasing integer id, and exposes create, read,
//! update, delete, and clear operations over it. Everything lives in
//! process memory; nothing survives a restart.
//!
//! # Architecture
//!
//! - [`id_gen`] - [`TaskId`] and the [`IdGenerator`] counter issuing
//!   strictly increasing ids starting at 0.
//! - [`types`] - The [`Task`] record and the wire parameter types.
//! - [`error`] - [`TaskError`], the single failure mode (a lookup on an
//!   absent id), with its HTTP status mapping.
//! - [`store`] - The [`TaskStore`] trait and the in-memory implementation
//!   [`InMemoryTaskStore`].
//! - [`router`] - [`TaskRouter`], translating JSON request payloads into
//!   store calls and store errors into transport responses.
//!
//! # Quick Start
//!
//! ```
//! use std::sync::Arc;
//!
//! use tasktrack::{InMemoryTaskStore, TaskError, TaskId, TaskStore};
//!
//! # let rt = tokio::runtime::Runtime::new().unwrap();
//! # rt.block_on(async {
//! let store = Arc::new(InMemoryTaskStore::new());
//!
//! let first = store.create("write the report").await;
//! assert_eq!(first.id, TaskId::new(0));
//!
//! let renamed = store.update_title(first.id, "send the report").await?;
//! assert_eq!(renamed.title, "send the report");
//!
//! store.delete(first.id).await?;
//! assert_eq!(
//!     store.get(first.id).await,
//!     Err(TaskError::NotFound { id: first.id })
//! );
//! # Ok::<(), tasktrack::TaskError>(())
//! # }).unwrap();
//! ```

pub mod error;
pub mod id_gen;
pub mod router;
pub mod store;
pub mod types;

pub use error::TaskError;
pub use id_gen::{IdGenerator, TaskId};
pub use router::{RouterError, TaskRouter};
pub use store::memory::InMemoryTaskStore;
pub use store::TaskStore;
pub use types::params::{
    CreateTaskParams, DeleteTaskParams, ErrorResponse, GetTaskParams, UpdateTaskParams,
};
pub use types::task::Task;
