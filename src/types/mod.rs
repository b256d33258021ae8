//! Wire types: the task record and request/response payloads.
//!
//! The stored record and the wire record are the same [`Task`] struct;
//! nothing about a task exists that the wire does not carry.

pub mod params;
pub mod task;

pub use params::{
    CreateTaskParams, DeleteTaskParams, ErrorResponse, GetTaskParams, UpdateTaskParams,
};
pub use task::Task;
