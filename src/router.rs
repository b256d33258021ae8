//! Request routing bridging wire payloads to store operations.
//!
//! [`TaskRouter`] owns an `Arc<dyn TaskStore>` and exposes one handler per
//! store operation. Handlers take the request's JSON params, decode them
//! into the typed structs from [`types::params`](crate::types::params),
//! call the store, and serialize the outcome back to JSON.
//!
//! # Design
//!
//! The router is transport-agnostic: it knows nothing about sockets,
//! paths, or methods. A transport layer maps its requests onto the
//! `handle_*` methods and turns a [`RouterError`] into a response using
//! [`RouterError::status_code`] and [`RouterError::to_body`].
//!
//! # Error Conversion
//!
//! Malformed payloads become [`RouterError::InvalidParams`] (a 400).
//! Store failures pass through as [`RouterError::Store`], keeping the
//! status mapping of [`TaskError::status_code`] (404 for a missing id).

use std::sync::Arc;

use http::StatusCode;
use serde_json::Value;
use thiserror::Error;

use crate::error::TaskError;
use crate::store::TaskStore;
use crate::types::params::{
    CreateTaskParams, DeleteTaskParams, ErrorResponse, GetTaskParams, UpdateTaskParams,
};

/// Errors surfaced by router handlers.
#[derive(Debug, Error)]
pub enum RouterError {
    /// The request payload did not decode into the operation's parameters.
    #[error("{0}")]
    InvalidParams(String),

    /// The store rejected the operation.
    #[error(transparent)]
    Store(#[from] TaskError),

    /// A response value failed to serialize.
    #[error("failed to serialize response: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl RouterError {
    /// Maps this error to the HTTP status a transport should answer with.
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::InvalidParams(_) => StatusCode::BAD_REQUEST,
            Self::Store(err) => err.status_code(),
            Self::Serialization(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Builds the serializable error envelope for this error.
    pub fn to_body(&self) -> ErrorResponse {
        ErrorResponse::new(self.to_string())
    }
}

/// Routes wire requests to a [`TaskStore`].
///
/// # Construction
///
/// ```
/// use std::sync::Arc;
///
/// use tasktrack::{InMemoryTaskStore, TaskRouter};
///
/// let store = Arc::new(InMemoryTaskStore::new());
/// let router = TaskRouter::new(store);
/// ```
pub struct TaskRouter {
    store: Arc<dyn TaskStore>,
}

impl TaskRouter {
    /// Creates a router over the given store.
    pub fn new(store: Arc<dyn TaskStore>) -> Self {
        Self { store }
    }

    /// Returns a reference to the underlying store.
    ///
    /// Useful for direct store access in tests or advanced use cases.
    pub fn store(&self) -> &Arc<dyn TaskStore> {
        &self.store
    }

    /// Handles a "list all" request.
    ///
    /// Returns every task in creation order as a JSON array.
    ///
    /// # Errors
    ///
    /// - [`RouterError::Serialization`] if the response fails to serialize.
    pub async fn handle_list(&self) -> Result<Value, RouterError> {
        let tasks = self.store.list().await;
        Ok(serde_json::to_value(tasks)?)
    }

    /// Handles a "get by id" request.
    ///
    /// # Errors
    ///
    /// - [`RouterError::InvalidParams`] if the payload is malformed.
    /// - [`RouterError::Store`] with [`TaskError::NotFound`] if the id has
    ///   no matching task.
    pub async fn handle_get(&self, params: Value) -> Result<Value, RouterError> {
        let params: GetTaskParams = serde_json::from_value(params)
            .map_err(|e| RouterError::InvalidParams(format!("invalid get params: {e}")))?;

        let task = self.store.get(params.id).await?;
        Ok(serde_json::to_value(task)?)
    }

    /// Handles a "create" request.
    ///
    /// Passes the client-supplied title through verbatim and returns the
    /// created task.
    ///
    /// # Errors
    ///
    /// - [`RouterError::InvalidParams`] if the payload is malformed.
    pub async fn handle_create(&self, params: Value) -> Result<Value, RouterError> {
        let params: CreateTaskParams = serde_json::from_value(params)
            .map_err(|e| RouterError::InvalidParams(format!("invalid create params: {e}")))?;

        let task = self.store.create(&params.title).await;
        Ok(serde_json::to_value(task)?)
    }

    /// Handles an "update by id" request.
    ///
    /// # Errors
    ///
    /// - [`RouterError::InvalidParams`] if the payload is malformed.
    /// - [`RouterError::Store`] with [`TaskError::NotFound`] if the id has
    ///   no matching task.
    pub async fn handle_update(&self, params: Value) -> Result<Value, RouterError> {
        let params: UpdateTaskParams = serde_json::from_value(params)
            .map_err(|e| RouterError::InvalidParams(format!("invalid update params: {e}")))?;

        let task = self.store.update_title(params.id, &params.title).await?;
        Ok(serde_json::to_value(task)?)
    }

    /// Handles a "delete by id" request.
    ///
    /// Returns `Value::Null` on success; the operation has no response
    /// body.
    ///
    /// # Errors
    ///
    /// - [`RouterError::InvalidParams`] if the payload is malformed.
    /// - [`RouterError::Store`] with [`TaskError::NotFound`] if the id has
    ///   no matching task.
    pub async fn handle_delete(&self, params: Value) -> Result<Value, RouterError> {
        let params: DeleteTaskParams = serde_json::from_value(params)
            .map_err(|e| RouterError::InvalidParams(format!("invalid delete params: {e}")))?;

        self.store.delete(params.id).await?;
        Ok(Value::Null)
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::id_gen::TaskId;
    use crate::store::memory::InMemoryTaskStore;

    fn make_router() -> TaskRouter {
        TaskRouter::new(Arc::new(InMemoryTaskStore::new()))
    }

    // ---- Create tests ----

    #[tokio::test]
    async fn handle_create_returns_created_task() {
        let router = make_router();
        let result = router
            .handle_create(json!({ "title": "first" }))
            .await
            .unwrap();
        assert_eq!(result, json!({ "id": 0, "title": "first" }));
    }

    #[tokio::test]
    async fn handle_create_rejects_malformed_params() {
        let router = make_router();
        let err = router
            .handle_create(json!({ "name": "wrong field" }))
            .await
            .unwrap_err();
        assert!(matches!(err, RouterError::InvalidParams(_)));
        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
    }

    // ---- Get tests ----

    #[tokio::test]
    async fn handle_get_returns_task() {
        let router = make_router();
        router
            .handle_create(json!({ "title": "look me up" }))
            .await
            .unwrap();

        let result = router.handle_get(json!({ "id": 0 })).await.unwrap();
        assert_eq!(result, json!({ "id": 0, "title": "look me up" }));
    }

    #[tokio::test]
    async fn handle_get_missing_maps_to_not_found() {
        let router = make_router();
        let err = router.handle_get(json!({ "id": 42 })).await.unwrap_err();
        assert!(matches!(
            &err,
            RouterError::Store(TaskError::NotFound { id }) if *id == TaskId::new(42)
        ));
        assert_eq!(err.status_code(), StatusCode::NOT_FOUND);
        assert_eq!(err.to_body().message, "task not found: 42");
    }

    #[tokio::test]
    async fn handle_get_rejects_non_integer_id() {
        let router = make_router();
        let err = router.handle_get(json!({ "id": "abc" })).await.unwrap_err();
        assert!(matches!(err, RouterError::InvalidParams(_)));
    }

    // ---- Update tests ----

    #[tokio::test]
    async fn handle_update_renames_task() {
        let router = make_router();
        router
            .handle_create(json!({ "title": "draft" }))
            .await
            .unwrap();

        let result = router
            .handle_update(json!({ "id": 0, "title": "final" }))
            .await
            .unwrap();
        assert_eq!(result, json!({ "id": 0, "title": "final" }));
    }

    #[tokio::test]
    async fn handle_update_missing_maps_to_not_found() {
        let router = make_router();
        let err = router
            .handle_update(json!({ "id": 3, "title": "nobody home" }))
            .await
            .unwrap_err();
        assert_eq!(err.status_code(), StatusCode::NOT_FOUND);
    }

    // ---- Delete tests ----

    #[tokio::test]
    async fn handle_delete_returns_null_and_removes() {
        let router = make_router();
        router
            .handle_create(json!({ "title": "gone soon" }))
            .await
            .unwrap();

        let deleted = router.handle_delete(json!({ "id": 0 })).await.unwrap();
        assert_eq!(deleted, Value::Null);

        let listed = router.handle_list().await.unwrap();
        assert_eq!(listed, json!([]));
    }

    #[tokio::test]
    async fn handle_delete_missing_maps_to_not_found() {
        let router = make_router();
        let err = router.handle_delete(json!({ "id": 9 })).await.unwrap_err();
        assert_eq!(err.status_code(), StatusCode::NOT_FOUND);
        assert_eq!(err.to_body().message, "task not found: 9");
    }

    // ---- List tests ----

    #[tokio::test]
    async fn handle_list_returns_creation_order() {
        let router = make_router();
        for title in ["a", "b", "c"] {
            router.handle_create(json!({ "title": title })).await.unwrap();
        }

        let listed = router.handle_list().await.unwrap();
        assert_eq!(
            listed,
            json!([
                { "id": 0, "title": "a" },
                { "id": 1, "title": "b" },
                { "id": 2, "title": "c" },
            ])
        );
    }

    // ---- Shared store tests ----

    #[tokio::test]
    async fn router_shares_the_store_it_was_given() {
        let store = Arc::new(InMemoryTaskStore::new());
        let router = TaskRouter::new(store.clone());

        router
            .handle_create(json!({ "title": "via router" }))
            .await
            .unwrap();
        assert_eq!(store.len(), 1);
    }

    #[tokio::test]
    async fn store_accessor_reaches_the_same_tasks() {
        let router = make_router();
        router
            .handle_create(json!({ "title": "reachable" }))
            .await
            .unwrap();

        let tasks = router.store().list().await;
        assert_eq!(tasks.len(), 1);
        assert_eq!(tasks[0].title, "reachable");
    }

    // ---- Error mapping tests ----

    #[test]
    fn status_codes_for_each_variant() {
        let invalid = RouterError::InvalidParams("bad".to_string());
        assert_eq!(invalid.status_code(), StatusCode::BAD_REQUEST);

        let not_found = RouterError::Store(TaskError::NotFound { id: TaskId::new(1) });
        assert_eq!(not_found.status_code(), StatusCode::NOT_FOUND);

        let ser = RouterError::Serialization(serde_json::from_str::<Value>("{").unwrap_err());
        assert_eq!(ser.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn to_body_carries_display_message() {
        let err = RouterError::Store(TaskError::NotFound { id: TaskId::new(8) });
        assert_eq!(err.to_body().message, "task not found: 8");
    }
}
