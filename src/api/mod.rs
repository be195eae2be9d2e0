//! Task Store Bindings
//!
//! The remote task store, seen from the client as four calls.

mod http;

use async_trait::async_trait;

use crate::error::TaskResult;
use crate::models::{Task, TaskRequest};

pub use http::HttpTaskApi;

/// CRUD surface of the remote task store
///
/// Futures are not `Send`: everything runs on the browser event loop.
#[async_trait(?Send)]
pub trait TaskApi {
    /// GET /task, expects 200
    async fn list(&self) -> TaskResult<Vec<Task>>;

    /// POST /task, expects 201
    async fn create(&self, request: &TaskRequest) -> TaskResult<Task>;

    /// PUT /task/{taskId}, expects 200
    async fn update(&self, task_id: &str, request: &TaskRequest) -> TaskResult<Task>;

    /// DELETE /task/{taskId}, expects 204
    async fn delete(&self, task_id: &str) -> TaskResult<()>;
}
