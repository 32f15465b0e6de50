//! Task API Bindings
//!
//! The remote task service seen as a collaborator trait, so the controller
//! can be driven by the HTTP client in the browser and by fakes in tests.

mod http;

use async_trait::async_trait;

use crate::error::ApiError;
use crate::models::{NewTask, Task, TaskUpdate};
use crate::query::QueryState;

pub use http::HttpTaskApi;

/// REST operations on the task collection.
///
/// The update call is a full replace; there is no partial patch.
#[async_trait(?Send)]
pub trait TaskApi {
    /// `GET /tasks/?<query>`
    async fn list_tasks(&self, query: &QueryState) -> Result<Vec<Task>, ApiError>;

    /// `GET /tasks/<id>`
    async fn get_task(&self, id: u32) -> Result<Task, ApiError>;

    /// `POST /tasks/`
    async fn create_task(&self, task: &NewTask) -> Result<Task, ApiError>;

    /// `PUT /tasks/<id>`
    async fn replace_task(&self, id: u32, update: &TaskUpdate) -> Result<Task, ApiError>;

    /// `DELETE /tasks/<id>`; the response body is ignored
    async fn delete_task(&self, id: u32) -> Result<(), ApiError>;
}
