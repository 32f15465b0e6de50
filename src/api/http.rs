//! HTTP Task API
//!
//! `fetch`-backed implementation of [`TaskApi`] via `gloo::net`.

use async_trait::async_trait;
use gloo::net::http::{Request, Response};
use serde::de::DeserializeOwned;

use super::TaskApi;
use crate::error::ApiError;
use crate::models::{NewTask, Task, TaskUpdate};
use crate::query::QueryState;

/// Client for a task collection rooted at `base` (always ends with `/`)
#[derive(Debug, Clone)]
pub struct HttpTaskApi {
    base: String,
}

impl HttpTaskApi {
    pub fn new(base: impl Into<String>) -> Self {
        Self { base: base.into() }
    }

    fn collection_url(&self, query: &QueryState) -> String {
        let query = query.to_query_string();
        if query.is_empty() {
            self.base.clone()
        } else {
            format!("{}?{}", self.base, query)
        }
    }

    fn item_url(&self, id: u32) -> String {
        format!("{}{}", self.base, id)
    }
}

fn network(err: gloo::net::Error) -> ApiError {
    ApiError::Network(err.to_string())
}

/// Pull FastAPI's `{"detail": ...}` out of an error body, if present
fn error_detail(body: &str) -> Option<String> {
    let value: serde_json::Value = serde_json::from_str(body).ok()?;
    match value.get("detail")? {
        serde_json::Value::String(detail) => Some(detail.clone()),
        other => Some(other.to_string()),
    }
}

async fn check_status(resp: Response) -> Result<Response, ApiError> {
    if resp.ok() {
        return Ok(resp);
    }
    let status = resp.status();
    let body = resp.text().await.unwrap_or_default();
    let message = error_detail(&body).unwrap_or_else(|| resp.status_text());
    tracing::warn!(status, url = %resp.url(), %message, "task api request failed");
    Err(ApiError::Status { status, message })
}

async fn decode<T: DeserializeOwned>(resp: Response) -> Result<T, ApiError> {
    let resp = check_status(resp).await?;
    resp.json::<T>()
        .await
        .map_err(|e| ApiError::Decode(e.to_string()))
}

#[async_trait(?Send)]
impl TaskApi for HttpTaskApi {
    async fn list_tasks(&self, query: &QueryState) -> Result<Vec<Task>, ApiError> {
        let url = self.collection_url(query);
        tracing::debug!(%url, "GET tasks");
        let resp = Request::get(&url).send().await.map_err(network)?;
        decode(resp).await
    }

    async fn get_task(&self, id: u32) -> Result<Task, ApiError> {
        let url = self.item_url(id);
        tracing::debug!(%url, "GET task");
        let resp = Request::get(&url).send().await.map_err(network)?;
        decode(resp).await
    }

    async fn create_task(&self, task: &NewTask) -> Result<Task, ApiError> {
        tracing::debug!(url = %self.base, title = %task.title, "POST task");
        let resp = Request::post(&self.base)
            .json(task)
            .map_err(|e| ApiError::Encode(e.to_string()))?
            .send()
            .await
            .map_err(network)?;
        decode(resp).await
    }

    async fn replace_task(&self, id: u32, update: &TaskUpdate) -> Result<Task, ApiError> {
        let url = self.item_url(id);
        tracing::debug!(%url, completed = update.completed, "PUT task");
        let resp = Request::put(&url)
            .json(update)
            .map_err(|e| ApiError::Encode(e.to_string()))?
            .send()
            .await
            .map_err(network)?;
        decode(resp).await
    }

    async fn delete_task(&self, id: u32) -> Result<(), ApiError> {
        let url = self.item_url(id);
        tracing::debug!(%url, "DELETE task");
        let resp = Request::delete(&url).send().await.map_err(network)?;
        check_status(resp).await?;
        Ok(())
    }
}
