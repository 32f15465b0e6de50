//! Frontend Models
//!
//! Data structures matching the task API.

use serde::{Deserialize, Serialize};

/// Task record (matches backend)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    pub id: u32,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub due_time: Option<String>,
    #[serde(default)]
    pub completed: bool,
}

impl Task {
    /// Full-replace payload carrying this record with `completed` overridden
    pub fn to_update(&self, completed: bool) -> TaskUpdate {
        TaskUpdate {
            title: self.title.clone(),
            description: self.description.clone(),
            due_time: self.due_time.clone(),
            completed,
        }
    }
}

/// Body of `POST /tasks/`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NewTask {
    pub title: String,
    pub description: String,
    pub due_time: String,
}

/// Body of `PUT /tasks/<id>` (full replace, not a patch)
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TaskUpdate {
    pub title: String,
    pub description: Option<String>,
    pub due_time: Option<String>,
    pub completed: bool,
}
