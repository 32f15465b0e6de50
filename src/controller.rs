//! Task List Controller
//!
//! Owns the query state and mediates between the UI and a [`TaskApi`].
//! Every mutation is followed by exactly one full re-fetch; nothing is
//! applied optimistically.

use std::cell::{Cell, RefCell};

use crate::api::TaskApi;
use crate::error::{ApiError, FormError};
use crate::models::{NewTask, Task};
use crate::query::QueryState;

/// Monotonic ticket counter for list fetches.
///
/// Only the most recently issued fetch may render; older ones that resolve
/// late are dropped.
#[derive(Debug, Default)]
pub struct FetchSequence {
    latest: Cell<u64>,
}

impl FetchSequence {
    pub fn begin(&self) -> u64 {
        let ticket = self.latest.get() + 1;
        self.latest.set(ticket);
        ticket
    }

    pub fn is_current(&self, ticket: u64) -> bool {
        self.latest.get() == ticket
    }
}

/// Outcome of a list fetch that did not fail
#[derive(Debug, Clone, PartialEq)]
pub enum Fetched {
    Fresh(Vec<Task>),
    /// A later fetch was issued before this one resolved
    Superseded,
}

/// A settled mutation and the re-fetch that followed it
#[derive(Debug, Clone, PartialEq)]
pub struct Mutation {
    /// Set when the mutation itself failed
    pub error: Option<ApiError>,
    pub list: Result<Fetched, ApiError>,
}

/// Raw values of the "new task" inputs
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskForm {
    pub title: String,
    pub description: String,
    pub due_time: String,
}

impl TaskForm {
    /// Trimmed creation payload; the due time is passed through untouched
    pub fn to_new_task(&self) -> Result<NewTask, FormError> {
        let title = self.title.trim();
        if title.is_empty() {
            return Err(FormError::EmptyTitle);
        }
        Ok(NewTask {
            title: title.to_string(),
            description: self.description.trim().to_string(),
            due_time: self.due_time.clone(),
        })
    }
}

pub struct TaskController<A> {
    api: A,
    query: RefCell<QueryState>,
    sequence: FetchSequence,
}

impl<A: TaskApi> TaskController<A> {
    pub fn new(api: A) -> Self {
        Self {
            api,
            query: RefCell::new(QueryState::default()),
            sequence: FetchSequence::default(),
        }
    }

    pub fn query(&self) -> QueryState {
        self.query.borrow().clone()
    }

    pub fn update_query(&self, f: impl FnOnce(&mut QueryState)) {
        f(&mut self.query.borrow_mut());
    }

    /// Fetch the list for the current query state
    pub async fn fetch(&self) -> Result<Fetched, ApiError> {
        let ticket = self.sequence.begin();
        let query = self.query();
        let result = self.api.list_tasks(&query).await;

        if !self.sequence.is_current(ticket) {
            tracing::debug!(ticket, "discarding superseded task list");
            return Ok(Fetched::Superseded);
        }
        let tasks = result?;
        tracing::debug!(ticket, count = tasks.len(), "task list loaded");
        Ok(Fetched::Fresh(tasks))
    }

    /// Create a task from the form, then re-fetch.
    ///
    /// `on_created` runs once the create request settled (success or not),
    /// before the re-fetch starts. A blank title is rejected without
    /// touching the network and without calling it.
    pub async fn add_task(
        &self,
        form: &TaskForm,
        on_created: impl FnOnce(),
    ) -> Result<Mutation, FormError> {
        let new_task = form.to_new_task()?;
        tracing::info!(title = %new_task.title, "creating task");
        let error = self.api.create_task(&new_task).await.err();
        on_created();
        Ok(self.settle(error).await)
    }

    /// Delete a task, then re-fetch
    pub async fn delete_task(&self, id: u32) -> Mutation {
        tracing::info!(id, "deleting task");
        let error = self.api.delete_task(id).await.err();
        self.settle(error).await
    }

    /// Set the completion flag of a task, then re-fetch
    pub async fn set_completed(&self, id: u32, completed: bool) -> Mutation {
        tracing::info!(id, completed, "updating task completion");
        let error = self.patch_completed(id, completed).await.err();
        self.settle(error).await
    }

    /// Read-then-replace, since the API only accepts full records.
    ///
    /// Not atomic: a concurrent writer between the GET and the PUT is
    /// overwritten with the values read here.
    async fn patch_completed(&self, id: u32, completed: bool) -> Result<Task, ApiError> {
        let current = self.api.get_task(id).await?;
        self.api
            .replace_task(id, &current.to_update(completed))
            .await
    }

    async fn settle(&self, error: Option<ApiError>) -> Mutation {
        if let Some(err) = &error {
            tracing::error!(error = %err, "task mutation failed");
        }
        Mutation {
            error,
            list: self.fetch().await,
        }
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::models::TaskUpdate;
    use async_trait::async_trait;
    use futures::channel::oneshot;
    use futures::executor::block_on;

    #[derive(Debug, Clone, PartialEq)]
    pub enum Call {
        List(QueryState),
        Get(u32),
        Create(NewTask),
        Replace(u32, TaskUpdate),
        Delete(u32),
    }

    /// In-memory task service that records every request
    #[derive(Default)]
    pub struct FakeApi {
        pub tasks: RefCell<Vec<Task>>,
        pub calls: RefCell<Vec<Call>>,
        pub fail_mutations: Cell<bool>,
        /// The next list request waits on this before answering
        pub gate: RefCell<Option<oneshot::Receiver<()>>>,
    }

    pub fn make_task(id: u32, title: &str, completed: bool) -> Task {
        Task {
            id,
            title: title.to_string(),
            description: None,
            due_time: None,
            completed,
        }
    }

    impl FakeApi {
        pub fn with_tasks(tasks: Vec<Task>) -> Self {
            Self {
                tasks: RefCell::new(tasks),
                ..Default::default()
            }
        }

        fn record(&self, call: Call) {
            self.calls.borrow_mut().push(call);
        }

        fn check_failure(&self) -> Result<(), ApiError> {
            if self.fail_mutations.get() {
                Err(ApiError::Status {
                    status: 500,
                    message: "Internal Server Error".into(),
                })
            } else {
                Ok(())
            }
        }

        fn not_found() -> ApiError {
            ApiError::Status {
                status: 404,
                message: "Task not found".into(),
            }
        }
    }

    #[async_trait(?Send)]
    impl TaskApi for FakeApi {
        async fn list_tasks(&self, query: &QueryState) -> Result<Vec<Task>, ApiError> {
            self.record(Call::List(query.clone()));
            let gate = self.gate.borrow_mut().take();
            if let Some(gate) = gate {
                let _ = gate.await;
            }
            Ok(self
                .tasks
                .borrow()
                .iter()
                .filter(|t| query.completed.map_or(true, |c| t.completed == c))
                .filter(|t| query.search.is_empty() || t.title.contains(&query.search))
                .cloned()
                .collect())
        }

        async fn get_task(&self, id: u32) -> Result<Task, ApiError> {
            self.record(Call::Get(id));
            self.tasks
                .borrow()
                .iter()
                .find(|t| t.id == id)
                .cloned()
                .ok_or_else(Self::not_found)
        }

        async fn create_task(&self, task: &NewTask) -> Result<Task, ApiError> {
            self.record(Call::Create(task.clone()));
            self.check_failure()?;
            let mut tasks = self.tasks.borrow_mut();
            let id = tasks.iter().map(|t| t.id).max().unwrap_or(0) + 1;
            let created = Task {
                id,
                title: task.title.clone(),
                description: Some(task.description.clone()),
                due_time: Some(task.due_time.clone()),
                completed: false,
            };
            tasks.push(created.clone());
            Ok(created)
        }

        async fn replace_task(&self, id: u32, update: &TaskUpdate) -> Result<Task, ApiError> {
            self.record(Call::Replace(id, update.clone()));
            self.check_failure()?;
            let mut tasks = self.tasks.borrow_mut();
            let task = tasks
                .iter_mut()
                .find(|t| t.id == id)
                .ok_or_else(Self::not_found)?;
            task.title = update.title.clone();
            task.description = update.description.clone();
            task.due_time = update.due_time.clone();
            task.completed = update.completed;
            Ok(task.clone())
        }

        async fn delete_task(&self, id: u32) -> Result<(), ApiError> {
            self.record(Call::Delete(id));
            self.check_failure()?;
            self.tasks.borrow_mut().retain(|t| t.id != id);
            Ok(())
        }
    }

    fn fresh(list: Result<Fetched, ApiError>) -> Vec<Task> {
        match list {
            Ok(Fetched::Fresh(tasks)) => tasks,
            other => panic!("expected a fresh list, got {:?}", other),
        }
    }

    #[test]
    fn test_fetch_uses_current_query() {
        let ctrl = TaskController::new(FakeApi::with_tasks(vec![
            make_task(1, "Buy milk", false),
            make_task(2, "Call mom", true),
        ]));
        ctrl.update_query(|q| q.completed = Some(true));

        let tasks = fresh(block_on(ctrl.fetch()));
        assert_eq!(tasks.len(), 1);
        assert_eq!(tasks[0].id, 2);

        let calls = ctrl.api.calls.borrow();
        assert_eq!(
            *calls,
            vec![Call::List(QueryState {
                completed: Some(true),
                ..Default::default()
            })]
        );
    }

    #[test]
    fn test_add_blank_title_makes_no_calls() {
        let ctrl = TaskController::new(FakeApi::default());
        let form = TaskForm {
            title: "   ".into(),
            description: "keep me".into(),
            due_time: "2026-10-20T10:00".into(),
        };

        let created = Cell::new(0);
        let result = block_on(ctrl.add_task(&form, || created.set(created.get() + 1)));
        assert_eq!(result, Err(FormError::EmptyTitle));
        assert!(ctrl.api.calls.borrow().is_empty());
        assert_eq!(created.get(), 0);
    }

    #[test]
    fn test_add_creates_once_then_refetches_once() {
        let ctrl = TaskController::new(FakeApi::default());
        let form = TaskForm {
            title: "  Buy milk ".into(),
            description: " two litres\n".into(),
            due_time: "2026-10-20T10:00".into(),
        };

        let created = Cell::new(0);
        let mutation = block_on(ctrl.add_task(&form, || created.set(created.get() + 1))).unwrap();
        assert_eq!(mutation.error, None);
        assert_eq!(fresh(mutation.list).len(), 1);
        assert_eq!(created.get(), 1);

        let calls = ctrl.api.calls.borrow();
        assert_eq!(calls.len(), 2);
        assert_eq!(
            calls[0],
            Call::Create(NewTask {
                title: "Buy milk".into(),
                description: "two litres".into(),
                due_time: "2026-10-20T10:00".into(),
            })
        );
        assert!(matches!(calls[1], Call::List(_)));
    }

    #[test]
    fn test_add_clears_before_refetch_resolves() {
        let (release, gate) = oneshot::channel();
        let api = FakeApi::default();
        *api.gate.borrow_mut() = Some(gate);
        let ctrl = TaskController::new(api);
        let form = TaskForm {
            title: "Buy milk".into(),
            ..Default::default()
        };
        let created = Cell::new(0);

        let mutation = block_on(async {
            let add = ctrl.add_task(&form, || created.set(created.get() + 1));
            futures::pin_mut!(add);

            // create settled, re-fetch still waiting on the gate
            assert!(futures::poll!(add.as_mut()).is_pending());
            assert_eq!(created.get(), 1);
            assert_eq!(ctrl.api.tasks.borrow().len(), 1);

            let _ = release.send(());
            add.await
        })
        .unwrap();

        assert_eq!(created.get(), 1);
        assert_eq!(fresh(mutation.list).len(), 1);
    }

    #[test]
    fn test_add_failure_still_clears_once() {
        let api = FakeApi::default();
        api.fail_mutations.set(true);
        let ctrl = TaskController::new(api);
        let form = TaskForm {
            title: "Buy milk".into(),
            ..Default::default()
        };
        let created = Cell::new(0);

        let mutation = block_on(ctrl.add_task(&form, || created.set(created.get() + 1))).unwrap();
        assert!(matches!(mutation.error, Some(ApiError::Status { status: 500, .. })));
        assert_eq!(created.get(), 1);
        assert!(fresh(mutation.list).is_empty());
        assert_eq!(ctrl.api.calls.borrow().len(), 2);
    }

    #[test]
    fn test_set_completed_replaces_with_server_values() {
        let mut task = make_task(7, "Server title", false);
        task.description = Some("server description".into());
        task.due_time = Some("2026-10-20T10:00".into());
        let ctrl = TaskController::new(FakeApi::with_tasks(vec![task]));

        let mutation = block_on(ctrl.set_completed(7, true));
        assert_eq!(mutation.error, None);
        assert!(fresh(mutation.list)[0].completed);

        let calls = ctrl.api.calls.borrow();
        assert_eq!(calls.len(), 3);
        assert_eq!(calls[0], Call::Get(7));
        assert_eq!(
            calls[1],
            Call::Replace(
                7,
                TaskUpdate {
                    title: "Server title".into(),
                    description: Some("server description".into()),
                    due_time: Some("2026-10-20T10:00".into()),
                    completed: true,
                }
            )
        );
        assert!(matches!(calls[2], Call::List(_)));
    }

    #[test]
    fn test_set_completed_missing_task_skips_put() {
        let ctrl = TaskController::new(FakeApi::default());

        let mutation = block_on(ctrl.set_completed(9, true));
        assert!(matches!(mutation.error, Some(ApiError::Status { status: 404, .. })));

        let calls = ctrl.api.calls.borrow();
        assert_eq!(calls.len(), 2);
        assert_eq!(calls[0], Call::Get(9));
        assert!(matches!(calls[1], Call::List(_)));
    }

    #[test]
    fn test_delete_then_single_refetch() {
        let ctrl = TaskController::new(FakeApi::with_tasks(vec![
            make_task(3, "Old", false),
            make_task(4, "Keep", false),
        ]));

        let mutation = block_on(ctrl.delete_task(3));
        assert_eq!(mutation.error, None);
        let tasks = fresh(mutation.list);
        assert_eq!(tasks.iter().map(|t| t.id).collect::<Vec<_>>(), vec![4]);

        let calls = ctrl.api.calls.borrow();
        assert_eq!(calls.len(), 2);
        assert_eq!(calls[0], Call::Delete(3));
        assert!(matches!(calls[1], Call::List(_)));
    }

    #[test]
    fn test_failed_mutation_still_refetches() {
        let api = FakeApi::with_tasks(vec![make_task(3, "Old", false)]);
        api.fail_mutations.set(true);
        let ctrl = TaskController::new(api);

        let mutation = block_on(ctrl.delete_task(3));
        assert!(matches!(mutation.error, Some(ApiError::Status { status: 500, .. })));
        assert_eq!(fresh(mutation.list).len(), 1);
        assert_eq!(ctrl.api.calls.borrow().len(), 2);
    }

    #[test]
    fn test_superseded_fetch_is_discarded() {
        let (release, gate) = oneshot::channel();
        let api = FakeApi::with_tasks(vec![make_task(1, "Buy milk", false)]);
        *api.gate.borrow_mut() = Some(gate);
        let ctrl = TaskController::new(api);

        let (first, second) = block_on(async {
            let first = ctrl.fetch();
            let second = async {
                let result = ctrl.fetch().await;
                let _ = release.send(());
                result
            };
            futures::join!(first, second)
        });

        assert_eq!(first, Ok(Fetched::Superseded));
        assert_eq!(fresh(second).len(), 1);
    }

    #[test]
    fn test_fetch_sequence() {
        let seq = FetchSequence::default();
        let a = seq.begin();
        assert!(seq.is_current(a));
        let b = seq.begin();
        assert!(b > a);
        assert!(!seq.is_current(a));
        assert!(seq.is_current(b));
    }
}
