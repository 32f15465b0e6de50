//! Application Context
//!
//! Controller handle and board store provided via Leptos Context API.
//! All network work is spawned from here so components stay declarative.

use std::rc::Rc;

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::HttpTaskApi;
use crate::controller::{Fetched, Mutation, TaskController, TaskForm};
use crate::error::{ApiError, FormError};
use crate::i18n::{Locale, Strings};
use crate::present::present;
use crate::query::QueryState;
use crate::store::{BoardStateStoreFields, BoardStore};

pub type BoardController = TaskController<HttpTaskApi>;

/// App-wide handles provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    controller: StoredValue<Rc<BoardController>, LocalStorage>,
    pub store: BoardStore,
    pub locale: Locale,
}

impl AppContext {
    pub fn new(controller: BoardController, store: BoardStore, locale: Locale) -> Self {
        Self {
            controller: StoredValue::new_local(Rc::new(controller)),
            store,
            locale,
        }
    }

    pub fn strings(&self) -> &'static Strings {
        self.locale.strings()
    }

    fn controller(&self) -> Rc<BoardController> {
        self.controller.get_value()
    }

    /// Change the filters and fetch again
    pub fn update_query(&self, f: impl FnOnce(&mut QueryState)) {
        self.controller.with_value(|controller| controller.update_query(f));
        self.reload();
    }

    /// Fetch the list for the current filters
    pub fn reload(&self) {
        let ctx = *self;
        spawn_local(async move {
            let controller = ctx.controller();
            let result = controller.fetch().await;
            ctx.apply_list(result);
        });
    }

    /// Create a task; `on_settled` runs once the create request settled
    pub fn add_task(&self, form: TaskForm, on_settled: impl FnOnce() + 'static) {
        let ctx = *self;
        spawn_local(async move {
            let controller = ctx.controller();
            match controller.add_task(&form, on_settled).await {
                Err(FormError::EmptyTitle) => {
                    gloo::dialogs::alert(ctx.strings().empty_title_alert);
                }
                Ok(mutation) => ctx.apply_mutation(mutation),
            }
        });
    }

    pub fn set_completed(&self, id: u32, completed: bool) {
        let ctx = *self;
        spawn_local(async move {
            let controller = ctx.controller();
            let mutation = controller.set_completed(id, completed).await;
            ctx.apply_mutation(mutation);
        });
    }

    pub fn delete_task(&self, id: u32) {
        let ctx = *self;
        spawn_local(async move {
            let controller = ctx.controller();
            let mutation = controller.delete_task(id).await;
            ctx.apply_mutation(mutation);
        });
    }

    pub fn dismiss_status(&self) {
        *self.store.status().write() = None;
    }

    fn apply_list(&self, result: Result<Fetched, ApiError>) {
        match result {
            Ok(Fetched::Fresh(tasks)) => {
                *self.store.rows().write() = present(&tasks, self.locale);
                *self.store.generation().write() += 1;
                *self.store.status().write() = None;
            }
            Ok(Fetched::Superseded) => {}
            Err(err) => {
                tracing::error!(error = %err, "task list fetch failed");
                *self.store.status().write() =
                    Some(format!("{}: {}", self.strings().load_failed, err));
            }
        }
    }

    fn apply_mutation(&self, mutation: Mutation) {
        self.apply_list(mutation.list);
        if let Some(err) = mutation.error {
            *self.store.status().write() =
                Some(format!("{}: {}", self.strings().save_failed, err));
        }
    }
}
