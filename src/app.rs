//! Task Board App
//!
//! Root component: form, filters, status banner and the task list.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::api::HttpTaskApi;
use crate::components::{FilterBar, NewTaskForm, StatusBanner, TaskList};
use crate::config::AppConfig;
use crate::context::AppContext;
use crate::controller::TaskController;
use crate::store::{BoardState, BoardStateStoreFields};

#[component]
pub fn App(config: AppConfig) -> impl IntoView {
    let controller = TaskController::new(HttpTaskApi::new(config.api_base.clone()));
    let store = Store::new(BoardState::default());
    let ctx = AppContext::new(controller, store, config.locale);
    let strings = ctx.strings();

    // Provide context to all children
    provide_context(ctx);

    // Initial load
    Effect::new(move |_| ctx.reload());

    view! {
        <main class="task-board">
            <h1>{strings.heading}</h1>

            <NewTaskForm />

            <FilterBar config=config />

            <StatusBanner />

            <TaskList />

            <p class="task-count">
                {move || format!("{}: {}", strings.task_count, store.rows().with(|rows| rows.len()))}
            </p>
        </main>
    }
}
