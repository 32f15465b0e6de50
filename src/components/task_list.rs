//! Task List Component
//!
//! Rebuilds every row whenever a new fetch is applied.

use leptos::prelude::*;

use crate::components::TaskItem;
use crate::context::AppContext;
use crate::store::BoardStateStoreFields;

#[component]
pub fn TaskList() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let store = ctx.store;

    // Keying on the fetch generation turns each applied fetch into a full replace
    let rows = move || {
        let generation = store.generation().get();
        store
            .rows()
            .get()
            .into_iter()
            .map(|row| (generation, row))
            .collect::<Vec<_>>()
    };

    view! {
        <ul id="task-list">
            <For
                each=rows
                key=|(generation, row)| (*generation, row.id)
                children=move |(_, row)| view! { <TaskItem row=row /> }
            />
        </ul>
    }
}
