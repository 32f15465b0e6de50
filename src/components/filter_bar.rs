//! Filter Bar Component
//!
//! Search box and filter selects. Each control is optional; a disabled
//! control is not rendered and its filter stays unset.

use leptos::prelude::*;

use crate::config::AppConfig;
use crate::context::AppContext;
use crate::query::{parse_tri_state, Sort};

#[component]
pub fn FilterBar(config: AppConfig) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let strings = ctx.strings();

    let search = config.search.then(|| {
        view! {
            <input
                id="search"
                type="search"
                placeholder=strings.search_placeholder
                on:input=move |ev| {
                    let value = event_target_value(&ev).trim().to_string();
                    ctx.update_query(|q| q.search = value);
                }
            />
        }
    });

    let filter_completed = config.filter_completed.then(|| {
        view! {
            <select
                id="filter-completed"
                on:change=move |ev| {
                    let value = parse_tri_state(&event_target_value(&ev));
                    ctx.update_query(|q| q.completed = value);
                }
            >
                <option value="">{strings.filter_all}</option>
                <option value="true">{strings.filter_done}</option>
                <option value="false">{strings.filter_open}</option>
            </select>
        }
    });

    let filter_due = config.filter_due.then(|| {
        view! {
            <select
                id="filter-due"
                on:change=move |ev| {
                    let value = parse_tri_state(&event_target_value(&ev));
                    ctx.update_query(|q| q.has_due = value);
                }
            >
                <option value="">{strings.due_any}</option>
                <option value="true">{strings.due_with}</option>
                <option value="false">{strings.due_without}</option>
            </select>
        }
    });

    let sort = config.sort.then(|| {
        view! {
            <select
                id="sort"
                on:change=move |ev| {
                    let value = Sort::from_select(&event_target_value(&ev));
                    ctx.update_query(|q| q.sort = value);
                }
            >
                <option value="">{strings.sort_default}</option>
                <option value="title:asc">{strings.sort_title}</option>
                <option value="due:asc">{strings.sort_due}</option>
                <option value="created:desc">{strings.sort_newest}</option>
            </select>
        }
    });

    view! {
        <div class="task-filters">
            {search}
            {filter_completed}
            {filter_due}
            {sort}
        </div>
    }
}
