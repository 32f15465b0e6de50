//! Task Item Component
//!
//! One list row: title header with collapsible description, completion
//! toggle and delete button. Fades in when inserted.

use leptos::html;
use leptos::prelude::*;
use leptos_collapse::{
    release_height, scroll_into_view_later, start_collapse, start_expand, Panel, PanelStep,
};

use crate::context::AppContext;
use crate::present::{DescriptionBody, TaskRow};

const ENTER_FROM: &str = "opacity: 0; transform: translateY(6px);";
const ENTER_TO: &str =
    "opacity: 1; transform: translateY(0); transition: opacity .25s ease, transform .25s ease;";

fn description_view(body: DescriptionBody) -> AnyView {
    match body {
        DescriptionBody::Placeholder(text) => view! { <i>{text}</i> }.into_any(),
        DescriptionBody::Lines(lines) => {
            let count = lines.len();
            lines
                .into_iter()
                .enumerate()
                .map(|(i, line)| view! { {line} {(i + 1 < count).then(|| view! { <br /> })} })
                .collect_view()
                .into_any()
        }
    }
}

#[component]
pub fn TaskItem(row: TaskRow) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    let id = row.id;
    let next_completed = row.next_completed;
    let panel = RwSignal::new(Panel::default());
    let description_ref = NodeRef::<html::Div>::new();

    // Start from the offset style, switch to the resting style a frame later
    let (entered, set_entered) = signal(false);
    request_animation_frame(move || {
        let _ = set_entered.try_set(true);
    });

    let toggle_description = move |_| {
        let Some(el) = description_ref.get_untracked() else {
            return;
        };
        match panel.try_update(|p| p.toggle()).flatten() {
            Some(PanelStep::Expand) => {
                start_expand(&el);
                scroll_into_view_later(&el);
            }
            Some(PanelStep::Collapse) => start_collapse(&el, move || {
                let _ = panel.try_update(|p| p.frame_tick());
            }),
            _ => {}
        }
    };

    let on_transition_end = move |_| {
        if panel.try_update(|p| p.transition_end()).flatten() == Some(PanelStep::Release) {
            if let Some(el) = description_ref.get_untracked() {
                release_height(&el);
            }
        }
    };

    let is_open = move || panel.get().is_open();

    view! {
        <li
            class=row.class()
            style=move || if entered.get() { ENTER_TO } else { ENTER_FROM }
        >
            <div class="task-header">
                <div class="task-title" on:click=toggle_description>
                    <span
                        class="toggle-arrow"
                        style=move || if is_open() { "transform: rotate(180deg)" } else { "transform: rotate(0deg)" }
                    >
                        "▼"
                    </span>
                    " "
                    {row.title.clone()}
                </div>
                <div class="task-buttons">
                    <button class="complete" on:click=move |_| ctx.set_completed(id, next_completed)>
                        {row.toggle_icon()}
                    </button>
                    <button
                        class="delete"
                        title=ctx.strings().delete_title
                        on:click=move |_| ctx.delete_task(id)
                    >
                        "🗑️"
                    </button>
                </div>
            </div>
            <div
                class="task-description"
                class:open=is_open
                node_ref=description_ref
                on:transitionend=on_transition_end
            >
                {description_view(row.description.clone())}
                {row.due_line.clone().map(|due| view! { <div class="task-due">{due}</div> })}
            </div>
        </li>
    }
}
