//! New Task Form Component
//!
//! Title, description and due-time inputs with the add button.

use leptos::html;
use leptos::prelude::*;
use leptos_collapse::auto_resize;

use crate::context::AppContext;
use crate::controller::TaskForm;

#[component]
pub fn NewTaskForm() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let strings = ctx.strings();

    let (title, set_title) = signal(String::new());
    let (description, set_description) = signal(String::new());
    let (due_time, set_due_time) = signal(String::new());
    let description_ref = NodeRef::<html::Textarea>::new();

    // Fit the textarea once it is mounted
    Effect::new(move |_| {
        if let Some(textarea) = description_ref.get() {
            auto_resize(&textarea);
        }
    });

    let on_add = move |_| {
        let form = TaskForm {
            title: title.get_untracked(),
            description: description.get_untracked(),
            due_time: due_time.get_untracked(),
        };
        ctx.add_task(form, move || {
            set_title.set(String::new());
            set_description.set(String::new());
            set_due_time.set(String::new());
            if let Some(textarea) = description_ref.get_untracked() {
                auto_resize(&textarea);
            }
        });
    };

    view! {
        <div class="task-form">
            <input
                id="title"
                type="text"
                placeholder=strings.title_placeholder
                prop:value=move || title.get()
                on:input=move |ev| set_title.set(event_target_value(&ev))
            />
            <textarea
                id="description"
                rows="1"
                placeholder=strings.description_placeholder
                node_ref=description_ref
                prop:value=move || description.get()
                on:input=move |ev| {
                    set_description.set(event_target_value(&ev));
                    if let Some(textarea) = description_ref.get_untracked() {
                        auto_resize(&textarea);
                    }
                }
            ></textarea>
            <input
                id="due_time"
                type="datetime-local"
                prop:value=move || due_time.get()
                on:input=move |ev| set_due_time.set(event_target_value(&ev))
            />
            <button id="add-btn" type="button" on:click=on_add>
                {strings.add_button}
            </button>
        </div>
    }
}
