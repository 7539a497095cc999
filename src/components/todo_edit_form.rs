//! Todo Edit Form Component
//!
//! Inline form submitting title, description and priority in one go. The
//! controller works out which fields actually changed.

use leptos::prelude::*;

use crate::context::use_app_context;
use crate::models::{Priority, TodoEdit};
use crate::reconcile::TodoRow;

#[component]
pub fn TodoEditForm(row: TodoRow, set_editing: WriteSignal<bool>) -> impl IntoView {
    let ctx = use_app_context();
    let id = row.id;

    let (title, set_title) = signal(row.title.clone());
    let (description, set_description) = signal(row.description.clone().unwrap_or_default());
    let (priority, set_priority) = signal(row.priority_label.clone());

    // Keep a priority the host sent but the client doesn't know selectable,
    // so saving an untouched form doesn't rewrite it.
    let mut options: Vec<String> = Priority::ALL.iter().map(|p| p.as_str().to_string()).collect();
    if Priority::parse(&row.priority_label).is_none() {
        options.push(row.priority_label.clone());
    }

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let edit = TodoEdit {
            title: title.get_untracked(),
            description: description.get_untracked(),
            priority: priority.get_untracked(),
        };
        set_editing.set(false);
        ctx.spawn(move |controller| async move { controller.update(id, &edit).await });
    };

    view! {
        <form class="todo-edit-form" on:submit=on_submit>
            <input
                type="text"
                class="todo-edit-title"
                prop:value=move || title.get()
                on:input=move |ev| set_title.set(event_target_value(&ev))
            />
            <textarea
                class="todo-edit-description"
                placeholder="Leave blank for none"
                prop:value=move || description.get()
                on:input=move |ev| set_description.set(event_target_value(&ev))
            />
            <select class="todo-edit-priority" on:change=move |ev| set_priority.set(event_target_value(&ev))>
                {options.into_iter().map(|option| {
                    let value = option.clone();
                    let attr_value = option.clone();
                    view! {
                        <option value=attr_value prop:selected=move || priority.get() == value>
                            {option}
                        </option>
                    }
                }).collect_view()}
            </select>
            <button type="submit" class="btn btn-save">"Save"</button>
            <button type="button" class="btn btn-cancel" on:click=move |_| set_editing.set(false)>
                "Cancel"
            </button>
        </form>
    }
}
