//! Todo Item Component
//!
//! One row: completion checkbox, plain-text content, edit and delete
//! actions. Editing swaps the content for an inline form.

use leptos::prelude::*;

use crate::components::TodoEditForm;
use crate::context::use_app_context;
use crate::reconcile::TodoRow;

#[component]
pub fn TodoItem(row: TodoRow) -> impl IntoView {
    let ctx = use_app_context();
    let (editing, set_editing) = signal(false);
    let (checked, set_checked) = signal(row.completed);

    let id = row.id;
    let completed = row.completed;
    let title = row.title.clone();

    let on_toggle = {
        let ctx = ctx.clone();
        move |ev: web_sys::Event| {
            let to_completed = event_target_checked(&ev);
            set_checked.set(to_completed);
            ctx.spawn(move |controller| async move {
                // a rejected toggle leaves the row unchanged, so put the box back
                if !controller.toggle(id, to_completed).await {
                    set_checked.set(!to_completed);
                }
            });
        }
    };

    let on_delete = move |_| {
        let title = title.clone();
        ctx.spawn(move |controller| async move { controller.remove(id, &title).await });
    };

    let content = move || {
        if editing.get() {
            return view! { <TodoEditForm row=row.clone() set_editing=set_editing /> }.into_any();
        }
        let priority = row.priority_label.clone();
        view! {
            <div class="todo-content">
                <div class="todo-title">{row.title.clone()}</div>
                {row.description.clone().map(|description| view! {
                    <div class="todo-description">{description}</div>
                })}
                <div class="todo-meta">
                    {row.due_label.clone().map(|due| view! {
                        <span class="due-at">{format!("due: {}", due)}</span>
                    })}
                    <span class=format!("priority-badge priority-{}", priority)>{priority.clone()}</span>
                    <span class="created-at">{row.created_label.clone()}</span>
                    {row.completed_label.clone().map(|done| view! {
                        <span class="completed-at">{format!("done: {}", done)}</span>
                    })}
                </div>
            </div>
        }
        .into_any()
    };

    view! {
        <li class=if completed { "todo-item completed" } else { "todo-item" } data-id=id.to_string()>
            <input type="checkbox" class="todo-checkbox" prop:checked=move || checked.get() on:change=on_toggle />

            {content}

            <div class="todo-actions">
                <Show when=move || !editing.get()>
                    <button type="button" class="btn btn-edit" on:click=move |_| set_editing.set(true)>
                        "Edit"
                    </button>
                </Show>
                <button type="button" class="btn btn-delete" on:click=on_delete>
                    "Delete"
                </button>
            </div>
        </li>
    }
}
