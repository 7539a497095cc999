//! New Todo Form Component
//!
//! Title, optional description and priority. Validation happens in the
//! controller, so an empty title still reaches it and gets reported.

use leptos::prelude::*;

use crate::context::use_app_context;
use crate::models::{NewTodoInput, Priority};
use crate::store::{use_app_store, AppStateStoreFields};

#[component]
pub fn NewTodoForm() -> impl IntoView {
    let ctx = use_app_context();
    let store = use_app_store();

    let (title, set_title) = signal(String::new());
    let (description, set_description) = signal(String::new());
    let (priority, set_priority) = signal(Priority::default().as_str().to_string());

    // Cleared after every successful create
    Effect::new(move |_| {
        let _ = store.form_version().get();
        set_title.set(String::new());
        set_description.set(String::new());
        set_priority.set(Priority::default().as_str().to_string());
    });

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let input = NewTodoInput {
            title: title.get_untracked(),
            description: description.get_untracked(),
            priority: Some(priority.get_untracked()),
        };
        ctx.spawn(move |controller| async move { controller.create(&input).await });
    };

    view! {
        <form class="add-todo-form" on:submit=on_submit>
            <input
                type="text"
                class="todo-title-input"
                placeholder="What needs to be done?"
                prop:value=move || title.get()
                on:input=move |ev| set_title.set(event_target_value(&ev))
            />
            <textarea
                class="todo-description-input"
                placeholder="Description (optional)"
                prop:value=move || description.get()
                on:input=move |ev| set_description.set(event_target_value(&ev))
            />
            <select
                class="todo-priority-input"
                on:change=move |ev| set_priority.set(event_target_value(&ev))
            >
                {Priority::ALL.into_iter().map(|p| view! {
                    <option value=p.as_str() prop:selected=move || priority.get() == p.as_str()>
                        {p.as_str()}
                    </option>
                }).collect_view()}
            </select>
            <button type="submit">"Add"</button>
        </form>
    }
}
