//! Todo List Component
//!
//! Renders the rows last produced by the controller, plus the loading and
//! empty-state indicators.

use leptos::prelude::*;

use crate::components::TodoItem;
use crate::store::{use_app_store, AppStateStoreFields};

/// The empty-state hint waits for the fetch to finish
fn empty_state_visible(no_rows: bool, loading: bool) -> bool {
    no_rows && !loading
}

#[component]
pub fn TodoList() -> impl IntoView {
    let store = use_app_store();

    view! {
        <Show when=move || store.loading().get()>
            <div class="loading">"Loading..."</div>
        </Show>

        <Show when=move || empty_state_visible(store.rows().read().is_empty(), store.loading().get())>
            <div class="empty-state">"Nothing to show here."</div>
        </Show>

        <ul class="todo-list">
            <For
                each=move || store.rows().get()
                key=|row| {
                    // every displayed field, so an edited row re-renders
                    (
                        row.id,
                        row.title.clone(),
                        row.description.clone(),
                        row.priority_label.clone(),
                        row.completed,
                        row.created_label.clone(),
                        row.due_label.clone(),
                        row.completed_label.clone(),
                    )
                }
                children=move |row| view! { <TodoItem row=row /> }
            />
        </ul>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_state_hidden_while_loading() {
        assert!(!empty_state_visible(true, true));
        assert!(empty_state_visible(true, false));
        assert!(!empty_state_visible(false, false));
        assert!(!empty_state_visible(false, true));
    }
}
