//! Summary Counts

use leptos::prelude::*;

use crate::store::{use_app_store, AppStateStoreFields};

/// Total / active / completed over every cached todo, whatever the filter
#[component]
pub fn SummaryBar() -> impl IntoView {
    let store = use_app_store();
    let summary = move || store.summary().get();

    view! {
        <div class="summary-bar">
            <span>"Total: "<strong class="total-count">{move || summary().total}</strong></span>
            <span>"Active: "<strong class="active-count">{move || summary().active}</strong></span>
            <span>"Completed: "<strong class="completed-count">{move || summary().completed}</strong></span>
        </div>
    }
}
