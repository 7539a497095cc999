//! Filter and Sort Controls
//!
//! Both only re-render from the cache; neither issues a remote call.

use leptos::prelude::*;

use crate::context::use_app_context;
use crate::reconcile::{FilterMode, SortMode};
use crate::store::{use_app_store, AppStateStoreFields};

/// Three mutually exclusive filter buttons
#[component]
pub fn FilterBar() -> impl IntoView {
    let ctx = use_app_context();
    let store = use_app_store();

    view! {
        <div class="filter-bar">
            {FilterMode::ALL.into_iter().map(|mode| {
                let ctx = ctx.clone();
                let is_active = move || store.filter().get() == mode;
                view! {
                    <button
                        type="button"
                        class=move || if is_active() { "filter-btn active" } else { "filter-btn" }
                        on:click=move |_| ctx.controller().set_filter(mode)
                    >
                        {mode.label()}
                    </button>
                }
            }).collect_view()}
        </div>
    }
}

#[component]
pub fn SortSelect() -> impl IntoView {
    let ctx = use_app_context();
    let store = use_app_store();

    let on_change = move |ev: web_sys::Event| {
        if let Some(mode) = SortMode::parse(&event_target_value(&ev)) {
            ctx.controller().set_sort(mode);
        }
    };

    view! {
        <select class="sort-select" on:change=on_change>
            {SortMode::ALL.into_iter().map(|mode| view! {
                <option value=mode.as_str() prop:selected=move || store.sort().get() == mode>
                    {mode.label()}
                </option>
            }).collect_view()}
        </select>
    }
}
