//! Error Banner and Status Line

use leptos::prelude::*;

use crate::store::{use_app_store, AppStateStoreFields};

/// Persistent error region; cleared when the next action starts
#[component]
pub fn ErrorBanner() -> impl IntoView {
    let store = use_app_store();

    view! {
        {move || store.error().get().map(|message| view! {
            <div class="error" role="alert">{message}</div>
        })}
    }
}

/// Host health line from `db_ping`
#[component]
pub fn StatusLine() -> impl IntoView {
    let store = use_app_store();

    view! {
        <span class="status-line">{move || store.status().get().unwrap_or_default()}</span>
    }
}
