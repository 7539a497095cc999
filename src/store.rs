//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity. The controller
//! renders into it through [`StoreSurface`]; components only read it.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::config::AppConfig;
use crate::controller::Surface;
use crate::error::ViewError;
use crate::reconcile::{FilterMode, ListView, SortMode, Summary, TodoRow};

/// What the page shows, as last rendered by the controller
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// Filtered and sorted rows
    pub rows: Vec<TodoRow>,
    /// Counts over all cached todos
    pub summary: Summary,
    pub filter: FilterMode,
    pub sort: SortMode,
    /// Full-list fetch in flight
    pub loading: bool,
    pub error: Option<String>,
    /// Host health line
    pub status: Option<String>,
    /// Bumped to clear the creation form
    pub form_version: u32,
}

impl AppState {
    pub fn new(config: &AppConfig) -> Self {
        Self {
            filter: config.default_filter,
            sort: config.default_sort,
            // the first fetch is pending from the moment the list mounts
            loading: true,
            ..Default::default()
        }
    }
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

/// [`Surface`] writing into the reactive store
#[derive(Clone, Copy)]
pub struct StoreSurface {
    store: AppStore,
}

impl StoreSurface {
    pub fn new(store: AppStore) -> Self {
        Self { store }
    }
}

impl Surface for StoreSurface {
    fn render(&self, view: ListView) {
        let ListView { rows, summary, filter, sort } = view;
        *self.store.rows().write() = rows;
        *self.store.summary().write() = summary;
        *self.store.filter().write() = filter;
        *self.store.sort().write() = sort;
    }

    fn set_loading(&self, loading: bool) {
        *self.store.loading().write() = loading;
    }

    fn show_error(&self, error: &ViewError) {
        *self.store.error().write() = Some(error.to_string());
    }

    fn clear_error(&self) {
        *self.store.error().write() = None;
    }

    fn reset_form(&self) {
        *self.store.form_version().write() += 1;
    }

    fn set_status(&self, status: &str) {
        *self.store.status().write() = Some(status.to_string());
    }

    fn confirm(&self, prompt: &str) -> bool {
        web_sys::window()
            .and_then(|window| window.confirm_with_message(prompt).ok())
            .unwrap_or(false)
    }
}
