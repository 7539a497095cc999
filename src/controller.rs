//! Todo View Controller
//!
//! Owns the client view state (filter, sort, cached records) and wraps every
//! user action in a remote call. Mutations never patch the cache: on success
//! the whole list is fetched again and re-rendered.
//!
//! Errors stop at this boundary. Each wrapper clears the error region, issues
//! at most one call, and on failure shows the message and leaves the cache as
//! it was.

use std::sync::{Mutex, MutexGuard, PoisonError};

use crate::commands::{self, Bridge};
use crate::config::{AppConfig, InputLimits};
use crate::error::ViewError;
use crate::models::{NewTodo, NewTodoInput, Todo, TodoEdit, TodoPatch};
use crate::reconcile::{reconcile, FilterMode, ListView, SortMode};

/// Presentation surface the controller renders into
pub trait Surface {
    fn render(&self, view: ListView);
    fn set_loading(&self, loading: bool);
    fn show_error(&self, error: &ViewError);
    fn clear_error(&self);
    /// Clear the creation form after a successful create
    fn reset_form(&self);
    fn set_status(&self, status: &str);
    /// Ask the user to confirm a destructive action
    fn confirm(&self, prompt: &str) -> bool;
}

#[derive(Debug, Clone, Default)]
pub struct ViewState {
    pub filter: FilterMode,
    pub sort: SortMode,
    /// Last successful `list_todos` result
    pub todos: Vec<Todo>,
}

pub struct TodoController<B, S> {
    bridge: B,
    surface: S,
    // never held across an await
    state: Mutex<ViewState>,
    limits: InputLimits,
}

impl<B: Bridge, S: Surface> TodoController<B, S> {
    pub fn new(bridge: B, surface: S, config: &AppConfig) -> Self {
        Self {
            bridge,
            surface,
            state: Mutex::new(ViewState {
                filter: config.default_filter,
                sort: config.default_sort,
                todos: Vec::new(),
            }),
            limits: config.limits,
        }
    }

    fn state(&self) -> MutexGuard<'_, ViewState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn bridge(&self) -> &B {
        &self.bridge
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn filter(&self) -> FilterMode {
        self.state().filter
    }

    pub fn sort(&self) -> SortMode {
        self.state().sort
    }

    /// Cached record by id
    pub fn todo(&self, id: i64) -> Option<Todo> {
        self.state().todos.iter().find(|t| t.id == id).cloned()
    }

    pub fn render(&self) {
        let view = {
            let state = self.state();
            reconcile(&state.todos, state.filter, state.sort)
        };
        self.surface.render(view);
    }

    pub fn set_filter(&self, filter: FilterMode) {
        self.state().filter = filter;
        self.render();
    }

    pub fn set_sort(&self, sort: SortMode) {
        self.state().sort = sort;
        self.render();
    }

    fn fail(&self, err: ViewError) {
        log::warn!("[ui] {}", err);
        self.surface.show_error(&err);
    }

    /// Fetch the full list and replace the cache.
    pub async fn refresh(&self) {
        self.surface.set_loading(true);
        self.surface.clear_error();
        match commands::list_todos(&self.bridge).await {
            Ok(todos) => {
                self.state().todos = todos;
                self.render();
            }
            Err(e) => self.fail(e),
        }
        self.surface.set_loading(false);
    }

    /// Publish the host's health check as a status line.
    pub async fn check_connection(&self) {
        match commands::db_ping(&self.bridge).await {
            Ok(status) => {
                log::info!("[app] {}", status);
                self.surface.set_status(&status);
            }
            Err(e) => {
                log::warn!("[app] db_ping failed: {}", e);
                self.surface.set_status(&format!("offline: {}", e));
            }
        }
    }

    pub async fn create(&self, input: &NewTodoInput) {
        self.surface.clear_error();
        let payload = NewTodo::from_input(input);
        let result = match self.check_new(&payload) {
            Ok(()) => commands::create_todo(&self.bridge, &payload).await,
            Err(e) => Err(e),
        };
        match result {
            Ok(()) => {
                self.surface.reset_form();
                self.refresh().await;
            }
            Err(e) => self.fail(e),
        }
    }

    /// Set the completion state; the host decides whether it is valid.
    /// Returns `false` when the call failed and nothing changed.
    pub async fn toggle(&self, id: i64, completed: bool) -> bool {
        self.surface.clear_error();
        match commands::toggle_todo(&self.bridge, id, completed).await {
            Ok(()) => {
                self.refresh().await;
                true
            }
            Err(e) => {
                self.fail(e);
                false
            }
        }
    }

    /// Delete after the user confirms; declining changes nothing.
    pub async fn remove(&self, id: i64, title: &str) {
        if !self.surface.confirm(&format!("Delete \"{}\"?", title)) {
            log::debug!("[ui] delete of #{} declined", id);
            return;
        }
        self.surface.clear_error();
        match commands::delete_todo(&self.bridge, id).await {
            Ok(()) => self.refresh().await,
            Err(e) => self.fail(e),
        }
    }

    /// Send only the fields that differ from the cached record.
    pub async fn update(&self, id: i64, edit: &TodoEdit) {
        self.surface.clear_error();
        let Some(todo) = self.todo(id) else {
            log::warn!("[ui] todo #{} is no longer loaded, dropping edit", id);
            return;
        };
        let patch = TodoPatch::diff(&todo, edit);
        if patch.is_empty() {
            log::debug!("[ui] no changes for todo #{}", id);
            return;
        }
        let result = match self.check_patch(&patch) {
            Ok(()) => commands::update_todo(&self.bridge, id, &patch).await,
            Err(e) => Err(e),
        };
        match result {
            Ok(()) => self.refresh().await,
            Err(e) => self.fail(e),
        }
    }

    fn check_new(&self, payload: &NewTodo) -> Result<(), ViewError> {
        if payload.title.is_empty() {
            return Err(ViewError::Validation("Title cannot be empty".to_string()));
        }
        self.check_lengths(Some(&payload.title), payload.description.as_deref())
    }

    fn check_patch(&self, patch: &TodoPatch) -> Result<(), ViewError> {
        self.check_lengths(patch.title.as_deref(), patch.description.as_ref().and_then(|d| d.as_deref()))
    }

    fn check_lengths(&self, title: Option<&str>, description: Option<&str>) -> Result<(), ViewError> {
        if title.is_some_and(|t| t.chars().count() > self.limits.title_max) {
            return Err(ViewError::Validation(format!(
                "Title cannot exceed {} characters",
                self.limits.title_max
            )));
        }
        if description.is_some_and(|d| d.chars().count() > self.limits.description_max) {
            return Err(ViewError::Validation(format!(
                "Description cannot exceed {} characters",
                self.limits.description_max
            )));
        }
        Ok(())
    }
}
