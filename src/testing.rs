//! Test Doubles
//!
//! Scripted bridge and a surface that records what the controller did.

use std::cell::{Cell, RefCell};
use std::collections::{HashMap, VecDeque};

use async_trait::async_trait;
use serde_json::Value;

use crate::commands::Bridge;
use crate::controller::Surface;
use crate::error::ViewError;
use crate::reconcile::ListView;

/// Bridge answering from per-command queues; unscripted calls get `null`.
#[derive(Default)]
pub struct MockBridge {
    calls: RefCell<Vec<(String, Value)>>,
    responses: RefCell<HashMap<String, VecDeque<Result<Value, ViewError>>>>,
}

impl MockBridge {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue the next result for `command`
    pub fn respond(&self, command: &str, result: Result<Value, ViewError>) {
        self.responses
            .borrow_mut()
            .entry(command.to_string())
            .or_default()
            .push_back(result);
    }

    pub fn calls(&self) -> Vec<(String, Value)> {
        self.calls.borrow().clone()
    }

    pub fn commands(&self) -> Vec<String> {
        self.calls.borrow().iter().map(|(command, _)| command.clone()).collect()
    }

    pub fn clear_calls(&self) {
        self.calls.borrow_mut().clear();
    }
}

#[async_trait(?Send)]
impl Bridge for MockBridge {
    async fn invoke(&self, command: &str, args: Value) -> Result<Value, ViewError> {
        self.calls.borrow_mut().push((command.to_string(), args));
        self.responses
            .borrow_mut()
            .get_mut(command)
            .and_then(|queue| queue.pop_front())
            .unwrap_or(Ok(Value::Null))
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum SurfaceEvent {
    Render(ListView),
    Loading(bool),
    Error(ViewError),
    ClearError,
    ResetForm,
    Status(String),
    Confirm(String),
}

/// Headless surface; confirms by default
pub struct RecordingSurface {
    events: RefCell<Vec<SurfaceEvent>>,
    confirm_answer: Cell<bool>,
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self {
            events: RefCell::new(Vec::new()),
            confirm_answer: Cell::new(true),
        }
    }

    pub fn set_confirm(&self, answer: bool) {
        self.confirm_answer.set(answer);
    }

    pub fn events(&self) -> Vec<SurfaceEvent> {
        self.events.borrow().clone()
    }

    pub fn clear_events(&self) {
        self.events.borrow_mut().clear();
    }

    pub fn renders(&self) -> Vec<ListView> {
        self.events
            .borrow()
            .iter()
            .filter_map(|e| match e {
                SurfaceEvent::Render(view) => Some(view.clone()),
                _ => None,
            })
            .collect()
    }

    pub fn last_view(&self) -> Option<ListView> {
        self.renders().pop()
    }

    pub fn errors(&self) -> Vec<ViewError> {
        self.events
            .borrow()
            .iter()
            .filter_map(|e| match e {
                SurfaceEvent::Error(err) => Some(err.clone()),
                _ => None,
            })
            .collect()
    }

    fn push(&self, event: SurfaceEvent) {
        self.events.borrow_mut().push(event);
    }
}

impl Surface for RecordingSurface {
    fn render(&self, view: ListView) {
        self.push(SurfaceEvent::Render(view));
    }

    fn set_loading(&self, loading: bool) {
        self.push(SurfaceEvent::Loading(loading));
    }

    fn show_error(&self, error: &ViewError) {
        self.push(SurfaceEvent::Error(error.clone()));
    }

    fn clear_error(&self) {
        self.push(SurfaceEvent::ClearError);
    }

    fn reset_form(&self) {
        self.push(SurfaceEvent::ResetForm);
    }

    fn set_status(&self, status: &str) {
        self.push(SurfaceEvent::Status(status.to_string()));
    }

    fn confirm(&self, prompt: &str) -> bool {
        self.push(SurfaceEvent::Confirm(prompt.to_string()));
        self.confirm_answer.get()
    }
}
