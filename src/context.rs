//! Application Context
//!
//! The controller is created once the bridge is ready and shared with every
//! component through the Leptos Context API.

use std::sync::Arc;

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::commands::TauriBridge;
use crate::controller::TodoController;
use crate::store::StoreSurface;

pub type WebController = TodoController<TauriBridge, StoreSurface>;

/// Shared handle to the view controller
#[derive(Clone)]
pub struct AppContext {
    controller: Arc<WebController>,
}

impl AppContext {
    pub fn new(controller: Arc<WebController>) -> Self {
        Self { controller }
    }

    pub fn controller(&self) -> &WebController {
        &self.controller
    }

    /// Run an async controller action on the browser event loop
    pub fn spawn<F, Fut>(&self, action: F)
    where
        F: FnOnce(Arc<WebController>) -> Fut,
        Fut: std::future::Future<Output = ()> + 'static,
    {
        spawn_local(action(self.controller.clone()));
    }
}

pub fn use_app_context() -> AppContext {
    use_context::<AppContext>().expect("AppContext should be provided")
}
