//! Todo View App
//!
//! Waits for the Tauri bridge, then wires the controller into the page.
//! If the bridge never shows up only the error is rendered.

use std::sync::Arc;

use leptos::prelude::*;
use leptos::task::spawn_local;
use reactive_stores::Store;

use crate::commands::TauriBridge;
use crate::components::{ErrorBanner, FilterBar, NewTodoForm, SortSelect, StatusLine, SummaryBar, TodoList};
use crate::config::AppConfig;
use crate::context::AppContext;
use crate::controller::{Surface, TodoController};
use crate::readiness::{browser_sleep, wait_for_bridge};
use crate::store::{AppState, StoreSurface};

#[component]
pub fn App(config: AppConfig) -> impl IntoView {
    let store = Store::new(AppState::new(&config));
    provide_context(store);

    // Set once the bridge is ready; never reset
    let (app_ctx, set_app_ctx) = signal::<Option<AppContext>>(None);

    spawn_local(async move {
        let surface = StoreSurface::new(store);
        match wait_for_bridge(TauriBridge::locate, browser_sleep, &config.bridge).await {
            Ok(bridge) => {
                let controller = Arc::new(TodoController::new(bridge, surface, &config));
                set_app_ctx.set(Some(AppContext::new(controller.clone())));
                controller.check_connection().await;
                controller.refresh().await;
            }
            Err(e) => surface.show_error(&e),
        }
    });

    view! {
        <main class="container">
            <header class="app-header">
                <h1>"Todos"</h1>
                <StatusLine />
            </header>

            <ErrorBanner />

            {move || app_ctx.get().map(|ctx| view! { <TodoApp ctx=ctx /> })}
        </main>
    }
}

/// Interactive part of the page, mounted only after the bridge is ready
#[component]
fn TodoApp(ctx: AppContext) -> impl IntoView {
    provide_context(ctx);

    view! {
        <NewTodoForm />

        <div class="toolbar">
            <FilterBar />
            <SortSelect />
        </div>

        <SummaryBar />
        <TodoList />
    }
}
