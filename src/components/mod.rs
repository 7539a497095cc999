//! UI Components
//!
//! Leptos components for the todo page. They read the app store and send
//! every action through the controller in [`AppContext`](crate::context::AppContext).

mod error_banner;
mod filter_bar;
mod new_todo_form;
mod summary_bar;
mod todo_edit_form;
mod todo_item;
mod todo_list;

pub use error_banner::{ErrorBanner, StatusLine};
pub use filter_bar::{FilterBar, SortSelect};
pub use new_todo_form::NewTodoForm;
pub use summary_bar::SummaryBar;
pub use todo_edit_form::TodoEditForm;
pub use todo_item::TodoItem;
pub use todo_list::TodoList;
