//! UI Components
//!
//! Leptos components of the task board.

mod filter_bar;
mod new_task_form;
mod status_banner;
mod task_item;
mod task_list;

pub use filter_bar::FilterBar;
pub use new_task_form::NewTaskForm;
pub use status_banner::StatusBanner;
pub use task_item::TaskItem;
pub use task_list::TaskList;
