//! UI Components
//!
//! Reusable Leptos components.

mod task_row;
mod new_task_form;
mod task_list_view;
mod editable_action;
mod delete_task_button;
mod notice_bar;

pub use task_row::TaskRow;
pub use new_task_form::NewTaskForm;
pub use task_list_view::TaskListView;
pub use editable_action::EditableAction;
pub use delete_task_button::DeleteTaskButton;
pub use notice_bar::NoticeBar;
