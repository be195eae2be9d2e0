//! Task Row Component
//!
//! One task: completion checkbox, action text, created date, delete.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::components::{DeleteTaskButton, EditableAction};
use crate::models::Task;
use crate::store::use_task_client;

#[component]
pub fn TaskRow(task: Task) -> impl IntoView {
    let client = use_task_client();

    let completed = task.is_completed();
    let status = task.status;
    let created = task.created_label();
    let row_class = if completed { "task-row completed" } else { "task-row" };
    let toggle_id = task.task_id.clone();

    // Completed tasks lock their text
    let label = if status.allows_edit() {
        view! {
            <EditableAction task_id=task.task_id.clone() action=task.action.clone() status=status />
        }
        .into_any()
    } else {
        view! { <span class="task-text" style=status.label_style()>{task.action.clone()}</span> }
            .into_any()
    };

    view! {
        <li class=row_class data-status=status.as_str()>
            <input
                type="checkbox"
                checked=completed
                on:click=move |ev| {
                    // Box flips only once the store confirms and the row re-renders
                    ev.prevent_default();
                    spawn_local(client.toggle(toggle_id.clone()));
                }
            />

            <span class="task-label">{label}</span>

            <span class="task-created">{created}</span>

            <DeleteTaskButton task_id=task.task_id.clone() action=task.action.clone() />
        </li>
    }
}
