//! Task List View Component
//!
//! Loading skeleton, empty state, or the task rows.

use leptos::prelude::*;

use crate::components::TaskRow;
use crate::store::{use_app_store, AppStateStoreFields, ViewState};

#[component]
pub fn TaskListView() -> impl IntoView {
    let store = use_app_store();

    let view_state = move || store.tasks().with(|tasks| ViewState::derive(store.phase().get(), tasks));

    move || match view_state() {
        ViewState::Loading => view! {
            <div class="skeleton" aria-busy="true">
                <div class="skeleton-line"></div>
                <div class="skeleton-line"></div>
                <div class="skeleton-line short"></div>
            </div>
        }
        .into_any(),
        ViewState::Empty => view! { <p class="empty-state">"No tasks yet"</p> }.into_any(),
        ViewState::Populated => view! {
            <ul class="task-list">
                <For
                    each=move || store.tasks().get().as_slice().to_vec()
                    // Every mutable field is part of the key so edits re-render the row
                    key=|task| (task.task_id.clone(), task.action.clone(), task.status)
                    children=move |task| view! { <TaskRow task=task /> }
                />
            </ul>
            <p class="task-count">{move || format!("{} tasks", store.tasks().with(|t| t.len()))}</p>
        }
        .into_any(),
    }
}
