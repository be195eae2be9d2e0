//! Delete Task Button Component

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::store::use_task_client;

/// Prompt text naming the task about to be deleted
pub fn delete_prompt(action: &str) -> String {
    format!("Delete \"{}\"?", action)
}

/// × button that asks for confirmation before deleting the task.
///
/// Nothing is removed locally until the store answers 204.
#[component]
pub fn DeleteTaskButton(task_id: String, action: String) -> impl IntoView {
    let client = use_task_client();
    let (confirming, set_confirming) = signal(false);
    let task_id = StoredValue::new(task_id);
    let prompt = delete_prompt(&action);

    move || {
        if !confirming.get() {
            return view! {
                <button class="delete-btn" title="Delete task" on:click=move |_| set_confirming.set(true)>
                    "×"
                </button>
            }
            .into_any();
        }
        view! {
            <span class="delete-confirm">
                <span class="delete-confirm-text">{prompt.clone()}</span>
                <button
                    class="confirm-btn"
                    on:click=move |_| {
                        set_confirming.set(false);
                        spawn_local(client.delete(task_id.get_value()));
                    }
                >
                    "Delete"
                </button>
                <button class="cancel-btn" on:click=move |_| set_confirming.set(false)>
                    "Keep"
                </button>
            </span>
        }
        .into_any()
    }
}
