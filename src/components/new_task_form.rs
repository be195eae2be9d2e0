//! New Task Form Component

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::models::ACTION_MAX_LEN;
use crate::store::use_task_client;

/// Form for adding a task; the input clears only after the store confirms
#[component]
pub fn NewTaskForm() -> impl IntoView {
    let client = use_task_client();

    let (new_text, set_new_text) = signal(String::new());

    let create_task = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let text = new_text.get_untracked();
        if text.trim().is_empty() {
            return;
        }

        spawn_local(async move {
            if client.create(text).await {
                set_new_text.set(String::new());
            }
        });
    };

    view! {
        <form class="new-task-form" on:submit=create_task>
            <input
                type="text"
                placeholder="Add a task..."
                maxlength=ACTION_MAX_LEN.to_string()
                prop:value=move || new_text.get()
                on:input=move |ev| set_new_text.set(event_target_value(&ev))
            />
            <button type="submit">"Add"</button>
        </form>
    }
}
