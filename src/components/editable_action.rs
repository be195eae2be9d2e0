//! Editable Action Component
//!
//! Inline editor for the action text of an incomplete task.

use leptos::html::Input;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::models::{TaskStatus, ACTION_MAX_LEN};
use crate::store::use_task_client;

/// Action label with an edit button; Enter or blur commits, Escape cancels
#[component]
pub fn EditableAction(task_id: String, action: String, status: TaskStatus) -> impl IntoView {
    let client = use_task_client();

    let (editing, set_editing) = signal(false);
    let (draft, set_draft) = signal(action.clone());
    let task_id = StoredValue::new(task_id);
    let action = StoredValue::new(action);
    let input_ref = NodeRef::<Input>::new();

    // The input is created on demand, so autofocus would not apply
    Effect::new(move |_| {
        if !editing.get() {
            return;
        }
        if let Some(input) = input_ref.get() {
            let _ = input.focus();
        }
    });

    let commit = move || {
        // Removing the input fires blur after Enter; only commit once
        if !editing.get_untracked() {
            return;
        }
        set_editing.set(false);
        let text = draft.get_untracked();
        let id = task_id.get_value();
        spawn_local(client.update(id, text, status));
    };

    let cancel = move || {
        set_draft.set(action.get_value());
        set_editing.set(false);
    };

    view! {
        <Show
            when=move || editing.get()
            fallback=move || view! {
                <span class="task-text" style=status.label_style()>{action.get_value()}</span>
                <button
                    class="edit-btn"
                    title="Edit Task Action"
                    on:click=move |_| {
                        set_draft.set(action.get_value());
                        set_editing.set(true);
                    }
                >
                    "✎"
                </button>
            }
        >
            <input
                type="text"
                class="task-edit-input"
                maxlength=ACTION_MAX_LEN.to_string()
                node_ref=input_ref
                prop:value=move || draft.get()
                on:input=move |ev| set_draft.set(event_target_value(&ev))
                on:blur=move |_| commit()
                on:keydown=move |ev: web_sys::KeyboardEvent| {
                    match ev.key().as_str() {
                        "Enter" => {
                            ev.prevent_default();
                            commit();
                        }
                        "Escape" => cancel(),
                        _ => {}
                    }
                }
            />
        </Show>
    }
}
