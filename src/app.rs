//! Task List Frontend App
//!
//! Single-page task list: header, add form, and the list itself.

use leptos::prelude::*;
use leptos::task::spawn_local;
use reactive_stores::Store;

use crate::components::{NewTaskForm, NoticeBar, TaskListView};
use crate::config::ClientConfig;
use crate::store::{AppState, TaskListClient};

#[component]
pub fn App() -> impl IntoView {
    let config = ClientConfig::from_build();
    log::info!("[APP] Task store at {}", config.api_base);

    // State
    let store = Store::new(AppState::new());
    let client = TaskListClient::new(store, config);

    // Provide context to all children
    provide_context(store);
    provide_context(client);

    // Load tasks on mount
    Effect::new(move |_| {
        spawn_local(client.list());
    });

    view! {
        <div class="wrapper">
            <main class="content">
                <NoticeBar />

                <header class="task-header">
                    <h3>"Task List"</h3>
                    <button class="refresh-btn" on:click=move |_| spawn_local(client.list())>
                        "Refresh"
                    </button>
                </header>

                <NewTaskForm />

                <TaskListView />
            </main>
        </div>
    }
}
