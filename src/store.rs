//! Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity. The task
//! collection is only ever mutated through `TaskListClient`.

use std::rc::Rc;

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::reactive::owner::LocalStorage;
use reactive_stores::Store;

use crate::api::{HttpTaskApi, TaskApi};
use crate::config::ClientConfig;
use crate::error::TaskError;
use crate::models::TaskStatus;
use crate::sync;
use crate::task_list::{TaskChange, TaskList};

/// Whether the first (or latest) list fetch has settled
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoadPhase {
    #[default]
    Loading,
    Ready,
}

/// What the list area shows, derived from phase and contents
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewState {
    Loading,
    Empty,
    Populated,
}

impl ViewState {
    pub fn derive(phase: LoadPhase, tasks: &TaskList) -> Self {
        match phase {
            LoadPhase::Loading => ViewState::Loading,
            LoadPhase::Ready if tasks.is_empty() => ViewState::Empty,
            LoadPhase::Ready => ViewState::Populated,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Error,
}

/// Short-lived message shown above the list
#[derive(Debug, Clone, PartialEq)]
pub struct Notice {
    pub id: u32,
    pub kind: NoticeKind,
    pub text: String,
}

/// Global application state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// Session copy of the task collection
    pub tasks: TaskList,
    pub phase: LoadPhase,
    /// Notice currently on screen
    pub notice: Option<Notice>,
    /// Last issued notice id
    pub notice_seq: u32,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

/// Clear a notice unless a newer one replaced it meanwhile
pub fn dismiss_notice(store: &AppStore, id: u32) {
    if store.notice().with_untracked(|n| n.as_ref().map(|n| n.id)) == Some(id) {
        store.notice().set(None);
    }
}

/// Get the task client from context
pub fn use_task_client() -> TaskListClient {
    expect_context::<TaskListClient>()
}

/// Owner of all task mutations: list, create, update, delete.
///
/// Every operation awaits the task store before touching local state.
#[derive(Clone, Copy)]
pub struct TaskListClient {
    store: AppStore,
    api: StoredValue<Rc<dyn TaskApi>, LocalStorage>,
    config: StoredValue<ClientConfig>,
}

impl TaskListClient {
    /// Client talking HTTP to the configured task store
    pub fn new(store: AppStore, config: ClientConfig) -> Self {
        let api = Rc::new(HttpTaskApi::new(config.clone()));
        Self::with_api(store, api, config)
    }

    pub fn with_api(store: AppStore, api: Rc<dyn TaskApi>, config: ClientConfig) -> Self {
        Self {
            store,
            api: StoredValue::new_local(api),
            config: StoredValue::new(config),
        }
    }

    /// How long a notice stays on screen
    pub fn notice_ms(&self) -> u32 {
        self.config.with_value(|c| c.notice_ms)
    }

    /// Reload everything; the view shows Loading until the fetch settles
    pub async fn list(self) {
        self.store.phase().set(LoadPhase::Loading);
        let api = self.api.get_value();
        match sync::fetch_tasks(&*api).await {
            Ok(change) => {
                let pacing = self.config.with_value(|c| c.list_pacing_ms);
                pause(pacing).await;
                self.apply(change);
                pause(pacing).await;
                self.store.phase().set(LoadPhase::Ready);
            }
            // Stays in Loading; there is no retry
            Err(e) => self.notify_error("load tasks", &e),
        }
    }

    /// Returns true when the task was created, so the caller can clear its input
    pub async fn create(self, action: String) -> bool {
        let api = self.api.get_value();
        match sync::create_task(&*api, &action).await {
            Ok(change) => {
                self.apply(change);
                self.notify(NoticeKind::Success, "Task added");
                true
            }
            Err(e) => {
                self.notify_error("add task", &e);
                false
            }
        }
    }

    pub async fn update(self, task_id: String, action: String, status: TaskStatus) {
        let api = self.api.get_value();
        let snapshot = self.store.tasks().get_untracked();
        match sync::update_task(&*api, &snapshot, &task_id, &action, status).await {
            Ok(Some(change)) => {
                self.apply(change);
                self.notify(NoticeKind::Success, "Task updated");
            }
            Ok(None) => {}
            Err(e) => self.notify_error("update task", &e),
        }
    }

    /// Flip completion, keeping the action text
    pub async fn toggle(self, task_id: String) {
        let api = self.api.get_value();
        let snapshot = self.store.tasks().get_untracked();
        match sync::toggle_task(&*api, &snapshot, &task_id).await {
            Ok(Some(change)) => {
                self.apply(change);
                self.notify(NoticeKind::Success, "Task updated");
            }
            Ok(None) => {}
            Err(e) => self.notify_error("update task", &e),
        }
    }

    pub async fn delete(self, task_id: String) {
        let api = self.api.get_value();
        let snapshot = self.store.tasks().get_untracked();
        match sync::delete_task(&*api, &snapshot, &task_id).await {
            Ok(Some(change)) => {
                self.apply(change);
                self.notify(NoticeKind::Success, "Task deleted");
            }
            Ok(None) => {}
            Err(e) => self.notify_error("delete task", &e),
        }
    }

    fn apply(&self, change: TaskChange) {
        self.store.tasks().write().apply(change);
    }

    fn notify_error(&self, what: &str, error: &TaskError) {
        log::error!("[STORE] Could not {}: {}", what, error);
        self.notify(NoticeKind::Error, &format!("Could not {}", what));
    }

    /// Show a notice; `NoticeBar` dismisses it after `notice_ms`
    fn notify(&self, kind: NoticeKind, text: &str) {
        let id = self.store.notice_seq().get_untracked().wrapping_add(1);
        self.store.notice_seq().set(id);
        self.store.notice().set(Some(Notice { id, kind, text: text.to_string() }));
    }
}

async fn pause(ms: u32) {
    if ms > 0 {
        TimeoutFuture::new(ms).await;
    }
}
