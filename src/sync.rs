//! Task Synchronization
//!
//! Confirm-then-apply operations against the task store. Each function
//! makes at most one remote call and reports the change to apply locally;
//! `Ok(None)` means the call was skipped.

use crate::api::TaskApi;
use crate::error::TaskResult;
use crate::models::{TaskRequest, TaskStatus};
use crate::task_list::{TaskChange, TaskList};

/// Fetch the full list
pub async fn fetch_tasks<A: TaskApi + ?Sized>(api: &A) -> TaskResult<TaskChange> {
    let tasks = api.list().await.inspect_err(|e| log::warn!("[SYNC] List failed: {}", e))?;
    log::info!("[SYNC] Loaded {} tasks", tasks.len());
    Ok(TaskChange::Replaced(tasks))
}

/// Create a task; the returned task carries the server id and timestamp
pub async fn create_task<A: TaskApi + ?Sized>(api: &A, action: &str) -> TaskResult<TaskChange> {
    let request = TaskRequest::new_task(action)?;
    let task = api
        .create(&request)
        .await
        .inspect_err(|e| log::warn!("[SYNC] Create failed: {}", e))?;
    log::info!("[SYNC] Created task {}", task.task_id);
    Ok(TaskChange::Appended(task))
}

/// Send a full replacement of action and status, unless nothing changed
pub async fn update_task<A: TaskApi + ?Sized>(
    api: &A,
    tasks: &TaskList,
    task_id: &str,
    action: &str,
    status: TaskStatus,
) -> TaskResult<Option<TaskChange>> {
    let Some(request) = tasks.plan_update(task_id, action, status) else {
        log::debug!("[SYNC] Update of {} skipped, nothing to send", task_id);
        return Ok(None);
    };
    let task = api
        .update(task_id, &request)
        .await
        .inspect_err(|e| log::warn!("[SYNC] Update of {} failed: {}", task_id, e))?;
    Ok(Some(TaskChange::Updated(task)))
}

/// Flip the completion status, keeping the action text
pub async fn toggle_task<A: TaskApi + ?Sized>(
    api: &A,
    tasks: &TaskList,
    task_id: &str,
) -> TaskResult<Option<TaskChange>> {
    let Some(current) = tasks.get(task_id) else {
        return Ok(None);
    };
    update_task(api, tasks, task_id, &current.action, current.status.toggled()).await
}

/// Delete a task known locally
pub async fn delete_task<A: TaskApi + ?Sized>(
    api: &A,
    tasks: &TaskList,
    task_id: &str,
) -> TaskResult<Option<TaskChange>> {
    if tasks.position(task_id).is_none() {
        log::debug!("[SYNC] Delete of unknown task {} skipped", task_id);
        return Ok(None);
    }
    api.delete(task_id)
        .await
        .inspect_err(|e| log::warn!("[SYNC] Delete of {} failed: {}", task_id, e))?;
    Ok(Some(TaskChange::Removed(task_id.to_string())))
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::error::TaskError;
    use crate::models::Task;
    use crate::task_list::tests::make_task;
    use async_trait::async_trait;
    use std::cell::RefCell;
    use std::collections::VecDeque;

    /// Call recorded by the fake store
    #[derive(Debug, Clone, PartialEq)]
    pub(crate) enum Call {
        List,
        Create(TaskRequest),
        Update(String, TaskRequest),
        Delete(String),
    }

    /// Scripted in-memory task store
    #[derive(Default)]
    pub(crate) struct FakeApi {
        pub calls: RefCell<Vec<Call>>,
        pub lists: RefCell<VecDeque<TaskResult<Vec<Task>>>>,
        pub tasks: RefCell<VecDeque<TaskResult<Task>>>,
        pub deletes: RefCell<VecDeque<TaskResult<()>>>,
    }

    impl FakeApi {
        pub fn respond_list(self, result: TaskResult<Vec<Task>>) -> Self {
            self.lists.borrow_mut().push_back(result);
            self
        }

        pub fn respond_task(self, result: TaskResult<Task>) -> Self {
            self.tasks.borrow_mut().push_back(result);
            self
        }

        pub fn respond_delete(self, result: TaskResult<()>) -> Self {
            self.deletes.borrow_mut().push_back(result);
            self
        }

        pub fn calls(&self) -> Vec<Call> {
            self.calls.borrow().clone()
        }
    }

    fn unscripted<T>() -> TaskResult<T> {
        Err(TaskError::Transport("no scripted response".into()))
    }

    #[async_trait(?Send)]
    impl TaskApi for FakeApi {
        async fn list(&self) -> TaskResult<Vec<Task>> {
            self.calls.borrow_mut().push(Call::List);
            self.lists.borrow_mut().pop_front().unwrap_or_else(unscripted)
        }

        async fn create(&self, request: &TaskRequest) -> TaskResult<Task> {
            self.calls.borrow_mut().push(Call::Create(request.clone()));
            self.tasks.borrow_mut().pop_front().unwrap_or_else(unscripted)
        }

        async fn update(&self, task_id: &str, request: &TaskRequest) -> TaskResult<Task> {
            self.calls
                .borrow_mut()
                .push(Call::Update(task_id.to_string(), request.clone()));
            self.tasks.borrow_mut().pop_front().unwrap_or_else(unscripted)
        }

        async fn delete(&self, task_id: &str) -> TaskResult<()> {
            self.calls.borrow_mut().push(Call::Delete(task_id.to_string()));
            self.deletes.borrow_mut().pop_front().unwrap_or_else(unscripted)
        }
    }

    fn server_error(operation: &'static str) -> TaskError {
        TaskError::UnexpectedStatus { operation, status: 500 }
    }

    fn one_task() -> TaskList {
        TaskList::from_tasks(vec![make_task("t1", "Buy milk", TaskStatus::NotCompleted)])
    }

    #[tokio::test]
    async fn test_fetch_empty_list() {
        let api = FakeApi::default().respond_list(Ok(Vec::new()));
        let mut list = one_task();
        list.apply(fetch_tasks(&api).await.unwrap());
        assert!(list.is_empty());
        assert_eq!(api.calls(), vec![Call::List]);
    }

    #[tokio::test]
    async fn test_fetch_failure_keeps_list() {
        let api = FakeApi::default().respond_list(Err(server_error("list")));
        assert!(fetch_tasks(&api).await.is_err());
    }

    #[tokio::test]
    async fn test_create_appends_server_task() {
        let created = make_task("t1", "Buy milk", TaskStatus::NotCompleted);
        let api = FakeApi::default().respond_task(Ok(created.clone()));
        let mut list = TaskList::new();

        list.apply(create_task(&api, "Buy milk").await.unwrap());

        assert_eq!(list.as_slice(), &[created]);
        assert_eq!(
            api.calls(),
            vec![Call::Create(TaskRequest {
                action: "Buy milk".into(),
                status: TaskStatus::NotCompleted,
            })]
        );
    }

    #[tokio::test]
    async fn test_create_invalid_action_makes_no_call() {
        let api = FakeApi::default();
        let err = create_task(&api, &"x".repeat(51)).await.unwrap_err();
        assert!(matches!(err, TaskError::InvalidAction(_)));
        assert!(api.calls().is_empty());
    }

    #[tokio::test]
    async fn test_create_failure_reports_error() {
        let api = FakeApi::default().respond_task(Err(server_error("create")));
        assert_eq!(create_task(&api, "Buy milk").await, Err(server_error("create")));
    }

    #[tokio::test]
    async fn test_update_unchanged_makes_no_call() {
        let api = FakeApi::default();
        let list = one_task();
        let change = update_task(&api, &list, "t1", "Buy milk", TaskStatus::NotCompleted)
            .await
            .unwrap();
        assert_eq!(change, None);
        assert!(api.calls().is_empty());
    }

    #[tokio::test]
    async fn test_update_unknown_makes_no_call() {
        let api = FakeApi::default();
        let list = one_task();
        let change = update_task(&api, &list, "t9", "x", TaskStatus::Completed).await.unwrap();
        assert_eq!(change, None);
        assert!(api.calls().is_empty());
    }

    #[tokio::test]
    async fn test_update_server_response_is_canonical() {
        // Server normalizes the text differently than we sent it
        let server = make_task("t1", "Buy oat milk (2L)", TaskStatus::NotCompleted);
        let api = FakeApi::default().respond_task(Ok(server.clone()));
        let mut list = one_task();
        list.apply(TaskChange::Appended(make_task("t2", "Other", TaskStatus::NotCompleted)));

        let change = update_task(&api, &list, "t1", "Buy oat milk", TaskStatus::NotCompleted)
            .await
            .unwrap()
            .unwrap();
        list.apply(change);

        assert_eq!(list.len(), 2);
        assert_eq!(list.as_slice()[0], server);
    }

    #[tokio::test]
    async fn test_update_failure_leaves_list() {
        let api = FakeApi::default().respond_task(Err(server_error("update")));
        let list = one_task();
        let before = list.clone();
        let result = update_task(&api, &list, "t1", "Buy bread", TaskStatus::NotCompleted).await;
        assert!(result.is_err());
        assert_eq!(list, before);
    }

    #[tokio::test]
    async fn test_toggle_sends_flipped_status() {
        let api = FakeApi::default()
            .respond_task(Ok(make_task("t1", "Buy milk", TaskStatus::Completed)));
        let mut list = one_task();

        let change = toggle_task(&api, &list, "t1").await.unwrap().unwrap();
        list.apply(change);

        assert_eq!(
            api.calls(),
            vec![Call::Update(
                "t1".into(),
                TaskRequest { action: "Buy milk".into(), status: TaskStatus::Completed }
            )]
        );
        let task = list.get("t1").unwrap();
        assert!(task.is_completed());
        assert!(task.status.label_style().contains("line-through"));
        assert!(!task.status.allows_edit());
    }

    #[tokio::test]
    async fn test_delete_confirmed() {
        let api = FakeApi::default().respond_delete(Ok(()));
        let mut list = one_task();
        list.apply(delete_task(&api, &list, "t1").await.unwrap().unwrap());
        assert!(list.get("t1").is_none());
        assert!(list.is_empty());
    }

    #[tokio::test]
    async fn test_delete_server_error_keeps_task() {
        let api = FakeApi::default().respond_delete(Err(server_error("delete")));
        let list = one_task();
        assert!(delete_task(&api, &list, "t1").await.is_err());
        assert_eq!(list.len(), 1);
        assert_eq!(api.calls(), vec![Call::Delete("t1".into())]);
    }

    #[tokio::test]
    async fn test_delete_unknown_makes_no_call() {
        let api = FakeApi::default();
        let list = one_task();
        assert_eq!(delete_task(&api, &list, "t9").await, Ok(None));
        assert!(api.calls().is_empty());
    }
}
