//! Task Collection
//!
//! Ordered, id-unique list of tasks. Display order is insertion order.
//! Only confirmed changes from the task store are applied to it.

use crate::models::{validate_action, Task, TaskRequest, TaskStatus};

/// A confirmed change reported by the task store
#[derive(Debug, Clone, PartialEq)]
pub enum TaskChange {
    /// Full list fetched
    Replaced(Vec<Task>),
    /// New task created
    Appended(Task),
    /// Existing task updated (server representation)
    Updated(Task),
    /// Task deleted
    Removed(String),
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct TaskList {
    tasks: Vec<Task>,
}

impl TaskList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from a fetched list, keeping the first task for each id
    pub fn from_tasks(tasks: Vec<Task>) -> Self {
        let mut list = Self::new();
        for task in tasks {
            if list.position(&task.task_id).is_some() {
                log::warn!("[TASKS] Dropping duplicate task id {}", task.task_id);
                continue;
            }
            list.tasks.push(task);
        }
        list
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    pub fn as_slice(&self) -> &[Task] {
        &self.tasks
    }

    /// Index of a task by id (linear scan)
    pub fn position(&self, task_id: &str) -> Option<usize> {
        self.tasks.iter().position(|t| t.task_id == task_id)
    }

    pub fn get(&self, task_id: &str) -> Option<&Task> {
        self.position(task_id).map(|i| &self.tasks[i])
    }

    /// Request to send for an edit, or None when nothing would change.
    ///
    /// Unknown ids, unchanged values and invalid text all yield None.
    pub fn plan_update(&self, task_id: &str, action: &str, status: TaskStatus) -> Option<TaskRequest> {
        let current = self.get(task_id)?;
        if current.action == action && current.status == status {
            return None;
        }
        let action = if current.action == action {
            action.to_string()
        } else {
            validate_action(action).ok()?
        };
        if action == current.action && status == current.status {
            return None;
        }
        Some(TaskRequest { action, status })
    }

    /// Apply a confirmed change
    pub fn apply(&mut self, change: TaskChange) {
        match change {
            TaskChange::Replaced(tasks) => *self = Self::from_tasks(tasks),
            TaskChange::Appended(task) => match self.position(&task.task_id) {
                Some(index) => self.tasks[index] = task,
                None => self.tasks.push(task),
            },
            TaskChange::Updated(task) => {
                // Dropped if the task was removed while the request was in flight
                if let Some(index) = self.position(&task.task_id) {
                    self.tasks[index] = task;
                }
            }
            TaskChange::Removed(task_id) => {
                if let Some(index) = self.position(&task_id) {
                    self.tasks.remove(index);
                }
            }
        }
    }
}
