//! To-do list store.
//!
//! # Responsibility
//! - Provide add/toggle/delete/list entry points for the to-do page.
//! - Derive the completion counters shown on dashboard stat cards.
//!
//! # Invariants
//! - A blank title never creates a task.
//! - `toggle` changes only `completed`; order and other fields stay put.
//! - `delete` of an unknown id is a no-op, never an error.
//! - Failed calls leave the collection unchanged.

use crate::model::task::{Priority, Task, TaskId};
use crate::model::ValidationError;
use crate::repo::task_repo::{InMemoryTaskRepository, TaskRepository};
use crate::repo::RepoError;
use log::{debug, info};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Errors from to-do list operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TaskError {
    /// Title is blank after trimming.
    EmptyTitle,
    /// No task has this id.
    NotFound(TaskId),
    /// Repository-level failure.
    Repo(RepoError),
}

impl TaskError {
    /// Lets callers that prefer silent no-op semantics ignore stale ids.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound(_))
    }
}

impl Display for TaskError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyTitle => write!(f, "task title must not be blank"),
            Self::NotFound(id) => write!(f, "task not found: {id}"),
            Self::Repo(err) => write!(f, "{err}"),
        }
    }
}

impl Error for TaskError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Repo(err) => Some(err),
            _ => None,
        }
    }
}

impl From<RepoError> for TaskError {
    fn from(value: RepoError) -> Self {
        match value {
            RepoError::NotFound(id) => Self::NotFound(id),
            RepoError::Validation(ValidationError::EmptyTitle) => Self::EmptyTitle,
            other => Self::Repo(other),
        }
    }
}

impl From<ValidationError> for TaskError {
    fn from(value: ValidationError) -> Self {
        Self::from(RepoError::Validation(value))
    }
}

/// Optional filters for `TaskListStore::list_filtered`.
///
/// Unset fields match every task.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TaskListQuery {
    pub completed: Option<bool>,
    pub priority: Option<Priority>,
}

impl TaskListQuery {
    pub fn pending() -> Self {
        Self {
            completed: Some(false),
            ..Self::default()
        }
    }

    pub fn completed() -> Self {
        Self {
            completed: Some(true),
            ..Self::default()
        }
    }

    pub fn matches(&self, task: &Task) -> bool {
        self.completed.map_or(true, |done| task.completed == done)
            && self.priority.map_or(true, |priority| task.priority == priority)
    }
}

/// Completion counters for the dashboard stat cards.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TaskStats {
    pub total: usize,
    pub completed: usize,
    pub pending: usize,
    /// `completed * 100 / total`, rounded down; 0 for an empty list.
    pub completion_percent: u8,
}

impl TaskStats {
    fn from_tasks(tasks: &[Task]) -> Self {
        let total = tasks.len();
        let completed = tasks.iter().filter(|task| task.completed).count();
        let completion_percent = if total == 0 {
            0
        } else {
            // completed <= total, so the quotient is at most 100.
            (completed * 100 / total) as u8
        };
        Self {
            total,
            completed,
            pending: total - completed,
            completion_percent,
        }
    }
}

/// Owner of the to-do collection.
pub struct TaskListStore<R: TaskRepository = InMemoryTaskRepository> {
    repo: R,
}

impl TaskListStore<InMemoryTaskRepository> {
    /// Creates an empty store backed by process memory.
    pub fn in_memory() -> Self {
        Self::new(InMemoryTaskRepository::new())
    }
}

impl Default for TaskListStore<InMemoryTaskRepository> {
    fn default() -> Self {
        Self::in_memory()
    }
}

impl<R: TaskRepository> TaskListStore<R> {
    /// Creates a store over the provided repository implementation.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Validates `title` and appends a new pending task.
    ///
    /// # Errors
    /// - `TaskError::EmptyTitle` when `title` is blank after trimming.
    pub fn add(&mut self, title: &str, priority: Priority) -> Result<Task, TaskError> {
        let task = Task::new(title, priority)?;
        self.repo.insert_task(&task)?;
        info!(
            "event=task_add module=task_list status=ok id={} priority={}",
            task.id, task.priority
        );
        Ok(task)
    }

    /// Flips `completed` on one task and returns the updated record.
    ///
    /// # Errors
    /// - `TaskError::NotFound` when no task has `id`; nothing changes.
    pub fn toggle(&mut self, id: TaskId) -> Result<Task, TaskError> {
        let mut task = self.repo.get_task(id)?.ok_or(TaskError::NotFound(id))?;
        task.toggle();
        self.repo.replace_task(&task)?;
        debug!(
            "event=task_toggle module=task_list status=ok id={} completed={}",
            task.id, task.completed
        );
        Ok(task)
    }

    /// Removes one task. Returns `false` when the id was not present.
    pub fn delete(&mut self, id: TaskId) -> Result<bool, TaskError> {
        let removed = self.repo.remove_task(id)?;
        debug!("event=task_delete module=task_list status=ok id={id} removed={removed}");
        Ok(removed)
    }

    pub fn get(&self, id: TaskId) -> Result<Option<Task>, TaskError> {
        Ok(self.repo.get_task(id)?)
    }

    /// Returns every task in insertion order, unfiltered.
    pub fn list(&self) -> Result<Vec<Task>, TaskError> {
        Ok(self.repo.list_tasks()?)
    }

    /// Returns tasks matching `query`, insertion order kept.
    pub fn list_filtered(&self, query: &TaskListQuery) -> Result<Vec<Task>, TaskError> {
        let mut tasks = self.repo.list_tasks()?;
        tasks.retain(|task| query.matches(task));
        Ok(tasks)
    }

    pub fn stats(&self) -> Result<TaskStats, TaskError> {
        Ok(TaskStats::from_tasks(&self.repo.list_tasks()?))
    }
}

#[cfg(test)]
mod tests {
    use super::{TaskListQuery, TaskStats};
    use crate::model::task::{Priority, Task};

    #[test]
    fn query_default_matches_everything() {
        let mut task = Task::new("any", Priority::Low).unwrap();
        assert!(TaskListQuery::default().matches(&task));
        task.toggle();
        assert!(TaskListQuery::default().matches(&task));
    }

    #[test]
    fn query_combines_completion_and_priority() {
        let query = TaskListQuery {
            completed: Some(false),
            priority: Some(Priority::High),
        };
        let high = Task::new("urgent", Priority::High).unwrap();
        let low = Task::new("later", Priority::Low).unwrap();
        let mut done = Task::new("shipped", Priority::High).unwrap();
        done.toggle();

        assert!(query.matches(&high));
        assert!(!query.matches(&low));
        assert!(!query.matches(&done));
    }

    #[test]
    fn stats_for_empty_list_are_zero() {
        assert_eq!(TaskStats::from_tasks(&[]), TaskStats::default());
    }

    #[test]
    fn stats_round_percentage_down() {
        let mut tasks = vec![
            Task::new("a", Priority::Low).unwrap(),
            Task::new("b", Priority::Low).unwrap(),
            Task::new("c", Priority::Low).unwrap(),
        ];
        tasks[0].toggle();
        tasks[1].toggle();

        let stats = TaskStats::from_tasks(&tasks);
        assert_eq!(stats.total, 3);
        assert_eq!(stats.completed, 2);
        assert_eq!(stats.pending, 1);
        assert_eq!(stats.completion_percent, 66);
    }
}
