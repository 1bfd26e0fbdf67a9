//! Task repository contract and in-memory implementation.

use crate::model::task::{Task, TaskId};
use crate::repo::{RepoError, RepoResult};

/// Storage contract for to-do tasks.
pub trait TaskRepository {
    /// Appends a new task. Rejects invalid records and duplicate ids.
    fn insert_task(&mut self, task: &Task) -> RepoResult<TaskId>;
    /// Overwrites the stored task with the same id, keeping its position.
    fn replace_task(&mut self, task: &Task) -> RepoResult<()>;
    fn get_task(&self, id: TaskId) -> RepoResult<Option<Task>>;
    /// All tasks in insertion order.
    fn list_tasks(&self) -> RepoResult<Vec<Task>>;
    /// Returns `false` when no task had this id.
    fn remove_task(&mut self, id: TaskId) -> RepoResult<bool>;
}

/// `Vec`-backed task storage. Position in the vector is display order.
#[derive(Debug, Default)]
pub struct InMemoryTaskRepository {
    tasks: Vec<Task>,
}

impl InMemoryTaskRepository {
    pub fn new() -> Self {
        Self::default()
    }

    fn position(&self, id: TaskId) -> Option<usize> {
        self.tasks.iter().position(|task| task.id == id)
    }
}

impl TaskRepository for InMemoryTaskRepository {
    fn insert_task(&mut self, task: &Task) -> RepoResult<TaskId> {
        task.validate()?;
        if self.position(task.id).is_some() {
            return Err(RepoError::DuplicateId(task.id));
        }
        self.tasks.push(task.clone());
        Ok(task.id)
    }

    fn replace_task(&mut self, task: &Task) -> RepoResult<()> {
        task.validate()?;
        let index = self
            .position(task.id)
            .ok_or(RepoError::NotFound(task.id))?;
        self.tasks[index] = task.clone();
        Ok(())
    }

    fn get_task(&self, id: TaskId) -> RepoResult<Option<Task>> {
        Ok(self.tasks.iter().find(|task| task.id == id).cloned())
    }

    fn list_tasks(&self) -> RepoResult<Vec<Task>> {
        Ok(self.tasks.clone())
    }

    fn remove_task(&mut self, id: TaskId) -> RepoResult<bool> {
        match self.position(id) {
            Some(index) => {
                self.tasks.remove(index);
                Ok(true)
            }
            None => Ok(false),
        }
    }
}
