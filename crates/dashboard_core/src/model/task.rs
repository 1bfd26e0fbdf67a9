//! To-do task model.
//!
//! # Responsibility
//! - Define the `Task` record and its `Priority` scale.
//! - Provide the completion toggle, the only in-place mutation a task has.
//!
//! # Invariants
//! - `id` is stable and never reused for another task.
//! - `title` and `priority` are fixed at creation.
//! - `completed` starts as `false`.

use crate::model::{check_id, normalize_title, ValidationError};
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::str::FromStr;
use uuid::Uuid;

/// Stable identifier for a to-do task.
pub type TaskId = Uuid;

/// Task urgency chosen when the task is created.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Priority {
    Low,
    #[default]
    Medium,
    High,
}

impl Priority {
    /// All priorities, lowest first.
    pub const ALL: [Priority; 3] = [Priority::Low, Priority::Medium, Priority::High];

    /// Stable lowercase name, identical to the serialized form.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
        }
    }
}

impl Display for Priority {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when text does not name a known priority.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsePriorityError(pub String);

impl Display for ParsePriorityError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "unknown priority `{}`; expected low|medium|high", self.0)
    }
}

impl Error for ParsePriorityError {}

impl FromStr for Priority {
    type Err = ParsePriorityError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "low" => Ok(Self::Low),
            "medium" => Ok(Self::Medium),
            "high" => Ok(Self::High),
            _ => Err(ParsePriorityError(value.to_string())),
        }
    }
}

/// One entry of the to-do list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "TaskWire")]
pub struct Task {
    pub id: TaskId,
    pub title: String,
    pub completed: bool,
    pub priority: Priority,
}

impl Task {
    /// Creates a pending task with a freshly generated id.
    ///
    /// # Errors
    /// - `ValidationError::EmptyTitle` when `title` is blank after trimming.
    pub fn new(title: &str, priority: Priority) -> Result<Self, ValidationError> {
        Self::with_id(Uuid::new_v4(), title, priority)
    }

    /// Creates a pending task with a caller-provided id.
    ///
    /// Used by tests and import paths where identity already exists.
    pub fn with_id(id: TaskId, title: &str, priority: Priority) -> Result<Self, ValidationError> {
        check_id(id)?;
        Ok(Self {
            id,
            title: normalize_title(title)?,
            completed: false,
            priority,
        })
    }

    /// Re-checks record invariants, e.g. after fields were assigned directly.
    pub fn validate(&self) -> Result<(), ValidationError> {
        check_id(self.id)?;
        if self.title.trim().is_empty() {
            return Err(ValidationError::EmptyTitle);
        }
        Ok(())
    }

    /// Flips the completion flag. Calling it twice restores the original state.
    pub fn toggle(&mut self) {
        self.completed = !self.completed;
    }

    pub fn is_pending(&self) -> bool {
        !self.completed
    }
}

#[derive(Deserialize)]
struct TaskWire {
    id: TaskId,
    title: String,
    completed: bool,
    priority: Priority,
}

impl TryFrom<TaskWire> for Task {
    type Error = ValidationError;

    fn try_from(wire: TaskWire) -> Result<Self, Self::Error> {
        let mut task = Task::with_id(wire.id, &wire.title, wire.priority)?;
        task.completed = wire.completed;
        Ok(task)
    }
}
