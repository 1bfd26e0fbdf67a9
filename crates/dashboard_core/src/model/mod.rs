//! Domain model for the to-do list and the weekly timetable.
//!
//! # Responsibility
//! - Define the records owned by the task and schedule stores.
//! - Own field-level validation shared by constructors, repositories and
//!   deserialization.
//!
//! # Invariants
//! - Every record is identified by a non-nil UUID that never changes.
//! - Titles are stored trimmed and are never empty.

pub mod event;
pub mod task;

use std::error::Error;
use std::fmt::{Display, Formatter};
use uuid::Uuid;

/// Field-level validation failure for `Task` and `ScheduleEvent`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    /// Identifier is the nil UUID.
    NilId,
    /// Title is blank after trimming.
    EmptyTitle,
}

impl Display for ValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NilId => write!(f, "id must not be nil"),
            Self::EmptyTitle => write!(f, "title must not be blank"),
        }
    }
}

impl Error for ValidationError {}

pub(crate) fn normalize_title(title: &str) -> Result<String, ValidationError> {
    let trimmed = title.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::EmptyTitle);
    }
    Ok(trimmed.to_string())
}

pub(crate) fn check_id(id: Uuid) -> Result<(), ValidationError> {
    if id.is_nil() {
        return Err(ValidationError::NilId);
    }
    Ok(())
}
