//! Repository layer contracts and in-memory implementations.
//!
//! # Responsibility
//! - Define storage contracts the task and schedule stores depend on.
//! - Keep collection bookkeeping (ordering, id lookup) out of the stores.
//!
//! # Invariants
//! - Repository writes run record `validate()` before mutating.
//! - Reads return records in insertion order.
//! - A failed write leaves the collection unchanged.

pub mod event_repo;
pub mod task_repo;

use crate::model::ValidationError;
use std::error::Error;
use std::fmt::{Display, Formatter};
use uuid::Uuid;

pub type RepoResult<T> = Result<T, RepoError>;

/// Repository error shared by task and event storage.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RepoError {
    Validation(ValidationError),
    NotFound(Uuid),
    DuplicateId(Uuid),
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation(err) => write!(f, "{err}"),
            Self::NotFound(id) => write!(f, "record not found: {id}"),
            Self::DuplicateId(id) => write!(f, "record id already exists: {id}"),
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Validation(err) => Some(err),
            Self::NotFound(_) | Self::DuplicateId(_) => None,
        }
    }
}

impl From<ValidationError> for RepoError {
    fn from(value: ValidationError) -> Self {
        Self::Validation(value)
    }
}
