//! Stores exposed to the presentation layer.
//!
//! # Responsibility
//! - Turn raw form input into validated repository writes.
//! - Keep callers decoupled from repository details.
//!
//! # Invariants
//! - The task and schedule stores never reference each other.
//! - Stores return typed errors; user-facing notice text lives with callers.

pub mod schedule;
pub mod task_list;
