//! Core state for the task dashboard: the to-do list and the weekly timetable.
//! This crate owns every entity invariant; presentation layers only call in.

pub mod logging;
pub mod model;
pub mod repo;
pub mod service;

pub use logging::{default_log_level, init_logging, logging_status, LoggingError};
pub use model::event::{
    EventId, ParseTimeSlotError, ParseWeekdayError, ScheduleEvent, TimeSlot, Weekday,
};
pub use model::task::{ParsePriorityError, Priority, Task, TaskId};
pub use model::ValidationError;
pub use repo::event_repo::{EventRepository, InMemoryEventRepository};
pub use repo::task_repo::{InMemoryTaskRepository, TaskRepository};
pub use repo::{RepoError, RepoResult};
pub use service::schedule::{GridCell, GridRow, ScheduleError, ScheduleStore, WeekGrid};
pub use service::task_list::{TaskError, TaskListQuery, TaskListStore, TaskStats};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
