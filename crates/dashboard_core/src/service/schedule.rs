//! Personal timetable store.
//!
//! # Responsibility
//! - Validate and record timetable events.
//! - Answer per-cell lookups and build the weekly grid view.
//!
//! # Invariants
//! - Title is checked before time; the first failing field is reported.
//! - A missing day falls back to `Weekday::Monday`.
//! - Cell lookups return events in insertion order; empty cells yield an
//!   empty list, not an error.

use crate::model::event::{EventId, ParseTimeSlotError, ScheduleEvent, TimeSlot, Weekday};
use crate::model::ValidationError;
use crate::repo::event_repo::{EventRepository, InMemoryEventRepository};
use crate::repo::RepoError;
use log::{debug, info};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Errors from timetable operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScheduleError {
    /// Title is blank after trimming.
    EmptyTitle,
    /// No time slot was given.
    EmptyTime,
    /// Time text is not one of the hourly grid slots.
    InvalidTime(String),
    /// Repository-level failure.
    Repo(RepoError),
}

impl Display for ScheduleError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyTitle => write!(f, "event title must not be blank"),
            Self::EmptyTime => write!(f, "event time must not be blank"),
            Self::InvalidTime(value) => write!(f, "invalid event time `{value}`"),
            Self::Repo(err) => write!(f, "{err}"),
        }
    }
}

impl Error for ScheduleError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Repo(err) => Some(err),
            _ => None,
        }
    }
}

impl From<RepoError> for ScheduleError {
    fn from(value: RepoError) -> Self {
        match value {
            RepoError::Validation(ValidationError::EmptyTitle) => Self::EmptyTitle,
            other => Self::Repo(other),
        }
    }
}

impl From<ValidationError> for ScheduleError {
    fn from(value: ValidationError) -> Self {
        Self::from(RepoError::Validation(value))
    }
}

impl From<ParseTimeSlotError> for ScheduleError {
    fn from(value: ParseTimeSlotError) -> Self {
        match value {
            ParseTimeSlotError::Empty => Self::EmptyTime,
            ParseTimeSlotError::Malformed(raw) | ParseTimeSlotError::OffGrid(raw) => {
                Self::InvalidTime(raw)
            }
        }
    }
}

/// One cell of the weekly grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GridCell {
    pub day: Weekday,
    pub events: Vec<ScheduleEvent>,
}

/// One hourly row of the weekly grid, Monday through Friday.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GridRow {
    pub time: TimeSlot,
    pub cells: Vec<GridCell>,
}

/// Fixed `TimeSlot::ALL` x `Weekday::ALL` view of the timetable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WeekGrid {
    pub rows: Vec<GridRow>,
}

impl WeekGrid {
    fn build(events: &[ScheduleEvent]) -> Self {
        let rows = TimeSlot::ALL
            .iter()
            .map(|&time| GridRow {
                time,
                cells: Weekday::ALL
                    .iter()
                    .map(|&day| GridCell {
                        day,
                        events: events_in_cell(events, day, time),
                    })
                    .collect(),
            })
            .collect();
        Self { rows }
    }

    pub fn cell(&self, day: Weekday, time: TimeSlot) -> Option<&GridCell> {
        self.rows
            .iter()
            .find(|row| row.time == time)
            .and_then(|row| row.cells.iter().find(|cell| cell.day == day))
    }

    /// Number of events placed across all cells.
    pub fn event_count(&self) -> usize {
        self.rows
            .iter()
            .flat_map(|row| row.cells.iter())
            .map(|cell| cell.events.len())
            .sum()
    }
}

fn events_in_cell(events: &[ScheduleEvent], day: Weekday, time: TimeSlot) -> Vec<ScheduleEvent> {
    events
        .iter()
        .filter(|event| event.occupies(day, time))
        .cloned()
        .collect()
}

/// Owner of the timetable event collection.
pub struct ScheduleStore<R: EventRepository = InMemoryEventRepository> {
    repo: R,
}

impl ScheduleStore<InMemoryEventRepository> {
    /// Creates an empty store backed by process memory.
    pub fn in_memory() -> Self {
        Self::new(InMemoryEventRepository::new())
    }
}

impl Default for ScheduleStore<InMemoryEventRepository> {
    fn default() -> Self {
        Self::in_memory()
    }
}

impl<R: EventRepository> ScheduleStore<R> {
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Validates form input and appends a new event.
    ///
    /// `time` accepts `H:MM` or `HH:MM` on the hour between 9:00 and 17:00.
    ///
    /// # Errors
    /// - `ScheduleError::EmptyTitle` when `title` is blank.
    /// - `ScheduleError::EmptyTime` when `time` is blank.
    /// - `ScheduleError::InvalidTime` when `time` is not a grid slot.
    pub fn add(
        &mut self,
        title: &str,
        time: &str,
        day: Option<Weekday>,
    ) -> Result<ScheduleEvent, ScheduleError> {
        if title.trim().is_empty() {
            return Err(ScheduleError::EmptyTitle);
        }
        let slot: TimeSlot = time.parse()?;
        self.add_at(title, slot, day.unwrap_or_default())
    }

    /// Typed variant of `add` for callers that already hold a `TimeSlot`.
    pub fn add_at(
        &mut self,
        title: &str,
        time: TimeSlot,
        day: Weekday,
    ) -> Result<ScheduleEvent, ScheduleError> {
        let event = ScheduleEvent::new(title, time, day)?;
        self.repo.insert_event(&event)?;
        info!(
            "event=schedule_add module=schedule status=ok id={} day={} time={}",
            event.id, event.day, event.time
        );
        Ok(event)
    }

    /// Events in the `(day, time)` cell, insertion order.
    pub fn events_at(
        &self,
        day: Weekday,
        time: TimeSlot,
    ) -> Result<Vec<ScheduleEvent>, ScheduleError> {
        Ok(events_in_cell(&self.repo.list_events()?, day, time))
    }

    /// Every event in insertion order.
    pub fn list(&self) -> Result<Vec<ScheduleEvent>, ScheduleError> {
        Ok(self.repo.list_events()?)
    }

    pub fn get(&self, id: EventId) -> Result<Option<ScheduleEvent>, ScheduleError> {
        Ok(self.repo.get_event(id)?)
    }

    /// Removes one event. Returns `false` when the id was not present.
    pub fn delete(&mut self, id: EventId) -> Result<bool, ScheduleError> {
        let removed = self.repo.remove_event(id)?;
        debug!("event=schedule_delete module=schedule status=ok id={id} removed={removed}");
        Ok(removed)
    }

    /// Builds the full weekly grid from a single snapshot of the collection.
    pub fn week_grid(&self) -> Result<WeekGrid, ScheduleError> {
        Ok(WeekGrid::build(&self.repo.list_events()?))
    }
}
