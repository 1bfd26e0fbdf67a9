//! Timetable event model.
//!
//! # Responsibility
//! - Define the `ScheduleEvent` record bound to one weekday and hourly slot.
//! - Define the fixed grid axes: `Weekday::ALL` and `TimeSlot::ALL`.
//!
//! # Invariants
//! - `TimeSlot` only holds the nine hourly slots 9:00 through 17:00.
//! - Text forms `9:00` and `09:00` address the same slot; the canonical
//!   rendering has no leading zero.
//! - Several events may share one `(day, time)` cell.

use crate::model::{check_id, normalize_title, ValidationError};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::str::FromStr;
use uuid::Uuid;

/// Stable identifier for a timetable event.
pub type EventId = Uuid;

const FIRST_SLOT_HOUR: u8 = 9;
const LAST_SLOT_HOUR: u8 = 17;

static SLOT_TEXT_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(\d{1,2}):(\d{2})$").expect("valid time slot regex"));

/// School/work day a timetable event belongs to.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Weekday {
    #[default]
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
}

impl Weekday {
    /// Grid column order.
    pub const ALL: [Weekday; 5] = [
        Weekday::Monday,
        Weekday::Tuesday,
        Weekday::Wednesday,
        Weekday::Thursday,
        Weekday::Friday,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Self::Monday => "Monday",
            Self::Tuesday => "Tuesday",
            Self::Wednesday => "Wednesday",
            Self::Thursday => "Thursday",
            Self::Friday => "Friday",
        }
    }
}

impl Display for Weekday {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Error returned when text does not name a weekday of the timetable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseWeekdayError(pub String);

impl Display for ParseWeekdayError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "unknown weekday `{}`; expected Monday..Friday", self.0)
    }
}

impl Error for ParseWeekdayError {}

impl FromStr for Weekday {
    type Err = ParseWeekdayError;

    /// Accepts full names and three-letter abbreviations, case-insensitive.
    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "monday" | "mon" => Ok(Self::Monday),
            "tuesday" | "tue" => Ok(Self::Tuesday),
            "wednesday" | "wed" => Ok(Self::Wednesday),
            "thursday" | "thu" => Ok(Self::Thursday),
            "friday" | "fri" => Ok(Self::Friday),
            _ => Err(ParseWeekdayError(value.to_string())),
        }
    }
}

/// One hourly row of the timetable grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct TimeSlot(u8);

impl TimeSlot {
    /// Grid row order, 9:00 through 17:00.
    pub const ALL: [TimeSlot; 9] = [
        TimeSlot(9),
        TimeSlot(10),
        TimeSlot(11),
        TimeSlot(12),
        TimeSlot(13),
        TimeSlot(14),
        TimeSlot(15),
        TimeSlot(16),
        TimeSlot(17),
    ];

    /// Returns the slot starting at `hour`, if it is part of the grid.
    pub fn from_hour(hour: u8) -> Option<Self> {
        (FIRST_SLOT_HOUR..=LAST_SLOT_HOUR)
            .contains(&hour)
            .then_some(Self(hour))
    }

    pub fn hour(self) -> u8 {
        self.0
    }
}

impl Display for TimeSlot {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:00", self.0)
    }
}

/// Error returned when text cannot be mapped to a grid slot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseTimeSlotError {
    /// Input is blank after trimming.
    Empty,
    /// Input is not `H:MM` / `HH:MM`.
    Malformed(String),
    /// Well-formed time that is not one of the hourly grid slots.
    OffGrid(String),
}

impl Display for ParseTimeSlotError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Empty => write!(f, "time must not be blank"),
            Self::Malformed(value) => write!(f, "malformed time `{value}`; expected H:MM"),
            Self::OffGrid(value) => write!(
                f,
                "time `{value}` is not an hourly slot between {FIRST_SLOT_HOUR}:00 and {LAST_SLOT_HOUR}:00"
            ),
        }
    }
}

impl Error for ParseTimeSlotError {}

impl FromStr for TimeSlot {
    type Err = ParseTimeSlotError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(ParseTimeSlotError::Empty);
        }
        let captures = SLOT_TEXT_RE
            .captures(trimmed)
            .ok_or_else(|| ParseTimeSlotError::Malformed(trimmed.to_string()))?;

        // Both groups are 1-2 ASCII digits, so parsing into u8 cannot overflow.
        let hour: u8 = captures[1]
            .parse()
            .map_err(|_| ParseTimeSlotError::Malformed(trimmed.to_string()))?;
        let minute: u8 = captures[2]
            .parse()
            .map_err(|_| ParseTimeSlotError::Malformed(trimmed.to_string()))?;
        if hour > 23 || minute > 59 {
            return Err(ParseTimeSlotError::Malformed(trimmed.to_string()));
        }
        if minute != 0 {
            return Err(ParseTimeSlotError::OffGrid(trimmed.to_string()));
        }

        Self::from_hour(hour).ok_or_else(|| ParseTimeSlotError::OffGrid(trimmed.to_string()))
    }
}

impl TryFrom<String> for TimeSlot {
    type Error = ParseTimeSlotError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<TimeSlot> for String {
    fn from(value: TimeSlot) -> Self {
        value.to_string()
    }
}

/// One entry of the personal timetable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "ScheduleEventWire")]
pub struct ScheduleEvent {
    pub id: EventId,
    pub title: String,
    pub time: TimeSlot,
    pub day: Weekday,
}

impl ScheduleEvent {
    /// Creates an event with a freshly generated id.
    pub fn new(title: &str, time: TimeSlot, day: Weekday) -> Result<Self, ValidationError> {
        Self::with_id(Uuid::new_v4(), title, time, day)
    }

    /// Creates an event with a caller-provided id.
    pub fn with_id(
        id: EventId,
        title: &str,
        time: TimeSlot,
        day: Weekday,
    ) -> Result<Self, ValidationError> {
        check_id(id)?;
        Ok(Self {
            id,
            title: normalize_title(title)?,
            time,
            day,
        })
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        check_id(self.id)?;
        if self.title.trim().is_empty() {
            return Err(ValidationError::EmptyTitle);
        }
        Ok(())
    }

    /// Whether this event belongs in the grid cell `(day, time)`.
    pub fn occupies(&self, day: Weekday, time: TimeSlot) -> bool {
        self.day == day && self.time == time
    }
}

#[derive(Deserialize)]
struct ScheduleEventWire {
    id: EventId,
    title: String,
    time: TimeSlot,
    day: Weekday,
}

impl TryFrom<ScheduleEventWire> for ScheduleEvent {
    type Error = ValidationError;

    fn try_from(wire: ScheduleEventWire) -> Result<Self, Self::Error> {
        ScheduleEvent::with_id(wire.id, &wire.title, wire.time, wire.day)
    }
}
