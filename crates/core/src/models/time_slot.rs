use serde::{Deserialize, Serialize};

use crate::errors::{TimetableError, TimetableResult};
use crate::time;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WeekDay {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
}

/// A recurring weekly interval: one weekday plus `HH:MM` start and end times.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeSlot {
    pub day: WeekDay,
    pub start_time: String,
    pub end_time: String,
}

impl TimeSlot {
    pub fn new(day: WeekDay, start_time: impl Into<String>, end_time: impl Into<String>) -> Self {
        Self {
            day,
            start_time: start_time.into(),
            end_time: end_time.into(),
        }
    }

    /// Parsed `(start, end)` pair in minutes since midnight.
    pub fn minutes(&self) -> TimetableResult<(u32, u32)> {
        Ok((
            time::to_minutes(&self.start_time)?,
            time::to_minutes(&self.end_time)?,
        ))
    }

    /// Checks that both times parse and that the interval is non-empty
    /// (`end > start`, compared in minutes).
    pub fn validate(&self) -> TimetableResult<()> {
        let (start, end) = self.minutes()?;
        if end <= start {
            return Err(TimetableError::Validation(format!(
                "end time {} is not after start time {}",
                self.end_time, self.start_time
            )));
        }
        Ok(())
    }

    /// True when both slots fall on the same weekday and their intervals
    /// strictly overlap. Slots that fail to parse never overlap anything.
    pub fn overlaps_with(&self, other: &TimeSlot) -> bool {
        if self.day != other.day {
            return false;
        }
        match (self.minutes(), other.minutes()) {
            (Ok((a_start, a_end)), Ok((b_start, b_end))) => {
                time::overlaps(a_start, a_end, b_start, b_end)
            }
            _ => false,
        }
    }
}
