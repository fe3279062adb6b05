//! Weekly schedule slots and time-interval overlap
//!
//! A [`ScheduleSlot`] is a single recurring window on one weekday, e.g.
//! "Monday from 08:00 to 10:00". Overlap between two slots is only possible
//! when their weekdays match; the time comparison treats ranges as
//! half-open, so back-to-back slots are legal.

use chrono::NaiveTime;
use serde::{Deserialize, Serialize};

/// Day of the week a schedule slot falls on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Weekday {
    /// Monday
    Monday,
    /// Tuesday
    Tuesday,
    /// Wednesday
    Wednesday,
    /// Thursday
    Thursday,
    /// Friday
    Friday,
    /// Saturday
    Saturday,
    /// Sunday
    Sunday,
}

impl std::fmt::Display for Weekday {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::Monday => "Monday",
            Self::Tuesday => "Tuesday",
            Self::Wednesday => "Wednesday",
            Self::Thursday => "Thursday",
            Self::Friday => "Friday",
            Self::Saturday => "Saturday",
            Self::Sunday => "Sunday",
        };
        write!(f, "{name}")
    }
}

impl std::str::FromStr for Weekday {
    type Err = String;

    // Day labels match case-sensitively; "monday" is not a weekday.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Monday" => Ok(Self::Monday),
            "Tuesday" => Ok(Self::Tuesday),
            "Wednesday" => Ok(Self::Wednesday),
            "Thursday" => Ok(Self::Thursday),
            "Friday" => Ok(Self::Friday),
            "Saturday" => Ok(Self::Saturday),
            "Sunday" => Ok(Self::Sunday),
            _ => Err(format!("Invalid weekday: {s}. Use: Monday..Sunday")),
        }
    }
}

/// Check whether two clock-time ranges overlap.
///
/// Ranges are treated as half-open: a range ending exactly when the other
/// starts does not overlap it, so adjacent slots can sit back to back.
/// A zero-length range (`start == end`) never overlaps itself or anything
/// at its boundary, though the formula still reports it as overlapping a
/// range it sits strictly inside.
#[must_use]
pub fn intervals_overlap(
    a_start: NaiveTime,
    a_end: NaiveTime,
    b_start: NaiveTime,
    b_end: NaiveTime,
) -> bool {
    !(a_end <= b_start || a_start >= b_end)
}

/// A weekly recurring time window on one weekday
///
/// `start < end` is the caller's responsibility; the type does not reject
/// inverted or zero-length windows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleSlot {
    /// Day of the week this slot recurs on
    pub day: Weekday,
    /// Start of the window (inclusive)
    pub start: NaiveTime,
    /// End of the window (exclusive)
    pub end: NaiveTime,
}

impl ScheduleSlot {
    /// Create a new schedule slot
    #[must_use]
    pub const fn new(day: Weekday, start: NaiveTime, end: NaiveTime) -> Self {
        Self { day, start, end }
    }

    /// Check whether this slot overlaps another.
    ///
    /// Slots on different weekdays never overlap. Symmetric:
    /// `a.overlaps_with(&b) == b.overlaps_with(&a)`.
    #[must_use]
    pub fn overlaps_with(&self, other: &Self) -> bool {
        if self.day != other.day {
            return false;
        }
        intervals_overlap(self.start, self.end, other.start, other.end)
    }
}

impl std::fmt::Display for ScheduleSlot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} from {} to {}",
            self.day,
            self.start.format("%H:%M"),
            self.end.format("%H:%M")
        )
    }
}
