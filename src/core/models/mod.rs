//! Domain models for rollbook
//!
//! Pure data structures with no I/O dependencies.
//!
//! - [`Catalog`] - Arena of immutable course records, addressed by handle
//! - [`Course`] - A catalog entry: credits, semester, prerequisites, schedule
//! - [`ScheduleSlot`] - A weekly recurring time window on one weekday
//! - [`Student`] - Approved-course history plus active enrollments
//! - [`Enrollment`] - The binding between a student and one active course

mod course;
mod schedule;
mod student;

pub use course::{Catalog, Course, CourseId};
pub use schedule::{ScheduleSlot, Weekday, intervals_overlap};
pub use student::{Enrollment, Student};
