//! Student and enrollment models
//!
//! A [`Student`] accumulates state monotonically: approved courses and
//! active enrollments are appended and never removed. All mutation goes
//! through [`Student::enroll_in`] and [`Student::pass_course`] so a
//! student can never hold two enrollments for the same course handle.

use serde::{Deserialize, Serialize};

use super::{Catalog, CourseId};
use crate::core::services::eligibility::{self, Denial};

/// An active enrollment - the binding between a student and one course
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Enrollment {
    /// The course being taken
    course: CourseId,

    /// When this enrollment was created
    enrolled_at: String,
}

impl Enrollment {
    /// Create an enrollment for a course, stamped with the current time
    #[must_use]
    pub fn new(course: CourseId) -> Self {
        Self {
            course,
            enrolled_at: chrono::Utc::now().to_rfc3339(),
        }
    }

    /// The course this enrollment is for
    #[must_use]
    pub const fn course(&self) -> CourseId {
        self.course
    }

    /// When this enrollment was created (RFC 3339)
    #[must_use]
    pub fn enrolled_at(&self) -> &str {
        &self.enrolled_at
    }

    /// Check whether this enrollment's course meets at the same time as
    /// another enrollment's course.
    ///
    /// Every slot of one course is checked against every slot of the
    /// other, stopping at the first clash. A course with no schedule
    /// slots conflicts with nothing.
    ///
    /// # Panics
    ///
    /// Panics if either enrollment's course handle was not issued by
    /// `catalog`.
    #[must_use]
    pub fn conflicts_with(&self, other: &Self, catalog: &Catalog) -> bool {
        let mine = &catalog[self.course].schedules;
        let theirs = &catalog[other.course].schedules;
        mine.iter().any(|s1| theirs.iter().any(|s2| s1.overlaps_with(s2)))
    }
}

/// A student's enrollment state
///
/// Owns the approved-course history and the active enrollment list.
/// Courses live in a shared [`Catalog`] passed into each operation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Student {
    /// Display name
    name: String,

    /// Courses the student has passed, in the order they were passed
    approved_courses: Vec<CourseId>,

    /// Active enrollments, in the order they were made
    enrollments: Vec<Enrollment>,
}

impl Student {
    /// Create a student with no history
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            approved_courses: Vec::new(),
            enrollments: Vec::new(),
        }
    }

    /// The student's name
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Active enrollments, oldest first
    #[must_use]
    pub fn enrollments(&self) -> &[Enrollment] {
        &self.enrollments
    }

    /// Courses the student has passed
    #[must_use]
    pub fn approved_courses(&self) -> &[CourseId] {
        &self.approved_courses
    }

    /// Whether the student has passed a course
    #[must_use]
    pub fn has_passed(&self, course: CourseId) -> bool {
        self.approved_courses.contains(&course)
    }

    /// Whether the student is actively enrolled in a course
    #[must_use]
    pub fn is_enrolled_in(&self, course: CourseId) -> bool {
        self.enrollments.iter().any(|e| e.course() == course)
    }

    /// Sum of credits across all active enrollments
    ///
    /// # Panics
    ///
    /// Panics if an enrolled course handle was not issued by `catalog`.
    #[must_use]
    pub fn total_credits(&self, catalog: &Catalog) -> u32 {
        self.enrollments.iter().map(|e| catalog[e.course()].credits).sum()
    }

    /// Check whether the student may enroll in a course, without enrolling.
    ///
    /// Runs the eligibility rules in order and reports the first one that
    /// fails; see [`eligibility::can_enroll`].
    pub fn can_enroll_in(&self, catalog: &Catalog, course: CourseId) -> Result<(), Denial> {
        eligibility::can_enroll(catalog, self, course)
    }

    /// Enroll in a course if the eligibility rules allow it.
    ///
    /// On success the enrollment is appended to the active list; on denial
    /// nothing changes. Rendering the outcome is the caller's job.
    pub fn enroll_in(&mut self, catalog: &Catalog, course: CourseId) -> Result<(), Denial> {
        self.can_enroll_in(catalog, course)?;
        self.enrollments.push(Enrollment::new(course));
        Ok(())
    }

    /// Record a course as passed.
    ///
    /// Idempotent. Does not require a prior enrollment and does not
    /// remove any active enrollment for the course.
    pub fn pass_course(&mut self, course: CourseId) {
        if !self.has_passed(course) {
            self.approved_courses.push(course);
        }
    }
}
