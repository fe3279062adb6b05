//! Eligibility rule engine
//!
//! Decides whether a student may enroll in a course. The rules run in a
//! fixed order and the first failure wins, which determines the reason a
//! caller sees when several rules would fail at once:
//!
//! 1. Not already enrolled in the course
//! 2. Every prerequisite passed (first missing one is reported)
//! 3. Resulting credit total within the ceiling
//! 4. No schedule conflict with any active enrollment still being attended
//!    (an enrollment whose course was since passed frees its time slots,
//!    though its credits still count)
//!
//! This is pure logic with no I/O; nothing here mutates the student.

use thiserror::Error;

use crate::core::models::{Catalog, CourseId, Enrollment, Student};

/// Maximum credits a student may hold across active enrollments.
///
/// The check is strictly greater-than: a total of exactly this value is
/// allowed.
pub const CREDIT_LIMIT: u32 = 24;

/// Why an enrollment was refused
///
/// Rule violations are ordinary values, not failures; the display strings
/// are part of the observable contract.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Denial {
    /// The student already holds an active enrollment for this course
    #[error("You are already enrolled in this course.")]
    AlreadyEnrolled,

    /// A prerequisite has not been passed; carries the course code
    #[error("Missing prerequisite: {0}")]
    MissingPrerequisite(String),

    /// Enrolling would push the credit total past [`CREDIT_LIMIT`]
    #[error("Exceeds credit limit.")]
    CreditLimit,

    /// The course meets at the same time as an active enrollment
    #[error("Schedule conflict with another course.")]
    ScheduleConflict,
}

/// Run the eligibility rules for a candidate course.
///
/// Returns `Ok(())` if every rule passes, or the first [`Denial`]
/// encountered in rule order.
///
/// # Panics
///
/// Panics if `course` (or a handle reachable from it) was not issued by
/// `catalog`.
pub fn can_enroll(catalog: &Catalog, student: &Student, course: CourseId) -> Result<(), Denial> {
    let candidate = &catalog[course];
    log::debug!("{}: checking eligibility for {}", student.name(), candidate.code);

    if student.is_enrolled_in(course) {
        return Err(Denial::AlreadyEnrolled);
    }

    for &prereq in &candidate.prerequisites {
        if !student.has_passed(prereq) {
            return Err(Denial::MissingPrerequisite(catalog[prereq].code.clone()));
        }
    }

    let projected = student.total_credits(catalog) + candidate.credits;
    if projected > CREDIT_LIMIT {
        log::debug!("{}: projected credit total {projected} over limit", student.name());
        return Err(Denial::CreditLimit);
    }

    // Enrollments for courses the student has since passed no longer hold
    // their time slots, so they cannot block a new enrollment.
    let hypothetical = Enrollment::new(course);
    if student
        .enrollments()
        .iter()
        .filter(|e| !student.has_passed(e.course()))
        .any(|e| hypothetical.conflicts_with(e, catalog))
    {
        return Err(Denial::ScheduleConflict);
    }

    Ok(())
}
