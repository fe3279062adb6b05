//! Tests for the eligibility rule engine through the public API

use rollbook::core::models::{Catalog, Course, Student, Weekday};
use rollbook::core::services::{CREDIT_LIMIT, Denial};

use super::common::{sample_catalog, slot};

#[test]
fn denial_messages_match_contract() {
    assert_eq!(Denial::AlreadyEnrolled.to_string(), "You are already enrolled in this course.");
    assert_eq!(
        Denial::MissingPrerequisite("INF101".to_string()).to_string(),
        "Missing prerequisite: INF101"
    );
    assert_eq!(Denial::CreditLimit.to_string(), "Exceeds credit limit.");
    assert_eq!(
        Denial::ScheduleConflict.to_string(),
        "Schedule conflict with another course."
    );
}

#[test]
fn can_enroll_in_does_not_mutate() {
    let sample = sample_catalog();
    let student = Student::new("Ada");
    assert!(student.can_enroll_in(&sample.catalog, sample.prog1).is_ok());
    assert!(student.enrollments().is_empty());
    assert_eq!(student.total_credits(&sample.catalog), 0);
}

#[test]
fn prerequisite_blocks_until_passed() {
    let sample = sample_catalog();
    let mut student = Student::new("Ada");
    assert_eq!(
        student.can_enroll_in(&sample.catalog, sample.prog2),
        Err(Denial::MissingPrerequisite("INF101".to_string()))
    );
    student.pass_course(sample.prog1);
    assert_eq!(student.can_enroll_in(&sample.catalog, sample.prog2), Ok(()));
}

#[test]
fn passed_course_frees_its_time_slots() {
    // MAT101 clashes with INF101's active enrollment until INF101 is
    // passed; the enrollment itself stays and keeps counting credits.
    let sample = sample_catalog();
    let mut student = Student::new("Ada");
    student.enroll_in(&sample.catalog, sample.prog1).unwrap();
    assert_eq!(
        student.can_enroll_in(&sample.catalog, sample.mat1),
        Err(Denial::ScheduleConflict)
    );

    student.pass_course(sample.prog1);
    assert_eq!(student.enroll_in(&sample.catalog, sample.mat1), Ok(()));
    assert!(student.is_enrolled_in(sample.prog1));
    assert_eq!(student.total_credits(&sample.catalog), 10);
}

#[test]
fn credit_total_never_exceeds_limit() {
    // Greedily enroll in a pile of conflict-free courses; whatever the
    // outcome of each attempt, the running total must stay at or below
    // the ceiling.
    let mut catalog = Catalog::new();
    let days = [
        Weekday::Monday,
        Weekday::Tuesday,
        Weekday::Wednesday,
        Weekday::Thursday,
        Weekday::Friday,
    ];
    let mut courses = Vec::new();
    for i in 0..8u32 {
        let day = days[(i % 5) as usize];
        let start = 8 + 2 * (i / 5);
        courses.push(catalog.add(
            Course::new(format!("GEN{i:03}"), format!("General Studies {i}"), 5, 1)
                .with_schedules(vec![slot(day, (start, 0), (start + 1, 0))]),
        ));
    }

    let mut student = Student::new("Ada");
    let mut successes = 0;
    for &course in &courses {
        if student.enroll_in(&catalog, course).is_ok() {
            successes += 1;
        }
        assert!(student.total_credits(&catalog) <= CREDIT_LIMIT);
    }
    // 5 credits each: exactly four fit under the ceiling of 24
    assert_eq!(successes, 4);
    assert_eq!(student.total_credits(&catalog), 20);
}

#[test]
fn rule_order_puts_prerequisites_before_credits() {
    // The candidate both lacks a prerequisite and would bust the credit
    // limit; the prerequisite must be the reported reason.
    let mut catalog = Catalog::new();
    let filler = catalog.add(Course::new("FIL01", "Filler", 22, 1));
    let base = catalog.add(Course::new("BAS01", "Base", 3, 1));
    let heavy = catalog.add(Course::new("HVY01", "Heavy", 6, 2).with_prerequisites(vec![base]));

    let mut student = Student::new("Ada");
    student.enroll_in(&catalog, filler).unwrap();
    assert_eq!(
        student.can_enroll_in(&catalog, heavy),
        Err(Denial::MissingPrerequisite("BAS01".to_string()))
    );

    // With the prerequisite passed, the credit rule takes over.
    student.pass_course(base);
    assert_eq!(student.can_enroll_in(&catalog, heavy), Err(Denial::CreditLimit));
}
