//! Demo command - run the sample enrollment scenario
//!
//! Builds a three-course catalog, walks one student through a sequence of
//! enrollment attempts, and renders each outcome. The sequence is chosen
//! so every denial reason except the credit limit shows up: Programming II
//! requires Programming I, and Mathematics I clashes with Programming I
//! on Monday mornings until Programming I is passed.

use chrono::NaiveTime;

use rollbook::core::models::{Catalog, Course, CourseId, ScheduleSlot, Student, Weekday};
use rollbook::output::{CreditReport, EnrollmentReport, OutputMode};

fn clock(h: u32, m: u32) -> NaiveTime {
    NaiveTime::from_hms_opt(h, m, 0).expect("demo clock times are valid")
}

fn attempt(student: &mut Student, catalog: &Catalog, course: CourseId, mode: OutputMode) {
    let descriptor = catalog[course].to_string();
    let report = match student.enroll_in(catalog, course) {
        Ok(()) => EnrollmentReport::success(student.name(), descriptor),
        Err(denial) => EnrollmentReport::denied(student.name(), descriptor, denial.to_string()),
    };
    report.render(mode);
}

/// Run the sample enrollment scenario
pub fn demo(mode: OutputMode) -> anyhow::Result<()> {
    let mut catalog = Catalog::new();

    let prog1 = catalog.add(
        Course::new("INF101", "Programming I", 4, 1)
            .with_schedules(vec![ScheduleSlot::new(Weekday::Monday, clock(8, 0), clock(10, 0))]),
    );
    let prog2 = catalog.add(
        Course::new("INF201", "Programming II", 4, 2)
            .with_prerequisites(vec![prog1])
            .with_schedules(vec![ScheduleSlot::new(Weekday::Tuesday, clock(10, 0), clock(12, 0))]),
    );
    // Meets at the same time as Programming I
    let mat1 = catalog.add(
        Course::new("MAT101", "Mathematics I", 6, 1)
            .with_schedules(vec![ScheduleSlot::new(Weekday::Monday, clock(9, 30), clock(11, 30))]),
    );

    let mut student = Student::new("John Doe");

    attempt(&mut student, &catalog, prog1, mode); // succeeds
    attempt(&mut student, &catalog, prog2, mode); // missing prerequisite
    attempt(&mut student, &catalog, mat1, mode); // schedule conflict

    // Passing Programming I frees its Monday slot; the retry goes through.
    student.pass_course(prog1);
    attempt(&mut student, &catalog, mat1, mode);

    CreditReport {
        student: student.name().to_string(),
        total_credits: student.total_credits(&catalog),
    }
    .render(mode);

    Ok(())
}
