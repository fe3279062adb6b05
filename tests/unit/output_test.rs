//! Tests for the Output module
//!
//! Output provides structured result types that can be rendered as either
//! human-readable text or machine-parseable JSON.

use rollbook::output::{CreditReport, EnrollmentReport, OutputMode};

#[test]
fn output_mode_default() {
    assert_eq!(OutputMode::default(), OutputMode::Human);
}

#[test]
fn success_report_human_line() {
    let report = EnrollmentReport::success("John Doe", "INF101 - Programming I (4 credits)");
    assert_eq!(
        report.human_line(),
        "✅ John Doe enrolled in: INF101 - Programming I (4 credits)"
    );
    assert!(report.enrolled);
    assert_eq!(report.message, "Enrollment valid.");
}

#[test]
fn denied_report_human_line() {
    let report = EnrollmentReport::denied(
        "John Doe",
        "MAT101 - Mathematics I (6 credits)",
        "Schedule conflict with another course.",
    );
    assert_eq!(
        report.human_line(),
        "❌ Could not enroll in MAT101 - Mathematics I (6 credits): Schedule conflict with another course."
    );
    assert!(!report.enrolled);
}

#[test]
fn enrollment_report_serialization() {
    let report = EnrollmentReport::denied("Ada", "INF201 - Programming II (4 credits)", "Missing prerequisite: INF101");
    let json = serde_json::to_string(&report).unwrap();
    assert!(json.contains("\"enrolled\":false"));
    assert!(json.contains("Missing prerequisite: INF101"));
    assert!(json.contains("\"student\":\"Ada\""));
}

#[test]
fn credit_report_serialization() {
    let report = CreditReport {
        student: "Ada".to_string(),
        total_credits: 10,
    };
    let json = serde_json::to_string(&report).unwrap();
    assert!(json.contains("\"total_credits\":10"));
}
