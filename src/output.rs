//! Output formatting for human and JSON modes
//!
//! This module provides structured result types that can be rendered
//! either as human-readable text or machine-parseable JSON. The core
//! never prints; commands build these reports from rule results and let
//! the selected mode decide the rendering.

use serde::Serialize;

/// Output mode for the CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Human-readable output (default)
    #[default]
    Human,
    /// JSON output (machine-readable)
    Json,
}

/// Outcome of one enrollment attempt
#[derive(Debug, Clone, Serialize)]
pub struct EnrollmentReport {
    /// The student's name
    pub student: String,
    /// Rendered course descriptor, e.g. "INF101 - Programming I (4 credits)"
    pub course: String,
    /// Whether the enrollment went through
    pub enrolled: bool,
    /// Why; the denial reason, or "Enrollment valid." on success
    pub message: String,
}

impl EnrollmentReport {
    /// Build a report for a successful enrollment
    #[must_use]
    pub fn success(student: impl Into<String>, course: impl Into<String>) -> Self {
        Self {
            student: student.into(),
            course: course.into(),
            enrolled: true,
            message: "Enrollment valid.".to_string(),
        }
    }

    /// Build a report for a denied enrollment
    #[must_use]
    pub fn denied(
        student: impl Into<String>,
        course: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        Self {
            student: student.into(),
            course: course.into(),
            enrolled: false,
            message: reason.into(),
        }
    }

    /// The single human-readable line for this outcome
    #[must_use]
    pub fn human_line(&self) -> String {
        if self.enrolled {
            format!("✅ {} enrolled in: {}", self.student, self.course)
        } else {
            format!("❌ Could not enroll in {}: {}", self.course, self.message)
        }
    }

    /// Render the report based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => println!("{}", self.human_line()),
            OutputMode::Json => {
                println!("{}", serde_json::to_string_pretty(self).unwrap_or_default());
            },
        }
    }
}

/// A student's active credit total
#[derive(Debug, Clone, Serialize)]
pub struct CreditReport {
    /// The student's name
    pub student: String,
    /// Sum of credits across active enrollments
    pub total_credits: u32,
}

impl CreditReport {
    /// Render the report based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => {
                println!("Total credits for {}: {}", self.student, self.total_credits);
            },
            OutputMode::Json => {
                println!("{}", serde_json::to_string_pretty(self).unwrap_or_default());
            },
        }
    }
}
