//! rollbook - model student course enrollment with eligibility checking
//!
//! This library provides an in-memory model of a course catalog and a
//! student's enrollment state, plus the eligibility rules that decide
//! whether an enrollment may proceed: prerequisite checks, a credit-limit
//! ceiling, and weekly schedule-conflict detection.

// Deny all clippy warnings in this crate
#![deny(
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    missing_docs,
    missing_debug_implementations,
    missing_copy_implementations,
    trivial_casts,
    trivial_numeric_casts,
    unsafe_code,
    unused_import_braces,
    unused_qualifications
)]
// Allow some pedantic lints that are too noisy or not applicable
#![allow(
    clippy::module_name_repetitions,
    clippy::missing_errors_doc,
    clippy::cargo_common_metadata
)]

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod core;
pub mod output;
