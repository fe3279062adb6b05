//! Core domain logic for rollbook
//!
//! This module contains pure business logic with no I/O dependencies.
//!
//! ## Architecture
//!
//! - `models/` - Domain types (Catalog, Course, ScheduleSlot, Student, Enrollment)
//! - `services/` - The eligibility rule engine that operates on those models

pub mod models;
pub mod services;
