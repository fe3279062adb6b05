//! Business logic services
//!
//! Pure rule evaluation that operates on domain models. No I/O; callers
//! pass state in and get results back.
//!
//! - [`eligibility`] - The ordered rule chain deciding whether an
//!   enrollment may proceed

pub mod eligibility;

pub use eligibility::{CREDIT_LIMIT, Denial, can_enroll};
