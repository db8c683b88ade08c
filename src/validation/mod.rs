//! Validation functionality
//!
//! Provides validation logic for:
//! - Scalar constraints (length, pattern, numeric range, enum membership)
//! - Element counts against declared cardinality

pub mod constraints;

pub use constraints::{ConstraintResult, check_cardinality, check_scalar};
