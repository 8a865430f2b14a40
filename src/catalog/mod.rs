//! Ship system catalog.
//!
//! This module handles:
//! - The fixed set of ship systems that can be reported as damaged
//! - The repair code assigned to each system

pub mod types;

pub use types::{repair_code_for, SystemName, UNKNOWN_REPAIR_CODE};
