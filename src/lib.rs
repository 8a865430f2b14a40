//! Starship repair bay service.
//!
//! A small HTTP service that reports a randomly damaged ship system, renders
//! the repair page for the last reported system, and looks up saturated
//! liquid/vapor specific volumes for a given pressure.
//!
//! # Phase-change lookup
//!
//! Volumes follow a straight line between a low-pressure anchor and the
//! critical point, and collapse to the critical volume at or above it:
//!
//! ```text
//! P (MPa)   v_liquid   v_vapor  (m³/kg)
//! 0.05      0.00105    30.0
//! 10.0      0.0035     0.0035
//! ```
//!
//! # Modules
//!
//! - [`catalog`]: Ship systems and repair codes
//! - [`status`]: Random damaged-system selection and last-known state
//! - [`repair`]: Repair bay HTML rendering
//! - [`phase`]: Specific volume interpolation
//! - [`api`]: HTTP routes and handlers
//! - [`config`]: Configuration loading from environment
//! - [`error`]: Unified error types
//! - [`metrics`]: Prometheus metrics
//! - [`utils`]: Utility functions

pub mod api;
pub mod catalog;
pub mod config;
pub mod error;
pub mod metrics;
pub mod phase;
pub mod repair;
pub mod status;
pub mod utils;

pub use config::Config;
pub use error::{Result, ServiceError};
