//! Repair bay page rendering.

pub mod renderer;

pub use renderer::{render_repair_page, RepairPage};
