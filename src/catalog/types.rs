//! Ship system names and their repair codes.

use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumCount, EnumIter, EnumString};
use utoipa::ToSchema;

/// Repair code reported for a name that is not in the catalog.
pub const UNKNOWN_REPAIR_CODE: &str = "UNKNOWN";

/// A ship system that can be reported as damaged.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    AsRefStr,
    EnumIter,
    EnumCount,
    ToSchema,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum SystemName {
    /// Navigation computer.
    Navigation,
    /// Comms array.
    Communications,
    /// Life support.
    LifeSupport,
    /// Main engines.
    Engines,
    /// Deflector shield.
    DeflectorShield,
}

impl SystemName {
    /// Every catalog entry, in declaration order.
    pub const ALL: [SystemName; 5] = [
        SystemName::Navigation,
        SystemName::Communications,
        SystemName::LifeSupport,
        SystemName::Engines,
        SystemName::DeflectorShield,
    ];

    /// Repair code for this system.
    pub fn repair_code(&self) -> &'static str {
        match self {
            SystemName::Navigation => "NAV-01",
            SystemName::Communications => "COM-02",
            SystemName::LifeSupport => "LIFE-03",
            SystemName::Engines => "ENG-04",
            SystemName::DeflectorShield => "SHLD-05",
        }
    }
}

/// Look up a repair code by wire name, falling back to [`UNKNOWN_REPAIR_CODE`].
pub fn repair_code_for(name: &str) -> &'static str {
    name.parse::<SystemName>()
        .map(|system| system.repair_code())
        .unwrap_or(UNKNOWN_REPAIR_CODE)
}
