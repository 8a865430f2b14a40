//! Random damaged-system selection.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tokio::sync::Mutex;
use tracing::{debug, instrument};
use utoipa::ToSchema;

use crate::catalog::SystemName;
use crate::metrics;

use super::random::{RandomSource, SeededRandom, ThreadRandom};
use super::state::LastDamagedSystem;

/// Result of a status pick.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct DamagedStatus {
    /// The system now reported as damaged.
    pub damaged_system: SystemName,
}

/// Picks a damaged system and records it as the last known state.
#[derive(Debug, Clone)]
pub struct StatusPicker {
    source: Arc<Mutex<Box<dyn RandomSource>>>,
    last: LastDamagedSystem,
}

impl StatusPicker {
    /// Create a picker backed by `source` writing into `last`.
    pub fn new(source: impl RandomSource + 'static, last: LastDamagedSystem) -> Self {
        Self {
            source: Arc::new(Mutex::new(Box::new(source))),
            last,
        }
    }

    /// Thread-random picker, or a seeded one when `seed` is given.
    pub fn from_seed(seed: Option<u64>, last: LastDamagedSystem) -> Self {
        match seed {
            Some(seed) => Self::new(SeededRandom::new(seed), last),
            None => Self::new(ThreadRandom, last),
        }
    }

    /// Handle to the state this picker writes.
    pub fn last_damaged(&self) -> &LastDamagedSystem {
        &self.last
    }

    /// Choose a system uniformly, store it, and return it.
    #[instrument(skip(self))]
    pub async fn pick(&self) -> DamagedStatus {
        let index = {
            let mut source = self.source.lock().await;
            source.pick_index(SystemName::ALL.len())
        };
        // Guard against sources that ignore the range contract.
        let system = SystemName::ALL[index % SystemName::ALL.len()];

        self.last.set(system).await;
        metrics::inc_status_picks(system);
        debug!(%system, "Damaged system selected");

        DamagedStatus {
            damaged_system: system,
        }
    }
}
