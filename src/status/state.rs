//! Last damaged system memory.

use std::sync::Arc;

use tokio::sync::RwLock;

use crate::catalog::SystemName;

/// Process-wide memory of the most recently reported damaged system.
///
/// Clones share the same cell. Writers do not coordinate with each other:
/// concurrent [`set`](Self::set) calls are serialized by the lock but their
/// order is unspecified, so the last writer wins. A reader sees either the
/// initial unset value or some earlier write.
#[derive(Debug, Clone, Default)]
pub struct LastDamagedSystem {
    inner: Arc<RwLock<Option<SystemName>>>,
}

impl LastDamagedSystem {
    /// Create an unset cell.
    pub fn new() -> Self {
        Self::default()
    }

    /// Read the current value.
    pub async fn get(&self) -> Option<SystemName> {
        *self.inner.read().await
    }

    /// Overwrite the current value.
    pub async fn set(&self, system: SystemName) {
        *self.inner.write().await = Some(system);
    }

    /// Whether a system has been recorded.
    pub async fn is_set(&self) -> bool {
        self.inner.read().await.is_some()
    }
}
