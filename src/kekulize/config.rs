use serde::{Deserialize, Serialize};

/// Default upper bound on the number of atoms in a kekulizable ring.
pub const DEFAULT_MAX_RING_SIZE: usize = 8;

/// Options for [`resolve_with`](super::resolve_with).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct KekulizeConfig {
    /// Rings with more atoms than this are left alone.
    pub max_ring_size: usize,
    /// Solve independent ring groups on the rayon thread pool.
    ///
    /// Results are identical to sequential solving; write-back always
    /// happens on the calling thread.
    pub parallel: bool,
}

impl Default for KekulizeConfig {
    fn default() -> Self {
        Self {
            max_ring_size: DEFAULT_MAX_RING_SIZE,
            parallel: false,
        }
    }
}
