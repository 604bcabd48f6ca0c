use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::rings::RingPerceptionError;

/// Why a ring group could not be kekulized.
///
/// Group errors are isolated: the other groups of the molecule are still
/// resolved and written back.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
pub enum GroupError {
    /// The atom's exocyclic bonds and hydrogens already exceed its valence.
    #[error("atom {atom}: free valence {free_valence} is negative")]
    InconsistentValence { atom: usize, free_valence: i16 },
    /// The valence table has no entry for the atom's element and charge.
    #[error("atom {atom}: no valence known for atomic number {atomic_num} with charge {formal_charge}")]
    UnknownValence {
        atom: usize,
        atomic_num: u8,
        formal_charge: i8,
    },
    /// Propagation reached a state no single/double assignment can satisfy.
    #[error("atom {atom}: ring bond orders cannot satisfy its valence")]
    UnsolvableConstraint { atom: usize },
}

/// A ring group left untouched, with the atoms and bonds it covers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FailedGroupReport {
    pub atoms: Vec<usize>,
    pub bonds: Vec<usize>,
    pub error: GroupError,
}

impl fmt::Display for FailedGroupReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ring group with atoms [")?;
        for (i, idx) in self.atoms.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", idx)?;
        }
        write!(f, "] not kekulized: {}", self.error)
    }
}

/// Failure that aborts the whole resolution call.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum KekulizeError {
    #[error(transparent)]
    RingPerception(#[from] RingPerceptionError),
}
