pub mod atom;
pub mod bond;
pub mod kekulize;
pub mod mol;
pub mod rings;
pub mod traits;
pub mod valence;
pub mod wrappers;

pub use atom::Atom;
pub use bond::{Bond, BondOrder};
pub use kekulize::{
    resolve, resolve_with, FailedGroupReport, GroupError, KekulizeConfig, KekulizeError,
};
pub use mol::Mol;
pub use rings::{RingPerception, RingPerceptionError, Sssr};
pub use traits::{
    HasAtomicNum, HasBondOrder, HasBondOrderMut, HasFormalCharge, HasHybridization,
    HasHydrogenCount,
};
pub use valence::{total_valence, DefaultValenceTable, ValenceTable};
pub use wrappers::{Hybridization, WithHybridization};
