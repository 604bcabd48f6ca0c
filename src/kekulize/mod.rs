//! Kekulization assigns alternating single and double bonds to aromatic ring
//! systems.
//!
//! The input is a molecule whose ring bonds are marked
//! [`BondOrder::Aromatic`](crate::BondOrder::Aromatic) and whose ring atoms
//! carry a hybridization. Rings from the ring-perception collaborator are
//! filtered to small planar rings, clustered into fused groups, and each group
//! is solved by valence-driven constraint propagation. Solved groups are
//! written back; groups that cannot be solved are reported and left as they
//! were.
//!
//! ```
//! use ringbond::{resolve, Atom, Bond, BondOrder, Hybridization, Mol, WithHybridization};
//!
//! let mut mol = Mol::new();
//! let atoms: Vec<_> = (0..6)
//!     .map(|_| mol.add_atom(WithHybridization::new(
//!         Atom::new(6).with_hydrogens(1),
//!         Hybridization::SP2,
//!     )))
//!     .collect();
//! for i in 0..6 {
//!     mol.add_bond(atoms[i], atoms[(i + 1) % 6], Bond::aromatic());
//! }
//!
//! let (mol, failed) = resolve(mol).unwrap();
//! assert!(failed.is_empty());
//! let doubles = mol.bonds().filter(|&e| mol.bond(e).order == BondOrder::Double).count();
//! assert_eq!(doubles, 3);
//! ```

pub mod apply;
pub mod budget;
pub mod config;
pub mod error;
pub mod extract;
pub mod incidence;
pub mod partition;
pub mod solver;

use rayon::prelude::*;
use tracing::debug;

use crate::mol::Mol;
use crate::rings::{RingPerception, Sssr};
use crate::traits::{
    HasAtomicNum, HasBondOrder, HasBondOrderMut, HasFormalCharge, HasHybridization,
    HasHydrogenCount,
};
use crate::valence::{DefaultValenceTable, ValenceTable};

use apply::{apply_outcomes, GroupOutcome};
pub use config::KekulizeConfig;
pub use error::{FailedGroupReport, GroupError, KekulizeError};
use extract::{extract_ring_systems, Extraction};
use incidence::IncidenceMatrix;
use partition::{partition_rings, spiro_units, RingGroup};
use solver::ConstraintSolver;

/// Resolves aromatic ring bonds with the default collaborators.
///
/// Uses [`Sssr`] ring perception, the [`DefaultValenceTable`] and
/// [`KekulizeConfig::default`]. Returns the molecule together with the ring
/// groups that could not be kekulized; an empty list means every group was
/// resolved.
pub fn resolve<A, B>(mut mol: Mol<A, B>) -> Result<(Mol<A, B>, Vec<FailedGroupReport>), KekulizeError>
where
    A: HasAtomicNum + HasFormalCharge + HasHydrogenCount + HasHybridization + Sync,
    B: HasBondOrder + HasBondOrderMut + Sync,
{
    let failed = resolve_with(&mut mol, &Sssr, &DefaultValenceTable, &KekulizeConfig::default())?;
    Ok((mol, failed))
}

/// Resolves aromatic ring bonds in place with caller-supplied collaborators.
///
/// Only bonds that were `Aromatic` and belong to a solved group are
/// modified. A ring-perception failure aborts the call before anything is
/// written; every other problem is confined to its ring group and reported.
pub fn resolve_with<A, B, R, V>(
    mol: &mut Mol<A, B>,
    rings: &R,
    valences: &V,
    config: &KekulizeConfig,
) -> Result<Vec<FailedGroupReport>, KekulizeError>
where
    A: HasAtomicNum + HasFormalCharge + HasHydrogenCount + HasHybridization + Sync,
    B: HasBondOrder + HasBondOrderMut + Sync,
    R: RingPerception,
    V: ValenceTable + Sync,
{
    let found = rings.find_rings(mol)?;
    let total = found.len();
    let extraction = extract_ring_systems(mol, found, config.max_ring_size);
    let groups = partition_rings(&extraction.rings);
    let units = spiro_units(&groups);
    debug!(
        rings = total,
        kept = extraction.rings.len(),
        ring_atoms = extraction.ring_atom_count(),
        groups = groups.len(),
        units = units.len(),
        "ring groups partitioned"
    );

    let view: &Mol<A, B> = mol;
    let solve = |unit: &Vec<usize>| solve_unit(view, &extraction, &groups, unit, valences);
    let outcomes: Vec<GroupOutcome> = if config.parallel {
        units.par_iter().flat_map_iter(solve).collect()
    } else {
        units.iter().flat_map(solve).collect()
    };

    Ok(apply_outcomes(mol, outcomes))
}

/// Solves the groups of one spiro unit together.
///
/// A failure is reported once per member group.
fn solve_unit<A, B, V>(
    mol: &Mol<A, B>,
    extraction: &Extraction,
    groups: &[RingGroup],
    unit: &[usize],
    valences: &V,
) -> Vec<GroupOutcome>
where
    A: HasAtomicNum + HasFormalCharge + HasHydrogenCount,
    B: HasBondOrder,
    V: ValenceTable,
{
    let merged;
    let target = match unit {
        [single] => &groups[*single],
        _ => {
            merged = RingGroup::merge(unit.iter().map(|&g| &groups[g]));
            &merged
        }
    };

    match solve_group(mol, extraction, target, valences) {
        Ok(outcome) => vec![outcome],
        Err(error) => unit
            .iter()
            .map(|&g| failed_group(&groups[g], error.clone()))
            .collect(),
    }
}

fn solve_group<A, B, V>(
    mol: &Mol<A, B>,
    extraction: &Extraction,
    group: &RingGroup,
    valences: &V,
) -> Result<GroupOutcome, GroupError>
where
    A: HasAtomicNum + HasFormalCharge + HasHydrogenCount,
    B: HasBondOrder,
    V: ValenceTable,
{
    let matrix = IncidenceMatrix::build(mol, extraction, group);
    if matrix.cols() == 0 {
        return Ok(GroupOutcome::Unchanged);
    }

    let free = budget::free_valences(mol, &matrix, valences)?;
    let mut solver = ConstraintSolver::new(&matrix, &free);
    let assignment = solver.solve()?;
    Ok(GroupOutcome::Solved(
        matrix.bonds().iter().copied().zip(assignment).collect(),
    ))
}

fn failed_group(group: &RingGroup, error: GroupError) -> GroupOutcome {
    GroupOutcome::Failed(FailedGroupReport {
        atoms: group.atoms.iter().map(|a| a.index()).collect(),
        bonds: group.bonds.iter().map(|b| b.index()).collect(),
        error,
    })
}
