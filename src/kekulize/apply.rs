use petgraph::graph::EdgeIndex;
use tracing::warn;

use super::error::FailedGroupReport;
use super::solver::BondAssignment;
use crate::bond::BondOrder;
use crate::mol::Mol;
use crate::traits::HasBondOrderMut;

/// Result of solving one ring group, waiting to be written back.
#[derive(Debug, Clone, PartialEq)]
pub enum GroupOutcome {
    /// Every open bond of the group with its resolved order.
    Solved(Vec<(EdgeIndex, BondAssignment)>),
    /// The group had no open bonds.
    Unchanged,
    Failed(FailedGroupReport),
}

/// Writes solved groups onto `mol` and collects the failures.
///
/// Failed groups are left exactly as they were.
pub fn apply_outcomes<A, B>(mol: &mut Mol<A, B>, outcomes: Vec<GroupOutcome>) -> Vec<FailedGroupReport>
where
    B: HasBondOrderMut,
{
    let mut failed = Vec::new();
    for outcome in outcomes {
        match outcome {
            GroupOutcome::Solved(orders) => {
                for (bond, assigned) in orders {
                    let order = match assigned {
                        BondAssignment::Single => BondOrder::Single,
                        BondAssignment::Double => BondOrder::Double,
                        BondAssignment::Unresolved => continue,
                    };
                    *mol.bond_mut(bond).bond_order_mut() = order;
                }
            }
            GroupOutcome::Unchanged => {}
            GroupOutcome::Failed(report) => {
                warn!(%report, "ring group left unresolved");
                failed.push(report);
            }
        }
    }
    failed
}
