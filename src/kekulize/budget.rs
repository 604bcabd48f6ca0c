use super::error::GroupError;
use super::incidence::IncidenceMatrix;
use crate::mol::Mol;
use crate::traits::{HasAtomicNum, HasBondOrder, HasFormalCharge, HasHydrogenCount};
use crate::valence::ValenceTable;

/// Free valence of every row of `matrix`, in row order.
///
/// `free = expected - fixed - implicit H`, where `fixed` sums every incident
/// bond that is not an open column of this group. The expected valence is the
/// smallest allowed valence that leaves room for one order unit per open
/// bond, falling back to the largest allowed valence.
pub fn free_valences<A, B, V>(
    mol: &Mol<A, B>,
    matrix: &IncidenceMatrix,
    valences: &V,
) -> Result<Vec<i16>, GroupError>
where
    A: HasAtomicNum + HasFormalCharge + HasHydrogenCount,
    B: HasBondOrder,
    V: ValenceTable + ?Sized,
{
    (0..matrix.rows())
        .map(|row| {
            let idx = matrix.atom(row);
            let atom = mol.atom(idx);

            let fixed: i16 = mol
                .bonds_of(idx)
                .filter(|&e| matrix.column_of(e).is_none())
                .map(|e| mol.bond(e).bond_order().valence_contribution() as i16)
                .sum();
            let hydrogens = atom.hydrogen_count() as i16;
            let open = matrix.row_sum(row) as i16;

            let allowed = valences.allowed_valences(atom.atomic_num(), atom.formal_charge());
            let expected = expected_valence(allowed, fixed + hydrogens + open).ok_or(
                GroupError::UnknownValence {
                    atom: idx.index(),
                    atomic_num: atom.atomic_num(),
                    formal_charge: atom.formal_charge(),
                },
            )?;

            let free = expected - fixed - hydrogens;
            if free < 0 {
                return Err(GroupError::InconsistentValence {
                    atom: idx.index(),
                    free_valence: free,
                });
            }
            Ok(free)
        })
        .collect()
}

fn expected_valence(allowed: &[u8], used: i16) -> Option<i16> {
    allowed
        .iter()
        .map(|&v| v as i16)
        .find(|&v| v >= used)
        .or_else(|| allowed.iter().map(|&v| v as i16).max())
}
