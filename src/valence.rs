use petgraph::graph::NodeIndex;

use crate::mol::Mol;
use crate::traits::{HasBondOrder, HasHydrogenCount};

/// Lookup from (element, formal charge) to the total bond-order valences the
/// atom may adopt, in ascending order.
///
/// Bond-order resolution picks the smallest listed valence that fits the
/// atom's existing bonds, so only the ordering of the slice matters. An empty
/// slice means the valence is unknown.
pub trait ValenceTable {
    fn allowed_valences(&self, atomic_num: u8, formal_charge: i8) -> &[u8];
}

/// Organic-subset default valences with isoelectronic handling of charges.
///
/// A charged atom takes the valences of the neutral element with the same
/// electron count, provided that element sits in the same period: `[N+]`
/// behaves like carbon, `[C-]` and `[O+]` like nitrogen, `[B-]` like carbon.
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultValenceTable;

impl ValenceTable for DefaultValenceTable {
    fn allowed_valences(&self, atomic_num: u8, formal_charge: i8) -> &[u8] {
        if formal_charge == 0 {
            return neutral_valences(atomic_num);
        }
        let shifted = atomic_num as i16 - formal_charge as i16;
        if !(1..=118).contains(&shifted) {
            return &[];
        }
        let shifted = shifted as u8;
        if period(shifted) != period(atomic_num) {
            return &[];
        }
        neutral_valences(shifted)
    }
}

fn neutral_valences(atomic_num: u8) -> &'static [u8] {
    match atomic_num {
        1 => &[1],
        5 => &[3],
        6 | 14 | 32 => &[4],
        7 | 15 | 33 => &[3, 5],
        8 => &[2],
        9 | 17 | 35 | 85 => &[1],
        16 | 34 | 52 => &[2, 4, 6],
        53 => &[1, 3, 5, 7],
        _ => &[],
    }
}

fn period(atomic_num: u8) -> u8 {
    match atomic_num {
        0..=2 => 1,
        3..=10 => 2,
        11..=18 => 3,
        19..=36 => 4,
        37..=54 => 5,
        55..=86 => 6,
        _ => 7,
    }
}

/// Sum of bond orders plus implicit hydrogens around `atom`.
///
/// Aromatic bonds count as 1; call this after resolution to check closure.
pub fn total_valence<A, B>(mol: &Mol<A, B>, atom: NodeIndex) -> u8
where
    A: HasHydrogenCount,
    B: HasBondOrder,
{
    let bond_sum: u8 = mol
        .bonds_of(atom)
        .map(|ei| mol.bond(ei).bond_order().valence_contribution())
        .sum();
    bond_sum + mol.atom(atom).hydrogen_count()
}
