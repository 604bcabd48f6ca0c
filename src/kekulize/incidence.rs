use petgraph::graph::{EdgeIndex, NodeIndex};

use super::extract::Extraction;
use super::partition::RingGroup;
use crate::mol::Mol;
use crate::traits::HasBondOrder;

/// Dense binary atom x bond matrix of one ring group.
///
/// Rows are the group atoms and columns the group's open bonds (ring bonds
/// still marked aromatic), both ascending by original index. Ring bonds that
/// already carry an explicit order are not columns; they count as fixed bonds
/// of their endpoints.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IncidenceMatrix {
    atoms: Vec<NodeIndex>,
    bonds: Vec<EdgeIndex>,
    cells: Vec<bool>,
    endpoints: Vec<[usize; 2]>,
    incident: Vec<Vec<usize>>,
}

impl IncidenceMatrix {
    pub fn build<A, B>(mol: &Mol<A, B>, extraction: &Extraction, group: &RingGroup) -> Self
    where
        B: HasBondOrder,
    {
        let atoms = group.atoms.clone();
        let bonds: Vec<EdgeIndex> = group
            .bonds
            .iter()
            .copied()
            .filter(|&b| extraction.is_ring_bond(b) && mol.bond(b).bond_order().is_aromatic())
            .collect();

        let rows = atoms.len();
        let cols = bonds.len();
        let mut cells = vec![false; rows * cols];
        for (c, &bond) in bonds.iter().enumerate() {
            if let Some((u, v)) = mol.bond_endpoints(bond) {
                for end in [u, v] {
                    if let Ok(r) = atoms.binary_search(&end) {
                        cells[r * cols + c] = true;
                    }
                }
            }
        }

        let endpoints = (0..cols)
            .map(|c| {
                let mut ends = (0..rows).filter(|&r| cells[r * cols + c]);
                let first = ends.next().unwrap_or(0);
                [first, ends.next().unwrap_or(first)]
            })
            .collect();
        let incident = (0..rows)
            .map(|r| (0..cols).filter(|&c| cells[r * cols + c]).collect())
            .collect();

        Self {
            atoms,
            bonds,
            cells,
            endpoints,
            incident,
        }
    }

    pub fn rows(&self) -> usize {
        self.atoms.len()
    }

    pub fn cols(&self) -> usize {
        self.bonds.len()
    }

    pub fn get(&self, row: usize, col: usize) -> bool {
        self.cells[row * self.cols() + col]
    }

    pub fn row_sum(&self, row: usize) -> usize {
        self.incident[row].len()
    }

    pub fn atoms(&self) -> &[NodeIndex] {
        &self.atoms
    }

    pub fn bonds(&self) -> &[EdgeIndex] {
        &self.bonds
    }

    pub fn atom(&self, row: usize) -> NodeIndex {
        self.atoms[row]
    }

    pub fn bond(&self, col: usize) -> EdgeIndex {
        self.bonds[col]
    }

    /// The two rows touching column `col`.
    pub fn endpoints(&self, col: usize) -> [usize; 2] {
        self.endpoints[col]
    }

    /// Columns incident to `row`, ascending.
    pub fn incident(&self, row: usize) -> &[usize] {
        &self.incident[row]
    }

    pub fn column_of(&self, bond: EdgeIndex) -> Option<usize> {
        self.bonds.binary_search(&bond).ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::atom::Atom;
    use crate::bond::{Bond, BondOrder};
    use crate::kekulize::extract::extract_ring_systems;
    use crate::kekulize::partition::partition_rings;
    use crate::wrappers::{Hybridization, WithHybridization};

    fn sp2(z: u8) -> WithHybridization<Atom> {
        WithHybridization::new(Atom::new(z), Hybridization::SP2)
    }

    #[test]
    fn triangle_with_one_explicit_bond() {
        let mut mol = Mol::new();
        let a = mol.add_atom(sp2(6));
        let b = mol.add_atom(sp2(6));
        let c = mol.add_atom(sp2(6));
        let ab = mol.add_bond(a, b, Bond::aromatic());
        let bc = mol.add_bond(b, c, Bond::new(BondOrder::Single));
        let ca = mol.add_bond(c, a, Bond::aromatic());

        let ex = extract_ring_systems(&mol, vec![vec![ab, bc, ca]], 8);
        let groups = partition_rings(&ex.rings);
        let m = IncidenceMatrix::build(&mol, &ex, &groups[0]);

        assert_eq!(m.rows(), 3);
        assert_eq!(m.cols(), 2);
        assert_eq!(m.bonds(), &[ab, ca]);
        assert_eq!(m.column_of(bc), None);
        assert_eq!(m.column_of(ca), Some(1));

        assert!(m.get(0, 0) && m.get(0, 1));
        assert!(m.get(1, 0) && !m.get(1, 1));
        assert!(!m.get(2, 0) && m.get(2, 1));
        assert_eq!(m.row_sum(0), 2);
        assert_eq!(m.row_sum(1), 1);
        assert_eq!(m.endpoints(0), [0, 1]);
        assert_eq!(m.endpoints(1), [0, 2]);
        assert_eq!(m.incident(2), &[1]);
    }

    #[test]
    fn every_column_has_two_endpoints() {
        let mut mol = Mol::new();
        let atoms: Vec<NodeIndex> = (0..6).map(|_| mol.add_atom(sp2(6))).collect();
        let bonds: Vec<EdgeIndex> = (0..6)
            .map(|i| mol.add_bond(atoms[i], atoms[(i + 1) % 6], Bond::aromatic()))
            .collect();
        let ex = extract_ring_systems(&mol, vec![bonds], 8);
        let groups = partition_rings(&ex.rings);
        let m = IncidenceMatrix::build(&mol, &ex, &groups[0]);

        for c in 0..m.cols() {
            let column: usize = (0..m.rows()).filter(|&r| m.get(r, c)).count();
            assert_eq!(column, 2);
            let [r0, r1] = m.endpoints(c);
            assert_ne!(r0, r1);
        }
        for r in 0..m.rows() {
            assert_eq!(m.row_sum(r), 2);
        }
    }
}
