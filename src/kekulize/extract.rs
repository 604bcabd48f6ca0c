use petgraph::graph::{EdgeIndex, NodeIndex};
use tracing::trace;

use crate::mol::Mol;
use crate::traits::HasHybridization;

/// Whether an atom or bond belongs to a kekulizable ring.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Role {
    Ring,
    #[default]
    Exocyclic,
}

/// One elementary ring that passed the size and planarity filters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RingSystem {
    /// Bond indices in the order the ring finder walked them.
    pub bonds: Vec<EdgeIndex>,
    /// Atom indices, ascending.
    pub atoms: Vec<NodeIndex>,
}

#[derive(Debug, Clone, Default)]
pub struct Extraction {
    pub rings: Vec<RingSystem>,
    pub atom_roles: Vec<Role>,
    pub bond_roles: Vec<Role>,
}

impl Extraction {
    pub fn ring_atom_count(&self) -> usize {
        self.atom_roles.iter().filter(|&&r| r == Role::Ring).count()
    }

    pub fn is_ring_bond(&self, bond: EdgeIndex) -> bool {
        self.bond_roles.get(bond.index()) == Some(&Role::Ring)
    }
}

/// Keeps the rings that can be kekulized and tags ring atoms and bonds.
///
/// A ring is dropped when it has more than `max_ring_size` atoms, when any of
/// its atoms is not planar-conjugated (sp2 or planar3), or when it names a
/// bond the molecule does not have.
pub fn extract_ring_systems<A, B>(
    mol: &Mol<A, B>,
    rings: Vec<Vec<EdgeIndex>>,
    max_ring_size: usize,
) -> Extraction
where
    A: HasHybridization,
{
    let mut extraction = Extraction {
        rings: Vec::with_capacity(rings.len()),
        atom_roles: vec![Role::Exocyclic; mol.atom_count()],
        bond_roles: vec![Role::Exocyclic; mol.bond_count()],
    };

    for (ring_idx, bonds) in rings.into_iter().enumerate() {
        let Some(atoms) = ring_atoms(mol, &bonds) else {
            trace!(ring = ring_idx, "ring references a missing bond, skipped");
            continue;
        };
        if atoms.len() > max_ring_size {
            trace!(ring = ring_idx, size = atoms.len(), "ring too large, skipped");
            continue;
        }
        if let Some(atom) = atoms
            .iter()
            .find(|&&a| !mol.atom(a).hybridization().is_planar_conjugated())
        {
            trace!(ring = ring_idx, atom = atom.index(), "non-planar ring, skipped");
            continue;
        }

        for &a in &atoms {
            extraction.atom_roles[a.index()] = Role::Ring;
        }
        for &b in &bonds {
            extraction.bond_roles[b.index()] = Role::Ring;
        }
        extraction.rings.push(RingSystem { bonds, atoms });
    }

    extraction
}

fn ring_atoms<A, B>(mol: &Mol<A, B>, bonds: &[EdgeIndex]) -> Option<Vec<NodeIndex>> {
    let mut atoms = Vec::with_capacity(bonds.len());
    for &b in bonds {
        let (u, v) = mol.bond_endpoints(b)?;
        atoms.push(u);
        atoms.push(v);
    }
    atoms.sort_unstable();
    atoms.dedup();
    Some(atoms)
}
