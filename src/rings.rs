//! Ring perception over bond indices.
//!
//! Bond-order resolution only needs rings as sets of bonds, so the
//! [`RingPerception`] collaborator hands back bond indices in ring-walk
//! order. [`Sssr`] is the default implementation.

use std::collections::VecDeque;

use petgraph::algo::connected_components;
use petgraph::graph::{EdgeIndex, NodeIndex};
use thiserror::Error;

use crate::mol::Mol;

/// Failure of the ring-perception step. Fatal for the whole resolution call.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RingPerceptionError {
    /// Fewer independent rings were found than the cyclomatic number demands.
    #[error("ring basis incomplete: expected {expected} rings, found {found}")]
    IncompleteBasis { expected: usize, found: usize },
    /// Two consecutive ring atoms are not bonded.
    #[error("ring walk broken: atoms {a} and {b} are not bonded")]
    MissingBond { a: usize, b: usize },
    /// Failure reported by a caller-supplied ring finder.
    #[error("ring perception failed: {0}")]
    Other(String),
}

/// Source of elementary rings for a molecule.
pub trait RingPerception {
    /// Each ring is the list of its bond indices in walk order.
    fn find_rings<A, B>(&self, mol: &Mol<A, B>) -> Result<Vec<Vec<EdgeIndex>>, RingPerceptionError>;
}

/// Smallest set of smallest rings.
///
/// Candidate cycles come from Horton's construction (two shortest paths from
/// a root to the ends of an edge). They are taken smallest first and kept
/// whenever they are linearly independent, over GF(2), of the rings already
/// chosen.
#[derive(Debug, Clone, Copy, Default)]
pub struct Sssr;

impl RingPerception for Sssr {
    fn find_rings<A, B>(&self, mol: &Mol<A, B>) -> Result<Vec<Vec<EdgeIndex>>, RingPerceptionError> {
        let expected = cyclomatic_number(mol);
        if expected == 0 {
            return Ok(vec![]);
        }

        let mut basis = CycleBasis::new(mol.bond_count());
        let mut rings: Vec<Vec<EdgeIndex>> = Vec::with_capacity(expected);

        for cycle in horton_candidates(mol) {
            if rings.len() >= expected {
                break;
            }
            let bonds = cycle_bonds(mol, &cycle)?;
            if basis.insert(&bonds) {
                rings.push(bonds);
            }
        }

        if rings.len() < expected {
            return Err(RingPerceptionError::IncompleteBasis {
                expected,
                found: rings.len(),
            });
        }

        rings.sort_by(|a, b| {
            a.len()
                .cmp(&b.len())
                .then_with(|| sorted_indices(a).cmp(&sorted_indices(b)))
        });
        Ok(rings)
    }
}

/// `E - V + C`, the number of rings in any cycle basis.
pub fn cyclomatic_number<A, B>(mol: &Mol<A, B>) -> usize {
    let v = mol.atom_count();
    let e = mol.bond_count();
    let c = connected_components(mol.graph());
    (e + c).saturating_sub(v)
}

fn sorted_indices(ring: &[EdgeIndex]) -> Vec<usize> {
    let mut idx: Vec<usize> = ring.iter().map(|e| e.index()).collect();
    idx.sort_unstable();
    idx
}

struct ShortestPaths {
    dist: Vec<u32>,
    pred: Vec<Option<NodeIndex>>,
}

impl ShortestPaths {
    fn from_root<A, B>(mol: &Mol<A, B>, root: NodeIndex) -> Self {
        let n = mol.atom_count();
        let mut dist = vec![u32::MAX; n];
        let mut pred = vec![None; n];
        dist[root.index()] = 0;
        let mut queue = VecDeque::from([root]);
        while let Some(cur) = queue.pop_front() {
            let d = dist[cur.index()];
            for nb in mol.neighbors(cur) {
                if dist[nb.index()] == u32::MAX {
                    dist[nb.index()] = d + 1;
                    pred[nb.index()] = Some(cur);
                    queue.push_back(nb);
                }
            }
        }
        Self { dist, pred }
    }

    fn reaches(&self, node: NodeIndex) -> bool {
        self.dist[node.index()] != u32::MAX
    }

    /// Path from the root to `dst`, root first.
    fn path_to(&self, dst: NodeIndex) -> Vec<NodeIndex> {
        let mut path = vec![dst];
        let mut cur = dst;
        while let Some(p) = self.pred[cur.index()] {
            path.push(p);
            cur = p;
        }
        path.reverse();
        path
    }
}

fn horton_candidates<A, B>(mol: &Mol<A, B>) -> Vec<Vec<NodeIndex>> {
    let mut candidates: Vec<Vec<NodeIndex>> = Vec::new();

    for root in mol.atoms() {
        let paths = ShortestPaths::from_root(mol, root);
        for edge in mol.bonds() {
            let Some((u, v)) = mol.bond_endpoints(edge) else {
                continue;
            };
            if !paths.reaches(u) || !paths.reaches(v) {
                continue;
            }
            let size = paths.dist[u.index()] as usize + paths.dist[v.index()] as usize + 1;
            if size < 3 {
                continue;
            }
            let to_u = paths.path_to(u);
            let to_v = paths.path_to(v);
            if to_u[1..].iter().any(|x| to_v[1..].contains(x)) {
                continue;
            }
            let mut cycle = to_u;
            cycle.extend(to_v[1..].iter().rev());
            candidates.push(cycle);
        }
    }

    candidates.sort_by(|a, b| a.len().cmp(&b.len()).then_with(|| a.cmp(b)));
    candidates.dedup();
    candidates
}

fn cycle_bonds<A, B>(
    mol: &Mol<A, B>,
    cycle: &[NodeIndex],
) -> Result<Vec<EdgeIndex>, RingPerceptionError> {
    let len = cycle.len();
    (0..len)
        .map(|i| {
            let a = cycle[i];
            let b = cycle[(i + 1) % len];
            mol.bond_between(a, b)
                .ok_or(RingPerceptionError::MissingBond {
                    a: a.index(),
                    b: b.index(),
                })
        })
        .collect()
}

/// Row-reduced set of GF(2) edge vectors.
struct CycleBasis {
    words: usize,
    rows: Vec<(usize, Vec<u64>)>,
}

impl CycleBasis {
    fn new(num_edges: usize) -> Self {
        Self {
            words: num_edges.div_ceil(64).max(1),
            rows: Vec::new(),
        }
    }

    /// Adds the cycle if it is independent of the current rows.
    fn insert(&mut self, bonds: &[EdgeIndex]) -> bool {
        let mut v = vec![0u64; self.words];
        for e in bonds {
            let i = e.index();
            v[i / 64] ^= 1u64 << (i % 64);
        }
        for (pivot, row) in &self.rows {
            if v[pivot / 64] & (1u64 << (pivot % 64)) != 0 {
                for (vw, rw) in v.iter_mut().zip(row) {
                    *vw ^= *rw;
                }
            }
        }
        let pivot = v
            .iter()
            .enumerate()
            .find(|&(_, &w)| w != 0)
            .map(|(i, &w)| i * 64 + w.trailing_zeros() as usize);
        match pivot {
            Some(p) => {
                self.rows.push((p, v));
                true
            }
            None => false,
        }
    }
}
