use std::collections::HashMap;

use petgraph::graph::{EdgeIndex, NodeIndex};

use super::extract::RingSystem;

/// Rings connected through shared bonds: a fused or bridged system.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RingGroup {
    /// Indices into the extracted ring list, ascending.
    pub rings: Vec<usize>,
    /// Union of member ring bonds, ascending and deduplicated.
    pub bonds: Vec<EdgeIndex>,
    /// Union of member ring atoms, ascending and deduplicated.
    pub atoms: Vec<NodeIndex>,
}

impl RingGroup {
    /// Union of several groups, with the same ordering guarantees.
    pub fn merge<'a>(groups: impl IntoIterator<Item = &'a RingGroup>) -> Self {
        let mut merged = RingGroup {
            rings: Vec::new(),
            bonds: Vec::new(),
            atoms: Vec::new(),
        };
        for group in groups {
            merged.rings.extend(&group.rings);
            merged.bonds.extend(&group.bonds);
            merged.atoms.extend(&group.atoms);
        }
        merged.rings.sort_unstable();
        merged.bonds.sort_unstable();
        merged.atoms.sort_unstable();
        merged.atoms.dedup();
        merged
    }
}

struct UnionFind {
    parent: Vec<usize>,
    rank: Vec<u8>,
}

impl UnionFind {
    fn new(n: usize) -> Self {
        Self {
            parent: (0..n).collect(),
            rank: vec![0; n],
        }
    }

    fn find(&mut self, x: usize) -> usize {
        let mut root = x;
        while self.parent[root] != root {
            root = self.parent[root];
        }
        let mut cur = x;
        while self.parent[cur] != root {
            let next = self.parent[cur];
            self.parent[cur] = root;
            cur = next;
        }
        root
    }

    fn union(&mut self, a: usize, b: usize) {
        let ra = self.find(a);
        let rb = self.find(b);
        if ra == rb {
            return;
        }
        match self.rank[ra].cmp(&self.rank[rb]) {
            std::cmp::Ordering::Less => self.parent[ra] = rb,
            std::cmp::Ordering::Greater => self.parent[rb] = ra,
            std::cmp::Ordering::Equal => {
                self.parent[rb] = ra;
                self.rank[ra] += 1;
            }
        }
    }
}

/// Clusters rings that share at least one bond.
///
/// The groups are bond-disjoint and together cover every ring bond exactly
/// once. Groups come out ordered by their lowest member ring index. Rings
/// that only share an atom (spiro junctions) end up in different groups.
pub fn partition_rings(rings: &[RingSystem]) -> Vec<RingGroup> {
    let mut uf = UnionFind::new(rings.len());
    let mut owner: HashMap<EdgeIndex, usize> = HashMap::new();

    for (ring_idx, ring) in rings.iter().enumerate() {
        for &bond in &ring.bonds {
            match owner.get(&bond) {
                Some(&other) => uf.union(other, ring_idx),
                None => {
                    owner.insert(bond, ring_idx);
                }
            }
        }
    }

    let mut slot_of_root: HashMap<usize, usize> = HashMap::new();
    let mut groups: Vec<RingGroup> = Vec::new();
    for (ring_idx, ring) in rings.iter().enumerate() {
        let root = uf.find(ring_idx);
        let slot = *slot_of_root.entry(root).or_insert_with(|| {
            groups.push(RingGroup {
                rings: Vec::new(),
                bonds: Vec::new(),
                atoms: Vec::new(),
            });
            groups.len() - 1
        });
        let group = &mut groups[slot];
        group.rings.push(ring_idx);
        group.bonds.extend(&ring.bonds);
        group.atoms.extend(&ring.atoms);
    }

    for group in &mut groups {
        group.bonds.sort_unstable();
        group.bonds.dedup();
        group.atoms.sort_unstable();
        group.atoms.dedup();
    }
    groups
}

/// Clusters groups that share an atom, returning group indices per cluster.
///
/// A spiro atom's valence is spread over the bonds of every group it sits
/// in, so such groups have to be solved together. Clusters are ordered by
/// their lowest group index and list their groups ascending.
pub fn spiro_units(groups: &[RingGroup]) -> Vec<Vec<usize>> {
    let mut uf = UnionFind::new(groups.len());
    let mut owner: HashMap<NodeIndex, usize> = HashMap::new();

    for (group_idx, group) in groups.iter().enumerate() {
        for &atom in &group.atoms {
            match owner.get(&atom) {
                Some(&other) => uf.union(other, group_idx),
                None => {
                    owner.insert(atom, group_idx);
                }
            }
        }
    }

    let mut slot_of_root: HashMap<usize, usize> = HashMap::new();
    let mut units: Vec<Vec<usize>> = Vec::new();
    for group_idx in 0..groups.len() {
        let root = uf.find(group_idx);
        let slot = *slot_of_root.entry(root).or_insert_with(|| {
            units.push(Vec::new());
            units.len() - 1
        });
        units[slot].push(group_idx);
    }
    units
}
