use std::collections::BTreeMap;

use petgraph::graph::{Graph, NodeIndex};
use petgraph::unionfind::UnionFind;
use petgraph::visit::EdgeRef;
use petgraph::Directed;

use crate::ir::{Circuit, GateKind};

/// Lane connectivity drawn by Bond gates.
///
/// Nodes are lanes; a directed edge `q -> q + 1` exists for every lane that
/// carries at least one Bond with a lane below it.
#[derive(Debug, Clone)]
pub struct BondMap {
    lanes: usize,
    graph: Graph<(), (), Directed>,
}

impl BondMap {
    pub fn new(lanes: usize) -> Self {
        let mut graph = Graph::new();
        // One node per lane
        for _ in 0..lanes {
            graph.add_node(());
        }
        Self { lanes, graph }
    }

    /// Builds the bond map of a circuit.
    pub fn from_circuit(circuit: &Circuit) -> Self {
        let mut map = Self::new(circuit.lanes());
        for gate in circuit.gates() {
            if gate.kind == GateKind::Entangle {
                map.bond(gate.qubit);
            }
        }
        map
    }

    /// Records a bond from `lane` to `lane + 1`. Ignored on the last lane.
    pub fn bond(&mut self, lane: usize) {
        if lane < self.lanes.saturating_sub(1) {
            self.graph
                .update_edge(NodeIndex::new(lane), NodeIndex::new(lane + 1), ());
        }
    }

    pub fn lanes(&self) -> usize {
        self.lanes
    }

    /// Number of distinct bonded lane pairs.
    pub fn bond_count(&self) -> usize {
        self.graph.edge_count()
    }

    /// Whether two lanes share a bond, in either direction.
    pub fn is_bonded(&self, a: usize, b: usize) -> bool {
        if a >= self.lanes || b >= self.lanes {
            return false;
        }
        let (a, b) = (NodeIndex::new(a), NodeIndex::new(b));
        self.graph.contains_edge(a, b) || self.graph.contains_edge(b, a)
    }

    /// Lanes chained together by bonds, each group sorted, groups ordered by
    /// their first lane. Unbonded lanes are left out.
    pub fn entangled_groups(&self) -> Vec<Vec<usize>> {
        let mut sets = UnionFind::new(self.lanes);
        for edge in self.graph.edge_references() {
            sets.union(edge.source().index(), edge.target().index());
        }

        let mut groups: BTreeMap<usize, Vec<usize>> = BTreeMap::new();
        for lane in 0..self.lanes {
            groups.entry(sets.find(lane)).or_default().push(lane);
        }

        let mut groups: Vec<Vec<usize>> = groups.into_values().filter(|g| g.len() > 1).collect();
        groups.sort_by_key(|g| g[0]);
        groups
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bond_map_creation() {
        let map = BondMap::new(5);
        assert_eq!(map.lanes(), 5);
        assert_eq!(map.bond_count(), 0);
        assert!(map.entangled_groups().is_empty());
    }

    #[test]
    fn test_seeded_groups() {
        let map = BondMap::from_circuit(&Circuit::seeded());
        assert_eq!(map.bond_count(), 2);
        assert!(map.is_bonded(0, 1));
        assert!(map.is_bonded(3, 2));
        assert!(!map.is_bonded(1, 2));
        assert_eq!(map.entangled_groups(), vec![vec![0, 1], vec![2, 3]]);
    }

    #[test]
    fn test_chained_bonds_merge() {
        let mut circuit = Circuit::new(4);
        circuit.place_gate(GateKind::Entangle, 0, 0).unwrap();
        circuit.place_gate(GateKind::Entangle, 1, 1).unwrap();
        circuit.place_gate(GateKind::Entangle, 1, 2).unwrap();
        let map = BondMap::from_circuit(&circuit);
        assert_eq!(map.bond_count(), 2);
        assert_eq!(map.entangled_groups(), vec![vec![0, 1, 2]]);
    }

    #[test]
    fn test_bond_past_every_lane_ignored() {
        let mut map = BondMap::new(3);
        map.bond(usize::MAX);
        map.bond(2);
        assert_eq!(map.bond_count(), 0);
        map.bond(1);
        assert!(map.is_bonded(1, 2));
    }

    #[test]
    fn test_last_lane_bond_ignored() {
        let mut circuit = Circuit::new(2);
        circuit.place_gate(GateKind::Entangle, 1, 0).unwrap();
        let map = BondMap::from_circuit(&circuit);
        assert_eq!(map.bond_count(), 0);
        assert!(!map.is_bonded(1, 2));
    }
}
