use serde::{Deserialize, Serialize};

use crate::ir::{Circuit, GateKind, PlacedGate, ResonanceLock};
use crate::topology::BondMap;

/// One row of the codon table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GateRecord {
    pub id: String,
    pub kind: GateKind,
    pub qubit: usize,
    pub step: usize,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub control: Option<usize>,
}

impl From<&PlacedGate> for GateRecord {
    fn from(gate: &PlacedGate) -> Self {
        Self {
            id: gate.id.to_string(),
            kind: gate.kind,
            qubit: gate.qubit,
            step: gate.step,
            control: gate.control,
        }
    }
}

/// Snapshot of the lattice metrics panel.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CircuitSummary {
    pub lanes: usize,
    pub depth: usize,
    pub codons: usize,
    pub coherence: f64,
    pub resonance_lock: ResonanceLock,
    pub bonds: usize,
    pub entangled_groups: Vec<Vec<usize>>,
    pub gates: Vec<GateRecord>,
}

impl CircuitSummary {
    pub fn from_circuit(circuit: &Circuit) -> Self {
        let bonds = BondMap::from_circuit(circuit);
        Self {
            lanes: circuit.lanes(),
            depth: circuit.depth(),
            codons: circuit.len(),
            coherence: circuit.coherence(),
            resonance_lock: circuit.resonance_lock(),
            bonds: bonds.bond_count(),
            entangled_groups: bonds.entangled_groups(),
            gates: circuit.gates().iter().map(GateRecord::from).collect(),
        }
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seeded_summary() {
        let summary = CircuitSummary::from_circuit(&Circuit::seeded());
        assert_eq!(summary.lanes, 4);
        assert_eq!(summary.depth, 2);
        assert_eq!(summary.codons, 4);
        assert_eq!(summary.resonance_lock, ResonanceLock::Local);
        assert_eq!(summary.bonds, 2);
        assert_eq!(summary.entangled_groups, vec![vec![0, 1], vec![2, 3]]);
        assert_eq!(summary.gates[1].control, Some(0));
    }

    #[test]
    fn test_json_shape() {
        let json = CircuitSummary::from_circuit(&Circuit::seeded()).to_json().unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["resonance_lock"], "LOCAL");
        assert_eq!(value["gates"][0]["kind"], "superposition");
        assert_eq!(value["gates"][0]["id"], "g1");
        assert!(value["gates"][0].get("control").is_none());
        assert_eq!(value["gates"][1]["control"], 0);
    }
}
