use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::GateParseError;

/// Codon Gate Kinds
///
/// This enum represents the fixed catalog of gates offered by the designer
/// palette. It includes the single-lane markers (Helix, X/Y/Z codons, phase
/// rotation, measurement) and the two-lane Bond.
///
/// # Examples
///
/// ```
/// use genome_designer::ir::GateKind;
/// let helix = GateKind::Superposition;
/// assert_eq!(helix.symbol(), "H");
/// assert!(GateKind::Entangle.is_two_qubit());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GateKind {
    /// Helix (Hadamard)
    Superposition,
    /// Bond (CNOT)
    Entangle,
    /// X-Codon (Pauli-X)
    PauliX,
    /// Y-Codon (Pauli-Y)
    PauliY,
    /// Z-Codon (Pauli-Z)
    PauliZ,
    /// Phase (Z-rotation)
    PhaseRotation,
    /// Measurement
    Measure,
}

impl GateKind {
    /// Palette order.
    pub const ALL: [GateKind; 7] = [
        GateKind::Superposition,
        GateKind::Entangle,
        GateKind::PauliX,
        GateKind::PauliY,
        GateKind::PauliZ,
        GateKind::PhaseRotation,
        GateKind::Measure,
    ];

    /// Stable palette identifier (`helix`, `bond`, ...).
    pub fn id(&self) -> &'static str {
        match self {
            GateKind::Superposition => "helix",
            GateKind::Entangle => "bond",
            GateKind::PauliX => "phase_x",
            GateKind::PauliY => "phase_y",
            GateKind::PauliZ => "phase_z",
            GateKind::PhaseRotation => "rz",
            GateKind::Measure => "measure",
        }
    }

    /// Display name on the palette tile.
    pub fn name(&self) -> &'static str {
        match self {
            GateKind::Superposition => "Helix",
            GateKind::Entangle => "Bond",
            GateKind::PauliX => "X-Codon",
            GateKind::PauliY => "Y-Codon",
            GateKind::PauliZ => "Z-Codon",
            GateKind::PhaseRotation => "Phase",
            GateKind::Measure => "Measure",
        }
    }

    /// Glyph shown on the canvas cell.
    pub fn symbol(&self) -> &'static str {
        match self {
            GateKind::Superposition => "H",
            GateKind::Entangle => "●─●",
            GateKind::PauliX => "X",
            GateKind::PauliY => "Y",
            GateKind::PauliZ => "Z",
            GateKind::PhaseRotation => "Rz",
            GateKind::Measure => "M",
        }
    }

    /// One-line tooltip text.
    pub fn description(&self) -> &'static str {
        match self {
            GateKind::Superposition => "Superposition (Hadamard)",
            GateKind::Entangle => "Entanglement (CNOT)",
            GateKind::PauliX => "Pauli-X (NOT)",
            GateKind::PauliY => "Pauli-Y",
            GateKind::PauliZ => "Pauli-Z",
            GateKind::PhaseRotation => "Z-Rotation",
            GateKind::Measure => "Collapse to classical",
        }
    }

    /// Whether the gate spans two lanes.
    pub fn is_two_qubit(&self) -> bool {
        matches!(self, GateKind::Entangle)
    }

    /// Leading token of the exported statement.
    pub fn keyword(&self) -> &'static str {
        match self {
            GateKind::Superposition => "HELIX",
            GateKind::Entangle => "BOND",
            GateKind::Measure => "MEASURE",
            other => other.symbol(),
        }
    }
}

impl fmt::Display for GateKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for GateKind {
    type Err = GateParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lowered = s.trim().to_ascii_lowercase();
        let kind = match lowered.as_str() {
            "helix" | "h" => GateKind::Superposition,
            "bond" | "cx" | "cnot" => GateKind::Entangle,
            "phase_x" | "x" => GateKind::PauliX,
            "phase_y" | "y" => GateKind::PauliY,
            "phase_z" | "z" => GateKind::PauliZ,
            "rz" | "phase" => GateKind::PhaseRotation,
            "measure" | "m" => GateKind::Measure,
            _ => return Err(GateParseError::UnknownGate(s.to_string())),
        };
        Ok(kind)
    }
}
