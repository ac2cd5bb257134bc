//! DNA-Lang export of a designer circuit.
//!
//! The output is a `GENOME VisualCircuit { ... }` block with one statement
//! per gate in insertion order. Two dialects exist: `Indexed` wraps lanes as
//! `chromosome[n]`, `Bare` writes plain lane numbers.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::DialectParseError;
use crate::ir::{Circuit, GateKind, PlacedGate};

const INDENT: &str = "    ";

/// Lane notation used in exported statements.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Dialect {
    /// `HELIX chromosome[0]`
    #[default]
    Indexed,
    /// `HELIX 0`
    Bare,
}

impl Dialect {
    fn lane(self, lane: usize) -> LaneRef {
        LaneRef { dialect: self, lane }
    }
}

impl fmt::Display for Dialect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Dialect::Indexed => f.write_str("indexed"),
            Dialect::Bare => f.write_str("bare"),
        }
    }
}

impl FromStr for Dialect {
    type Err = DialectParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "indexed" => Ok(Dialect::Indexed),
            "bare" => Ok(Dialect::Bare),
            _ => Err(DialectParseError(s.to_string())),
        }
    }
}

struct LaneRef {
    dialect: Dialect,
    lane: usize,
}

impl fmt::Display for LaneRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.dialect {
            Dialect::Indexed => write!(f, "chromosome[{}]", self.lane),
            Dialect::Bare => write!(f, "{}", self.lane),
        }
    }
}

/// Lazily formatted export of a circuit.
pub struct Genome<'a> {
    circuit: &'a Circuit,
    dialect: Dialect,
}

impl<'a> Genome<'a> {
    pub fn new(circuit: &'a Circuit, dialect: Dialect) -> Self {
        Self { circuit, dialect }
    }

    fn statement(&self, f: &mut fmt::Formatter<'_>, gate: &PlacedGate) -> fmt::Result {
        let lane = self.dialect.lane(gate.qubit);
        match gate.kind {
            // Bonds always reach the next lane down.
            GateKind::Entangle => writeln!(
                f,
                "{INDENT}{} {lane} -> {}",
                gate.kind.keyword(),
                self.dialect.lane(gate.qubit + 1)
            ),
            kind => writeln!(f, "{INDENT}{} {lane}", kind.keyword()),
        }
    }
}

impl fmt::Display for Genome<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "GENOME VisualCircuit {{")?;
        writeln!(f, "{INDENT}CHROMOSOME qubits: {}", self.circuit.lanes())?;
        writeln!(f)?;
        for gate in self.circuit.gates() {
            self.statement(f, gate)?;
        }
        writeln!(f, "}}")
    }
}

/// Renders a circuit as DNA-Lang text.
pub fn to_genome(circuit: &Circuit, dialect: Dialect) -> String {
    Genome::new(circuit, dialect).to_string()
}
