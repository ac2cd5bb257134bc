use std::fmt;

use serde::{Deserialize, Serialize};

use super::gates::GateKind;

/// Identifier of a placed gate, unique within one circuit.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GateId(String);

impl GateId {
    /// Builds the `g<n>` token handed out by a circuit's id counter.
    pub(crate) fn from_counter(n: u64) -> Self {
        Self(format!("g{n}"))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for GateId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for GateId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl fmt::Display for GateId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A gate marker placed on one cell of the designer grid.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlacedGate {
    /// Unique identifier.
    pub id: GateId,
    /// Catalog entry.
    pub kind: GateKind,
    /// Lane index.
    pub qubit: usize,
    /// Column index.
    pub step: usize,
    /// Control lane. Only set for two-qubit kinds, and then equal to `qubit`.
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub control: Option<usize>,
}

impl PlacedGate {
    /// Whether the gate sits on the given cell.
    pub fn occupies(&self, qubit: usize, step: usize) -> bool {
        self.qubit == qubit && self.step == step
    }
}
