//! Designer screen controller.
//!
//! [`DesignerSession`] owns everything the designer screen mutates: the
//! circuit, the palette drag, the selected gate and the clipboard. Every
//! interaction goes through one of its command methods.

use tracing::{debug, info};

use crate::config::DesignerConfig;
use crate::error::CircuitResult;
use crate::export::{self, Dialect};
use crate::ir::{Circuit, GateId, GateKind, PlacedGate};
use crate::script::Command;
use crate::summary::CircuitSummary;

/// Result of applying a single [`Command`].
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    /// A gate was added.
    Placed(PlacedGate),
    /// A gate was removed.
    Erased(PlacedGate),
    /// Lane count after the command.
    Lanes(usize),
    /// Exported text.
    Exported(String),
    /// The command changed nothing.
    Unchanged,
    /// The command changed state without producing a value.
    Done,
}

#[derive(Debug, Clone)]
pub struct DesignerSession {
    circuit: Circuit,
    dragging: Option<GateKind>,
    selected: Option<GateId>,
    clipboard: Option<String>,
    dialect: Dialect,
}

impl DesignerSession {
    pub fn new(config: &DesignerConfig) -> Self {
        let mut circuit = if config.seeded {
            Circuit::seeded()
        } else {
            Circuit::new(config.lanes)
        };
        if config.seeded && config.lanes != circuit.lanes() {
            circuit.set_lane_count(config.lanes);
        }

        Self {
            circuit,
            dragging: None,
            selected: None,
            clipboard: None,
            dialect: config.dialect,
        }
    }

    /// Wraps an existing circuit with the default dialect.
    pub fn with_circuit(circuit: Circuit) -> Self {
        Self {
            circuit,
            dragging: None,
            selected: None,
            clipboard: None,
            dialect: Dialect::default(),
        }
    }

    pub fn circuit(&self) -> &Circuit {
        &self.circuit
    }

    pub fn dialect(&self) -> Dialect {
        self.dialect
    }

    pub fn set_dialect(&mut self, dialect: Dialect) {
        self.dialect = dialect;
    }

    pub fn dragging(&self) -> Option<GateKind> {
        self.dragging
    }

    pub fn selected(&self) -> Option<&GateId> {
        self.selected.as_ref()
    }

    /// The selected gate, if it still exists.
    pub fn selected_gate(&self) -> Option<&PlacedGate> {
        self.selected.as_ref().and_then(|id| self.circuit.gate(id))
    }

    /// Text of the last export.
    pub fn clipboard(&self) -> Option<&str> {
        self.clipboard.as_deref()
    }

    pub fn begin_drag(&mut self, kind: GateKind) {
        self.dragging = Some(kind);
    }

    pub fn cancel_drag(&mut self) {
        self.dragging = None;
    }

    /// Releases the dragged gate on a cell. Without an active drag nothing
    /// happens.
    pub fn drop_at(&mut self, qubit: usize, step: usize) -> CircuitResult<Option<PlacedGate>> {
        let Some(kind) = self.dragging else {
            return Ok(None);
        };
        let gate = self.circuit.place_gate(kind, qubit, step)?;
        self.dragging = None;
        debug!(id = %gate.id, %kind, qubit, step, "codon dropped");
        Ok(Some(gate))
    }

    /// Places a gate directly, as a completed drag-and-drop.
    pub fn place(&mut self, kind: GateKind, qubit: usize, step: usize) -> CircuitResult<PlacedGate> {
        let gate = self.circuit.place_gate(kind, qubit, step)?;
        debug!(id = %gate.id, %kind, qubit, step, "codon placed");
        Ok(gate)
    }

    pub fn quick_add(&mut self, kind: GateKind) -> PlacedGate {
        let gate = self.circuit.quick_add(kind);
        debug!(id = %gate.id, %kind, step = gate.step, "codon quick-added");
        gate
    }

    /// Selects an existing gate. Unknown ids leave the selection untouched.
    pub fn select(&mut self, id: &GateId) -> bool {
        if self.circuit.gate(id).is_none() {
            return false;
        }
        self.selected = Some(id.clone());
        true
    }

    pub fn deselect(&mut self) {
        self.selected = None;
    }

    /// Removes a gate (double-click). Clears the selection when it pointed at
    /// the removed gate.
    pub fn erase(&mut self, id: &GateId) -> Option<PlacedGate> {
        let removed = self.circuit.remove_gate(id)?;
        if self.selected.as_ref() == Some(id) {
            self.selected = None;
        }
        debug!(id = %removed.id, "codon erased");
        Some(removed)
    }

    pub fn erase_selected(&mut self) -> Option<PlacedGate> {
        let id = self.selected.clone()?;
        self.erase(&id)
    }

    pub fn clear(&mut self) {
        self.circuit.clear();
        self.selected = None;
        info!("circuit cleared");
    }

    pub fn add_lane(&mut self) -> bool {
        let changed = self.circuit.add_lane();
        if changed {
            info!(lanes = self.circuit.lanes(), "lane added");
        }
        changed
    }

    pub fn remove_lane(&mut self) -> bool {
        let changed = self.circuit.remove_lane();
        if changed {
            self.drop_stale_selection();
            info!(lanes = self.circuit.lanes(), "lane removed");
        }
        changed
    }

    pub fn set_lanes(&mut self, lanes: usize) -> usize {
        let applied = self.circuit.set_lane_count(lanes);
        self.drop_stale_selection();
        info!(requested = lanes, lanes = applied, "lane count set");
        applied
    }

    /// Renders the circuit in the session dialect and copies it to the
    /// clipboard.
    pub fn export(&mut self) -> &str {
        let text = export::to_genome(&self.circuit, self.dialect);
        info!(dialect = %self.dialect, codons = self.circuit.len(), "circuit exported");
        self.clipboard.insert(text).as_str()
    }

    pub fn summary(&self) -> CircuitSummary {
        CircuitSummary::from_circuit(&self.circuit)
    }

    /// Applies one scripted command.
    pub fn apply(&mut self, command: &Command) -> CircuitResult<Outcome> {
        let outcome = match command {
            Command::SetLanes(n) => Outcome::Lanes(self.set_lanes(*n)),
            Command::AddLane => lane_outcome(self.add_lane(), self.circuit.lanes()),
            Command::RemoveLane => lane_outcome(self.remove_lane(), self.circuit.lanes()),
            Command::Place { kind, qubit, step } => {
                Outcome::Placed(self.place(*kind, *qubit, *step)?)
            }
            Command::Drag(kind) => {
                self.begin_drag(*kind);
                Outcome::Done
            }
            Command::Drop { qubit, step } => match self.drop_at(*qubit, *step)? {
                Some(gate) => Outcome::Placed(gate),
                None => Outcome::Unchanged,
            },
            Command::QuickAdd(kind) => Outcome::Placed(self.quick_add(*kind)),
            Command::Select(id) => {
                if self.select(id) {
                    Outcome::Done
                } else {
                    Outcome::Unchanged
                }
            }
            Command::Erase(id) => {
                let removed = match id {
                    Some(id) => self.erase(id),
                    None => self.erase_selected(),
                };
                removed.map_or(Outcome::Unchanged, Outcome::Erased)
            }
            Command::Clear => {
                self.clear();
                Outcome::Done
            }
            Command::Export(dialect) => {
                if let Some(dialect) = dialect {
                    self.dialect = *dialect;
                }
                Outcome::Exported(self.export().to_string())
            }
        };
        Ok(outcome)
    }

    fn drop_stale_selection(&mut self) {
        if self.selected.is_some() && self.selected_gate().is_none() {
            self.selected = None;
        }
    }
}

impl Default for DesignerSession {
    fn default() -> Self {
        Self::new(&DesignerConfig::default())
    }
}

fn lane_outcome(changed: bool, lanes: usize) -> Outcome {
    if changed {
        Outcome::Lanes(lanes)
    } else {
        Outcome::Unchanged
    }
}
