use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::trace;

use super::gates::GateKind;
use super::placement::{GateId, PlacedGate};
use crate::error::{CircuitError, CircuitResult};

/// Fewest lanes a circuit may have.
pub const MIN_LANES: usize = 1;
/// Most lanes a circuit may have.
pub const MAX_LANES: usize = 8;
/// Lane count of the seeded designer layout.
pub const DEFAULT_LANES: usize = 4;

/// Floor of the coherence score, reached after a clear.
pub const COHERENCE_FLOOR: f64 = 0.0;
/// Ceiling of the coherence score reached through placements.
pub const COHERENCE_CEILING: f64 = 0.95;
/// Coherence at or above which the resonance lock reads sovereign.
pub const RESONANCE_THRESHOLD: f64 = 0.7734;

const SEEDED_COHERENCE: f64 = 0.72;
const MIN_VISIBLE_STEPS: usize = 12;
const STEP_PADDING: usize = 4;

/// Label of the manifold resonance indicator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ResonanceLock {
    Sovereign,
    Local,
}

impl fmt::Display for ResonanceLock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ResonanceLock::Sovereign => f.write_str("SOVEREIGN"),
            ResonanceLock::Local => f.write_str("LOCAL"),
        }
    }
}

/// Gate layout of the Visual Genome Designer.
///
/// A `Circuit` holds a lane count and the placed gates in insertion order.
/// Gates are addressed by `(qubit, step)` cells; several gates may share a
/// cell. No gate ever sits on a lane at or beyond `lanes`.
#[derive(Debug, Clone, PartialEq)]
pub struct Circuit {
    lanes: usize,
    gates: Vec<PlacedGate>,
    coherence: f64,
    next_id: u64,
}

impl Circuit {
    /// Creates a new empty circuit.
    ///
    /// # Arguments
    ///
    /// * `lanes` - The number of lanes, clamped to `[MIN_LANES, MAX_LANES]`.
    pub fn new(lanes: usize) -> Self {
        Self {
            lanes: clamp_lanes(lanes),
            gates: Vec::new(),
            coherence: COHERENCE_FLOOR,
            next_id: 1,
        }
    }

    /// Creates the layout the designer opens with: two Helix/Bond pairs on
    /// lanes 0 and 2 of a four-lane circuit.
    pub fn seeded() -> Self {
        let mut circuit = Self::new(DEFAULT_LANES);
        for (kind, qubit, step) in [
            (GateKind::Superposition, 0, 0),
            (GateKind::Entangle, 0, 1),
            (GateKind::Superposition, 2, 0),
            (GateKind::Entangle, 2, 1),
        ] {
            let gate = circuit.make_gate(kind, qubit, step, true);
            circuit.gates.push(gate);
        }
        circuit.coherence = SEEDED_COHERENCE;
        circuit
    }

    /// Number of lanes, always within `[MIN_LANES, MAX_LANES]`.
    pub fn lanes(&self) -> usize {
        self.lanes
    }

    /// Placed gates in insertion order.
    pub fn gates(&self) -> &[PlacedGate] {
        &self.gates
    }

    /// Number of placed gates.
    pub fn len(&self) -> usize {
        self.gates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.gates.is_empty()
    }

    /// Cosmetic complexity score shown on the designer badge.
    pub fn coherence(&self) -> f64 {
        self.coherence
    }

    /// Sovereign once coherence reaches `RESONANCE_THRESHOLD`.
    pub fn resonance_lock(&self) -> ResonanceLock {
        if self.coherence >= RESONANCE_THRESHOLD {
            ResonanceLock::Sovereign
        } else {
            ResonanceLock::Local
        }
    }

    /// Looks up a gate by id.
    pub fn gate(&self, id: &GateId) -> Option<&PlacedGate> {
        self.gates.iter().find(|g| &g.id == id)
    }

    /// Gates stacked on one cell, in insertion order.
    pub fn gates_at(&self, qubit: usize, step: usize) -> impl Iterator<Item = &PlacedGate> {
        self.gates.iter().filter(move |g| g.occupies(qubit, step))
    }

    /// `max(step) + 1` over all gates, or 0 for an empty circuit.
    pub fn depth(&self) -> usize {
        self.max_step().map_or(0, |s| s.saturating_add(1))
    }

    /// Number of columns the canvas renders.
    pub fn visible_steps(&self) -> usize {
        self.depth().saturating_add(STEP_PADDING).max(MIN_VISIBLE_STEPS)
    }

    /// Places a gate on a cell.
    ///
    /// Two-qubit kinds placed above the last lane record `control = qubit`.
    /// Overlapping placements are accepted.
    ///
    /// # Errors
    ///
    /// Returns [`CircuitError::InvalidPlacement`] if `qubit` is not a lane of
    /// this circuit, and [`CircuitError::StepOutOfRange`] if `step` is
    /// `usize::MAX`, which leaves no room for the column after it.
    pub fn place_gate(
        &mut self,
        kind: GateKind,
        qubit: usize,
        step: usize,
    ) -> CircuitResult<PlacedGate> {
        if qubit >= self.lanes {
            return Err(CircuitError::InvalidPlacement {
                qubit,
                lanes: self.lanes,
            });
        }
        if step == usize::MAX {
            return Err(CircuitError::StepOutOfRange { step });
        }

        let gate = self.make_gate(kind, qubit, step, true);
        self.coherence = (0.5 + self.gates.len() as f64 * 0.05).min(COHERENCE_CEILING);
        self.gates.push(gate.clone());
        trace!(id = %gate.id, %kind, qubit, step, "gate placed");
        Ok(gate)
    }

    /// Appends a gate on lane 0 one column past the current last step.
    ///
    /// Never records a control lane, and leaves the coherence score alone.
    /// The step saturates at `usize::MAX`.
    pub fn quick_add(&mut self, kind: GateKind) -> PlacedGate {
        let step = self.max_step().map_or(0, |s| s.saturating_add(1));
        let gate = self.make_gate(kind, 0, step, false);
        self.gates.push(gate.clone());
        trace!(id = %gate.id, %kind, step, "gate quick-added");
        gate
    }

    /// Removes a gate by id. Unknown ids are ignored.
    pub fn remove_gate(&mut self, id: &GateId) -> Option<PlacedGate> {
        let index = self.gates.iter().position(|g| &g.id == id)?;
        Some(self.gates.remove(index))
    }

    /// Removes every gate and drops the coherence score to its floor.
    pub fn clear(&mut self) {
        self.gates.clear();
        self.coherence = COHERENCE_FLOOR;
    }

    /// Sets the lane count, clamped to `[MIN_LANES, MAX_LANES]`, and prunes
    /// gates left on removed lanes. Returns the applied count.
    pub fn set_lane_count(&mut self, lanes: usize) -> usize {
        self.lanes = clamp_lanes(lanes);
        let bound = self.lanes;
        self.gates.retain(|g| g.qubit < bound);
        self.lanes
    }

    /// Adds one lane if below the maximum.
    pub fn add_lane(&mut self) -> bool {
        if self.lanes >= MAX_LANES {
            return false;
        }
        self.lanes += 1;
        true
    }

    /// Removes the last lane, with its gates, if above the minimum.
    pub fn remove_lane(&mut self) -> bool {
        if self.lanes <= MIN_LANES {
            return false;
        }
        self.set_lane_count(self.lanes - 1);
        true
    }

    /// Renders the circuit in the indexed export dialect.
    pub fn export_to_text(&self) -> String {
        crate::export::to_genome(self, crate::export::Dialect::Indexed)
    }

    fn max_step(&self) -> Option<usize> {
        self.gates.iter().map(|g| g.step).max()
    }

    fn make_gate(
        &mut self,
        kind: GateKind,
        qubit: usize,
        step: usize,
        bind_control: bool,
    ) -> PlacedGate {
        let id = GateId::from_counter(self.next_id);
        self.next_id += 1;
        // The control lane mirrors the target lane; export ignores it.
        let control =
            (bind_control && kind.is_two_qubit() && qubit + 1 < self.lanes).then_some(qubit);
        PlacedGate {
            id,
            kind,
            qubit,
            step,
            control,
        }
    }
}

impl Default for Circuit {
    fn default() -> Self {
        Self::seeded()
    }
}

fn clamp_lanes(lanes: usize) -> usize {
    lanes.clamp(MIN_LANES, MAX_LANES)
}
