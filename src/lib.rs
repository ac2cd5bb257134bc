//! Visual Genome Designer circuit model.
//!
//! Gates from a fixed catalog are placed on a grid of lanes and steps, and
//! the layout is exported as DNA-Lang text.
//!
//! ```
//! use genome_designer::ir::{Circuit, GateKind};
//!
//! let mut circuit = Circuit::new(4);
//! circuit.place_gate(GateKind::Superposition, 0, 0).unwrap();
//! circuit.place_gate(GateKind::Entangle, 0, 1).unwrap();
//!
//! assert_eq!(circuit.depth(), 2);
//! assert!(circuit
//!     .export_to_text()
//!     .contains("BOND chromosome[0] -> chromosome[1]"));
//! ```

pub mod config;
pub mod error;
pub mod export;
pub mod ir;
pub mod script;
pub mod session;
pub mod summary;
pub mod topology;

pub use config::DesignerConfig;
pub use error::{CircuitError, ScriptError, SessionError};
pub use export::{to_genome, Dialect};
pub use ir::{Circuit, GateId, GateKind, PlacedGate};
pub use session::{DesignerSession, Outcome};
