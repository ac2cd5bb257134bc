pub mod circuit;
pub mod gates;
pub mod placement;

// Re-export for easier access
pub use circuit::{Circuit, ResonanceLock, DEFAULT_LANES, MAX_LANES, MIN_LANES};
pub use gates::GateKind;
pub use placement::{GateId, PlacedGate};
