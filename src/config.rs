use serde::{Deserialize, Serialize};

use crate::export::Dialect;
use crate::ir::DEFAULT_LANES;

/// Startup settings of a designer session.
///
/// Every field has a default, so a JSON config may name only what it
/// overrides:
///
/// ```
/// use genome_designer::config::DesignerConfig;
/// let config = DesignerConfig::from_json(r#"{ "lanes": 6 }"#).unwrap();
/// assert_eq!(config.lanes, 6);
/// assert!(config.seeded);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DesignerConfig {
    /// Initial lane count, clamped by the circuit.
    pub lanes: usize,
    /// Start from the two Helix/Bond pairs instead of an empty grid.
    pub seeded: bool,
    /// Export dialect.
    pub dialect: Dialect,
}

impl DesignerConfig {
    pub fn from_json(input: &str) -> serde_json::Result<Self> {
        serde_json::from_str(input)
    }
}

impl Default for DesignerConfig {
    fn default() -> Self {
        Self {
            lanes: DEFAULT_LANES,
            seeded: true,
            dialect: Dialect::Indexed,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_json() {
        let config = DesignerConfig::from_json(r#"{ "seeded": false, "dialect": "bare" }"#).unwrap();
        assert_eq!(config.lanes, DEFAULT_LANES);
        assert!(!config.seeded);
        assert_eq!(config.dialect, Dialect::Bare);
    }

    #[test]
    fn test_bad_dialect_rejected() {
        assert!(DesignerConfig::from_json(r#"{ "dialect": "qasm" }"#).is_err());
    }
}
