use serde::{Deserialize, Serialize};

/// Tunables for a scoring run.
///
/// Every field has a default, so a JSON config file only needs the keys it changes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoreConfig {
    /// District subgraphs with more vertices than this use the log-determinant
    /// path for spanning trees; smaller ones use the exact determinant.
    pub log_det_threshold: usize,

    /// Check that neighboring precincts record the same shared arc length.
    pub check_arcs: bool,

    /// Absolute tolerance for the arc symmetry check.
    pub arc_tolerance: f64,

    /// Decimal places kept for scalar scorecard metrics.
    pub precision: u32,

    /// Seed for the point shuffle in the enclosing-circle solver.
    pub seed: u64,

    /// Worker threads for ensemble scoring (rayon's default when unset).
    pub threads: Option<usize>,
}

impl Default for ScoreConfig {
    fn default() -> Self {
        Self {
            log_det_threshold: 32,
            check_arcs: true,
            arc_tolerance: 1e-4,
            precision: 4,
            seed: 0x5eed_d157,
            threads: None,
        }
    }
}

impl ScoreConfig {
    /// Round a scalar metric to the configured precision.
    pub fn round(&self, value: f64) -> f64 {
        let scale = 10f64.powi(self.precision as i32);
        (value * scale).round() / scale
    }
}
