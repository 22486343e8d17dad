use serde::{Deserialize, Serialize};

/// Estimated polyphenol yield in mg GAE.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct YieldEstimate {
    pub total_yield_mg: f64,
    pub yield_per_g_mg: f64,
}

/// Multipliers applied to the base yield, kept for diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct YieldFactors {
    pub ethanol_effect: f64,
    pub time_effect: f64,
    pub temp_effect: f64,
    pub cut_effect: f64,
}
