use serde::{Deserialize, Serialize};

use super::ProductChoice;

/// Expected product counts; a field is `None` when its product was not chosen.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct ProductionEstimate {
    pub scent_beads: Option<u64>,
    pub residue_g: Option<f64>,
    pub bio_bricks: Option<u64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProcessPlan {
    pub product: ProductChoice,
    pub steps: Vec<String>,
    pub production: ProductionEstimate,
}
