use tracing::debug;

use crate::config::ProductionConstants;
use crate::locale::Locale;
use crate::types::{ProcessPlan, ProductChoice, ProductionEstimate};

/// Builds the extraction checklist and product counts.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessAdvisor {
    production: ProductionConstants,
    locale: Locale,
}

impl ProcessAdvisor {
    pub fn new(production: ProductionConstants, locale: Locale) -> Self {
        Self { production, locale }
    }

    /// Scent beads that `yield_mg_total` of polyphenol is enough for.
    pub fn scent_beads(&self, yield_mg_total: f64) -> u64 {
        floor_count(yield_mg_total, self.production.mg_per_scent_bead)
    }

    pub fn residue_g(&self, leaf_mass_g: f64) -> f64 {
        leaf_mass_g * self.production.residue_ratio
    }

    pub fn bio_bricks(&self, residue_g: f64) -> u64 {
        floor_count(residue_g, self.production.grams_per_brick)
    }

    pub fn estimate_output(
        &self,
        leaf_mass_g: f64,
        product_choice: ProductChoice,
        yield_mg_total: f64,
    ) -> ProductionEstimate {
        let mut estimate = ProductionEstimate::default();

        if product_choice.includes_scent_bead() {
            estimate.scent_beads = Some(self.scent_beads(yield_mg_total));
        }

        if product_choice.includes_bio_brick() {
            let residue_g = self.residue_g(leaf_mass_g);
            estimate.residue_g = Some(residue_g);
            estimate.bio_bricks = Some(self.bio_bricks(residue_g));
        }

        estimate
    }

    /// Ordered checklist: preparation, solvent, soak, filtering, the product
    /// branch and a closing safety reminder.
    pub fn recommend(
        &self,
        leaf_mass_g: f64,
        product_choice: ProductChoice,
        yield_mg_total: f64,
        ethanol_pct: f64,
        time_h: f64,
        temp_c: f64,
    ) -> ProcessPlan {
        let locale = self.locale;
        let production = self.estimate_output(leaf_mass_g, product_choice, yield_mg_total);

        let mut steps: Vec<String> = locale
            .preparation_steps()
            .iter()
            .map(|step| step.to_string())
            .collect();
        steps.push(locale.solvent_step(ethanol_pct));
        steps.push(locale.soak_step(temp_c, time_h));
        steps.push(locale.filter_step().to_string());

        let beads = production.scent_beads.unwrap_or(0);
        let bricks = production.bio_bricks.unwrap_or(0);

        match product_choice {
            ProductChoice::ScentBead => {
                steps.push(locale.scent_bead_step(self.production.mg_per_scent_bead, beads));
                steps.push(locale.scent_bead_mixing().to_string());
            }
            ProductChoice::BioBrick => {
                // Residue is reported in whole grams, truncated.
                let residue_g = production.residue_g.unwrap_or(0.0).trunc().max(0.0) as u64;
                steps.push(locale.bio_brick_step(residue_g, bricks));
                steps.push(locale.bio_brick_mixing().to_string());
            }
            // The combined branch only summarizes counts; it carries no
            // mixing instructions for either product.
            ProductChoice::Both => {
                steps.push(locale.combined_step(beads, bricks));
            }
        }

        steps.push(locale.safety_step().to_string());

        debug!(
            product = %product_choice,
            steps = steps.len(),
            ?production,
            "Built process checklist"
        );

        ProcessPlan {
            product: product_choice,
            steps,
            production,
        }
    }
}

/// Checklist for the default production constants, in English.
pub fn recommend_process(
    leaf_mass_g: f64,
    product_choice: ProductChoice,
    yield_mg_total: f64,
    ethanol_pct: f64,
    time_h: f64,
    temp_c: f64,
) -> Vec<String> {
    ProcessAdvisor::default()
        .recommend(
            leaf_mass_g,
            product_choice,
            yield_mg_total,
            ethanol_pct,
            time_h,
            temp_c,
        )
        .steps
}

/// Product counts for the default production constants.
pub fn estimate_output(
    leaf_mass_g: f64,
    product_choice: ProductChoice,
    yield_mg_total: f64,
) -> ProductionEstimate {
    ProcessAdvisor::default().estimate_output(leaf_mass_g, product_choice, yield_mg_total)
}

/// Floor division; negative or NaN quotients saturate to zero.
fn floor_count(amount: f64, per_unit: f64) -> u64 {
    (amount / per_unit).floor() as u64
}
