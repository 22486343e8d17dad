use std::fmt;

use serde::Serialize;

use crate::error::AppError;
use crate::locale::Locale;
use crate::types::{
    ColorScore, ExtractionParameters, ProcessPlan, ProductChoice, YieldEstimate, YieldFactors,
};

/// Everything produced for one set of inputs.
#[derive(Debug, Clone, Serialize)]
pub struct Report {
    pub locale: Locale,
    pub parameters: ExtractionParameters,
    pub estimate: YieldEstimate,
    pub factors: YieldFactors,
    pub plan: ProcessPlan,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<ColorScore>,
}

impl Report {
    pub fn to_json(&self) -> Result<String, AppError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn text(&self) -> TextReport<'_> {
        TextReport(self)
    }
}

/// Color score on its own, printed when the yield inputs were rejected but the
/// photo could still be scored.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct ColorReport {
    pub locale: Locale,
    pub color: ColorScore,
}

impl ColorReport {
    pub fn to_json(&self) -> Result<String, AppError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

impl fmt::Display for ColorReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let h = self.locale.report_headings();
        writeln!(f, "{}", h.color)?;
        writeln!(
            f,
            "{}: {} (score={:.2})",
            h.strength,
            self.locale.strength_label(self.color.label),
            self.color.score
        )
    }
}

/// Whole values keep one decimal (`50.0`), others print at full precision.
fn quantity(value: f64) -> String {
    if value.is_finite() && value.fract() == 0.0 {
        format!("{value:.1}")
    } else {
        value.to_string()
    }
}

/// Plain-text rendering of a [`Report`] in its locale.
pub struct TextReport<'a>(&'a Report);

impl fmt::Display for TextReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let report = self.0;
        let h = report.locale.report_headings();

        writeln!(f, "{}", h.results)?;
        writeln!(
            f,
            "{}: {} mg GAE",
            h.total_yield,
            quantity(report.estimate.total_yield_mg)
        )?;
        writeln!(
            f,
            "{}: {} {}",
            h.yield_per_g,
            quantity(report.estimate.yield_per_g_mg),
            h.per_g_unit
        )?;

        writeln!(f)?;
        writeln!(f, "{}", h.checklist)?;
        for (i, step) in report.plan.steps.iter().enumerate() {
            writeln!(f, "{}. {}", i + 1, step)?;
        }

        writeln!(f)?;
        writeln!(f, "{}", h.expected_output)?;
        let production = &report.plan.production;
        match report.plan.product {
            ProductChoice::ScentBead => {
                writeln!(f, "≈ {} {}", production.scent_beads.unwrap_or(0), h.scent_beads)?;
            }
            ProductChoice::BioBrick => {
                writeln!(f, "≈ {} {}", production.bio_bricks.unwrap_or(0), h.bio_bricks)?;
            }
            ProductChoice::Both => {
                let lines = report.locale.combined_output_lines(
                    production.scent_beads.unwrap_or(0),
                    production.bio_bricks.unwrap_or(0),
                );
                for line in lines {
                    writeln!(f, "{line}")?;
                }
            }
        }

        if let Some(color) = report.color {
            writeln!(f)?;
            write!(
                f,
                "{}",
                ColorReport {
                    locale: report.locale,
                    color,
                }
            )?;
        }

        Ok(())
    }
}
