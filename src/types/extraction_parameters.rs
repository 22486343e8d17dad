use serde::{Deserialize, Serialize};

use crate::config::{InputBounds, ValueRange};
use crate::error::AppError;

/// User-entered extraction settings.
///
/// The estimators accept any values; [`ExtractionParameters::validate`] is the
/// caller-side check against the documented input ranges.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ExtractionParameters {
    pub leaf_mass_g: f64,
    pub ethanol_pct: f64,
    pub time_h: f64,
    pub temp_c: f64,
    pub cut_size_mm: f64,
}

impl Default for ExtractionParameters {
    fn default() -> Self {
        Self {
            leaf_mass_g: 2000.0,
            ethanol_pct: 70.0,
            time_h: 24.0,
            temp_c: 65.0,
            cut_size_mm: 5.0,
        }
    }
}

impl ExtractionParameters {
    pub fn new(
        leaf_mass_g: f64,
        ethanol_pct: f64,
        time_h: f64,
        temp_c: f64,
        cut_size_mm: f64,
    ) -> Self {
        Self {
            leaf_mass_g,
            ethanol_pct,
            time_h,
            temp_c,
            cut_size_mm,
        }
    }

    /// Reports the first field outside `bounds`, in declaration order.
    pub fn validate(&self, bounds: &InputBounds) -> Result<(), AppError> {
        if !(self.leaf_mass_g >= bounds.min_leaf_mass_g) {
            return Err(AppError::BelowMinimum {
                field: "leaf_mass_g",
                value: self.leaf_mass_g,
                min: bounds.min_leaf_mass_g,
            });
        }

        check_range("ethanol_pct", self.ethanol_pct, bounds.ethanol_pct)?;
        check_range("time_h", self.time_h, bounds.time_h)?;
        check_range("temp_c", self.temp_c, bounds.temp_c)?;
        check_range("cut_size_mm", self.cut_size_mm, bounds.cut_size_mm)?;
        Ok(())
    }
}

fn check_range(field: &'static str, value: f64, range: ValueRange) -> Result<(), AppError> {
    if range.contains(value) {
        Ok(())
    } else {
        Err(AppError::OutOfRange {
            field,
            value,
            min: range.min,
            max: range.max,
        })
    }
}
