use std::path::Path;

use config::{Config, Environment, File};
use image::imageops::FilterType;
use serde::Deserialize;

use crate::error::AppError;
use crate::locale::Locale;

/// Prefix for environment overrides, e.g. `BANANALEAF_LOGGING__LEVEL=debug`.
pub const ENV_PREFIX: &str = "BANANALEAF";

pub const DEFAULT_CONFIG_FILE: &str = "bananaleaf.toml";

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Configuration {
    pub locale: Locale,
    pub logging: LoggingConfig,
    pub bounds: InputBounds,
    pub analyzer: AnalyzerConfig,
    pub production: ProductionConstants,
}

impl Default for Configuration {
    fn default() -> Self {
        Self {
            locale: Locale::En,
            logging: LoggingConfig::default(),
            bounds: InputBounds::default(),
            analyzer: AnalyzerConfig::default(),
            production: ProductionConstants::default(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct ValueRange {
    pub min: f64,
    pub max: f64,
}

impl ValueRange {
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    /// NaN is never contained.
    pub fn contains(&self, value: f64) -> bool {
        value >= self.min && value <= self.max
    }
}

/// Accepted input ranges, checked by the shell before calling the estimators.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct InputBounds {
    pub min_leaf_mass_g: f64,
    pub ethanol_pct: ValueRange,
    pub time_h: ValueRange,
    pub temp_c: ValueRange,
    pub cut_size_mm: ValueRange,
}

impl Default for InputBounds {
    fn default() -> Self {
        Self {
            min_leaf_mass_g: 10.0,
            ethanol_pct: ValueRange::new(30.0, 90.0),
            time_h: ValueRange::new(1.0, 72.0),
            temp_c: ValueRange::new(20.0, 90.0),
            cut_size_mm: ValueRange::new(1.0, 20.0),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResampleFilter {
    Nearest,
    Triangle,
    CatmullRom,
    Gaussian,
    Lanczos3,
}

impl From<ResampleFilter> for FilterType {
    fn from(filter: ResampleFilter) -> Self {
        match filter {
            ResampleFilter::Nearest => FilterType::Nearest,
            ResampleFilter::Triangle => FilterType::Triangle,
            ResampleFilter::CatmullRom => FilterType::CatmullRom,
            ResampleFilter::Gaussian => FilterType::Gaussian,
            ResampleFilter::Lanczos3 => FilterType::Lanczos3,
        }
    }
}

/// Tunables for the extract color strength analyzer
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AnalyzerConfig {
    pub sample_size: u32,
    pub filter: ResampleFilter,
    pub strong_threshold: f64,
    pub medium_threshold: f64,
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self {
            sample_size: 200,
            filter: ResampleFilter::CatmullRom,
            strong_threshold: 0.35,
            medium_threshold: 0.20,
        }
    }
}

/// How much material one unit of each product consumes.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default)]
pub struct ProductionConstants {
    /// Polyphenol per scent bead, mg GAE.
    pub mg_per_scent_bead: f64,
    /// Fraction of leaf mass left as residue after extraction.
    pub residue_ratio: f64,
    /// Residue per mini bio-brick, grams.
    pub grams_per_brick: f64,
}

impl Default for ProductionConstants {
    fn default() -> Self {
        Self {
            mg_per_scent_bead: 20.0,
            residue_ratio: 0.25,
            grams_per_brick: 50.0,
        }
    }
}

/// `BANANALEAF_` then `__` between nested keys: `BANANALEAF_ANALYZER__SAMPLE_SIZE`.
fn environment() -> Environment {
    Environment::with_prefix(ENV_PREFIX)
        .prefix_separator("_")
        .separator("__")
        .try_parsing(true)
}

impl Configuration {
    /// Layers the TOML file at `path` (skipped when absent and not `required`)
    /// and `BANANALEAF_*` environment variables over the defaults.
    pub fn load(path: &Path, required: bool) -> Result<Self, AppError> {
        Self::load_with_env(path, required, environment())
    }

    fn load_with_env(path: &Path, required: bool, env: Environment) -> Result<Self, AppError> {
        let settings = Config::builder()
            .add_source(File::from(path).required(required))
            .add_source(env)
            .build()?;

        let configuration: Configuration = settings.try_deserialize()?;
        configuration.validate()?;
        Ok(configuration)
    }

    pub fn validate(&self) -> Result<(), AppError> {
        let invalid = |msg: &str| Err(AppError::InvalidConfig(msg.to_string()));

        if self.analyzer.sample_size == 0 {
            return invalid("analyzer.sample_size must be greater than 0");
        }

        if self.analyzer.medium_threshold > self.analyzer.strong_threshold {
            return invalid("analyzer.medium_threshold must not exceed analyzer.strong_threshold");
        }

        if !(self.production.mg_per_scent_bead > 0.0) {
            return invalid("production.mg_per_scent_bead must be positive");
        }

        if !(self.production.grams_per_brick > 0.0) {
            return invalid("production.grams_per_brick must be positive");
        }

        if !(self.production.residue_ratio >= 0.0) {
            return invalid("production.residue_ratio must not be negative");
        }

        let ranges = [
            ("bounds.ethanol_pct", self.bounds.ethanol_pct),
            ("bounds.time_h", self.bounds.time_h),
            ("bounds.temp_c", self.bounds.temp_c),
            ("bounds.cut_size_mm", self.bounds.cut_size_mm),
        ];
        for (name, range) in ranges {
            if !(range.min <= range.max) {
                return Err(AppError::InvalidConfig(format!(
                    "{name}: min must not exceed max"
                )));
            }
        }

        Ok(())
    }
}
