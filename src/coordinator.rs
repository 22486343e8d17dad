use image::DynamicImage;

use crate::{
    config::{Configuration, ProductionConstants, ResampleFilter},
    error::AppError,
    locale::Locale,
    report::{ColorReport, Report},
    services::{ColorStrengthAnalyzer, ProcessAdvisor, YieldEstimator},
    types::{ColorScore, ExtractionParameters, ProductChoice},
};

/// Runs one interaction: validate, estimate yield, plan the process and
/// optionally score an extract photo.
pub struct Coordinator {
    configuration: Configuration,
    estimator: YieldEstimator,
    advisor: ProcessAdvisor,
    analyzer: ColorStrengthAnalyzer,
}

impl Coordinator {
    fn new(configuration: Configuration) -> Self {
        let advisor = ProcessAdvisor::new(configuration.production, configuration.locale);
        let analyzer = ColorStrengthAnalyzer::from_config(&configuration.analyzer);

        Self {
            configuration,
            estimator: YieldEstimator::new(),
            advisor,
            analyzer,
        }
    }

    pub fn run(
        &self,
        params: &ExtractionParameters,
        product: ProductChoice,
        image: Option<&DynamicImage>,
    ) -> Result<Report, AppError> {
        let color = image.map(|image| self.analyze(image));
        self.run_scored(params, product, color)
    }

    /// Scores a photo independently of the yield inputs.
    pub fn analyze(&self, image: &DynamicImage) -> ColorScore {
        self.analyzer.analyze(image)
    }

    pub fn color_report(&self, color: ColorScore) -> ColorReport {
        ColorReport {
            locale: self.configuration.locale,
            color,
        }
    }

    /// Like [`Coordinator::run`] with the photo already scored, so a score
    /// survives rejected yield inputs.
    pub fn run_scored(
        &self,
        params: &ExtractionParameters,
        product: ProductChoice,
        color: Option<ColorScore>,
    ) -> Result<Report, AppError> {
        params.validate(&self.configuration.bounds)?;

        let factors = self.estimator.factors(params);
        let estimate = self.estimator.estimate_from(params, &factors);
        let plan = self.advisor.recommend(
            params.leaf_mass_g,
            product,
            estimate.total_yield_mg,
            params.ethanol_pct,
            params.time_h,
            params.temp_c,
        );
        tracing::info!(
            total_yield_mg = estimate.total_yield_mg,
            yield_per_g_mg = estimate.yield_per_g_mg,
            product = %product,
            color = ?color.map(|c| c.label),
            "Estimate complete"
        );

        Ok(Report {
            locale: self.configuration.locale,
            parameters: *params,
            estimate,
            factors,
            plan,
            color,
        })
    }
}

pub struct CoordinatorBuilder {
    configuration: Configuration,
}

impl CoordinatorBuilder {
    pub fn new(configuration: Configuration) -> Self {
        Self { configuration }
    }

    // Sets the output language, this will override the default configuration.
    pub fn locale(mut self, locale: Locale) -> Self {
        self.configuration.locale = locale;
        self
    }

    // Adjusts the analyzer sample grid, this will override the default configuration.
    pub fn sample_size(mut self, sample_size: u32) -> Self {
        self.configuration.analyzer.sample_size = sample_size;
        self
    }

    // Sets the analyzer resampling filter, this will override the default configuration.
    pub fn resample_filter(mut self, filter: ResampleFilter) -> Self {
        self.configuration.analyzer.filter = filter;
        self
    }

    pub fn production(mut self, production: ProductionConstants) -> Self {
        self.configuration.production = production;
        self
    }

    pub fn build(self) -> Result<Coordinator, AppError> {
        self.configuration.validate()?;
        Ok(Coordinator::new(self.configuration))
    }
}
