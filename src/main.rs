use std::path::{Path, PathBuf};
use std::str::FromStr;

use bananaleaf::config::{Configuration, DEFAULT_CONFIG_FILE};
use bananaleaf::services::load_image;
use bananaleaf::{AppError, CoordinatorBuilder, ExtractionParameters, Locale, ProductChoice};
use clap::Parser;
use tracing::Level;

#[derive(Parser)]
#[command(name = "bananaleaf")]
#[command(about = "Banana-leaf polyphenol extraction estimator", long_about = None)]
struct Cli {
    /// Banana leaf mass in grams
    #[arg(long, default_value_t = 2000.0)]
    leaf_mass: f64,

    /// Ethanol concentration in percent
    #[arg(long, default_value_t = 70.0)]
    ethanol: f64,

    /// Extraction time in hours
    #[arg(long, default_value_t = 24.0)]
    time: f64,

    /// Extraction temperature in °C
    #[arg(long, default_value_t = 65.0)]
    temp: f64,

    /// Leaf cut size in millimetres
    #[arg(long, default_value_t = 5.0)]
    cut_size: f64,

    /// Desired product: scent-bead, bio-brick or both
    #[arg(long, default_value = "scent-bead")]
    product: ProductChoice,

    /// Photo of the extract (jpg, jpeg or png) to score for color strength
    #[arg(long)]
    image: Option<PathBuf>,

    /// Configuration file; the default location is optional
    #[arg(long)]
    config: Option<PathBuf>,

    /// Output language (en or vi), overrides the configuration
    #[arg(long)]
    locale: Option<Locale>,

    /// Print the report as JSON
    #[arg(long)]
    json: bool,
}

fn init_logging(level: &str) -> Result<(), AppError> {
    let level = Level::from_str(level).map_err(|e| AppError::Logging(e.to_string()))?;
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|e| AppError::Logging(e.to_string()))
}

fn run(cli: Cli, configuration: Configuration) -> Result<(), AppError> {
    let mut builder = CoordinatorBuilder::new(configuration);
    if let Some(locale) = cli.locale {
        builder = builder.locale(locale);
    }
    let coordinator = builder.build()?;

    let params = ExtractionParameters::new(
        cli.leaf_mass,
        cli.ethanol,
        cli.time,
        cli.temp,
        cli.cut_size,
    );
    let image = cli.image.as_deref().map(load_image).transpose()?;
    let color = image.as_ref().map(|image| coordinator.analyze(image));

    let report = match coordinator.run_scored(&params, cli.product, color) {
        Ok(report) => report,
        Err(e) => {
            // The photo score does not depend on the rejected inputs.
            if let Some(color) = color {
                let color_report = coordinator.color_report(color);
                if cli.json {
                    println!("{}", color_report.to_json()?);
                } else {
                    print!("{color_report}");
                }
            }
            return Err(e);
        }
    };

    if cli.json {
        println!("{}", report.to_json()?);
    } else {
        print!("{}", report.text());
    }
    Ok(())
}

fn main() -> Result<(), AppError> {
    let cli = Cli::parse();

    let configuration = match &cli.config {
        Some(path) => Configuration::load(path, true)?,
        None => Configuration::load(Path::new(DEFAULT_CONFIG_FILE), false)?,
    };
    init_logging(&configuration.logging.level)?;

    run(cli, configuration).inspect_err(|e| tracing::error!("{}", e))
}
