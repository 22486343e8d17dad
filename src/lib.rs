pub mod config;
pub mod coordinator;
pub mod error;
pub mod locale;
pub mod report;
pub mod services;
pub mod types;

pub use config::Configuration;
pub use coordinator::{Coordinator, CoordinatorBuilder};
pub use error::AppError;
pub use locale::Locale;
pub use report::{ColorReport, Report, TextReport};

pub use services::{analyze_image_strength, estimate_yield, recommend_process};
pub use types::{
    ColorScore, ExtractionParameters, ProcessPlan, ProductChoice, ProductionEstimate,
    StrengthLabel, YieldEstimate, YieldFactors,
};
