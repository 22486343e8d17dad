mod color_score;
mod extraction_parameters;
mod process_plan;
mod product_choice;
mod yield_estimate;

pub use color_score::{ColorScore, StrengthLabel};
pub use extraction_parameters::ExtractionParameters;
pub use process_plan::{ProcessPlan, ProductionEstimate};
pub use product_choice::ProductChoice;
pub use yield_estimate::{YieldEstimate, YieldFactors};
