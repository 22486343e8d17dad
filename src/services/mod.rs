pub mod image;
pub mod process_advisor;
pub mod yield_estimator;

pub use self::image::{analyze_image_strength, load_image, ColorStrengthAnalyzer};
pub use process_advisor::{estimate_output, recommend_process, ProcessAdvisor};
pub use yield_estimator::{estimate_yield, YieldEstimator};
