use thiserror::Error;

// Main Application Error Type

#[derive(Error, Debug)]
pub enum AppError {
    #[error("{field} must be between {min} and {max}, got {value}")]
    OutOfRange {
        field: &'static str,
        value: f64,
        min: f64,
        max: f64,
    },
    #[error("{field} must be at least {min}, got {value}")]
    BelowMinimum {
        field: &'static str,
        value: f64,
        min: f64,
    },
    #[error("Unknown product choice: {0} (expected scent-bead, bio-brick or both)")]
    UnknownProduct(String),
    #[error("Unknown locale: {0} (expected en or vi)")]
    UnknownLocale(String),
    #[error("Unsupported image file {0}: only jpg, jpeg and png are accepted")]
    UnsupportedImage(String),
    #[error("Image Error: {0}")]
    Image(#[from] image::ImageError),
    #[error("Configuration Error: {0}")]
    Config(#[from] config::ConfigError),
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
    #[error("Serialization Error: {0}")]
    Serialization(#[from] serde_json::Error),
    #[error("Failed to initialize logging: {0}")]
    Logging(String),
}
