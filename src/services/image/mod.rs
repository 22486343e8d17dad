pub mod color_strength_service;
pub mod loader;

pub use color_strength_service::*;
pub use loader::load_image;
