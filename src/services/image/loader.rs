use std::path::Path;

use image::DynamicImage;
use tracing::debug;

use crate::error::AppError;

/// Photo formats accepted for color analysis.
pub const SUPPORTED_EXTENSIONS: [&str; 3] = ["jpg", "jpeg", "png"];

pub fn is_supported(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| {
            SUPPORTED_EXTENSIONS
                .iter()
                .any(|supported| ext.eq_ignore_ascii_case(supported))
        })
        .unwrap_or(false)
}

/// Decodes an extract photo from disk.
pub fn load_image(path: &Path) -> Result<DynamicImage, AppError> {
    if !is_supported(path) {
        return Err(AppError::UnsupportedImage(path.display().to_string()));
    }

    let image = image::open(path)?;
    debug!(
        path = %path.display(),
        width = image.width(),
        height = image.height(),
        "Decoded image"
    );
    Ok(image)
}
