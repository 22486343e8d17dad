use image::imageops::{self, FilterType};
use image::{DynamicImage, RgbImage};
use tracing::debug;

use crate::config::AnalyzerConfig;
use crate::types::{ColorScore, StrengthLabel};

/// Keeps saturation finite on pure black pixels.
const SATURATION_EPSILON: f64 = 1e-9;
const SATURATION_WEIGHT: f64 = 0.7;
const DARKNESS_WEIGHT: f64 = 0.3;

/// Scores how concentrated an extract looks from the color of its photo.
///
/// The photo is resampled to a fixed square grid, then per-pixel HSV
/// saturation and value are averaged. Saturated, darker extracts score higher.
#[derive(Debug, Clone)]
pub struct ColorStrengthAnalyzer {
    sample_size: u32,
    filter: FilterType,
    strong_threshold: f64,
    medium_threshold: f64,
}

impl Default for ColorStrengthAnalyzer {
    fn default() -> Self {
        Self::from_config(&AnalyzerConfig::default())
    }
}

impl ColorStrengthAnalyzer {
    pub fn from_config(config: &AnalyzerConfig) -> Self {
        Self {
            sample_size: config.sample_size,
            filter: config.filter.into(),
            strong_threshold: config.strong_threshold,
            medium_threshold: config.medium_threshold,
        }
    }

    pub fn analyze(&self, image: &DynamicImage) -> ColorScore {
        let rgb = image.to_rgb8();
        let sample = self.sample_grid(&rgb);
        let (saturation, value) = mean_saturation_value(&sample);

        let score = SATURATION_WEIGHT * saturation + DARKNESS_WEIGHT * (1.0 - value);
        let label = StrengthLabel::classify(score, self.strong_threshold, self.medium_threshold);

        debug!(
            width = rgb.width(),
            height = rgb.height(),
            saturation,
            value,
            score,
            ?label,
            "Analyzed extract color"
        );

        ColorScore {
            label,
            score,
            saturation,
            value,
        }
    }

    /// Resamples to `sample_size` x `sample_size`, ignoring aspect ratio.
    fn sample_grid(&self, rgb: &RgbImage) -> RgbImage {
        if rgb.width() == 0 || rgb.height() == 0 {
            return RgbImage::new(0, 0);
        }
        imageops::resize(rgb, self.sample_size, self.sample_size, self.filter)
    }
}

/// Returns `(label, score)` using the default analyzer settings.
pub fn analyze_image_strength(image: &DynamicImage) -> (StrengthLabel, f64) {
    let result = ColorStrengthAnalyzer::default().analyze(image);
    (result.label, result.score)
}

/// Mean HSV saturation and value over all pixels, skipping NaN terms.
/// An image with no usable pixels yields NaN for both.
fn mean_saturation_value(rgb: &RgbImage) -> (f64, f64) {
    let mut saturation = NanMean::default();
    let mut value = NanMean::default();

    for pixel in rgb.pixels() {
        let [r, g, b] = pixel.0.map(|c| c as f64 / 255.0);
        let maxc = r.max(g).max(b);
        let minc = r.min(g).min(b);

        value.push(maxc);
        saturation.push((maxc - minc) / (maxc + SATURATION_EPSILON));
    }

    (saturation.mean(), value.mean())
}

#[derive(Default)]
struct NanMean {
    sum: f64,
    count: usize,
}

impl NanMean {
    fn push(&mut self, x: f64) {
        if !x.is_nan() {
            self.sum += x;
            self.count += 1;
        }
    }

    fn mean(&self) -> f64 {
        if self.count == 0 {
            f64::NAN
        } else {
            self.sum / self.count as f64
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ResampleFilter;
    use image::{ImageBuffer, Rgb};

    fn solid(width: u32, height: u32, color: [u8; 3]) -> DynamicImage {
        DynamicImage::ImageRgb8(ImageBuffer::<Rgb<u8>, Vec<u8>>::from_pixel(
            width,
            height,
            Rgb(color),
        ))
    }

    #[test]
    fn pure_red_is_strong() {
        let result = ColorStrengthAnalyzer::default().analyze(&solid(64, 64, [255, 0, 0]));
        assert!((result.saturation - 1.0).abs() < 1e-6);
        assert!((result.value - 1.0).abs() < 1e-6);
        assert!((result.score - 0.7).abs() < 1e-6);
        assert_eq!(result.label, StrengthLabel::Strong);
    }

    #[test]
    fn mid_gray_is_weak() {
        let (label, score) = analyze_image_strength(&solid(50, 50, [128, 128, 128]));
        let expected = 0.3 * (1.0 - 128.0 / 255.0);
        assert!((score - expected).abs() < 1e-6, "score = {score}");
        assert!((score - 0.15).abs() < 0.01);
        assert_eq!(label, StrengthLabel::Weak);
    }

    #[test]
    fn pale_tint_is_medium() {
        let (label, score) = analyze_image_strength(&solid(40, 40, [200, 150, 150]));
        let expected = 0.7 * 0.25 + 0.3 * (1.0 - 200.0 / 255.0);
        assert!((score - expected).abs() < 1e-6, "score = {score}");
        assert_eq!(label, StrengthLabel::Medium);
    }

    #[test]
    fn black_does_not_divide_by_zero() {
        let result = ColorStrengthAnalyzer::default().analyze(&solid(10, 10, [0, 0, 0]));
        assert_eq!(result.saturation, 0.0);
        assert_eq!(result.value, 0.0);
        assert!((result.score - 0.3).abs() < 1e-12);
        assert_eq!(result.label, StrengthLabel::Medium);
    }

    #[test]
    fn white_scores_zero() {
        let (label, score) = analyze_image_strength(&solid(10, 10, [255, 255, 255]));
        assert!(score.abs() < 1e-12);
        assert_eq!(label, StrengthLabel::Weak);
    }

    #[test]
    fn aspect_ratio_does_not_matter_for_uniform_images() {
        let square = analyze_image_strength(&solid(200, 200, [30, 90, 10]));
        let wide = analyze_image_strength(&solid(600, 40, [30, 90, 10]));
        assert_eq!(square.0, wide.0);
        assert!((square.1 - wide.1).abs() < 1e-6);
    }

    #[test]
    fn half_saturated_grid_sits_on_strong_boundary() {
        let image = DynamicImage::ImageRgb8(ImageBuffer::from_fn(200, 200, |x, _| {
            if x < 100 {
                Rgb([255u8, 0, 0])
            } else {
                Rgb([255u8, 255, 255])
            }
        }));

        let result = ColorStrengthAnalyzer::default().analyze(&image);
        assert!((result.saturation - 0.5).abs() < 1e-6);
        assert!((result.score - 0.35).abs() < 1e-6);
        // 0.35 itself is not Strong.
        assert_eq!(result.label, StrengthLabel::Medium);
    }

    #[test]
    fn rgba_and_luma_inputs_are_converted() {
        let rgba = DynamicImage::ImageRgba8(ImageBuffer::from_pixel(
            20,
            20,
            image::Rgba([255u8, 0, 0, 10]),
        ));
        let (label, _) = analyze_image_strength(&rgba);
        assert_eq!(label, StrengthLabel::Strong);

        let luma = DynamicImage::ImageLuma8(ImageBuffer::from_pixel(20, 20, image::Luma([128u8])));
        let (label, score) = analyze_image_strength(&luma);
        assert_eq!(label, StrengthLabel::Weak);
        assert!((score - 0.3 * (1.0 - 128.0 / 255.0)).abs() < 1e-6);
    }

    #[test]
    fn empty_image_scores_nan_and_is_weak() {
        let (label, score) = analyze_image_strength(&solid(0, 0, [0, 0, 0]));
        assert!(score.is_nan());
        assert_eq!(label, StrengthLabel::Weak);
    }

    #[test]
    fn custom_thresholds_and_filter() {
        let analyzer = ColorStrengthAnalyzer::from_config(&AnalyzerConfig {
            sample_size: 16,
            filter: ResampleFilter::Nearest,
            strong_threshold: 0.8,
            medium_threshold: 0.6,
        });
        let result = analyzer.analyze(&solid(64, 64, [255, 0, 0]));
        assert_eq!(result.label, StrengthLabel::Medium);
    }

    #[test]
    fn repeated_analysis_is_identical() {
        let image = DynamicImage::ImageRgb8(ImageBuffer::from_fn(97, 61, |x, y| {
            Rgb([(x * 2) as u8, (y * 3) as u8, ((x + y) % 256) as u8])
        }));
        let first = analyze_image_strength(&image);
        let second = analyze_image_strength(&image);
        assert_eq!(first.0, second.0);
        assert_eq!(first.1.to_bits(), second.1.to_bits());
    }
}
