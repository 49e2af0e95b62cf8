// src/services/image_analyzer.rs
use crate::errors::GlowcastError;

pub struct ImageAnalyzer;

impl ImageAnalyzer {
    pub fn new() -> Self {
        Self
    }

    /// Mean grayscale luminance over the full pixel grid, rounded to two
    /// decimal places. Every pixel contributes equally; no sampling, no
    /// region of interest.
    pub fn analyze(&self, data: &[u8]) -> Result<f64, GlowcastError> {
        let img = image::load_from_memory(data)
            .map_err(|e| GlowcastError::ImageProcessing(e.to_string()))?;

        let gray = img.to_luma8();
        let (width, height) = gray.dimensions();
        let sum: u64 = gray.pixels().map(|p| u64::from(p.0[0])).sum();
        let mean = sum as f64 / (u64::from(width) * u64::from(height)) as f64;

        Ok((mean * 100.0).round() / 100.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{ImageOutputFormat, RgbImage};

    fn solid_png(width: u32, height: u32, value: u8) -> Vec<u8> {
        let img = RgbImage::from_pixel(width, height, image::Rgb([value, value, value]));
        let mut out = Vec::new();
        image::DynamicImage::ImageRgb8(img)
            .write_to(&mut std::io::Cursor::new(&mut out), ImageOutputFormat::Png)
            .unwrap();
        out
    }

    #[test]
    fn solid_color_score_is_exact() {
        let analyzer = ImageAnalyzer::new();
        for value in [0u8, 100, 128, 200, 255] {
            let score = analyzer.analyze(&solid_png(40, 30, value)).unwrap();
            assert_eq!(score, f64::from(value), "value {value}");
        }
    }

    #[test]
    fn mean_over_mixed_pixels() {
        // Half black, half white: mean is 127.5 exactly.
        let mut img = RgbImage::new(2, 1);
        img.put_pixel(0, 0, image::Rgb([0, 0, 0]));
        img.put_pixel(1, 0, image::Rgb([255, 255, 255]));
        let mut out = Vec::new();
        image::DynamicImage::ImageRgb8(img)
            .write_to(&mut std::io::Cursor::new(&mut out), ImageOutputFormat::Png)
            .unwrap();

        let score = ImageAnalyzer::new().analyze(&out).unwrap();
        assert_eq!(score, 127.5);
    }

    #[test]
    fn undecodable_bytes_fail_with_decoder_message() {
        let err = ImageAnalyzer::new().analyze(b"definitely not an image").unwrap_err();
        match err {
            GlowcastError::ImageProcessing(msg) => assert!(!msg.is_empty()),
            other => panic!("expected ImageProcessing, got {other:?}"),
        }
    }
}
