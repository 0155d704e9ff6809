//! Heightmap pixel grid.

use super::TerrainError;

/// Normalized [0, 1] brightness per pixel, row-major.
#[derive(Debug, Clone, PartialEq)]
pub struct Heightmap {
    width: usize,
    height: usize,
    samples: Vec<f32>,
}

impl Heightmap {
    pub fn from_samples(width: usize, height: usize, samples: Vec<f32>) -> Result<Self, TerrainError> {
        if samples.len() != width * height {
            return Err(TerrainError::SampleCount {
                expected: width * height,
                actual: samples.len(),
            });
        }
        Ok(Self {
            width,
            height,
            samples,
        })
    }

    /// Every pixel set to `value`.
    pub fn flat(width: usize, height: usize, value: f32) -> Self {
        Self {
            width,
            height,
            samples: vec![value; width * height],
        }
    }

    /// Decodes an image and keeps its red channel.
    pub fn decode(name: &str, bytes: &[u8]) -> Result<Self, TerrainError> {
        let image = image::load_from_memory(bytes).map_err(|e| TerrainError::Decode {
            name: name.to_string(),
            reason: e.to_string(),
        })?;
        let rgb = image.to_rgb8();
        let (width, height) = rgb.dimensions();
        let samples = rgb.pixels().map(|p| p.0[0] as f32 / 255.0).collect();

        Self::from_samples(width as usize, height as usize, samples)
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Brightness at column `x`, row `y`.
    pub fn sample(&self, x: usize, y: usize) -> f32 {
        self.samples[y * self.width + x]
    }
}
