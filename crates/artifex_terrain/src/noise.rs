//! # Fractal Height Noise
//!
//! Value-noise fractal sum over a grid of cells.
//!
//! ## Octave Sum
//!
//! ```text
//! h01 = Σ amplitude_k · rand01(seed, x, y, k) / Σ amplitude_k
//! h   = h01 · 2 - 1
//! ```
//!
//! `amplitude_0 = 1`, multiplied by `persistence` every octave. Each octave
//! of each cell draws from its own stream, so the field varies across both
//! space and octave.
//!
//! ## Determinism Guarantee
//!
//! Given the same seed, this produces **exactly** the same heights on any
//! platform, any time.

use artifex_core::{GenerationSeed, StreamKey};

const TAG_HEIGHT: u64 = 0x4E16;

/// Fractal sum of per-cell random layers.
///
/// Not spatially smooth. Neighbouring cells are independent.
#[derive(Clone, Copy, Debug)]
pub struct FractalNoise {
    seed: GenerationSeed,
    octaves: u32,
    persistence: f32,
}

impl FractalNoise {
    /// Creates a noise source.
    #[must_use]
    pub const fn new(seed: GenerationSeed, octaves: u32, persistence: f32) -> Self {
        Self {
            seed,
            octaves,
            persistence,
        }
    }

    /// Samples the normalized sum at cell `(x, y)`.
    ///
    /// # Returns
    ///
    /// A value in `[0, 1)`.
    #[must_use]
    pub fn sample01(&self, x: u32, y: u32) -> f32 {
        let mut total = 0.0;
        let mut amplitude = 1.0;
        let mut max_amplitude = 0.0;

        for octave in 0..self.octaves {
            let mut stream = StreamKey::new(self.seed)
                .with(TAG_HEIGHT)
                .with(u64::from(x))
                .with(u64::from(y))
                .with(u64::from(octave))
                .stream();
            total += stream.next_float01() * amplitude;
            max_amplitude += amplitude;
            amplitude *= self.persistence;
        }

        if max_amplitude > 0.0 {
            total / max_amplitude
        } else {
            0.0
        }
    }

    /// Samples the height at cell `(x, y)`.
    ///
    /// # Returns
    ///
    /// A value in `[-1, 1]`.
    #[must_use]
    pub fn height(&self, x: u32, y: u32) -> f32 {
        (self.sample01(x, y) * 2.0 - 1.0).clamp(-1.0, 1.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn noise(seed: u64) -> FractalNoise {
        FractalNoise::new(GenerationSeed::new(seed), 4, 0.5)
    }

    #[test]
    fn test_determinism() {
        let noise1 = noise(12345);
        let noise2 = noise(12345);

        for i in 0..100 {
            assert_eq!(noise1.height(i, i * 3), noise2.height(i, i * 3), "Noise should be deterministic");
        }
    }

    #[test]
    fn test_different_seeds_different_results() {
        let v1: Vec<f32> = (0..16).map(|i| noise(1).height(i, 0)).collect();
        let v2: Vec<f32> = (0..16).map(|i| noise(2).height(i, 0)).collect();

        assert_ne!(v1, v2, "Different seeds should produce different results");
    }

    #[test]
    fn test_range() {
        let noise = noise(42);

        for x in 0..100 {
            for y in 0..100 {
                let value = noise.height(x, y);
                assert!((-1.0..=1.0).contains(&value), "Value {value} out of range at ({x}, {y})");
            }
        }
    }

    #[test]
    fn test_varies_across_grid() {
        let noise = noise(42);
        let first = noise.height(0, 0);

        assert!(
            (0..64).any(|x| noise.height(x, 7) != first),
            "Height field must not be constant"
        );
        assert_ne!(noise.height(3, 4), noise.height(4, 3), "Axes must not be symmetric");
    }

    #[test]
    fn test_octaves_change_result() {
        let one = FractalNoise::new(GenerationSeed::new(9), 1, 0.5);
        let four = FractalNoise::new(GenerationSeed::new(9), 4, 0.5);

        // Octave 0 is shared, extra octaves pull the value towards the mean.
        assert_ne!(one.sample01(5, 5), four.sample01(5, 5));
    }

    #[test]
    fn test_fractal_sum_smooths_extremes() {
        let single = FractalNoise::new(GenerationSeed::new(3), 1, 0.5);
        let many = FractalNoise::new(GenerationSeed::new(3), 6, 0.9);

        let spread = |n: &FractalNoise| {
            let values: Vec<f32> = (0..2000).map(|i| n.height(i, 0)).collect();
            let mean = values.iter().sum::<f32>() / values.len() as f32;
            values.iter().map(|v| (v - mean).powi(2)).sum::<f32>() / values.len() as f32
        };

        assert!(spread(&many) < spread(&single), "More octaves should reduce variance");
    }
}
