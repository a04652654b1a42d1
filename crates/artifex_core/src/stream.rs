//! # Seeded Streams
//!
//! Reproducible pseudo-random scalars keyed by a base seed plus a context.
//!
//! ## Determinism Guarantee
//!
//! A [`SeedStream`] is a pure function of its key: the same
//! `(seed, context...)` key yields exactly the same sequence on any
//! platform, any time. The backing generator is ChaCha8, whose output is
//! specified bit-for-bit, and key mixing is plain integer arithmetic.
//!
//! ## Keying Rule
//!
//! Each logical entity (a building slot, a terrain cell octave, a weapon)
//! builds its own [`StreamKey`] from stable identifiers:
//!
//! ```rust
//! use artifex_core::{GenerationSeed, StreamKey};
//!
//! let seed = GenerationSeed::from(42_i64);
//! let mut stream = StreamKey::new(seed).with(7).with(3).stream();
//! let value = stream.next_float01();
//! assert!((0.0..1.0).contains(&value));
//! ```

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Base seed for deterministic generation.
///
/// All procedural content derives from this seed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct GenerationSeed(u64);

impl GenerationSeed {
    /// Creates a new seed.
    #[inline]
    #[must_use]
    pub const fn new(seed: u64) -> Self {
        Self(seed)
    }

    /// Returns the raw seed value.
    #[inline]
    #[must_use]
    pub const fn value(self) -> u64 {
        self.0
    }

    /// Derives a sub-seed for a specific purpose (e.g., a pipeline stage).
    ///
    /// Uses a mixing function to create independent streams from one seed.
    #[inline]
    #[must_use]
    pub const fn derive(self, purpose: u64) -> Self {
        Self(mix(self.0, purpose))
    }
}

impl From<i64> for GenerationSeed {
    fn from(seed: i64) -> Self {
        // Reinterpret the bits; negative seeds are valid and distinct.
        Self(seed as u64)
    }
}

/// SplitMix64-style combination of a running key state with one key part.
///
/// Order-sensitive: `mix(mix(s, a), b) != mix(mix(s, b), a)` in general.
#[inline]
const fn mix(state: u64, part: u64) -> u64 {
    let mut z = state.rotate_left(5) ^ part;
    z = z.wrapping_add(0x9E37_79B9_7F4A_7C15);
    z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
    z ^ (z >> 31)
}

/// Composite stream key: a base seed followed by any number of parts.
///
/// Parts are typically a stage tag followed by entity indices or
/// coordinates.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct StreamKey {
    /// Mixed key state.
    state: u64,
}

impl StreamKey {
    /// Starts a key from a base seed.
    #[inline]
    #[must_use]
    pub const fn new(seed: GenerationSeed) -> Self {
        Self {
            state: mix(seed.value(), 0),
        }
    }

    /// Appends one key part.
    #[inline]
    #[must_use]
    pub const fn with(self, part: u64) -> Self {
        Self {
            state: mix(self.state, part),
        }
    }

    /// Returns the mixed 64-bit value of the key.
    #[inline]
    #[must_use]
    pub const fn value(self) -> u64 {
        self.state
    }

    /// Builds the stream for this key.
    #[must_use]
    pub fn stream(self) -> SeedStream {
        SeedStream {
            rng: ChaCha8Rng::seed_from_u64(self.state),
        }
    }
}

/// A reproducible pseudo-random value source.
///
/// Owned by the call that needs it; never shared across unrelated entities.
#[derive(Clone, Debug)]
pub struct SeedStream {
    rng: ChaCha8Rng,
}

impl SeedStream {
    /// Creates the stream keyed by `(seed, context)`.
    #[must_use]
    pub fn new(seed: i64, context: i64) -> Self {
        StreamKey::new(GenerationSeed::from(seed))
            .with(context as u64)
            .stream()
    }

    /// Uniform float in `[0, 1)`.
    #[inline]
    pub fn next_float01(&mut self) -> f32 {
        self.rng.gen::<f32>()
    }

    /// Uniform integer in `[lo, hi]` (both ends inclusive).
    ///
    /// A degenerate range (`hi <= lo`) returns `lo` without consuming a draw.
    #[inline]
    pub fn next_int_range(&mut self, lo: i64, hi: i64) -> i64 {
        if hi <= lo {
            return lo;
        }
        self.rng.gen_range(lo..=hi)
    }

    /// Uniform float in `[lo, hi)`.
    ///
    /// A degenerate range (`hi <= lo`) returns `lo` without consuming a draw.
    #[inline]
    pub fn next_float_range(&mut self, lo: f32, hi: f32) -> f32 {
        if hi <= lo {
            return lo;
        }
        self.rng.gen_range(lo..hi)
    }

    /// Bernoulli roll: `true` when a `[0, 1)` draw is strictly below `probability`.
    #[inline]
    pub fn chance(&mut self, probability: f32) -> bool {
        self.next_float01() < probability
    }

    /// Picks a uniformly random element, or `None` for an empty slice.
    ///
    /// The index is drawn as a `u32`, never a `usize`: `usize` sampling
    /// consumes different words on 32-bit and 64-bit targets.
    pub fn pick<'a, T>(&mut self, items: &'a [T]) -> Option<&'a T> {
        let last = u32::try_from(items.len().checked_sub(1)?).unwrap_or(u32::MAX);
        let index = self.rng.gen_range(0..=last);
        items.get(index as usize)
    }
}
