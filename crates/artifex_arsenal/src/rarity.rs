//! # Rarity Bands
//!
//! Rarity is rolled from a single `[0, 1)` draw against cumulative bands:
//!
//! ```text
//! 0 ── legendary ── +epic ── +rare ──────── 0.4 ─────────────── 1
//!   Legendary    Epic     Rare     Uncommon        Common
//! ```
//!
//! The Uncommon band always ends at 0.4, so the three configured chances
//! must sum to at most 0.4. That is checked once, when the bands are built.

use serde::{Deserialize, Serialize};

use artifex_core::config::require_unit_interval;
use artifex_core::{GenerationError, GenerationResult};

/// Upper edge of the Uncommon band.
pub const UNCOMMON_CEILING: f32 = 0.4;

/// Rarity tier, ordered.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum Rarity {
    /// Rank 0.
    Common = 0,
    /// Rank 1.
    Uncommon = 1,
    /// Rank 2.
    Rare = 2,
    /// Rank 3.
    Epic = 3,
    /// Rank 4.
    Legendary = 4,
}

impl Rarity {
    /// Every rarity, lowest first.
    pub const ALL: [Self; 5] = [Self::Common, Self::Uncommon, Self::Rare, Self::Epic, Self::Legendary];

    /// Ordinal rank (Common = 0 ... Legendary = 4).
    #[inline]
    #[must_use]
    pub const fn rank(self) -> u32 {
        self as u32
    }

    /// Stat multiplier: `1 + 0.3 * rank`.
    #[inline]
    #[must_use]
    pub fn multiplier(self) -> f32 {
        1.0 + self.rank() as f32 * 0.3
    }

    /// Enchantments granted before the per-generator cap.
    #[inline]
    #[must_use]
    pub const fn enchantment_slots(self) -> u32 {
        self.rank()
    }

    /// Name prefix; empty below Rare.
    #[must_use]
    pub const fn prefix(self) -> &'static str {
        match self {
            Self::Common | Self::Uncommon => "",
            Self::Rare => "Rare",
            Self::Epic => "Epic",
            Self::Legendary => "Legendary",
        }
    }

    /// Lowercase name used in exports.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Common => "common",
            Self::Uncommon => "uncommon",
            Self::Rare => "rare",
            Self::Epic => "epic",
            Self::Legendary => "legendary",
        }
    }
}

/// Validated rarity probabilities.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RarityBands {
    legendary: f32,
    epic: f32,
    rare: f32,
}

impl RarityBands {
    /// Builds bands from per-tier chances.
    ///
    /// # Errors
    ///
    /// [`GenerationError::InvalidConfig`] if a chance is outside `[0, 1]` or
    /// the three sum past [`UNCOMMON_CEILING`].
    pub fn new(legendary: f32, epic: f32, rare: f32) -> GenerationResult<Self> {
        require_unit_interval("legendary_chance", legendary)?;
        require_unit_interval("epic_chance", epic)?;
        require_unit_interval("rare_chance", rare)?;

        let total = legendary + epic + rare;
        if total > UNCOMMON_CEILING {
            return Err(GenerationError::config(format!(
                "legendary + epic + rare chances must be <= {UNCOMMON_CEILING}, got {total}"
            )));
        }
        Ok(Self { legendary, epic, rare })
    }

    /// Legendary chance.
    #[must_use]
    pub const fn legendary(&self) -> f32 {
        self.legendary
    }

    /// Epic chance.
    #[must_use]
    pub const fn epic(&self) -> f32 {
        self.epic
    }

    /// Rare chance.
    #[must_use]
    pub const fn rare(&self) -> f32 {
        self.rare
    }

    /// Expected frequency of a tier.
    #[must_use]
    pub fn probability(&self, rarity: Rarity) -> f32 {
        match rarity {
            Rarity::Legendary => self.legendary,
            Rarity::Epic => self.epic,
            Rarity::Rare => self.rare,
            Rarity::Uncommon => UNCOMMON_CEILING - (self.legendary + self.epic + self.rare),
            Rarity::Common => 1.0 - UNCOMMON_CEILING,
        }
    }
}

impl Default for RarityBands {
    fn default() -> Self {
        Self {
            legendary: 0.01,
            epic: 0.05,
            rare: 0.15,
        }
    }
}

/// Maps a `[0, 1)` draw to a rarity. First band containing `roll` wins.
#[must_use]
pub fn roll_rarity(roll: f32, bands: &RarityBands) -> Rarity {
    let legendary = bands.legendary;
    let epic = legendary + bands.epic;
    let rare = epic + bands.rare;

    if roll < legendary {
        Rarity::Legendary
    } else if roll < epic {
        Rarity::Epic
    } else if roll < rare {
        Rarity::Rare
    } else if roll < UNCOMMON_CEILING {
        Rarity::Uncommon
    } else {
        Rarity::Common
    }
}
