//! # Weapon Generator
//!
//! Every weapon gets the next serial number, and its stream is keyed by
//! `(seed, serial)`. A fresh generator with the same seed therefore replays
//! the same weapons in the same order.
//!
//! Draw order within one weapon's stream:
//!
//! 1. type (random weapons only)
//! 2. rarity
//! 3. element
//! 4. one draw per enchantment slot

use tracing::{debug, info};

use artifex_core::{GenerationError, GenerationResult, GenerationSeed, SeedStream, StreamKey, Validate};

use crate::config::WeaponConfig;
use crate::enchantment::roll_enchantments;
use crate::export::WeaponSet;
use crate::naming::weapon_name;
use crate::rarity::{roll_rarity, RarityBands};
use crate::weapon::{gold_value, Element, Weapon, WeaponStat, WeaponType};

const TAG_WEAPON: u64 = 0x3EA9;

/// Weapon generator with an append-only history.
#[derive(Debug)]
pub struct WeaponGenerator {
    config: WeaponConfig,
    seed: GenerationSeed,
    bands: RarityBands,
    next_serial: u64,
    history: Vec<Weapon>,
}

impl WeaponGenerator {
    /// Creates a generator.
    ///
    /// # Errors
    ///
    /// [`GenerationError::InvalidConfig`] if the rarity bands are malformed.
    pub fn new(config: WeaponConfig) -> GenerationResult<Self> {
        config.validate()?;
        Ok(Self {
            seed: GenerationSeed::from(config.seed),
            bands: config.bands()?,
            next_serial: 0,
            history: Vec::new(),
            config,
        })
    }

    /// The configuration in use.
    #[must_use]
    pub const fn config(&self) -> &WeaponConfig {
        &self.config
    }

    /// Every weapon generated so far, oldest first.
    #[must_use]
    pub fn history(&self) -> &[Weapon] {
        &self.history
    }

    /// Forgets the history. Serial numbers keep counting.
    pub fn clear_history(&mut self) {
        self.history.clear();
    }

    /// Generates a weapon of the given type.
    ///
    /// # Errors
    ///
    /// [`GenerationError::InvalidConfig`] if `level` is 0.
    pub fn generate_weapon(&mut self, weapon_type: WeaponType, level: u32) -> GenerationResult<Weapon> {
        require_level(level)?;
        let (serial, mut stream) = self.next_stream();
        Ok(self.build(serial, weapon_type, level, &mut stream))
    }

    /// Generates a weapon of a uniformly random type.
    ///
    /// # Errors
    ///
    /// [`GenerationError::InvalidConfig`] if `level` is 0.
    pub fn generate_random_weapon(&mut self, level: u32) -> GenerationResult<Weapon> {
        require_level(level)?;
        let (serial, mut stream) = self.next_stream();
        let weapon_type = stream.pick(&WeaponType::ALL).copied().unwrap_or(WeaponType::Sword);
        Ok(self.build(serial, weapon_type, level, &mut stream))
    }

    /// Generates `count` random weapons.
    ///
    /// # Errors
    ///
    /// [`GenerationError::InvalidConfig`] if `level` is 0. Nothing is
    /// generated in that case.
    pub fn generate_weapon_set(&mut self, count: usize, level: u32) -> GenerationResult<WeaponSet> {
        require_level(level)?;
        let weapons = (0..count)
            .map(|_| self.generate_random_weapon(level))
            .collect::<GenerationResult<Vec<_>>>()?;

        info!(
            seed = self.config.seed,
            count,
            level,
            total_value = weapons.iter().map(|w| u64::from(w.gold_value)).sum::<u64>(),
            "Weapon set generated"
        );
        Ok(WeaponSet { weapons })
    }

    fn next_stream(&mut self) -> (u64, SeedStream) {
        let serial = self.next_serial;
        self.next_serial += 1;
        let stream = StreamKey::new(self.seed).with(TAG_WEAPON).with(serial).stream();
        (serial, stream)
    }

    fn build(&mut self, serial: u64, weapon_type: WeaponType, level: u32, stream: &mut SeedStream) -> Weapon {
        let rarity = roll_rarity(stream.next_float01(), &self.bands);
        let element = stream.pick(&Element::ALL).copied().unwrap_or(Element::Pure);
        let stats = WeaponStat::scaled(weapon_type, rarity, level);

        let slots = rarity.enchantment_slots().min(self.config.max_enchantments);
        let enchantments = roll_enchantments(stream, slots);

        let weapon = Weapon {
            id: format!("WPN_{serial}"),
            name: weapon_name(weapon_type, rarity, element),
            weapon_type,
            rarity,
            element,
            stats,
            required_level: level,
            weight: weapon_type.profile().weight,
            gold_value: gold_value(rarity, stats.damage, enchantments.len()),
            enchantments,
        };

        debug!(id = %weapon.id, name = %weapon.name, rarity = rarity.as_str(), "Weapon generated");
        self.history.push(weapon.clone());
        weapon
    }
}

fn require_level(level: u32) -> GenerationResult<()> {
    if level == 0 {
        return Err(GenerationError::config("weapon level must be >= 1"));
    }
    Ok(())
}
