//! # ARTIFEX Arsenal
//!
//! Procedural weapons: rarity, stats, names, enchantments and price.
//!
//! ## Design Principles
//!
//! 1. **Validated bands** - Rarity chances are checked once, up front
//! 2. **Table-driven stats** - One static profile per weapon type
//! 3. **Replayable** - Weapon `n` of a seed is always the same weapon
//!
//! ## Example
//!
//! ```rust
//! use artifex_arsenal::{WeaponConfig, WeaponGenerator, WeaponType};
//!
//! let mut generator = WeaponGenerator::new(WeaponConfig::default()).unwrap();
//! let sword = generator.generate_weapon(WeaponType::Sword, 10).unwrap();
//!
//! assert_eq!(sword.id, "WPN_0");
//! assert!(sword.name.ends_with("Sword"));
//! assert!(sword.enchantments.len() <= 3);
//! ```

#![deny(missing_docs)]
#![deny(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(clippy::perf)]

pub mod config;
pub mod enchantment;
pub mod export;
pub mod generator;
pub mod naming;
pub mod rarity;
pub mod weapon;

pub use config::WeaponConfig;
pub use enchantment::ENCHANTMENTS;
pub use export::WeaponSet;
pub use generator::WeaponGenerator;
pub use naming::weapon_name;
pub use rarity::{roll_rarity, Rarity, RarityBands};
pub use weapon::{gold_value, Element, Weapon, WeaponProfile, WeaponStat, WeaponType};
