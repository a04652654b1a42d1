//! # Weapons
//!
//! Weapon types, elements, per-type stat profiles and the weapon record.
//!
//! ## Stat Formula
//!
//! ```text
//! damage          = base_damage · (1 + 0.1·level) · (1 + 0.3·rank)
//! critical_chance = base_crit + 0.02·rank
//! special_power   = base_special · (1 + 0.3·rank)
//! ```

use serde::{Deserialize, Serialize};

use crate::rarity::Rarity;

/// Weapon types.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum WeaponType {
    /// Balanced melee.
    Sword = 0,
    /// Long range, light.
    Bow = 1,
    /// Caster, special power.
    Staff = 2,
    /// Heavy, slow, big crits.
    Hammer = 3,
    /// Reach melee.
    Spear = 4,
    /// Fast, light, frequent crits.
    Dagger = 5,
    /// Longest range.
    Rifle = 6,
    /// Quick ranged.
    Pistol = 7,
    /// Light caster, strong special power.
    Wand = 8,
    /// Heavy melee.
    Axe = 9,
}

impl WeaponType {
    /// Every weapon type, in declaration order.
    pub const ALL: [Self; 10] = [
        Self::Sword,
        Self::Bow,
        Self::Staff,
        Self::Hammer,
        Self::Spear,
        Self::Dagger,
        Self::Rifle,
        Self::Pistol,
        Self::Wand,
        Self::Axe,
    ];

    /// The stat profile of this type.
    #[must_use]
    pub fn profile(self) -> &'static WeaponProfile {
        &PROFILES[self as usize]
    }

    /// Noun used in weapon names.
    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Sword => "Sword",
            Self::Bow => "Bow",
            Self::Staff => "Staff",
            Self::Hammer => "Hammer",
            Self::Spear => "Spear",
            Self::Dagger => "Dagger",
            Self::Rifle => "Rifle",
            Self::Pistol => "Pistol",
            Self::Wand => "Wand",
            Self::Axe => "Axe",
        }
    }

    /// Lowercase name used in exports.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Sword => "sword",
            Self::Bow => "bow",
            Self::Staff => "staff",
            Self::Hammer => "hammer",
            Self::Spear => "spear",
            Self::Dagger => "dagger",
            Self::Rifle => "rifle",
            Self::Pistol => "pistol",
            Self::Wand => "wand",
            Self::Axe => "axe",
        }
    }
}

/// Elemental affinity.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum Element {
    /// Fire.
    Fire = 0,
    /// Ice.
    Ice = 1,
    /// Lightning.
    Lightning = 2,
    /// Nature.
    Nature = 3,
    /// Holy.
    Holy = 4,
    /// Dark.
    Dark = 5,
    /// No affinity.
    Pure = 6,
    /// Wild magic.
    Chaos = 7,
}

impl Element {
    /// Every element, in declaration order.
    pub const ALL: [Self; 8] = [
        Self::Fire,
        Self::Ice,
        Self::Lightning,
        Self::Nature,
        Self::Holy,
        Self::Dark,
        Self::Pure,
        Self::Chaos,
    ];

    /// Adjective used in weapon names; empty for Pure and Chaos.
    #[must_use]
    pub const fn adjective(self) -> &'static str {
        match self {
            Self::Fire => "Flaming",
            Self::Ice => "Frozen",
            Self::Lightning => "Thundering",
            Self::Nature => "Natural",
            Self::Holy => "Holy",
            Self::Dark => "Dark",
            Self::Pure | Self::Chaos => "",
        }
    }

    /// Lowercase name used in exports.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Fire => "fire",
            Self::Ice => "ice",
            Self::Lightning => "lightning",
            Self::Nature => "nature",
            Self::Holy => "holy",
            Self::Dark => "dark",
            Self::Pure => "pure",
            Self::Chaos => "chaos",
        }
    }
}

/// Base stats of one weapon type, before level and rarity scaling.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct WeaponProfile {
    /// Damage at level 0, Common.
    pub base_damage: f32,
    /// Attacks per second.
    pub attack_speed: f32,
    /// Reach in world units.
    pub range: f32,
    /// Carry weight.
    pub weight: f32,
    /// Critical chance at Common.
    pub critical_chance: f32,
    /// Critical hit multiplier.
    pub critical_damage: f32,
    /// Special ability power at Common.
    pub special_power: f32,
}

const BASE: WeaponProfile = WeaponProfile {
    base_damage: 0.0,
    attack_speed: 1.0,
    range: 100.0,
    weight: 1.0,
    critical_chance: 0.05,
    critical_damage: 1.5,
    special_power: 0.0,
};

static PROFILES: [WeaponProfile; 10] = [
    // Sword
    WeaponProfile { base_damage: 25.0, attack_speed: 1.0, range: 200.0, weight: 15.0, ..BASE },
    // Bow
    WeaponProfile { base_damage: 20.0, attack_speed: 1.2, range: 1000.0, weight: 5.0, ..BASE },
    // Staff
    WeaponProfile { base_damage: 15.0, range: 500.0, weight: 8.0, special_power: 30.0, ..BASE },
    // Hammer
    WeaponProfile { base_damage: 35.0, attack_speed: 0.7, range: 150.0, weight: 25.0, critical_damage: 2.0, ..BASE },
    // Spear
    WeaponProfile { base_damage: 22.0, attack_speed: 1.1, range: 300.0, weight: 12.0, ..BASE },
    // Dagger
    WeaponProfile { base_damage: 15.0, attack_speed: 1.5, range: 100.0, weight: 3.0, critical_chance: 0.2, ..BASE },
    // Rifle
    WeaponProfile { base_damage: 30.0, attack_speed: 0.9, range: 2000.0, weight: 7.0, ..BASE },
    // Pistol
    WeaponProfile { base_damage: 18.0, attack_speed: 1.3, range: 800.0, weight: 4.0, ..BASE },
    // Wand
    WeaponProfile { base_damage: 12.0, range: 600.0, weight: 2.0, special_power: 40.0, ..BASE },
    // Axe
    WeaponProfile { base_damage: 32.0, attack_speed: 0.8, range: 180.0, weight: 20.0, ..BASE },
];

/// Final combat stats.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct WeaponStat {
    /// Damage per hit.
    pub damage: f32,
    /// Probability of a critical hit.
    pub critical_chance: f32,
    /// Critical hit multiplier.
    pub critical_damage: f32,
    /// Attacks per second.
    pub attack_speed: f32,
    /// Reach.
    pub range: f32,
    /// Special ability power (casters only).
    pub special_ability_power: f32,
}

impl WeaponStat {
    /// Scales a type's profile by level and rarity.
    #[must_use]
    pub fn scaled(weapon_type: WeaponType, rarity: Rarity, level: u32) -> Self {
        let profile = weapon_type.profile();
        let level_multiplier = 1.0 + level as f32 * 0.1;
        let rarity_multiplier = rarity.multiplier();

        Self {
            damage: profile.base_damage * level_multiplier * rarity_multiplier,
            critical_chance: profile.critical_chance + rarity.rank() as f32 * 0.02,
            critical_damage: profile.critical_damage,
            attack_speed: profile.attack_speed,
            range: profile.range,
            special_ability_power: profile.special_power * rarity_multiplier,
        }
    }
}

/// A generated weapon.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Weapon {
    /// Generator-unique identifier (`WPN_<serial>`).
    pub id: String,
    /// Synthesized display name.
    pub name: String,
    /// Weapon type.
    pub weapon_type: WeaponType,
    /// Rarity tier.
    pub rarity: Rarity,
    /// Elemental affinity.
    pub element: Element,
    /// Combat stats.
    pub stats: WeaponStat,
    /// Minimum wielder level (>= 1).
    pub required_level: u32,
    /// Enchantment names, at most `max_enchantments`.
    pub enchantments: Vec<String>,
    /// Carry weight.
    pub weight: f32,
    /// Price in gold.
    pub gold_value: u32,
}

/// Price: `100 + 200·rank + trunc(5·damage) + 150·enchantments`.
///
/// Saturates at `u32::MAX` for absurd levels.
#[must_use]
pub fn gold_value(rarity: Rarity, damage: f32, enchantments: usize) -> u32 {
    let stats_value = (damage * 5.0) as u32;
    let enchantment_value = u32::try_from(enchantments).unwrap_or(u32::MAX).saturating_mul(150);
    (100 + rarity.rank() * 200)
        .saturating_add(stats_value)
        .saturating_add(enchantment_value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_profiles_line_up_with_types() {
        assert_eq!(WeaponType::Sword.profile().base_damage, 25.0);
        assert_eq!(WeaponType::Axe.profile().base_damage, 32.0);
        assert_eq!(WeaponType::Rifle.profile().range, 2000.0);
        assert_eq!(WeaponType::Wand.profile().special_power, 40.0);
    }

    #[test]
    fn test_hammer_and_dagger_bonuses() {
        let hammer = WeaponStat::scaled(WeaponType::Hammer, Rarity::Common, 1);
        let dagger = WeaponStat::scaled(WeaponType::Dagger, Rarity::Common, 1);

        assert_eq!(hammer.critical_damage, 2.0);
        assert_eq!(hammer.attack_speed, 0.7);
        assert_eq!(dagger.critical_chance, 0.2);
        assert_eq!(dagger.attack_speed, 1.5);
        assert!(hammer.damage > dagger.damage);
        assert!(WeaponType::Hammer.profile().weight > WeaponType::Dagger.profile().weight);
    }

    #[test]
    fn test_damage_scaling() {
        // 25 * (1 + 0.1·10) * (1 + 0.3·4) = 25 * 2.0 * 2.2 = 110
        let stats = WeaponStat::scaled(WeaponType::Sword, Rarity::Legendary, 10);

        assert!((stats.damage - 110.0).abs() < 1e-3);
        assert!((stats.critical_chance - 0.13).abs() < 1e-6);
        assert_eq!(stats.special_ability_power, 0.0);
    }

    #[test]
    fn test_caster_special_power() {
        let staff = WeaponStat::scaled(WeaponType::Staff, Rarity::Rare, 1);
        let wand = WeaponStat::scaled(WeaponType::Wand, Rarity::Common, 1);

        assert!((staff.special_ability_power - 48.0).abs() < 1e-4);
        assert_eq!(wand.special_ability_power, 40.0);
        assert_eq!(staff.attack_speed, 1.0);
    }

    #[test]
    fn test_gold_value() {
        assert_eq!(gold_value(Rarity::Common, 0.0, 0), 100);
        // 100 + 800 + trunc(552.5) + 450
        assert_eq!(gold_value(Rarity::Legendary, 110.5, 3), 1902);
        assert_eq!(gold_value(Rarity::Legendary, f32::MAX, 4), u32::MAX);
        assert_eq!(gold_value(Rarity::Rare, 1.0e9, 2), u32::MAX);
    }

    #[test]
    fn test_element_adjectives() {
        assert_eq!(Element::Fire.adjective(), "Flaming");
        assert_eq!(Element::Lightning.adjective(), "Thundering");
        assert_eq!(Element::Pure.adjective(), "");
        assert_eq!(Element::Chaos.adjective(), "");
    }
}
