//! Weapon export documents.
//!
//! ```text
//! weapon: { id, name, type, rarity, element,
//!           stats: { damage, critical_chance, attack_speed, range },
//!           required_level, weight, value, enchantments: [name] }
//! set:    { weapons: [ { id, name, damage, value } ], total_weapons }
//! ```

use serde::{Deserialize, Serialize};

use artifex_core::{Document, Exportable};

use crate::weapon::Weapon;

/// A batch of weapons exported together.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct WeaponSet {
    /// Weapons in generation order.
    pub weapons: Vec<Weapon>,
}

impl WeaponSet {
    /// Number of weapons.
    #[must_use]
    pub fn len(&self) -> usize {
        self.weapons.len()
    }

    /// True if the set is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.weapons.is_empty()
    }
}

impl Exportable for Weapon {
    fn to_document(&self) -> Document {
        let stats = Document::object()
            .field("damage", self.stats.damage)
            .field("critical_chance", self.stats.critical_chance)
            .field("attack_speed", self.stats.attack_speed)
            .field("range", self.stats.range)
            .build();

        Document::object()
            .field("id", self.id.as_str())
            .field("name", self.name.as_str())
            .field("type", self.weapon_type.as_str())
            .field("rarity", self.rarity.as_str())
            .field("element", self.element.as_str())
            .field("stats", stats)
            .field("required_level", self.required_level)
            .field("weight", self.weight)
            .field("value", self.gold_value)
            .field(
                "enchantments",
                self.enchantments.iter().map(|e| Document::from(e.as_str())).collect::<Document>(),
            )
            .build()
    }
}

impl Exportable for WeaponSet {
    fn to_document(&self) -> Document {
        let weapons = self
            .weapons
            .iter()
            .map(|w| {
                Document::object()
                    .field("id", w.id.as_str())
                    .field("name", w.name.as_str())
                    .field("damage", w.stats.damage)
                    .field("value", w.gold_value)
                    .build()
            })
            .collect::<Document>();

        Document::object()
            .field("weapons", weapons)
            .field("total_weapons", self.weapons.len())
            .build()
    }
}
