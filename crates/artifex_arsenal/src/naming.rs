//! Weapon name synthesis.

use crate::rarity::Rarity;
use crate::weapon::{Element, WeaponType};

/// Builds `[RarityPrefix] [ElementAdjective] TypeNoun`.
///
/// Empty parts are dropped, so the result never has stray spaces.
#[must_use]
pub fn weapon_name(weapon_type: WeaponType, rarity: Rarity, element: Element) -> String {
    [rarity.prefix(), element.adjective(), weapon_type.display_name()]
        .iter()
        .filter(|part| !part.is_empty())
        .copied()
        .collect::<Vec<_>>()
        .join(" ")
}
