//! Enchantment pool.

use artifex_core::SeedStream;

/// Every enchantment a weapon can carry.
pub const ENCHANTMENTS: [&str; 15] = [
    "Burning",
    "Freezing",
    "Shocking",
    "Poisoned",
    "Blessed",
    "Cursed",
    "Enchanted",
    "Sharpened",
    "Reinforced",
    "Ethereal",
    "Timeless",
    "Wise",
    "Mighty",
    "Swift",
    "Resilient",
];

/// Draws `count` enchantments independently from the pool.
///
/// Repeats are allowed.
pub fn roll_enchantments(stream: &mut SeedStream, count: u32) -> Vec<String> {
    (0..count)
        .filter_map(|_| stream.pick(&ENCHANTMENTS))
        .map(|name| (*name).to_string())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_count_and_membership() {
        let mut stream = SeedStream::new(4, 4);
        let rolled = roll_enchantments(&mut stream, 4);

        assert_eq!(rolled.len(), 4);
        assert!(rolled.iter().all(|e| ENCHANTMENTS.contains(&e.as_str())));
        assert!(roll_enchantments(&mut stream, 0).is_empty());
    }

    #[test]
    fn test_pool_is_covered() {
        let mut stream = SeedStream::new(8, 8);
        let rolled = roll_enchantments(&mut stream, 2000);

        for name in ENCHANTMENTS {
            assert!(rolled.iter().any(|e| e == name), "{name} never rolled");
        }
    }
}
