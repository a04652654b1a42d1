//! # Buildings
//!
//! Building types and their size/floor/material profiles.

use serde::{Deserialize, Serialize};

use artifex_core::{SeedStream, Vec3};

/// Building types.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum BuildingType {
    /// Houses and apartments.
    Residential = 0,
    /// Shops and offices.
    Commercial = 1,
    /// Factories and warehouses.
    Industrial = 2,
    /// Town halls, courts.
    Government = 3,
    /// Temples, churches.
    Religious = 4,
    /// Barracks, armories.
    Military = 5,
    /// Schools, libraries.
    Educational = 6,
    /// Theaters, arenas.
    Entertainment = 7,
    /// Utilities, stations.
    Infrastructure = 8,
}

impl BuildingType {
    /// Every building type, in declaration order.
    pub const ALL: [Self; 9] = [
        Self::Residential,
        Self::Commercial,
        Self::Industrial,
        Self::Government,
        Self::Religious,
        Self::Military,
        Self::Educational,
        Self::Entertainment,
        Self::Infrastructure,
    ];

    /// Returns the size/floor/material profile for this type.
    #[must_use]
    pub fn profile(self) -> &'static BuildingProfile {
        &PROFILES[self as usize]
    }

    /// Lowercase name used in exports.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Residential => "residential",
            Self::Commercial => "commercial",
            Self::Industrial => "industrial",
            Self::Government => "government",
            Self::Religious => "religious",
            Self::Military => "military",
            Self::Educational => "educational",
            Self::Entertainment => "entertainment",
            Self::Infrastructure => "infrastructure",
        }
    }
}

/// Dimension ranges for one building type.
///
/// Float ranges are half-open, floor ranges inclusive.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BuildingProfile {
    /// Footprint X extent.
    pub width: (f32, f32),
    /// Footprint Y extent.
    pub depth: (f32, f32),
    /// Vertical extent.
    pub height: (f32, f32),
    /// Floor count.
    pub floors: (u32, u32),
    /// Facade material.
    pub material: &'static str,
}

/// Residential small/few floors/brick; commercial large/many floors/glass;
/// industrial very large single-storey concrete; government tall marble;
/// the rest mid-range mixed.
static PROFILES: [BuildingProfile; 9] = [
    // Residential
    BuildingProfile { width: (20.0, 50.0), depth: (20.0, 50.0), height: (30.0, 100.0), floors: (1, 5), material: "Brick" },
    // Commercial
    BuildingProfile { width: (50.0, 100.0), depth: (50.0, 100.0), height: (50.0, 150.0), floors: (3, 10), material: "Glass" },
    // Industrial
    BuildingProfile { width: (100.0, 200.0), depth: (100.0, 200.0), height: (30.0, 80.0), floors: (1, 1), material: "Concrete" },
    // Government
    BuildingProfile { width: (80.0, 120.0), depth: (80.0, 120.0), height: (80.0, 200.0), floors: (5, 8), material: "Marble" },
    // Religious
    MIXED_PROFILE,
    // Military
    MIXED_PROFILE,
    // Educational
    MIXED_PROFILE,
    // Entertainment
    MIXED_PROFILE,
    // Infrastructure
    MIXED_PROFILE,
];

const MIXED_PROFILE: BuildingProfile = BuildingProfile {
    width: (30.0, 60.0),
    depth: (30.0, 60.0),
    height: (40.0, 120.0),
    floors: (2, 6),
    material: "Mixed",
};

/// A single placed building.
///
/// Immutable once created; owned by exactly one district.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Building {
    /// City-unique identifier.
    pub id: String,
    /// Footprint center.
    pub location: Vec3,
    /// Extent: X/Y footprint, Z height.
    pub size: Vec3,
    /// Building type.
    pub building_type: BuildingType,
    /// Floor count (>= 1).
    pub floors: u32,
    /// Facade material.
    pub material: String,
    /// Yaw in degrees, `[0, 360)`.
    pub rotation_deg: f32,
    /// Residents or workers.
    pub population: u32,
}

impl Building {
    /// Rolls the attributes of a building of the given type.
    ///
    /// The location is left at the origin; the placement stage sets it.
    pub fn roll(id: String, building_type: BuildingType, stream: &mut SeedStream) -> Self {
        let profile = building_type.profile();

        let rotation_deg = stream.next_float_range(0.0, 360.0);
        let population = stream.next_int_range(10, 500) as u32;
        let size = Vec3::new(
            stream.next_float_range(profile.width.0, profile.width.1),
            stream.next_float_range(profile.depth.0, profile.depth.1),
            stream.next_float_range(profile.height.0, profile.height.1),
        );
        let floors = stream.next_int_range(i64::from(profile.floors.0), i64::from(profile.floors.1)) as u32;

        Self {
            id,
            location: Vec3::ZERO,
            size,
            building_type,
            floors,
            material: profile.material.to_string(),
            rotation_deg,
            population,
        }
    }

    /// Radius of the circle that bounds the footprint.
    ///
    /// Two buildings are clear of each other when their centers are at
    /// least the sum of their half-footprints apart.
    #[must_use]
    pub fn half_footprint(&self) -> f32 {
        Vec3::new(self.size.x, self.size.y, 0.0).length() * 0.5
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_profiles_match_types() {
        assert_eq!(BuildingType::Residential.profile().material, "Brick");
        assert_eq!(BuildingType::Commercial.profile().material, "Glass");
        assert_eq!(BuildingType::Industrial.profile().material, "Concrete");
        assert_eq!(BuildingType::Government.profile().material, "Marble");
        assert_eq!(BuildingType::Military.profile().material, "Mixed");
        assert_eq!(BuildingType::Industrial.profile().floors, (1, 1));
    }

    #[test]
    fn test_roll_respects_profile() {
        for (i, building_type) in BuildingType::ALL.iter().enumerate() {
            let profile = building_type.profile();
            for slot in 0..50 {
                let mut stream = SeedStream::new(i as i64, slot);
                let building = Building::roll(format!("B{slot}"), *building_type, &mut stream);

                assert!(building.size.x >= profile.width.0 && building.size.x < profile.width.1);
                assert!(building.size.y >= profile.depth.0 && building.size.y < profile.depth.1);
                assert!(building.size.z >= profile.height.0 && building.size.z < profile.height.1);
                assert!(building.floors >= profile.floors.0 && building.floors <= profile.floors.1);
                assert!(building.floors >= 1);
                assert!((0.0..360.0).contains(&building.rotation_deg));
                assert!((10..=500).contains(&building.population));
                assert_eq!(building.material, profile.material);
            }
        }
    }

    #[test]
    fn test_half_footprint_covers_corners() {
        let mut stream = SeedStream::new(1, 1);
        let mut building = Building::roll("B".to_string(), BuildingType::Residential, &mut stream);
        building.size = Vec3::new(30.0, 40.0, 10.0);

        // Half the diagonal, so any rotation stays inside the circle.
        assert_eq!(building.half_footprint(), 25.0);

        let corner = Vec3::new(15.0, 20.0, 0.0);
        for degrees in [0.0_f32, 30.0, 45.0, 90.0, 137.0] {
            let r = degrees.to_radians();
            let (sin, cos) = r.sin_cos();
            let rotated = Vec3::new(corner.x * cos - corner.y * sin, corner.x * sin + corner.y * cos, 0.0);
            assert!(rotated.length() <= building.half_footprint() + 1e-3);
        }
    }
}
