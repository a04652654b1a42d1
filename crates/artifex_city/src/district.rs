//! # Districts
//!
//! Named sub-regions laid out on a ring around the city center.

use serde::{Deserialize, Serialize};

use artifex_core::Vec3;

use crate::building::{Building, BuildingType};

/// District zoning.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum DistrictType {
    /// Housing only.
    Residential = 0,
    /// Shops and offices only.
    Commercial = 1,
    /// Factories only.
    Industrial = 2,
    /// Any building type.
    Mixed = 3,
}

impl DistrictType {
    /// Every district type, in declaration order.
    pub const ALL: [Self; 4] = [Self::Residential, Self::Commercial, Self::Industrial, Self::Mixed];

    /// Converts a rolled index to a district type.
    ///
    /// Out-of-range indices fall back to [`DistrictType::Mixed`].
    #[must_use]
    pub const fn from_index(index: i64) -> Self {
        match index {
            0 => Self::Residential,
            1 => Self::Commercial,
            2 => Self::Industrial,
            _ => Self::Mixed,
        }
    }

    /// The building type every building in this district must have.
    ///
    /// `None` for mixed districts, which roll a type per building.
    #[must_use]
    pub const fn forced_building_type(self) -> Option<BuildingType> {
        match self {
            Self::Residential => Some(BuildingType::Residential),
            Self::Commercial => Some(BuildingType::Commercial),
            Self::Industrial => Some(BuildingType::Industrial),
            Self::Mixed => None,
        }
    }

    /// Lowercase name used in exports.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Residential => "residential",
            Self::Commercial => "commercial",
            Self::Industrial => "industrial",
            Self::Mixed => "mixed",
        }
    }
}

/// A city district and its buildings.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct District {
    /// Display name (`District_<index>`).
    pub name: String,
    /// Ring position.
    pub center: Vec3,
    /// Building scatter radius.
    pub radius: f32,
    /// Share of the city population.
    pub population: u32,
    /// Zoning.
    pub district_type: DistrictType,
    /// Buildings in placement order. Append-only during population.
    pub buildings: Vec<Building>,
}

impl District {
    /// Creates an empty district.
    #[must_use]
    pub fn new(index: usize, center: Vec3, radius: f32, population: u32, district_type: DistrictType) -> Self {
        Self {
            name: format!("District_{index}"),
            center,
            radius,
            population,
            district_type,
            buildings: Vec::new(),
        }
    }

    /// Total residents of the buildings placed so far.
    #[must_use]
    pub fn building_population(&self) -> u64 {
        self.buildings.iter().map(|b| u64::from(b.population)).sum()
    }
}
