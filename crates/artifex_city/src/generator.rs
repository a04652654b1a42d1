//! # City Generator
//!
//! Staged city synthesis: district layout, road network, population.
//!
//! ## Stream Keys
//!
//! | Draw | Key |
//! |------|-----|
//! | District type | `(seed, TAG_DISTRICT_TYPE, district)` |
//! | Building attributes | `(seed, TAG_SLOT, district, slot)` |
//! | Building site | `(seed, TAG_PLACEMENT, district, slot)` |
//!
//! Attribute and site draws are split so that retrying a site never shifts
//! the attribute sequence of later slots.

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use artifex_core::{GenerationError, GenerationResult, GenerationSeed, StreamKey, Validate, Vec3};

use crate::building::{Building, BuildingType};
use crate::config::CityConfig;
use crate::district::{District, DistrictType};
use crate::road::{Road, RoadKind};

const TAG_DISTRICT_TYPE: u64 = 0x0D15;
const TAG_SLOT: u64 = 0x5107;
const TAG_PLACEMENT: u64 = 0x91AC;

/// Districts sit on a ring at this fraction of the city radius.
const DISTRICT_RING: f32 = 0.6;
/// Buildings scatter within this fraction of the district radius.
const SCATTER_RADIUS: f32 = 0.8;

/// Pipeline progress.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CityStage {
    /// Nothing generated.
    Empty,
    /// Districts placed on the ring.
    DistrictsLaid,
    /// Ring and spoke roads built.
    RoadsConnected,
    /// Buildings placed.
    Populated,
}

impl CityStage {
    /// Stage name used in errors and logs.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Empty => "Empty",
            Self::DistrictsLaid => "DistrictsLaid",
            Self::RoadsConnected => "RoadsConnected",
            Self::Populated => "Populated",
        }
    }
}

/// Population counters.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CityStats {
    /// Buildings placed.
    pub buildings: usize,
    /// Slots dropped by the density roll.
    pub density_skips: usize,
    /// Buildings dropped because no free site was found.
    pub placement_skips: usize,
}

/// A generated city.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct City {
    /// Display name.
    pub name: String,
    /// Total population.
    pub population: u32,
    /// City radius.
    pub radius: f32,
    /// City center.
    pub center: Vec3,
    /// Districts in ring order.
    pub districts: Vec<District>,
    /// Main roads first, then spokes.
    pub roads: Vec<Road>,
    /// Population counters.
    pub stats: CityStats,
}

impl City {
    fn empty(config: &CityConfig) -> Self {
        Self {
            name: config.name.clone(),
            population: config.population,
            radius: config.radius,
            center: config.center,
            districts: Vec::new(),
            roads: Vec::new(),
            stats: CityStats::default(),
        }
    }

    /// Every building, district by district.
    pub fn buildings(&self) -> impl Iterator<Item = &Building> {
        self.districts.iter().flat_map(|d| d.buildings.iter())
    }

    /// Looks up a district by ring index.
    ///
    /// # Errors
    ///
    /// [`GenerationError::IndexOutOfRange`] if `index` is past the last district.
    pub fn district(&self, index: usize) -> GenerationResult<&District> {
        self.districts.get(index).ok_or(GenerationError::IndexOutOfRange {
            what: "district",
            index,
            len: self.districts.len(),
        })
    }
}

/// Staged city generator.
///
/// Owns the city it builds; regenerating replaces the previous result.
#[derive(Debug)]
pub struct CityGenerator {
    config: CityConfig,
    seed: GenerationSeed,
    city: City,
    stage: CityStage,
}

impl CityGenerator {
    /// Creates a generator.
    ///
    /// # Errors
    ///
    /// [`GenerationError::InvalidConfig`] if the config fails validation.
    pub fn new(config: CityConfig) -> GenerationResult<Self> {
        config.validate()?;
        Ok(Self {
            seed: GenerationSeed::from(config.seed),
            city: City::empty(&config),
            stage: CityStage::Empty,
            config,
        })
    }

    /// The configuration in use.
    #[must_use]
    pub const fn config(&self) -> &CityConfig {
        &self.config
    }

    /// Current pipeline stage.
    #[must_use]
    pub const fn stage(&self) -> CityStage {
        self.stage
    }

    /// The city built so far.
    #[must_use]
    pub const fn city(&self) -> &City {
        &self.city
    }

    /// Consumes the generator and returns its city.
    #[must_use]
    pub fn into_city(self) -> City {
        self.city
    }

    /// Discards the current city.
    pub fn clear(&mut self) {
        self.city = City::empty(&self.config);
        self.stage = CityStage::Empty;
    }

    /// Clears and runs every stage.
    ///
    /// # Errors
    ///
    /// Only if a stage runs out of order, which cannot happen from here.
    pub fn generate(&mut self) -> GenerationResult<&City> {
        self.clear();
        self.lay_out_districts()?;
        self.connect_roads()?;
        self.populate()?;

        info!(
            city = %self.city.name,
            seed = self.config.seed,
            districts = self.city.districts.len(),
            roads = self.city.roads.len(),
            buildings = self.city.stats.buildings,
            placement_skips = self.city.stats.placement_skips,
            "City generated"
        );
        Ok(&self.city)
    }

    /// Places `num_districts` districts evenly on a ring of `0.6 * radius`.
    ///
    /// # Errors
    ///
    /// [`GenerationError::StageOutOfOrder`] unless the pipeline is empty.
    pub fn lay_out_districts(&mut self) -> GenerationResult<()> {
        self.require(CityStage::Empty)?;

        let count = self.config.num_districts;
        let n = count as f32;
        let angle_step = 360.0 / n;
        let ring = self.config.radius * DISTRICT_RING;
        let district_radius = self.config.radius / (n * 0.5);
        let population = self.config.population / count;

        self.city.districts = (0..count as usize)
            .map(|i| {
                let center = self.config.center + Vec3::planar_polar(i as f32 * angle_step, ring);
                let mut stream = StreamKey::new(self.seed)
                    .with(TAG_DISTRICT_TYPE)
                    .with(i as u64)
                    .stream();
                let district_type = DistrictType::from_index(stream.next_int_range(0, 3));
                District::new(i, center, district_radius, population, district_type)
            })
            .collect();

        self.advance(CityStage::DistrictsLaid);
        Ok(())
    }

    /// Builds the ring of main roads and the spokes to the center.
    ///
    /// Always `2n` roads: main road `i` joins district `i` to `(i + 1) % n`,
    /// then one spoke per district.
    ///
    /// # Errors
    ///
    /// [`GenerationError::StageOutOfOrder`] unless districts are laid out.
    pub fn connect_roads(&mut self) -> GenerationResult<()> {
        self.require(CityStage::DistrictsLaid)?;

        let districts = &self.city.districts;
        let n = districts.len();
        let mut roads = Vec::with_capacity(n * 2);

        for (i, district) in districts.iter().enumerate() {
            let next = &districts[(i + 1) % n];
            roads.push(Road::new(district.center, next.center, RoadKind::Main));
        }
        for district in districts {
            roads.push(Road::new(district.center, self.config.center, RoadKind::Secondary));
        }

        self.city.roads = roads;
        self.advance(CityStage::RoadsConnected);
        Ok(())
    }

    /// Fills every district with buildings.
    ///
    /// Slots failing the density roll are skipped silently. Buildings that
    /// find no free site within `max_placement_attempts` are dropped and
    /// counted in [`CityStats::placement_skips`].
    ///
    /// # Errors
    ///
    /// [`GenerationError::StageOutOfOrder`] unless roads are connected.
    pub fn populate(&mut self) -> GenerationResult<()> {
        self.require(CityStage::RoadsConnected)?;

        let mut next_id: u32 = 0;
        for district_index in 0..self.city.districts.len() {
            for slot in 0..self.config.buildings_per_district {
                let Some(mut building) = self.roll_slot(district_index, slot, next_id) else {
                    self.city.stats.density_skips += 1;
                    continue;
                };

                match self.find_site(district_index, slot, &building) {
                    Ok(location) => {
                        building.location = location;
                        self.city.districts[district_index].buildings.push(building);
                        self.city.stats.buildings += 1;
                        next_id += 1;
                    }
                    Err(error) => {
                        debug!(%error, "Building dropped");
                        self.city.stats.placement_skips += 1;
                    }
                }
            }
        }

        self.advance(CityStage::Populated);
        Ok(())
    }

    /// Rolls a building for one slot, or `None` if the density roll fails.
    fn roll_slot(&self, district_index: usize, slot: u32, id: u32) -> Option<Building> {
        let district_type = self.city.districts[district_index].district_type;
        let mut stream = StreamKey::new(self.seed)
            .with(TAG_SLOT)
            .with(district_index as u64)
            .with(u64::from(slot))
            .stream();

        if !stream.chance(self.config.building_density) {
            return None;
        }

        let building_type = district_type.forced_building_type().unwrap_or_else(|| {
            let last = BuildingType::ALL.len() as i64 - 1;
            BuildingType::ALL[stream.next_int_range(0, last) as usize]
        });

        Some(Building::roll(format!("Building_{id:05}"), building_type, &mut stream))
    }

    /// Rejection-samples a site in the district that clears every building
    /// already in the city.
    fn find_site(&self, district_index: usize, slot: u32, building: &Building) -> GenerationResult<Vec3> {
        let district = &self.city.districts[district_index];
        let scatter = district.radius * SCATTER_RADIUS;
        let half = building.half_footprint();
        let mut stream = StreamKey::new(self.seed)
            .with(TAG_PLACEMENT)
            .with(district_index as u64)
            .with(u64::from(slot))
            .stream();

        for _ in 0..self.config.max_placement_attempts {
            let angle = stream.next_float01() * 360.0;
            let distance = stream.next_float01() * scatter;
            let candidate = district.center + Vec3::planar_polar(angle, distance);

            if !self.config.enforce_spacing || self.is_clear(candidate, half) {
                return Ok(candidate);
            }
        }

        Err(GenerationError::PlacementExhausted {
            district: district_index,
            slot,
            attempts: self.config.max_placement_attempts,
        })
    }

    fn is_clear(&self, candidate: Vec3, half: f32) -> bool {
        self.city
            .buildings()
            .all(|other| candidate.planar_distance(other.location) >= half + other.half_footprint())
    }

    fn require(&self, expected: CityStage) -> GenerationResult<()> {
        if self.stage == expected {
            Ok(())
        } else {
            Err(GenerationError::StageOutOfOrder {
                pipeline: "city",
                expected: expected.as_str(),
                found: self.stage.as_str(),
            })
        }
    }

    fn advance(&mut self, stage: CityStage) {
        debug!(from = self.stage.as_str(), to = stage.as_str(), "City stage complete");
        self.stage = stage;
    }
}

/// Validates `config` and runs the full pipeline.
///
/// # Errors
///
/// [`GenerationError::InvalidConfig`] if the config fails validation.
pub fn generate_city(config: &CityConfig) -> GenerationResult<City> {
    let mut generator = CityGenerator::new(config.clone())?;
    generator.generate()?;
    Ok(generator.into_city())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn small_config() -> CityConfig {
        CityConfig {
            num_districts: 4,
            buildings_per_district: 20,
            ..CityConfig::default()
        }
    }

    #[test]
    fn test_rejects_invalid_config() {
        let config = CityConfig { num_districts: 0, ..CityConfig::default() };
        assert!(matches!(CityGenerator::new(config), Err(GenerationError::InvalidConfig(_))));
    }

    #[test]
    fn test_stage_order_enforced() {
        let mut generator = CityGenerator::new(small_config()).unwrap();

        assert!(matches!(
            generator.populate(),
            Err(GenerationError::StageOutOfOrder { expected: "RoadsConnected", found: "Empty", .. })
        ));
        assert!(generator.connect_roads().is_err());

        generator.lay_out_districts().unwrap();
        assert_eq!(generator.stage(), CityStage::DistrictsLaid);
        assert!(generator.lay_out_districts().is_err(), "Stages are not re-entrant");

        generator.connect_roads().unwrap();
        generator.populate().unwrap();
        assert_eq!(generator.stage(), CityStage::Populated);
    }

    #[test]
    fn test_district_layout() {
        let mut generator = CityGenerator::new(small_config()).unwrap();
        generator.lay_out_districts().unwrap();
        let city = generator.city();

        assert_eq!(city.districts.len(), 4);
        for district in &city.districts {
            assert!((district.center.length() - 3000.0).abs() < 0.01);
            assert_eq!(district.radius, 2500.0);
            assert_eq!(district.population, 25_000);
        }

        // District 1 sits at 90 degrees.
        let d1 = city.district(1).unwrap().center;
        assert!(d1.x.abs() < 0.01 && (d1.y - 3000.0).abs() < 0.01);
    }

    #[test]
    fn test_ring_and_spokes() {
        let mut generator = CityGenerator::new(small_config()).unwrap();
        generator.lay_out_districts().unwrap();
        generator.connect_roads().unwrap();
        let city = generator.city();

        assert_eq!(city.roads.len(), 8);
        assert!(city.roads[..4].iter().all(|r| r.kind == RoadKind::Main && r.width == 25.0));
        assert!(city.roads[4..].iter().all(|r| r.kind == RoadKind::Secondary && r.width == 15.0));
        // Ring wraps around.
        assert_eq!(city.roads[3].end, city.districts[0].center);
        assert_eq!(city.roads[5].end, Vec3::ZERO);
    }

    #[test]
    fn test_single_district_ring_is_a_loop() {
        let config = CityConfig { num_districts: 1, ..small_config() };
        let city = generate_city(&config).unwrap();

        assert_eq!(city.roads.len(), 2);
        assert_eq!(city.roads[0].start, city.roads[0].end);
    }

    #[test]
    fn test_forced_building_types() {
        let city = generate_city(&CityConfig::default()).unwrap();

        for district in &city.districts {
            if let Some(forced) = district.district_type.forced_building_type() {
                assert!(district.buildings.iter().all(|b| b.building_type == forced));
            }
        }
    }

    #[test]
    fn test_buildings_stay_in_district() {
        let city = generate_city(&CityConfig::default()).unwrap();

        for district in &city.districts {
            for building in &district.buildings {
                let offset = building.location.planar_distance(district.center);
                assert!(offset <= district.radius * SCATTER_RADIUS + 0.01);
            }
        }
    }

    #[test]
    fn test_stats_account_for_every_slot() {
        let config = CityConfig::default();
        let city = generate_city(&config).unwrap();
        let slots = (config.num_districts * config.buildings_per_district) as usize;

        assert_eq!(city.stats.buildings, city.buildings().count());
        assert_eq!(
            city.stats.buildings + city.stats.density_skips + city.stats.placement_skips,
            slots
        );
    }

    #[test]
    fn test_density_extremes() {
        let none = generate_city(&CityConfig { building_density: 0.0, ..small_config() }).unwrap();
        assert_eq!(none.stats.buildings, 0);

        let all = CityConfig { building_density: 1.0, enforce_spacing: false, ..small_config() };
        let city = generate_city(&all).unwrap();
        assert_eq!(city.stats.buildings, 80);
    }

    #[test]
    fn test_building_ids_are_sequential() {
        let city = generate_city(&small_config()).unwrap();

        for (i, building) in city.buildings().enumerate() {
            assert_eq!(building.id, format!("Building_{i:05}"));
        }
    }

    #[test]
    fn test_district_index_out_of_range() {
        let city = generate_city(&small_config()).unwrap();

        assert_eq!(
            city.district(4).unwrap_err(),
            GenerationError::IndexOutOfRange { what: "district", index: 4, len: 4 }
        );
    }

    #[test]
    fn test_regenerate_replaces_city() {
        let mut generator = CityGenerator::new(small_config()).unwrap();
        let first = generator.generate().unwrap().clone();
        let second = generator.generate().unwrap().clone();

        assert_eq!(first, second);
        assert_eq!(second.districts.len(), 4);
    }
}
