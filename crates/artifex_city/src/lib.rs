//! # ARTIFEX City Generation
//!
//! Deterministic radial cities: districts, roads and buildings.
//!
//! ## Pipeline
//!
//! ```text
//! Empty ──> DistrictsLaid ──> RoadsConnected ──> Populated
//!      lay_out_districts  connect_roads      populate
//! ```
//!
//! Stages run strictly in order. [`CityGenerator::generate`] clears the
//! previous result and runs all three.
//!
//! ## Example
//!
//! ```rust
//! use artifex_city::{generate_city, CityConfig};
//!
//! let config = CityConfig { num_districts: 4, buildings_per_district: 10, ..CityConfig::default() };
//! let city = generate_city(&config).unwrap();
//!
//! assert_eq!(city.districts.len(), 4);
//! assert_eq!(city.roads.len(), 8);
//! ```

#![deny(missing_docs)]
#![deny(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(clippy::perf)]

pub mod building;
pub mod config;
pub mod district;
pub mod export;
pub mod generator;
pub mod road;

pub use building::{Building, BuildingProfile, BuildingType};
pub use config::CityConfig;
pub use district::{District, DistrictType};
pub use generator::{generate_city, City, CityGenerator, CityStage, CityStats};
pub use road::{Road, RoadKind};
