//! City export document.
//!
//! ```text
//! { city_name, population, radius,
//!   districts: [ { name, type, population,
//!                  buildings: [ { id, floors, material, population } ] } ] }
//! ```

use artifex_core::{Document, Exportable};

use crate::building::Building;
use crate::district::District;
use crate::generator::City;

impl Exportable for Building {
    fn to_document(&self) -> Document {
        Document::object()
            .field("id", self.id.as_str())
            .field("floors", self.floors)
            .field("material", self.material.as_str())
            .field("population", self.population)
            .build()
    }
}

impl Exportable for District {
    fn to_document(&self) -> Document {
        Document::object()
            .field("name", self.name.as_str())
            .field("type", self.district_type.as_str())
            .field("population", self.population)
            .field("buildings", self.buildings.iter().map(Exportable::to_document).collect::<Document>())
            .build()
    }
}

impl Exportable for City {
    fn to_document(&self) -> Document {
        Document::object()
            .field("city_name", self.name.as_str())
            .field("population", self.population)
            .field("radius", self.radius)
            .field("districts", self.districts.iter().map(Exportable::to_document).collect::<Document>())
            .build()
    }
}
