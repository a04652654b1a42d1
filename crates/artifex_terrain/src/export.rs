//! Terrain export document.
//!
//! ```text
//! { width, height, terrain: [ { height, moisture, temperature, biome, objects: [tag] } ] }
//! ```
//!
//! Cells are exported row-major.

use artifex_core::{Document, Exportable};

use crate::grid::{TerrainCell, TerrainGrid};

impl Exportable for TerrainCell {
    fn to_document(&self) -> Document {
        Document::object()
            .field("height", self.height)
            .field("moisture", self.moisture)
            .field("temperature", self.temperature)
            .field("biome", self.biome.as_str())
            .field("objects", self.objects.iter().map(|o| Document::from(o.tag())).collect::<Document>())
            .build()
    }
}

impl Exportable for TerrainGrid {
    fn to_document(&self) -> Document {
        Document::object()
            .field("width", self.width())
            .field("height", self.height())
            .field("terrain", self.cells().iter().map(Exportable::to_document).collect::<Document>())
            .build()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{generate_terrain, TerrainConfig};

    #[test]
    fn test_terrain_document_shape() {
        let config = TerrainConfig { width: 5, height: 3, ..TerrainConfig::default() };
        let grid = generate_terrain(&config).unwrap();
        let doc = grid.to_document();

        assert_eq!(doc.keys(), vec!["width", "height", "terrain"]);
        assert_eq!(doc.get("width").and_then(Document::as_i64), Some(5));

        let cells = doc.get("terrain").and_then(Document::as_array).unwrap();
        assert_eq!(cells.len(), 15);
        assert_eq!(cells[0].keys(), vec!["height", "moisture", "temperature", "biome", "objects"]);

        let cell = grid.cell(2, 1).unwrap();
        let exported = &cells[7];
        assert_eq!(exported.get("biome").and_then(Document::as_str), Some(cell.biome.as_str()));
        assert_eq!(
            exported.get("objects").and_then(Document::as_array).map(<[Document]>::len),
            Some(cell.objects.len())
        );
    }
}
