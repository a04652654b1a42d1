//! # Host Proxies
//!
//! Engines that visualise generated content implement [`ProxyHost`].
//! Generation never calls a host; the facade turns finished results into
//! flat [`ProxyDescriptor`]s and hands them over in one batch.
//!
//! ## Contract
//!
//! ```text
//! present(kind) = destroy_all(kind) ; spawn(kind, p) for p in proxies
//! ```
//!
//! Regenerating replaces the previous result, it never accumulates.

use bytemuck::{Pod, Zeroable};

use artifex_city::{City, RoadKind};
use artifex_core::GenerationResult;
use artifex_terrain::TerrainGrid;

/// Variant range for buildings: `BuildingType` discriminants.
pub const BUILDING_VARIANT_BASE: u32 = 0;
/// Variant range for roads: base + `RoadKind` index.
pub const ROAD_VARIANT_BASE: u32 = 16;
/// Variant range for vegetation: base + `Vegetation` index.
pub const VEGETATION_VARIANT_BASE: u32 = 32;

/// Which generated result a proxy belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ProxyKind {
    /// Buildings and roads.
    City,
    /// Scattered vegetation.
    Terrain,
}

/// Raw per-instance record, uploadable as bytes.
///
/// 32 bytes, no padding.
#[repr(C)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Pod, Zeroable)]
pub struct InstanceRecord {
    /// World position.
    pub position: [f32; 3],
    /// Heading around Z, degrees.
    pub yaw_deg: f32,
    /// Extent (X, Y, Z).
    pub size: [f32; 3],
    /// Mesh variant, see the `*_VARIANT_BASE` constants.
    pub variant: u32,
}

impl InstanceRecord {
    /// Byte view for direct upload.
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::bytes_of(self)
    }
}

/// One visual stand-in for a generated entity.
#[derive(Clone, Debug, PartialEq)]
pub struct ProxyDescriptor {
    /// Stable name, unique within one result.
    pub label: String,
    /// Transform and variant.
    pub instance: InstanceRecord,
}

/// Engine-side receiver for proxies.
pub trait ProxyHost {
    /// Remove every proxy previously spawned for `kind`.
    fn destroy_all(&mut self, kind: ProxyKind);

    /// Spawn one proxy.
    fn spawn(&mut self, kind: ProxyKind, proxy: &ProxyDescriptor);
}

/// Buildings first, then roads (centered on their midpoint, yaw along the segment).
#[must_use]
pub fn city_proxies(city: &City) -> Vec<ProxyDescriptor> {
    let buildings = city.buildings().map(|b| ProxyDescriptor {
        label: b.id.clone(),
        instance: InstanceRecord {
            position: b.location.to_array(),
            yaw_deg: b.rotation_deg,
            size: b.size.to_array(),
            variant: BUILDING_VARIANT_BASE + b.building_type as u32,
        },
    });

    let roads = city.roads.iter().enumerate().map(|(i, road)| {
        let delta = road.end - road.start;
        let midpoint = road.start + delta * 0.5;
        let kind_index = match road.kind {
            RoadKind::Main => 0,
            RoadKind::Secondary => 1,
        };
        ProxyDescriptor {
            label: format!("Road_{i}"),
            instance: InstanceRecord {
                position: midpoint.to_array(),
                yaw_deg: libm::atan2f(delta.y, delta.x).to_degrees(),
                size: [road.length(), road.width, 0.0],
                variant: ROAD_VARIANT_BASE + kind_index,
            },
        }
    });

    buildings.chain(roads).collect()
}

/// One proxy per vegetation object, anchored at its cell.
///
/// # Errors
///
/// Only on a corrupted grid (cell count not matching its dimensions).
pub fn terrain_proxies(grid: &TerrainGrid) -> GenerationResult<Vec<ProxyDescriptor>> {
    let mut proxies = Vec::with_capacity(grid.object_count());
    let extent = grid.cell_size() * 0.5;

    for (index, cell) in grid.cells().iter().enumerate() {
        if cell.objects.is_empty() {
            continue;
        }
        let (x, y) = grid.coords_of(index)?;
        let position = grid.world_position(x, y)?.to_array();

        for (k, object) in cell.objects.iter().enumerate() {
            proxies.push(ProxyDescriptor {
                label: format!("{}_{x}_{y}_{k}", object.tag()),
                instance: InstanceRecord {
                    position,
                    yaw_deg: 0.0,
                    size: [extent, extent, extent],
                    variant: VEGETATION_VARIANT_BASE + *object as u32,
                },
            });
        }
    }
    Ok(proxies)
}

/// Replace everything of `kind` on the host with `proxies`. Returns the spawn count.
pub fn present<H: ProxyHost + ?Sized>(host: &mut H, kind: ProxyKind, proxies: &[ProxyDescriptor]) -> usize {
    host.destroy_all(kind);
    for proxy in proxies {
        host.spawn(kind, proxy);
    }
    tracing::debug!(?kind, count = proxies.len(), "presented proxies");
    proxies.len()
}
