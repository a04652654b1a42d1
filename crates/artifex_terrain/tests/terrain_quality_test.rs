//! # Terrain Quality Tests
//!
//! Verifies the stock 256x256 grid: size, determinism, biome mix and scatter.

use artifex_core::Exportable;
use artifex_terrain::{generate_terrain, Biome, TerrainConfig, TerrainGrid, Vegetation};

fn stock_terrain() -> TerrainGrid {
    generate_terrain(&TerrainConfig::default()).unwrap()
}

/// Test: exactly width * height cells, row-major.
#[test]
fn test_grid_size_invariant() {
    for (width, height) in [(1, 1), (7, 3), (3, 7), (64, 64)] {
        let config = TerrainConfig { width, height, ..TerrainConfig::default() };
        let grid = generate_terrain(&config).unwrap();

        assert_eq!(grid.cells().len(), (width * height) as usize);
        for y in 0..height {
            for x in 0..width {
                let by_coord = grid.cell(x, y).unwrap();
                let by_index = &grid.cells()[(y * width + x) as usize];
                assert_eq!(by_coord, by_index);
            }
        }
    }
}

/// Test: same seed, same terrain. Byte for byte in the export.
#[test]
fn test_terrain_is_deterministic() {
    let first = stock_terrain();
    let second = stock_terrain();

    assert_eq!(first, second);
    assert_eq!(first.to_document(), second.to_document());

    let other = generate_terrain(&TerrainConfig { seed: 54321, ..TerrainConfig::default() }).unwrap();
    assert_ne!(first, other, "Different seeds should produce different terrain");
}

/// Test: the stock grid has water, land and forest.
#[test]
fn test_terrain_biome_mix() {
    let grid = stock_terrain();
    let counts = grid.biome_counts();

    for (biome, count) in counts {
        println!("{biome:?}: {count}");
    }

    let count_of = |biome: Biome| counts[biome as usize].1;
    assert!(count_of(Biome::Ocean) > 0, "No ocean");
    assert!(count_of(Biome::Plains) > 0, "No plains");
    assert!(count_of(Biome::Forest) > 0, "No forest");
    assert_eq!(counts.iter().map(|(_, n)| n).sum::<usize>(), 256 * 256);
}

/// Test: scatter rates follow the configured densities.
#[test]
fn test_vegetation_rates() {
    let grid = stock_terrain();
    let walkable: Vec<_> = grid.cells().iter().filter(|c| c.walkable).collect();
    let rate = |kind: Vegetation| {
        walkable.iter().filter(|c| c.objects.contains(&kind)).count() as f64 / walkable.len() as f64
    };

    assert!((rate(Vegetation::Rock) - 0.2).abs() < 0.02, "Rock rate {}", rate(Vegetation::Rock));
    assert!((rate(Vegetation::Bush) - 0.25).abs() < 0.02, "Bush rate {}", rate(Vegetation::Bush));

    let forest: Vec<_> = walkable.iter().filter(|c| c.biome.has_trees()).collect();
    let trees = forest.iter().filter(|c| c.objects.contains(&Vegetation::Tree)).count();
    let tree_rate = trees as f64 / forest.len() as f64;
    assert!((tree_rate - 0.3).abs() < 0.05, "Tree rate {tree_rate}");
}

/// Test: cold rows cluster in the north.
#[test]
fn test_tundra_is_northern() {
    let grid = stock_terrain();
    let width = grid.width();

    for (i, cell) in grid.cells().iter().enumerate() {
        if cell.biome == Biome::Tundra {
            let y = i as u32 / width;
            assert!(y > grid.height() / 2, "Tundra at southern row {y}");
        }
    }
}
