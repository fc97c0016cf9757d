//! Seeded random map generation
//!
//! Two families: triangulated grids, which stay planar and are therefore always
//! four-colorable, and unconstrained random graphs for exhaustive small-map checks.
//! Every generated map has mutual adjacency and unique ids `r0`, `r1`, ...

use crate::io::error::{Result, invalid_parameter};
use crate::model::region::{MapData, Region};
use rand::{Rng, SeedableRng, rngs::StdRng};

/// Side length of a grid cell in the generated shape paths
const CELL_SIZE: usize = 20;

fn check_probability(parameter: &'static str, probability: f64) -> Result<()> {
    if (0.0..=1.0).contains(&probability) {
        Ok(())
    } else {
        Err(invalid_parameter(
            parameter,
            &probability,
            &"probability must lie in [0, 1]",
        ))
    }
}

fn region_id(index: usize) -> String {
    format!("r{index}")
}

fn add_edge(regions: &mut [Region], a: usize, b: usize) {
    let (id_a, id_b) = (region_id(a), region_id(b));
    if let Some(region) = regions.get_mut(a) {
        region.adjacent.push(id_b);
    }
    if let Some(region) = regions.get_mut(b) {
        region.adjacent.push(id_a);
    }
}

/// Grid of square regions, each touching its orthogonal neighbors
///
/// Every grid square additionally gets one of its two diagonals with probability
/// `diagonal_probability`, which keeps the map planar.
///
/// # Errors
///
/// Returns an error if `diagonal_probability` is outside `[0, 1]`
pub fn grid_map(rows: usize, cols: usize, diagonal_probability: f64, seed: u64) -> Result<MapData> {
    check_probability("diagonal_probability", diagonal_probability)?;

    let mut rng = StdRng::seed_from_u64(seed);
    let mut regions: Vec<Region> = (0..rows * cols)
        .map(|index| {
            let (row, col) = (index / cols, index % cols);
            Region::new(
                region_id(index),
                format!("Cell {row},{col}"),
                format!(
                    "M{},{} h{CELL_SIZE} v{CELL_SIZE} h-{CELL_SIZE} Z",
                    col * CELL_SIZE,
                    row * CELL_SIZE
                ),
            )
        })
        .collect();

    for row in 0..rows {
        for col in 0..cols {
            let index = row * cols + col;
            if col + 1 < cols {
                add_edge(&mut regions, index, index + 1);
            }
            if row + 1 < rows {
                add_edge(&mut regions, index, index + cols);
            }
            if col + 1 < cols && row + 1 < rows && rng.random_bool(diagonal_probability) {
                if rng.random_bool(0.5) {
                    add_edge(&mut regions, index, index + cols + 1);
                } else {
                    add_edge(&mut regions, index + 1, index + cols);
                }
            }
        }
    }

    Ok(MapData::new(regions))
}

/// Regions where every pair touches independently with probability `edge_probability`
///
/// The result need not be planar, so it may need more than four colors.
///
/// # Errors
///
/// Returns an error if `edge_probability` is outside `[0, 1]`
pub fn random_graph_map(region_count: usize, edge_probability: f64, seed: u64) -> Result<MapData> {
    check_probability("edge_probability", edge_probability)?;

    let mut rng = StdRng::seed_from_u64(seed);
    let mut regions: Vec<Region> = (0..region_count)
        .map(|index| Region::new(region_id(index), format!("Region {index}"), ""))
        .collect();

    for a in 0..region_count {
        for b in a + 1..region_count {
            if rng.random_bool(edge_probability) {
                add_edge(&mut regions, a, b);
            }
        }
    }

    Ok(MapData::new(regions))
}
