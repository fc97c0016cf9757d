//! Adjacency constraint checks
//!
//! A color is legal for a region when no neighbor currently holds it. All checks here are
//! pure reads of the current state, and an unknown region is always reported as invalid.

use crate::model::assignment::Assignment;
use crate::model::palette::ColorSet;
use crate::model::region::Region;
use crate::solver::graph::ConstraintGraph;

/// Check whether `color` may be assigned to the region with id `region_id`
///
/// Returns `false` when the id is not part of the graph.
pub fn is_valid(
    graph: &ConstraintGraph,
    assignment: &Assignment,
    region_id: &str,
    color: usize,
) -> bool {
    graph
        .index_of(region_id)
        .is_some_and(|region| is_valid_at(graph, assignment, region, color))
}

/// Check whether `color` may be assigned to the region at a dense index
///
/// A region without neighbors accepts every color.
pub fn is_valid_at(
    graph: &ConstraintGraph,
    assignment: &Assignment,
    region: usize,
    color: usize,
) -> bool {
    if region >= graph.len() {
        return false;
    }
    graph
        .neighbors(region)
        .iter()
        .all(|&neighbor| assignment.get(neighbor) != Some(color))
}

/// Palette indices below `palette_size` that no neighbor of `region` currently holds
///
/// Unknown regions get an empty set.
pub fn available_colors(
    graph: &ConstraintGraph,
    assignment: &Assignment,
    region: usize,
    palette_size: usize,
) -> ColorSet {
    if region >= graph.len() {
        return ColorSet::new(palette_size);
    }

    let mut available = ColorSet::all(palette_size);
    for &neighbor in graph.neighbors(region) {
        if let Some(color) = assignment.get(neighbor) {
            available.remove(color);
        }
    }
    available
}

/// Check a color directly against the colors stored on a region list
///
/// Works on the regions as an editor holds them, without building a graph first. Neighbor
/// ids that are not on the map never conflict; an unknown `region_id` is invalid.
pub fn is_color_valid(regions: &[Region], region_id: &str, color: &str) -> bool {
    let Some(region) = regions.iter().find(|r| r.id == region_id) else {
        return false;
    };

    !region.adjacent.iter().any(|adjacent_id| {
        regions
            .iter()
            .find(|r| &r.id == adjacent_id)
            .is_some_and(|adjacent| adjacent.color.as_deref() == Some(color))
    })
}
