//! Deterministic region ordering policies
//!
//! The order only affects how much backtracking happens, never whether a coloring is found.
//! Both policies are deterministic so repeated runs produce identical step sequences.

use crate::solver::graph::ConstraintGraph;
use clap::ValueEnum;
use std::cmp::Reverse;

/// Order in which the search visits regions
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum RegionOrdering {
    /// Most neighbors first, ties kept in input order
    #[default]
    MostConstrained,
    /// Regions exactly as they appear in the input
    #[value(name = "input")]
    InputOrder,
}

/// Compute the visiting order of all regions as dense indices
pub fn order_regions(graph: &ConstraintGraph, ordering: RegionOrdering) -> Vec<usize> {
    let mut order: Vec<usize> = (0..graph.len()).collect();
    match ordering {
        RegionOrdering::MostConstrained => {
            // Stable sort keeps input order among equal degrees
            order.sort_by_key(|&region| Reverse(graph.degree(region)));
        }
        RegionOrdering::InputOrder => {}
    }
    order
}
