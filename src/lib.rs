//! Backtracking map coloring with an observable search
//!
//! Regions declare which other regions they touch; the solver assigns each region a color
//! from an ordered palette so that no two adjacent regions share one, or proves that the
//! palette is too small. Every assignment and every backtrack can be observed as it happens,
//! which lets a front end replay the search step by step.

#![forbid(unsafe_code)]

/// Input/output operations, configuration and error handling
pub mod io;
/// Built-in sample maps and random map generation
pub mod maps;
/// Regions, palettes and color assignments
pub mod model;
/// Constraint checking, region ordering and the backtracking search driver
pub mod solver;

pub use io::error::{MapColorError, Result};
pub use model::palette::Palette;
pub use model::region::{MapData, Region};
pub use solver::backtrack::{solve, solve_with_observer};
pub use solver::constraint::is_color_valid;
