//! Depth-first search driver with step observation
//!
//! Regions are visited in a fixed order. At each depth the driver tries the palette colors
//! in order, assigns the first legal one and descends; when a depth runs out of colors the
//! driver steps back up, reverts that region and tries its next color. The search state is
//! an explicit assignment plus one color cursor per depth, so map size never limits the
//! call stack.
//!
//! Every assignment and every reversion is reported to a [`StepObserver`] before the search
//! continues, one step at a time.

use crate::io::configuration::DEFAULT_MAX_COLORS;
use crate::io::error::Result;
use crate::model::assignment::Assignment;
use crate::model::palette::{ColorSet, Palette};
use crate::model::region::Region;
use crate::solver::constraint::is_valid_at;
use crate::solver::graph::ConstraintGraph;
use crate::solver::ordering::{RegionOrdering, order_regions};
use log::{debug, trace};
use std::collections::HashMap;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

/// Search parameters
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SolverConfig {
    /// Number of palette colors the search may use, taken from the front of the palette
    pub palette_size: usize,
    /// Region visiting order
    pub ordering: RegionOrdering,
    /// Add missing reverse adjacency edges before searching
    pub symmetrize: bool,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            palette_size: DEFAULT_MAX_COLORS,
            ordering: RegionOrdering::default(),
            symmetrize: false,
        }
    }
}

/// What happened in a search step
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StepKind {
    /// A legal color was assigned to the region
    Assign,
    /// The region's color was reverted after its subtree failed
    Backtrack,
}

/// One observable move of the search
///
/// Everything is borrowed from the running search; observers that keep a step must copy
/// what they need.
#[derive(Clone, Copy, Debug)]
pub struct Step<'a> {
    /// 1-based position in the step sequence
    pub number: usize,
    /// Assignment or reversion
    pub kind: StepKind,
    /// Dense index of the region touched
    pub region: usize,
    /// Palette index assigned, or the one just reverted
    pub color: usize,
    /// Search depth of the region touched
    pub depth: usize,
    /// Full assignment right after the move
    pub assignment: &'a Assignment,
    graph: &'a ConstraintGraph,
    palette: &'a [String],
}

impl<'a> Step<'a> {
    /// Id of the region touched
    pub fn region_id(&self) -> &'a str {
        self.graph.id(self.region).unwrap_or_default()
    }

    /// Display name of the region touched
    pub fn region_name(&self) -> &'a str {
        self.graph.name(self.region).unwrap_or_default()
    }

    /// Color value assigned or reverted
    pub fn color_value(&self) -> &'a str {
        self.palette
            .get(self.color)
            .map(String::as_str)
            .unwrap_or_default()
    }

    /// Current color value of every region, in input order
    pub fn colors(&self) -> impl Iterator<Item = (&'a str, Option<&'a str>)> + 'a {
        let palette = self.palette;
        self.graph
            .ids()
            .iter()
            .zip(self.assignment.iter())
            .map(move |(id, slot)| {
                (
                    id.as_str(),
                    slot.and_then(|c| palette.get(c)).map(String::as_str),
                )
            })
    }

    /// Copy the regions with their colors as of this step
    pub fn snapshot(&self, regions: &[Region]) -> Vec<Region> {
        apply_colors(regions, self.graph, self.assignment, self.palette)
    }
}

/// Receives every search step, synchronously and in order
pub trait StepObserver {
    /// Called once per assignment and once per reversion; the search resumes when it returns
    fn on_step(&mut self, step: &Step<'_>);
}

impl<F> StepObserver for F
where
    F: FnMut(&Step<'_>),
{
    fn on_step(&mut self, step: &Step<'_>) {
        self(step);
    }
}

/// Counters collected during one search
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Observer notifications emitted
    pub steps: usize,
    /// Colors assigned
    pub assignments: usize,
    /// Colors reverted
    pub backtracks: usize,
    /// Deepest level of the search reached
    pub max_depth: usize,
}

/// A complete, legal coloring
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Coloring {
    ids: Vec<String>,
    lookup: HashMap<String, usize>,
    assignment: Assignment,
    palette: Vec<String>,
}

impl Coloring {
    fn new(graph: &ConstraintGraph, assignment: &Assignment, palette: &[String]) -> Self {
        let ids = graph.ids().to_vec();
        let lookup = ids
            .iter()
            .enumerate()
            .map(|(index, id)| (id.clone(), index))
            .collect();
        Self {
            ids,
            lookup,
            assignment: assignment.clone(),
            palette: palette.to_vec(),
        }
    }

    /// Palette index of a region
    pub fn color_index(&self, id: &str) -> Option<usize> {
        self.lookup
            .get(id)
            .and_then(|&index| self.assignment.get(index))
    }

    /// Color value of a region
    pub fn color_of(&self, id: &str) -> Option<&str> {
        self.color_index(id)
            .and_then(|c| self.palette.get(c))
            .map(String::as_str)
    }

    /// `(region id, color value)` pairs in input order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> + '_ {
        self.ids
            .iter()
            .filter_map(|id| self.color_of(id).map(|color| (id.as_str(), color)))
    }

    /// Number of regions colored
    pub const fn len(&self) -> usize {
        self.ids.len()
    }

    /// Whether the map had no regions
    pub const fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// The underlying dense assignment
    pub const fn assignment(&self) -> &Assignment {
        &self.assignment
    }

    /// Palette the coloring draws from
    pub fn palette(&self) -> &[String] {
        &self.palette
    }

    /// Number of distinct colors actually used
    pub fn colors_used(&self) -> usize {
        let mut used = ColorSet::new(self.palette.len());
        for color in self.assignment.iter().flatten() {
            used.insert(color);
        }
        used.count()
    }

    /// Fresh copies of `regions` with their colors filled in
    ///
    /// Regions that are not part of this coloring come back uncolored.
    pub fn apply_to(&self, regions: &[Region]) -> Vec<Region> {
        regions
            .iter()
            .map(|region| Region {
                color: self.color_of(&region.id).map(ToString::to_string),
                ..region.clone()
            })
            .collect()
    }
}

/// How a search ended
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SolveOutcome {
    /// Every region colored without conflicts
    Solved(Coloring),
    /// No legal coloring exists with this palette size
    Unsatisfiable,
    /// The interrupt flag was raised before the search finished
    Interrupted,
}

impl SolveOutcome {
    /// The coloring, if one was found
    pub fn into_coloring(self) -> Option<Coloring> {
        match self {
            Self::Solved(coloring) => Some(coloring),
            Self::Unsatisfiable | Self::Interrupted => None,
        }
    }

    /// Whether a coloring was found
    pub const fn is_solved(&self) -> bool {
        matches!(self, Self::Solved(_))
    }
}

/// Outcome and counters of one search
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SolveReport {
    /// How the search ended
    pub outcome: SolveOutcome,
    /// Counters collected along the way
    pub stats: SearchStats,
}

/// Backtracking map coloring search over one region list
///
/// Construction resolves the map and fixes the visiting order; each call to
/// [`BacktrackSolver::run`] starts from a fresh, fully uncolored assignment.
pub struct BacktrackSolver {
    graph: ConstraintGraph,
    palette: Vec<String>,
    order: Vec<usize>,
    interrupt: Option<Arc<AtomicBool>>,
}

impl BacktrackSolver {
    /// Prepare a search over `regions` with the first `config.palette_size` palette colors
    ///
    /// # Errors
    ///
    /// Returns an error if the palette has fewer colors than requested or two regions
    /// share an id
    pub fn new(regions: &[Region], palette: &Palette, config: SolverConfig) -> Result<Self> {
        let colors = palette.select(config.palette_size)?.to_vec();
        let graph = if config.symmetrize {
            ConstraintGraph::symmetric_from_regions(regions)?
        } else {
            ConstraintGraph::from_regions(regions)?
        };
        let order = order_regions(&graph, config.ordering);

        Ok(Self {
            graph,
            palette: colors,
            order,
            interrupt: None,
        })
    }

    /// Stop the search at the next color attempt once `flag` is set
    #[must_use]
    pub fn with_interrupt(mut self, flag: Arc<AtomicBool>) -> Self {
        self.interrupt = Some(flag);
        self
    }

    /// Resolved constraint graph
    pub const fn graph(&self) -> &ConstraintGraph {
        &self.graph
    }

    /// Region visiting order as dense indices
    pub fn order(&self) -> &[usize] {
        &self.order
    }

    /// Colors the search may use, in try order
    pub fn palette(&self) -> &[String] {
        &self.palette
    }

    /// Search without observing steps
    pub fn run_silent(&self) -> SolveReport {
        self.run(&mut |_: &Step<'_>| {})
    }

    /// Search for a complete coloring, reporting every step to `observer`
    pub fn run<O: StepObserver + ?Sized>(&self, observer: &mut O) -> SolveReport {
        let palette_size = self.palette.len();
        let mut assignment = Assignment::new(self.graph.len());
        let mut cursor = vec![0usize; self.order.len()];
        let mut stats = SearchStats::default();
        let mut depth = 0;

        debug!(
            "searching {} regions with {palette_size} colors",
            self.order.len()
        );

        let outcome = 'search: loop {
            let Some(&region) = self.order.get(depth) else {
                break SolveOutcome::Solved(Coloring::new(
                    &self.graph,
                    &assignment,
                    &self.palette,
                ));
            };

            // Arriving here with the region colored means its subtree failed
            if let Some(previous) = assignment.clear(region) {
                stats.backtracks += 1;
                self.notify(
                    observer,
                    &mut stats,
                    StepKind::Backtrack,
                    region,
                    previous,
                    depth,
                    &assignment,
                );
            }

            let mut placed = false;
            while let Some(color) = cursor.get(depth).copied().filter(|&c| c < palette_size) {
                if self.is_interrupted() {
                    break 'search SolveOutcome::Interrupted;
                }
                if let Some(next) = cursor.get_mut(depth) {
                    *next = color + 1;
                }
                if is_valid_at(&self.graph, &assignment, region, color) {
                    assignment.set(region, color);
                    stats.assignments += 1;
                    self.notify(
                        observer,
                        &mut stats,
                        StepKind::Assign,
                        region,
                        color,
                        depth,
                        &assignment,
                    );
                    placed = true;
                    break;
                }
            }

            if placed {
                depth += 1;
                stats.max_depth = stats.max_depth.max(depth);
                if let Some(next) = cursor.get_mut(depth) {
                    *next = 0;
                }
            } else if depth == 0 {
                break SolveOutcome::Unsatisfiable;
            } else {
                depth -= 1;
            }
        };

        debug!(
            "search finished: solved={} steps={} backtracks={}",
            outcome.is_solved(),
            stats.steps,
            stats.backtracks
        );

        SolveReport { outcome, stats }
    }

    fn is_interrupted(&self) -> bool {
        self.interrupt
            .as_ref()
            .is_some_and(|flag| flag.load(Ordering::Relaxed))
    }

    fn notify<O: StepObserver + ?Sized>(
        &self,
        observer: &mut O,
        stats: &mut SearchStats,
        kind: StepKind,
        region: usize,
        color: usize,
        depth: usize,
        assignment: &Assignment,
    ) {
        stats.steps += 1;
        let step = Step {
            number: stats.steps,
            kind,
            region,
            color,
            depth,
            assignment,
            graph: &self.graph,
            palette: &self.palette,
        };
        trace!(
            "step {} {:?} '{}' color {}",
            step.number,
            kind,
            step.region_id(),
            color
        );
        observer.on_step(&step);
    }
}

/// Color `regions` with the first `max_colors` palette colors
///
/// Returns fresh regions with every color filled in, or `None` when no legal coloring
/// exists with that many colors.
///
/// # Errors
///
/// Returns an error if `max_colors` exceeds the palette or two regions share an id
pub fn solve(
    regions: &[Region],
    palette: &Palette,
    max_colors: usize,
) -> Result<Option<Vec<Region>>> {
    solve_with_observer(regions, palette, max_colors, &mut |_: &Step<'_>| {})
}

/// Like [`solve`], reporting every assignment and reversion to `observer`
///
/// # Errors
///
/// Returns an error if `max_colors` exceeds the palette or two regions share an id
pub fn solve_with_observer<O: StepObserver + ?Sized>(
    regions: &[Region],
    palette: &Palette,
    max_colors: usize,
    observer: &mut O,
) -> Result<Option<Vec<Region>>> {
    let config = SolverConfig {
        palette_size: max_colors,
        ..SolverConfig::default()
    };
    let solver = BacktrackSolver::new(regions, palette, config)?;
    let report = solver.run(observer);
    Ok(report
        .outcome
        .into_coloring()
        .map(|coloring| coloring.apply_to(regions)))
}

fn apply_colors(
    regions: &[Region],
    graph: &ConstraintGraph,
    assignment: &Assignment,
    palette: &[String],
) -> Vec<Region> {
    regions
        .iter()
        .map(|region| Region {
            color: graph
                .index_of(&region.id)
                .and_then(|index| assignment.get(index))
                .and_then(|c| palette.get(c))
                .cloned(),
            ..region.clone()
        })
        .collect()
}
