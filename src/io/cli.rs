//! Command-line interface for solving sample or file-based maps

use crate::io::configuration::{DEFAULT_MAX_COLORS, DEFAULT_SAMPLE, OUTPUT_SUFFIX};
use crate::io::error::Result;
use crate::io::map_file::{load_map, save_map};
use crate::io::progress::ProgressManager;
use crate::io::trace::StepLog;
use crate::maps::samples::sample_map;
use crate::model::palette::Palette;
use crate::model::region::MapData;
use crate::solver::backtrack::{
    BacktrackSolver, SolveOutcome, SolveReport, SolverConfig, Step, StepObserver,
};
use crate::solver::ordering::RegionOrdering;
use crate::solver::validation::{check_map, validate_map};
use clap::Parser;
use log::{info, warn};
use std::io::Write;
use std::path::{Path, PathBuf};

#[derive(Parser, Debug)]
#[command(name = "mapcolor")]
#[command(
    author,
    version,
    about = "Color a map so that no two adjacent regions share a color"
)]
/// Command-line arguments for the map coloring tool
// CLI tools commonly need multiple boolean flags for various features and user preferences
#[allow(clippy::struct_excessive_bools)]
pub struct Cli {
    /// JSON map file to color; a sample map is used when omitted
    #[arg(value_name = "MAP")]
    pub target: Option<PathBuf>,

    /// Sample map to color when no file is given (australia, usa, custom)
    #[arg(short, long, default_value = DEFAULT_SAMPLE)]
    pub sample: String,

    /// Number of palette colors the solver may use
    #[arg(short, long, default_value_t = DEFAULT_MAX_COLORS)]
    pub colors: usize,

    /// Custom palette as comma-separated color values, in try order
    #[arg(short, long, value_delimiter = ',')]
    pub palette: Option<Vec<String>>,

    /// Order in which regions are colored
    #[arg(long, value_enum, default_value_t = RegionOrdering::MostConstrained)]
    pub ordering: RegionOrdering,

    /// Treat every adjacency as mutual before solving
    #[arg(long)]
    pub symmetrize: bool,

    /// Report map integrity problems and exit without solving
    #[arg(long)]
    pub validate: bool,

    /// Refuse to solve a map with integrity problems
    #[arg(long, conflicts_with = "validate")]
    pub strict: bool,

    /// Print every assignment and backtrack step as the search makes it
    #[arg(short, long)]
    pub trace: bool,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,

    /// Write the colored map as JSON to this file
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Write the colored map next to the input, with a suffix added to its name
    #[arg(long, conflicts_with = "output")]
    pub save: bool,
}

impl Cli {
    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }

    /// Short name of the map being colored
    pub fn map_label(&self) -> String {
        self.target.as_ref().map_or_else(
            || self.sample.clone(),
            |path| {
                path.file_stem()
                    .unwrap_or_default()
                    .to_string_lossy()
                    .to_string()
            },
        )
    }

    /// Where the colored map is written, if anywhere
    pub fn output_path(&self) -> Option<PathBuf> {
        if let Some(ref output) = self.output {
            return Some(output.clone());
        }
        if !self.save {
            return None;
        }
        Some(match self.target {
            Some(ref target) => suffixed_path(target),
            None => PathBuf::from(format!("{}{OUTPUT_SUFFIX}.json", self.sample)),
        })
    }

    /// Solver settings requested on the command line
    pub const fn solver_config(&self) -> SolverConfig {
        SolverConfig {
            palette_size: self.colors,
            ordering: self.ordering,
            symmetrize: self.symmetrize,
        }
    }

    /// Palette requested on the command line, or the default one
    ///
    /// # Errors
    ///
    /// Returns an error if the custom palette is empty, too large or has repeated colors
    pub fn palette(&self) -> Result<Palette> {
        match self.palette {
            Some(ref colors) => Palette::new(colors.iter().cloned()),
            None => Ok(Palette::default()),
        }
    }
}

fn suffixed_path(input_path: &Path) -> PathBuf {
    let stem = input_path.file_stem().unwrap_or_default();
    let output_name = format!("{}{OUTPUT_SUFFIX}.json", stem.to_string_lossy());

    if let Some(parent) = input_path.parent() {
        parent.join(output_name)
    } else {
        PathBuf::from(output_name)
    }
}

/// Loads the requested map, solves it and reports the result
pub struct MapProcessor {
    cli: Cli,
    progress_manager: Option<ProgressManager>,
}

impl MapProcessor {
    /// Create a new processor with the given CLI arguments
    pub fn new(cli: Cli) -> Self {
        let progress_manager = cli.should_show_progress().then(ProgressManager::new);

        Self {
            cli,
            progress_manager,
        }
    }

    /// Process the map according to CLI arguments, writing the report to stdout
    ///
    /// # Errors
    ///
    /// Returns an error if the map cannot be loaded, the configuration is invalid,
    /// or writing output fails
    pub fn process(&mut self) -> Result<()> {
        let stdout = std::io::stdout();
        let mut out = stdout.lock();
        self.process_to(&mut out)
    }

    /// Process the map according to CLI arguments, writing the report to `out`
    ///
    /// An uncolorable map is reported, not treated as an error.
    ///
    /// # Errors
    ///
    /// Returns an error if the map cannot be loaded, the configuration is invalid,
    /// or writing output fails
    pub fn process_to<W: Write>(&mut self, out: &mut W) -> Result<()> {
        let map = self.load()?;
        let issues = validate_map(&map.regions);

        if self.cli.validate {
            if issues.is_empty() {
                writeln!(out, "No problems found in {} regions", map.len())?;
            }
            for issue in &issues {
                writeln!(out, "{issue}")?;
            }
            return Ok(());
        }
        if self.cli.strict {
            check_map(&map.regions)?;
        }
        for issue in &issues {
            warn!("{issue}");
        }

        let palette = self.cli.palette()?;
        let solver = BacktrackSolver::new(&map.regions, &palette, self.cli.solver_config())?;
        let report = self.run(&solver, map.len(), out)?;

        match report.outcome {
            SolveOutcome::Solved(ref coloring) => {
                let colored = MapData::new(coloring.apply_to(&map.regions));
                for region in &colored.regions {
                    writeln!(
                        out,
                        "{} ({}): {}",
                        region.name,
                        region.id,
                        region.color.as_deref().unwrap_or("-")
                    )?;
                }
                writeln!(
                    out,
                    "Colored {} regions using {} of {} colors ({} steps, {} backtracks)",
                    coloring.len(),
                    coloring.colors_used(),
                    self.cli.colors,
                    report.stats.steps,
                    report.stats.backtracks
                )?;

                if let Some(path) = self.cli.output_path() {
                    save_map(&colored, &path)?;
                    info!("wrote colored map to {}", path.display());
                }
            }
            SolveOutcome::Unsatisfiable => {
                writeln!(
                    out,
                    "No coloring of '{}' exists with {} colors ({} steps, {} backtracks)",
                    self.cli.map_label(),
                    self.cli.colors,
                    report.stats.steps,
                    report.stats.backtracks
                )?;
            }
            SolveOutcome::Interrupted => {
                writeln!(out, "Search interrupted")?;
            }
        }

        Ok(())
    }

    fn load(&self) -> Result<MapData> {
        let map = match self.cli.target {
            Some(ref path) => load_map(path)?,
            None => sample_map(&self.cli.sample)?,
        };
        if map.is_empty() {
            info!("map '{}' has no regions", self.cli.map_label());
        }
        Ok(map)
    }

    fn run<W: Write>(
        &mut self,
        solver: &BacktrackSolver,
        region_count: usize,
        out: &mut W,
    ) -> Result<SolveReport> {
        let mut step_log = self.cli.trace.then(move || StepLog::new(out));
        let label = self.cli.map_label();

        if let Some(ref mut pm) = self.progress_manager {
            pm.start(&label, region_count);
        }

        let progress = &mut self.progress_manager;
        let trace = &mut step_log;
        let report = solver.run(&mut |step: &Step<'_>| {
            if let Some(pm) = progress.as_mut() {
                pm.on_step(step);
            }
            if let Some(log) = trace.as_mut() {
                log.on_step(step);
            }
        });

        if let Some(ref mut pm) = self.progress_manager {
            pm.finish(&report.outcome, &report.stats);
        }
        if let Some(ref mut log) = step_log {
            log.finish(&report.outcome, self.cli.colors)?;
        }

        Ok(report)
    }
}
