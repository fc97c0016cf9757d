//! Solver constants and runtime configuration defaults

/// Default palette, in the order the solver tries colors
pub const DEFAULT_PALETTE: [&str; 4] = [
    "#3B82F6", // blue
    "#10B981", // green
    "#8B5CF6", // purple
    "#EF4444", // red
];

/// Number of colors used when none is requested
pub const DEFAULT_MAX_COLORS: usize = 4;

// Bitsets and CLI validation are sized against this
/// Largest palette accepted
pub const MAX_PALETTE_SIZE: usize = 16;

/// Sample map used by the CLI when no map file is given
pub const DEFAULT_SAMPLE: &str = "australia";

/// Fixed seed for reproducible random maps
pub const DEFAULT_SEED: u64 = 42;

// Progress display settings
/// Spinner redraw interval in milliseconds
pub const PROGRESS_TICK_INTERVAL_MS: u64 = 80;
/// Steps between progress message refreshes
pub const PROGRESS_UPDATE_STEPS: usize = 64;

// Output settings
/// Suffix added to output filenames
pub const OUTPUT_SUFFIX: &str = "_colored";
