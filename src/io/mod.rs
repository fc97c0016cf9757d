/// Command-line interface for solving sample or file-based maps
pub mod cli;
/// Solver constants and runtime configuration defaults
pub mod configuration;
/// Error types for map loading, configuration and editing
pub mod error;
/// JSON map loading and saving
pub mod map_file;
/// Terminal progress display for running searches
pub mod progress;
/// Human-readable step log of a search
pub mod trace;
