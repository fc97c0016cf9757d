/// Seeded random map generation
pub mod random;
/// Hand-drawn demonstration maps
pub mod samples;
