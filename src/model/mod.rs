/// Dense per-region color slots threaded through the search
pub mod assignment;
/// Ordered color palettes and palette-index bitsets
pub mod palette;
/// Regions, maps and map-building operations
pub mod region;
