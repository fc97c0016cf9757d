//! Hand-drawn demonstration maps
//!
//! Shapes are SVG path strings on a roughly 240x240 canvas.

use crate::io::error::{MapColorError, Result};
use crate::model::region::{MapData, Region};

/// Names accepted by [`sample_map`]
pub const SAMPLE_NAMES: [&str; 3] = ["australia", "usa", "custom"];

/// Look up a sample map by name
///
/// # Errors
///
/// Returns `UnknownSample` for names not in [`SAMPLE_NAMES`]
pub fn sample_map(name: &str) -> Result<MapData> {
    match name {
        "australia" => Ok(australia()),
        "usa" => Ok(usa()),
        "custom" => Ok(MapData::default()),
        _ => Err(MapColorError::UnknownSample {
            name: name.to_string(),
        }),
    }
}

/// States and territories of mainland Australia plus Tasmania
pub fn australia() -> MapData {
    MapData::new(vec![
        Region::new(
            "wa",
            "Western Australia",
            "M10,60 L60,40 L70,120 L20,150 Z",
        )
        .with_adjacent(["nt", "sa"]),
        Region::new(
            "nt",
            "Northern Territory",
            "M60,40 L120,40 L110,100 L70,120 Z",
        )
        .with_adjacent(["wa", "sa", "qld"]),
        Region::new(
            "sa",
            "South Australia",
            "M70,120 L110,100 L140,140 L100,180 Z",
        )
        .with_adjacent(["wa", "nt", "qld", "nsw", "vic"]),
        Region::new(
            "qld",
            "Queensland",
            "M110,100 L120,40 L200,50 L170,130 L140,140 Z",
        )
        .with_adjacent(["nt", "sa", "nsw"]),
        Region::new(
            "nsw",
            "New South Wales",
            "M140,140 L170,130 L190,160 L150,180 Z",
        )
        .with_adjacent(["sa", "qld", "vic"]),
        Region::new("vic", "Victoria", "M140,180 L150,180 L180,190 L130,190 Z")
            .with_adjacent(["sa", "nsw", "tas"]),
        Region::new(
            "tas",
            "Tasmania",
            "M150,210 C150,210 160,200 170,210 C180,220 160,230 150,220 C140,210 150,210 150,210 Z",
        )
        .with_adjacent(["vic"]),
    ])
}

/// Six broad regions of the contiguous United States
pub fn usa() -> MapData {
    MapData::new(vec![
        Region::new("west", "West Coast", "M20,40 L60,20 L80,100 L40,120 Z")
            .with_adjacent(["mountain", "southwest"]),
        Region::new("mountain", "Mountain", "M60,20 L120,30 L130,110 L80,100 Z")
            .with_adjacent(["west", "midwest", "southwest"]),
        Region::new("midwest", "Midwest", "M120,30 L200,40 L190,100 L130,110 Z")
            .with_adjacent(["mountain", "northeast", "south"]),
        Region::new("northeast", "Northeast", "M200,40 L240,50 L220,90 L190,100 Z")
            .with_adjacent(["midwest", "south"]),
        Region::new(
            "southwest",
            "Southwest",
            "M40,120 L80,100 L130,110 L120,160 L60,150 Z",
        )
        .with_adjacent(["west", "mountain", "south"]),
        Region::new(
            "south",
            "South",
            "M130,110 L190,100 L220,90 L200,150 L120,160 Z",
        )
        .with_adjacent(["midwest", "northeast", "southwest"]),
    ])
}
