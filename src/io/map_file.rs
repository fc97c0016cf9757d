//! JSON map loading and saving
//!
//! Files hold a single object with a `regions` array, each region shaped like
//! `{"id": "wa", "name": "Western Australia", "path": "M10,60 ...", "color": null,
//! "adjacentRegions": ["nt", "sa"]}`. `path`, `color` and `adjacentRegions` may be omitted.

use crate::io::error::{MapColorError, Result};
use crate::model::region::MapData;
use std::fs;
use std::path::Path;

/// Parse a map from JSON text
///
/// # Errors
///
/// Returns `MapParse` if the text is not a valid map description
pub fn parse_map(json: &str) -> Result<MapData> {
    Ok(serde_json::from_str(json)?)
}

/// Load a map from a JSON file
///
/// # Errors
///
/// Returns an error if the file cannot be read or does not hold a valid map
pub fn load_map(path: &Path) -> Result<MapData> {
    let contents = fs::read_to_string(path).map_err(|source| MapColorError::FileSystem {
        path: path.to_path_buf(),
        operation: "read",
        source,
    })?;
    serde_json::from_str(&contents).map_err(|source| MapColorError::MapParse {
        path: path.to_path_buf(),
        source,
    })
}

/// Write a map as pretty-printed JSON
///
/// # Errors
///
/// Returns an error if serialization or the write fails
pub fn save_map(map: &MapData, path: &Path) -> Result<()> {
    let json = serde_json::to_string_pretty(map).map_err(|source| MapColorError::MapParse {
        path: path.to_path_buf(),
        source,
    })?;
    fs::write(path, json).map_err(|source| MapColorError::FileSystem {
        path: path.to_path_buf(),
        operation: "write",
        source,
    })
}
