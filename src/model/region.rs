//! Regions, maps and map-building operations
//!
//! The serialized field names follow the map format used by the drawing front end:
//! the shape is an SVG path under `path`, adjacency is listed under `adjacentRegions`.

use crate::io::error::{MapColorError, Result, invalid_parameter, unknown_region};
use serde::{Deserialize, Serialize};

/// A named area of the map with a color slot and a list of touching regions
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Region {
    /// Unique identifier
    pub id: String,
    /// Display name
    pub name: String,
    /// Opaque shape descriptor, never interpreted by the solver
    #[serde(rename = "path", default)]
    pub shape: String,
    /// Current color value, `None` when uncolored
    #[serde(default)]
    pub color: Option<String>,
    /// Ids of regions this one must not share a color with
    #[serde(rename = "adjacentRegions", default)]
    pub adjacent: Vec<String>,
}

impl Region {
    /// Create an uncolored region with no neighbors
    pub fn new(id: impl Into<String>, name: impl Into<String>, shape: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            shape: shape.into(),
            color: None,
            adjacent: Vec::new(),
        }
    }

    /// Builder-style adjacency list
    #[must_use]
    pub fn with_adjacent<I, S>(mut self, adjacent: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.adjacent = adjacent.into_iter().map(Into::into).collect();
        self
    }

    /// Number of listed neighbors
    pub fn degree(&self) -> usize {
        self.adjacent.len()
    }

    /// Whether `other` appears in this region's adjacency list
    pub fn is_adjacent_to(&self, other: &str) -> bool {
        self.adjacent.iter().any(|id| id == other)
    }
}

/// A complete map: the region list the solver works on
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MapData {
    /// All regions, in input order
    pub regions: Vec<Region>,
}

impl MapData {
    /// Wrap an existing region list
    pub const fn new(regions: Vec<Region>) -> Self {
        Self { regions }
    }

    /// Look up a region by id
    pub fn region(&self, id: &str) -> Option<&Region> {
        self.regions.iter().find(|r| r.id == id)
    }

    fn region_mut(&mut self, id: &str) -> Result<&mut Region> {
        self.regions
            .iter_mut()
            .find(|r| r.id == id)
            .ok_or_else(|| unknown_region(id))
    }

    /// Add an uncolored, unconnected region
    ///
    /// # Errors
    ///
    /// Returns `DuplicateRegion` if the id is already on the map
    pub fn add_region(
        &mut self,
        id: impl Into<String>,
        name: impl Into<String>,
        shape: impl Into<String>,
    ) -> Result<()> {
        let region = Region::new(id, name, shape);
        if self.region(&region.id).is_some() {
            return Err(MapColorError::DuplicateRegion { id: region.id });
        }
        self.regions.push(region);
        Ok(())
    }

    /// Change a region's display name
    ///
    /// # Errors
    ///
    /// Returns `UnknownRegion` if no region has this id
    pub fn rename_region(&mut self, id: &str, name: impl Into<String>) -> Result<()> {
        self.region_mut(id)?.name = name.into();
        Ok(())
    }

    /// Remove a region together with every adjacency entry pointing at it
    ///
    /// # Errors
    ///
    /// Returns `UnknownRegion` if no region has this id
    pub fn remove_region(&mut self, id: &str) -> Result<Region> {
        let position = self
            .regions
            .iter()
            .position(|r| r.id == id)
            .ok_or_else(|| unknown_region(id))?;
        let removed = self.regions.remove(position);
        for region in &mut self.regions {
            region.adjacent.retain(|adj| adj != id);
        }
        Ok(removed)
    }

    /// Record that two regions touch, on both sides
    ///
    /// Connecting regions that are already adjacent leaves the map unchanged.
    ///
    /// # Errors
    ///
    /// Returns an error if either id is unknown or both ids are the same region
    pub fn connect(&mut self, a: &str, b: &str) -> Result<()> {
        if a == b {
            return Err(invalid_parameter(
                "adjacency",
                &a,
                &"a region cannot be adjacent to itself",
            ));
        }
        if self.region(b).is_none() {
            return Err(unknown_region(b));
        }

        let first = self.region_mut(a)?;
        if !first.is_adjacent_to(b) {
            first.adjacent.push(b.to_string());
        }
        let second = self.region_mut(b)?;
        if !second.is_adjacent_to(a) {
            second.adjacent.push(a.to_string());
        }
        Ok(())
    }

    /// Remove the adjacency between two regions, on both sides
    ///
    /// Unknown ids and missing edges are ignored.
    pub fn disconnect(&mut self, a: &str, b: &str) {
        for region in &mut self.regions {
            if region.id == a {
                region.adjacent.retain(|adj| adj != b);
            } else if region.id == b {
                region.adjacent.retain(|adj| adj != a);
            }
        }
    }

    /// Reset every region to uncolored
    pub fn clear_colors(&mut self) {
        for region in &mut self.regions {
            region.color = None;
        }
    }

    /// Number of regions
    pub const fn len(&self) -> usize {
        self.regions.len()
    }

    /// Whether the map has no regions
    pub const fn is_empty(&self) -> bool {
        self.regions.is_empty()
    }
}
