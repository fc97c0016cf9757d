//! Region id resolution and neighbor lists
//!
//! The search works on dense region indices. This module resolves the string ids of a
//! region list once, up front, and keeps the neighbor list of every region as indices.

use crate::io::error::{MapColorError, Result};
use crate::model::region::Region;
use log::{debug, warn};
use std::collections::HashMap;

/// Adjacency constraints of a map, resolved to dense region indices
#[derive(Clone, Debug)]
pub struct ConstraintGraph {
    ids: Vec<String>,
    names: Vec<String>,
    lookup: HashMap<String, usize>,
    neighbors: Vec<Vec<usize>>,
    dangling: Vec<(String, String)>,
}

impl ConstraintGraph {
    /// Resolve the adjacency lists exactly as given
    ///
    /// References to ids that are not on the map are dropped and recorded as dangling,
    /// so they never constrain the search. Self references and repeated entries are ignored.
    ///
    /// # Errors
    ///
    /// Returns `DuplicateRegion` if two regions share an id
    pub fn from_regions(regions: &[Region]) -> Result<Self> {
        Self::build(regions, false)
    }

    /// Resolve the adjacency lists and add every missing reverse edge
    ///
    /// # Errors
    ///
    /// Returns `DuplicateRegion` if two regions share an id
    pub fn symmetric_from_regions(regions: &[Region]) -> Result<Self> {
        Self::build(regions, true)
    }

    fn build(regions: &[Region], symmetrize: bool) -> Result<Self> {
        let mut lookup = HashMap::with_capacity(regions.len());
        for (index, region) in regions.iter().enumerate() {
            if lookup.insert(region.id.clone(), index).is_some() {
                return Err(MapColorError::DuplicateRegion {
                    id: region.id.clone(),
                });
            }
        }

        let mut neighbors: Vec<Vec<usize>> = vec![Vec::new(); regions.len()];
        let mut dangling = Vec::new();

        for (index, region) in regions.iter().enumerate() {
            for adjacent_id in &region.adjacent {
                let Some(&other) = lookup.get(adjacent_id) else {
                    warn!(
                        "region '{}' lists unknown neighbor '{adjacent_id}', ignoring it",
                        region.id
                    );
                    dangling.push((region.id.clone(), adjacent_id.clone()));
                    continue;
                };
                if other == index {
                    debug!("region '{}' lists itself as a neighbor", region.id);
                    continue;
                }
                add_neighbor(&mut neighbors, index, other);
                if symmetrize {
                    add_neighbor(&mut neighbors, other, index);
                }
            }
        }

        Ok(Self {
            ids: regions.iter().map(|r| r.id.clone()).collect(),
            names: regions.iter().map(|r| r.name.clone()).collect(),
            lookup,
            neighbors,
            dangling,
        })
    }

    /// Number of regions
    pub const fn len(&self) -> usize {
        self.ids.len()
    }

    /// Whether the graph has no regions
    pub const fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Dense index of a region id
    pub fn index_of(&self, id: &str) -> Option<usize> {
        self.lookup.get(id).copied()
    }

    /// Region id at a dense index
    pub fn id(&self, region: usize) -> Option<&str> {
        self.ids.get(region).map(String::as_str)
    }

    /// Display name at a dense index
    pub fn name(&self, region: usize) -> Option<&str> {
        self.names.get(region).map(String::as_str)
    }

    /// All region ids in index order
    pub fn ids(&self) -> &[String] {
        &self.ids
    }

    /// Neighbor indices of a region, empty for unknown indices
    pub fn neighbors(&self, region: usize) -> &[usize] {
        self.neighbors.get(region).map(Vec::as_slice).unwrap_or_default()
    }

    /// Number of resolved neighbors of a region
    pub fn degree(&self, region: usize) -> usize {
        self.neighbors(region).len()
    }

    /// Adjacency entries that referenced ids not on the map, as `(from, to)`
    pub fn dangling(&self) -> &[(String, String)] {
        &self.dangling
    }
}

fn add_neighbor(neighbors: &mut [Vec<usize>], from: usize, to: usize) {
    if let Some(list) = neighbors.get_mut(from)
        && !list.contains(&to)
    {
        list.push(to);
    }
}
