//! Map integrity checks and coloring verification
//!
//! The solver itself reads adjacency exactly as given. Callers that care about map integrity
//! run these checks first, or repair the adjacency with [`symmetrize`].

use crate::io::error::{MapColorError, Result};
use crate::model::region::Region;
use std::collections::{HashMap, HashSet};
use std::fmt;

/// A structural problem found in a region list
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum MapIssue {
    /// More than one region uses this id
    DuplicateId {
        /// The repeated id
        id: String,
    },
    /// An adjacency entry names a region that is not on the map
    DanglingReference {
        /// Region holding the entry
        from: String,
        /// Missing region id
        to: String,
    },
    /// `from` lists `to`, but `to` does not list `from`
    AsymmetricAdjacency {
        /// Region listing the edge
        from: String,
        /// Region missing the reverse edge
        to: String,
    },
    /// A region lists itself as a neighbor
    SelfAdjacency {
        /// The region id
        id: String,
    },
}

impl fmt::Display for MapIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DuplicateId { id } => write!(f, "region id '{id}' is used more than once"),
            Self::DanglingReference { from, to } => {
                write!(f, "region '{from}' lists unknown neighbor '{to}'")
            }
            Self::AsymmetricAdjacency { from, to } => {
                write!(f, "region '{from}' lists '{to}' but not the other way round")
            }
            Self::SelfAdjacency { id } => write!(f, "region '{id}' lists itself as a neighbor"),
        }
    }
}

/// Report every structural problem of a region list, in input order
pub fn validate_map(regions: &[Region]) -> Vec<MapIssue> {
    let mut issues = Vec::new();
    let mut by_id: HashMap<&str, &Region> = HashMap::with_capacity(regions.len());

    for region in regions {
        if by_id.insert(region.id.as_str(), region).is_some() {
            issues.push(MapIssue::DuplicateId {
                id: region.id.clone(),
            });
        }
    }

    for region in regions {
        for adjacent_id in &region.adjacent {
            if adjacent_id == &region.id {
                issues.push(MapIssue::SelfAdjacency {
                    id: region.id.clone(),
                });
                continue;
            }
            match by_id.get(adjacent_id.as_str()) {
                None => issues.push(MapIssue::DanglingReference {
                    from: region.id.clone(),
                    to: adjacent_id.clone(),
                }),
                Some(other) if !other.is_adjacent_to(&region.id) => {
                    issues.push(MapIssue::AsymmetricAdjacency {
                        from: region.id.clone(),
                        to: adjacent_id.clone(),
                    });
                }
                Some(_) => {}
            }
        }
    }

    issues
}

/// Fail on the first structural problem of a region list
///
/// # Errors
///
/// Returns `InvalidMap` naming the first issue and how many were found in total
pub fn check_map(regions: &[Region]) -> Result<()> {
    let issues = validate_map(regions);
    match issues.first() {
        None => Ok(()),
        Some(first) => Err(MapColorError::InvalidMap {
            reason: format!("{first} (issues found: {})", issues.len()),
        }),
    }
}

/// Copy the regions with every edge made mutual
///
/// Missing reverse edges are added, while self references, repeated entries and
/// references to unknown regions are dropped. Colors are left untouched.
pub fn symmetrize(regions: &[Region]) -> Vec<Region> {
    let known: HashSet<&str> = regions.iter().map(|r| r.id.as_str()).collect();
    let mut result: Vec<Region> = regions
        .iter()
        .map(|region| Region {
            adjacent: Vec::new(),
            ..region.clone()
        })
        .collect();

    for region in regions {
        for adjacent_id in &region.adjacent {
            if adjacent_id == &region.id || !known.contains(adjacent_id.as_str()) {
                continue;
            }
            link(&mut result, &region.id, adjacent_id);
            link(&mut result, adjacent_id, &region.id);
        }
    }

    result
}

fn link(regions: &mut [Region], from: &str, to: &str) {
    for region in regions.iter_mut().filter(|r| r.id == from) {
        if !region.is_adjacent_to(to) {
            region.adjacent.push(to.to_string());
        }
    }
}

/// Pairs of adjacent regions currently holding the same color
///
/// Each unordered pair is reported once, in the order it is first met. Uncolored regions
/// and unknown neighbors never conflict.
pub fn find_conflicts(regions: &[Region]) -> Vec<(String, String)> {
    let by_id: HashMap<&str, &Region> = regions.iter().map(|r| (r.id.as_str(), r)).collect();
    let mut seen: HashSet<(&str, &str)> = HashSet::new();
    let mut conflicts = Vec::new();

    for region in regions {
        let Some(color) = region.color.as_deref() else {
            continue;
        };
        for adjacent_id in &region.adjacent {
            let Some(other) = by_id.get(adjacent_id.as_str()) else {
                continue;
            };
            if other.id == region.id || other.color.as_deref() != Some(color) {
                continue;
            }
            let key = if region.id <= other.id {
                (region.id.as_str(), other.id.as_str())
            } else {
                (other.id.as_str(), region.id.as_str())
            };
            if seen.insert(key) {
                conflicts.push((region.id.clone(), other.id.clone()));
            }
        }
    }

    conflicts
}

/// Whether every region is colored and no adjacent pair shares a color
pub fn verify_coloring(regions: &[Region]) -> bool {
    regions.iter().all(|r| r.color.is_some()) && find_conflicts(regions).is_empty()
}
