use std::fmt;

/// Color slot for every region of a constraint graph
///
/// Slots are indexed by the region's position in the graph and hold a palette index,
/// or `None` while uncolored. The number of slots is fixed at construction, so a search
/// can never add or drop regions.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Assignment {
    slots: Vec<Option<usize>>,
}

impl Assignment {
    /// Create an assignment with every region uncolored
    pub fn new(region_count: usize) -> Self {
        Self {
            slots: vec![None; region_count],
        }
    }

    /// Palette index assigned to a region
    pub fn get(&self, region: usize) -> Option<usize> {
        self.slots.get(region).copied().flatten()
    }

    /// Assign a palette index to a region
    pub fn set(&mut self, region: usize, color: usize) {
        if let Some(slot) = self.slots.get_mut(region) {
            *slot = Some(color);
        }
    }

    /// Revert a region to uncolored, returning what it held
    pub fn clear(&mut self, region: usize) -> Option<usize> {
        self.slots.get_mut(region).and_then(Option::take)
    }

    /// Number of region slots
    pub const fn len(&self) -> usize {
        self.slots.len()
    }

    /// Whether the assignment covers no regions
    pub const fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Number of regions currently holding a color
    pub fn colored_count(&self) -> usize {
        self.slots.iter().filter(|slot| slot.is_some()).count()
    }

    /// Whether every region holds a color
    pub fn is_complete(&self) -> bool {
        self.slots.iter().all(Option::is_some)
    }

    /// Slots in region order
    pub fn iter(&self) -> impl Iterator<Item = Option<usize>> + '_ {
        self.slots.iter().copied()
    }

    /// Borrow the raw slots
    pub fn as_slice(&self) -> &[Option<usize>] {
        &self.slots
    }
}

impl fmt::Display for Assignment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rendered: Vec<String> = self
            .slots
            .iter()
            .map(|slot| slot.map_or_else(|| "-".to_string(), |c| c.to_string()))
            .collect();
        write!(f, "[{}]", rendered.join(" "))
    }
}
