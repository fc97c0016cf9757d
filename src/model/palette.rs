//! Ordered color palettes and palette-index bitsets

use crate::io::configuration::{DEFAULT_PALETTE, MAX_PALETTE_SIZE};
use crate::io::error::{Result, invalid_parameter};
use bitvec::prelude::*;
use std::fmt;

/// Ordered, finite sequence of distinct color values
///
/// The solver only relies on order and distinctness; the values themselves are whatever the
/// caller displays (hex strings in the default palette).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Palette {
    colors: Vec<String>,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            colors: DEFAULT_PALETTE.iter().map(ToString::to_string).collect(),
        }
    }
}

impl Palette {
    /// Create a palette from color values in try order
    ///
    /// # Errors
    ///
    /// Returns an error if the palette is empty, larger than `MAX_PALETTE_SIZE`,
    /// or contains the same color twice
    pub fn new<I, S>(colors: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let colors: Vec<String> = colors.into_iter().map(Into::into).collect();

        if colors.is_empty() {
            return Err(invalid_parameter(
                "palette",
                &"[]",
                &"palette needs at least one color",
            ));
        }
        if colors.len() > MAX_PALETTE_SIZE {
            return Err(invalid_parameter(
                "palette",
                &colors.len(),
                &format!("at most {MAX_PALETTE_SIZE} colors are supported"),
            ));
        }
        for (i, color) in colors.iter().enumerate() {
            if colors.iter().take(i).any(|earlier| earlier == color) {
                return Err(invalid_parameter(
                    "palette",
                    color,
                    &"colors must be distinct",
                ));
            }
        }

        Ok(Self { colors })
    }

    /// Number of colors in the palette
    pub const fn len(&self) -> usize {
        self.colors.len()
    }

    /// Always false for a constructed palette
    pub const fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    /// Color value at a palette index
    pub fn get(&self, index: usize) -> Option<&str> {
        self.colors.get(index).map(String::as_str)
    }

    /// Palette index of a color value
    pub fn index_of(&self, color: &str) -> Option<usize> {
        self.colors.iter().position(|c| c == color)
    }

    /// All colors in try order
    pub fn colors(&self) -> &[String] {
        &self.colors
    }

    /// Restrict the palette to its first `count` colors
    ///
    /// # Errors
    ///
    /// Returns an error if `count` exceeds the palette length; the request is never
    /// silently truncated
    pub fn select(&self, count: usize) -> Result<&[String]> {
        self.colors.get(..count).ok_or_else(|| {
            invalid_parameter(
                "max_colors",
                &count,
                &format!("palette only has {} colors", self.colors.len()),
            )
        })
    }
}

/// Fixed-size bitset of palette indices
///
/// Uses 0-based indexing matching palette positions.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ColorSet {
    bits: BitVec,
}

impl ColorSet {
    /// Create a set with no colors present
    pub fn new(palette_size: usize) -> Self {
        Self {
            bits: bitvec![0; palette_size],
        }
    }

    /// Create a set containing every palette index
    pub fn all(palette_size: usize) -> Self {
        Self {
            bits: bitvec![1; palette_size],
        }
    }

    /// Insert a palette index, ignoring indices outside the palette
    pub fn insert(&mut self, color: usize) {
        if color < self.bits.len() {
            self.bits.set(color, true);
        }
    }

    /// Remove a palette index
    pub fn remove(&mut self, color: usize) {
        if color < self.bits.len() {
            self.bits.set(color, false);
        }
    }

    /// Test palette index membership
    pub fn contains(&self, color: usize) -> bool {
        self.bits.get(color).as_deref() == Some(&true)
    }

    /// Test if no colors are present
    pub fn is_empty(&self) -> bool {
        self.bits.not_any()
    }

    /// Count colors in the set
    pub fn count(&self) -> usize {
        self.bits.count_ones()
    }

    /// Lowest palette index in the set
    pub fn first(&self) -> Option<usize> {
        self.bits.first_one()
    }

    /// Extract all palette indices in ascending order
    pub fn to_vec(&self) -> Vec<usize> {
        self.bits.iter_ones().collect()
    }
}

impl fmt::Display for ColorSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ColorSet({} colors: {:?})", self.count(), self.to_vec())
    }
}
