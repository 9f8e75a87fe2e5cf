//! Grid dimension presets.

use std::fmt::{self, Display};

/// A grid side length from the fixed preset set.
///
/// The selector offers a closed list of dimensions, so invalid side
/// lengths cannot be represented once past the conversion boundary.
/// [`Dimension::None`] (side 0) means "no grid" and is the default
/// selection.
///
/// # Examples
///
/// ```
/// use numfall_core::Dimension;
///
/// let dimension = Dimension::D4;
/// assert_eq!(dimension.side(), 4);
/// assert_eq!(dimension.cell_count(), 16);
///
/// // The default selection renders nothing.
/// assert!(Dimension::default().is_none());
/// ```
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum Dimension {
    /// No grid (side 0). The reset/default selection.
    #[default]
    None = 0,
    /// A 2×2 grid.
    D2 = 2,
    /// A 3×3 grid.
    D3 = 3,
    /// A 4×4 grid.
    D4 = 4,
    /// A 6×6 grid.
    D6 = 6,
    /// An 8×8 grid.
    D8 = 8,
    /// A 10×10 grid.
    D10 = 10,
    /// A 12×12 grid.
    D12 = 12,
    /// A 16×16 grid.
    D16 = 16,
}

impl Dimension {
    /// All selectable dimensions, in the order the selector offers them.
    pub const ALL: [Self; 9] = [
        Self::None,
        Self::D2,
        Self::D3,
        Self::D4,
        Self::D6,
        Self::D8,
        Self::D10,
        Self::D12,
        Self::D16,
    ];

    /// Creates a dimension from a raw side length.
    ///
    /// # Errors
    ///
    /// Returns [`DimensionError::Invalid`] if `side` is not one of the
    /// preset values. This is a programming-error boundary, not a
    /// retryable condition.
    ///
    /// # Examples
    ///
    /// ```
    /// use numfall_core::Dimension;
    ///
    /// assert_eq!(Dimension::from_side(6), Ok(Dimension::D6));
    /// assert!(Dimension::from_side(5).is_err());
    /// ```
    pub fn from_side(side: usize) -> Result<Self, DimensionError> {
        Self::ALL
            .into_iter()
            .find(|dimension| dimension.side() == side)
            .ok_or(DimensionError::Invalid { side })
    }

    /// Returns the side length of the grid.
    #[must_use]
    pub const fn side(self) -> usize {
        self as usize
    }

    /// Returns the number of cells in a `side × side` grid.
    #[must_use]
    pub const fn cell_count(self) -> usize {
        self.side() * self.side()
    }

    /// Returns `true` for the empty "no grid" dimension.
    #[must_use]
    pub const fn is_none(self) -> bool {
        matches!(self, Self::None)
    }
}

impl Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Display::fmt(&self.side(), f)
    }
}

/// Errors produced when validating a grid dimension.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum DimensionError {
    /// The side length is not in [`Dimension::ALL`].
    #[display("invalid grid dimension: {side}")]
    Invalid {
        /// The rejected raw side length.
        side: usize,
    },
}
