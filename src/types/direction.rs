//! Parametric directions

/// A parametric axis of a structured mesh
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord, Clone, Copy, Hash)]
pub enum Direction {
    /// First parametric axis
    One,
    /// Second parametric axis
    Two,
    /// Third parametric axis
    Three,
}

impl Direction {
    /// All directions, in axis order
    pub const ALL: [Direction; 3] = [Direction::One, Direction::Two, Direction::Three];

    /// The directions spanned by a mesh of dimension `dim`
    pub fn all(dim: usize) -> &'static [Direction] {
        &Self::ALL[..dim.min(3)]
    }

    /// The zero-based axis index
    pub fn index(self) -> usize {
        match self {
            Direction::One => 0,
            Direction::Two => 1,
            Direction::Three => 2,
        }
    }

    /// The direction of a zero-based axis index
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }
}
