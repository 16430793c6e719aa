//! Boundary and relative positions
use super::Direction;
use itertools::Itertools;

/// A boundary of a structured mesh
///
/// Left and Right bound the first axis. In 2D, Bottom and Top bound the second axis. In 3D,
/// Back and Front bound the second axis and Bottom and Top bound the third.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord, Clone, Copy, Hash)]
pub enum Position {
    /// Start of the first axis
    Left,
    /// End of the first axis
    Right,
    /// Start of the second axis (3D)
    Back,
    /// End of the second axis (3D)
    Front,
    /// Start of the last axis (2D and 3D)
    Bottom,
    /// End of the last axis (2D and 3D)
    Top,
}

impl Position {
    /// The boundaries of a mesh of dimension `dim`, in boundary order
    ///
    /// The order decides which boundary owns nodes shared by several boundaries.
    pub fn boundaries(dim: usize) -> &'static [Position] {
        match dim {
            1 => &[Position::Left, Position::Right],
            2 => &[
                Position::Left,
                Position::Right,
                Position::Bottom,
                Position::Top,
            ],
            3 => &[
                Position::Left,
                Position::Right,
                Position::Back,
                Position::Front,
                Position::Bottom,
                Position::Top,
            ],
            _ => &[],
        }
    }

    /// The axis bounded by this position in a mesh of dimension `dim`
    pub fn axis(self, dim: usize) -> Option<Direction> {
        match (self, dim) {
            (Position::Left | Position::Right, 1..=3) => Some(Direction::One),
            (Position::Bottom | Position::Top, 2) => Some(Direction::Two),
            (Position::Back | Position::Front, 3) => Some(Direction::Two),
            (Position::Bottom | Position::Top, 3) => Some(Direction::Three),
            _ => None,
        }
    }

    /// Is this the boundary at the end (largest index) of its axis?
    pub fn is_upper(self) -> bool {
        matches!(self, Position::Right | Position::Front | Position::Top)
    }
}

/// Position of a neighbour relative to a centre node, as a unit step in parametric space
///
/// Each component of the offset is -1, 0 or 1. Components beyond the mesh dimension are 0.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord, Clone, Copy, Hash)]
pub struct RelativePosition {
    offset: [i8; 3],
}

impl RelativePosition {
    /// Create from an offset; components are clamped to [-1, 1]
    pub fn new(offset: [i8; 3]) -> Self {
        Self {
            offset: offset.map(|o| o.clamp(-1, 1)),
        }
    }

    /// The axis-aligned position one step along `direction`, forwards or backwards
    pub fn along(direction: Direction, forward: bool) -> Self {
        let mut offset = [0; 3];
        offset[direction.index()] = if forward { 1 } else { -1 };
        Self { offset }
    }

    /// The axis-aligned position pointing at a boundary
    pub fn towards(position: Position, dim: usize) -> Option<Self> {
        position
            .axis(dim)
            .map(|axis| Self::along(axis, position.is_upper()))
    }

    /// The offset
    pub fn offset(&self) -> [i8; 3] {
        self.offset
    }

    /// The position in the opposite direction
    pub fn opposite(&self) -> Self {
        Self {
            offset: self.offset.map(|o| -o),
        }
    }

    /// The axis and sign if this position is axis-aligned
    pub fn axis(&self) -> Option<(Direction, i8)> {
        let nonzero = self
            .offset
            .iter()
            .enumerate()
            .filter(|(_, o)| **o != 0)
            .collect::<Vec<_>>();
        match nonzero[..] {
            [(axis, sign)] => Direction::from_index(axis).map(|d| (d, *sign)),
            _ => None,
        }
    }

    /// Is exactly one component non-zero?
    pub fn is_axis_aligned(&self) -> bool {
        self.axis().is_some()
    }

    /// All relative positions of a mesh of dimension `dim`
    ///
    /// Without diagonals this gives the 2 * dim axis-aligned positions. With diagonals it gives
    /// every non-zero offset: 2 in 1D, 8 in 2D and 26 in 3D.
    pub fn all(dim: usize, include_diagonals: bool) -> Vec<Self> {
        let dim = dim.min(3);
        (0..dim)
            .map(|_| -1i8..=1)
            .multi_cartesian_product()
            .filter_map(|components| {
                let mut offset = [0; 3];
                offset[..dim].copy_from_slice(&components);
                let position = Self { offset };
                let nonzero = offset.iter().filter(|o| **o != 0).count();
                match nonzero {
                    0 => None,
                    1 => Some(position),
                    _ if include_diagonals => Some(position),
                    _ => None,
                }
            })
            .collect()
    }

    /// The parametric coordinates `depth` steps away from `centre` in this position
    pub fn step(&self, centre: &[isize], depth: usize) -> Vec<isize> {
        centre
            .iter()
            .zip(self.offset.iter())
            .map(|(c, o)| c + *o as isize * depth as isize)
            .collect()
    }
}
