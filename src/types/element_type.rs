//! Element types

/// The shape of the elements a structured mesh can be split into
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum ElementType {
    /// Two node line segment
    Line,
    /// Three node triangle
    Triangle,
    /// Four node quadrilateral
    Quadrilateral,
    /// Eight node hexahedron
    Hexahedron,
    /// Six node wedge (triangular prism)
    Wedge,
}

impl ElementType {
    /// The dimension of meshes this element type applies to
    pub fn dim(self) -> usize {
        match self {
            ElementType::Line => 1,
            ElementType::Triangle | ElementType::Quadrilateral => 2,
            ElementType::Hexahedron | ElementType::Wedge => 3,
        }
    }

    /// Number of nodes of an element
    pub fn node_count(self) -> usize {
        match self {
            ElementType::Line => 2,
            ElementType::Triangle => 3,
            ElementType::Quadrilateral => 4,
            ElementType::Wedge => 6,
            ElementType::Hexahedron => 8,
        }
    }

    /// Number of elements created from each cell of the grid
    pub fn elements_per_cell(self) -> usize {
        match self {
            ElementType::Triangle => 2,
            _ => 1,
        }
    }
}
