//! Boundary tables
//!
//! Everything that differs between 1D, 2D and 3D meshes is in these tables. The tangent pair
//! of a boundary gives its outward normal as tangents[0] x tangents[1]. Axes beyond the mesh
//! dimension stand for the unit embedding vector.
use crate::types::{Direction, Position};

struct BoundaryFace {
    position: Position,
    tangents: [Direction; 2],
}

const FACES_1D: [BoundaryFace; 2] = [
    BoundaryFace {
        position: Position::Left,
        tangents: [Direction::Three, Direction::Two],
    },
    BoundaryFace {
        position: Position::Right,
        tangents: [Direction::Two, Direction::Three],
    },
];

const FACES_2D: [BoundaryFace; 4] = [
    BoundaryFace {
        position: Position::Left,
        tangents: [Direction::Three, Direction::Two],
    },
    BoundaryFace {
        position: Position::Right,
        tangents: [Direction::Two, Direction::Three],
    },
    BoundaryFace {
        position: Position::Bottom,
        tangents: [Direction::One, Direction::Three],
    },
    BoundaryFace {
        position: Position::Top,
        tangents: [Direction::Three, Direction::One],
    },
];

const FACES_3D: [BoundaryFace; 6] = [
    BoundaryFace {
        position: Position::Left,
        tangents: [Direction::Three, Direction::Two],
    },
    BoundaryFace {
        position: Position::Right,
        tangents: [Direction::Two, Direction::Three],
    },
    BoundaryFace {
        position: Position::Back,
        tangents: [Direction::One, Direction::Three],
    },
    BoundaryFace {
        position: Position::Front,
        tangents: [Direction::Three, Direction::One],
    },
    BoundaryFace {
        position: Position::Bottom,
        tangents: [Direction::Two, Direction::One],
    },
    BoundaryFace {
        position: Position::Top,
        tangents: [Direction::One, Direction::Two],
    },
];

fn faces(dim: usize) -> &'static [BoundaryFace] {
    match dim {
        1 => &FACES_1D,
        2 => &FACES_2D,
        3 => &FACES_3D,
        _ => &[],
    }
}

/// The tangent pair spanning a boundary, ordered so that their cross product points outward
pub(crate) fn tangents(position: Position, dim: usize) -> Option<[Direction; 2]> {
    faces(dim)
        .iter()
        .find(|f| f.position == position)
        .map(|f| f.tangents)
}

/// Does the node at `indices` lie on a boundary?
pub(crate) fn on_boundary(position: Position, nodes_per_direction: &[usize], indices: &[usize]) -> bool {
    match position.axis(nodes_per_direction.len()) {
        Some(axis) => {
            let a = axis.index();
            if position.is_upper() {
                indices[a] + 1 == nodes_per_direction[a]
            } else {
                indices[a] == 0
            }
        }
        None => false,
    }
}
