//! Types

mod direction;
mod dof_type;
mod element_type;
mod position;

pub use direction::Direction;
pub use dof_type::{BoundaryConditionType, ConstraintType, DofType};
pub use element_type::ElementType;
pub use position::{Position, RelativePosition};

use num::traits::FloatConst;
use num::Float;
use std::fmt::Debug;
use std::iter::Sum;

/// Scalar type used for coordinates, metrics and degree of freedom values
pub trait RealScalar: Float + FloatConst + Debug + Default + Sum + Send + Sync + 'static {}

impl RealScalar for f32 {}
impl RealScalar for f64 {}

/// Convert a (possibly negative) logical index to a scalar
pub(crate) fn scalar_from_index<T: RealScalar>(index: isize) -> T {
    T::from(index).unwrap_or_else(T::nan)
}

/// The coordinate system in which a position is expressed
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum CoordinateType {
    /// Physical coordinates
    Natural,
    /// Logical grid indices
    Parametric,
    /// Reference coordinates given by the template map of the mesh
    Template,
}
