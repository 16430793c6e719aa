//! Boundary conditions
use crate::{
    error::Result,
    types::{BoundaryConditionType, Position, RealScalar},
};

/// A boundary condition that can be evaluated at a physical position
pub trait BoundaryCondition<T: RealScalar> {
    /// Scalar value of the condition at `x`
    fn scalar_value_at(&self, x: &[T]) -> Result<T>;

    /// Vector value of the condition at `x`, one component per degree of freedom type
    fn vector_value_at(&self, x: &[T]) -> Result<Vec<T>>;
}

/// The boundary conditions of a domain
pub trait BoundaryConditions<T: RealScalar> {
    /// Condition type
    type Condition: BoundaryCondition<T>;

    /// The conditions of a given kind at a boundary position
    fn conditions(&self, position: Position, kind: BoundaryConditionType) -> &[Self::Condition];
}
