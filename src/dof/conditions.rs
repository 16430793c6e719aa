//! Boundary conditions given by functions of the physical position
use crate::{
    error::{Error, Result},
    traits::{BoundaryCondition, BoundaryConditions},
    types::{BoundaryConditionType, Position, RealScalar},
};
use std::collections::HashMap;
use std::fmt;

type ScalarFn<T> = dyn Fn(&[T]) -> T + Send + Sync;
type VectorFn<T> = dyn Fn(&[T]) -> Vec<T> + Send + Sync;

enum Evaluator<T> {
    Scalar(Box<ScalarFn<T>>),
    Vector(Box<VectorFn<T>>),
}

/// A boundary condition given by a scalar or a vector function
///
/// A scalar condition cannot be evaluated as a vector and vice versa.
pub struct FunctionCondition<T: RealScalar> {
    evaluator: Evaluator<T>,
}

impl<T: RealScalar> FunctionCondition<T> {
    /// A condition with the same scalar value everywhere
    pub fn constant(value: T) -> Self {
        Self::scalar(move |_| value)
    }

    /// A condition with the same vector value everywhere
    pub fn constant_vector(values: Vec<T>) -> Self {
        Self::vector(move |_| values.clone())
    }

    /// A scalar condition
    pub fn scalar(f: impl Fn(&[T]) -> T + Send + Sync + 'static) -> Self {
        Self {
            evaluator: Evaluator::Scalar(Box::new(f)),
        }
    }

    /// A vector condition
    pub fn vector(f: impl Fn(&[T]) -> Vec<T> + Send + Sync + 'static) -> Self {
        Self {
            evaluator: Evaluator::Vector(Box::new(f)),
        }
    }

    /// Is this a scalar condition?
    pub fn is_scalar(&self) -> bool {
        matches!(self.evaluator, Evaluator::Scalar(_))
    }
}

impl<T: RealScalar> fmt::Debug for FunctionCondition<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let kind = if self.is_scalar() { "scalar" } else { "vector" };
        f.debug_struct("FunctionCondition")
            .field("kind", &kind)
            .finish()
    }
}

impl<T: RealScalar> BoundaryCondition<T> for FunctionCondition<T> {
    fn scalar_value_at(&self, x: &[T]) -> Result<T> {
        match &self.evaluator {
            Evaluator::Scalar(f) => Ok(f(x)),
            Evaluator::Vector(_) => Err(Error::invalid(
                "a vector boundary condition has no scalar value",
            )),
        }
    }

    fn vector_value_at(&self, x: &[T]) -> Result<Vec<T>> {
        match &self.evaluator {
            Evaluator::Vector(f) => Ok(f(x)),
            Evaluator::Scalar(_) => Err(Error::invalid(
                "a scalar boundary condition has no vector value",
            )),
        }
    }
}

/// Boundary conditions of a domain, stored per boundary position and kind
#[derive(Debug)]
pub struct DomainBoundaryConditions<T: RealScalar> {
    conditions: HashMap<(Position, BoundaryConditionType), Vec<FunctionCondition<T>>>,
}

impl<T: RealScalar> DomainBoundaryConditions<T> {
    /// Create new
    pub fn new() -> Self {
        Self {
            conditions: HashMap::new(),
        }
    }

    /// Add a condition at a boundary position
    pub fn add(
        &mut self,
        position: Position,
        kind: BoundaryConditionType,
        condition: FunctionCondition<T>,
    ) {
        self.conditions
            .entry((position, kind))
            .or_default()
            .push(condition);
    }

    /// Add a condition at a boundary position and return self
    pub fn with(
        mut self,
        position: Position,
        kind: BoundaryConditionType,
        condition: FunctionCondition<T>,
    ) -> Self {
        self.add(position, kind, condition);
        self
    }

    /// Add a Dirichlet condition with a constant value at every given position
    pub fn with_uniform_dirichlet(mut self, positions: &[Position], value: T) -> Self {
        for p in positions {
            self.add(
                *p,
                BoundaryConditionType::Dirichlet,
                FunctionCondition::constant(value),
            );
        }
        self
    }
}

impl<T: RealScalar> Default for DomainBoundaryConditions<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: RealScalar> BoundaryConditions<T> for DomainBoundaryConditions<T> {
    type Condition = FunctionCondition<T>;

    fn conditions(&self, position: Position, kind: BoundaryConditionType) -> &[Self::Condition] {
        self.conditions
            .get(&(position, kind))
            .map(|c| c.as_slice())
            .unwrap_or(&[])
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_scalar_condition() {
        let c = FunctionCondition::scalar(|x: &[f64]| x[0] + 2.0 * x[1]);
        assert_relative_eq!(c.scalar_value_at(&[1.0, 0.5]).unwrap(), 2.0);
        assert!(matches!(
            c.vector_value_at(&[1.0, 0.5]),
            Err(Error::InvalidConfiguration(_))
        ));
    }

    #[test]
    fn test_vector_condition() {
        let c = FunctionCondition::constant_vector(vec![1.0, -1.0]);
        assert_eq!(c.vector_value_at(&[0.0]).unwrap(), vec![1.0, -1.0]);
        assert!(c.scalar_value_at(&[0.0]).is_err());
        assert!(!c.is_scalar());
    }

    #[test]
    fn test_domain_conditions() {
        let bcs = DomainBoundaryConditions::<f64>::new()
            .with_uniform_dirichlet(&[Position::Left, Position::Right], 1.0)
            .with(
                Position::Left,
                BoundaryConditionType::Dirichlet,
                FunctionCondition::constant(2.0),
            );
        assert_eq!(
            bcs.conditions(Position::Left, BoundaryConditionType::Dirichlet)
                .len(),
            2
        );
        assert!(bcs
            .conditions(Position::Left, BoundaryConditionType::Neumann)
            .is_empty());
        assert!(bcs
            .conditions(Position::Top, BoundaryConditionType::Dirichlet)
            .is_empty());
    }
}
