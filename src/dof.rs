//! Degrees of freedom

mod assignment;
mod conditions;
mod degree_of_freedom;
mod field;

pub use assignment::DofAssignment;
pub use conditions::{DomainBoundaryConditions, FunctionCondition};
pub use degree_of_freedom::DegreeOfFreedom;
pub use field::Field;
