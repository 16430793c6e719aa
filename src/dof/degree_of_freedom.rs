//! A single degree of freedom
use crate::{
    error::{Error, Result},
    types::{ConstraintType, DofType, RealScalar},
};
use std::hash::{Hash, Hasher};

/// A degree of freedom attached to a node
///
/// Two degrees of freedom are equal if they have the same type and belong to the same node;
/// constraint, value and id are ignored.
#[derive(Debug, Clone)]
pub struct DegreeOfFreedom<T: RealScalar> {
    dof_type: DofType,
    node: usize,
    constraint: ConstraintType,
    value: Option<T>,
    id: Option<usize>,
}

impl<T: RealScalar> DegreeOfFreedom<T> {
    /// Create a free degree of freedom
    pub fn new_free(dof_type: DofType, node: usize) -> Self {
        Self {
            dof_type,
            node,
            constraint: ConstraintType::Free,
            value: None,
            id: None,
        }
    }

    /// Create a fixed degree of freedom with a prescribed value
    pub fn new_fixed(dof_type: DofType, node: usize, value: T) -> Self {
        Self {
            dof_type,
            node,
            constraint: ConstraintType::Fixed,
            value: Some(value),
            id: None,
        }
    }

    /// Create new
    ///
    /// Fails if a free degree of freedom is given a value.
    pub fn new(
        dof_type: DofType,
        node: usize,
        constraint: ConstraintType,
        value: Option<T>,
    ) -> Result<Self> {
        if constraint == ConstraintType::Free && value.is_some() {
            return Err(Error::invalid(format!(
                "free {dof_type:?} degree of freedom of node {node} cannot have a value"
            )));
        }
        Ok(Self {
            dof_type,
            node,
            constraint,
            value,
            id: None,
        })
    }

    /// The physical quantity
    pub fn dof_type(&self) -> DofType {
        self.dof_type
    }

    /// Global index of the owning node
    pub fn node(&self) -> usize {
        self.node
    }

    /// Constraint
    pub fn constraint(&self) -> ConstraintType {
        self.constraint
    }

    /// Is this an unknown of the linear system?
    pub fn is_free(&self) -> bool {
        self.constraint == ConstraintType::Free
    }

    /// Prescribed value, if fixed
    pub fn value(&self) -> Option<T> {
        self.value
    }

    /// Set the prescribed value
    pub fn set_value(&mut self, value: T) -> Result<()> {
        if self.is_free() {
            return Err(Error::invalid(format!(
                "cannot set the value of free {:?} degree of freedom of node {}",
                self.dof_type, self.node
            )));
        }
        self.value = Some(value);
        Ok(())
    }

    /// Solver id, set for free degrees of freedom once they are numbered
    pub fn id(&self) -> Option<usize> {
        self.id
    }

    pub(crate) fn set_id(&mut self, id: usize) {
        self.id = Some(id);
    }
}

impl<T: RealScalar> PartialEq for DegreeOfFreedom<T> {
    fn eq(&self, other: &Self) -> bool {
        self.dof_type == other.dof_type && self.node == other.node
    }
}

impl<T: RealScalar> Eq for DegreeOfFreedom<T> {}

impl<T: RealScalar> Hash for DegreeOfFreedom<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.dof_type.hash(state);
        self.node.hash(state);
    }
}
