//! Fields
use crate::{
    error::{Error, Result},
    types::DofType,
};

/// The ordered degree of freedom types carried by every node
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Field {
    types: Vec<DofType>,
}

impl Field {
    /// Create new
    ///
    /// The types must be non-empty and distinct.
    pub fn new(types: Vec<DofType>) -> Result<Self> {
        if types.is_empty() {
            return Err(Error::invalid("a field needs at least one degree of freedom type"));
        }
        for (i, t) in types.iter().enumerate() {
            if types[..i].contains(t) {
                return Err(Error::invalid(format!("{t:?} appears twice in the field")));
            }
        }
        Ok(Self { types })
    }

    /// A field with a single type
    pub fn scalar(dof_type: DofType) -> Self {
        Self {
            types: vec![dof_type],
        }
    }

    /// The types, in field order
    pub fn types(&self) -> &[DofType] {
        &self.types
    }

    /// Number of types
    pub fn len(&self) -> usize {
        self.types.len()
    }

    /// A field is never empty
    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }

    /// Position of a type in field order
    pub fn index_of(&self, dof_type: DofType) -> Option<usize> {
        self.types.iter().position(|t| *t == dof_type)
    }
}
