//! Degree of freedom tags

/// The physical quantity a degree of freedom represents
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord, Clone, Copy, Hash)]
pub enum DofType {
    /// Position along the first axis
    Position1,
    /// Position along the second axis
    Position2,
    /// Position along the third axis
    Position3,
    /// Displacement along the first axis
    Displacement1,
    /// Displacement along the second axis
    Displacement2,
    /// Displacement along the third axis
    Displacement3,
    /// Rotation about the first axis
    Rotation1,
    /// Rotation about the second axis
    Rotation2,
    /// Rotation about the third axis
    Rotation3,
    /// Temperature
    Temperature,
    /// Pressure
    Pressure,
    /// An unnamed scalar unknown
    UnknownScalarVariable,
    /// First component of an unnamed vector unknown
    UnknownVectorComponent1,
    /// Second component of an unnamed vector unknown
    UnknownVectorComponent2,
    /// Third component of an unnamed vector unknown
    UnknownVectorComponent3,
}

/// Whether a degree of freedom is an unknown or is prescribed
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum ConstraintType {
    /// Unknown of the linear system
    Free,
    /// Value prescribed by a Dirichlet condition
    Fixed,
}

/// Kind of boundary condition
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord, Clone, Copy, Hash)]
pub enum BoundaryConditionType {
    /// Prescribes the value of the degree of freedom
    Dirichlet,
    /// Prescribes the flux through the boundary
    Neumann,
}
