//! Structured grids and degree of freedom assignment
#![cfg_attr(feature = "strict", deny(warnings), deny(unused_crate_dependencies))]
#![warn(missing_docs)]

pub mod dof;
pub mod error;
pub mod geometry;
mod io;
pub mod mesh;
pub mod parallel;
pub mod shapes;
pub mod topology;
pub mod traits;
pub mod types;

pub use dof::{DofAssignment, DomainBoundaryConditions, Field, FunctionCondition};
pub use error::{Error, Result};
pub use mesh::{MeshSpecification, StructuredMesh, StructuredMeshBuilder};
pub use parallel::{ParallelExecutor, ParallelizationMethod};
pub use topology::IsoParametricNodeGraph;
