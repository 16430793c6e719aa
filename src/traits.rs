//! Traits

mod boundary;
mod builder;
mod io;
mod mesh;

pub use boundary::{BoundaryCondition, BoundaryConditions};
pub use builder::Builder;
#[cfg(feature = "serde")]
pub use io::{ConvertToSerializable, RONExport, RONImport};
pub use io::VtkExport;
pub use mesh::Mesh;
