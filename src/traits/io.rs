//! I/O traits
mod vtk;
#[cfg(feature = "serde")]
mod ron;

pub use vtk::VtkExport;
#[cfg(feature = "serde")]
pub use ron::{ConvertToSerializable, RONExport, RONImport};
