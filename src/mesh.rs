//! Structured meshes
mod boundary;
mod builder;
mod elements;
mod ghost;
mod index;
mod specification;
mod structured;

pub use builder::StructuredMeshBuilder;
pub(crate) use index::multi_indices;
pub use ghost::{GhostPseudoMesh, StencilNode};
pub use specification::MeshSpecification;
pub use structured::StructuredMesh;
#[cfg(feature = "serde")]
pub use structured::SerializableStructuredMesh;
