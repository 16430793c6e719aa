//! Mesh builder
use crate::{error::Result, traits::Mesh, types::RealScalar};

pub trait Builder {
    //! Object that can be used to build a mesh

    /// The type of the mesh that the builder creates
    type Mesh: Mesh<T = Self::T>;
    /// The floating point type used for coordinates
    type T: RealScalar;

    /// Set the physical coordinates of the node at the given parametric indices
    fn add_node(&mut self, indices: &[usize], coordinates: &[Self::T]) -> Result<()>;

    /// Create the mesh
    fn create_mesh(self) -> Result<Self::Mesh>;
}
