//! Traits for a structured mesh
use crate::{error::Result, geometry::Node, types::Position, types::RealScalar};

/// A structured mesh
///
/// Nodes are identified by their global index, which runs densely over `0..node_count()`.
pub trait Mesh {
    /// Scalar type
    type T: RealScalar;

    /// Number of parametric axes
    fn dim(&self) -> usize;

    /// Number of nodes along each parametric axis
    fn nodes_per_direction(&self) -> &[usize];

    /// Total number of nodes
    fn node_count(&self) -> usize;

    /// The node with a given global index
    fn node(&self, global: usize) -> Option<&Node<Self::T>>;

    /// The global index of the node at the given parametric coordinates
    fn global_from_parametric(&self, parametric: &[isize]) -> Option<usize>;

    /// Boundary positions of this mesh, in boundary order
    fn boundary_positions(&self) -> &[Position];

    /// Global indices of every node on a boundary, in total order
    ///
    /// Nodes on edges and corners appear in the lists of all boundaries that contain them. A
    /// position that is not a boundary of a mesh of this dimension is an error.
    fn boundary_nodes(&self, position: Position) -> Result<&[usize]>;

    /// Global indices of the internal nodes
    fn internal_nodes(&self) -> &[usize];
}
