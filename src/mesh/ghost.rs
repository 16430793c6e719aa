//! Ghost layers
use super::{index::extended_parametric, StructuredMesh};
use crate::{
    geometry::{GhostNode, Node},
    traits::Mesh,
    types::RealScalar,
};
use log::debug;
use std::collections::HashMap;

/// A real or ghost node seen by a stencil
#[derive(Debug, Clone, Copy)]
pub enum StencilNode<'a, T: RealScalar> {
    /// A node of the mesh
    Real(&'a Node<T>),
    /// A synthetic node outside the mesh
    Ghost(&'a GhostNode<T>),
}

impl<T: RealScalar> StencilNode<'_, T> {
    /// Logical grid indices
    pub fn parametric(&self) -> &[isize] {
        match self {
            StencilNode::Real(n) => n.parametric(),
            StencilNode::Ghost(n) => n.parametric(),
        }
    }

    /// Reference position
    pub fn template(&self) -> &[T] {
        match self {
            StencilNode::Real(n) => n.coordinates().template(),
            StencilNode::Ghost(n) => n.template(),
        }
    }

    /// Is this a ghost node?
    pub fn is_ghost(&self) -> bool {
        matches!(self, StencilNode::Ghost(_))
    }
}

/// Ghost nodes around a structured mesh
///
/// The logical index range of every axis is extended by `depth` on both sides. Each extended
/// coordinate that is not a node of the mesh becomes a ghost node with parametric and template
/// coordinates. The mesh itself is left unchanged.
#[derive(Debug)]
pub struct GhostPseudoMesh<'a, T: RealScalar> {
    mesh: &'a StructuredMesh<T>,
    depth: usize,
    ghost_nodes: Vec<GhostNode<T>>,
    ghost_index: HashMap<Vec<isize>, usize>,
}

impl<'a, T: RealScalar> GhostPseudoMesh<'a, T> {
    /// Create new
    pub fn new(mesh: &'a StructuredMesh<T>, depth: usize) -> Self {
        let mut ghost_nodes = vec![];
        let mut ghost_index = HashMap::new();
        if depth > 0 {
            for parametric in extended_parametric(mesh.nodes_per_direction(), depth) {
                if mesh.parametric_index().contains_key(&parametric) {
                    continue;
                }
                let template = mesh.template().apply(&parametric);
                ghost_index.insert(parametric.clone(), ghost_nodes.len());
                ghost_nodes.push(GhostNode::new(parametric, template));
            }
        }
        debug!(
            "Created {} ghost nodes of depth {depth} around a {}D mesh",
            ghost_nodes.len(),
            mesh.dim()
        );
        Self {
            mesh,
            depth,
            ghost_nodes,
            ghost_index,
        }
    }

    /// The mesh this ghost layer surrounds
    pub fn mesh(&self) -> &'a StructuredMesh<T> {
        self.mesh
    }

    /// Depth of the ghost layer
    pub fn depth(&self) -> usize {
        self.depth
    }

    /// Number of ghost nodes along each axis (on both sides combined)
    pub fn ghost_nodes_per_direction(&self) -> Vec<usize> {
        vec![2 * self.depth; self.mesh.dim()]
    }

    /// The ghost nodes, in total order of the extended index space
    pub fn ghost_nodes(&self) -> &[GhostNode<T>] {
        &self.ghost_nodes
    }

    /// Number of ghost nodes
    pub fn len(&self) -> usize {
        self.ghost_nodes.len()
    }

    /// Are there no ghost nodes?
    pub fn is_empty(&self) -> bool {
        self.ghost_nodes.is_empty()
    }

    /// The ghost node at the given parametric coordinates
    pub fn ghost_node(&self, parametric: &[isize]) -> Option<&GhostNode<T>> {
        self.ghost_index
            .get(parametric)
            .map(|i| &self.ghost_nodes[*i])
    }

    /// The real or ghost node at the given parametric coordinates
    pub fn resolve(&self, parametric: &[isize]) -> Option<StencilNode<'_, T>> {
        match self.mesh.parametric_index().get(parametric) {
            Some(global) => Some(StencilNode::Real(&self.mesh.total_nodes()[*global])),
            None => self.ghost_node(parametric).map(StencilNode::Ghost),
        }
    }
}
