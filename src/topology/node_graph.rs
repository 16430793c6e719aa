//! Neighbourhood of a node in parametric space
use crate::{
    dof::{DegreeOfFreedom, DofAssignment},
    error::{Error, Result},
    traits::Mesh,
    types::{ConstraintType, CoordinateType, Direction, DofType, RelativePosition},
};
use std::collections::{BTreeMap, HashMap};

/// The neighbours of a node, grouped by their position relative to it
///
/// For each relative position the neighbours are stored in order of increasing distance, up to
/// the depth of the graph. A sequence ends at the first parametric coordinate that is not a
/// node of the mesh. Positions without any neighbour are left out.
#[derive(Debug)]
pub struct IsoParametricNodeGraph<'a, M: Mesh> {
    mesh: &'a M,
    node: usize,
    depth: usize,
    graph: BTreeMap<RelativePosition, Vec<usize>>,
}

impl<'a, M: Mesh> IsoParametricNodeGraph<'a, M> {
    /// Create new
    pub fn new(mesh: &'a M, node: usize, depth: usize, include_diagonals: bool) -> Result<Self> {
        let centre = mesh
            .node(node)
            .ok_or_else(|| Error::not_found(format!("no node with global index {node}")))?
            .parametric();
        let mut graph = BTreeMap::new();
        for position in RelativePosition::all(mesh.dim(), include_diagonals) {
            let neighbours = (1..=depth)
                .map_while(|d| mesh.global_from_parametric(&position.step(centre, d)))
                .collect::<Vec<_>>();
            if !neighbours.is_empty() {
                graph.insert(position, neighbours);
            }
        }
        Ok(Self {
            mesh,
            node,
            depth,
            graph,
        })
    }

    /// Global index of the centre node
    pub fn node(&self) -> usize {
        self.node
    }

    /// Maximum depth
    pub fn depth(&self) -> usize {
        self.depth
    }

    /// Neighbours by relative position
    pub fn node_graph(&self) -> &BTreeMap<RelativePosition, Vec<usize>> {
        &self.graph
    }

    /// Neighbours at a relative position, nearest first
    pub fn neighbours(&self, position: RelativePosition) -> &[usize] {
        self.graph
            .get(&position)
            .map(|n| n.as_slice())
            .unwrap_or(&[])
    }

    /// Neighbours by relative position, with the depth of some positions reduced
    ///
    /// Positions that are not in `custom_depth` keep the full depth of the graph.
    pub fn node_graph_with_depth(
        &self,
        custom_depth: &HashMap<RelativePosition, usize>,
    ) -> BTreeMap<RelativePosition, Vec<usize>> {
        self.graph
            .iter()
            .filter_map(|(position, neighbours)| {
                let depth = custom_depth
                    .get(position)
                    .map_or(neighbours.len(), |d| (*d).min(neighbours.len()));
                (depth > 0).then(|| (*position, neighbours[..depth].to_vec()))
            })
            .collect()
    }

    /// Degrees of freedom of the neighbours by relative position
    pub fn dof_graph<'d>(
        &self,
        dofs: &'d DofAssignment<M::T>,
    ) -> BTreeMap<RelativePosition, Vec<&'d [DegreeOfFreedom<M::T>]>> {
        self.graph
            .iter()
            .map(|(position, neighbours)| {
                (
                    *position,
                    neighbours
                        .iter()
                        .filter_map(|n| dofs.node_dofs(*n))
                        .collect(),
                )
            })
            .collect()
    }

    /// Degrees of freedom of one type of the neighbours by relative position
    ///
    /// If `constraint` is given, only degrees of freedom with that constraint are kept.
    pub fn specific_dof_graph<'d>(
        &self,
        dofs: &'d DofAssignment<M::T>,
        dof_type: DofType,
        constraint: Option<ConstraintType>,
    ) -> BTreeMap<RelativePosition, Vec<&'d DegreeOfFreedom<M::T>>> {
        self.graph
            .iter()
            .filter_map(|(position, neighbours)| {
                let selected = neighbours
                    .iter()
                    .filter_map(|n| dofs.dof(*n, dof_type))
                    .filter(|d| constraint.map_or(true, |c| d.constraint() == c))
                    .collect::<Vec<_>>();
                (!selected.is_empty()).then_some((*position, selected))
            })
            .collect()
    }

    fn check_direction(&self, direction: Direction) -> Result<()> {
        if direction.index() < self.mesh.dim() {
            Ok(())
        } else {
            Err(Error::invalid(format!(
                "{direction:?} is not an axis of a {}D mesh",
                self.mesh.dim()
            )))
        }
    }

    /// The nodes on the line through the centre along an axis
    ///
    /// The nodes are sorted by increasing parametric coordinate along the axis, and include the
    /// centre.
    pub fn colinear_nodes(&self, direction: Direction) -> Result<Vec<usize>> {
        self.check_direction(direction)?;
        let mut nodes = self
            .neighbours(RelativePosition::along(direction, false))
            .iter()
            .rev()
            .copied()
            .collect::<Vec<_>>();
        nodes.push(self.node);
        nodes.extend_from_slice(self.neighbours(RelativePosition::along(direction, true)));
        Ok(nodes)
    }

    /// The colinear nodes along every axis of the mesh
    pub fn all_colinear_nodes(&self) -> BTreeMap<Direction, Vec<usize>> {
        Direction::all(self.mesh.dim())
            .iter()
            .filter_map(|d| self.colinear_nodes(*d).ok().map(|nodes| (*d, nodes)))
            .collect()
    }

    /// The axis-aligned positions along an axis that have neighbours, with the number of
    /// neighbours at each
    pub fn colinear_positions(&self, direction: Direction) -> Result<Vec<(RelativePosition, usize)>> {
        self.check_direction(direction)?;
        Ok([false, true]
            .into_iter()
            .map(|forward| RelativePosition::along(direction, forward))
            .filter_map(|p| self.graph.get(&p).map(|n| (p, n.len())))
            .collect())
    }

    /// Coordinates of the colinear nodes along an axis
    pub fn colinear_coordinates(
        &self,
        direction: Direction,
        coordinate_type: CoordinateType,
    ) -> Result<Vec<Vec<M::T>>> {
        self.colinear_nodes(direction)?
            .into_iter()
            .map(|n| {
                self.mesh
                    .node(n)
                    .map(|node| node.coordinates().position(coordinate_type))
                    .ok_or_else(|| Error::not_found(format!("no node with global index {n}")))
            })
            .collect()
    }

    /// Degrees of freedom of one type on the colinear nodes along an axis
    pub fn colinear_dofs<'d>(
        &self,
        dofs: &'d DofAssignment<M::T>,
        dof_type: DofType,
        direction: Direction,
    ) -> Result<Vec<&'d DegreeOfFreedom<M::T>>> {
        self.colinear_nodes(direction)?
            .into_iter()
            .map(|n| {
                dofs.dof(n, dof_type).ok_or_else(|| {
                    Error::not_found(format!("no {dof_type:?} degree of freedom at node {n}"))
                })
            })
            .collect()
    }

    /// Values of the colinear degrees of freedom along an axis; free ones have no value
    pub fn colinear_dof_values(
        &self,
        dofs: &DofAssignment<M::T>,
        dof_type: DofType,
        direction: Direction,
    ) -> Result<Vec<Option<M::T>>> {
        Ok(self
            .colinear_dofs(dofs, dof_type, direction)?
            .into_iter()
            .map(|d| d.value())
            .collect())
    }
}
