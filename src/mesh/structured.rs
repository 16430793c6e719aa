//! Structured mesh
use super::{
    boundary::{on_boundary, tangents},
    index::{linear_index, unravel},
    GhostPseudoMesh,
};
#[cfg(feature = "serde")]
use super::StructuredMeshBuilder;
#[cfg(feature = "serde")]
use crate::traits::{Builder, ConvertToSerializable};
use crate::{
    error::{Error, Result},
    geometry::{cross, norm, unit, Coordinates, Metrics, Node, NodeId, TemplateMap},
    parallel::{ParallelExecutor, ParallelizationMethod},
    traits::Mesh,
    types::{Direction, Position, RealScalar},
};
use log::debug;
use std::collections::HashMap;
use std::sync::OnceLock;

/// A structured mesh of dimension 1, 2 or 3
///
/// The mesh owns a dense array of nodes stored in total order: row-major with the first axis
/// varying fastest. The position of a node in this array is its global index.
#[derive(Debug)]
pub struct StructuredMesh<T: RealScalar> {
    nodes_per_direction: Vec<usize>,
    nodes: Vec<Node<T>>,
    boundary_positions: &'static [Position],
    boundary_nodes: Vec<Vec<usize>>,
    owning_positions: Vec<Option<Position>>,
    internal_nodes: Vec<usize>,
    parametric_index: HashMap<Vec<isize>, usize>,
    template: TemplateMap<T>,
    parallelization: ParallelizationMethod,
    executor: OnceLock<ParallelExecutor>,
    metrics: OnceLock<Vec<Metrics<T>>>,
}

impl<T: RealScalar> StructuredMesh<T> {
    pub(crate) fn from_parts(
        nodes_per_direction: Vec<usize>,
        natural: Vec<Vec<T>>,
        template: TemplateMap<T>,
        parallelization: ParallelizationMethod,
    ) -> Result<Self> {
        let dim = nodes_per_direction.len();
        let boundary_positions = Position::boundaries(dim);

        let mut nodes = Vec::with_capacity(natural.len());
        let mut boundary_nodes = vec![vec![]; boundary_positions.len()];
        let mut owning_positions = Vec::with_capacity(natural.len());
        let mut internal_nodes = vec![];
        let mut parametric_index = HashMap::with_capacity(natural.len());
        let (mut boundary_count, mut internal_count) = (0, 0);

        for (global, x) in natural.into_iter().enumerate() {
            let indices = unravel(&nodes_per_direction, global);
            let parametric = indices.iter().map(|i| *i as isize).collect::<Vec<_>>();
            let template_coordinates = template.apply(&parametric);
            let coordinates = Coordinates::new(x, parametric.clone(), template_coordinates)
                .ok_or_else(|| {
                    Error::invalid(format!("node {indices:?} has inconsistent coordinates"))
                })?;

            let mut id = NodeId::new(global);
            let mut owner = None;
            for (p, list) in boundary_positions.iter().zip(boundary_nodes.iter_mut()) {
                if on_boundary(*p, &nodes_per_direction, &indices) {
                    list.push(global);
                    owner.get_or_insert(*p);
                }
            }
            if owner.is_some() {
                id.boundary = Some(boundary_count);
                boundary_count += 1;
            } else {
                id.internal = Some(internal_count);
                internal_count += 1;
                internal_nodes.push(global);
            }

            owning_positions.push(owner);
            parametric_index.insert(parametric, global);
            nodes.push(Node::new(id, coordinates));
        }

        debug!(
            "Created {dim}D structured mesh {nodes_per_direction:?}: {} nodes, {internal_count} internal, {boundary_count} on the boundary",
            nodes.len()
        );

        Ok(Self {
            nodes_per_direction,
            nodes,
            boundary_positions,
            boundary_nodes,
            owning_positions,
            internal_nodes,
            parametric_index,
            template,
            parallelization,
            executor: OnceLock::new(),
            metrics: OnceLock::new(),
        })
    }

    /// Number of nodes along an axis
    pub fn nodes_along(&self, direction: Direction) -> Option<usize> {
        self.nodes_per_direction.get(direction.index()).copied()
    }

    /// All nodes in total order
    pub fn total_nodes(&self) -> &[Node<T>] {
        &self.nodes
    }

    /// The boundary that owns a node: the first boundary in boundary order that contains it
    ///
    /// Returns `None` for internal nodes.
    pub fn owning_position(&self, global: usize) -> Result<Option<Position>> {
        self.owning_positions
            .get(global)
            .copied()
            .ok_or_else(|| Error::not_found(format!("no node with global index {global}")))
    }

    /// The node at the given parametric indices
    pub fn node_at(&self, indices: &[usize]) -> Result<&Node<T>> {
        linear_index(&self.nodes_per_direction, indices).map(|global| &self.nodes[global])
    }

    /// The node with the given global index
    pub fn find_node(&self, global: usize) -> Result<&Node<T>> {
        self.nodes
            .get(global)
            .ok_or_else(|| Error::not_found(format!("no node with global index {global}")))
    }

    /// The node at the given parametric coordinates
    pub fn find_node_by_parametric(&self, parametric: &[isize]) -> Result<&Node<T>> {
        self.parametric_index
            .get(parametric)
            .map(|global| &self.nodes[*global])
            .ok_or_else(|| Error::not_found(format!("no node at parametric coordinates {parametric:?}")))
    }

    /// Map from parametric coordinates to global index
    pub fn parametric_index(&self) -> &HashMap<Vec<isize>, usize> {
        &self.parametric_index
    }

    /// The template map
    pub fn template(&self) -> &TemplateMap<T> {
        &self.template
    }

    /// The parallelization method used for bulk passes
    pub fn parallelization(&self) -> ParallelizationMethod {
        self.parallelization
    }

    /// The executor for bulk passes over the mesh, created on first use
    pub fn executor(&self) -> Result<&ParallelExecutor> {
        if let Some(executor) = self.executor.get() {
            return Ok(executor);
        }
        let executor = self.parallelization.executor()?;
        Ok(self.executor.get_or_init(|| executor))
    }

    /// Metrics of every node, indexed by global index
    ///
    /// Metrics are computed on first use and never change afterwards.
    pub fn metrics(&self) -> Result<&[Metrics<T>]> {
        if let Some(metrics) = self.metrics.get() {
            return Ok(metrics);
        }
        let computed = self.compute_metrics()?;
        Ok(self.metrics.get_or_init(|| computed))
    }

    fn compute_metrics(&self) -> Result<Vec<Metrics<T>>> {
        let executor = self.executor()?;
        let mut metrics = vec![Metrics::default(); self.nodes.len()];
        executor.for_each_chunk_mut(&mut metrics, |offset, chunk| {
            for (i, m) in chunk.iter_mut().enumerate() {
                *m = self.node_metrics(offset + i);
            }
        });
        debug!(
            "Computed metrics of {} nodes with up to {} workers",
            metrics.len(),
            executor.max_workers()
        );
        Ok(metrics)
    }

    fn natural_3d(&self, global: usize) -> [T; 3] {
        let mut x = [T::zero(); 3];
        for (xi, ci) in x.iter_mut().zip(self.nodes[global].coordinates().natural()) {
            *xi = *ci;
        }
        x
    }

    // Central differences inside the mesh, one-sided differences on the boundary
    fn node_metrics(&self, global: usize) -> Metrics<T> {
        let parametric = self.nodes[global].parametric();
        let two = T::one() + T::one();
        let vectors = Direction::all(self.dim())
            .iter()
            .map(|d| {
                let mut forward = parametric.to_vec();
                forward[d.index()] += 1;
                let mut backward = parametric.to_vec();
                backward[d.index()] -= 1;
                let x = self.natural_3d(global);
                match (
                    self.parametric_index.get(&forward),
                    self.parametric_index.get(&backward),
                ) {
                    (Some(f), Some(b)) => {
                        let (xf, xb) = (self.natural_3d(*f), self.natural_3d(*b));
                        [0, 1, 2].map(|i| (xf[i] - xb[i]) / two)
                    }
                    (Some(f), None) => {
                        let xf = self.natural_3d(*f);
                        [0, 1, 2].map(|i| xf[i] - x[i])
                    }
                    (None, Some(b)) => {
                        let xb = self.natural_3d(*b);
                        [0, 1, 2].map(|i| x[i] - xb[i])
                    }
                    (None, None) => unit(*d),
                }
            })
            .collect();
        Metrics::new(vectors)
    }

    /// Outward unit normal of a boundary at a node
    ///
    /// This is the normalised cross product of the covariant base vectors that span the
    /// boundary, taken in the order given by the boundary tables.
    pub fn normal_unit_vector(&self, position: Position, global: usize) -> Result<[T; 3]> {
        let [t0, t1] = tangents(position, self.dim()).ok_or_else(|| {
            Error::invalid(format!(
                "{position:?} is not a boundary of a {}D mesh",
                self.dim()
            ))
        })?;
        self.find_node(global)?;
        let metrics = &self.metrics()?[global];
        let normal = cross(
            &metrics.covariant_base_vector(t0),
            &metrics.covariant_base_vector(t1),
        );
        let length = norm(&normal);
        if length == T::zero() {
            return Err(Error::invalid(format!(
                "degenerate metrics at node {global}: the boundary normal is zero"
            )));
        }
        Ok(normal.map(|c| c / length))
    }

    /// Create a ghost layer of the given depth around the mesh
    pub fn create_ghost_pseudo_mesh(&self, depth: usize) -> GhostPseudoMesh<'_, T> {
        GhostPseudoMesh::new(self, depth)
    }
}

impl<T: RealScalar> Mesh for StructuredMesh<T> {
    type T = T;

    fn dim(&self) -> usize {
        self.nodes_per_direction.len()
    }

    fn nodes_per_direction(&self) -> &[usize] {
        &self.nodes_per_direction
    }

    fn node_count(&self) -> usize {
        self.nodes.len()
    }

    fn node(&self, global: usize) -> Option<&Node<T>> {
        self.nodes.get(global)
    }

    fn global_from_parametric(&self, parametric: &[isize]) -> Option<usize> {
        self.parametric_index.get(parametric).copied()
    }

    fn boundary_positions(&self) -> &[Position] {
        self.boundary_positions
    }

    fn boundary_nodes(&self, position: Position) -> Result<&[usize]> {
        self.boundary_positions
            .iter()
            .position(|p| *p == position)
            .map(|i| self.boundary_nodes[i].as_slice())
            .ok_or_else(|| {
                Error::invalid(format!(
                    "{position:?} is not a boundary of a {}D mesh",
                    self.dim()
                ))
            })
    }

    fn internal_nodes(&self) -> &[usize] {
        &self.internal_nodes
    }
}

/// Serializable form of a structured mesh
#[cfg(feature = "serde")]
#[derive(serde::Serialize, Debug, serde::Deserialize)]
pub struct SerializableStructuredMesh<T: RealScalar> {
    nodes_per_direction: Vec<usize>,
    natural: Vec<Vec<T>>,
    template: TemplateMap<T>,
    parallelization: ParallelizationMethod,
}

#[cfg(feature = "serde")]
impl<T: RealScalar + serde::Serialize> ConvertToSerializable for StructuredMesh<T> {
    type SerializableType = SerializableStructuredMesh<T>;
    fn to_serializable(&self) -> SerializableStructuredMesh<T> {
        SerializableStructuredMesh {
            nodes_per_direction: self.nodes_per_direction.clone(),
            natural: self
                .nodes
                .iter()
                .map(|n| n.coordinates().natural().to_vec())
                .collect(),
            template: self.template,
            parallelization: self.parallelization,
        }
    }
    fn from_serializable(s: SerializableStructuredMesh<T>) -> Result<Self> {
        let mut b = StructuredMeshBuilder::new(&s.nodes_per_direction)?
            .with_template(s.template)
            .with_parallelization(s.parallelization)?;
        if s.natural.len() != s.nodes_per_direction.iter().product::<usize>() {
            return Err(Error::invalid(format!(
                "{} nodes given for a mesh of shape {:?}",
                s.natural.len(),
                s.nodes_per_direction
            )));
        }
        for (global, x) in s.natural.iter().enumerate() {
            b.add_node(&unravel(&s.nodes_per_direction, global), x)?;
        }
        b.create_mesh()
    }
}
