//! Structured mesh builder
use super::{
    index::{linear_index, unravel, validate_extents},
    MeshSpecification, StructuredMesh,
};
use crate::{
    error::{Error, Result},
    geometry::TemplateMap,
    parallel::ParallelizationMethod,
    traits::Builder,
    types::RealScalar,
};

/// Builder for a structured mesh
///
/// Every node of the dense array must be given physical coordinates before the mesh is created.
#[derive(Debug)]
pub struct StructuredMeshBuilder<T: RealScalar> {
    nodes_per_direction: Vec<usize>,
    template: TemplateMap<T>,
    parallelization: ParallelizationMethod,
    natural: Vec<Option<Vec<T>>>,
}

impl<T: RealScalar> StructuredMeshBuilder<T> {
    /// Create a new mesh builder
    pub fn new(nodes_per_direction: &[usize]) -> Result<Self> {
        validate_extents(nodes_per_direction)?;
        Ok(Self {
            nodes_per_direction: nodes_per_direction.to_vec(),
            template: TemplateMap::identity(),
            parallelization: ParallelizationMethod::default(),
            natural: vec![None; nodes_per_direction.iter().product()],
        })
    }

    /// Create a new mesh builder from a specification
    pub fn from_specification(specification: &MeshSpecification<T>) -> Result<Self> {
        specification.validate()?;
        Self::new(&specification.nodes_per_direction)?
            .with_template(specification.template)
            .with_parallelization(specification.parallelization)
    }

    /// Set the template map
    pub fn with_template(mut self, template: TemplateMap<T>) -> Self {
        self.template = template;
        self
    }

    /// Set the parallelization method used by the mesh
    pub fn with_parallelization(mut self, parallelization: ParallelizationMethod) -> Result<Self> {
        parallelization.validate()?;
        self.parallelization = parallelization;
        Ok(self)
    }

    /// Number of parametric axes
    pub fn dim(&self) -> usize {
        self.nodes_per_direction.len()
    }

    /// Number of nodes along each axis
    pub fn nodes_per_direction(&self) -> &[usize] {
        &self.nodes_per_direction
    }
}

impl<T: RealScalar> Builder for StructuredMeshBuilder<T> {
    type Mesh = StructuredMesh<T>;
    type T = T;

    fn add_node(&mut self, indices: &[usize], coordinates: &[T]) -> Result<()> {
        if coordinates.len() != self.dim() {
            return Err(Error::invalid(format!(
                "node {indices:?} has {} coordinates, expected {}",
                coordinates.len(),
                self.dim()
            )));
        }
        let global = linear_index(&self.nodes_per_direction, indices)?;
        if self.natural[global].is_some() {
            return Err(Error::invalid(format!(
                "node {indices:?} has already been added"
            )));
        }
        self.natural[global] = Some(coordinates.to_vec());
        Ok(())
    }

    fn create_mesh(self) -> Result<StructuredMesh<T>> {
        let natural = self
            .natural
            .into_iter()
            .enumerate()
            .map(|(global, coordinates)| {
                coordinates.ok_or_else(|| {
                    Error::not_found(format!(
                        "node {:?} was never added",
                        unravel(&self.nodes_per_direction, global)
                    ))
                })
            })
            .collect::<Result<Vec<_>>>()?;
        StructuredMesh::from_parts(
            self.nodes_per_direction,
            natural,
            self.template,
            self.parallelization,
        )
    }
}
