//! Mesh specification
use super::index::validate_extents;
use crate::{
    error::Result, geometry::TemplateMap, parallel::ParallelizationMethod, types::RealScalar,
};

/// Configuration of a structured mesh
///
/// With the `serde` feature a specification can be read from and written to RON, e.g.
///
/// ```text
/// (
///     nodes_per_direction: [5, 5],
///     template: (step: (0.25, 0.25, 1.0), rotation: (0.0, 0.0, 0.0), shear: (0.0, 0.0)),
///     parallelization: Workers(4),
/// )
/// ```
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct MeshSpecification<T: RealScalar> {
    /// Number of nodes along each parametric axis
    pub nodes_per_direction: Vec<usize>,
    /// Map from parametric to template coordinates
    #[cfg_attr(feature = "serde", serde(default))]
    pub template: TemplateMap<T>,
    /// Parallelization of bulk passes over the mesh
    #[cfg_attr(feature = "serde", serde(default))]
    pub parallelization: ParallelizationMethod,
}

impl<T: RealScalar> MeshSpecification<T> {
    /// Create new
    pub fn new(nodes_per_direction: &[usize]) -> Result<Self> {
        validate_extents(nodes_per_direction)?;
        Ok(Self {
            nodes_per_direction: nodes_per_direction.to_vec(),
            template: TemplateMap::identity(),
            parallelization: ParallelizationMethod::default(),
        })
    }

    /// Set the template map
    pub fn with_template(mut self, template: TemplateMap<T>) -> Self {
        self.template = template;
        self
    }

    /// Set the parallelization method
    pub fn with_parallelization(mut self, parallelization: ParallelizationMethod) -> Result<Self> {
        parallelization.validate()?;
        self.parallelization = parallelization;
        Ok(self)
    }

    /// Number of parametric axes
    pub fn dim(&self) -> usize {
        self.nodes_per_direction.len()
    }

    /// Check the node counts and the parallelization method
    pub fn validate(&self) -> Result<()> {
        validate_extents(&self.nodes_per_direction)?;
        self.parallelization.validate()
    }
}

#[cfg(feature = "serde")]
impl<T: RealScalar + serde::Serialize + serde::de::DeserializeOwned> MeshSpecification<T> {
    /// Read a specification from a RON string
    pub fn from_ron_str(s: &str) -> Result<Self> {
        let spec: Self = ron::from_str(s)?;
        spec.validate()?;
        Ok(spec)
    }

    /// Write the specification as a RON string
    pub fn to_ron_string(&self) -> Result<String> {
        Ok(ron::to_string(self)?)
    }
}
