//! Nodes
use crate::types::{scalar_from_index, CoordinateType, RealScalar};

/// Identity of a node
///
/// `global` is always set. Exactly one of `boundary` and `internal` is set once the node
/// belongs to a mesh.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub struct NodeId {
    /// Index in the total node sequence of the mesh
    pub global: usize,
    /// Running index among boundary nodes
    pub boundary: Option<usize>,
    /// Running index among internal nodes
    pub internal: Option<usize>,
}

impl NodeId {
    /// Create an id with only the global index set
    pub fn new(global: usize) -> Self {
        Self {
            global,
            boundary: None,
            internal: None,
        }
    }

    /// Is the node on the boundary of the mesh?
    pub fn is_boundary(&self) -> bool {
        self.boundary.is_some()
    }
}

/// Position of a node in the natural, parametric and template coordinate systems
#[derive(Debug, Clone, PartialEq)]
pub struct Coordinates<T: RealScalar> {
    natural: Vec<T>,
    parametric: Vec<isize>,
    template: Vec<T>,
}

impl<T: RealScalar> Coordinates<T> {
    /// Create new
    ///
    /// Returns `None` unless all three positions have the same number of components.
    pub fn new(natural: Vec<T>, parametric: Vec<isize>, template: Vec<T>) -> Option<Self> {
        if natural.len() == parametric.len() && parametric.len() == template.len() {
            Some(Self {
                natural,
                parametric,
                template,
            })
        } else {
            None
        }
    }

    /// Number of components
    pub fn dim(&self) -> usize {
        self.parametric.len()
    }

    /// Physical position
    pub fn natural(&self) -> &[T] {
        &self.natural
    }

    /// Logical grid indices
    pub fn parametric(&self) -> &[isize] {
        &self.parametric
    }

    /// Reference position
    pub fn template(&self) -> &[T] {
        &self.template
    }

    /// Position in a given coordinate system
    pub fn position(&self, coordinate_type: CoordinateType) -> Vec<T> {
        match coordinate_type {
            CoordinateType::Natural => self.natural.clone(),
            CoordinateType::Parametric => self
                .parametric
                .iter()
                .map(|i| scalar_from_index(*i))
                .collect(),
            CoordinateType::Template => self.template.clone(),
        }
    }

    /// Position in a given coordinate system, padded with zeros to three components
    pub fn position_3d(&self, coordinate_type: CoordinateType) -> [T; 3] {
        let mut p = [T::zero(); 3];
        for (pi, ci) in p.iter_mut().zip(self.position(coordinate_type)) {
            *pi = ci;
        }
        p
    }
}

/// A node of a structured mesh
#[derive(Debug, Clone, PartialEq)]
pub struct Node<T: RealScalar> {
    id: NodeId,
    coordinates: Coordinates<T>,
}

impl<T: RealScalar> Node<T> {
    /// Create new
    pub fn new(id: NodeId, coordinates: Coordinates<T>) -> Self {
        Self { id, coordinates }
    }

    /// Identity
    pub fn id(&self) -> &NodeId {
        &self.id
    }

    /// Global index
    pub fn global(&self) -> usize {
        self.id.global
    }

    /// Coordinates
    pub fn coordinates(&self) -> &Coordinates<T> {
        &self.coordinates
    }

    /// Logical grid indices
    pub fn parametric(&self) -> &[isize] {
        self.coordinates.parametric()
    }
}

/// A synthetic node outside the real domain
///
/// Ghost nodes have no physical position and never carry metrics.
#[derive(Debug, Clone, PartialEq)]
pub struct GhostNode<T: RealScalar> {
    parametric: Vec<isize>,
    template: Vec<T>,
}

impl<T: RealScalar> GhostNode<T> {
    /// Create new
    pub fn new(parametric: Vec<isize>, template: Vec<T>) -> Self {
        Self {
            parametric,
            template,
        }
    }

    /// Logical grid indices
    pub fn parametric(&self) -> &[isize] {
        &self.parametric
    }

    /// Reference position
    pub fn template(&self) -> &[T] {
        &self.template
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_inconsistent_coordinates() {
        assert!(Coordinates::<f64>::new(vec![0.0, 1.0], vec![0], vec![0.0]).is_none());
        assert!(Coordinates::<f64>::new(vec![0.0], vec![0], vec![0.0]).is_some());
    }

    #[test]
    fn test_position_3d() {
        let c = Coordinates::new(vec![0.5, 1.5], vec![1, 3], vec![0.1, 0.3]).unwrap();
        assert_eq!(c.position_3d(CoordinateType::Natural), [0.5, 1.5, 0.0]);
        assert_eq!(c.position_3d(CoordinateType::Parametric), [1.0, 3.0, 0.0]);
        assert_eq!(c.position(CoordinateType::Template), vec![0.1, 0.3]);
    }

    #[test]
    fn test_node_id() {
        let mut id = NodeId::new(4);
        let coordinates = Coordinates::new(vec![0.0], vec![4], vec![0.0]).unwrap();
        assert!(!Node::new(id, coordinates.clone()).id().is_boundary());
        id.boundary = Some(1);
        let n = Node::new(id, coordinates);
        assert_eq!(n.global(), 4);
        assert!(n.id().is_boundary());
        assert_eq!(n.id().internal, None);
    }
}
