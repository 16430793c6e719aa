//! Element connectivity of structured meshes
use super::{index::multi_indices, StructuredMesh};
use crate::{
    error::{Error, Result},
    traits::Mesh,
    types::{ElementType, RealScalar},
};

/// Cell corners as offsets from the lowest corner, in local node order
fn corner_offsets(element_type: ElementType, cell: &[usize]) -> Vec<Vec<[usize; 3]>> {
    match element_type {
        ElementType::Line => vec![vec![[0, 0, 0], [1, 0, 0]]],
        ElementType::Quadrilateral => vec![vec![[0, 0, 0], [1, 0, 0], [0, 1, 0], [1, 1, 0]]],
        ElementType::Triangle => vec![
            vec![[0, 0, 0], [1, 0, 0], [1, 1, 0]],
            vec![[0, 0, 0], [1, 1, 0], [0, 1, 0]],
        ],
        ElementType::Hexahedron => vec![vec![
            [0, 0, 0],
            [1, 0, 0],
            [0, 1, 0],
            [1, 1, 0],
            [0, 0, 1],
            [1, 0, 1],
            [0, 1, 1],
            [1, 1, 1],
        ]],
        // Wedges alternate orientation along the first axis
        ElementType::Wedge if cell[0] % 2 == 0 => vec![vec![
            [0, 0, 0],
            [1, 0, 0],
            [0, 1, 0],
            [1, 1, 0],
            [0, 1, 1],
            [1, 1, 1],
        ]],
        ElementType::Wedge => vec![vec![
            [0, 0, 0],
            [0, 1, 0],
            [0, 0, 1],
            [1, 0, 1],
            [0, 1, 1],
            [1, 1, 1],
        ]],
    }
}

impl<T: RealScalar> StructuredMesh<T> {
    /// Split the mesh into elements
    ///
    /// Every element is given by the global indices of its nodes in local order. Cells are
    /// visited in total order with the first axis fastest, and a cell split into triangles
    /// contributes both triangles in turn. An axis with a single node gives no elements.
    pub fn elements(&self, element_type: ElementType) -> Result<Vec<Vec<usize>>> {
        let dim = self.dim();
        if element_type.dim() != dim {
            return Err(Error::invalid(format!(
                "{element_type:?} elements cannot be created on a {dim}D mesh"
            )));
        }
        let n = self.nodes_per_direction();
        let cells = n.iter().map(|&e| e.saturating_sub(1)).collect::<Vec<_>>();
        let count = cells.iter().product::<usize>() * element_type.elements_per_cell();
        let mut elements = Vec::with_capacity(count);
        for cell in multi_indices(&cells) {
            for corners in corner_offsets(element_type, &cell) {
                elements.push(
                    corners
                        .iter()
                        .map(|offset| {
                            cell.iter()
                                .zip(&offset[..dim])
                                .zip(n)
                                .rev()
                                .fold(0, |global, ((c, o), e)| global * e + c + o)
                        })
                        .collect(),
                );
            }
        }
        Ok(elements)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::shapes::{unit_cube, unit_interval, unit_square};
    use std::collections::HashSet;

    #[test]
    fn test_lines() {
        let mesh = unit_interval::<f64>(3).unwrap();
        assert_eq!(
            mesh.elements(ElementType::Line).unwrap(),
            vec![vec![0, 1], vec![1, 2], vec![2, 3]]
        );
        let single = unit_interval::<f64>(0).unwrap();
        assert!(single.elements(ElementType::Line).unwrap().is_empty());
    }

    #[test]
    fn test_quadrilaterals() {
        let mesh = unit_square::<f64>(2, 3).unwrap();
        let quads = mesh.elements(ElementType::Quadrilateral).unwrap();
        assert_eq!(quads.len(), 6);
        assert_eq!(quads[0], vec![0, 1, 3, 4]);
        assert_eq!(quads[1], vec![1, 2, 4, 5]);
        assert_eq!(quads[5], vec![7, 8, 10, 11]);
    }

    #[test]
    fn test_triangles() {
        let mesh = unit_square::<f64>(2, 3).unwrap();
        let triangles = mesh.elements(ElementType::Triangle).unwrap();
        assert_eq!(triangles.len(), 12);
        assert_eq!(triangles[0], vec![0, 1, 4]);
        assert_eq!(triangles[1], vec![0, 4, 3]);
        let used = triangles.iter().flatten().copied().collect::<HashSet<_>>();
        assert_eq!(used.len(), mesh.node_count());
    }

    #[test]
    fn test_hexahedra() {
        let mesh = unit_cube::<f64>(2, 2, 2).unwrap();
        let hexes = mesh.elements(ElementType::Hexahedron).unwrap();
        assert_eq!(hexes.len(), 8);
        assert_eq!(hexes[0], vec![0, 1, 3, 4, 9, 10, 12, 13]);
        assert_eq!(hexes[7], vec![13, 14, 16, 17, 22, 23, 25, 26]);
        for hex in &hexes {
            assert_eq!(hex.len(), ElementType::Hexahedron.node_count());
        }
    }

    #[test]
    fn test_wedges() {
        let mesh = unit_cube::<f64>(2, 1, 1).unwrap();
        let wedges = mesh.elements(ElementType::Wedge).unwrap();
        assert_eq!(wedges.len(), 2);
        // Nodes are numbered i + 3 j + 6 k
        assert_eq!(wedges[0], vec![0, 1, 3, 4, 9, 10]);
        assert_eq!(wedges[1], vec![1, 4, 7, 8, 10, 11]);
    }

    #[test]
    fn test_dimension_mismatch() {
        let mesh = unit_square::<f64>(2, 2).unwrap();
        for element_type in [ElementType::Line, ElementType::Hexahedron, ElementType::Wedge] {
            assert!(matches!(
                mesh.elements(element_type),
                Err(Error::InvalidConfiguration(_))
            ));
        }
        let flat = unit_cube::<f64>(2, 2, 0).unwrap();
        assert!(flat.elements(ElementType::Hexahedron).unwrap().is_empty());
    }
}
