//! Cube meshes

use crate::{
    error::Result,
    geometry::TemplateMap,
    mesh::{multi_indices, MeshSpecification, StructuredMesh, StructuredMeshBuilder},
    traits::Builder,
    types::{scalar_from_index, RealScalar},
};

/// Create a mesh whose physical coordinates are the template coordinates of its specification
pub fn regular_mesh<T: RealScalar>(specification: &MeshSpecification<T>) -> Result<StructuredMesh<T>> {
    let mut b = StructuredMeshBuilder::from_specification(specification)?;
    for indices in multi_indices(&specification.nodes_per_direction) {
        let parametric = indices.iter().map(|i| *i as isize).collect::<Vec<_>>();
        b.add_node(&indices, &specification.template.apply(&parametric))?;
    }
    b.create_mesh()
}

fn step<T: RealScalar>(n: usize) -> T {
    if n == 0 {
        T::one()
    } else {
        T::one() / scalar_from_index::<T>(n as isize)
    }
}

/// Create a unit interval mesh
///
/// The unit interval is the interval between (0,) and (1,), split into `nx` cells.
pub fn unit_interval<T: RealScalar>(nx: usize) -> Result<StructuredMesh<T>> {
    regular_mesh(
        &MeshSpecification::new(&[nx + 1])?
            .with_template(TemplateMap::with_step([step(nx), T::one(), T::one()])),
    )
}

/// Create a unit square mesh
///
/// The unit square is the square with corners at (0,0), (1,0), (0,1) and (1,1), split into
/// `nx` by `ny` cells.
pub fn unit_square<T: RealScalar>(nx: usize, ny: usize) -> Result<StructuredMesh<T>> {
    regular_mesh(
        &MeshSpecification::new(&[nx + 1, ny + 1])?
            .with_template(TemplateMap::with_step([step(nx), step(ny), T::one()])),
    )
}

/// Create a unit cube mesh
///
/// The unit cube is the cube with corners at (0,0,0), (1,0,0), (0,1,0), (1,1,0), (0,0,1),
/// (1,0,1), (0,1,1) and (1,1,1), split into `nx` by `ny` by `nz` cells.
pub fn unit_cube<T: RealScalar>(nx: usize, ny: usize, nz: usize) -> Result<StructuredMesh<T>> {
    regular_mesh(
        &MeshSpecification::new(&[nx + 1, ny + 1, nz + 1])?
            .with_template(TemplateMap::with_step([step(nx), step(ny), step(nz)])),
    )
}
