//! Test degree of freedom assignment on generated meshes
use approx::assert_relative_eq;
use structgrid::{
    dof::{DofAssignment, DomainBoundaryConditions, Field, FunctionCondition},
    geometry::TemplateMap,
    parallel::ParallelizationMethod,
    shapes::{regular_mesh, unit_cube, unit_square},
    topology::IsoParametricNodeGraph,
    traits::Mesh,
    types::{BoundaryConditionType, ConstraintType, Direction, DofType, Position},
    MeshSpecification,
};

macro_rules! make_dirichlet_tests {
    ($name:ident, $mesh:expr, $free:expr) => {
        paste::item! {
            #[test]
            fn [< test_dirichlet_everywhere_ $name >]() {
                let mesh = $mesh;
                let bcs = DomainBoundaryConditions::new()
                    .with_uniform_dirichlet(mesh.boundary_positions(), 0.5);
                let dofs = DofAssignment::new(&mesh, Field::scalar(DofType::Temperature), &bcs)
                    .unwrap();
                assert_eq!(dofs.free_dof_count(), $free);
                assert_eq!(dofs.free_dof_count(), mesh.internal_nodes().len());
                assert_eq!(dofs.total_dof_count(), mesh.node_count());
                for d in dofs.bounded_dofs() {
                    assert_eq!(d.value(), Some(0.5));
                }
            }
        }
    };
}

make_dirichlet_tests!(square, unit_square::<f64>(4, 4).unwrap(), 9);
make_dirichlet_tests!(cube, unit_cube::<f64>(3, 3, 3).unwrap(), 8);
make_dirichlet_tests!(thin_square, unit_square::<f64>(5, 1).unwrap(), 0);

#[test]
fn test_neumann_and_dirichlet_on_cube() {
    let mesh = unit_cube::<f64>(2, 2, 2).unwrap();
    let mut bcs = DomainBoundaryConditions::new();
    for p in mesh.boundary_positions() {
        let (kind, value) = match p {
            Position::Top => (BoundaryConditionType::Dirichlet, 100.0),
            Position::Bottom => (BoundaryConditionType::Dirichlet, 0.0),
            _ => (BoundaryConditionType::Neumann, 0.0),
        };
        bcs.add(*p, kind, FunctionCondition::constant(value));
    }
    let dofs = DofAssignment::new(&mesh, Field::scalar(DofType::Temperature), &bcs).unwrap();

    // The top and bottom layers are fixed, the middle ring has flux and the centre is free
    assert_eq!(dofs.bounded_dof_count(), 18);
    assert_eq!(dofs.flux_dof_count(), 8);
    assert_eq!(dofs.free_dof_count(), 9);
    assert_eq!(dofs.dof(26, DofType::Temperature).unwrap().value(), Some(100.0));
    assert_eq!(dofs.free_dof_id(13, DofType::Temperature), Some(4));
}

#[test]
fn test_pipeline_from_specification() {
    let spec = MeshSpecification::<f64>::new(&[5, 5])
        .unwrap()
        .with_template(TemplateMap::with_step([0.25, 0.25, 1.0]))
        .with_parallelization(ParallelizationMethod::Workers(2))
        .unwrap();
    let mesh = regular_mesh(&spec).unwrap();
    let field = Field::new(vec![DofType::Displacement1, DofType::Displacement2]).unwrap();
    let mut bcs = DomainBoundaryConditions::new();
    for p in mesh.boundary_positions() {
        for _ in 0..2 {
            bcs.add(
                *p,
                BoundaryConditionType::Dirichlet,
                FunctionCondition::vector(|x: &[f64]| vec![x[0], -x[1]]),
            );
        }
    }
    let dofs = DofAssignment::new(&mesh, field, &bcs).unwrap();
    assert_eq!(dofs.total_dof_count(), 50);
    assert_eq!(dofs.free_dof_count(), 18);

    let centre = mesh.node_at(&[2, 2]).unwrap().global();
    let graph = IsoParametricNodeGraph::new(&mesh, centre, 2, false).unwrap();
    let values = graph
        .colinear_dof_values(&dofs, DofType::Displacement2, Direction::Two)
        .unwrap();
    assert_eq!(values.len(), 5);
    assert_relative_eq!(values[0].unwrap(), 0.0);
    assert_eq!(values[1..4], [None, None, None]);
    assert_relative_eq!(values[4].unwrap(), -1.0);

    let free = graph.specific_dof_graph(&dofs, DofType::Displacement1, Some(ConstraintType::Free));
    for neighbours in free.values() {
        assert_eq!(neighbours.len(), 1);
    }
}
