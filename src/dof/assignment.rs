//! Assignment of degrees of freedom to the nodes of a mesh
use super::{DegreeOfFreedom, Field};
use crate::{
    error::{Error, Result},
    mesh::StructuredMesh,
    parallel::ParallelExecutor,
    traits::{BoundaryCondition, BoundaryConditions, Mesh},
    types::{BoundaryConditionType, ConstraintType, DofType, Position, RealScalar},
};
use log::debug;

#[derive(Debug, Clone, Copy)]
struct Claim<T> {
    kind: BoundaryConditionType,
    value: T,
}

/// The degrees of freedom of every node of a mesh
///
/// Every node carries one degree of freedom per type of the field. They are stored in total
/// order: by global node index, then by field order. Boundary nodes shared by several
/// positions get a single degree of freedom per type: a Dirichlet condition takes precedence
/// over a Neumann condition, and between conditions of the same kind the first position in
/// boundary order wins.
#[derive(Debug)]
pub struct DofAssignment<T: RealScalar> {
    field: Field,
    total: Vec<DegreeOfFreedom<T>>,
    free: Vec<usize>,
    bounded: Vec<usize>,
    flux: Vec<(usize, T)>,
}

impl<T: RealScalar> DofAssignment<T> {
    /// Assign degrees of freedom using the parallelization method of the mesh
    pub fn new<B>(mesh: &StructuredMesh<T>, field: Field, conditions: &B) -> Result<Self>
    where
        B: BoundaryConditions<T> + Sync,
        B::Condition: Sync,
    {
        Self::with_executor(mesh, field, conditions, mesh.executor()?)
    }

    /// Assign degrees of freedom using the given executor
    pub fn with_executor<M, B>(
        mesh: &M,
        field: Field,
        conditions: &B,
        executor: &ParallelExecutor,
    ) -> Result<Self>
    where
        M: Mesh<T = T> + Sync,
        B: BoundaryConditions<T> + Sync,
        B::Condition: Sync,
    {
        let k = field.len();
        let mut claims: Vec<Option<Claim<T>>> = vec![None; mesh.node_count() * k];
        let mut conflicts = 0;
        for position in mesh.boundary_positions() {
            let (kind, values) =
                boundary_values(mesh, &field, conditions, *position, executor)?;
            for (node, node_values) in values {
                for (t, value) in node_values.into_iter().enumerate() {
                    let claim = Claim { kind, value };
                    let slot = node * k + t;
                    match claims[slot].as_mut() {
                        None => claims[slot] = Some(claim),
                        Some(existing) => {
                            conflicts += 1;
                            if existing.kind == BoundaryConditionType::Neumann
                                && kind == BoundaryConditionType::Dirichlet
                            {
                                *existing = claim;
                            }
                        }
                    }
                }
            }
        }

        let types = field.types();
        let claims = &claims;
        let mut total = executor
            .partial_reduce(mesh.node_count(), |range| {
                range
                    .flat_map(|node| {
                        types.iter().enumerate().map(move |(t, dof_type)| {
                            create_dof(*dof_type, node, claims[node * k + t])
                        })
                    })
                    .collect::<Vec<_>>()
            })
            .into_iter()
            .flatten()
            .collect::<Vec<_>>();

        let mut free = vec![];
        let mut bounded = vec![];
        for (i, dof) in total.iter_mut().enumerate() {
            match dof.constraint() {
                ConstraintType::Free => {
                    dof.set_id(free.len());
                    free.push(i);
                }
                ConstraintType::Fixed => bounded.push(i),
            }
        }
        let flux = claims
            .iter()
            .enumerate()
            .filter_map(|(i, claim)| match claim {
                Some(Claim {
                    kind: BoundaryConditionType::Neumann,
                    value,
                }) => Some((i, *value)),
                _ => None,
            })
            .collect::<Vec<_>>();

        debug!(
            "Assigned {} degrees of freedom: {} free, {} bounded, {} with flux; resolved {conflicts} shared boundary claims",
            total.len(),
            free.len(),
            bounded.len(),
            flux.len()
        );

        Ok(Self {
            field,
            total,
            free,
            bounded,
            flux,
        })
    }

    /// The field
    pub fn field(&self) -> &Field {
        &self.field
    }

    /// All degrees of freedom in total order
    pub fn total_dofs(&self) -> &[DegreeOfFreedom<T>] {
        &self.total
    }

    /// The free degrees of freedom, in id order
    pub fn free_dofs(&self) -> impl Iterator<Item = &DegreeOfFreedom<T>> + '_ {
        self.free.iter().map(|i| &self.total[*i])
    }

    /// The degrees of freedom fixed by Dirichlet conditions
    pub fn bounded_dofs(&self) -> impl Iterator<Item = &DegreeOfFreedom<T>> + '_ {
        self.bounded.iter().map(|i| &self.total[*i])
    }

    /// The degrees of freedom on Neumann boundaries with their prescribed flux
    pub fn flux_dofs(&self) -> impl Iterator<Item = (&DegreeOfFreedom<T>, T)> + '_ {
        self.flux.iter().map(|(i, value)| (&self.total[*i], *value))
    }

    /// The degrees of freedom of a node, in field order
    pub fn node_dofs(&self, global: usize) -> Option<&[DegreeOfFreedom<T>]> {
        let k = self.field.len();
        let start = global.checked_mul(k)?;
        self.total.get(start..start.checked_add(k)?)
    }

    /// The degree of freedom of a given type at a node
    pub fn dof(&self, global: usize, dof_type: DofType) -> Option<&DegreeOfFreedom<T>> {
        let t = self.field.index_of(dof_type)?;
        self.node_dofs(global).map(|dofs| &dofs[t])
    }

    /// The solver id of a free degree of freedom
    pub fn free_dof_id(&self, global: usize, dof_type: DofType) -> Option<usize> {
        self.dof(global, dof_type).and_then(|dof| dof.id())
    }

    /// Number of free degrees of freedom
    pub fn free_dof_count(&self) -> usize {
        self.free.len()
    }

    /// Number of fixed degrees of freedom
    pub fn bounded_dof_count(&self) -> usize {
        self.bounded.len()
    }

    /// Number of degrees of freedom with a prescribed flux
    pub fn flux_dof_count(&self) -> usize {
        self.flux.len()
    }

    /// Total number of degrees of freedom
    pub fn total_dof_count(&self) -> usize {
        self.total.len()
    }
}

fn create_dof<T: RealScalar>(
    dof_type: DofType,
    node: usize,
    claim: Option<Claim<T>>,
) -> DegreeOfFreedom<T> {
    match claim {
        Some(Claim {
            kind: BoundaryConditionType::Dirichlet,
            value,
        }) => DegreeOfFreedom::new_fixed(dof_type, node, value),
        _ => DegreeOfFreedom::new_free(dof_type, node),
    }
}

/// Evaluate the conditions of a boundary position at each of its nodes
///
/// Returns the kind of the conditions and, for each node, one value per field type.
fn boundary_values<T, M, B>(
    mesh: &M,
    field: &Field,
    conditions: &B,
    position: Position,
    executor: &ParallelExecutor,
) -> Result<(BoundaryConditionType, Vec<(usize, Vec<T>)>)>
where
    T: RealScalar,
    M: Mesh<T = T> + Sync,
    B: BoundaryConditions<T> + Sync,
    B::Condition: Sync,
{
    let dirichlet = conditions.conditions(position, BoundaryConditionType::Dirichlet);
    let neumann = conditions.conditions(position, BoundaryConditionType::Neumann);
    let (kind, conds) = match (dirichlet.is_empty(), neumann.is_empty()) {
        (false, true) => (BoundaryConditionType::Dirichlet, dirichlet),
        (true, false) => (BoundaryConditionType::Neumann, neumann),
        (true, true) => {
            return Err(Error::invalid(format!(
                "no boundary condition at {position:?}"
            )))
        }
        (false, false) => {
            return Err(Error::invalid(format!(
                "both Dirichlet and Neumann conditions at {position:?}"
            )))
        }
    };
    let k = field.len();
    let vector = match conds.len() {
        1 if k == 1 => false,
        n if k > 1 && n == k => true,
        n => {
            return Err(Error::invalid(format!(
                "{n} {kind:?} conditions at {position:?} cannot be applied to a field of {k} types"
            )))
        }
    };
    let nodes = mesh.boundary_nodes(position)?;
    let condition = &conds[0];

    let values = executor
        .partial_reduce(nodes.len(), |range| {
            nodes[range]
                .iter()
                .map(|node| {
                    let x = mesh
                        .node(*node)
                        .ok_or_else(|| Error::not_found(format!("no node with global index {node}")))?
                        .coordinates()
                        .natural();
                    if vector {
                        let v = condition.vector_value_at(x)?;
                        if v.len() != k {
                            return Err(Error::invalid(format!(
                                "{kind:?} condition at {position:?} has {} components, expected {k}",
                                v.len()
                            )));
                        }
                        Ok(v)
                    } else {
                        Ok(vec![condition.scalar_value_at(x)?])
                    }
                })
                .collect::<Result<Vec<_>>>()
        })
        .into_iter()
        .collect::<Result<Vec<_>>>()?;

    Ok((
        kind,
        nodes
            .iter()
            .copied()
            .zip(values.into_iter().flatten())
            .collect(),
    ))
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::dof::{DomainBoundaryConditions, FunctionCondition};
    use crate::shapes::{unit_interval, unit_square};
    use approx::assert_relative_eq;

    fn mixed_conditions() -> DomainBoundaryConditions<f64> {
        DomainBoundaryConditions::new()
            .with(
                Position::Left,
                BoundaryConditionType::Dirichlet,
                FunctionCondition::constant(1.0),
            )
            .with(
                Position::Bottom,
                BoundaryConditionType::Neumann,
                FunctionCondition::constant(5.0),
            )
            .with(
                Position::Right,
                BoundaryConditionType::Dirichlet,
                FunctionCondition::constant(2.0),
            )
            .with(
                Position::Top,
                BoundaryConditionType::Dirichlet,
                FunctionCondition::constant(3.0),
            )
    }

    #[test]
    fn test_corner_policy() {
        let mesh = unit_square::<f64>(2, 2).unwrap();
        let dofs = DofAssignment::new(
            &mesh,
            Field::scalar(DofType::Temperature),
            &mixed_conditions(),
        )
        .unwrap();
        let t = DofType::Temperature;
        assert_eq!(dofs.total_dof_count(), 9);
        assert_eq!(dofs.bounded_dof_count(), 7);
        assert_eq!(dofs.free_dof_count(), 2);
        assert_eq!(dofs.flux_dof_count(), 1);

        // Dirichlet beats Neumann at the bottom corners
        assert_eq!(dofs.dof(0, t).unwrap().value(), Some(1.0));
        assert_eq!(dofs.dof(2, t).unwrap().value(), Some(2.0));
        // Left and Right come before Top
        assert_eq!(dofs.dof(6, t).unwrap().value(), Some(1.0));
        assert_eq!(dofs.dof(8, t).unwrap().value(), Some(2.0));
        assert_eq!(dofs.dof(7, t).unwrap().value(), Some(3.0));

        let bottom = dofs.dof(1, t).unwrap();
        assert!(bottom.is_free());
        assert_eq!(bottom.value(), None);
        assert_eq!(dofs.free_dof_id(1, t), Some(0));
        assert_eq!(dofs.free_dof_id(4, t), Some(1));
        assert_eq!(dofs.free_dof_id(0, t), None);

        let (flux, value) = dofs.flux_dofs().next().unwrap();
        assert_eq!(flux.node(), 1);
        assert_relative_eq!(value, 5.0);
    }

    #[test]
    fn test_neumann_corner_between_two_fluxes() {
        let mesh = unit_square::<f64>(2, 2).unwrap();
        let bcs = DomainBoundaryConditions::new()
            .with(
                Position::Left,
                BoundaryConditionType::Neumann,
                FunctionCondition::constant(1.0),
            )
            .with(
                Position::Bottom,
                BoundaryConditionType::Neumann,
                FunctionCondition::constant(5.0),
            )
            .with(
                Position::Right,
                BoundaryConditionType::Dirichlet,
                FunctionCondition::constant(2.0),
            )
            .with(
                Position::Top,
                BoundaryConditionType::Dirichlet,
                FunctionCondition::constant(3.0),
            );
        let dofs = DofAssignment::new(&mesh, Field::scalar(DofType::Temperature), &bcs).unwrap();
        let t = DofType::Temperature;

        // Left comes before Bottom, so the shared corner carries the Left flux
        let flux = dofs
            .flux_dofs()
            .map(|(dof, value)| (dof.node(), value))
            .collect::<Vec<_>>();
        assert_eq!(flux, vec![(0, 1.0), (1, 5.0), (3, 1.0)]);
        assert!(dofs.dof(0, t).unwrap().is_free());

        // Dirichlet still wins against either flux
        assert_eq!(dofs.dof(2, t).unwrap().value(), Some(2.0));
        assert_eq!(dofs.dof(6, t).unwrap().value(), Some(3.0));
        assert_eq!(dofs.free_dof_count(), 4);
    }

    #[test]
    fn test_node_lookup_beyond_range() {
        let mesh = unit_square::<f64>(1, 1).unwrap();
        let field = Field::new(vec![DofType::Displacement1, DofType::Displacement2]).unwrap();
        let mut bcs = DomainBoundaryConditions::new();
        for p in mesh.boundary_positions() {
            for _ in 0..2 {
                bcs.add(
                    *p,
                    BoundaryConditionType::Dirichlet,
                    FunctionCondition::constant_vector(vec![0.0, 0.0]),
                );
            }
        }
        let dofs = DofAssignment::new(&mesh, field, &bcs).unwrap();
        assert_eq!(dofs.node_dofs(3).map(|d| d.len()), Some(2));
        assert!(dofs.node_dofs(4).is_none());
        for global in [usize::MAX, usize::MAX / 2 + 1] {
            assert!(dofs.node_dofs(global).is_none());
            assert!(dofs.dof(global, DofType::Displacement1).is_none());
            assert!(dofs.free_dof_id(global, DofType::Displacement2).is_none());
        }
    }

    #[test]
    fn test_scalar_dirichlet_values() {
        let mesh = unit_interval::<f64>(4).unwrap();
        let bcs = DomainBoundaryConditions::new()
            .with(
                Position::Left,
                BoundaryConditionType::Dirichlet,
                FunctionCondition::scalar(|x: &[f64]| 10.0 + x[0]),
            )
            .with(
                Position::Right,
                BoundaryConditionType::Dirichlet,
                FunctionCondition::scalar(|x: &[f64]| 10.0 + x[0]),
            );
        let dofs = DofAssignment::new(&mesh, Field::scalar(DofType::Pressure), &bcs).unwrap();
        let values = dofs
            .bounded_dofs()
            .map(|d| (d.node(), d.value().unwrap()))
            .collect::<Vec<_>>();
        assert_eq!(values, vec![(0, 10.0), (4, 11.0)]);
        let ids = dofs.free_dofs().map(|d| d.id().unwrap()).collect::<Vec<_>>();
        assert_eq!(ids, vec![0, 1, 2]);
    }

    #[test]
    fn test_vector_conditions() {
        let mesh = unit_square::<f64>(1, 1).unwrap();
        let field = Field::new(vec![DofType::Displacement1, DofType::Displacement2]).unwrap();
        let mut bcs = DomainBoundaryConditions::new();
        for p in mesh.boundary_positions() {
            bcs.add(
                *p,
                BoundaryConditionType::Dirichlet,
                FunctionCondition::vector(|x: &[f64]| vec![x[0], 2.0 * x[1]]),
            );
            bcs.add(
                *p,
                BoundaryConditionType::Dirichlet,
                FunctionCondition::constant_vector(vec![0.0, 0.0]),
            );
        }
        let dofs = DofAssignment::new(&mesh, field, &bcs).unwrap();
        assert_eq!(dofs.total_dof_count(), 8);
        assert_eq!(dofs.free_dof_count(), 0);
        let corner = dofs.node_dofs(3).unwrap();
        assert_eq!(corner[0].dof_type(), DofType::Displacement1);
        assert_eq!(corner[0].value(), Some(1.0));
        assert_eq!(corner[1].value(), Some(2.0));
    }

    #[test]
    fn test_condition_count_mismatch() {
        let mesh = unit_square::<f64>(1, 1).unwrap();
        let field = Field::new(vec![DofType::Displacement1, DofType::Displacement2]).unwrap();
        let bcs = DomainBoundaryConditions::new().with_uniform_dirichlet(
            &[Position::Left, Position::Right, Position::Bottom, Position::Top],
            0.0,
        );
        assert!(matches!(
            DofAssignment::new(&mesh, field, &bcs),
            Err(Error::InvalidConfiguration(_))
        ));
    }

    #[test]
    fn test_scalar_condition_for_vector_field() {
        let mesh = unit_interval::<f64>(2).unwrap();
        let field = Field::new(vec![DofType::Displacement1, DofType::Rotation3]).unwrap();
        let mut bcs = DomainBoundaryConditions::new();
        for p in [Position::Left, Position::Right] {
            for _ in 0..2 {
                bcs.add(
                    p,
                    BoundaryConditionType::Dirichlet,
                    FunctionCondition::constant(0.0),
                );
            }
        }
        assert!(matches!(
            DofAssignment::new(&mesh, field, &bcs),
            Err(Error::InvalidConfiguration(_))
        ));
    }

    #[test]
    fn test_missing_and_ambiguous_conditions() {
        let mesh = unit_interval::<f64>(2).unwrap();
        let field = Field::scalar(DofType::Temperature);
        let bcs = DomainBoundaryConditions::new().with_uniform_dirichlet(&[Position::Left], 0.0);
        assert!(DofAssignment::new(&mesh, field.clone(), &bcs).is_err());

        let bcs = DomainBoundaryConditions::new()
            .with_uniform_dirichlet(&[Position::Left, Position::Right], 0.0)
            .with(
                Position::Right,
                BoundaryConditionType::Neumann,
                FunctionCondition::constant(1.0),
            );
        assert!(matches!(
            DofAssignment::new(&mesh, field, &bcs),
            Err(Error::InvalidConfiguration(_))
        ));
    }

    #[test]
    fn test_parallel_assignment_matches_sequential() {
        let mesh = unit_square::<f64>(7, 5).unwrap();
        let field = Field::new(vec![DofType::Temperature, DofType::Pressure]).unwrap();
        let mut bcs = DomainBoundaryConditions::new();
        for p in mesh.boundary_positions() {
            let kind = if *p == Position::Bottom {
                BoundaryConditionType::Neumann
            } else {
                BoundaryConditionType::Dirichlet
            };
            for _ in 0..2 {
                bcs.add(
                    *p,
                    kind,
                    FunctionCondition::vector(|x: &[f64]| vec![x[0], x[1]]),
                );
            }
        }
        let sequential = DofAssignment::with_executor(
            &mesh,
            field.clone(),
            &bcs,
            &ParallelExecutor::sequential(),
        )
        .unwrap();
        let parallel = DofAssignment::with_executor(
            &mesh,
            field,
            &bcs,
            &ParallelExecutor::new(4).unwrap(),
        )
        .unwrap();
        assert_eq!(sequential.total_dof_count(), 96);
        for (a, b) in sequential.total_dofs().iter().zip(parallel.total_dofs()) {
            assert_eq!(a, b);
            assert_eq!(a.value(), b.value());
            assert_eq!(a.id(), b.id());
        }
        let ids = sequential
            .total_dofs()
            .iter()
            .filter_map(|d| d.id())
            .collect::<Vec<_>>();
        assert_eq!(ids, (0..sequential.free_dof_count()).collect::<Vec<_>>());
    }
}
