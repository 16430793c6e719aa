//! Row-major index arithmetic, fastest axis first
use crate::error::{Error, Result};
use itertools::Itertools;

/// Check that a mesh has 1 to 3 axes, each with at least one node
pub(crate) fn validate_extents(nodes_per_direction: &[usize]) -> Result<()> {
    if nodes_per_direction.is_empty() || nodes_per_direction.len() > 3 {
        return Err(Error::invalid(format!(
            "a structured mesh has 1 to 3 axes, not {}",
            nodes_per_direction.len()
        )));
    }
    if nodes_per_direction.contains(&0) {
        return Err(Error::invalid(format!(
            "every axis needs at least one node: {nodes_per_direction:?}"
        )));
    }
    Ok(())
}

/// The global index of the node at `indices`
pub(crate) fn linear_index(nodes_per_direction: &[usize], indices: &[usize]) -> Result<usize> {
    if indices.len() != nodes_per_direction.len() {
        return Err(Error::invalid(format!(
            "expected {} indices, got {}",
            nodes_per_direction.len(),
            indices.len()
        )));
    }
    let mut global = 0;
    for (axis, (&index, &extent)) in indices.iter().zip(nodes_per_direction).enumerate().rev() {
        if index >= extent {
            return Err(Error::OutOfRange {
                axis,
                index,
                extent,
            });
        }
        global = global * extent + index;
    }
    Ok(global)
}

/// The indices of the node with a given global index
pub(crate) fn unravel(nodes_per_direction: &[usize], mut global: usize) -> Vec<usize> {
    nodes_per_direction
        .iter()
        .map(|&extent| {
            let i = global % extent;
            global /= extent;
            i
        })
        .collect()
}

/// All indices of a mesh in total order
pub(crate) fn multi_indices(nodes_per_direction: &[usize]) -> impl Iterator<Item = Vec<usize>> + '_ {
    nodes_per_direction
        .iter()
        .rev()
        .map(|&n| 0..n)
        .multi_cartesian_product()
        .map(|mut indices| {
            indices.reverse();
            indices
        })
}

/// All parametric coordinates of a mesh grown by `depth` layers on every side, in total order
pub(crate) fn extended_parametric(
    nodes_per_direction: &[usize],
    depth: usize,
) -> impl Iterator<Item = Vec<isize>> + '_ {
    let depth = depth as isize;
    nodes_per_direction
        .iter()
        .rev()
        .map(move |&n| -depth..n as isize + depth)
        .multi_cartesian_product()
        .map(|mut coords| {
            coords.reverse();
            coords
        })
}
