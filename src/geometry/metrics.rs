//! Differential metrics
use crate::types::{Direction, RealScalar};

pub(crate) fn norm<T: RealScalar>(vector: &[T]) -> T {
    vector.iter().map(|&i| i * i).sum::<T>().sqrt()
}

pub(crate) fn cross<T: RealScalar>(a: &[T; 3], b: &[T; 3]) -> [T; 3] {
    [
        a[1] * b[2] - a[2] * b[1],
        a[2] * b[0] - a[0] * b[2],
        a[0] * b[1] - a[1] * b[0],
    ]
}

pub(crate) fn dot<T: RealScalar>(a: &[T], b: &[T]) -> T {
    a.iter().zip(b).map(|(&i, &j)| i * j).sum()
}

/// The unit vector along an axis
pub(crate) fn unit<T: RealScalar>(direction: Direction) -> [T; 3] {
    let mut e = [T::zero(); 3];
    e[direction.index()] = T::one();
    e
}

/// Covariant metrics of a node
///
/// The covariant base vector along an axis is the derivative of the physical position with
/// respect to the parametric coordinate of that axis. Axes beyond the mesh dimension use the
/// unit embedding vector.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Metrics<T: RealScalar> {
    covariant_base_vectors: Vec<[T; 3]>,
}

impl<T: RealScalar> Metrics<T> {
    /// Create from one covariant base vector per mesh axis
    pub fn new(covariant_base_vectors: Vec<[T; 3]>) -> Self {
        Self {
            covariant_base_vectors,
        }
    }

    /// Number of mesh axes
    pub fn dim(&self) -> usize {
        self.covariant_base_vectors.len()
    }

    /// The covariant base vectors, one per mesh axis
    pub fn covariant_base_vectors(&self) -> &[[T; 3]] {
        &self.covariant_base_vectors
    }

    /// The covariant base vector along a direction
    pub fn covariant_base_vector(&self, direction: Direction) -> [T; 3] {
        self.covariant_base_vectors
            .get(direction.index())
            .copied()
            .unwrap_or_else(|| unit(direction))
    }

    /// The covariant metric tensor g_ij = g_i . g_j, of size dim x dim
    pub fn covariant_tensor(&self) -> Vec<Vec<T>> {
        self.covariant_base_vectors
            .iter()
            .map(|gi| {
                self.covariant_base_vectors
                    .iter()
                    .map(|gj| dot(gi, gj))
                    .collect()
            })
            .collect()
    }

    /// Determinant of the Jacobian of the map from parametric to physical coordinates
    pub fn jacobian(&self) -> T {
        let g1 = self.covariant_base_vector(Direction::One);
        let g2 = self.covariant_base_vector(Direction::Two);
        let g3 = self.covariant_base_vector(Direction::Three);
        dot(&g1, &cross(&g2, &g3))
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_cross() {
        assert_eq!(
            cross(&[1.0, 0.0, 0.0], &[0.0, 1.0, 0.0]),
            [0.0, 0.0, 1.0]
        );
        assert_eq!(
            cross(&[0.0, 0.0, 1.0], &[1.0, 0.0, 0.0]),
            [0.0, 1.0, 0.0]
        );
    }

    #[test]
    fn test_tensor_and_jacobian() {
        let m = Metrics::new(vec![[2.0, 0.0, 0.0], [1.0, 1.0, 0.0]]);
        assert_eq!(m.dim(), 2);
        let g = m.covariant_tensor();
        assert_relative_eq!(g[0][0], 4.0);
        assert_relative_eq!(g[0][1], 2.0);
        assert_relative_eq!(g[1][1], 2.0);
        assert_relative_eq!(m.jacobian(), 2.0);
        assert_eq!(m.covariant_base_vector(Direction::Three), [0.0, 0.0, 1.0]);
        assert_relative_eq!(norm(&m.covariant_base_vector(Direction::Two)), 2.0f64.sqrt());
    }
}
