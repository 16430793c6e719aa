//! Template coordinates
use crate::types::{scalar_from_index, RealScalar};

/// Affine map from parametric coordinates to template coordinates
///
/// The parametric coordinates are scaled per axis, then rotated, then sheared. Rotations are
/// about the third, second and first axis in that order; only the rotation about the third axis
/// acts on a 2D mesh and none acts on a 1D mesh. The shear acts in the plane of the first two
/// axes: x += shear[0] * y, then y += shear[1] * x.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TemplateMap<T: RealScalar> {
    /// Step per axis
    pub step: [T; 3],
    /// Rotation angles (radians) about the first, second and third axes
    pub rotation: [T; 3],
    /// In-plane shear factors
    pub shear: [T; 2],
}

impl<T: RealScalar> Default for TemplateMap<T> {
    fn default() -> Self {
        Self::identity()
    }
}

fn rotate_in_plane<T: RealScalar>(p: &mut [T; 3], a: usize, b: usize, angle: T) {
    if angle == T::zero() {
        return;
    }
    let (s, c) = angle.sin_cos();
    let (x, y) = (p[a], p[b]);
    p[a] = c * x - s * y;
    p[b] = s * x + c * y;
}

impl<T: RealScalar> TemplateMap<T> {
    /// Unit steps, no rotation, no shear
    pub fn identity() -> Self {
        Self {
            step: [T::one(); 3],
            rotation: [T::zero(); 3],
            shear: [T::zero(); 2],
        }
    }

    /// Uniform scaling by a step per axis
    pub fn with_step(step: [T; 3]) -> Self {
        Self {
            step,
            ..Self::identity()
        }
    }

    /// Map parametric coordinates to template coordinates
    pub fn apply(&self, parametric: &[isize]) -> Vec<T> {
        let dim = parametric.len().min(3);
        let mut p = [T::zero(); 3];
        for (i, c) in parametric.iter().take(3).enumerate() {
            p[i] = scalar_from_index::<T>(*c) * self.step[i];
        }
        if dim >= 2 {
            rotate_in_plane(&mut p, 0, 1, self.rotation[2]);
        }
        if dim == 3 {
            rotate_in_plane(&mut p, 2, 0, self.rotation[1]);
            rotate_in_plane(&mut p, 1, 2, self.rotation[0]);
        }
        if dim >= 2 {
            p[0] = p[0] + self.shear[0] * p[1];
            p[1] = p[1] + self.shear[1] * p[0];
        }
        p[..dim].to_vec()
    }
}
