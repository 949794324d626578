use std::f64::consts::PI;

use nalgebra::{Matrix3, Rotation3, Unit, Vector3};
use serde::{Deserialize, Serialize};

/// A point symmetry operation: an orthogonal 3×3 matrix acting on Cartesian vectors.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SymmetryOperation {
    /// Orthogonal matrix with determinant ±1
    pub matrix: Matrix3<f64>,
}

impl SymmetryOperation {
    /// Create a new symmetry operation
    pub fn new(matrix: Matrix3<f64>) -> Self {
        Self { matrix }
    }

    /// Create identity operation
    pub fn identity() -> Self {
        Self::new(Matrix3::identity())
    }

    /// Inversion through the origin
    pub fn inversion() -> Self {
        Self::new(-Matrix3::identity())
    }

    /// Proper rotation C_n^k about `axis` (by 2πk/n, right-handed)
    pub fn rotation(axis: Vector3<f64>, order: u32, power: u32) -> Self {
        let angle = 2.0 * PI * power as f64 / order as f64;
        let rotation = Rotation3::from_axis_angle(&Unit::new_normalize(axis), angle);
        Self::new(rotation.into_inner())
    }

    /// Reflection through the plane with the given normal
    pub fn reflection(normal: Vector3<f64>) -> Self {
        let n = normal.normalize();
        Self::new(Matrix3::identity() - 2.0 * n * n.transpose())
    }

    /// Improper rotation S_n^k = σh·C_n^k, σh being the plane perpendicular to `axis`
    pub fn improper_rotation(axis: Vector3<f64>, order: u32, power: u32) -> Self {
        Self::reflection(axis).compose(&Self::rotation(axis, order, power))
    }

    /// Apply symmetry operation to a point
    pub fn apply(&self, point: &Vector3<f64>) -> Vector3<f64> {
        self.matrix * point
    }

    /// `self ∘ other`: apply `other` first, then `self`
    pub fn compose(&self, other: &Self) -> Self {
        Self::new(self.matrix * other.matrix)
    }

    /// Inverse operation (the transpose, since the matrix is orthogonal)
    pub fn inverse(&self) -> Self {
        Self::new(self.matrix.transpose())
    }

    /// g·self·g⁻¹
    pub fn conjugate_by(&self, g: &Self) -> Self {
        g.compose(self).compose(&g.inverse())
    }

    pub fn determinant(&self) -> f64 {
        self.matrix.determinant()
    }

    /// Rotations have determinant +1; reflections, inversion and S_n have −1
    pub fn is_proper(&self) -> bool {
        self.determinant() > 0.0
    }

    pub fn trace(&self) -> f64 {
        self.matrix.trace()
    }

    /// Check if this is the identity operation
    pub fn is_identity(&self, tolerance: f64) -> bool {
        self.approx_eq(&Self::identity(), tolerance)
    }

    /// Element-wise comparison within `tolerance`
    pub fn approx_eq(&self, other: &Self, tolerance: f64) -> bool {
        (self.matrix - other.matrix).amax() < tolerance
    }
}

/// Compile-time description of a class representative.
///
/// Axes and normals need not be normalized.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum OperationSpec {
    Identity,
    Inversion,
    Rotation { axis: [f64; 3], order: u32, power: u32 },
    Reflection { normal: [f64; 3] },
    ImproperRotation { axis: [f64; 3], order: u32, power: u32 },
}

impl OperationSpec {
    pub fn build(&self) -> SymmetryOperation {
        match *self {
            OperationSpec::Identity => SymmetryOperation::identity(),
            OperationSpec::Inversion => SymmetryOperation::inversion(),
            OperationSpec::Rotation { axis, order, power } => {
                SymmetryOperation::rotation(Vector3::from(axis), order, power)
            }
            OperationSpec::Reflection { normal } => {
                SymmetryOperation::reflection(Vector3::from(normal))
            }
            OperationSpec::ImproperRotation { axis, order, power } => {
                SymmetryOperation::improper_rotation(Vector3::from(axis), order, power)
            }
        }
    }
}
