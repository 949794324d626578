// Symmetries module: point-group operations and the compiled-in character tables
// This module provides the class/irrep data and the canonical per-operation expansion

// ======================== MODULE DECLARATIONS ========================
pub mod character_tables;
pub mod point_groups;
pub mod symmetry_operations;

// Test modules
mod _tests_character_tables;

// ======================== SYMMETRY OPERATIONS ========================
pub use symmetry_operations::{
    OperationSpec,     // enum - compile-time class representative (identity, inversion, C_n^k, σ, S_n^k)
    SymmetryOperation, // struct - orthogonal 3x3 matrix acting on Cartesian vectors
};
// SymmetryOperation impl methods:
//   identity() / inversion() -> Self                         - trivial operations
//   rotation(axis, order, power) -> Self                     - proper rotation C_n^k
//   reflection(normal) -> Self                               - mirror plane
//   improper_rotation(axis, order, power) -> Self            - S_n^k = σh·C_n^k
//   apply(&self, &Vector3<f64>) -> Vector3<f64>              - acts on a vector
//   compose(&self, &Self) -> Self                            - self ∘ other
//   inverse(&self) -> Self                                   - transpose
//   conjugate_by(&self, g) -> Self                           - g·self·g⁻¹
//   determinant / is_proper / trace / approx_eq              - inspection

// ======================== POINT GROUPS ========================
pub use point_groups::{
    ConjugacyClass,   // struct - label, size and representative of a class
    Irrep,            // struct - Mulliken label and characters per class
    PointGroup,       // struct - a supported point group with its character table
    expand,           // fn(&[ExactReal], group_name) -> Result<Vec<ExactReal>> - per-class row to per-operation row
    lookup,           // fn(group_name) -> Result<&'static PointGroup> - registry lookup (case-insensitive)
    supported_groups, // fn() -> Vec<&'static str> - registry names
};
// PointGroup impl methods:
//   name / order / classes / class_sizes / irreps / irrep(label) / irrep_labels
//   class_of_operation(&self) -> Vec<usize>                  - class index of every operation
//   expand_characters(&self, &[ExactReal]) -> Result<Vec<ExactReal>>
//   expand_irrep(&self, &Irrep) -> Vec<ExactReal>
//   operations(&self) -> Result<&[SymmetryOperation]>        - canonical operation sequence (cached)
//   validate(&self) -> Result<()>                            - table self-check

pub use character_tables::POINT_GROUPS; // static - registry of all supported groups
