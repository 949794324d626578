// SALCs module: geometric mapping, projection and per-orbit orchestration
// This module turns a placed basis into symmetry-adapted linear combinations per irrep

// ======================== MODULE DECLARATIONS ========================
pub mod geometric_mapper;
pub mod orchestrator;
pub mod projection;
pub mod salc_result;

mod _tests_orchestrator;
mod _tests_projection;

// ======================== GEOMETRIC MAPPING ========================
pub use geometric_mapper::{
    BasisFunction,           // struct - basis quantity at a position, optionally with a lobe direction
    Orbit,                   // struct - symmetry-equivalent basis functions, ascending
    PermutationMap,          // struct - signed image of every function under every operation
    SignedIndex,             // struct - image index and sign
    angles_to_vectors,       // fn(&[(azimuth°, polar°)]) -> Vec<Vector3<f64>> - exact at multiples of 90°
    build_orbit_permutation, // fn(&[BasisFunction], &[SymmetryOperation]) -> Result<PermutationMap>
};
// PermutationMap impl methods:
//   orbits(&self) -> Result<Vec<Orbit>>                               - orbits by smallest member, sizes divide h
//   transformed_basis(&self, reference, &[Symbol]) -> Result<Vec<LinearCombination>> - R(b) for every R
//   image(&self, operation, function) -> SignedIndex
//   operation_count / function_count

// ======================== PROJECTION ========================
pub use projection::{
    project,            // fn(&[LinearCombination], group_name) -> Result<Vec<IrrepSalc>> - one result per irrep
    project_components, // fn(&[Vec<LinearCombination>], &PointGroup) -> Result<Vec<IrrepSalc>> - independent results of an orbit
    reduce,             // fn(&[LinearCombination], &PointGroup, &Irrep) -> Result<LinearCombination> - d/h Σ χ(R)·R(b)
};

// ======================== RESULTS ========================
pub use salc_result::{
    IrrepSalc, // struct - irrep label with its SALC
    Salc,      // enum - Zero | Single | Components
};
// Salc impl methods:
//   from_combinations(Vec<LinearCombination>) -> Self  - collapses to Zero / Single
//   combinations(&self) -> &[LinearCombination]
//   merge(self, other) -> Self                         - concatenation across orbits

// ======================== ORCHESTRATION ========================
pub use orchestrator::{
    BasisArrangement, // struct - basis functions with their symbols
    calc_salcs,       // fn(geometry, group_name, symbols, GeometryMode) -> Result<Vec<IrrepSalc>>
    calc_salcs_for,   // fn(&BasisArrangement, group_name) -> Result<Vec<IrrepSalc>>
};
