//! Symmetry-adapted linear combinations (SALCs)
//!
//! This library decomposes a set of symmetry-equivalent basis quantities (ligand
//! σ orbitals, pπ orbitals, displacement vectors) into combinations that transform
//! irreducibly under a molecular point group. All arithmetic is exact: coefficients
//! live in Q(√5), which covers every character of the compiled-in tables.

pub mod algebra;
pub mod config;
pub mod error;
pub mod interfaces;
pub mod salcs;
pub mod symmetries;

pub use error::{Result, SalcError};

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
