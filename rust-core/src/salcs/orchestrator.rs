use std::collections::BTreeSet;

use log::debug;
use nalgebra::Vector3;

use crate::algebra::{LinearCombination, Symbol};
use crate::error::{Result, SalcError};
use crate::interfaces::GeometryMode;
use crate::symmetries::lookup;

use super::geometric_mapper::{angles_to_vectors, build_orbit_permutation, BasisFunction};
use super::projection::project_components;
use super::salc_result::{IrrepSalc, Salc};

/// A basis set: one symbol per basis function, in the same order.
///
/// Symbols must be valid names and pairwise distinct.
#[derive(Debug, Clone, PartialEq)]
pub struct BasisArrangement {
    functions: Vec<BasisFunction>,
    symbols: Vec<Symbol>,
}

impl BasisArrangement {
    pub fn new(functions: Vec<BasisFunction>, symbols: Vec<Symbol>) -> Result<Self> {
        if functions.len() != symbols.len() {
            return Err(SalcError::dimension_mismatch(
                "basis symbols",
                functions.len(),
                symbols.len(),
            ));
        }
        check_symbols(&symbols)?;
        Ok(Self { functions, symbols })
    }

    /// Radial functions (σ orbitals) at the given positions
    pub fn radial(positions: Vec<Vector3<f64>>, symbols: Vec<Symbol>) -> Result<Self> {
        Self::new(positions.into_iter().map(BasisFunction::radial).collect(), symbols)
    }

    /// Radial functions from raw geometry rows: (azimuth°, polar°) or (x, y, z)
    pub fn from_geometry<G: AsRef<[f64]>>(geometry: &[G], symbols: Vec<Symbol>, mode: GeometryMode) -> Result<Self> {
        let expected = mode.components();
        for row in geometry {
            let row = row.as_ref();
            if row.len() != expected {
                return Err(SalcError::dimension_mismatch(
                    format!("{} geometry entry", mode),
                    expected,
                    row.len(),
                ));
            }
        }

        let positions = match mode {
            GeometryMode::Angle => {
                let angles: Vec<(f64, f64)> = geometry
                    .iter()
                    .map(|row| {
                        let row = row.as_ref();
                        (row[0], row[1])
                    })
                    .collect();
                angles_to_vectors(&angles)
            }
            GeometryMode::Vector => geometry
                .iter()
                .map(|row| Vector3::from_column_slice(row.as_ref()))
                .collect(),
        };

        Self::radial(positions, symbols)
    }

    /// Gives every function a lobe direction, making the basis sign-sensitive
    pub fn with_lobes(mut self, lobes: &[Vector3<f64>]) -> Result<Self> {
        if lobes.len() != self.functions.len() {
            return Err(SalcError::dimension_mismatch("lobe directions", self.functions.len(), lobes.len()));
        }
        for (function, lobe) in self.functions.iter_mut().zip(lobes) {
            function.lobe = Some(*lobe);
        }
        Ok(self)
    }

    pub fn functions(&self) -> &[BasisFunction] {
        &self.functions
    }

    pub fn symbols(&self) -> &[Symbol] {
        &self.symbols
    }

    pub fn len(&self) -> usize {
        self.functions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.functions.is_empty()
    }
}

fn check_symbols(symbols: &[Symbol]) -> Result<()> {
    let mut seen = BTreeSet::new();
    for (index, symbol) in symbols.iter().enumerate() {
        let reason = if !Symbol::is_valid_name(symbol.name()) {
            "not a valid name"
        } else if !seen.insert(symbol) {
            "used more than once"
        } else {
            continue;
        };
        return Err(SalcError::InvalidSymbol {
            index,
            name: symbol.name().to_string(),
            reason: reason.to_string(),
        });
    }
    Ok(())
}

/// SALCs of radial functions placed by `geometry`, labelled by `symbols`.
///
/// ```
/// use salc::interfaces::GeometryMode;
/// use salc::salcs::calc_salcs;
///
/// let square = [[1.0, 0.0, 0.0], [0.0, 1.0, 0.0], [-1.0, 0.0, 0.0], [0.0, -1.0, 0.0]];
/// let salcs = calc_salcs(&square, "d4h", &["a", "b", "c", "d"], GeometryMode::Vector).unwrap();
/// assert_eq!(salcs[0].to_string(), "A1g: a + b + c + d");
/// ```
pub fn calc_salcs<G, S>(geometry: &[G], group_name: &str, symbols: &[S], mode: GeometryMode) -> Result<Vec<IrrepSalc>>
where
    G: AsRef<[f64]>,
    S: AsRef<str>,
{
    if symbols.len() != geometry.len() {
        return Err(SalcError::dimension_mismatch("basis symbols", geometry.len(), symbols.len()));
    }
    let symbols = symbols.iter().map(|s| Symbol::new(s.as_ref())).collect();
    let arrangement = BasisArrangement::from_geometry(geometry, symbols, mode)?;
    calc_salcs_for(&arrangement, group_name)
}

/// SALCs of an arbitrary (possibly oriented) basis.
///
/// Each orbit of equivalent functions is projected on its own and the results are
/// concatenated per irrep in orbit order, so no combination mixes two orbits.
pub fn calc_salcs_for(arrangement: &BasisArrangement, group_name: &str) -> Result<Vec<IrrepSalc>> {
    let group = lookup(group_name)?;
    let operations = group.operations()?;

    let permutations = build_orbit_permutation(arrangement.functions(), operations)?;
    let orbits = permutations.orbits()?;
    debug!(
        "{}: {} basis functions in {} orbit(s)",
        group.name(),
        arrangement.len(),
        orbits.len()
    );

    let mut salcs: Vec<Salc> = vec![Salc::Zero; group.irreps().len()];
    for orbit in &orbits {
        debug!("orbit {:?}", orbit.members);
        let transformed: Vec<Vec<LinearCombination>> = orbit
            .members
            .iter()
            .map(|&member| permutations.transformed_basis(member, arrangement.symbols()))
            .collect::<Result<_>>()?;

        let projected = project_components(&transformed, group)?;
        for (accumulated, result) in salcs.iter_mut().zip(projected) {
            *accumulated = std::mem::take(accumulated).merge(result.salc);
        }
    }

    Ok(group
        .irreps()
        .iter()
        .zip(salcs)
        .map(|(irrep, salc)| IrrepSalc::new(irrep.label, salc))
        .collect())
}
