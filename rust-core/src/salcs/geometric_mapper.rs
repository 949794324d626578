use log::trace;
use nalgebra::Vector3;
use serde::Serialize;

use crate::algebra::{LinearCombination, Symbol};
use crate::config::GEOMETRY_TOLERANCE;
use crate::error::{Result, SalcError};
use crate::symmetries::SymmetryOperation;

/// Converts (azimuth°, polar°) pairs to unit vectors.
///
/// Sine and cosine are exact at multiples of 90°, so axis-aligned directions come
/// out as exact 0 and ±1 instead of 6e-17 residues.
pub fn angles_to_vectors(angles: &[(f64, f64)]) -> Vec<Vector3<f64>> {
    angles
        .iter()
        .map(|&(azimuth, polar)| {
            let (sin_phi, cos_phi) = sin_cos_degrees(azimuth);
            let (sin_theta, cos_theta) = sin_cos_degrees(polar);
            Vector3::new(
                positive_zero(sin_theta * cos_phi),
                positive_zero(sin_theta * sin_phi),
                positive_zero(cos_theta),
            )
        })
        .collect()
}

fn sin_cos_degrees(degrees: f64) -> (f64, f64) {
    let quarter_turns = degrees / 90.0;
    let nearest = quarter_turns.round();
    if (quarter_turns - nearest).abs() < 1e-12 {
        match (nearest as i64).rem_euclid(4) {
            0 => (0.0, 1.0),
            1 => (1.0, 0.0),
            2 => (0.0, -1.0),
            _ => (-1.0, 0.0),
        }
    } else {
        degrees.to_radians().sin_cos()
    }
}

// -0.0 + 0.0 == +0.0
fn positive_zero(x: f64) -> f64 {
    x + 0.0
}

/// A basis quantity located at `position`.
///
/// Without a lobe the quantity is radial (a σ orbital, a bond) and never changes
/// sign. With a lobe (a pπ orbital, a displacement) the transformed lobe is compared
/// with the lobe of the matched function and flips the sign when antiparallel.
///
/// Every image must be exactly ±1 times one function of the set. A lobe that some
/// operation turns sideways onto its target's lobe (p_x on square ligands under C4)
/// would need a signed sum over several functions per site; such arrangements are
/// rejected with `GeometricInconsistency`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BasisFunction {
    pub position: Vector3<f64>,
    pub lobe: Option<Vector3<f64>>,
}

impl BasisFunction {
    pub fn radial(position: Vector3<f64>) -> Self {
        Self { position, lobe: None }
    }

    pub fn oriented(position: Vector3<f64>, lobe: Vector3<f64>) -> Self {
        Self {
            position,
            lobe: Some(lobe),
        }
    }

    /// Sign relating `op(self)` to `target`, or `None` if they are not the same function.
    fn image_sign(&self, op: &SymmetryOperation, target: &BasisFunction) -> Option<i8> {
        if !within_tolerance(&op.apply(&self.position), &target.position) {
            return None;
        }
        match (self.lobe, target.lobe) {
            (None, None) => Some(1),
            (Some(lobe), Some(target_lobe)) => {
                let image = op.apply(&lobe);
                if within_tolerance(&image, &target_lobe) {
                    Some(1)
                } else if within_tolerance(&image, &-target_lobe) {
                    Some(-1)
                } else {
                    None
                }
            }
            _ => None,
        }
    }
}

fn within_tolerance(a: &Vector3<f64>, b: &Vector3<f64>) -> bool {
    (a - b).amax() <= GEOMETRY_TOLERANCE
}

/// Image of one basis function under one operation: `op(b_j) = sign · b_index`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SignedIndex {
    pub index: usize,
    pub sign: i8,
}

/// One orbit of symmetry-equivalent basis functions, members ascending
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Orbit {
    pub members: Vec<usize>,
}

impl Orbit {
    /// Smallest member index
    pub fn representative(&self) -> usize {
        self.members[0]
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }
}

/// Signed permutation action of every group operation on a basis.
///
/// `rows[k][j]` is the image of basis function `j` under operation `k`, with the
/// operations in the group's canonical order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PermutationMap {
    rows: Vec<Vec<SignedIndex>>,
    function_count: usize,
}

/// Finds, for every operation and basis function, the function its image coincides with.
///
/// Every image must match exactly one function (within `GEOMETRY_TOLERANCE`) and no
/// two functions may share an image under the same operation; otherwise the basis
/// is not closed under the group.
pub fn build_orbit_permutation(
    functions: &[BasisFunction],
    operations: &[SymmetryOperation],
) -> Result<PermutationMap> {
    let mut rows = Vec::with_capacity(operations.len());

    for (k, op) in operations.iter().enumerate() {
        let mut row = Vec::with_capacity(functions.len());
        let mut taken = vec![false; functions.len()];

        for (j, function) in functions.iter().enumerate() {
            let image = functions
                .iter()
                .enumerate()
                .find_map(|(m, target)| {
                    function
                        .image_sign(op, target)
                        .map(|sign| SignedIndex { index: m, sign })
                })
                .ok_or(SalcError::GeometricInconsistency {
                    operation: k,
                    index: j,
                })?;

            if taken[image.index] {
                return Err(SalcError::GeometricInconsistency {
                    operation: k,
                    index: j,
                });
            }
            taken[image.index] = true;
            row.push(image);
        }

        trace!("operation {}: {:?}", k, row);
        rows.push(row);
    }

    Ok(PermutationMap {
        rows,
        function_count: functions.len(),
    })
}

impl PermutationMap {
    pub fn operation_count(&self) -> usize {
        self.rows.len()
    }

    pub fn function_count(&self) -> usize {
        self.function_count
    }

    pub fn image(&self, operation: usize, function: usize) -> SignedIndex {
        self.rows[operation][function]
    }

    /// Equivalence orbits ordered by their smallest member.
    ///
    /// Each orbit is the set of images of its representative; its size must divide
    /// the number of operations.
    pub fn orbits(&self) -> Result<Vec<Orbit>> {
        let order = self.operation_count();
        let mut assigned = vec![false; self.function_count];
        let mut orbits = Vec::new();

        for j in 0..self.function_count {
            if assigned[j] {
                continue;
            }

            let mut members: Vec<usize> = self.rows.iter().map(|row| row[j].index).collect();
            members.sort_unstable();
            members.dedup();

            if order % members.len() != 0 {
                return Err(SalcError::OrbitCountMismatch {
                    representative: j,
                    size: members.len(),
                    order,
                });
            }

            for &m in &members {
                assigned[m] = true;
            }
            orbits.push(Orbit { members });
        }

        Ok(orbits)
    }

    /// `R_k(b_reference)` for every operation k, as signed symbols.
    pub fn transformed_basis(&self, reference: usize, symbols: &[Symbol]) -> Result<Vec<LinearCombination>> {
        if symbols.len() != self.function_count {
            return Err(SalcError::dimension_mismatch(
                "basis symbols",
                self.function_count,
                symbols.len(),
            ));
        }
        if reference >= self.function_count {
            return Err(SalcError::dimension_mismatch(
                "reference basis function",
                self.function_count,
                reference + 1,
            ));
        }

        Ok(self
            .rows
            .iter()
            .map(|row| {
                let image = row[reference];
                LinearCombination::term(symbols[image.index].clone(), i64::from(image.sign))
            })
            .collect())
    }
}
