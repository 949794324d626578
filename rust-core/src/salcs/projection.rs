use log::debug;
#[cfg(feature = "parallel")]
use rayon::prelude::*;

use crate::algebra::{ExactReal, LinearCombination};
use crate::error::{Result, SalcError};
use crate::symmetries::{lookup, Irrep, PointGroup};

use super::salc_result::{IrrepSalc, Salc};

/// d/h · Σ_R χ(R) · R(b) for one irrep.
///
/// `transformed` holds R(b) for every operation R, in the group's canonical order.
pub fn reduce(transformed: &[LinearCombination], group: &PointGroup, irrep: &Irrep) -> Result<LinearCombination> {
    check_length(transformed, group)?;

    let characters = group.expand_irrep(irrep);
    let sum: LinearCombination = characters
        .iter()
        .zip(transformed)
        .filter(|(chi, _)| !chi.is_zero())
        .map(|(chi, image)| image.scale(*chi))
        .sum();

    let factor = ExactReal::from_ratio(irrep.dimension() as i64, group.order() as i64);
    Ok(sum.scale(factor))
}

/// Projects a transformed-basis vector onto every irrep of `group_name`.
///
/// Results come back in table order; each nonzero result is rescaled so the
/// reference symbol keeps its coefficient from the identity image.
pub fn project(transformed: &[LinearCombination], group_name: &str) -> Result<Vec<IrrepSalc>> {
    let group = lookup(group_name)?;
    check_length(transformed, group)?;

    per_irrep(group, |irrep| {
        let combination = normalize(reduce(transformed, group, irrep)?, transformed);
        Ok(IrrepSalc::new(irrep.label, Salc::from(combination)))
    })
}

/// Projects every member of one orbit and keeps the independent results.
///
/// `orbit_transformed[i]` is the transformed-basis vector of the i-th orbit member,
/// canonical representative first. Each irrep collects, in member order, every
/// projection that is linearly independent of those kept before it.
pub fn project_components(orbit_transformed: &[Vec<LinearCombination>], group: &PointGroup) -> Result<Vec<IrrepSalc>> {
    for transformed in orbit_transformed {
        check_length(transformed, group)?;
    }

    per_irrep(group, |irrep| {
        let mut kept: Vec<LinearCombination> = Vec::new();
        for transformed in orbit_transformed {
            let combination = normalize(reduce(transformed, group, irrep)?, transformed);
            if combination.is_independent_of(&kept) {
                kept.push(combination);
            }
        }
        debug!("{} {}: {} independent combination(s)", group.name(), irrep.label, kept.len());
        Ok(IrrepSalc::new(irrep.label, Salc::from_combinations(kept)))
    })
}

fn check_length(transformed: &[LinearCombination], group: &PointGroup) -> Result<()> {
    if transformed.len() != group.order() {
        return Err(SalcError::dimension_mismatch(
            format!("transformed basis for {}", group.name()),
            group.order(),
            transformed.len(),
        ));
    }
    Ok(())
}

// The identity image's leading symbol keeps its identity-image coefficient;
// if it cancelled, the result's own leading symbol gets coefficient 1
fn normalize(combination: LinearCombination, transformed: &[LinearCombination]) -> LinearCombination {
    let reference = transformed.first().and_then(|identity| {
        identity
            .leading_symbol()
            .filter(|s| combination.contains(s))
            .map(|s| (s, identity.coefficient(s)))
    });
    let (pivot, target) = match reference {
        Some((symbol, coefficient)) => (Some(symbol), coefficient),
        None => (combination.leading_symbol(), ExactReal::one()),
    };

    match pivot.and_then(|s| combination.normalized_to(s)) {
        Some(normalized) => normalized.scale(target),
        None => combination,
    }
}

#[cfg(feature = "parallel")]
fn per_irrep<F>(group: &PointGroup, f: F) -> Result<Vec<IrrepSalc>>
where
    F: Fn(&Irrep) -> Result<IrrepSalc> + Sync + Send,
{
    group.irreps().par_iter().map(f).collect()
}

#[cfg(not(feature = "parallel"))]
fn per_irrep<F>(group: &PointGroup, f: F) -> Result<Vec<IrrepSalc>>
where
    F: Fn(&Irrep) -> Result<IrrepSalc>,
{
    group.irreps().iter().map(f).collect()
}
