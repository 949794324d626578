use std::sync::OnceLock;

use log::debug;

use super::character_tables::POINT_GROUPS;
use super::symmetry_operations::{OperationSpec, SymmetryOperation};
use crate::algebra::ExactReal;
use crate::config::OPERATION_TOLERANCE;
use crate::error::{Result, SalcError};

/// A conjugacy class: label, number of operations, and one representative.
#[derive(Debug, Clone, Copy)]
pub struct ConjugacyClass {
    pub label: &'static str,
    pub size: usize,
    pub representative: OperationSpec,
}

/// An irreducible representation with its characters, one per class.
#[derive(Debug, Clone, Copy)]
pub struct Irrep {
    pub label: &'static str,
    pub characters: &'static [ExactReal],
}

impl Irrep {
    /// Dimension = character of the identity class
    pub fn dimension(&self) -> usize {
        self.characters
            .first()
            .and_then(ExactReal::to_integer)
            .map_or(0, |d| d.max(0) as usize)
    }
}

/// A finite point group with its character table.
///
/// Instances are compiled-in statics (see [`super::character_tables`]); the
/// expanded operation sequence is built on first use and never changes.
#[derive(Debug)]
pub struct PointGroup {
    pub(super) name: &'static str,
    pub(super) classes: &'static [ConjugacyClass],
    pub(super) irreps: &'static [Irrep],
    pub(super) operations: OnceLock<Result<Vec<SymmetryOperation>>>,
}

/// Find a supported point group by name (case-insensitive, e.g. `"D4h"`)
pub fn lookup(name: &str) -> Result<&'static PointGroup> {
    let wanted = name.trim();
    POINT_GROUPS
        .iter()
        .copied()
        .find(|g| g.name.eq_ignore_ascii_case(wanted))
        .ok_or_else(|| SalcError::UnknownGroup {
            name: name.to_string(),
        })
}

/// Names of all supported groups, in registry order
pub fn supported_groups() -> Vec<&'static str> {
    POINT_GROUPS.iter().map(|g| g.name).collect()
}

/// Repeat each class character once per operation of its class.
///
/// The result follows the canonical operation order of the group and has
/// length h.
pub fn expand(class_characters: &[ExactReal], group_name: &str) -> Result<Vec<ExactReal>> {
    lookup(group_name)?.expand_characters(class_characters)
}

impl PointGroup {
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Group order h
    pub fn order(&self) -> usize {
        self.classes.iter().map(|c| c.size).sum()
    }

    pub fn classes(&self) -> &'static [ConjugacyClass] {
        self.classes
    }

    pub fn class_sizes(&self) -> Vec<usize> {
        self.classes.iter().map(|c| c.size).collect()
    }

    pub fn irreps(&self) -> &'static [Irrep] {
        self.irreps
    }

    pub fn irrep(&self, label: &str) -> Option<&'static Irrep> {
        self.irreps.iter().find(|i| i.label == label)
    }

    pub fn irrep_labels(&self) -> Vec<&'static str> {
        self.irreps.iter().map(|i| i.label).collect()
    }

    /// Index of the class each operation of the canonical sequence belongs to
    pub fn class_of_operation(&self) -> Vec<usize> {
        self.classes
            .iter()
            .enumerate()
            .flat_map(|(k, c)| std::iter::repeat(k).take(c.size))
            .collect()
    }

    pub fn expand_characters(&self, class_characters: &[ExactReal]) -> Result<Vec<ExactReal>> {
        if class_characters.len() != self.classes.len() {
            return Err(SalcError::dimension_mismatch(
                format!("class characters of {}", self.name),
                self.classes.len(),
                class_characters.len(),
            ));
        }
        Ok(self
            .classes
            .iter()
            .zip(class_characters)
            .flat_map(|(class, chi)| std::iter::repeat(*chi).take(class.size))
            .collect())
    }

    /// Per-operation characters of one irrep
    pub fn expand_irrep(&self, irrep: &Irrep) -> Vec<ExactReal> {
        self.class_of_operation()
            .into_iter()
            .map(|k| irrep.characters[k])
            .collect()
    }

    /// Every operation of the group in canonical order (class by class).
    pub fn operations(&self) -> Result<&[SymmetryOperation]> {
        self.operations
            .get_or_init(|| self.build_operations())
            .as_deref()
            .map_err(Clone::clone)
    }

    /// Each class is the closure of its representative under conjugation by the
    /// class representatives. A subgroup meeting every conjugacy class is the
    /// whole group, so the representatives generate it.
    fn build_operations(&self) -> Result<Vec<SymmetryOperation>> {
        let generators: Vec<SymmetryOperation> =
            self.classes.iter().map(|c| c.representative.build()).collect();
        let mut operations = Vec::with_capacity(self.order());

        for (class, representative) in self.classes.iter().zip(&generators) {
            let mut members = vec![*representative];
            let mut cursor = 0;
            while cursor < members.len() {
                let current = members[cursor];
                for g in &generators {
                    let conjugate = current.conjugate_by(g);
                    if !members.iter().any(|m| m.approx_eq(&conjugate, OPERATION_TOLERANCE)) {
                        members.push(conjugate);
                    }
                }
                if members.len() > class.size {
                    break;
                }
                cursor += 1;
            }
            if members.len() != class.size {
                return Err(SalcError::character_table(
                    self.name,
                    format!(
                        "class {} closes with {} operations, table declares {}",
                        class.label,
                        members.len(),
                        class.size
                    ),
                ));
            }
            operations.extend(members);
        }

        debug!("expanded {} into {} operations", self.name, operations.len());
        Ok(operations)
    }

    /// Consistency checks on the compiled-in table.
    ///
    /// Identity class first with a single member, identity characters equal to
    /// positive integer dimensions, Σ d² = h, and exact orthonormality of the rows
    /// under the class-size-weighted inner product.
    pub fn validate(&self) -> Result<()> {
        let h = self.order();
        let fail = |reason: String| Err(SalcError::character_table(self.name, reason));

        match self.classes.first() {
            Some(c) if c.size == 1 && c.representative == OperationSpec::Identity => {}
            _ => return fail("first class must be the identity".to_string()),
        }
        if self.irreps.len() != self.classes.len() {
            return fail(format!(
                "{} irreps for {} classes",
                self.irreps.len(),
                self.classes.len()
            ));
        }
        for irrep in self.irreps {
            if irrep.characters.len() != self.classes.len() {
                return fail(format!("irrep {} has the wrong number of characters", irrep.label));
            }
            if irrep.dimension() == 0 {
                return fail(format!("irrep {} has no positive integer dimension", irrep.label));
            }
        }
        let dimension_squares: usize = self.irreps.iter().map(|i| i.dimension().pow(2)).sum();
        if dimension_squares != h {
            return fail(format!("sum of squared dimensions is {}, order is {}", dimension_squares, h));
        }

        for (a, row_a) in self.irreps.iter().enumerate() {
            for (b, row_b) in self.irreps.iter().enumerate() {
                let product: ExactReal = self
                    .classes
                    .iter()
                    .zip(row_a.characters.iter().zip(row_b.characters))
                    .map(|(class, (x, y))| ExactReal::integer(class.size as i64) * *x * *y)
                    .sum();
                let expected = if a == b { h as i64 } else { 0 };
                if product != ExactReal::integer(expected) {
                    return fail(format!(
                        "rows {} and {} have inner product {} (expected {})",
                        row_a.label, row_b.label, product, expected
                    ));
                }
            }
        }
        Ok(())
    }
}
