use std::fmt;

use serde::Serialize;

use crate::algebra::LinearCombination;

/// What one irreducible representation contributes to a basis
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "combinations", rename_all = "lowercase")]
pub enum Salc {
    /// The irrep is absent from the basis
    #[default]
    Zero,
    Single(LinearCombination),
    /// Independent combinations, one per degenerate component (or per orbit)
    Components(Vec<LinearCombination>),
}

impl Salc {
    /// Collapses a list of combinations: none is `Zero`, one is `Single`.
    pub fn from_combinations(mut combinations: Vec<LinearCombination>) -> Self {
        combinations.retain(|c| !c.is_zero());
        match combinations.len() {
            0 => Salc::Zero,
            1 => Salc::Single(combinations.remove(0)),
            _ => Salc::Components(combinations),
        }
    }

    pub fn is_zero(&self) -> bool {
        matches!(self, Salc::Zero)
    }

    pub fn combinations(&self) -> &[LinearCombination] {
        match self {
            Salc::Zero => &[],
            Salc::Single(c) => std::slice::from_ref(c),
            Salc::Components(cs) => cs,
        }
    }

    pub fn into_combinations(self) -> Vec<LinearCombination> {
        match self {
            Salc::Zero => Vec::new(),
            Salc::Single(c) => vec![c],
            Salc::Components(cs) => cs,
        }
    }

    /// Number of independent combinations carried
    pub fn len(&self) -> usize {
        self.combinations().len()
    }

    pub fn is_empty(&self) -> bool {
        self.is_zero()
    }

    /// Concatenates `other` after `self`
    pub fn merge(self, other: Salc) -> Salc {
        let mut combinations = self.into_combinations();
        combinations.extend(other.into_combinations());
        Salc::from_combinations(combinations)
    }
}

impl From<LinearCombination> for Salc {
    fn from(combination: LinearCombination) -> Self {
        Salc::from_combinations(vec![combination])
    }
}

impl fmt::Display for Salc {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Salc::Zero => f.write_str("0"),
            Salc::Single(c) => write!(f, "{}", c),
            Salc::Components(cs) => {
                f.write_str("[")?;
                for (i, c) in cs.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{}", c)?;
                }
                f.write_str("]")
            }
        }
    }
}

/// Result for one irrep, reported in character-table order
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IrrepSalc {
    pub irrep: &'static str,
    pub salc: Salc,
}

impl IrrepSalc {
    pub fn new(irrep: &'static str, salc: Salc) -> Self {
        Self { irrep, salc }
    }
}

impl fmt::Display for IrrepSalc {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.irrep, self.salc)
    }
}
