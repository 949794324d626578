use std::collections::BTreeMap;
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign, Mul, Neg, Sub};
use std::str::FromStr;

use num_traits::{Signed, Zero};
use serde::{Serialize, Serializer};

use super::exact_real::ExactReal;
use crate::error::SalcError;

/// An algebraic basis symbol such as `a`, `e1` or `sigma_3`.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct Symbol(String);

impl Symbol {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn name(&self) -> &str {
        &self.0
    }

    /// A letter or underscore, then letters, digits, underscores or primes
    pub fn is_valid_name(name: &str) -> bool {
        let mut chars = name.chars();
        match chars.next() {
            Some(c) if c.is_alphabetic() || c == '_' => {}
            _ => return false,
        }
        chars.all(|c| c.is_alphanumeric() || c == '_' || c == '\'')
    }
}

impl From<&str> for Symbol {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

impl From<String> for Symbol {
    fn from(name: String) -> Self {
        Self(name)
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A finite linear combination Σ cᵢ·sᵢ of symbols with exact coefficients.
///
/// Zero coefficients are never stored, so the zero combination is exactly the
/// empty one and equality is structural. Terms iterate in symbol-name order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct LinearCombination {
    terms: BTreeMap<Symbol, ExactReal>,
}

impl LinearCombination {
    pub fn zero() -> Self {
        Self::default()
    }

    /// The combination `1·symbol`
    pub fn symbol(symbol: impl Into<Symbol>) -> Self {
        Self::term(symbol, ExactReal::one())
    }

    pub fn term(symbol: impl Into<Symbol>, coefficient: impl Into<ExactReal>) -> Self {
        let mut combination = Self::zero();
        combination.add_term(symbol.into(), coefficient.into());
        combination
    }

    pub fn from_terms<S, C, I>(terms: I) -> Self
    where
        S: Into<Symbol>,
        C: Into<ExactReal>,
        I: IntoIterator<Item = (S, C)>,
    {
        let mut combination = Self::zero();
        for (symbol, coefficient) in terms {
            combination.add_term(symbol.into(), coefficient.into());
        }
        combination
    }

    /// Adds `coefficient·symbol`, dropping the term if it cancels.
    pub fn add_term(&mut self, symbol: Symbol, coefficient: ExactReal) {
        if coefficient.is_zero() {
            return;
        }
        let sum = self.coefficient(&symbol) + coefficient;
        if sum.is_zero() {
            self.terms.remove(&symbol);
        } else {
            self.terms.insert(symbol, sum);
        }
    }

    pub fn is_zero(&self) -> bool {
        self.terms.is_empty()
    }

    /// Number of nonzero terms
    pub fn len(&self) -> usize {
        self.terms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    pub fn coefficient(&self, symbol: &Symbol) -> ExactReal {
        self.terms.get(symbol).copied().unwrap_or_default()
    }

    pub fn terms(&self) -> impl Iterator<Item = (&Symbol, &ExactReal)> {
        self.terms.iter()
    }

    pub fn symbols(&self) -> impl Iterator<Item = &Symbol> {
        self.terms.keys()
    }

    pub fn contains(&self, symbol: &Symbol) -> bool {
        self.terms.contains_key(symbol)
    }

    /// First symbol in name order
    pub fn leading_symbol(&self) -> Option<&Symbol> {
        self.terms.keys().next()
    }

    pub fn scale(&self, factor: ExactReal) -> Self {
        if factor.is_zero() {
            return Self::zero();
        }
        Self {
            terms: self
                .terms
                .iter()
                .map(|(s, c)| (s.clone(), *c * factor))
                .collect(),
        }
    }

    /// Rescales so that `symbol` has coefficient 1. `None` if the symbol is absent.
    pub fn normalized_to(&self, symbol: &Symbol) -> Option<Self> {
        let pivot = self.terms.get(symbol)?;
        pivot.inverse().map(|inv| self.scale(inv))
    }

    /// True if both are nonzero and one is an exact scalar multiple of the other.
    pub fn is_proportional_to(&self, other: &Self) -> bool {
        let (Some(lead), Some(other_lead)) = (self.leading_symbol(), other.leading_symbol()) else {
            return false;
        };
        if lead != other_lead || self.len() != other.len() {
            return false;
        }
        match self.coefficient(lead).checked_div(&other.coefficient(lead)) {
            Some(ratio) => other.scale(ratio) == *self,
            None => false,
        }
    }

    /// True if `self` is not in the span of `others`.
    pub fn is_independent_of(&self, others: &[LinearCombination]) -> bool {
        if self.is_zero() {
            return false;
        }
        let mut rows: Vec<LinearCombination> = others.to_vec();
        let base_rank = rank(&rows);
        rows.push(self.clone());
        rank(&rows) == base_rank + 1
    }
}

/// Exact rank of a set of combinations (Gaussian elimination over Q(√5)).
pub fn rank(combinations: &[LinearCombination]) -> usize {
    let columns: Vec<&Symbol> = {
        let mut all: Vec<&Symbol> = combinations.iter().flat_map(|c| c.symbols()).collect();
        all.sort();
        all.dedup();
        all
    };
    let mut matrix: Vec<Vec<ExactReal>> = combinations
        .iter()
        .map(|c| columns.iter().map(|s| c.coefficient(s)).collect())
        .collect();

    let mut rank = 0;
    for col in 0..columns.len() {
        let Some(pivot_row) = (rank..matrix.len()).find(|&r| !matrix[r][col].is_zero()) else {
            continue;
        };
        matrix.swap(rank, pivot_row);
        let pivot = matrix[rank][col];
        for r in 0..matrix.len() {
            if r == rank || matrix[r][col].is_zero() {
                continue;
            }
            let factor = matrix[r][col] / pivot;
            for c in col..columns.len() {
                let delta = factor * matrix[rank][c];
                matrix[r][c] -= delta;
            }
        }
        rank += 1;
    }
    rank
}

impl Add for LinearCombination {
    type Output = Self;

    fn add(mut self, rhs: Self) -> Self {
        self += rhs;
        self
    }
}

impl AddAssign for LinearCombination {
    fn add_assign(&mut self, rhs: Self) {
        for (symbol, coefficient) in rhs.terms {
            self.add_term(symbol, coefficient);
        }
    }
}

impl Sub for LinearCombination {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        self + (-rhs)
    }
}

impl Neg for LinearCombination {
    type Output = Self;

    fn neg(self) -> Self {
        Self {
            terms: self.terms.into_iter().map(|(s, c)| (s, -c)).collect(),
        }
    }
}

impl Mul<ExactReal> for LinearCombination {
    type Output = Self;

    fn mul(self, rhs: ExactReal) -> Self {
        self.scale(rhs)
    }
}

impl Sum for LinearCombination {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::zero(), |acc, x| acc + x)
    }
}

impl From<Symbol> for LinearCombination {
    fn from(symbol: Symbol) -> Self {
        Self::symbol(symbol)
    }
}

/// Writes `magnitude·symbol` as `a`, `2*a`, `a/2`, `3*a/2`, `√5*a/2` or `(1/2 + √5/2)*a`.
fn fmt_term(f: &mut fmt::Formatter<'_>, magnitude: &ExactReal, symbol: &Symbol) -> fmt::Result {
    if magnitude.is_rational() {
        let r = magnitude.rational_part();
        if *r.numer() != 1 {
            write!(f, "{}*", r.numer())?;
        }
        write!(f, "{}", symbol)?;
        if *r.denom() != 1 {
            write!(f, "/{}", r.denom())?;
        }
        Ok(())
    } else if magnitude.rational_part().is_zero() {
        let r = magnitude.root5_part().abs();
        if *r.numer() != 1 {
            write!(f, "{}*", r.numer())?;
        }
        write!(f, "√5*{}", symbol)?;
        if *r.denom() != 1 {
            write!(f, "/{}", r.denom())?;
        }
        Ok(())
    } else {
        write!(f, "({})*{}", magnitude, symbol)
    }
}

impl fmt::Display for LinearCombination {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_zero() {
            return f.write_str("0");
        }
        for (i, (symbol, coefficient)) in self.terms.iter().enumerate() {
            let mixed = !coefficient.is_rational() && !coefficient.rational_part().is_zero();
            let negative = !mixed && coefficient.is_negative();
            match (i, negative) {
                (0, true) => f.write_str("-")?,
                (0, false) => {}
                (_, true) => f.write_str(" - ")?,
                (_, false) => f.write_str(" + ")?,
            }
            let magnitude = if negative { -*coefficient } else { *coefficient };
            fmt_term(f, &magnitude, symbol)?;
        }
        Ok(())
    }
}

impl Serialize for LinearCombination {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Parses one unsigned integer at the start of `s`, returning it and the rest.
fn take_integer(s: &str) -> Option<(i64, &str)> {
    let end = s.find(|c: char| !c.is_ascii_digit()).unwrap_or(s.len());
    if end == 0 {
        return None;
    }
    s[..end].parse().ok().map(|n| (n, &s[end..]))
}

fn parse_term(input: &str, term: &str, sign: i64) -> Result<(Symbol, ExactReal), SalcError> {
    let err = |reason: &str| SalcError::expression_parse(input, reason);
    let mut rest = term;
    let mut coefficient = ExactReal::integer(sign);

    if let Some((numer, after)) = take_integer(rest) {
        rest = after;
        let mut value = ExactReal::integer(numer);
        if let Some(after_slash) = rest.strip_prefix('/') {
            let (denom, after) = take_integer(after_slash).ok_or_else(|| err("expected denominator"))?;
            if denom == 0 {
                return Err(err("zero denominator"));
            }
            value = value * ExactReal::from_ratio(1, denom);
            rest = after;
        }
        coefficient = coefficient * value;
        rest = rest.strip_prefix('*').unwrap_or(rest);
    }

    let name_end = rest.find('/').unwrap_or(rest.len());
    let name = &rest[..name_end];
    if name.is_empty() {
        return Err(err("constant terms are not allowed"));
    }
    if !Symbol::is_valid_name(name) {
        return Err(err(&format!("invalid symbol '{}'", name)));
    }
    rest = &rest[name_end..];
    if let Some(after_slash) = rest.strip_prefix('/') {
        let (denom, after) = take_integer(after_slash).ok_or_else(|| err("expected denominator"))?;
        if denom == 0 {
            return Err(err("zero denominator"));
        }
        if !after.is_empty() {
            return Err(err(&format!("unexpected trailing '{}'", after)));
        }
        coefficient = coefficient * ExactReal::from_ratio(1, denom);
    }
    Ok((Symbol::new(name), coefficient))
}

impl FromStr for LinearCombination {
    type Err = SalcError;

    /// Accepts rational combinations such as `a - b/2 - c/2`, `-3*x/4 + y` or `0`.
    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let compact: String = input.chars().filter(|c| !c.is_whitespace()).collect();
        if compact.is_empty() {
            return Err(SalcError::expression_parse(input, "empty expression"));
        }
        if compact == "0" {
            return Ok(Self::zero());
        }

        let mut combination = Self::zero();
        let mut rest = compact.as_str();
        while !rest.is_empty() {
            let (sign, body) = match rest.as_bytes()[0] {
                b'+' => (1, &rest[1..]),
                b'-' => (-1, &rest[1..]),
                _ => (1, rest),
            };
            let end = body.find(['+', '-']).unwrap_or(body.len());
            if end == 0 {
                return Err(SalcError::expression_parse(input, "dangling sign"));
            }
            let (symbol, coefficient) = parse_term(input, &body[..end], sign)?;
            combination.add_term(symbol, coefficient);
            rest = &body[end..];
        }
        Ok(combination)
    }
}
