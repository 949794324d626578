use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign, Div, Mul, Neg, Sub, SubAssign};

use num_rational::Ratio;
use num_traits::{One, Signed, ToPrimitive, Zero};
use serde::{Serialize, Serializer};

/// An exact element of the quadratic field Q(√5): `rational + root5·√5`.
///
/// Every character of the compiled-in point groups lives in this field (the
/// five-fold groups need 2cos72° = (√5 − 1)/2 and friends), so coefficients of
/// projected combinations stay exact as well.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ExactReal {
    rational: Ratio<i64>,
    root5: Ratio<i64>,
}

impl ExactReal {
    /// p/q + (r/s)·√5 without normalization. Fractions must already be in lowest
    /// terms with positive denominators; meant for compiled-in constants.
    pub const fn new(p: i64, q: i64, r: i64, s: i64) -> Self {
        Self {
            rational: Ratio::new_raw(p, q),
            root5: Ratio::new_raw(r, s),
        }
    }

    pub const fn integer(n: i64) -> Self {
        Self::new(n, 1, 0, 1)
    }

    pub fn zero() -> Self {
        Self::integer(0)
    }

    pub fn one() -> Self {
        Self::integer(1)
    }

    /// Rational number p/q. Panics if `q == 0`, like [`Ratio::new`].
    pub fn from_ratio(p: i64, q: i64) -> Self {
        Self::from_parts(Ratio::new(p, q), Ratio::zero())
    }

    pub fn from_parts(rational: Ratio<i64>, root5: Ratio<i64>) -> Self {
        Self { rational, root5 }
    }

    /// The golden ratio φ = (1 + √5)/2
    pub const fn phi() -> Self {
        Self::new(1, 2, 1, 2)
    }

    pub fn rational_part(&self) -> Ratio<i64> {
        self.rational
    }

    pub fn root5_part(&self) -> Ratio<i64> {
        self.root5
    }

    pub fn is_zero(&self) -> bool {
        self.rational.is_zero() && self.root5.is_zero()
    }

    pub fn is_one(&self) -> bool {
        self.rational.is_one() && self.root5.is_zero()
    }

    pub fn is_rational(&self) -> bool {
        self.root5.is_zero()
    }

    /// Returns the value as an integer if it is one
    pub fn to_integer(&self) -> Option<i64> {
        if self.is_rational() && self.rational.is_integer() {
            Some(self.rational.to_integer())
        } else {
            None
        }
    }

    /// Field norm (a + b√5)(a − b√5) = a² − 5b²; zero only for zero.
    fn norm(&self) -> Ratio<i64> {
        self.rational * self.rational - Ratio::from_integer(5) * self.root5 * self.root5
    }

    fn conjugate(&self) -> Self {
        Self::from_parts(self.rational, -self.root5)
    }

    pub fn inverse(&self) -> Option<Self> {
        if self.is_zero() {
            return None;
        }
        let norm = self.norm();
        let conjugate = self.conjugate();
        Some(Self::from_parts(conjugate.rational / norm, conjugate.root5 / norm))
    }

    pub fn checked_div(&self, rhs: &Self) -> Option<Self> {
        rhs.inverse().map(|inv| *self * inv)
    }

    /// Sign of the value (exact: the sign of a + b√5 follows from comparing a² and 5b²)
    pub fn is_negative(&self) -> bool {
        let a = self.rational;
        let b = self.root5;
        match (a.is_negative() || a.is_zero(), b.is_negative() || b.is_zero()) {
            _ if self.is_zero() => false,
            (true, true) => true,
            (false, false) => false,
            // Mixed signs: the larger magnitude wins
            (true, false) => a * a > Ratio::from_integer(5) * b * b,
            (false, true) => Ratio::from_integer(5) * b * b > a * a,
        }
    }

    pub fn abs(&self) -> Self {
        if self.is_negative() {
            -*self
        } else {
            *self
        }
    }

    pub fn to_f64(&self) -> f64 {
        let a = self.rational.to_f64().unwrap_or(f64::NAN);
        let b = self.root5.to_f64().unwrap_or(f64::NAN);
        a + b * 5f64.sqrt()
    }
}

impl Default for ExactReal {
    fn default() -> Self {
        Self::zero()
    }
}

impl From<i64> for ExactReal {
    fn from(n: i64) -> Self {
        Self::integer(n)
    }
}

impl From<i32> for ExactReal {
    fn from(n: i32) -> Self {
        Self::integer(n as i64)
    }
}

impl From<Ratio<i64>> for ExactReal {
    fn from(r: Ratio<i64>) -> Self {
        Self::from_parts(r, Ratio::zero())
    }
}

impl Add for ExactReal {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self::from_parts(self.rational + rhs.rational, self.root5 + rhs.root5)
    }
}

impl AddAssign for ExactReal {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl Sub for ExactReal {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self::from_parts(self.rational - rhs.rational, self.root5 - rhs.root5)
    }
}

impl SubAssign for ExactReal {
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}

impl Neg for ExactReal {
    type Output = Self;

    fn neg(self) -> Self {
        Self::from_parts(-self.rational, -self.root5)
    }
}

impl Mul for ExactReal {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self {
        let five = Ratio::from_integer(5);
        Self::from_parts(
            self.rational * rhs.rational + five * self.root5 * rhs.root5,
            self.rational * rhs.root5 + self.root5 * rhs.rational,
        )
    }
}

/// Panics on division by zero, like the rational type underneath.
/// Use [`ExactReal::checked_div`] when the divisor is not known to be nonzero.
impl Div for ExactReal {
    type Output = Self;

    fn div(self, rhs: Self) -> Self {
        match self.checked_div(&rhs) {
            Some(q) => q,
            None => panic!("division of {} by zero", self),
        }
    }
}

impl Sum for ExactReal {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::zero(), |acc, x| acc + x)
    }
}

/// Formats a rational multiple of √5 without sign: `√5`, `√5/2`, `3*√5/4`
fn fmt_root5(f: &mut fmt::Formatter<'_>, magnitude: Ratio<i64>) -> fmt::Result {
    let numer = *magnitude.numer();
    let denom = *magnitude.denom();
    if numer != 1 {
        write!(f, "{}*", numer)?;
    }
    write!(f, "√5")?;
    if denom != 1 {
        write!(f, "/{}", denom)?;
    }
    Ok(())
}

impl fmt::Display for ExactReal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.root5.is_zero() {
            return write!(f, "{}", self.rational);
        }
        if !self.rational.is_zero() {
            write!(f, "{}", self.rational)?;
            f.write_str(if self.root5.is_negative() { " - " } else { " + " })?;
        } else if self.root5.is_negative() {
            f.write_str("-")?;
        }
        fmt_root5(f, self.root5.abs())
    }
}

impl Serialize for ExactReal {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}
