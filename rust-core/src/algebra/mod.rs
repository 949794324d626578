// Algebra module: exact scalars and symbolic linear combinations
// Every projected combination is built and simplified here without floating point

// ======================== MODULE DECLARATIONS ========================
pub mod exact_real;
pub mod linear_combination;


// ======================== EXACT SCALARS ========================
pub use exact_real::ExactReal; // struct - element a + b√5 of Q(√5) with rational a, b
// ExactReal impl methods:
//   new(p, q, r, s) -> Self (const)                  - p/q + (r/s)√5 from reduced fractions
//   integer(n) / zero() / one() / phi()              - common constants
//   from_ratio(p, q) -> Self                         - rational p/q
//   inverse(&self) -> Option<Self>                   - multiplicative inverse via the field conjugate
//   checked_div(&self, rhs) -> Option<Self>          - division guarded against zero
//   is_zero / is_one / is_rational / is_negative     - exact predicates
//   to_integer(&self) -> Option<i64>                 - integer value if integral
//   to_f64(&self) -> f64                             - floating approximation

// ======================== SYMBOLIC COMBINATIONS ========================
pub use linear_combination::{
    LinearCombination, // struct - Σ c·symbol with exact coefficients, zero terms never stored
    Symbol,            // struct - named basis symbol
    rank,              // fn(&[LinearCombination]) -> usize - exact rank by Gaussian elimination
};
// LinearCombination impl methods:
//   zero() / symbol(s) / term(s, c) / from_terms(iter) - constructors
//   add_term(&mut self, symbol, coefficient)         - accumulates and drops cancelled terms
//   coefficient(&self, &Symbol) -> ExactReal         - coefficient (zero if absent)
//   leading_symbol(&self) -> Option<&Symbol>         - first symbol in name order
//   scale(&self, factor) -> Self                     - scalar multiple
//   normalized_to(&self, &Symbol) -> Option<Self>    - rescale so the symbol has coefficient 1
//   is_proportional_to(&self, &Self) -> bool         - exact proportionality
//   is_independent_of(&self, &[Self]) -> bool        - not in the span of the others
//   FromStr / Display                                - "a - b/2 - c/2" textual form
