use thiserror::Error;

/// Common result type used throughout the library
pub type Result<T> = std::result::Result<T, SalcError>;

/// Every failure is a caller input error (or a broken compiled-in table) detected
/// synchronously; no partial results are ever returned alongside one.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SalcError {
    #[error("unknown point group '{name}'")]
    UnknownGroup { name: String },

    #[error("dimension mismatch in {context}: expected {expected}, got {actual}")]
    DimensionMismatch {
        context: String,
        expected: usize,
        actual: usize,
    },

    #[error(
        "basis function {index} has no unique image under operation {operation}; the arrangement is not closed under the group"
    )]
    GeometricInconsistency { operation: usize, index: usize },

    #[error("orbit of basis function {representative} has {size} members, which does not divide the group order {order}")]
    OrbitCountMismatch {
        representative: usize,
        size: usize,
        order: usize,
    },

    #[error("basis symbol {index} ('{name}') is {reason}")]
    InvalidSymbol {
        index: usize,
        name: String,
        reason: String,
    },

    #[error("unsupported geometry mode '{mode}' (expected 'angle' or 'vector')")]
    UnsupportedMode { mode: String },

    #[error("inconsistent character table for {group}: {reason}")]
    CharacterTable { group: String, reason: String },

    #[error("cannot parse expression '{input}': {reason}")]
    ExpressionParse { input: String, reason: String },
}

impl SalcError {
    pub fn dimension_mismatch(context: impl Into<String>, expected: usize, actual: usize) -> Self {
        Self::DimensionMismatch {
            context: context.into(),
            expected,
            actual,
        }
    }

    pub fn character_table(group: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::CharacterTable {
            group: group.into(),
            reason: reason.into(),
        }
    }

    pub fn expression_parse(input: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::ExpressionParse {
            input: input.into(),
            reason: reason.into(),
        }
    }
}
