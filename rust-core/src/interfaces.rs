// Definitions that are used throughout all modules

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::SalcError;

// How raw geometry rows are interpreted
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GeometryMode {
    /// (azimuth°, polar°) pairs
    Angle,
    /// Cartesian 3-vectors
    #[default]
    Vector,
}

impl GeometryMode {
    /// Number of components each geometry entry must carry in this mode
    pub fn components(&self) -> usize {
        match self {
            GeometryMode::Angle => 2,
            GeometryMode::Vector => 3,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            GeometryMode::Angle => "angle",
            GeometryMode::Vector => "vector",
        }
    }
}

impl FromStr for GeometryMode {
    type Err = SalcError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "angle" | "angles" => Ok(GeometryMode::Angle),
            "vector" | "vectors" => Ok(GeometryMode::Vector),
            _ => Err(SalcError::UnsupportedMode {
                mode: s.to_string(),
            }),
        }
    }
}

impl fmt::Display for GeometryMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
