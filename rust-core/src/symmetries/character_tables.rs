//! Compiled-in character tables.
//!
//! Conventions: principal axis along z; the first set of perpendicular C2 axes
//! (C2′) along x, with σv containing them; cubic groups with C4/C2 along the
//! Cartesian axes and C3 along the body diagonals; Ih with its five-fold axes
//! through the icosahedron vertices (0, ±1, ±φ) and cyclic permutations.
//! Improper rotations S_n^k are σh·C_n^k.

use std::sync::OnceLock;

use super::point_groups::{ConjugacyClass, Irrep, PointGroup};
use super::symmetry_operations::OperationSpec;
use crate::algebra::ExactReal;

const fn n(value: i64) -> ExactReal {
    ExactReal::integer(value)
}

// 2cos72° = φ − 1 and 2cos144° = −φ
const C72: ExactReal = ExactReal::new(-1, 2, 1, 2);
const C144: ExactReal = ExactReal::new(-1, 2, -1, 2);
const PHI: ExactReal = ExactReal::phi();
// 1 − φ
const PHI_BAR: ExactReal = ExactReal::new(1, 2, -1, 2);

const SQRT3: f64 = 1.7320508075688772;
const GOLDEN: f64 = 1.618033988749895;

const Z: [f64; 3] = [0.0, 0.0, 1.0];
const X: [f64; 3] = [1.0, 0.0, 0.0];
const Y: [f64; 3] = [0.0, 1.0, 0.0];
const XY_DIAGONAL: [f64; 3] = [1.0, 1.0, 0.0];
const XY_ANTIDIAGONAL: [f64; 3] = [1.0, -1.0, 0.0];
const BODY_DIAGONAL: [f64; 3] = [1.0, 1.0, 1.0];
const AT_30_DEGREES: [f64; 3] = [SQRT3, 1.0, 0.0];
const ICOSAHEDRAL_VERTEX: [f64; 3] = [0.0, 1.0, GOLDEN];

// Struct literals (not const fn calls) so the borrowed slices live for 'static
macro_rules! point_group {
    ($name:expr, [$($class:expr),* $(,)?], [$($irrep:expr),* $(,)?] $(,)?) => {
        PointGroup {
            name: $name,
            classes: &[$($class),*],
            irreps: &[$($irrep),*],
            operations: OnceLock::new(),
        }
    };
}

macro_rules! class {
    ($label:expr, $size:expr, $representative:expr) => {
        ConjugacyClass {
            label: $label,
            size: $size,
            representative: $representative,
        }
    };
}

macro_rules! irrep {
    ($label:expr, [$($chi:expr),* $(,)?]) => {
        Irrep {
            label: $label,
            characters: &[$($chi),*],
        }
    };
}

const E: OperationSpec = OperationSpec::Identity;
const I: OperationSpec = OperationSpec::Inversion;

const fn c(axis: [f64; 3], order: u32, power: u32) -> OperationSpec {
    OperationSpec::Rotation { axis, order, power }
}

const fn s(axis: [f64; 3], order: u32, power: u32) -> OperationSpec {
    OperationSpec::ImproperRotation { axis, order, power }
}

const fn sigma(normal: [f64; 3]) -> OperationSpec {
    OperationSpec::Reflection { normal }
}

// ======================== LOW SYMMETRY ========================

pub static C1: PointGroup = point_group!("c1", [class!("E", 1, E)], [irrep!("A", [n(1)])]);

pub static CS: PointGroup = point_group!(
    "cs",
    [class!("E", 1, E), class!("σh", 1, sigma(Z))],
    [irrep!("A'", [n(1), n(1)]), irrep!("A''", [n(1), n(-1)])],
);

pub static CI: PointGroup = point_group!(
    "ci",
    [class!("E", 1, E), class!("i", 1, I)],
    [irrep!("Ag", [n(1), n(1)]), irrep!("Au", [n(1), n(-1)])],
);

pub static C2: PointGroup = point_group!(
    "c2",
    [class!("E", 1, E), class!("C2", 1, c(Z, 2, 1))],
    [irrep!("A", [n(1), n(1)]), irrep!("B", [n(1), n(-1)])],
);

pub static C2H: PointGroup = point_group!(
    "c2h",
    [class!("E", 1, E), class!("C2", 1, c(Z, 2, 1)), class!("i", 1, I), class!("σh", 1, sigma(Z))],
    [
        irrep!("Ag", [n(1), n(1), n(1), n(1)]),
        irrep!("Bg", [n(1), n(-1), n(1), n(-1)]),
        irrep!("Au", [n(1), n(1), n(-1), n(-1)]),
        irrep!("Bu", [n(1), n(-1), n(-1), n(1)]),
    ],
);

// ======================== C_nv ========================

pub static C2V: PointGroup = point_group!(
    "c2v",
    [
        class!("E", 1, E),
        class!("C2", 1, c(Z, 2, 1)),
        class!("σv(xz)", 1, sigma(Y)),
        class!("σv'(yz)", 1, sigma(X)),
    ],
    [
        irrep!("A1", [n(1), n(1), n(1), n(1)]),
        irrep!("A2", [n(1), n(1), n(-1), n(-1)]),
        irrep!("B1", [n(1), n(-1), n(1), n(-1)]),
        irrep!("B2", [n(1), n(-1), n(-1), n(1)]),
    ],
);

pub static C3V: PointGroup = point_group!(
    "c3v",
    [class!("E", 1, E), class!("C3", 2, c(Z, 3, 1)), class!("σv", 3, sigma(Y))],
    [
        irrep!("A1", [n(1), n(1), n(1)]),
        irrep!("A2", [n(1), n(1), n(-1)]),
        irrep!("E", [n(2), n(-1), n(0)]),
    ],
);

pub static C4V: PointGroup = point_group!(
    "c4v",
    [
        class!("E", 1, E),
        class!("C4", 2, c(Z, 4, 1)),
        class!("C2", 1, c(Z, 2, 1)),
        class!("σv", 2, sigma(Y)),
        class!("σd", 2, sigma(XY_ANTIDIAGONAL)),
    ],
    [
        irrep!("A1", [n(1), n(1), n(1), n(1), n(1)]),
        irrep!("A2", [n(1), n(1), n(1), n(-1), n(-1)]),
        irrep!("B1", [n(1), n(-1), n(1), n(1), n(-1)]),
        irrep!("B2", [n(1), n(-1), n(1), n(-1), n(1)]),
        irrep!("E", [n(2), n(0), n(-2), n(0), n(0)]),
    ],
);

pub static C5V: PointGroup = point_group!(
    "c5v",
    [
        class!("E", 1, E),
        class!("C5", 2, c(Z, 5, 1)),
        class!("C5²", 2, c(Z, 5, 2)),
        class!("σv", 5, sigma(Y)),
    ],
    [
        irrep!("A1", [n(1), n(1), n(1), n(1)]),
        irrep!("A2", [n(1), n(1), n(1), n(-1)]),
        irrep!("E1", [n(2), C72, C144, n(0)]),
        irrep!("E2", [n(2), C144, C72, n(0)]),
    ],
);

pub static C6V: PointGroup = point_group!(
    "c6v",
    [
        class!("E", 1, E),
        class!("C6", 2, c(Z, 6, 1)),
        class!("C3", 2, c(Z, 3, 1)),
        class!("C2", 1, c(Z, 2, 1)),
        class!("σv", 3, sigma(Y)),
        class!("σd", 3, sigma(X)),
    ],
    [
        irrep!("A1", [n(1), n(1), n(1), n(1), n(1), n(1)]),
        irrep!("A2", [n(1), n(1), n(1), n(1), n(-1), n(-1)]),
        irrep!("B1", [n(1), n(-1), n(1), n(-1), n(1), n(-1)]),
        irrep!("B2", [n(1), n(-1), n(1), n(-1), n(-1), n(1)]),
        irrep!("E1", [n(2), n(1), n(-1), n(-2), n(0), n(0)]),
        irrep!("E2", [n(2), n(-1), n(-1), n(2), n(0), n(0)]),
    ],
);

// ======================== D_nh / D_nd ========================

pub static D2H: PointGroup = point_group!(
    "d2h",
    [
        class!("E", 1, E),
        class!("C2(z)", 1, c(Z, 2, 1)),
        class!("C2(y)", 1, c(Y, 2, 1)),
        class!("C2(x)", 1, c(X, 2, 1)),
        class!("i", 1, I),
        class!("σ(xy)", 1, sigma(Z)),
        class!("σ(xz)", 1, sigma(Y)),
        class!("σ(yz)", 1, sigma(X)),
    ],
    [
        irrep!("Ag", [n(1), n(1), n(1), n(1), n(1), n(1), n(1), n(1)]),
        irrep!("B1g", [n(1), n(1), n(-1), n(-1), n(1), n(1), n(-1), n(-1)]),
        irrep!("B2g", [n(1), n(-1), n(1), n(-1), n(1), n(-1), n(1), n(-1)]),
        irrep!("B3g", [n(1), n(-1), n(-1), n(1), n(1), n(-1), n(-1), n(1)]),
        irrep!("Au", [n(1), n(1), n(1), n(1), n(-1), n(-1), n(-1), n(-1)]),
        irrep!("B1u", [n(1), n(1), n(-1), n(-1), n(-1), n(-1), n(1), n(1)]),
        irrep!("B2u", [n(1), n(-1), n(1), n(-1), n(-1), n(1), n(-1), n(1)]),
        irrep!("B3u", [n(1), n(-1), n(-1), n(1), n(-1), n(1), n(1), n(-1)]),
    ],
);

pub static D3H: PointGroup = point_group!(
    "d3h",
    [
        class!("E", 1, E),
        class!("C3", 2, c(Z, 3, 1)),
        class!("C2'", 3, c(X, 2, 1)),
        class!("σh", 1, sigma(Z)),
        class!("S3", 2, s(Z, 3, 1)),
        class!("σv", 3, sigma(Y)),
    ],
    [
        irrep!("A1'", [n(1), n(1), n(1), n(1), n(1), n(1)]),
        irrep!("A2'", [n(1), n(1), n(-1), n(1), n(1), n(-1)]),
        irrep!("E'", [n(2), n(-1), n(0), n(2), n(-1), n(0)]),
        irrep!("A1''", [n(1), n(1), n(1), n(-1), n(-1), n(-1)]),
        irrep!("A2''", [n(1), n(1), n(-1), n(-1), n(-1), n(1)]),
        irrep!("E''", [n(2), n(-1), n(0), n(-2), n(1), n(0)]),
    ],
);

pub static D3D: PointGroup = point_group!(
    "d3d",
    [
        class!("E", 1, E),
        class!("C3", 2, c(Z, 3, 1)),
        class!("C2'", 3, c(X, 2, 1)),
        class!("i", 1, I),
        class!("S6", 2, s(Z, 6, 1)),
        class!("σd", 3, sigma(X)),
    ],
    [
        irrep!("A1g", [n(1), n(1), n(1), n(1), n(1), n(1)]),
        irrep!("A2g", [n(1), n(1), n(-1), n(1), n(1), n(-1)]),
        irrep!("Eg", [n(2), n(-1), n(0), n(2), n(-1), n(0)]),
        irrep!("A1u", [n(1), n(1), n(1), n(-1), n(-1), n(-1)]),
        irrep!("A2u", [n(1), n(1), n(-1), n(-1), n(-1), n(1)]),
        irrep!("Eu", [n(2), n(-1), n(0), n(-2), n(1), n(0)]),
    ],
);

pub static D4H: PointGroup = point_group!(
    "d4h",
    [
        class!("E", 1, E),
        class!("C4", 2, c(Z, 4, 1)),
        class!("C2", 1, c(Z, 2, 1)),
        class!("C2'", 2, c(X, 2, 1)),
        class!("C2''", 2, c(XY_DIAGONAL, 2, 1)),
        class!("i", 1, I),
        class!("S4", 2, s(Z, 4, 1)),
        class!("σh", 1, sigma(Z)),
        class!("σv", 2, sigma(X)),
        class!("σd", 2, sigma(XY_ANTIDIAGONAL)),
    ],
    [
        irrep!("A1g", [n(1), n(1), n(1), n(1), n(1), n(1), n(1), n(1), n(1), n(1)]),
        irrep!("A2g", [n(1), n(1), n(1), n(-1), n(-1), n(1), n(1), n(1), n(-1), n(-1)]),
        irrep!("B1g", [n(1), n(-1), n(1), n(1), n(-1), n(1), n(-1), n(1), n(1), n(-1)]),
        irrep!("B2g", [n(1), n(-1), n(1), n(-1), n(1), n(1), n(-1), n(1), n(-1), n(1)]),
        irrep!("Eg", [n(2), n(0), n(-2), n(0), n(0), n(2), n(0), n(-2), n(0), n(0)]),
        irrep!("A1u", [n(1), n(1), n(1), n(1), n(1), n(-1), n(-1), n(-1), n(-1), n(-1)]),
        irrep!("A2u", [n(1), n(1), n(1), n(-1), n(-1), n(-1), n(-1), n(-1), n(1), n(1)]),
        irrep!("B1u", [n(1), n(-1), n(1), n(1), n(-1), n(-1), n(1), n(-1), n(-1), n(1)]),
        irrep!("B2u", [n(1), n(-1), n(1), n(-1), n(1), n(-1), n(1), n(-1), n(1), n(-1)]),
        irrep!("Eu", [n(2), n(0), n(-2), n(0), n(0), n(-2), n(0), n(2), n(0), n(0)]),
    ],
);

pub static D5H: PointGroup = point_group!(
    "d5h",
    [
        class!("E", 1, E),
        class!("C5", 2, c(Z, 5, 1)),
        class!("C5²", 2, c(Z, 5, 2)),
        class!("C2'", 5, c(X, 2, 1)),
        class!("σh", 1, sigma(Z)),
        class!("S5", 2, s(Z, 5, 1)),
        class!("S5³", 2, s(Z, 5, 3)),
        class!("σv", 5, sigma(Y)),
    ],
    [
        irrep!("A1'", [n(1), n(1), n(1), n(1), n(1), n(1), n(1), n(1)]),
        irrep!("A2'", [n(1), n(1), n(1), n(-1), n(1), n(1), n(1), n(-1)]),
        irrep!("E1'", [n(2), C72, C144, n(0), n(2), C72, C144, n(0)]),
        irrep!("E2'", [n(2), C144, C72, n(0), n(2), C144, C72, n(0)]),
        irrep!("A1''", [n(1), n(1), n(1), n(1), n(-1), n(-1), n(-1), n(-1)]),
        irrep!("A2''", [n(1), n(1), n(1), n(-1), n(-1), n(-1), n(-1), n(1)]),
        irrep!("E1''", [n(2), C72, C144, n(0), n(-2), PHI_BAR, PHI, n(0)]),
        irrep!("E2''", [n(2), C144, C72, n(0), n(-2), PHI, PHI_BAR, n(0)]),
    ],
);

// σv contains the C2′ axes (x); σd contains the C2″ axes
pub static D6H: PointGroup = point_group!(
    "d6h",
    [
        class!("E", 1, E),
        class!("C6", 2, c(Z, 6, 1)),
        class!("C3", 2, c(Z, 3, 1)),
        class!("C2", 1, c(Z, 2, 1)),
        class!("C2'", 3, c(X, 2, 1)),
        class!("C2''", 3, c(AT_30_DEGREES, 2, 1)),
        class!("i", 1, I),
        class!("S3", 2, s(Z, 3, 1)),
        class!("S6", 2, s(Z, 6, 1)),
        class!("σh", 1, sigma(Z)),
        class!("σd", 3, sigma(X)),
        class!("σv", 3, sigma(Y)),
    ],
    [
        irrep!("A1g", [n(1), n(1), n(1), n(1), n(1), n(1), n(1), n(1), n(1), n(1), n(1), n(1)]),
        irrep!("A2g", [n(1), n(1), n(1), n(1), n(-1), n(-1), n(1), n(1), n(1), n(1), n(-1), n(-1)]),
        irrep!("B1g", [n(1), n(-1), n(1), n(-1), n(1), n(-1), n(1), n(-1), n(1), n(-1), n(1), n(-1)]),
        irrep!("B2g", [n(1), n(-1), n(1), n(-1), n(-1), n(1), n(1), n(-1), n(1), n(-1), n(-1), n(1)]),
        irrep!("E1g", [n(2), n(1), n(-1), n(-2), n(0), n(0), n(2), n(1), n(-1), n(-2), n(0), n(0)]),
        irrep!("E2g", [n(2), n(-1), n(-1), n(2), n(0), n(0), n(2), n(-1), n(-1), n(2), n(0), n(0)]),
        irrep!("A1u", [n(1), n(1), n(1), n(1), n(1), n(1), n(-1), n(-1), n(-1), n(-1), n(-1), n(-1)]),
        irrep!("A2u", [n(1), n(1), n(1), n(1), n(-1), n(-1), n(-1), n(-1), n(-1), n(-1), n(1), n(1)]),
        irrep!("B1u", [n(1), n(-1), n(1), n(-1), n(1), n(-1), n(-1), n(1), n(-1), n(1), n(-1), n(1)]),
        irrep!("B2u", [n(1), n(-1), n(1), n(-1), n(-1), n(1), n(-1), n(1), n(-1), n(1), n(1), n(-1)]),
        irrep!("E1u", [n(2), n(1), n(-1), n(-2), n(0), n(0), n(-2), n(-1), n(1), n(2), n(0), n(0)]),
        irrep!("E2u", [n(2), n(-1), n(-1), n(2), n(0), n(0), n(-2), n(1), n(1), n(-2), n(0), n(0)]),
    ],
);

// ======================== CUBIC / ICOSAHEDRAL ========================

pub static TD: PointGroup = point_group!(
    "td",
    [
        class!("E", 1, E),
        class!("C3", 8, c(BODY_DIAGONAL, 3, 1)),
        class!("C2", 3, c(Z, 2, 1)),
        class!("S4", 6, s(Z, 4, 1)),
        class!("σd", 6, sigma(XY_ANTIDIAGONAL)),
    ],
    [
        irrep!("A1", [n(1), n(1), n(1), n(1), n(1)]),
        irrep!("A2", [n(1), n(1), n(1), n(-1), n(-1)]),
        irrep!("E", [n(2), n(-1), n(2), n(0), n(0)]),
        irrep!("T1", [n(3), n(0), n(-1), n(1), n(-1)]),
        irrep!("T2", [n(3), n(0), n(-1), n(-1), n(1)]),
    ],
);

pub static OH: PointGroup = point_group!(
    "oh",
    [
        class!("E", 1, E),
        class!("C3", 8, c(BODY_DIAGONAL, 3, 1)),
        class!("C2", 6, c(XY_DIAGONAL, 2, 1)),
        class!("C4", 6, c(Z, 4, 1)),
        class!("C2(=C4²)", 3, c(Z, 2, 1)),
        class!("i", 1, I),
        class!("S4", 6, s(Z, 4, 1)),
        class!("S6", 8, s(BODY_DIAGONAL, 6, 1)),
        class!("σh", 3, sigma(Z)),
        class!("σd", 6, sigma(XY_ANTIDIAGONAL)),
    ],
    [
        irrep!("A1g", [n(1), n(1), n(1), n(1), n(1), n(1), n(1), n(1), n(1), n(1)]),
        irrep!("A2g", [n(1), n(1), n(-1), n(-1), n(1), n(1), n(-1), n(1), n(1), n(-1)]),
        irrep!("Eg", [n(2), n(-1), n(0), n(0), n(2), n(2), n(0), n(-1), n(2), n(0)]),
        irrep!("T1g", [n(3), n(0), n(-1), n(1), n(-1), n(3), n(1), n(0), n(-1), n(-1)]),
        irrep!("T2g", [n(3), n(0), n(1), n(-1), n(-1), n(3), n(-1), n(0), n(-1), n(1)]),
        irrep!("A1u", [n(1), n(1), n(1), n(1), n(1), n(-1), n(-1), n(-1), n(-1), n(-1)]),
        irrep!("A2u", [n(1), n(1), n(-1), n(-1), n(1), n(-1), n(1), n(-1), n(-1), n(1)]),
        irrep!("Eu", [n(2), n(-1), n(0), n(0), n(2), n(-2), n(0), n(1), n(-2), n(0)]),
        irrep!("T1u", [n(3), n(0), n(-1), n(1), n(-1), n(-3), n(-1), n(0), n(1), n(1)]),
        irrep!("T2u", [n(3), n(0), n(1), n(-1), n(-1), n(-3), n(1), n(0), n(1), n(-1)]),
    ],
);

pub static IH: PointGroup = point_group!(
    "ih",
    [
        class!("E", 1, E),
        class!("C5", 12, c(ICOSAHEDRAL_VERTEX, 5, 1)),
        class!("C5²", 12, c(ICOSAHEDRAL_VERTEX, 5, 2)),
        class!("C3", 20, c(BODY_DIAGONAL, 3, 1)),
        class!("C2", 15, c(X, 2, 1)),
        class!("i", 1, I),
        class!("S10", 12, s(ICOSAHEDRAL_VERTEX, 10, 1)),
        class!("S10³", 12, s(ICOSAHEDRAL_VERTEX, 10, 3)),
        class!("S6", 20, s(BODY_DIAGONAL, 6, 1)),
        class!("σ", 15, sigma(X)),
    ],
    [
        irrep!("Ag", [n(1), n(1), n(1), n(1), n(1), n(1), n(1), n(1), n(1), n(1)]),
        irrep!("T1g", [n(3), PHI, PHI_BAR, n(0), n(-1), n(3), PHI_BAR, PHI, n(0), n(-1)]),
        irrep!("T2g", [n(3), PHI_BAR, PHI, n(0), n(-1), n(3), PHI, PHI_BAR, n(0), n(-1)]),
        irrep!("Gg", [n(4), n(-1), n(-1), n(1), n(0), n(4), n(-1), n(-1), n(1), n(0)]),
        irrep!("Hg", [n(5), n(0), n(0), n(-1), n(1), n(5), n(0), n(0), n(-1), n(1)]),
        irrep!("Au", [n(1), n(1), n(1), n(1), n(1), n(-1), n(-1), n(-1), n(-1), n(-1)]),
        irrep!("T1u", [n(3), PHI, PHI_BAR, n(0), n(-1), n(-3), C72, C144, n(0), n(1)]),
        irrep!("T2u", [n(3), PHI_BAR, PHI, n(0), n(-1), n(-3), C144, C72, n(0), n(1)]),
        irrep!("Gu", [n(4), n(-1), n(-1), n(1), n(0), n(-4), n(1), n(1), n(-1), n(0)]),
        irrep!("Hu", [n(5), n(0), n(0), n(-1), n(1), n(-5), n(0), n(0), n(1), n(-1)]),
    ],
);

/// Registry of every supported group, in listing order
pub static POINT_GROUPS: [&PointGroup; 19] = [
    &C1, &CS, &CI, &C2, &C2H, &C2V, &C3V, &C4V, &C5V, &C6V, &D2H, &D3H, &D3D, &D4H, &D5H,
    &D6H, &TD, &OH, &IH,
];
