// Constants

// Tolerances
pub const GEOMETRY_TOLERANCE: f64 = 1e-6; // Matching transformed basis positions and lobes (absolute, per component)
pub const OPERATION_TOLERANCE: f64 = 1e-9; // Matrix equality while expanding conjugacy classes
