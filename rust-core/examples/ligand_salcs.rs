/// Example computing SALCs for a few classic ligand arrangements
///
/// Covers σ orbitals given as vectors and as angles, and an oriented pπ basis
/// where the lobe direction decides the sign of each image.
use nalgebra::Vector3;
use salc::interfaces::GeometryMode;
use salc::salcs::{angles_to_vectors, calc_salcs, calc_salcs_for, BasisArrangement};
use salc::algebra::Symbol;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("=== SALCs of common ligand sets ===\n");

    // Example 1: square planar σ orbitals
    println!("1. Square planar (d4h):");
    let square = [[1.0, 0.0, 0.0], [0.0, 1.0, 0.0], [-1.0, 0.0, 0.0], [0.0, -1.0, 0.0]];
    for result in calc_salcs(&square, "d4h", &["a", "b", "c", "d"], GeometryMode::Vector)? {
        println!("   {}", result);
    }

    // Example 2: trigonal bipyramid from polar angles, two orbits
    println!("\n2. Trigonal bipyramid (d3h):");
    let angles = [[0.0, 90.0], [120.0, 90.0], [240.0, 90.0], [0.0, 0.0], [0.0, 180.0]];
    for result in calc_salcs(&angles, "d3h", &["e1", "e2", "e3", "a1", "a2"], GeometryMode::Angle)? {
        println!("   {}", result);
    }

    // Example 3: benzene pπ orbitals, lobes along z
    println!("\n3. Benzene pπ (d6h):");
    let ring = angles_to_vectors(&[(0.0, 90.0), (60.0, 90.0), (120.0, 90.0), (180.0, 90.0), (240.0, 90.0), (300.0, 90.0)]);
    let symbols: Vec<Symbol> = ["a", "b", "c", "d", "e", "f"].iter().map(|&s| Symbol::from(s)).collect();
    let benzene = BasisArrangement::radial(ring, symbols)?.with_lobes(&[Vector3::z(); 6])?;
    for result in calc_salcs_for(&benzene, "d6h")? {
        if !result.salc.is_zero() {
            println!("   {}", result);
        }
    }

    // Example 4: JSON output
    println!("\n4. Octahedron (oh) as JSON:");
    let octahedron = [
        [1.0, 0.0, 0.0],
        [0.0, 1.0, 0.0],
        [-1.0, 0.0, 0.0],
        [0.0, -1.0, 0.0],
        [0.0, 0.0, 1.0],
        [0.0, 0.0, -1.0],
    ];
    let results = calc_salcs(&octahedron, "oh", &["a", "b", "c", "d", "e", "f"], GeometryMode::Vector)?;
    println!("{}", serde_json::to_string_pretty(&results)?);

    Ok(())
}
