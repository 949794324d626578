#[cfg(test)]
mod _tests_orchestrator {
    use super::super::geometric_mapper::angles_to_vectors;
    use super::super::orchestrator::{calc_salcs, calc_salcs_for, BasisArrangement};
    use super::super::salc_result::{IrrepSalc, Salc};
    use crate::algebra::{LinearCombination, Symbol};
    use crate::error::SalcError;
    use crate::interfaces::GeometryMode;
    use nalgebra::Vector3;

    fn lc(expression: &str) -> LinearCombination {
        expression.parse().unwrap()
    }

    fn rendered(results: &[IrrepSalc]) -> Vec<String> {
        results.iter().map(|r| r.salc.to_string()).collect()
    }

    fn symbols(names: &[&str]) -> Vec<Symbol> {
        names.iter().map(|&n| Symbol::from(n)).collect()
    }

    const OCTAHEDRON_ANGLES: [[f64; 2]; 6] = [[0.0, 90.0], [90.0, 90.0], [180.0, 90.0], [270.0, 90.0], [0.0, 0.0], [0.0, -180.0]];

    #[test]
    fn test_square_planar() {
        let square = [[1.0, 0.0, 0.0], [0.0, 1.0, 0.0], [-1.0, 0.0, 0.0], [0.0, -1.0, 0.0]];
        let results = calc_salcs(&square, "d4h", &["a", "b", "c", "d"], GeometryMode::Vector).unwrap();
        assert_eq!(
            rendered(&results),
            vec!["a + b + c + d", "0", "a - b + c - d", "0", "0", "0", "0", "0", "0", "[a - c, b - d]"]
        );
        assert_eq!(results[9].irrep, "Eu");
    }

    #[test]
    fn test_trigonal_bipyramid() {
        let angles = [[0.0, 90.0], [120.0, 90.0], [240.0, 90.0], [0.0, 0.0], [0.0, 180.0]];
        let results = calc_salcs(&angles, "d3h", &["e1", "e2", "e3", "a1", "a2"], GeometryMode::Angle).unwrap();
        assert_eq!(
            results[0].salc,
            Salc::Components(vec![lc("e1 + e2 + e3"), lc("a1 + a2")])
        );
        assert!(results[1].salc.is_zero());
        assert_eq!(
            results[2].salc,
            Salc::Components(vec![lc("e1 - e2/2 - e3/2"), lc("-e1/2 + e2 - e3/2")])
        );
        assert!(results[3].salc.is_zero());
        assert_eq!(results[4].salc, Salc::Single(lc("a1 - a2")));
        assert!(results[5].salc.is_zero());
    }

    #[test]
    fn test_orbits_never_mix_symbols() {
        let angles = [[0.0, 90.0], [120.0, 90.0], [240.0, 90.0], [0.0, 0.0], [0.0, 180.0]];
        let results = calc_salcs(&angles, "d3h", &["e1", "e2", "e3", "a1", "a2"], GeometryMode::Angle).unwrap();
        let equatorial = symbols(&["e1", "e2", "e3"]);
        for result in &results {
            for combination in result.salc.combinations() {
                let in_equator = combination.symbols().filter(|s| equatorial.contains(s)).count();
                assert!(in_equator == 0 || in_equator == combination.len(), "{}", combination);
            }
        }
    }

    #[test]
    fn test_seesaw() {
        let angles = [[0.0, 90.0], [-180.0, 90.0], [90.0, 120.0], [-90.0, 120.0]];
        let results = calc_salcs(&angles, "c2v", &["a1", "a2", "e1", "e2"], GeometryMode::Angle).unwrap();
        assert_eq!(rendered(&results), vec!["[a1 + a2, e1 + e2]", "0", "a1 - a2", "e1 - e2"]);
    }

    #[test]
    fn test_octahedral_angles_and_vectors_agree() {
        let vectors = [
            [1.0, 0.0, 0.0],
            [0.0, 1.0, 0.0],
            [-1.0, 0.0, 0.0],
            [0.0, -1.0, 0.0],
            [0.0, 0.0, 1.0],
            [0.0, 0.0, -1.0],
        ];
        let names = ["a", "b", "c", "d", "e", "f"];
        let from_angles = calc_salcs(&OCTAHEDRON_ANGLES, "oh", &names, GeometryMode::Angle).unwrap();
        let from_vectors = calc_salcs(&vectors, "oh", &names, GeometryMode::Vector).unwrap();
        assert_eq!(from_angles, from_vectors);

        assert_eq!(
            rendered(&from_vectors),
            vec![
                "a + b + c + d + e + f",
                "0",
                "[a - b/2 + c - d/2 - e/2 - f/2, -a/2 + b - c/2 + d - e/2 - f/2]",
                "0",
                "0",
                "0",
                "0",
                "0",
                "[a - c, b - d, e - f]",
                "0",
            ]
        );
    }

    #[test]
    fn test_dimension_count_matches_basis_size() {
        let results = calc_salcs(&OCTAHEDRON_ANGLES, "oh", &["a", "b", "c", "d", "e", "f"], GeometryMode::Angle).unwrap();
        let total: usize = results.iter().map(|r| r.salc.len()).sum();
        assert_eq!(total, 6);
    }

    #[test]
    fn test_icosahedron() {
        let phi = (1.0 + 5f64.sqrt()) / 2.0;
        let mut vertices = Vec::new();
        for s1 in [1.0, -1.0] {
            for s2 in [1.0, -1.0] {
                vertices.push([0.0, s1, s2 * phi]);
                vertices.push([s1, s2 * phi, 0.0]);
                vertices.push([s2 * phi, 0.0, s1]);
            }
        }
        let names: Vec<String> = (0..12).map(|i| format!("v{}", i)).collect();
        let results = calc_salcs(&vertices, "ih", &names, GeometryMode::Vector).unwrap();

        let counts: Vec<(&str, usize)> = results.iter().map(|r| (r.irrep, r.salc.len())).collect();
        assert_eq!(
            counts,
            vec![
                ("Ag", 1),
                ("T1g", 0),
                ("T2g", 0),
                ("Gg", 0),
                ("Hg", 5),
                ("Au", 0),
                ("T1u", 3),
                ("T2u", 3),
                ("Gu", 0),
                ("Hu", 0),
            ]
        );
        assert_eq!(results[0].salc.combinations()[0].len(), 12);
    }

    #[test]
    fn test_benzene_p_pi() {
        let positions = angles_to_vectors(&[(0.0, 90.0), (60.0, 90.0), (120.0, 90.0), (180.0, 90.0), (240.0, 90.0), (300.0, 90.0)]);
        let lobes = vec![Vector3::new(0.0, 0.0, 1.0); 6];
        let arrangement = BasisArrangement::radial(positions, symbols(&["a", "b", "c", "d", "e", "f"]))
            .unwrap()
            .with_lobes(&lobes)
            .unwrap();

        let results = calc_salcs_for(&arrangement, "d6h").unwrap();
        assert_eq!(
            rendered(&results),
            vec![
                "0",
                "0",
                "0",
                "a - b + c - d + e - f",
                "[a + b/2 - c/2 - d - e/2 + f/2, a/2 + b + c/2 - d/2 - e - f/2]",
                "0",
                "0",
                "a + b + c + d + e + f",
                "0",
                "0",
                "0",
                "[a - b/2 - c/2 + d - e/2 - f/2, -a/2 + b - c/2 - d/2 + e - f/2]",
            ]
        );
    }

    #[test]
    fn test_axial_pz_pair() {
        // Both lobes along +z: inversion sends p onto -q
        let positions = vec![Vector3::new(0.0, 0.0, 1.0), Vector3::new(0.0, 0.0, -1.0)];
        let up = Vector3::new(0.0, 0.0, 1.0);
        let arrangement = BasisArrangement::radial(positions, symbols(&["p", "q"]))
            .unwrap()
            .with_lobes(&[up, up])
            .unwrap();
        let results = calc_salcs_for(&arrangement, "d4h").unwrap();
        for result in &results {
            match result.irrep {
                "A1g" => assert_eq!(result.salc, Salc::Single(lc("p - q"))),
                "A2u" => assert_eq!(result.salc, Salc::Single(lc("p + q"))),
                _ => assert!(result.salc.is_zero(), "{}", result),
            }
        }
    }

    #[test]
    fn test_radial_pair_is_even_under_inversion() {
        let positions = vec![Vector3::new(0.0, 0.0, 1.0), Vector3::new(0.0, 0.0, -1.0)];
        let arrangement = BasisArrangement::radial(positions, symbols(&["p", "q"])).unwrap();
        let results = calc_salcs_for(&arrangement, "d4h").unwrap();
        let nonzero: Vec<String> = results
            .iter()
            .filter(|r| !r.salc.is_zero())
            .map(|r| r.to_string())
            .collect();
        assert_eq!(nonzero, vec!["A1g: p + q", "A2u: p - q"]);
    }

    #[test]
    fn test_geometry_not_closed_under_group() {
        let three = [[1.0, 0.0, 0.0], [0.0, 1.0, 0.0], [-1.0, 0.0, 0.0]];
        let err = calc_salcs(&three, "d4h", &["a", "b", "c"], GeometryMode::Vector).unwrap_err();
        assert!(matches!(err, SalcError::GeometricInconsistency { .. }));
    }

    #[test]
    fn test_input_validation() {
        let square = [[1.0, 0.0, 0.0], [0.0, 1.0, 0.0], [-1.0, 0.0, 0.0], [0.0, -1.0, 0.0]];
        assert!(matches!(
            calc_salcs(&square, "d4h", &["a", "b", "c"], GeometryMode::Vector),
            Err(SalcError::DimensionMismatch { expected: 4, actual: 3, .. })
        ));
        assert!(matches!(
            calc_salcs(&square, "d4h", &["a", "b", "c", "d"], GeometryMode::Angle),
            Err(SalcError::DimensionMismatch { expected: 2, actual: 3, .. })
        ));
        assert!(matches!(
            calc_salcs(&square, "d7h", &["a", "b", "c", "d"], GeometryMode::Vector),
            Err(SalcError::UnknownGroup { .. })
        ));
        assert!(matches!(
            "spherical".parse::<GeometryMode>(),
            Err(SalcError::UnsupportedMode { .. })
        ));
    }

    #[test]
    fn test_lobe_count_must_match() {
        let arrangement = BasisArrangement::radial(vec![Vector3::new(0.0, 0.0, 1.0)], symbols(&["p"])).unwrap();
        assert!(matches!(
            arrangement.with_lobes(&[]),
            Err(SalcError::DimensionMismatch { expected: 1, actual: 0, .. })
        ));
    }

    #[test]
    fn test_repeated_symbol_is_rejected() {
        let pair = [[0.0, 0.0, 1.0], [0.0, 0.0, -1.0]];
        let err = calc_salcs(&pair, "d4h", &["a", "a"], GeometryMode::Vector).unwrap_err();
        assert!(matches!(err, SalcError::InvalidSymbol { index: 1, .. }), "{}", err);
    }

    #[test]
    fn test_malformed_symbols_are_rejected() {
        let pair = [[0.0, 0.0, 1.0], [0.0, 0.0, -1.0]];
        for names in [["", ""], ["1+x", "y"], ["x", "a b"]] {
            let err = calc_salcs(&pair, "d4h", &names, GeometryMode::Vector).unwrap_err();
            assert!(matches!(err, SalcError::InvalidSymbol { .. }), "{:?}: {}", names, err);
        }
        let positions = vec![Vector3::new(0.0, 0.0, 1.0)];
        assert!(BasisArrangement::radial(positions, symbols(&["p'"])).is_ok());
    }
}
