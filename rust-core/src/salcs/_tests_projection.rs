#[cfg(test)]
mod _tests_projection {
    use super::super::geometric_mapper::{angles_to_vectors, build_orbit_permutation, BasisFunction};
    use super::super::projection::{project, project_components, reduce};
    use super::super::salc_result::{IrrepSalc, Salc};
    use crate::algebra::{ExactReal, LinearCombination, Symbol};
    use crate::error::SalcError;
    use crate::symmetries::lookup;

    fn lc(expression: &str) -> LinearCombination {
        expression.parse().unwrap()
    }

    fn transformed(images: &[&str]) -> Vec<LinearCombination> {
        images.iter().map(|s| lc(s)).collect()
    }

    fn rendered(expected_len: usize, results: &[IrrepSalc]) -> Vec<String> {
        assert_eq!(results.len(), expected_len);
        results.iter().map(|r| r.salc.to_string()).collect()
    }

    #[test]
    fn test_ammonia_hydrogens() {
        let results = project(&transformed(&["a", "b", "c", "a", "b", "c"]), "c3v").unwrap();
        assert_eq!(rendered(3, &results), vec!["a + b + c", "0", "a - b/2 - c/2"]);
        assert_eq!(results[2].irrep, "E");
    }

    #[test]
    fn test_trigonal_bipyramid_equatorial_pz() {
        let images = transformed(&["e1", "e2", "e3", "-e1", "-e2", "-e3", "-e1", "-e2", "-e3", "e1", "e2", "e3"]);
        let results = project(&images, "d3h").unwrap();
        assert_eq!(rendered(6, &results), vec!["0", "0", "0", "0", "e1 + e2 + e3", "e1 - e2/2 - e3/2"]);
    }

    #[test]
    fn test_trigonal_bipyramid_axial_pz() {
        let images = transformed(&["a1", "a1", "a1", "-a2", "-a2", "-a2", "-a2", "-a2", "-a2", "a1", "a1", "a1"]);
        let results = project(&images, "d3h").unwrap();
        assert_eq!(rendered(6, &results), vec!["a1 - a2", "0", "0", "0", "a1 + a2", "0"]);
    }

    #[test]
    fn test_square_planar_s_orbitals() {
        let images = transformed(&["a", "b", "d", "c", "c", "a", "d", "b", "c", "b", "d", "a", "c", "a", "d", "b"]);
        let results = project(&images, "d4h").unwrap();
        assert_eq!(
            rendered(10, &results),
            vec!["a + b + c + d", "0", "a - b + c - d", "0", "0", "0", "0", "0", "0", "a - c"]
        );
    }

    #[test]
    fn test_benzene_p_orbitals() {
        let images = transformed(&[
            "a", "b", "f", "c", "e", "d", "-a", "-c", "-e", "-b", "-d", "-f", "-d", "-c", "-e", "-b", "-f", "-a", "b", "d",
            "f", "a", "c", "e",
        ]);
        let results = project(&images, "d6h").unwrap();
        assert_eq!(
            rendered(12, &results),
            vec![
                "0",
                "0",
                "0",
                "a - b + c - d + e - f",
                "a + b/2 - c/2 - d - e/2 + f/2",
                "0",
                "0",
                "a + b + c + d + e + f",
                "0",
                "0",
                "0",
                "a - b/2 - c/2 + d - e/2 - f/2",
            ]
        );
    }

    #[test]
    fn test_butadiene_inequivalent_orbitals() {
        let outer = project(&transformed(&["a", "-d", "-a", "d"]), "c2v").unwrap();
        assert_eq!(rendered(4, &outer), vec!["0", "a - d", "0", "a + d"]);
        let inner = project(&transformed(&["b", "-c", "-b", "c"]), "c2v").unwrap();
        assert_eq!(rendered(4, &inner), vec!["0", "b - c", "0", "b + c"]);
    }

    #[test]
    fn test_invariant_vector_projects_onto_totally_symmetric_only() {
        let oh = lookup("oh").unwrap();
        let images = vec![LinearCombination::symbol("s"); oh.order()];
        let results = project(&images, "oh").unwrap();
        assert_eq!(results[0].salc, Salc::Single(lc("s")));
        assert!(results[1..].iter().all(|r| r.salc.is_zero()));
    }

    #[test]
    fn test_invariant_vector_keeps_its_scale() {
        let results = project(&vec![lc("2*a"); 6], "c3v").unwrap();
        assert_eq!(results[0].salc, Salc::Single(lc("2*a")));
        assert!(results[1..].iter().all(|r| r.salc.is_zero()));

        let results = project(&vec![lc("3*x/2 - y"); 8], "d2h").unwrap();
        assert_eq!(results[0].salc.to_string(), "3*x/2 - y");
    }

    #[test]
    fn test_inversion_odd_vector_vanishes_on_gerade_irreps() {
        // s is invariant under proper operations and flips under improper ones
        let oh = lookup("oh").unwrap();
        let images: Vec<LinearCombination> = oh
            .operations()
            .unwrap()
            .iter()
            .map(|op| LinearCombination::term("s", if op.is_proper() { 1 } else { -1 }))
            .collect();
        let inversion_class = oh.classes().iter().position(|c| c.label == "i").unwrap();

        let results = project(&images, "oh").unwrap();
        for (irrep, result) in oh.irreps().iter().zip(&results) {
            if irrep.characters[inversion_class].is_one() {
                assert!(result.salc.is_zero(), "{}", result);
            }
        }
        assert_eq!(results[5].irrep, "A1u");
        assert_eq!(results[5].salc, Salc::Single(lc("s")));
    }

    #[test]
    fn test_reduce_keeps_projection_scale() {
        let c3v = lookup("c3v").unwrap();
        let e = c3v.irrep("E").unwrap();
        let reduced = reduce(&transformed(&["a", "b", "c", "a", "b", "c"]), c3v, e).unwrap();
        // 2/6 · (2a - b - c + 0)
        assert_eq!(reduced, lc("2*a/3 - b/3 - c/3"));
    }

    #[test]
    fn test_reduce_is_idempotent_on_its_image() {
        // Projecting an A1 result again changes nothing
        let c2v = lookup("c2v").unwrap();
        let a1 = c2v.irrep("A1").unwrap();
        let images = transformed(&["x", "y", "y", "x"]);
        let once = reduce(&images, c2v, a1).unwrap();
        assert_eq!(once, lc("x/2 + y/2"));
        let twice = reduce(&vec![once.clone(); 4], c2v, a1).unwrap();
        assert_eq!(twice, once);
    }

    #[test]
    fn test_wrong_length_is_rejected() {
        let err = project(&transformed(&["a", "b", "c"]), "c3v").unwrap_err();
        assert!(matches!(err, SalcError::DimensionMismatch { expected: 6, actual: 3, .. }));
        assert!(matches!(project(&transformed(&["a"]), "d9h"), Err(SalcError::UnknownGroup { .. })));
    }

    #[test]
    fn test_components_from_every_orbit_member() {
        let c3v = lookup("c3v").unwrap();
        let orbit = vec![
            transformed(&["a", "b", "c", "a", "b", "c"]),
            transformed(&["b", "c", "a", "c", "a", "b"]),
            transformed(&["c", "a", "b", "b", "c", "a"]),
        ];
        let results = project_components(&orbit, c3v).unwrap();
        assert_eq!(results[0].salc, Salc::Single(lc("a + b + c")));
        assert!(results[1].salc.is_zero());
        assert_eq!(
            results[2].salc,
            Salc::Components(vec![lc("a - b/2 - c/2"), lc("-a/2 + b - c/2")])
        );
    }

    #[test]
    fn test_golden_ratio_coefficients_stay_exact() {
        // Regular pentagon in c5v, vertex a on the x axis
        let c5v = lookup("c5v").unwrap();
        let positions = angles_to_vectors(&[
            (0.0, 90.0),
            (72.0, 90.0),
            (144.0, 90.0),
            (216.0, 90.0),
            (288.0, 90.0),
        ]);
        let functions: Vec<BasisFunction> = positions.into_iter().map(BasisFunction::radial).collect();
        let map = build_orbit_permutation(&functions, c5v.operations().unwrap()).unwrap();
        let symbols: Vec<Symbol> = ["a", "b", "c", "d", "e"].iter().map(|&s| Symbol::from(s)).collect();
        let images = map.transformed_basis(0, &symbols).unwrap();

        let results = project(&images, "c5v").unwrap();
        let e1 = results[2].salc.combinations()[0].clone();
        let cos72 = ExactReal::new(-1, 4, 1, 4);
        let cos144 = ExactReal::new(-1, 4, -1, 4);
        assert_eq!(results[2].irrep, "E1");
        assert!(e1.coefficient(&"a".into()).is_one());
        assert_eq!(e1.coefficient(&"b".into()), cos72);
        assert_eq!(e1.coefficient(&"e".into()), cos72);
        assert_eq!(e1.coefficient(&"c".into()), cos144);
        assert_eq!(e1.coefficient(&"d".into()), cos144);
    }
}
