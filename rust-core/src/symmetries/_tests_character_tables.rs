#[cfg(test)]
mod _tests_character_tables {
    use super::super::character_tables::POINT_GROUPS;
    use super::super::point_groups::lookup;
    use crate::config::OPERATION_TOLERANCE;

    #[test]
    fn test_every_table_is_consistent() {
        for group in POINT_GROUPS.iter() {
            group
                .validate()
                .unwrap_or_else(|e| panic!("{}: {}", group.name(), e));
        }
    }

    #[test]
    fn test_class_sizes_sum_to_order() {
        let expected_orders = [
            ("c1", 1),
            ("cs", 2),
            ("ci", 2),
            ("c2", 2),
            ("c2h", 4),
            ("c2v", 4),
            ("c3v", 6),
            ("c4v", 8),
            ("c5v", 10),
            ("c6v", 12),
            ("d2h", 8),
            ("d3h", 12),
            ("d3d", 12),
            ("d4h", 16),
            ("d5h", 20),
            ("d6h", 24),
            ("td", 24),
            ("oh", 48),
            ("ih", 120),
        ];
        assert_eq!(expected_orders.len(), POINT_GROUPS.len());
        for (name, order) in expected_orders {
            let group = lookup(name).unwrap();
            assert_eq!(group.class_sizes().iter().sum::<usize>(), order, "{}", name);
            assert_eq!(group.order(), order, "{}", name);
        }
    }

    #[test]
    fn test_identity_character_is_dimension() {
        for group in POINT_GROUPS.iter() {
            for irrep in group.irreps() {
                let chi_e = irrep.characters[0].to_integer().unwrap();
                assert_eq!(chi_e as usize, irrep.dimension());
                assert!(irrep.dimension() >= 1);
            }
        }
    }

    #[test]
    fn test_operations_close_under_composition() {
        for group in POINT_GROUPS.iter() {
            let ops = group.operations().unwrap();
            assert_eq!(ops.len(), group.order(), "{}", group.name());
            assert!(ops[0].is_identity(OPERATION_TOLERANCE));
            for a in ops {
                for b in ops {
                    let product = a.compose(b);
                    assert!(
                        ops.iter().any(|o| o.approx_eq(&product, 1e-6)),
                        "{} is not closed",
                        group.name()
                    );
                }
            }
        }
    }

    #[test]
    fn test_characters_match_cartesian_representation() {
        // Trace of the operation matrix is the character of (x, y, z); it must
        // decompose into irreps with non-negative integer multiplicities.
        for group in POINT_GROUPS.iter() {
            let ops = group.operations().unwrap();
            let h = group.order() as f64;
            for irrep in group.irreps() {
                let chi: Vec<f64> = group.expand_irrep(irrep).iter().map(|c| c.to_f64()).collect();
                let multiplicity: f64 =
                    ops.iter().zip(&chi).map(|(op, c)| op.trace() * c).sum::<f64>() / h;
                assert!(
                    (multiplicity - multiplicity.round()).abs() < 1e-9 && multiplicity > -1e-9,
                    "{} {}: multiplicity {}",
                    group.name(),
                    irrep.label,
                    multiplicity
                );
            }
        }
    }

    #[test]
    fn test_vector_irreps_of_common_groups() {
        // (x, y, z) spans T1u in Oh and Ih, T2 in Td, E' + A2'' in D3h
        let cases: [(&str, &[&str]); 4] = [
            ("oh", &["T1u"]),
            ("ih", &["T1u"]),
            ("td", &["T2"]),
            ("d3h", &["E'", "A2''"]),
        ];
        for (name, expected) in cases {
            let group = lookup(name).unwrap();
            let ops = group.operations().unwrap();
            let h = group.order() as f64;
            let spanned: Vec<&str> = group
                .irreps()
                .iter()
                .filter(|irrep| {
                    let chi = group.expand_irrep(irrep);
                    let m: f64 = ops.iter().zip(&chi).map(|(op, c)| op.trace() * c.to_f64()).sum::<f64>() / h;
                    m.round() > 0.0
                })
                .map(|irrep| irrep.label)
                .collect();
            assert_eq!(spanned, expected, "{}", name);
        }
    }
}
