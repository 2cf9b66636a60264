//! Property-based tests for the translation pipeline.

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use crate::error::Error;
    use crate::mapper::ParamMapper;
    use crate::nodes::QueryNode;
    use crate::params::QueryParams;
    use crate::suffix::{SuffixKind, classify};
    use paramsearch_core::{FieldDescriptor, SchemaRegistry, SemanticType};
    use proptest::prelude::*;

    fn mapper() -> ParamMapper {
        let registry = SchemaRegistry::from_fields(vec![
            FieldDescriptor::new("label", SemanticType::Keyword, false),
            FieldDescriptor::new("coins", SemanticType::Number, false),
        ])
        .unwrap();
        ParamMapper::new(registry)
    }

    proptest! {
        #[test]
        fn test_classify_appended_suffix(base in "[a-zA-Z]{1,12}", idx in 0usize..3, upper in any::<bool>()) {
            let (suffix, kind) = [("From", SuffixKind::From), ("To", SuffixKind::To), ("Match", SuffixKind::Match)][idx];
            let suffix = if upper { suffix.to_uppercase() } else { suffix.to_string() };
            let raw = format!("{base}{suffix}");
            let (found, stripped) = classify(&raw);
            prop_assert_eq!(found, kind);
            prop_assert_eq!(stripped, base.as_str());
        }

        #[test]
        fn test_classify_without_suffix_is_identity(raw in "[a-zA-Z]{0,12}x") {
            let (kind, base) = classify(&raw);
            prop_assert_eq!(kind, SuffixKind::None);
            prop_assert_eq!(base, raw.as_str());
        }

        #[test]
        fn test_terms_preserve_order_and_duplicates(values in prop::collection::vec("[a-z]{1,6}", 2..8)) {
            let params = QueryParams::from([("label", values.clone())]);
            let query = mapper().convert(&params).unwrap();
            let QueryNode::Terms(terms) = &query.clauses()[0] else {
                unreachable!("Expected terms query");
            };
            prop_assert_eq!(&terms.field, "label.keyword");
            prop_assert_eq!(&terms.values, &values);
        }

        #[test]
        fn test_three_parameters_on_one_field_always_duplicate(
            names in Just(vec!["coins", "coinsFrom", "coinsTo", "coinsMatch", "coinsFROM"])
                .prop_shuffle()
        ) {
            let params = QueryParams::from([
                (names[0], vec!["1"]),
                (names[1], vec!["2"]),
                (names[2], vec!["3"]),
            ]);
            let err = mapper().convert(&params).unwrap_err();
            let is_duplicate = matches!(err, Error::DuplicateProperty { count: 3, .. });
            prop_assert!(is_duplicate);
        }

        #[test]
        fn test_finite_numbers_coerce(lower in -1.0e9f64..1.0e9, upper in -1.0e9f64..1.0e9) {
            let params = QueryParams::from([
                ("coinsFrom", vec![lower.to_string()]),
                ("coinsTo", vec![upper.to_string()]),
            ]);
            let query = mapper().convert(&params).unwrap();
            prop_assert_eq!(query.len(), 1);
            prop_assert_eq!(query.clauses()[0].query_type(), "range");
        }
    }
}
