//! Expand tests against the analysis definition catalog

use std::collections::BTreeMap;
use std::sync::Arc;

use analysis_definition_sdk::catalog::Catalog;
use analysis_definition_sdk::convert::{
    ConversionConfig, Converter, MalformedScalarPolicy, VariantPolicy,
};
use analysis_definition_sdk::error::ExpandErrorKind;
use analysis_definition_sdk::models::{ConfigValue, DomainValue, Leaf};
use analysis_definition_sdk::expand;
use analysis_definition_sdk::schema::builder::{nullable_int, string};
use analysis_definition_sdk::schema::{OneOfBuilder, SchemaNode, StructBuilder};

fn node(name: &str) -> &'static Arc<SchemaNode> {
    Catalog::global()
        .node(name)
        .unwrap_or_else(|| panic!("{} not in catalog", name))
}

fn column(name: &str) -> ConfigValue {
    ConfigValue::block()
        .with("column_name", ConfigValue::string(name))
        .with("data_set_identifier", ConfigValue::string("sales"))
}

fn grid_element(row_index: &str) -> ConfigValue {
    ConfigValue::block()
        .with("column_span", ConfigValue::int(12))
        .with("element_id", ConfigValue::string("e1"))
        .with("element_type", ConfigValue::string("VISUAL"))
        .with("row_span", ConfigValue::int(6))
        .with("row_index", ConfigValue::string(row_index))
}

fn numeric_range_filter() -> ConfigValue {
    ConfigValue::block()
        .with_single("column", column("revenue"))
        .with("filter_id", ConfigValue::string("f1"))
        .with("null_option", ConfigValue::string("NON_NULLS_ONLY"))
        .with("include_maximum", ConfigValue::bool(true))
        .with_single(
            "range_maximum",
            ConfigValue::block()
                .with("parameter", ConfigValue::string(""))
                .with("static_value", ConfigValue::float(100.0)),
        )
}

fn category_filter() -> ConfigValue {
    ConfigValue::block()
        .with_single("column", column("region"))
        .with("filter_id", ConfigValue::string("f2"))
        .with_single(
            "configuration",
            ConfigValue::block().with_single(
                "filter_list_configuration",
                ConfigValue::block()
                    .with("match_operator", ConfigValue::string("EQUALS"))
                    .with(
                        "category_values",
                        ConfigValue::OrderedList(vec![ConfigValue::string("EMEA")]),
                    ),
            ),
        )
}

fn filter_group(filters: Vec<ConfigValue>) -> ConfigValue {
    ConfigValue::block()
        .with("cross_dataset", ConfigValue::string("SINGLE_DATASET"))
        .with("filter_group_id", ConfigValue::string("g1"))
        .with("filters", ConfigValue::OrderedList(filters))
        .with_single(
            "scope_configuration",
            ConfigValue::block().with_single("all_sheets", ConfigValue::block()),
        )
}

mod nullable_int_tests {
    use super::*;

    #[test]
    fn test_row_index_sentinels_are_absent() {
        for sentinel in ["", "null"] {
            let value = expand(&grid_element(sentinel), node("GridLayoutElement")).unwrap();
            assert!(value.get("row_index").is_none());
            assert_eq!(value.get("element_id"), Some(&DomainValue::string("e1")));
        }
    }

    #[test]
    fn test_row_index_value() {
        let value = expand(&grid_element("5"), node("GridLayoutElement")).unwrap();
        assert_eq!(value.get("row_index"), Some(&DomainValue::integer(5)));
    }

    #[test]
    fn test_row_index_malformed() {
        let err = expand(&grid_element("abc"), node("GridLayoutElement")).unwrap_err();
        assert_eq!(err.path.to_string(), "row_index");
        assert!(matches!(err.kind, ExpandErrorKind::MalformedScalar { .. }));
    }

    #[test]
    fn test_row_index_malformed_lenient() {
        let converter = Converter::with_config(
            ConversionConfig::builder()
                .malformed_scalar_policy(MalformedScalarPolicy::Lenient)
                .build(),
        );
        let value = converter
            .expand(&grid_element("abc"), node("GridLayoutElement"))
            .unwrap();
        assert!(value.get("row_index").is_none());
        assert_eq!(value.get("row_span"), Some(&DomainValue::integer(6)));
    }
}

mod oneof_tests {
    use super::*;

    #[test]
    fn test_single_populated_candidate() {
        let tree = ConfigValue::block()
            .with("category_filter", ConfigValue::OrderedList(vec![]))
            .with_single("numeric_range_filter", numeric_range_filter())
            .with("time_range_filter", ConfigValue::OrderedList(vec![]));

        let value = expand(&tree, node("Filter")).unwrap();
        let (tag, payload) = value.as_variant().unwrap();
        assert_eq!(tag, "numeric_range_filter");
        assert_eq!(payload.get("filter_id"), Some(&DomainValue::string("f1")));
        assert_eq!(
            payload.get("range_maximum"),
            Some(&DomainValue::variant("static_value", DomainValue::float(100.0)))
        );
        assert!(payload.get("range_minimum").is_none());
    }

    #[test]
    fn test_ambiguous_candidates() {
        let tree = ConfigValue::block()
            .with_single("category_filter", category_filter())
            .with_single("numeric_range_filter", numeric_range_filter());

        let err = expand(&tree, node("Filter")).unwrap_err();
        assert!(err.path.is_root());
        assert_eq!(
            err.kind,
            ExpandErrorKind::AmbiguousVariant {
                populated: vec![
                    "category_filter".to_string(),
                    "numeric_range_filter".to_string()
                ]
            }
        );
    }

    #[test]
    fn test_first_match_policy() {
        let tree = ConfigValue::block()
            .with_single("category_filter", category_filter())
            .with_single("numeric_range_filter", numeric_range_filter());
        let converter = Converter::with_config(
            ConversionConfig::builder()
                .variant_policy(VariantPolicy::FirstMatch)
                .build(),
        );

        let value = converter.expand(&tree, node("Filter")).unwrap();
        assert_eq!(value.as_variant().map(|(tag, _)| tag), Some("category_filter"));
    }

    #[test]
    fn test_empty_filter_element() {
        let tree = filter_group(vec![ConfigValue::block()]);
        let err = expand(&tree, node("FilterGroup")).unwrap_err();
        assert_eq!(err.path.to_string(), "filters[0]");
        match err.kind {
            ExpandErrorKind::EmptyVariant { candidates } => assert_eq!(candidates.len(), 7),
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn test_lenient_skips_element_with_dropped_payload() {
        let choice = OneOfBuilder::new("Choice")
            .variant("idx", &nullable_int(0, 100))
            .variant("s", &string())
            .build();
        let node = StructBuilder::new("Holder").list("items", &choice, 0, 10).build();
        let converter = Converter::with_config(ConversionConfig::compatible());

        let only_bad = ConfigValue::block().with(
            "items",
            ConfigValue::OrderedList(vec![ConfigValue::block().with("idx", ConfigValue::string("abc"))]),
        );
        let value = converter.expand(&only_bad, &node).unwrap();
        assert!(value.get("items").is_none());
        assert!(converter.flatten(&value, &node).set_eq(&converter.normalize(&only_bad, &node)));

        let mixed = ConfigValue::block().with(
            "items",
            ConfigValue::OrderedList(vec![
                ConfigValue::block().with("idx", ConfigValue::string("abc")),
                ConfigValue::block().with("s", ConfigValue::string("x")),
            ]),
        );
        let value = converter.expand(&mixed, &node).unwrap();
        assert_eq!(
            value.get("items"),
            Some(&DomainValue::Sequence(vec![DomainValue::variant("s", DomainValue::string("x"))]))
        );
        assert!(converter.flatten(&value, &node).set_eq(&converter.normalize(&mixed, &node)));

        let err = expand(&only_bad, &node).unwrap_err();
        assert_eq!(err.path.to_string(), "items[0].idx");
        assert!(matches!(err.kind, ExpandErrorKind::MalformedScalar { .. }));
    }

    #[test]
    fn test_empty_struct_candidate_is_populated() {
        let value = expand(
            &filter_group(vec![ConfigValue::block().with_single("numeric_range_filter", numeric_range_filter())]),
            node("FilterGroup"),
        )
        .unwrap();
        assert_eq!(
            value.get("scope_configuration"),
            Some(&DomainValue::variant("all_sheets", DomainValue::Struct(BTreeMap::new())))
        );
    }
}

mod enum_tests {
    use super::*;

    #[test]
    fn test_status_values() {
        let base = filter_group(vec![ConfigValue::block().with_single("numeric_range_filter", numeric_range_filter())]);
        for status in ["ENABLED", "DISABLED"] {
            let value = expand(&base.clone().with("status", ConfigValue::string(status)), node("FilterGroup")).unwrap();
            assert_eq!(
                value.get("status").and_then(DomainValue::as_leaf),
                Some(&Leaf::Enum(status.to_string()))
            );
        }
    }

    #[test]
    fn test_status_rejects_other_values() {
        let base = filter_group(vec![ConfigValue::block().with_single("numeric_range_filter", numeric_range_filter())]);
        for status in ["enabled", "MAYBE"] {
            let err = expand(&base.clone().with("status", ConfigValue::string(status)), node("FilterGroup")).unwrap_err();
            assert_eq!(err.path.to_string(), "status");
            assert_eq!(
                err.kind,
                ExpandErrorKind::InvalidEnumValue {
                    value: status.to_string(),
                    allowed: vec!["ENABLED".to_string(), "DISABLED".to_string()],
                }
            );
        }
    }
}

mod cardinality_tests {
    use super::*;

    fn tags(count: usize) -> ConfigValue {
        ConfigValue::block().with(
            "tags",
            ConfigValue::OrderedList((0..count).map(|i| ConfigValue::string(format!("t{}", i))).collect()),
        )
    }

    #[test]
    fn test_list_bounds_enforced_on_request() {
        let node = StructBuilder::new("Tagged").list("tags", &string(), 1, 3).build();
        let strict = Converter::with_config(ConversionConfig::builder().enforce_cardinality(true).build());

        assert!(expand(&tags(4), &node).is_ok());
        assert!(expand(&tags(0), &node).is_ok());
        for count in 1..=3 {
            let value = strict.expand(&tags(count), &node).unwrap();
            assert_eq!(value.get("tags").and_then(DomainValue::as_sequence).map(<[_]>::len), Some(count));
        }

        for count in [0, 4] {
            let err = strict.expand(&tags(count), &node).unwrap_err();
            assert_eq!(err.path.to_string(), "tags");
            assert_eq!(
                err.kind,
                ExpandErrorKind::CardinalityViolation {
                    min: 1,
                    max: 3,
                    actual: count
                }
            );
        }
    }

    #[test]
    fn test_absent_list_counts_as_empty() {
        let node = StructBuilder::new("Tagged").list("tags", &string(), 1, 3).build();
        let strict = Converter::with_config(ConversionConfig::builder().enforce_cardinality(true).build());

        let err = strict.expand(&ConfigValue::block(), &node).unwrap_err();
        assert_eq!(err.path.to_string(), "tags");
        assert_eq!(
            err.kind,
            ExpandErrorKind::CardinalityViolation {
                min: 1,
                max: 3,
                actual: 0
            }
        );
        assert!(expand(&ConfigValue::block(), &node).is_ok());

        let optional = StructBuilder::new("Tagged").list("tags", &string(), 0, 3).build();
        assert!(strict.expand(&ConfigValue::block(), &optional).is_ok());
    }

    #[test]
    fn test_list_order_preserved() {
        let node = StructBuilder::new("Tagged").list("tags", &string(), 0, 10).build();
        let value = expand(&tags(3), &node).unwrap();
        assert_eq!(
            value.get("tags"),
            Some(&DomainValue::Sequence(vec![
                DomainValue::string("t0"),
                DomainValue::string("t1"),
                DomainValue::string("t2"),
            ]))
        );
    }

    #[test]
    fn test_empty_list_is_absent() {
        let value = expand(&tags(0), &StructBuilder::new("Tagged").list("tags", &string(), 0, 10).build()).unwrap();
        assert_eq!(value.field_count(), 0);
    }
}

mod analysis_tests {
    use super::*;

    fn sheet(visuals: Vec<ConfigValue>) -> ConfigValue {
        ConfigValue::block()
            .with("sheet_id", ConfigValue::string("s1"))
            .with("name", ConfigValue::string("Overview"))
            .with("visuals", ConfigValue::OrderedList(visuals))
    }

    fn empty_visual(id: &str) -> ConfigValue {
        ConfigValue::block().with_single(
            "empty_visual",
            ConfigValue::block()
                .with("visual_id", ConfigValue::string(id))
                .with("data_set_identifier", ConfigValue::string("sales")),
        )
    }

    #[test]
    fn test_nested_error_path() {
        let tree = ConfigValue::block().with(
            "sheets",
            ConfigValue::OrderedList(vec![sheet(vec![
                empty_visual("v1"),
                ConfigValue::block().with_single("bar_chart_visual", ConfigValue::block()),
            ])]),
        );

        let err = expand(&tree, node("AnalysisDefinition")).unwrap_err();
        assert_eq!(err.path.to_string(), "sheets[0].visuals[1].bar_chart_visual.visual_id");
        assert_eq!(
            err.kind,
            ExpandErrorKind::MissingRequiredField {
                field: "visual_id".to_string()
            }
        );
    }

    #[test]
    fn test_analysis_with_filters_and_sheets() {
        let tree = ConfigValue::block()
            .with(
                "data_set_identifiers_declarations",
                ConfigValue::OrderedList(vec![ConfigValue::block()
                    .with("data_set_arn", ConfigValue::string("arn:aws:quicksight:eu-west-1:1:dataset/sales"))
                    .with("identifier", ConfigValue::string("sales"))]),
            )
            .with(
                "filter_groups",
                ConfigValue::OrderedList(vec![filter_group(vec![
                    ConfigValue::block().with_single("category_filter", category_filter()),
                ])]),
            )
            .with("sheets", ConfigValue::OrderedList(vec![sheet(vec![empty_visual("v1")])]));

        let value = expand(&tree, node("AnalysisDefinition")).unwrap();
        let sheets = value.get("sheets").and_then(DomainValue::as_sequence).unwrap();
        assert_eq!(sheets.len(), 1);
        let visuals = sheets[0].get("visuals").and_then(DomainValue::as_sequence).unwrap();
        assert_eq!(visuals[0].as_variant().map(|(tag, _)| tag), Some("empty_visual"));
        assert!(value.get("calculated_fields").is_none());
    }

    #[test]
    fn test_scalar_block_mismatch() {
        let tree = ConfigValue::block().with("sheets", ConfigValue::string("s1"));
        let err = expand(&tree, node("AnalysisDefinition")).unwrap_err();
        assert_eq!(err.path.to_string(), "sheets");
        assert_eq!(
            err.kind,
            ExpandErrorKind::TypeMismatch {
                expected: "list",
                found: "string"
            }
        );
    }
}

mod constraint_tests {
    use super::*;

    #[test]
    fn test_constraints_checked_on_request() {
        let tree = grid_element("5").with("column_span", ConfigValue::int(40));
        assert!(expand(&tree, node("GridLayoutElement")).is_ok());

        let strict = Converter::with_config(ConversionConfig::builder().validate_constraints(true).build());
        let err = strict.expand(&tree, node("GridLayoutElement")).unwrap_err();
        assert_eq!(err.path.to_string(), "column_span");
        assert!(matches!(err.kind, ExpandErrorKind::ConstraintViolation(_)));
    }

    #[test]
    fn test_id_pattern() {
        let strict = Converter::with_config(ConversionConfig::builder().validate_constraints(true).build());
        let tree = ConfigValue::block()
            .with("sheet_id", ConfigValue::string("bad id!"));
        let err = strict.expand(&tree, node("SheetDefinition")).unwrap_err();
        assert_eq!(err.path.to_string(), "sheet_id");
    }
}
