//! Property-based tests for the conversion laws
//!
//! For every tree that expands:
//! - flatten(expand(t)) equals normalize(t), sets compared as multisets
//! - expand(flatten(v)) == v
//! - normalize is idempotent
//! - reordering a set field expands to the same multiset

use std::sync::Arc;

use analysis_definition_sdk::catalog::Catalog;
use analysis_definition_sdk::models::{ConfigValue, DomainValue};
use analysis_definition_sdk::schema::builder::{float, integer, string};
use analysis_definition_sdk::schema::{OneOfBuilder, SchemaNode, StructBuilder};
use analysis_definition_sdk::{expand, flatten, normalize};
use proptest::prelude::*;

fn node(name: &str) -> &'static Arc<SchemaNode> {
    Catalog::global()
        .node(name)
        .unwrap_or_else(|| panic!("{} not in catalog", name))
}

fn nullable_index(max: i64) -> impl Strategy<Value = Option<String>> {
    prop_oneof![
        Just(None),
        Just(Some(String::new())),
        Just(Some("null".to_string())),
        (0..=max).prop_map(|v| Some(v.to_string())),
    ]
}

fn grid_element() -> impl Strategy<Value = ConfigValue> {
    (
        1i64..=36,
        "[a-z][a-z0-9-]{0,8}",
        prop::sample::select(vec!["VISUAL", "FILTER_CONTROL", "PARAMETER_CONTROL", "TEXT_BOX"]),
        1i64..=21,
        nullable_index(35),
        nullable_index(9009),
    )
        .prop_map(|(column_span, id, element_type, row_span, column_index, row_index)| {
            let mut element = ConfigValue::block()
                .with("column_span", ConfigValue::int(column_span))
                .with("element_id", ConfigValue::string(id))
                .with("element_type", ConfigValue::string(element_type))
                .with("row_span", ConfigValue::int(row_span));
            if let Some(index) = column_index {
                element = element.with("column_index", ConfigValue::string(index));
            }
            if let Some(index) = row_index {
                element = element.with("row_index", ConfigValue::string(index));
            }
            element
        })
}

fn range_value() -> impl Strategy<Value = ConfigValue> {
    prop_oneof![
        (-1.0e6f64..1.0e6).prop_map(|v| ConfigValue::block().with("static_value", ConfigValue::float(v))),
        "[A-Za-z][A-Za-z0-9]{0,10}".prop_map(|p| ConfigValue::block()
            .with("parameter", ConfigValue::string(p))
            .with("static_value", ConfigValue::OrderedList(vec![]))),
    ]
}

fn numeric_range_filter() -> impl Strategy<Value = ConfigValue> {
    (
        "[a-z]{1,8}",
        "[a-z0-9]{1,8}",
        prop::sample::select(vec!["ALL_VALUES", "NULLS_ONLY", "NON_NULLS_ONLY"]),
        prop::option::of(range_value()),
        prop::option::of(any::<bool>()),
    )
        .prop_map(|(column, id, null_option, maximum, include_maximum)| {
            let mut filter = ConfigValue::block()
                .with_single(
                    "column",
                    ConfigValue::block()
                        .with("column_name", ConfigValue::string(column))
                        .with("data_set_identifier", ConfigValue::string("sales")),
                )
                .with("filter_id", ConfigValue::string(id))
                .with("null_option", ConfigValue::string(null_option));
            if let Some(maximum) = maximum {
                filter = filter.with_single("range_maximum", maximum);
            }
            if let Some(include) = include_maximum {
                filter = filter.with("include_maximum", ConfigValue::bool(include));
            }
            ConfigValue::block()
                .with("category_filter", ConfigValue::OrderedList(vec![]))
                .with_single("numeric_range_filter", filter)
        })
}

fn filter_group() -> impl Strategy<Value = ConfigValue> {
    (
        prop::collection::vec(numeric_range_filter(), 0..5),
        prop::option::of(prop::sample::select(vec!["ENABLED", "DISABLED"])),
    )
        .prop_map(|(filters, status)| {
            let mut group = ConfigValue::block()
                .with("cross_dataset", ConfigValue::string("ALL_DATASETS"))
                .with("filter_group_id", ConfigValue::string("g1"))
                .with("filters", ConfigValue::OrderedList(filters))
                .with_single(
                    "scope_configuration",
                    ConfigValue::block().with_single("all_sheets", ConfigValue::block()),
                );
            if let Some(status) = status {
                group = group.with("status", ConfigValue::string(status));
            }
            group
        })
}

fn calculated_fields() -> impl Strategy<Value = ConfigValue> {
    prop::collection::vec(("[a-z]{1,6}", "[a-z +*/-]{1,12}"), 0..6).prop_map(|fields| {
        ConfigValue::block().with(
            "calculated_fields",
            ConfigValue::UnorderedSet(
                fields
                    .into_iter()
                    .map(|(name, expression)| {
                        ConfigValue::block()
                            .with("data_set_identifier", ConfigValue::string("sales"))
                            .with("expression", ConfigValue::string(expression))
                            .with("name", ConfigValue::string(name))
                    })
                    .collect(),
            ),
        )
    })
}

fn calculated_field_list() -> impl Strategy<Value = (Vec<ConfigValue>, Vec<ConfigValue>)> {
    prop::collection::vec(("[a-z]{1,6}", "[a-z +*/-]{1,12}"), 1..8).prop_flat_map(|fields| {
        let fields: Vec<ConfigValue> = fields
            .into_iter()
            .map(|(name, expression)| {
                ConfigValue::block()
                    .with("data_set_identifier", ConfigValue::string("sales"))
                    .with("expression", ConfigValue::string(expression))
                    .with("name", ConfigValue::string(name))
            })
            .collect();
        (Just(fields.clone()), Just(fields).prop_shuffle())
    })
}

fn same_multiset(a: &[DomainValue], b: &[DomainValue]) -> bool {
    a.len() == b.len()
        && a.iter().all(|x| {
            a.iter().filter(|y| *y == x).count() == b.iter().filter(|y| *y == x).count()
        })
}

fn measure_schema() -> Arc<SchemaNode> {
    let choice = OneOfBuilder::new("MeasureChoice")
        .variant("count", &integer())
        .variant("ratio", &float())
        .build();
    StructBuilder::new("Measure")
        .required("name", &string())
        .optional("value", &float())
        .optional("choice", &choice)
        .list("labels", &string(), 0, 10)
        .set("tags", &string(), 0, 10)
        .build()
}

/// Floats including infinities; NaN is excluded because it never compares equal
fn float_leaf() -> impl Strategy<Value = f64> {
    prop_oneof![
        any::<f64>().prop_filter("finite or infinite, not NaN", |v| !v.is_nan()),
        Just(f64::INFINITY),
        Just(f64::NEG_INFINITY),
    ]
}

fn measure_value() -> impl Strategy<Value = DomainValue> {
    let choice = prop_oneof![
        any::<i64>().prop_map(|v| DomainValue::variant("count", DomainValue::integer(v))),
        float_leaf().prop_map(|v| DomainValue::variant("ratio", DomainValue::float(v))),
    ];
    (
        ".{0,12}",
        prop::option::of(float_leaf()),
        prop::option::of(choice),
        prop::option::of(prop::collection::vec("[a-z]{0,6}", 1..5)),
        prop::option::of(prop::collection::vec("[a-z]{0,6}", 1..5)),
    )
        .prop_map(|(name, value, choice, labels, tags)| {
            let mut fields = vec![("name", DomainValue::string(name))];
            if let Some(value) = value {
                fields.push(("value", DomainValue::float(value)));
            }
            if let Some(choice) = choice {
                fields.push(("choice", choice));
            }
            let strings = |items: Vec<String>| {
                DomainValue::Sequence(items.into_iter().map(DomainValue::string).collect())
            };
            if let Some(labels) = labels {
                fields.push(("labels", strings(labels)));
            }
            if let Some(tags) = tags {
                fields.push(("tags", strings(tags)));
            }
            DomainValue::structure(fields)
        })
}

fn grid_element_value() -> impl Strategy<Value = DomainValue> {
    (
        1i64..=36,
        "[a-z][a-z0-9-]{0,8}",
        prop::sample::select(vec!["VISUAL", "FILTER_CONTROL", "PARAMETER_CONTROL", "TEXT_BOX"]),
        1i64..=21,
        prop::option::of(0i64..=35),
        prop::option::of(0i64..=9009),
    )
        .prop_map(|(column_span, id, element_type, row_span, column_index, row_index)| {
            let mut fields = vec![
                ("column_span", DomainValue::integer(column_span)),
                ("element_id", DomainValue::string(id)),
                ("element_type", DomainValue::enumeration(element_type)),
                ("row_span", DomainValue::integer(row_span)),
            ];
            if let Some(index) = column_index {
                fields.push(("column_index", DomainValue::integer(index)));
            }
            if let Some(index) = row_index {
                fields.push(("row_index", DomainValue::integer(index)));
            }
            DomainValue::structure(fields)
        })
}

fn assert_laws(tree: &ConfigValue, root: &SchemaNode) -> Result<(), TestCaseError> {
    let value = expand(tree, root).map_err(|e| TestCaseError::fail(e.to_string()))?;
    let flat = flatten(&value, root);
    let normalized = normalize(tree, root);
    prop_assert!(flat.set_eq(&normalized), "flatten {:?} != normalize {:?}", flat, normalized);
    prop_assert_eq!(expand(&flat, root).map_err(|e| TestCaseError::fail(e.to_string()))?, value);
    prop_assert!(normalize(&normalized, root).set_eq(&normalized));
    Ok(())
}

proptest! {
    #[test]
    fn prop_grid_element_round_trip(tree in grid_element()) {
        assert_laws(&tree, node("GridLayoutElement"))?;
    }

    #[test]
    fn prop_filter_group_round_trip(tree in filter_group()) {
        assert_laws(&tree, node("FilterGroup"))?;
    }

    #[test]
    fn prop_calculated_field_set_round_trip(tree in calculated_fields()) {
        assert_laws(&tree, node("AnalysisDefinition"))?;
    }

    #[test]
    fn prop_measure_value_survives_flatten(value in measure_value()) {
        let root = measure_schema();
        let flat = flatten(&value, &root);
        prop_assert_eq!(expand(&flat, &root).map_err(|e| TestCaseError::fail(e.to_string()))?, value);
    }

    #[test]
    fn prop_grid_element_value_survives_flatten(value in grid_element_value()) {
        let root = node("GridLayoutElement");
        let flat = flatten(&value, root);
        prop_assert_eq!(expand(&flat, root).map_err(|e| TestCaseError::fail(e.to_string()))?, value);
    }

    #[test]
    fn prop_set_permutation_is_multiset_equal((fields, shuffled) in calculated_field_list()) {
        let root = node("AnalysisDefinition");
        let tree = ConfigValue::block().with("calculated_fields", ConfigValue::UnorderedSet(fields));
        let permuted = ConfigValue::block().with("calculated_fields", ConfigValue::UnorderedSet(shuffled));

        let value = expand(&tree, root).map_err(|e| TestCaseError::fail(e.to_string()))?;
        let permuted_value = expand(&permuted, root).map_err(|e| TestCaseError::fail(e.to_string()))?;
        let elements = value.get("calculated_fields").and_then(DomainValue::as_sequence).unwrap_or_default();
        let permuted_elements = permuted_value
            .get("calculated_fields")
            .and_then(DomainValue::as_sequence)
            .unwrap_or_default();
        prop_assert!(same_multiset(elements, permuted_elements));
        prop_assert!(normalize(&tree, root).set_eq(&normalize(&permuted, root)));
    }

    #[test]
    fn prop_filter_order_preserved(tree in filter_group()) {
        let root = node("FilterGroup");
        let mut reversed = tree.clone();
        if let ConfigValue::Block(fields) = &mut reversed {
            if let Some(ConfigValue::OrderedList(filters)) = fields.get_mut("filters") {
                filters.reverse();
            }
        }
        let forward = expand(&tree, root).map_err(|e| TestCaseError::fail(e.to_string()))?;
        let backward = expand(&reversed, root).map_err(|e| TestCaseError::fail(e.to_string()))?;
        let mut forward_filters = forward
            .get("filters")
            .and_then(|f| f.as_sequence())
            .map(<[_]>::to_vec)
            .unwrap_or_default();
        forward_filters.reverse();
        let backward_filters = backward
            .get("filters")
            .and_then(|f| f.as_sequence())
            .map(<[_]>::to_vec)
            .unwrap_or_default();
        prop_assert_eq!(forward_filters, backward_filters);
    }
}
