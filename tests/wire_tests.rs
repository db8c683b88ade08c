//! Wire shape tests

use std::sync::Arc;

use analysis_definition_sdk::catalog::Catalog;
use analysis_definition_sdk::error::ExpandErrorKind;
use analysis_definition_sdk::models::{ConfigValue, DomainValue};
use analysis_definition_sdk::schema::SchemaNode;
use analysis_definition_sdk::{expand, flatten, from_wire, to_wire};
use serde_json::json;

fn node(name: &str) -> &'static Arc<SchemaNode> {
    Catalog::global()
        .node(name)
        .unwrap_or_else(|| panic!("{} not in catalog", name))
}

fn filter_group_wire() -> serde_json::Value {
    json!({
        "CrossDataset": "SINGLE_DATASET",
        "FilterGroupId": "g1",
        "Filters": [{
            "TopBottomFilter": {
                "AggregationSortConfigurations": [{
                    "AggregationFunction": {
                        "NumericalAggregationFunction": {"SimpleNumericalAggregation": "SUM"}
                    },
                    "Column": {"ColumnName": "revenue", "DataSetIdentifier": "sales"},
                    "SortDirection": "DESC"
                }],
                "Column": {"ColumnName": "region", "DataSetIdentifier": "sales"},
                "FilterId": "f1",
                "Limit": 10
            }
        }],
        "ScopeConfiguration": {"AllSheets": {}},
        "Status": "ENABLED"
    })
}

mod to_wire_tests {
    use super::*;

    #[test]
    fn test_tree_to_wire() {
        let tree = ConfigValue::block()
            .with("column_span", ConfigValue::int(12))
            .with("element_id", ConfigValue::string("v1"))
            .with("element_type", ConfigValue::string("VISUAL"))
            .with("row_span", ConfigValue::int(6))
            .with("column_index", ConfigValue::string(""))
            .with("row_index", ConfigValue::string("3"));
        let element = node("GridLayoutElement");
        let value = expand(&tree, element).unwrap();
        assert_eq!(
            to_wire(&value, element),
            json!({
                "ColumnSpan": 12,
                "ElementId": "v1",
                "ElementType": "VISUAL",
                "RowSpan": 6,
                "RowIndex": 3
            })
        );
    }

    #[test]
    fn test_wire_name_overrides() {
        let visual = node("Visual");
        let value = DomainValue::variant(
            "kpi_visual",
            DomainValue::structure([("visual_id", DomainValue::string("k1"))]),
        );
        assert_eq!(to_wire(&value, visual), json!({"KPIVisual": {"VisualId": "k1"}}));
    }
}

mod from_wire_tests {
    use super::*;

    #[test]
    fn test_wire_to_tree() {
        let group = node("FilterGroup");
        let value = from_wire(&filter_group_wire(), group).unwrap();
        let tree = flatten(&value, group);

        assert_eq!(
            tree.pointer("filters.top_bottom_filter.aggregation_sort_configuration.sort_direction"),
            Some(&ConfigValue::string("DESC"))
        );
        assert_eq!(
            tree.pointer("scope_configuration.all_sheets"),
            Some(&ConfigValue::single(ConfigValue::block()))
        );
        assert_eq!(to_wire(&value, group), filter_group_wire());
    }

    #[test]
    fn test_wire_round_trip_through_tree() {
        let group = node("FilterGroup");
        let value = from_wire(&filter_group_wire(), group).unwrap();
        let tree = flatten(&value, group);
        assert_eq!(expand(&tree, group).unwrap(), value);
    }

    #[test]
    fn test_ambiguous_wire_variant() {
        let err = from_wire(
            &json!({"CategoricalAggregationFunction": "COUNT", "DateAggregationFunction": "MIN"}),
            node("AggregationFunction"),
        )
        .unwrap_err();
        assert!(matches!(err.kind, ExpandErrorKind::AmbiguousVariant { .. }));
    }

    #[test]
    fn test_missing_member_path() {
        let mut wire = filter_group_wire();
        wire["Filters"][0]["TopBottomFilter"]
            .as_object_mut()
            .unwrap()
            .remove("FilterId");
        let err = from_wire(&wire, node("FilterGroup")).unwrap_err();
        assert_eq!(err.path.to_string(), "Filters[0].TopBottomFilter.FilterId");
    }

    #[test]
    fn test_null_members_are_absent() {
        let mut wire = filter_group_wire();
        wire["Status"] = serde_json::Value::Null;
        let value = from_wire(&wire, node("FilterGroup")).unwrap();
        assert!(value.get("status").is_none());
    }

    #[test]
    fn test_nullable_int_must_fit_32_bits() {
        let element = node("GridLayoutElement");
        let wire = |row_index: serde_json::Value| {
            json!({
                "ColumnSpan": 12,
                "ElementId": "v1",
                "ElementType": "VISUAL",
                "RowSpan": 6,
                "RowIndex": row_index
            })
        };

        let value = from_wire(&wire(json!(3)), element).unwrap();
        assert_eq!(value.get("row_index"), Some(&DomainValue::integer(3)));

        let err = from_wire(&wire(json!(4_294_967_296i64)), element).unwrap_err();
        assert_eq!(err.path.to_string(), "RowIndex");
        assert!(matches!(
            err.kind,
            ExpandErrorKind::MalformedScalar { kind: "nullable integer", .. }
        ));
    }
}
