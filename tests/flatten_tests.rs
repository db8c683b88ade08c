//! Flatten and round-trip tests against the analysis definition catalog

use std::sync::Arc;

use analysis_definition_sdk::catalog::Catalog;
use analysis_definition_sdk::convert::{ConversionConfig, Converter};
use analysis_definition_sdk::models::{ConfigValue, DomainValue, Leaf, Scalar};
use analysis_definition_sdk::schema::builder::float;
use analysis_definition_sdk::schema::{SchemaNode, StructBuilder};
use analysis_definition_sdk::{expand, flatten, normalize};

fn node(name: &str) -> &'static Arc<SchemaNode> {
    Catalog::global()
        .node(name)
        .unwrap_or_else(|| panic!("{} not in catalog", name))
}

fn calculated_field(name: &str, expression: &str) -> ConfigValue {
    ConfigValue::block()
        .with("data_set_identifier", ConfigValue::string("sales"))
        .with("expression", ConfigValue::string(expression))
        .with("name", ConfigValue::string(name))
}

fn data_set_declaration() -> ConfigValue {
    ConfigValue::block()
        .with("data_set_arn", ConfigValue::string("arn:aws:quicksight:eu-west-1:1:dataset/sales"))
        .with("identifier", ConfigValue::string("sales"))
}

fn grid_sheet() -> ConfigValue {
    let element = ConfigValue::block()
        .with("column_span", ConfigValue::int(18))
        .with("element_id", ConfigValue::string("v1"))
        .with("element_type", ConfigValue::string("VISUAL"))
        .with("row_span", ConfigValue::int(12))
        .with("column_index", ConfigValue::string("null"))
        .with("row_index", ConfigValue::string("0"));
    let layout = ConfigValue::block().with_single(
        "configuration",
        ConfigValue::block().with_single(
            "grid_layout",
            ConfigValue::block().with("elements", ConfigValue::OrderedList(vec![element])),
        ),
    );
    let kpi = ConfigValue::block().with_single(
        "kpi_visual",
        ConfigValue::block()
            .with("visual_id", ConfigValue::string("v1"))
            .with_single(
                "title",
                ConfigValue::block().with("visibility", ConfigValue::string("VISIBLE")),
            ),
    );
    ConfigValue::block()
        .with("sheet_id", ConfigValue::string("s1"))
        .with("layouts", ConfigValue::OrderedList(vec![layout]))
        .with("visuals", ConfigValue::OrderedList(vec![kpi]))
        .with("filter_controls", ConfigValue::OrderedList(vec![]))
}

fn analysis() -> ConfigValue {
    ConfigValue::block()
        .with(
            "data_set_identifiers_declarations",
            ConfigValue::OrderedList(vec![data_set_declaration()]),
        )
        .with(
            "calculated_fields",
            ConfigValue::UnorderedSet(vec![
                calculated_field("margin", "revenue - cost"),
                calculated_field("ratio", "revenue / cost"),
            ]),
        )
        .with("sheets", ConfigValue::OrderedList(vec![grid_sheet()]))
        .with(
            "options",
            ConfigValue::OrderedList(vec![ConfigValue::block()
                .with("timezone", ConfigValue::string("Europe/Berlin"))
                .with("week_start", ConfigValue::string("MONDAY"))]),
        )
}

mod round_trip_tests {
    use super::*;

    #[test]
    fn test_flatten_expand_is_normalize() {
        let root = node("AnalysisDefinition");
        let tree = analysis();
        let value = expand(&tree, root).unwrap();
        let flat = flatten(&value, root);
        assert!(flat.set_eq(&normalize(&tree, root)));
    }

    #[test]
    fn test_expand_flatten_is_identity() {
        let root = node("AnalysisDefinition");
        let value = expand(&analysis(), root).unwrap();
        assert_eq!(expand(&flatten(&value, root), root).unwrap(), value);
    }

    #[test]
    fn test_non_finite_float_survives_round_trip() {
        let node = StructBuilder::new("Measure").optional("v", &float()).build();
        for (value, text) in [(f64::INFINITY, "inf"), (f64::NEG_INFINITY, "-inf")] {
            let domain = DomainValue::structure([("v", DomainValue::float(value))]);
            let flat = flatten(&domain, &node);
            assert_eq!(flat.get("v"), Some(&ConfigValue::Scalar(Scalar::from(text))));
            assert_eq!(expand(&flat, &node).unwrap(), domain);
        }

        let nan = flatten(&DomainValue::structure([("v", DomainValue::float(f64::NAN))]), &node);
        let expanded = expand(&nan, &node).unwrap();
        assert!(matches!(
            expanded.get("v").and_then(DomainValue::as_leaf),
            Some(Leaf::Float(v)) if v.is_nan()
        ));
    }

    #[test]
    fn test_normalize_drops_absent_forms() {
        let root = node("AnalysisDefinition");
        let normalized = normalize(&analysis(), root);
        let sheet = &normalized.get("sheets").and_then(ConfigValue::elements).unwrap()[0];
        assert!(sheet.get("filter_controls").is_none());
        let element = sheet
            .pointer("layouts.configuration.grid_layout.elements")
            .and_then(ConfigValue::elements)
            .map(|elements| &elements[0])
            .unwrap();
        assert!(element.get("column_index").is_none());
        assert_eq!(element.get("row_index"), Some(&ConfigValue::string("0")));
    }

    #[test]
    fn test_compatible_round_trip() {
        let converter = Converter::with_config(ConversionConfig::compatible());
        let root = node("AnalysisDefinition");
        let tree = analysis().with("calculated_fields", ConfigValue::UnorderedSet(vec![]));
        let value = converter.expand(&tree, root).unwrap();
        assert!(value.get("calculated_fields").is_none());
        assert!(converter.flatten(&value, root).set_eq(&converter.normalize(&tree, root)));
    }
}

mod set_tests {
    use super::*;

    #[test]
    fn test_set_permutations_normalize_equal() {
        let root = node("AnalysisDefinition");
        let forward = analysis();
        let reversed = analysis().with(
            "calculated_fields",
            ConfigValue::UnorderedSet(vec![
                calculated_field("ratio", "revenue / cost"),
                calculated_field("margin", "revenue - cost"),
            ]),
        );
        assert!(normalize(&forward, root).set_eq(&normalize(&reversed, root)));
        assert!(!normalize(&forward, root).eq(&normalize(&reversed, root)));
    }

    #[test]
    fn test_set_flattens_to_unordered_set() {
        let root = node("AnalysisDefinition");
        let value = expand(&analysis(), root).unwrap();
        let flat = flatten(&value, root);
        assert!(matches!(
            flat.get("calculated_fields"),
            Some(ConfigValue::UnorderedSet(items)) if items.len() == 2
        ));
    }

    #[test]
    fn test_list_order_matters() {
        let root = node("AnalysisDefinition");
        let first = grid_sheet();
        let second = grid_sheet().with("sheet_id", ConfigValue::string("s2"));
        let ab = analysis().with("sheets", ConfigValue::OrderedList(vec![first.clone(), second.clone()]));
        let ba = analysis().with("sheets", ConfigValue::OrderedList(vec![second, first]));
        assert_ne!(expand(&ab, root).unwrap(), expand(&ba, root).unwrap());
    }
}

mod flatten_shape_tests {
    use super::*;

    #[test]
    fn test_variant_sets_only_its_candidate() {
        let filter = node("Filter");
        let value = DomainValue::variant(
            "numeric_range_filter",
            DomainValue::structure([
                (
                    "column",
                    DomainValue::structure([
                        ("column_name", DomainValue::string("revenue")),
                        ("data_set_identifier", DomainValue::string("sales")),
                    ]),
                ),
                ("filter_id", DomainValue::string("f1")),
                ("null_option", DomainValue::enumeration("ALL_VALUES")),
            ]),
        );
        let flat = flatten(&value, filter);
        let block = flat.as_block().unwrap();
        assert_eq!(block.len(), 1);
        assert_eq!(
            flat.pointer("numeric_range_filter.column.column_name"),
            Some(&ConfigValue::string("revenue"))
        );
    }

    #[test]
    fn test_nullable_int_flattens_to_string() {
        let element = node("GridLayoutElement");
        let value = DomainValue::structure([
            ("column_span", DomainValue::integer(6)),
            ("element_id", DomainValue::string("e1")),
            ("element_type", DomainValue::enumeration("TEXT_BOX")),
            ("row_span", DomainValue::integer(3)),
            ("row_index", DomainValue::integer(7)),
        ]);
        let flat = flatten(&value, element);
        assert_eq!(flat.get("row_index"), Some(&ConfigValue::string("7")));
        assert!(flat.get("column_index").is_none());
        assert_eq!(flat.get("column_span"), Some(&ConfigValue::int(6)));
    }

    #[test]
    fn test_optional_block_flattens_to_single_element_list() {
        let root = node("AnalysisDefinition");
        let value = expand(&analysis(), root).unwrap();
        let flat = flatten(&value, root);
        assert!(matches!(
            flat.get("options"),
            Some(ConfigValue::OrderedList(items)) if items.len() == 1
        ));
    }
}

mod data_set_tests {
    use super::*;

    fn table_entry(id: &str, table: &str) -> ConfigValue {
        let relational = ConfigValue::block()
            .with("data_source_arn", ConfigValue::string("arn:aws:quicksight:eu-west-1:1:datasource/pg"))
            .with(
                "input_columns",
                ConfigValue::OrderedList(vec![
                    ConfigValue::block()
                        .with("name", ConfigValue::string("region"))
                        .with("type", ConfigValue::string("STRING")),
                    ConfigValue::block()
                        .with("name", ConfigValue::string("revenue"))
                        .with("type", ConfigValue::string("DECIMAL")),
                ]),
            )
            .with("name", ConfigValue::string(table));
        ConfigValue::block()
            .with("physical_table_map_id", ConfigValue::string(id))
            .with_single(
                "physical_table",
                ConfigValue::block()
                    .with_single("relational_table", relational)
                    .with("custom_sql", ConfigValue::OrderedList(vec![])),
            )
    }

    fn data_set(entries: Vec<ConfigValue>) -> ConfigValue {
        ConfigValue::block()
            .with("data_set_id", ConfigValue::string("sales"))
            .with("name", ConfigValue::string("Sales"))
            .with("import_mode", ConfigValue::string("SPICE"))
            .with("physical_table_map", ConfigValue::UnorderedSet(entries))
    }

    #[test]
    fn test_physical_table_map_round_trip() {
        let root = Catalog::global().data_set_definition().unwrap();
        let tree = data_set(vec![table_entry("orders", "orders"), table_entry("returns", "returns")]);
        let value = expand(&tree, root).unwrap();

        let entries = value.get("physical_table_map").and_then(DomainValue::as_sequence).unwrap();
        assert_eq!(entries.len(), 2);
        let (tag, _) = entries[0]
            .get("physical_table")
            .and_then(DomainValue::as_variant)
            .unwrap();
        assert_eq!(tag, "relational_table");

        assert!(flatten(&value, root).set_eq(&normalize(&tree, root)));
        assert_eq!(expand(&flatten(&value, root), root).unwrap(), value);
    }

    #[test]
    fn test_physical_table_map_order_is_irrelevant() {
        let root = Catalog::global().data_set_definition().unwrap();
        let forward = data_set(vec![table_entry("orders", "orders"), table_entry("returns", "returns")]);
        let backward = data_set(vec![table_entry("returns", "returns"), table_entry("orders", "orders")]);
        assert!(normalize(&forward, root).set_eq(&normalize(&backward, root)));
    }
}
