//! Conversion benchmarks
//!
//! Measures expand, flatten and normalize over analyses with a growing number
//! of sheets and filter groups, plus catalog construction.

use analysis_definition_sdk::catalog::Catalog;
use analysis_definition_sdk::models::ConfigValue;
use analysis_definition_sdk::{expand, flatten, normalize};
use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};

fn column(name: &str) -> ConfigValue {
    ConfigValue::block()
        .with("column_name", ConfigValue::string(name))
        .with("data_set_identifier", ConfigValue::string("sales"))
}

fn filter_group(index: usize) -> ConfigValue {
    let filter = ConfigValue::block().with_single(
        "numeric_range_filter",
        ConfigValue::block()
            .with_single("column", column("revenue"))
            .with("filter_id", ConfigValue::string(format!("f{}", index)))
            .with("null_option", ConfigValue::string("ALL_VALUES"))
            .with_single(
                "range_minimum",
                ConfigValue::block().with("static_value", ConfigValue::float(index as f64)),
            ),
    );
    ConfigValue::block()
        .with("cross_dataset", ConfigValue::string("SINGLE_DATASET"))
        .with("filter_group_id", ConfigValue::string(format!("g{}", index)))
        .with("filters", ConfigValue::OrderedList(vec![filter]))
        .with_single(
            "scope_configuration",
            ConfigValue::block().with_single("all_sheets", ConfigValue::block()),
        )
}

fn sheet(index: usize) -> ConfigValue {
    let elements = (0..4)
        .map(|i| {
            ConfigValue::block()
                .with("column_span", ConfigValue::int(9))
                .with("element_id", ConfigValue::string(format!("v{}-{}", index, i)))
                .with("element_type", ConfigValue::string("VISUAL"))
                .with("row_span", ConfigValue::int(6))
                .with("row_index", ConfigValue::string(if i % 2 == 0 { "" } else { "6" }))
        })
        .collect();
    let visuals = (0..4)
        .map(|i| {
            ConfigValue::block().with_single(
                "kpi_visual",
                ConfigValue::block().with("visual_id", ConfigValue::string(format!("v{}-{}", index, i))),
            )
        })
        .collect();
    ConfigValue::block()
        .with("sheet_id", ConfigValue::string(format!("s{}", index)))
        .with(
            "layouts",
            ConfigValue::OrderedList(vec![ConfigValue::block().with_single(
                "configuration",
                ConfigValue::block().with_single(
                    "grid_layout",
                    ConfigValue::block().with("elements", ConfigValue::OrderedList(elements)),
                ),
            )]),
        )
        .with("visuals", ConfigValue::OrderedList(visuals))
}

fn analysis(size: usize) -> ConfigValue {
    ConfigValue::block()
        .with("filter_groups", ConfigValue::OrderedList((0..size).map(filter_group).collect()))
        .with("sheets", ConfigValue::OrderedList((0..size).map(sheet).collect()))
}

fn bench_conversion(c: &mut Criterion) {
    let root = match Catalog::global().analysis_definition() {
        Some(root) => root,
        None => return,
    };

    let mut group = c.benchmark_group("analysis");
    for size in [1, 5, 20] {
        let tree = analysis(size);
        let value = match expand(&tree, root) {
            Ok(value) => value,
            Err(_) => continue,
        };

        group.bench_with_input(BenchmarkId::new("expand", size), &tree, |b, tree| {
            b.iter(|| expand(black_box(tree), root))
        });
        group.bench_with_input(BenchmarkId::new("flatten", size), &value, |b, value| {
            b.iter(|| flatten(black_box(value), root))
        });
        group.bench_with_input(BenchmarkId::new("normalize", size), &tree, |b, tree| {
            b.iter(|| normalize(black_box(tree), root))
        });
    }
    group.finish();
}

fn bench_catalog(c: &mut Criterion) {
    c.bench_function("catalog_build", |b| b.iter(Catalog::new));
}

criterion_group!(benches, bench_conversion, bench_catalog);
criterion_main!(benches);
