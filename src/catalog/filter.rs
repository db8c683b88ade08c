//! Filter groups, the seven filter kinds and their scopes

use super::Node;
use super::common::Common;
use super::control::Controls;
use super::enums::*;
use crate::schema::builder::*;
use crate::schema::{OneOfBuilder, Registry, StructBuilder};

/// Register the filter nodes and return the `FilterGroup` node
pub(crate) fn build(reg: &mut Registry, common: &Common, controls: &Controls) -> Node {
    let dfcc = &controls.default_filter_control_configuration;
    let null_option = enumeration(FILTER_NULL_OPTION);
    let select_all_options = enumeration(SELECT_ALL_OPTIONS);
    let category_values = string_len(0, 512);
    let match_operator = enumeration(CATEGORY_FILTER_MATCH_OPERATOR);

    let custom_filter = StructBuilder::new("CustomFilterConfiguration")
        .required("match_operator", &match_operator)
        .required("null_option", &null_option)
        .optional("category_value", &string_len(0, 512))
        .optional("parameter_name", &common.parameter_name)
        .optional("select_all_options", &select_all_options)
        .register(reg);
    let custom_filter_list = StructBuilder::new("CustomFilterListConfiguration")
        .required("match_operator", &match_operator)
        .required("null_option", &null_option)
        .list("category_values", &category_values, 0, 100_000)
        .optional("select_all_options", &select_all_options)
        .register(reg);
    let filter_list = StructBuilder::new("FilterListConfiguration")
        .required("match_operator", &match_operator)
        .list("category_values", &category_values, 0, 100_000)
        .optional("select_all_options", &select_all_options)
        .register(reg);
    let category_configuration = OneOfBuilder::new("CategoryFilterConfiguration")
        .variant("custom_filter_configuration", &custom_filter)
        .variant("custom_filter_list_configuration", &custom_filter_list)
        .variant("filter_list_configuration", &filter_list)
        .register(reg);
    let category_filter = StructBuilder::new("CategoryFilter")
        .required("column", &common.column)
        .required("configuration", &category_configuration)
        .required("filter_id", &common.id)
        .optional("default_filter_control_configuration", dfcc)
        .register(reg);

    let numeric_equality_filter = StructBuilder::new("NumericEqualityFilter")
        .required("column", &common.column)
        .required("filter_id", &common.id)
        .required("match_operator", &enumeration(NUMERIC_EQUALITY_MATCH_OPERATOR))
        .required("null_option", &null_option)
        .optional("aggregation_function", &common.aggregation_function)
        .optional("default_filter_control_configuration", dfcc)
        .optional("parameter_name", &common.parameter_name)
        .optional("select_all_options", &select_all_options)
        .optional("value", &common.float)
        .register(reg);

    let numeric_range_value = OneOfBuilder::new("NumericRangeFilterValue")
        .variant("parameter", &common.parameter_name)
        .variant("static_value", &common.float)
        .register(reg);
    let numeric_range_filter = StructBuilder::new("NumericRangeFilter")
        .required("column", &common.column)
        .required("filter_id", &common.id)
        .required("null_option", &null_option)
        .optional("aggregation_function", &common.aggregation_function)
        .optional("default_filter_control_configuration", dfcc)
        .optional("include_maximum", &common.boolean)
        .optional("include_minimum", &common.boolean)
        .optional("range_maximum", &numeric_range_value)
        .optional("range_minimum", &numeric_range_value)
        .optional("select_all_options", &select_all_options)
        .register(reg);

    let anchor_date = StructBuilder::new("AnchorDateConfiguration")
        .optional("anchor_option", &enumeration(ANCHOR_OPTION))
        .optional("parameter_name", &common.parameter_name)
        .register(reg);
    let exclude_period = StructBuilder::new("ExcludePeriodConfiguration")
        .required("amount", &common.integer)
        .required("granularity", &common.time_granularity)
        .optional("status", &common.status)
        .register(reg);
    let relative_dates_filter = StructBuilder::new("RelativeDatesFilter")
        .required("anchor_date_configuration", &anchor_date)
        .required("column", &common.column)
        .required("filter_id", &common.id)
        .required("null_option", &null_option)
        .required("relative_date_type", &enumeration(RELATIVE_DATE_TYPE))
        .required("time_granularity", &common.time_granularity)
        .optional("default_filter_control_configuration", dfcc)
        .optional("exclude_period_configuration", &exclude_period)
        .optional("minimum_granularity", &common.time_granularity)
        .optional("parameter_name", &common.parameter_name)
        .optional("relative_date_value", &common.integer)
        .register(reg);

    let time_equality_filter = StructBuilder::new("TimeEqualityFilter")
        .required("column", &common.column)
        .required("filter_id", &common.id)
        .optional("default_filter_control_configuration", dfcc)
        .optional("parameter_name", &common.parameter_name)
        .optional("rolling_date", &common.rolling_date)
        .optional("time_granularity", &common.time_granularity)
        .optional("value", &common.timestamp)
        .register(reg);

    let time_range_value = OneOfBuilder::new("TimeRangeFilterValue")
        .variant("parameter", &common.parameter_name)
        .variant("rolling_date", &common.rolling_date)
        .variant("static_value", &common.timestamp)
        .register(reg);
    let time_range_filter = StructBuilder::new("TimeRangeFilter")
        .required("column", &common.column)
        .required("filter_id", &common.id)
        .required("null_option", &null_option)
        .optional("default_filter_control_configuration", dfcc)
        .optional("exclude_period_configuration", &exclude_period)
        .optional("include_maximum", &common.boolean)
        .optional("include_minimum", &common.boolean)
        .optional("range_maximum_value", &time_range_value)
        .optional("range_minimum_value", &time_range_value)
        .optional("time_granularity", &common.time_granularity)
        .register(reg);

    let aggregation_sort = StructBuilder::new("AggregationSortConfiguration")
        .required("aggregation_function", &common.aggregation_function)
        .required("column", &common.column)
        .required("sort_direction", &common.sort_direction)
        .register(reg);
    let top_bottom_filter = StructBuilder::new("TopBottomFilter")
        .list("aggregation_sort_configuration", &aggregation_sort, 0, 100)
        .wire("AggregationSortConfigurations")
        .required("column", &common.column)
        .required("filter_id", &common.id)
        .optional("default_filter_control_configuration", dfcc)
        .optional("limit", &common.integer)
        .optional("parameter_name", &common.parameter_name)
        .optional("time_granularity", &common.time_granularity)
        .register(reg);

    let filter = OneOfBuilder::new("Filter")
        .variant("category_filter", &category_filter)
        .variant("numeric_equality_filter", &numeric_equality_filter)
        .variant("numeric_range_filter", &numeric_range_filter)
        .variant("relative_dates_filter", &relative_dates_filter)
        .variant("time_equality_filter", &time_equality_filter)
        .variant("time_range_filter", &time_range_filter)
        .variant("top_bottom_filter", &top_bottom_filter)
        .register(reg);

    let all_sheets = StructBuilder::new("AllSheetsFilterScopeConfiguration").register(reg);
    let visual_scoping = StructBuilder::new("SheetVisualScopingConfiguration")
        .required("scope", &enumeration(FILTER_VISUAL_SCOPE))
        .required("sheet_id", &common.id)
        .set("visual_ids", &common.id, 0, 50)
        .register(reg);
    let selected_sheets = StructBuilder::new("SelectedSheetsFilterScopeConfiguration")
        .list("sheet_visual_scoping_configurations", &visual_scoping, 1, 50)
        .register(reg);
    let scope = OneOfBuilder::new("FilterScopeConfiguration")
        .variant("all_sheets", &all_sheets)
        .variant("selected_sheets", &selected_sheets)
        .register(reg);

    StructBuilder::new("FilterGroup")
        .required("cross_dataset", &enumeration(CROSS_DATASET))
        .required("filter_group_id", &common.id)
        .list("filters", &filter, 1, 20)
        .required("scope_configuration", &scope)
        .optional("status", &common.status)
        .register(reg)
}
