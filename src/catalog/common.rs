//! Nodes shared by filters, controls, visuals and layouts

use super::Node;
use super::enums::*;
use crate::schema::builder::*;
use crate::schema::{OneOfBuilder, Registry, StructBuilder};

/// Shared scalar descriptors and widely reused blocks
pub(crate) struct Common {
    pub id: Node,
    pub name: Node,
    pub label: Node,
    pub title: Node,
    pub field_id: Node,
    pub expression: Node,
    pub parameter_name: Node,
    pub data_set_identifier: Node,
    pub color: Node,
    pub color_alpha: Node,
    pub float: Node,
    pub integer: Node,
    pub boolean: Node,
    pub timestamp: Node,
    pub length: Node,
    pub visibility: Node,
    pub status: Node,
    pub sort_direction: Node,
    pub time_granularity: Node,

    pub column: Node,
    pub aggregation_function: Node,
    pub numerical_aggregation_function: Node,
    pub font_configuration: Node,
    pub label_options: Node,
    pub visual_title: Node,
    pub visual_subtitle: Node,
    pub data_path_value: Node,
    pub rolling_date: Node,
    pub spacing: Node,
    pub column_hierarchy: Node,
    pub custom_action: Node,
    pub field_sort_options: Node,
    pub column_sort: Node,
    pub items_limit: Node,
    pub pagination: Node,
    pub conditional_color: Node,
    pub visibility_options: Node,
}

impl Common {
    pub(crate) fn build(reg: &mut Registry) -> Self {
        let id = id();
        let name = string_len(1, 128);
        let label = string_len(1, 2048);
        let title = string_len(1, 2048);
        let field_id = string_len(1, 512);
        let expression = string_len(1, 4096);
        let parameter_name = parameter_name();
        let data_set_identifier = string_len(1, 2048);
        let color = hex_color();
        let color_alpha = hex_color_alpha();
        let float = float();
        let integer = integer();
        let boolean = boolean();
        let timestamp = timestamp();
        let length = string();
        let visibility = enumeration(VISIBILITY);
        let status = enumeration(STATUS);
        let sort_direction = enumeration(SORT_DIRECTION);
        let time_granularity = enumeration(TIME_GRANULARITY);

        let column = StructBuilder::new("ColumnIdentifier")
            .required("column_name", &name)
            .required("data_set_identifier", &data_set_identifier)
            .register(reg);

        let percentile = StructBuilder::new("PercentileAggregation")
            .optional("percentile_value", &float_range(0.0, 100.0))
            .register(reg);
        let numerical_aggregation_function = OneOfBuilder::new("NumericalAggregationFunction")
            .variant("percentile_aggregation", &percentile)
            .variant(
                "simple_numerical_aggregation",
                &enumeration(SIMPLE_NUMERICAL_AGGREGATION),
            )
            .register(reg);
        let aggregation_function = OneOfBuilder::new("AggregationFunction")
            .variant(
                "categorical_aggregation_function",
                &enumeration(CATEGORICAL_AGGREGATION),
            )
            .variant("date_aggregation_function", &enumeration(DATE_AGGREGATION))
            .variant("numerical_aggregation_function", &numerical_aggregation_function)
            .register(reg);

        let font_size = StructBuilder::new("FontSize")
            .optional("relative", &enumeration(RELATIVE_FONT_SIZE))
            .register(reg);
        let font_weight = StructBuilder::new("FontWeight")
            .optional("name", &enumeration(FONT_WEIGHT))
            .register(reg);
        let font_configuration = StructBuilder::new("FontConfiguration")
            .optional("font_color", &color)
            .optional("font_decoration", &enumeration(FONT_DECORATION))
            .optional("font_size", &font_size)
            .optional("font_style", &enumeration(FONT_STYLE))
            .optional("font_weight", &font_weight)
            .register(reg);
        let label_options = StructBuilder::new("LabelOptions")
            .optional("custom_label", &label)
            .optional("font_configuration", &font_configuration)
            .optional("visibility", &visibility)
            .register(reg);

        let short_format_text = StructBuilder::new("ShortFormatText")
            .optional("plain_text", &string_len(1, 512))
            .optional("rich_text", &string_len(1, 1024))
            .register(reg);
        let long_format_text = StructBuilder::new("LongFormatText")
            .optional("plain_text", &string_len(1, 1024))
            .optional("rich_text", &string_len(1, 2048))
            .register(reg);
        let visual_title = StructBuilder::new("VisualTitleLabelOptions")
            .optional("format_text", &short_format_text)
            .optional("visibility", &visibility)
            .register(reg);
        let visual_subtitle = StructBuilder::new("VisualSubtitleLabelOptions")
            .optional("format_text", &long_format_text)
            .optional("visibility", &visibility)
            .register(reg);

        let data_path_value = StructBuilder::new("DataPathValue")
            .required("field_id", &field_id)
            .required("field_value", &string_len(1, 2048))
            .register(reg);
        let rolling_date = StructBuilder::new("RollingDateConfiguration")
            .optional("data_set_identifier", &data_set_identifier)
            .required("expression", &expression)
            .register(reg);
        let spacing = StructBuilder::new("Spacing")
            .optional("bottom", &length)
            .optional("left", &length)
            .optional("right", &length)
            .optional("top", &length)
            .register(reg);
        let visibility_options = StructBuilder::new("VisibilityOptions")
            .optional("visibility", &visibility)
            .register(reg);

        let drill_down_filter = Self::drill_down_filter(reg, &column, &float, &timestamp, &time_granularity);
        let column_hierarchy = Self::column_hierarchy(reg, &id, &column, &drill_down_filter);
        let custom_action = Self::custom_action(reg, &id, &parameter_name, &float, &integer, &timestamp, &status);

        let column_sort = StructBuilder::new("ColumnSort")
            .required("direction", &sort_direction)
            .required("sort_by", &column)
            .optional("aggregation_function", &aggregation_function)
            .register(reg);
        let field_sort = StructBuilder::new("FieldSort")
            .required("direction", &sort_direction)
            .required("field_id", &field_id)
            .register(reg);
        let field_sort_options = OneOfBuilder::new("FieldSortOptions")
            .variant("column_sort", &column_sort)
            .variant("field_sort", &field_sort)
            .register(reg);
        let items_limit = StructBuilder::new("ItemsLimitConfiguration")
            .optional("items_limit", &integer)
            .required("other_categories", &enumeration(OTHER_CATEGORIES))
            .register(reg);
        let pagination = StructBuilder::new("PaginationConfiguration")
            .required("page_number", &int_range(0, i64::from(i32::MAX)))
            .required("page_size", &integer)
            .register(reg);

        let solid = StructBuilder::new("ConditionalFormattingSolidColor")
            .required("expression", &string_len(1, 4096))
            .optional("color", &color)
            .register(reg);
        let gradient_stop = StructBuilder::new("GradientStop")
            .required("gradient_offset", &float)
            .optional("color", &color)
            .optional("data_value", &float)
            .register(reg);
        let gradient_color = StructBuilder::new("GradientColor")
            .list("stops", &gradient_stop, 0, 100)
            .register(reg);
        let gradient = StructBuilder::new("ConditionalFormattingGradientColor")
            .required("color", &gradient_color)
            .required("expression", &string_len(1, 4096))
            .register(reg);
        let conditional_color = OneOfBuilder::new("ConditionalFormattingColor")
            .variant("gradient", &gradient)
            .variant("solid", &solid)
            .register(reg);

        Self {
            id,
            name,
            label,
            title,
            field_id,
            expression,
            parameter_name,
            data_set_identifier,
            color,
            color_alpha,
            float,
            integer,
            boolean,
            timestamp,
            length,
            visibility,
            status,
            sort_direction,
            time_granularity,
            column,
            aggregation_function,
            numerical_aggregation_function,
            font_configuration,
            label_options,
            visual_title,
            visual_subtitle,
            data_path_value,
            rolling_date,
            spacing,
            column_hierarchy,
            custom_action,
            field_sort_options,
            column_sort,
            items_limit,
            pagination,
            conditional_color,
            visibility_options,
        }
    }

    fn drill_down_filter(
        reg: &mut Registry,
        column: &Node,
        float: &Node,
        timestamp: &Node,
        time_granularity: &Node,
    ) -> Node {
        let category = StructBuilder::new("CategoryDrillDownFilter")
            .list("category_values", &string_len(0, 512), 0, 100_000)
            .required("column", column)
            .register(reg);
        let numeric_equality = StructBuilder::new("NumericEqualityDrillDownFilter")
            .required("column", column)
            .required("value", float)
            .register(reg);
        let time_range = StructBuilder::new("TimeRangeDrillDownFilter")
            .required("column", column)
            .required("range_maximum", timestamp)
            .required("range_minimum", timestamp)
            .required("time_granularity", time_granularity)
            .register(reg);
        OneOfBuilder::new("DrillDownFilter")
            .variant("category_filter", &category)
            .variant("numeric_equality_filter", &numeric_equality)
            .variant("time_range_filter", &time_range)
            .register(reg)
    }

    fn column_hierarchy(reg: &mut Registry, id: &Node, column: &Node, drill_down_filter: &Node) -> Node {
        let date_time = StructBuilder::new("DateTimeHierarchy")
            .required("hierarchy_id", id)
            .list("drill_down_filters", drill_down_filter, 0, 10)
            .register(reg);
        let explicit = StructBuilder::new("ExplicitHierarchy")
            .list("columns", column, 2, 10)
            .required("hierarchy_id", id)
            .list("drill_down_filters", drill_down_filter, 0, 10)
            .register(reg);
        let predefined = StructBuilder::new("PredefinedHierarchy")
            .list("columns", column, 1, 10)
            .required("hierarchy_id", id)
            .list("drill_down_filters", drill_down_filter, 0, 10)
            .register(reg);
        OneOfBuilder::new("ColumnHierarchy")
            .variant("date_time_hierarchy", &date_time)
            .variant("explicit_hierarchy", &explicit)
            .variant("predefined_hierarchy", &predefined)
            .register(reg)
    }

    fn custom_action(
        reg: &mut Registry,
        id: &Node,
        parameter_name: &Node,
        float: &Node,
        integer: &Node,
        timestamp: &Node,
        status: &Node,
    ) -> Node {
        let selected_fields = StructBuilder::new("FilterOperationSelectedFieldsConfiguration")
            .optional("selected_field_options", &enumeration(SELECTED_FIELD_OPTIONS))
            .list("selected_fields", &string_len(1, 512), 0, 20)
            .register(reg);
        let same_sheet = StructBuilder::new("SameSheetTargetVisualConfiguration")
            .optional("target_visual_options", &enumeration(TARGET_VISUAL_OPTIONS))
            .set("target_visuals", id, 0, 30)
            .register(reg);
        let target_visuals = StructBuilder::new("FilterOperationTargetVisualsConfiguration")
            .optional("same_sheet_target_visual_configuration", &same_sheet)
            .register(reg);
        let filter_operation = StructBuilder::new("CustomActionFilterOperation")
            .required("selected_fields_configuration", &selected_fields)
            .required("target_visuals_configuration", &target_visuals)
            .register(reg);

        let local_navigation = StructBuilder::new("LocalNavigationConfiguration")
            .required("target_sheet_id", id)
            .register(reg);
        let navigation_operation = StructBuilder::new("CustomActionNavigationOperation")
            .optional("local_navigation_configuration", &local_navigation)
            .register(reg);

        let custom_values = StructBuilder::new("CustomParameterValues")
            .list("date_time_values", timestamp, 0, 50_000)
            .list("decimal_values", float, 0, 50_000)
            .list("integer_values", integer, 0, 50_000)
            .list("string_values", &string(), 0, 50_000)
            .register(reg);
        let custom_values_configuration = StructBuilder::new("CustomValuesConfiguration")
            .required("custom_values", &custom_values)
            .optional("include_null_value", &boolean())
            .register(reg);
        let destination = StructBuilder::new("DestinationParameterValueConfiguration")
            .optional("custom_values_configuration", &custom_values_configuration)
            .optional("select_all_value_options", &enumeration(SELECT_ALL_VALUE_OPTIONS))
            .optional("source_field", &string_len(1, 512))
            .optional("source_parameter_name", parameter_name)
            .register(reg);
        let set_parameter_value = StructBuilder::new("SetParameterValueConfiguration")
            .required("destination_parameter_name", parameter_name)
            .required("value", &destination)
            .register(reg);
        let set_parameters_operation = StructBuilder::new("CustomActionSetParametersOperation")
            .list("parameter_value_configurations", &set_parameter_value, 1, 200)
            .register(reg);

        let url_operation = StructBuilder::new("CustomActionURLOperation")
            .required("url_target", &enumeration(URL_TARGET))
            .required("url_template", &string_len(1, 2048))
            .register(reg);

        let operation = OneOfBuilder::new("VisualCustomActionOperation")
            .variant("filter_operation", &filter_operation)
            .variant("navigation_operation", &navigation_operation)
            .variant("set_parameters_operation", &set_parameters_operation)
            .variant("url_operation", &url_operation)
            .wire("URLOperation")
            .register(reg);

        StructBuilder::new("VisualCustomAction")
            .list("action_operations", &operation, 1, 2)
            .required("custom_action_id", id)
            .required("name", &string_len(1, 256))
            .required("trigger", &enumeration(CUSTOM_ACTION_TRIGGER))
            .optional("status", status)
            .register(reg)
    }
}
