//! Building blocks shared by chart configurations: dimension and measure
//! fields, legends, tooltips, palettes, data labels, axes and reference lines

use super::Node;
use super::common::Common;
use super::enums::*;
use super::format::Formats;
use crate::schema::builder::*;
use crate::schema::{OneOfBuilder, Registry, StructBuilder};

pub(crate) struct ChartParts {
    pub dimension_field: Node,
    pub measure_field: Node,
    pub legend: Node,
    pub tooltip: Node,
    pub visual_palette: Node,
    pub data_labels: Node,
    pub color_scale: Node,
    pub axis_display_options: Node,
    pub axis_label_options: Node,
    pub reference_line: Node,
    pub small_multiples_options: Node,
    pub contribution_analysis_default: Node,
    pub geospatial_window_options: Node,
    pub geospatial_map_style_options: Node,
    pub arc_axis_range: Node,
}

impl ChartParts {
    pub(crate) fn build(reg: &mut Registry, common: &Common, formats: &Formats) -> Self {
        let dimension_field = dimension_field(reg, common, formats);
        let measure_field = measure_field(reg, common, formats);

        let legend = StructBuilder::new("LegendOptions")
            .optional("height", &common.length)
            .optional("position", &enumeration(LEGEND_POSITION))
            .optional("title", &common.label_options)
            .optional("visibility", &common.visibility)
            .optional("width", &common.length)
            .register(reg);

        let tooltip = tooltip(reg, common);

        let data_path_color = StructBuilder::new("DataPathColor")
            .required("color", &common.color)
            .required("element", &common.data_path_value)
            .optional("time_granularity", &common.time_granularity)
            .register(reg);
        let visual_palette = StructBuilder::new("VisualPalette")
            .optional("chart_color", &common.color)
            .list("color_map", &data_path_color, 0, 5000)
            .register(reg);

        let data_labels = data_labels(reg, common);

        let data_color = StructBuilder::new("DataColor")
            .optional("color", &common.color)
            .optional("data_value", &common.float)
            .register(reg);
        let color_scale = StructBuilder::new("ColorScale")
            .required("color_fill_type", &enumeration(COLOR_FILL_TYPE))
            .list("colors", &data_color, 2, 3)
            .optional("null_value_color", &data_color)
            .register(reg);

        let axis_display_options = axis_display_options(reg, common);

        let apply_to = StructBuilder::new("AxisLabelReferenceOptions")
            .required("column", &common.column)
            .required("field_id", &common.field_id)
            .register(reg);
        let axis_label = StructBuilder::new("AxisLabelOptions")
            .optional("apply_to", &apply_to)
            .optional("custom_label", &common.label)
            .optional("font_configuration", &common.font_configuration)
            .register(reg);
        let axis_label_options = StructBuilder::new("ChartAxisLabelOptions")
            .list("axis_label_options", &axis_label, 0, 100)
            .optional("sort_icon_visibility", &common.visibility)
            .optional("visibility", &common.visibility)
            .register(reg);

        let reference_line = reference_line(reg, common, formats);

        let panel_title = StructBuilder::new("PanelTitleOptions")
            .optional("font_configuration", &common.font_configuration)
            .optional("horizontal_text_alignment", &enumeration(HORIZONTAL_TEXT_ALIGNMENT))
            .optional("visibility", &common.visibility)
            .register(reg);
        let panel = StructBuilder::new("PanelConfiguration")
            .optional("background_color", &common.color)
            .optional("background_visibility", &common.visibility)
            .optional("border_color", &common.color)
            .optional("border_style", &enumeration(LINE_PATTERN))
            .optional("border_thickness", &common.length)
            .optional("border_visibility", &common.visibility)
            .optional("gutter_spacing", &common.length)
            .optional("gutter_visibility", &common.visibility)
            .optional("title", &panel_title)
            .register(reg);
        let small_multiples_options = StructBuilder::new("SmallMultiplesOptions")
            .optional("max_visible_columns", &int_range(1, 10))
            .optional("max_visible_rows", &int_range(1, 10))
            .optional("panel_configuration", &panel)
            .register(reg);

        let contribution_analysis_default = StructBuilder::new("ContributionAnalysisDefault")
            .list("contributor_dimensions", &common.column, 1, 4)
            .required("measure_field_id", &common.field_id)
            .register(reg);

        let bounds = StructBuilder::new("GeospatialCoordinateBounds")
            .required("east", &float_range(-1800.0, 1800.0))
            .required("north", &float_range(-90.0, 90.0))
            .required("south", &float_range(-90.0, 90.0))
            .required("west", &float_range(-1800.0, 1800.0))
            .register(reg);
        let geospatial_window_options = StructBuilder::new("GeospatialWindowOptions")
            .optional("bounds", &bounds)
            .optional("map_zoom_mode", &enumeration(MAP_ZOOM_MODE))
            .register(reg);
        let geospatial_map_style_options = StructBuilder::new("GeospatialMapStyleOptions")
            .optional("base_map_style", &enumeration(BASE_MAP_STYLE))
            .register(reg);
        let arc_axis_range = StructBuilder::new("ArcAxisDisplayRange")
            .optional("max", &common.float)
            .optional("min", &common.float)
            .register(reg);

        Self {
            dimension_field,
            measure_field,
            legend,
            tooltip,
            visual_palette,
            data_labels,
            color_scale,
            axis_display_options,
            axis_label_options,
            reference_line,
            small_multiples_options,
            contribution_analysis_default,
            geospatial_window_options,
            geospatial_map_style_options,
            arc_axis_range,
        }
    }
}

fn dimension_field(reg: &mut Registry, common: &Common, formats: &Formats) -> Node {
    let categorical = StructBuilder::new("CategoricalDimensionField")
        .required("column", &common.column)
        .required("field_id", &common.field_id)
        .optional("format_configuration", &formats.string_format_configuration)
        .optional("hierarchy_id", &common.id)
        .register(reg);
    let date = StructBuilder::new("DateDimensionField")
        .required("column", &common.column)
        .required("field_id", &common.field_id)
        .optional("date_granularity", &common.time_granularity)
        .optional("format_configuration", &formats.date_time_format_configuration)
        .optional("hierarchy_id", &common.id)
        .register(reg);
    let numerical = StructBuilder::new("NumericalDimensionField")
        .required("column", &common.column)
        .required("field_id", &common.field_id)
        .optional("format_configuration", &formats.number_format_configuration)
        .optional("hierarchy_id", &common.id)
        .register(reg);
    OneOfBuilder::new("DimensionField")
        .variant("categorical_dimension_field", &categorical)
        .variant("date_dimension_field", &date)
        .variant("numerical_dimension_field", &numerical)
        .register(reg)
}

fn measure_field(reg: &mut Registry, common: &Common, formats: &Formats) -> Node {
    let calculated = StructBuilder::new("CalculatedMeasureField")
        .required("expression", &common.expression)
        .required("field_id", &common.field_id)
        .register(reg);
    let categorical = StructBuilder::new("CategoricalMeasureField")
        .required("column", &common.column)
        .required("field_id", &common.field_id)
        .optional("aggregation_function", &enumeration(CATEGORICAL_AGGREGATION))
        .optional("format_configuration", &formats.string_format_configuration)
        .register(reg);
    let date = StructBuilder::new("DateMeasureField")
        .required("column", &common.column)
        .required("field_id", &common.field_id)
        .optional("aggregation_function", &enumeration(DATE_AGGREGATION))
        .optional("format_configuration", &formats.date_time_format_configuration)
        .register(reg);
    let numerical = StructBuilder::new("NumericalMeasureField")
        .required("column", &common.column)
        .required("field_id", &common.field_id)
        .optional("aggregation_function", &common.numerical_aggregation_function)
        .optional("format_configuration", &formats.number_format_configuration)
        .register(reg);
    OneOfBuilder::new("MeasureField")
        .variant("calculated_measure_field", &calculated)
        .variant("categorical_measure_field", &categorical)
        .variant("date_measure_field", &date)
        .variant("numerical_measure_field", &numerical)
        .register(reg)
}

fn tooltip(reg: &mut Registry, common: &Common) -> Node {
    let column_item = StructBuilder::new("ColumnTooltipItem")
        .required("column", &common.column)
        .optional("aggregation", &common.aggregation_function)
        .optional("label", &common.label)
        .optional("visibility", &common.visibility)
        .register(reg);
    let field_item = StructBuilder::new("FieldTooltipItem")
        .required("field_id", &common.field_id)
        .optional("label", &common.label)
        .optional("visibility", &common.visibility)
        .register(reg);
    let item = OneOfBuilder::new("TooltipItem")
        .variant("column_tooltip_item", &column_item)
        .variant("field_tooltip_item", &field_item)
        .register(reg);
    let field_based = StructBuilder::new("FieldBasedTooltip")
        .optional("aggregation_visibility", &common.visibility)
        .list("tooltip_fields", &item, 0, 100)
        .optional("tooltip_title_type", &enumeration(TOOLTIP_TITLE_TYPE))
        .register(reg);
    StructBuilder::new("TooltipOptions")
        .optional("field_base_tooltip", &field_based)
        .wire("FieldBasedTooltip")
        .optional("selected_tooltip_type", &enumeration(SELECTED_TOOLTIP_TYPE))
        .optional("tooltip_visibility", &common.visibility)
        .register(reg)
}

fn data_labels(reg: &mut Registry, common: &Common) -> Node {
    let data_path = StructBuilder::new("DataPathLabelType")
        .optional("field_id", &common.field_id)
        .optional("field_value", &string_len(0, 2048))
        .optional("visibility", &common.visibility)
        .register(reg);
    let field = StructBuilder::new("FieldLabelType")
        .optional("field_id", &common.field_id)
        .optional("visibility", &common.visibility)
        .register(reg);
    let maximum = StructBuilder::new("MaximumLabelType")
        .optional("visibility", &common.visibility)
        .register(reg);
    let minimum = StructBuilder::new("MinimumLabelType")
        .optional("visibility", &common.visibility)
        .register(reg);
    let range_ends = StructBuilder::new("RangeEndsLabelType")
        .optional("visibility", &common.visibility)
        .register(reg);
    let label_type = OneOfBuilder::new("DataLabelType")
        .variant("data_path_label_type", &data_path)
        .variant("field_label_type", &field)
        .variant("maximum_label_type", &maximum)
        .variant("minimum_label_type", &minimum)
        .variant("range_ends_label_type", &range_ends)
        .register(reg);
    StructBuilder::new("DataLabelOptions")
        .optional("category_label_visibility", &common.visibility)
        .list("data_label_types", &label_type, 0, 100)
        .optional("label_color", &common.color)
        .optional("label_content", &enumeration(DATA_LABEL_CONTENT))
        .optional("label_font_configuration", &common.font_configuration)
        .optional("measure_label_visibility", &common.visibility)
        .optional("overlap", &enumeration(DATA_LABEL_OVERLAP))
        .optional("position", &enumeration(DATA_LABEL_POSITION))
        .optional("visibility", &common.visibility)
        .register(reg)
}

fn axis_display_options(reg: &mut Registry, common: &Common) -> Node {
    let data_driven = StructBuilder::new("AxisDisplayDataDrivenRange").register(reg);
    let min_max = StructBuilder::new("AxisDisplayMinMaxRange")
        .optional("maximum", &common.float)
        .optional("minimum", &common.float)
        .register(reg);
    let range = OneOfBuilder::new("AxisDisplayRange")
        .variant("data_driven", &data_driven)
        .variant("min_max", &min_max)
        .register(reg);
    let linear = StructBuilder::new("AxisLinearScale")
        .optional("step_count", &common.integer)
        .optional("step_size", &common.float)
        .register(reg);
    let logarithmic = StructBuilder::new("AxisLogarithmicScale")
        .optional("base", &common.float)
        .register(reg);
    let scale = OneOfBuilder::new("AxisScale")
        .variant("linear", &linear)
        .variant("logarithmic", &logarithmic)
        .register(reg);
    let numeric = StructBuilder::new("NumericAxisOptions")
        .optional("range", &range)
        .optional("scale", &scale)
        .register(reg);
    let date = StructBuilder::new("DateAxisOptions")
        .optional("missing_date_visibility", &common.visibility)
        .register(reg);
    let data_options = OneOfBuilder::new("AxisDataOptions")
        .variant("date_axis_options", &date)
        .variant("numeric_axis_options", &numeric)
        .register(reg);

    let percent_range = StructBuilder::new("PercentVisibleRange")
        .optional("from", &float_range(0.0, 100.0))
        .optional("to", &float_range(0.0, 100.0))
        .register(reg);
    let visible_range = StructBuilder::new("VisibleRangeOptions")
        .optional("percent_range", &percent_range)
        .register(reg);
    let scrollbar = StructBuilder::new("ScrollBarOptions")
        .optional("visibility", &common.visibility)
        .optional("visible_range", &visible_range)
        .register(reg);
    let tick_labels = StructBuilder::new("AxisTickLabelOptions")
        .optional("label_options", &common.label_options)
        .optional("rotation_angle", &float_range(-360.0, 360.0))
        .register(reg);

    StructBuilder::new("AxisDisplayOptions")
        .optional("axis_line_visibility", &common.visibility)
        .optional("axis_offset", &common.length)
        .optional("data_options", &data_options)
        .optional("grid_line_visibility", &common.visibility)
        .optional("scrollbar_options", &scrollbar)
        .optional("tick_label_options", &tick_labels)
        .register(reg)
}

fn reference_line(reg: &mut Registry, common: &Common, formats: &Formats) -> Node {
    let dynamic = StructBuilder::new("ReferenceLineDynamicDataConfiguration")
        .required("calculation", &common.numerical_aggregation_function)
        .required("column", &common.column)
        .required("measure_aggregation_function", &common.aggregation_function)
        .register(reg);
    let static_configuration = StructBuilder::new("ReferenceLineStaticDataConfiguration")
        .required("value", &common.float)
        .register(reg);
    let data = StructBuilder::new("ReferenceLineDataConfiguration")
        .optional("axis_binding", &enumeration(AXIS_BINDING))
        .optional("dynamic_configuration", &dynamic)
        .optional("static_configuration", &static_configuration)
        .register(reg);

    let custom_label = StructBuilder::new("ReferenceLineCustomLabelConfiguration")
        .required("custom_label", &common.label)
        .register(reg);
    let value_label = StructBuilder::new("ReferenceLineValueLabelConfiguration")
        .optional("format_configuration", &formats.numeric_format_configuration)
        .optional("relative_position", &enumeration(VALUE_LABEL_RELATIVE_POSITION))
        .register(reg);
    let label = StructBuilder::new("ReferenceLineLabelConfiguration")
        .optional("custom_label_configuration", &custom_label)
        .optional("font_color", &common.color)
        .optional("font_configuration", &common.font_configuration)
        .optional("horizontal_position", &enumeration(HORIZONTAL_POSITION))
        .optional("value_label_configuration", &value_label)
        .optional("vertical_position", &enumeration(VERTICAL_POSITION))
        .register(reg);
    let style = StructBuilder::new("ReferenceLineStyleConfiguration")
        .optional("color", &common.color)
        .optional("pattern", &enumeration(LINE_PATTERN))
        .register(reg);

    StructBuilder::new("ReferenceLine")
        .required("data_configuration", &data)
        .optional("label_configuration", &label)
        .optional("status", &common.status)
        .optional("style_configuration", &style)
        .register(reg)
}
