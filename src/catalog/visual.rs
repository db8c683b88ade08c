//! The `Visual` oneof and its 23 visual kinds

use super::Node;
use super::chart::ChartParts;
use super::common::Common;
use super::enums::*;
use super::format::Formats;
use super::table::{self, TableStyles};
use crate::schema::builder::*;
use crate::schema::{OneOfBuilder, Registry, StructBuilder};

struct Ctx<'a> {
    common: &'a Common,
    formats: &'a Formats,
    parts: &'a ChartParts,
}

/// Register every visual kind and return the `Visual` oneof
pub(crate) fn build(reg: &mut Registry, common: &Common, formats: &Formats, parts: &ChartParts) -> Node {
    let ctx = Ctx { common, formats, parts };
    let table_styles = TableStyles::build(reg, common);

    let table_nodes = table::table(reg, common, formats, parts, &table_styles);
    let table_visual = visual("TableVisual", common)
        .optional("chart_configuration", &table_nodes.chart_configuration)
        .optional("conditional_formatting", &table_nodes.conditional_formatting)
        .register(reg);
    let pivot = table::pivot_table(reg, common, parts, &table_styles);
    let pivot_table_visual = visual("PivotTableVisual", common)
        .optional("chart_configuration", &pivot.chart_configuration)
        .optional("conditional_formatting", &pivot.conditional_formatting)
        .register(reg);

    OneOfBuilder::new("Visual")
        .variant("bar_chart_visual", &bar_chart(reg, &ctx))
        .variant("box_plot_visual", &box_plot(reg, &ctx))
        .variant("combo_chart_visual", &combo_chart(reg, &ctx))
        .variant("custom_content_visual", &custom_content(reg, &ctx))
        .variant("empty_visual", &empty(reg, &ctx))
        .variant("filled_map_visual", &filled_map(reg, &ctx))
        .variant("funnel_chart_visual", &funnel_chart(reg, &ctx))
        .variant("gauge_chart_visual", &gauge_chart(reg, &ctx))
        .variant("geospatial_map_visual", &geospatial_map(reg, &ctx))
        .variant("heat_map_visual", &heat_map(reg, &ctx))
        .variant("histogram_visual", &histogram(reg, &ctx))
        .variant("insight_visual", &insight(reg, &ctx))
        .variant("kpi_visual", &kpi(reg, &ctx))
        .wire("KPIVisual")
        .variant("line_chart_visual", &line_chart(reg, &ctx))
        .variant("pie_chart_visual", &pie_chart(reg, &ctx))
        .variant("pivot_table_visual", &pivot_table_visual)
        .variant("radar_chart_visual", &radar_chart(reg, &ctx))
        .variant("sankey_diagram_visual", &sankey_diagram(reg, &ctx))
        .variant("scatter_plot_visual", &scatter_plot(reg, &ctx))
        .variant("table_visual", &table_visual)
        .variant("tree_map_visual", &tree_map(reg, &ctx))
        .variant("waterfall_visual", &waterfall(reg, &ctx))
        .variant("word_cloud_visual", &word_cloud(reg, &ctx))
        .register(reg)
}

/// Fields every visual carries
fn visual(name: &str, common: &Common) -> StructBuilder {
    StructBuilder::new(name)
        .required("visual_id", &common.id)
        .list("actions", &common.custom_action, 0, 10)
        .optional("subtitle", &common.visual_subtitle)
        .optional("title", &common.visual_title)
}

/// A visual that also supports drill-down hierarchies
fn hierarchical_visual(name: &str, common: &Common) -> StructBuilder {
    visual(name, common).list("column_hierarchies", &common.column_hierarchy, 0, 2)
}

fn field_wells(reg: &mut Registry, name: &str, wells: StructBuilder, member: &str) -> Node {
    let wells = wells.register(reg);
    StructBuilder::new(name).optional(member, &wells).register(reg)
}

fn bar_chart(reg: &mut Registry, ctx: &Ctx) -> Node {
    let (c, p) = (ctx.common, ctx.parts);
    let wells = field_wells(
        reg,
        "BarChartFieldWells",
        StructBuilder::new("BarChartAggregatedFieldWells")
            .list("category", &p.dimension_field, 0, 200)
            .list("colors", &p.dimension_field, 0, 200)
            .list("small_multiples", &p.dimension_field, 0, 1)
            .list("values", &p.measure_field, 0, 200),
        "bar_chart_aggregated_field_wells",
    );
    let sort = StructBuilder::new("BarChartSortConfiguration")
        .optional("category_items_limit", &c.items_limit)
        .list("category_sort", &c.field_sort_options, 0, 100)
        .optional("color_items_limit", &c.items_limit)
        .list("color_sort", &c.field_sort_options, 0, 100)
        .optional("small_multiples_limit_configuration", &c.items_limit)
        .list("small_multiples_sort", &c.field_sort_options, 0, 100)
        .register(reg);
    let configuration = StructBuilder::new("BarChartConfiguration")
        .optional("bars_arrangement", &enumeration(BARS_ARRANGEMENT))
        .optional("category_axis", &p.axis_display_options)
        .optional("category_label_options", &p.axis_label_options)
        .optional("color_label_options", &p.axis_label_options)
        .list("contribution_analysis_defaults", &p.contribution_analysis_default, 0, 200)
        .optional("data_labels", &p.data_labels)
        .optional("field_wells", &wells)
        .optional("legend", &p.legend)
        .optional("orientation", &enumeration(ORIENTATION))
        .list("reference_lines", &p.reference_line, 0, 20)
        .optional("small_multiples_options", &p.small_multiples_options)
        .optional("sort_configuration", &sort)
        .optional("tooltip", &p.tooltip)
        .optional("value_axis", &p.axis_display_options)
        .optional("value_label_options", &p.axis_label_options)
        .optional("visual_palette", &p.visual_palette)
        .register(reg);
    hierarchical_visual("BarChartVisual", c)
        .optional("chart_configuration", &configuration)
        .register(reg)
}

fn box_plot(reg: &mut Registry, ctx: &Ctx) -> Node {
    let (c, p) = (ctx.common, ctx.parts);
    let wells = field_wells(
        reg,
        "BoxPlotFieldWells",
        StructBuilder::new("BoxPlotAggregatedFieldWells")
            .list("group_by", &p.dimension_field, 0, 1)
            .list("values", &p.measure_field, 0, 5),
        "box_plot_aggregated_field_wells",
    );
    let style = StructBuilder::new("BoxPlotStyleOptions")
        .optional("fill_style", &enumeration(&["SOLID", "TRANSPARENT"]))
        .register(reg);
    let options = StructBuilder::new("BoxPlotOptions")
        .optional("all_data_points_visibility", &c.visibility)
        .optional("outlier_visibility", &c.visibility)
        .optional("style_options", &style)
        .register(reg);
    let sort = StructBuilder::new("BoxPlotSortConfiguration")
        .list("category_sort", &c.field_sort_options, 0, 100)
        .optional("pagination_configuration", &c.pagination)
        .register(reg);
    let configuration = StructBuilder::new("BoxPlotChartConfiguration")
        .optional("box_plot_options", &options)
        .optional("category_axis", &p.axis_display_options)
        .optional("category_label_options", &p.axis_label_options)
        .optional("field_wells", &wells)
        .optional("legend", &p.legend)
        .optional("primary_y_axis_display_options", &p.axis_display_options)
        .optional("primary_y_axis_label_options", &p.axis_label_options)
        .list("reference_lines", &p.reference_line, 0, 20)
        .optional("sort_configuration", &sort)
        .optional("tooltip", &p.tooltip)
        .optional("visual_palette", &p.visual_palette)
        .register(reg);
    hierarchical_visual("BoxPlotVisual", c)
        .optional("chart_configuration", &configuration)
        .register(reg)
}

fn combo_chart(reg: &mut Registry, ctx: &Ctx) -> Node {
    let (c, p) = (ctx.common, ctx.parts);
    let wells = field_wells(
        reg,
        "ComboChartFieldWells",
        StructBuilder::new("ComboChartAggregatedFieldWells")
            .list("bar_values", &p.measure_field, 0, 200)
            .list("category", &p.dimension_field, 0, 200)
            .list("colors", &p.dimension_field, 0, 200)
            .list("line_values", &p.measure_field, 0, 200),
        "combo_chart_aggregated_field_wells",
    );
    let sort = StructBuilder::new("ComboChartSortConfiguration")
        .optional("category_items_limit", &c.items_limit)
        .list("category_sort", &c.field_sort_options, 0, 100)
        .optional("color_items_limit", &c.items_limit)
        .list("color_sort", &c.field_sort_options, 0, 100)
        .register(reg);
    let configuration = StructBuilder::new("ComboChartConfiguration")
        .optional("bar_data_labels", &p.data_labels)
        .optional("bars_arrangement", &enumeration(BARS_ARRANGEMENT))
        .optional("category_axis", &p.axis_display_options)
        .optional("category_label_options", &p.axis_label_options)
        .optional("color_label_options", &p.axis_label_options)
        .optional("field_wells", &wells)
        .optional("legend", &p.legend)
        .optional("line_data_labels", &p.data_labels)
        .optional("primary_y_axis_display_options", &p.axis_display_options)
        .optional("primary_y_axis_label_options", &p.axis_label_options)
        .list("reference_lines", &p.reference_line, 0, 20)
        .optional("secondary_y_axis_display_options", &p.axis_display_options)
        .optional("secondary_y_axis_label_options", &p.axis_label_options)
        .optional("sort_configuration", &sort)
        .optional("tooltip", &p.tooltip)
        .optional("visual_palette", &p.visual_palette)
        .register(reg);
    hierarchical_visual("ComboChartVisual", c)
        .optional("chart_configuration", &configuration)
        .register(reg)
}

fn custom_content(reg: &mut Registry, ctx: &Ctx) -> Node {
    let c = ctx.common;
    let configuration = StructBuilder::new("CustomContentConfiguration")
        .optional("content_type", &enumeration(&["IMAGE", "OTHER_EMBEDDED_CONTENT"]))
        .optional("content_url", &string_len(1, 2048))
        .optional(
            "image_scaling",
            &enumeration(&["FIT_TO_HEIGHT", "FIT_TO_WIDTH", "DO_NOT_SCALE", "SCALE_TO_VISUAL"]),
        )
        .register(reg);
    visual("CustomContentVisual", c)
        .required("data_set_identifier", &c.data_set_identifier)
        .optional("chart_configuration", &configuration)
        .register(reg)
}

fn empty(reg: &mut Registry, ctx: &Ctx) -> Node {
    let c = ctx.common;
    StructBuilder::new("EmptyVisual")
        .required("data_set_identifier", &c.data_set_identifier)
        .required("visual_id", &c.id)
        .list("actions", &c.custom_action, 0, 10)
        .register(reg)
}

fn filled_map(reg: &mut Registry, ctx: &Ctx) -> Node {
    let (c, p) = (ctx.common, ctx.parts);
    let wells = field_wells(
        reg,
        "FilledMapFieldWells",
        StructBuilder::new("FilledMapAggregatedFieldWells")
            .list("geospatial", &p.dimension_field, 0, 1)
            .list("values", &p.measure_field, 0, 1),
        "filled_map_aggregated_field_wells",
    );
    let sort = StructBuilder::new("FilledMapSortConfiguration")
        .list("category_sort", &c.field_sort_options, 0, 100)
        .register(reg);
    let configuration = StructBuilder::new("FilledMapConfiguration")
        .optional("field_wells", &wells)
        .optional("legend", &p.legend)
        .optional("map_style_options", &p.geospatial_map_style_options)
        .optional("sort_configuration", &sort)
        .optional("tooltip", &p.tooltip)
        .optional("window_options", &p.geospatial_window_options)
        .register(reg);

    let shape_format = StructBuilder::new("ShapeConditionalFormat")
        .required("background_color", &c.conditional_color)
        .register(reg);
    let shape = StructBuilder::new("FilledMapShapeConditionalFormatting")
        .required("field_id", &c.field_id)
        .optional("format", &shape_format)
        .register(reg);
    let option = StructBuilder::new("FilledMapConditionalFormattingOption")
        .required("shape", &shape)
        .register(reg);
    let conditional_formatting = StructBuilder::new("FilledMapConditionalFormatting")
        .list("conditional_formatting_options", &option, 1, 200)
        .register(reg);

    hierarchical_visual("FilledMapVisual", c)
        .optional("chart_configuration", &configuration)
        .optional("conditional_formatting", &conditional_formatting)
        .register(reg)
}

fn funnel_chart(reg: &mut Registry, ctx: &Ctx) -> Node {
    let (c, p) = (ctx.common, ctx.parts);
    let wells = field_wells(
        reg,
        "FunnelChartFieldWells",
        StructBuilder::new("FunnelChartAggregatedFieldWells")
            .list("category", &p.dimension_field, 0, 1)
            .list("values", &p.measure_field, 0, 1),
        "funnel_chart_aggregated_field_wells",
    );
    let data_labels = StructBuilder::new("FunnelChartDataLabelOptions")
        .optional("category_label_visibility", &c.visibility)
        .optional("label_color", &c.color)
        .optional("label_font_configuration", &c.font_configuration)
        .optional(
            "measure_data_label_style",
            &enumeration(&[
                "VALUE_ONLY",
                "PERCENTAGE_BY_FIRST_STAGE",
                "PERCENTAGE_BY_PREVIOUS_STAGE",
                "VALUE_AND_PERCENTAGE_BY_FIRST_STAGE",
                "VALUE_AND_PERCENTAGE_BY_PREVIOUS_STAGE",
            ]),
        )
        .optional("measure_label_visibility", &c.visibility)
        .optional("position", &enumeration(DATA_LABEL_POSITION))
        .optional("visibility", &c.visibility)
        .register(reg);
    let sort = StructBuilder::new("FunnelChartSortConfiguration")
        .optional("category_items_limit", &c.items_limit)
        .list("category_sort", &c.field_sort_options, 0, 100)
        .register(reg);
    let configuration = StructBuilder::new("FunnelChartConfiguration")
        .optional("category_label_options", &p.axis_label_options)
        .optional("data_label_options", &data_labels)
        .optional("field_wells", &wells)
        .optional("sort_configuration", &sort)
        .optional("tooltip", &p.tooltip)
        .optional("value_label_options", &p.axis_label_options)
        .optional("visual_palette", &p.visual_palette)
        .register(reg);
    hierarchical_visual("FunnelChartVisual", c)
        .optional("chart_configuration", &configuration)
        .register(reg)
}

fn gauge_chart(reg: &mut Registry, ctx: &Ctx) -> Node {
    let (c, f, p) = (ctx.common, ctx.formats, ctx.parts);
    let wells = StructBuilder::new("GaugeChartFieldWells")
        .list("target_values", &p.measure_field, 0, 1)
        .list("values", &p.measure_field, 0, 1)
        .register(reg);
    let arc = StructBuilder::new("ArcConfiguration")
        .optional("arc_angle", &c.float)
        .optional("arc_thickness", &enumeration(&["SMALL", "MEDIUM", "LARGE"]))
        .register(reg);
    let arc_axis = StructBuilder::new("ArcAxisConfiguration")
        .optional("range", &p.arc_axis_range)
        .optional("reserve_range", &c.integer)
        .register(reg);
    let options = StructBuilder::new("GaugeChartOptions")
        .optional("arc", &arc)
        .optional("arc_axis", &arc_axis)
        .optional("comparison", &f.comparison_configuration)
        .optional("primary_value_display_type", &enumeration(PRIMARY_VALUE_DISPLAY_TYPE))
        .optional("primary_value_font_configuration", &c.font_configuration)
        .register(reg);
    let configuration = StructBuilder::new("GaugeChartConfiguration")
        .optional("data_labels", &p.data_labels)
        .optional("field_wells", &wells)
        .optional("gauge_chart_options", &options)
        .optional("tooltip", &p.tooltip)
        .optional("visual_palette", &p.visual_palette)
        .register(reg);

    let arc_format = StructBuilder::new("GaugeChartArcConditionalFormatting")
        .optional("foreground_color", &c.conditional_color)
        .register(reg);
    let primary_value = StructBuilder::new("GaugeChartPrimaryValueConditionalFormatting")
        .optional("text_color", &c.conditional_color)
        .register(reg);
    let option = StructBuilder::new("GaugeChartConditionalFormattingOption")
        .optional("arc", &arc_format)
        .optional("primary_value", &primary_value)
        .register(reg);
    let conditional_formatting = StructBuilder::new("GaugeChartConditionalFormatting")
        .list("conditional_formatting_options", &option, 0, 100)
        .register(reg);

    visual("GaugeChartVisual", c)
        .optional("chart_configuration", &configuration)
        .optional("conditional_formatting", &conditional_formatting)
        .register(reg)
}

fn geospatial_map(reg: &mut Registry, ctx: &Ctx) -> Node {
    let (c, p) = (ctx.common, ctx.parts);
    let wells = field_wells(
        reg,
        "GeospatialMapFieldWells",
        StructBuilder::new("GeospatialMapAggregatedFieldWells")
            .list("colors", &p.dimension_field, 0, 1)
            .list("geospatial", &p.dimension_field, 0, 1)
            .list("values", &p.measure_field, 0, 1),
        "geospatial_map_aggregated_field_wells",
    );
    let simple_marker = StructBuilder::new("SimpleClusterMarker")
        .optional("color", &c.color)
        .register(reg);
    let marker = StructBuilder::new("ClusterMarker")
        .optional("simple_cluster_marker", &simple_marker)
        .register(reg);
    let cluster = StructBuilder::new("ClusterMarkerConfiguration")
        .optional("cluster_marker", &marker)
        .register(reg);
    let point_style = StructBuilder::new("GeospatialPointStyleOptions")
        .optional("cluster_marker_configuration", &cluster)
        .optional("selected_point_style", &enumeration(&["POINT", "CLUSTER"]))
        .register(reg);
    let configuration = StructBuilder::new("GeospatialMapConfiguration")
        .optional("field_wells", &wells)
        .optional("legend", &p.legend)
        .optional("map_style_options", &p.geospatial_map_style_options)
        .optional("point_style_options", &point_style)
        .optional("tooltip", &p.tooltip)
        .optional("visual_palette", &p.visual_palette)
        .optional("window_options", &p.geospatial_window_options)
        .register(reg);
    hierarchical_visual("GeospatialMapVisual", c)
        .optional("chart_configuration", &configuration)
        .register(reg)
}

fn heat_map(reg: &mut Registry, ctx: &Ctx) -> Node {
    let (c, p) = (ctx.common, ctx.parts);
    let wells = field_wells(
        reg,
        "HeatMapFieldWells",
        StructBuilder::new("HeatMapAggregatedFieldWells")
            .list("columns", &p.dimension_field, 0, 1)
            .list("rows", &p.dimension_field, 0, 1)
            .list("values", &p.measure_field, 0, 1),
        "heat_map_aggregated_field_wells",
    );
    let sort = StructBuilder::new("HeatMapSortConfiguration")
        .optional("heat_map_column_items_limit_configuration", &c.items_limit)
        .list("heat_map_column_sort", &c.field_sort_options, 0, 100)
        .optional("heat_map_row_items_limit_configuration", &c.items_limit)
        .list("heat_map_row_sort", &c.field_sort_options, 0, 100)
        .register(reg);
    let configuration = StructBuilder::new("HeatMapConfiguration")
        .optional("color_scale", &p.color_scale)
        .optional("column_label_options", &p.axis_label_options)
        .optional("data_labels", &p.data_labels)
        .optional("field_wells", &wells)
        .optional("legend", &p.legend)
        .optional("row_label_options", &p.axis_label_options)
        .optional("sort_configuration", &sort)
        .optional("tooltip", &p.tooltip)
        .register(reg);
    hierarchical_visual("HeatMapVisual", c)
        .optional("chart_configuration", &configuration)
        .register(reg)
}

fn histogram(reg: &mut Registry, ctx: &Ctx) -> Node {
    let (c, p) = (ctx.common, ctx.parts);
    let wells = field_wells(
        reg,
        "HistogramFieldWells",
        StructBuilder::new("HistogramAggregatedFieldWells").list("values", &p.measure_field, 0, 1),
        "histogram_aggregated_field_wells",
    );
    let bin_count = StructBuilder::new("BinCountOptions")
        .optional("value", &c.integer)
        .register(reg);
    let bin_width = StructBuilder::new("BinWidthOptions")
        .optional("bin_count_limit", &int_range(0, 1000))
        .optional("value", &c.float)
        .register(reg);
    let bins = StructBuilder::new("HistogramBinOptions")
        .optional("bin_count", &bin_count)
        .optional("bin_width", &bin_width)
        .optional("selected_bin_type", &enumeration(&["BIN_COUNT", "BIN_WIDTH"]))
        .optional("start_value", &c.float)
        .register(reg);
    let configuration = StructBuilder::new("HistogramConfiguration")
        .optional("bin_options", &bins)
        .optional("data_labels", &p.data_labels)
        .optional("field_wells", &wells)
        .optional("tooltip", &p.tooltip)
        .optional("visual_palette", &p.visual_palette)
        .optional("x_axis_display_options", &p.axis_display_options)
        .optional("x_axis_label_options", &p.axis_label_options)
        .optional("y_axis_display_options", &p.axis_display_options)
        .register(reg);
    visual("HistogramVisual", c)
        .optional("chart_configuration", &configuration)
        .register(reg)
}

fn insight(reg: &mut Registry, ctx: &Ctx) -> Node {
    let (c, p) = (ctx.common, ctx.parts);
    let computation_name = string_len(0, 256);
    let maximum_minimum = StructBuilder::new("MaximumMinimumComputation")
        .required("computation_id", &c.id)
        .required("time", &p.dimension_field)
        .required("type", &enumeration(&["MAXIMUM", "MINIMUM"]))
        .optional("name", &computation_name)
        .optional("value", &p.measure_field)
        .register(reg);
    let total_aggregation = StructBuilder::new("TotalAggregationComputation")
        .required("computation_id", &c.id)
        .required("value", &p.measure_field)
        .optional("name", &computation_name)
        .register(reg);
    let unique_values = StructBuilder::new("UniqueValuesComputation")
        .required("category", &p.dimension_field)
        .required("computation_id", &c.id)
        .optional("name", &computation_name)
        .register(reg);
    let computation = OneOfBuilder::new("Computation")
        .variant("maximum_minimum", &maximum_minimum)
        .variant("total_aggregation", &total_aggregation)
        .variant("unique_values", &unique_values)
        .register(reg);
    let narrative = StructBuilder::new("CustomNarrativeOptions")
        .required("narrative", &string_len(1, 150_000))
        .register(reg);
    let configuration = StructBuilder::new("InsightConfiguration")
        .list("computations", &computation, 0, 100)
        .optional("custom_narrative", &narrative)
        .register(reg);
    visual("InsightVisual", c)
        .required("data_set_identifier", &c.data_set_identifier)
        .optional("insight_configuration", &configuration)
        .register(reg)
}

fn kpi(reg: &mut Registry, ctx: &Ctx) -> Node {
    let (c, f, p) = (ctx.common, ctx.formats, ctx.parts);
    let wells = StructBuilder::new("KPIFieldWells")
        .list("target_values", &p.measure_field, 0, 200)
        .list("trend_groups", &p.dimension_field, 0, 200)
        .list("values", &p.measure_field, 0, 200)
        .register(reg);
    let options = StructBuilder::new("KPIOptions")
        .optional("comparison", &f.comparison_configuration)
        .optional("primary_value_display_type", &enumeration(PRIMARY_VALUE_DISPLAY_TYPE))
        .optional("primary_value_font_configuration", &c.font_configuration)
        .optional("progress_bar", &c.visibility_options)
        .optional("secondary_value", &c.visibility_options)
        .optional("secondary_value_font_configuration", &c.font_configuration)
        .optional("trend_arrows", &c.visibility_options)
        .register(reg);
    let sort = StructBuilder::new("KPISortConfiguration")
        .list("trend_group_sort", &c.field_sort_options, 0, 100)
        .register(reg);
    let configuration = StructBuilder::new("KPIConfiguration")
        .optional("field_wells", &wells)
        .optional("kpi_options", &options)
        .wire("KPIOptions")
        .optional("sort_configuration", &sort)
        .register(reg);

    let primary_value = StructBuilder::new("KPIPrimaryValueConditionalFormatting")
        .optional("text_color", &c.conditional_color)
        .register(reg);
    let progress_bar = StructBuilder::new("KPIProgressBarConditionalFormatting")
        .optional("foreground_color", &c.conditional_color)
        .register(reg);
    let option = StructBuilder::new("KPIConditionalFormattingOption")
        .optional("primary_value", &primary_value)
        .optional("progress_bar", &progress_bar)
        .register(reg);
    let conditional_formatting = StructBuilder::new("KPIConditionalFormatting")
        .list("conditional_formatting_options", &option, 0, 100)
        .register(reg);

    visual("KPIVisual", c)
        .optional("chart_configuration", &configuration)
        .optional("conditional_formatting", &conditional_formatting)
        .register(reg)
}

fn line_chart(reg: &mut Registry, ctx: &Ctx) -> Node {
    let (c, p) = (ctx.common, ctx.parts);
    let wells = field_wells(
        reg,
        "LineChartFieldWells",
        StructBuilder::new("LineChartAggregatedFieldWells")
            .list("category", &p.dimension_field, 0, 200)
            .list("colors", &p.dimension_field, 0, 200)
            .list("small_multiples", &p.dimension_field, 0, 1)
            .list("values", &p.measure_field, 0, 200),
        "line_chart_aggregated_field_wells",
    );

    let line_style = StructBuilder::new("LineChartLineStyleSettings")
        .optional("line_interpolation", &enumeration(LINE_INTERPOLATION))
        .optional("line_style", &enumeration(LINE_PATTERN))
        .optional("line_visibility", &c.visibility)
        .optional("line_width", &c.length)
        .register(reg);
    let marker_style = StructBuilder::new("LineChartMarkerStyleSettings")
        .optional("marker_color", &c.color)
        .optional("marker_shape", &enumeration(MARKER_SHAPE))
        .optional("marker_size", &c.length)
        .optional("marker_visibility", &c.visibility)
        .register(reg);
    let default_series = StructBuilder::new("LineChartDefaultSeriesSettings")
        .optional("axis_binding", &enumeration(AXIS_BINDING))
        .optional("line_style_settings", &line_style)
        .optional("marker_style_settings", &marker_style)
        .register(reg);
    let series_settings = StructBuilder::new("LineChartSeriesSettings")
        .optional("line_style_settings", &line_style)
        .optional("marker_style_settings", &marker_style)
        .register(reg);
    let data_field_series = StructBuilder::new("DataFieldSeriesItem")
        .required("axis_binding", &enumeration(AXIS_BINDING))
        .required("field_id", &c.field_id)
        .optional("field_value", &string_len(0, 2048))
        .optional("settings", &series_settings)
        .register(reg);
    let field_series = StructBuilder::new("FieldSeriesItem")
        .required("axis_binding", &enumeration(AXIS_BINDING))
        .required("field_id", &c.field_id)
        .optional("settings", &series_settings)
        .register(reg);
    let series = OneOfBuilder::new("SeriesItem")
        .variant("data_field_series_item", &data_field_series)
        .variant("field_series_item", &field_series)
        .register(reg);

    let missing_data = StructBuilder::new("MissingDataConfiguration")
        .optional("treatment_option", &enumeration(MISSING_DATA_TREATMENT))
        .register(reg);
    let y_axis = StructBuilder::new("LineSeriesAxisDisplayOptions")
        .optional("axis_options", &p.axis_display_options)
        .list("missing_data_configurations", &missing_data, 0, 100)
        .register(reg);

    let forecast = forecast_configuration(reg, c);

    let sort = StructBuilder::new("LineChartSortConfiguration")
        .optional("category_items_limit_configuration", &c.items_limit)
        .list("category_sort", &c.field_sort_options, 0, 100)
        .optional("color_items_limit_configuration", &c.items_limit)
        .optional("small_multiples_limit_configuration", &c.items_limit)
        .list("small_multiples_sort", &c.field_sort_options, 0, 100)
        .register(reg);

    let configuration = StructBuilder::new("LineChartConfiguration")
        .list("contribution_analysis_defaults", &p.contribution_analysis_default, 0, 200)
        .optional("data_labels", &p.data_labels)
        .optional("default_series_settings", &default_series)
        .optional("field_wells", &wells)
        .list("forecast_configurations", &forecast, 0, 10)
        .optional("legend", &p.legend)
        .optional("primary_y_axis_display_options", &y_axis)
        .optional("primary_y_axis_label_options", &p.axis_label_options)
        .list("reference_lines", &p.reference_line, 0, 20)
        .optional("secondary_y_axis_display_options", &y_axis)
        .optional("secondary_y_axis_label_options", &p.axis_label_options)
        .list("series", &series, 0, 10)
        .optional("small_multiples_options", &p.small_multiples_options)
        .optional("sort_configuration", &sort)
        .optional("tooltip", &p.tooltip)
        .optional("type", &enumeration(LINE_CHART_TYPE))
        .optional("visual_palette", &p.visual_palette)
        .optional("x_axis_display_options", &p.axis_display_options)
        .optional("x_axis_label_options", &p.axis_label_options)
        .register(reg);

    hierarchical_visual("LineChartVisual", c)
        .optional("chart_configuration", &configuration)
        .register(reg)
}

/// Time-based forecasts with optional what-if scenarios
fn forecast_configuration(reg: &mut Registry, c: &Common) -> Node {
    let time_based = StructBuilder::new("TimeBasedForecastProperties")
        .optional("lower_boundary", &c.float)
        .optional("periods_backward", &int_range(0, 1000))
        .optional("periods_forward", &int_range(1, 1000))
        .optional("prediction_interval", &int_range(50, 95))
        .optional("seasonality", &int_range(1, 180))
        .optional("upper_boundary", &c.float)
        .register(reg);
    let what_if_point = StructBuilder::new("WhatIfPointScenario")
        .required("date", &c.timestamp)
        .required("value", &c.float)
        .register(reg);
    let what_if_range = StructBuilder::new("WhatIfRangeScenario")
        .required("end_date", &c.timestamp)
        .required("start_date", &c.timestamp)
        .required("value", &c.float)
        .register(reg);
    let scenario = OneOfBuilder::new("ForecastScenario")
        .variant("what_if_point_scenario", &what_if_point)
        .variant("what_if_range_scenario", &what_if_range)
        .register(reg);
    StructBuilder::new("ForecastConfiguration")
        .optional("forecast_properties", &time_based)
        .optional("scenario", &scenario)
        .register(reg)
}

fn pie_chart(reg: &mut Registry, ctx: &Ctx) -> Node {
    let (c, p) = (ctx.common, ctx.parts);
    let wells = field_wells(
        reg,
        "PieChartFieldWells",
        StructBuilder::new("PieChartAggregatedFieldWells")
            .list("category", &p.dimension_field, 0, 200)
            .list("small_multiples", &p.dimension_field, 0, 1)
            .list("values", &p.measure_field, 0, 200),
        "pie_chart_aggregated_field_wells",
    );
    let arc_options = StructBuilder::new("ArcOptions")
        .optional("arc_thickness", &enumeration(ARC_THICKNESS))
        .register(reg);
    let center_options = StructBuilder::new("DonutCenterOptions")
        .optional("label_visibility", &c.visibility)
        .register(reg);
    let donut = StructBuilder::new("DonutOptions")
        .optional("arc_options", &arc_options)
        .optional("donut_center_options", &center_options)
        .register(reg);
    let sort = StructBuilder::new("PieChartSortConfiguration")
        .optional("category_items_limit", &c.items_limit)
        .list("category_sort", &c.field_sort_options, 0, 100)
        .optional("small_multiples_limit_configuration", &c.items_limit)
        .list("small_multiples_sort", &c.field_sort_options, 0, 100)
        .register(reg);
    let configuration = StructBuilder::new("PieChartConfiguration")
        .optional("category_label_options", &p.axis_label_options)
        .list("contribution_analysis_defaults", &p.contribution_analysis_default, 0, 200)
        .optional("data_labels", &p.data_labels)
        .optional("donut_options", &donut)
        .optional("field_wells", &wells)
        .optional("legend", &p.legend)
        .optional("small_multiples_options", &p.small_multiples_options)
        .optional("sort_configuration", &sort)
        .optional("tooltip", &p.tooltip)
        .optional("value_label_options", &p.axis_label_options)
        .optional("visual_palette", &p.visual_palette)
        .register(reg);
    hierarchical_visual("PieChartVisual", c)
        .optional("chart_configuration", &configuration)
        .register(reg)
}

fn radar_chart(reg: &mut Registry, ctx: &Ctx) -> Node {
    let (c, p) = (ctx.common, ctx.parts);
    let wells = field_wells(
        reg,
        "RadarChartFieldWells",
        StructBuilder::new("RadarChartAggregatedFieldWells")
            .list("category", &p.dimension_field, 0, 1)
            .list("color", &p.dimension_field, 0, 1)
            .list("values", &p.measure_field, 0, 1),
        "radar_chart_aggregated_field_wells",
    );
    let area_style = StructBuilder::new("RadarChartAreaStyleSettings")
        .optional("visibility", &c.visibility)
        .register(reg);
    let series = StructBuilder::new("RadarChartSeriesSettings")
        .optional("area_style_settings", &area_style)
        .register(reg);
    let sort = StructBuilder::new("RadarChartSortConfiguration")
        .optional("category_items_limit", &c.items_limit)
        .list("category_sort", &c.field_sort_options, 0, 100)
        .optional("color_items_limit", &c.items_limit)
        .list("color_sort", &c.field_sort_options, 0, 100)
        .register(reg);
    let configuration = StructBuilder::new("RadarChartConfiguration")
        .optional("alternate_band_colors_visibility", &c.visibility)
        .optional("alternate_band_even_color", &c.color)
        .optional("alternate_band_odd_color", &c.color)
        .optional("base_series_settings", &series)
        .optional("category_axis", &p.axis_display_options)
        .optional("category_label_options", &p.axis_label_options)
        .optional("color_axis", &p.axis_display_options)
        .optional("color_label_options", &p.axis_label_options)
        .optional("field_wells", &wells)
        .optional("legend", &p.legend)
        .optional("shape", &enumeration(&["CIRCLE", "POLYGON"]))
        .optional("sort_configuration", &sort)
        .optional("start_angle", &float_range(-360.0, 360.0))
        .optional("visual_palette", &p.visual_palette)
        .register(reg);
    hierarchical_visual("RadarChartVisual", c)
        .optional("chart_configuration", &configuration)
        .register(reg)
}

fn sankey_diagram(reg: &mut Registry, ctx: &Ctx) -> Node {
    let (c, p) = (ctx.common, ctx.parts);
    let wells = field_wells(
        reg,
        "SankeyDiagramFieldWells",
        StructBuilder::new("SankeyDiagramAggregatedFieldWells")
            .list("destination", &p.dimension_field, 0, 200)
            .list("source", &p.dimension_field, 0, 200)
            .list("weight", &p.measure_field, 0, 200),
        "sankey_diagram_aggregated_field_wells",
    );
    let sort = StructBuilder::new("SankeyDiagramSortConfiguration")
        .optional("destination_items_limit", &c.items_limit)
        .optional("source_items_limit", &c.items_limit)
        .list("weight_sort", &c.field_sort_options, 0, 100)
        .register(reg);
    let configuration = StructBuilder::new("SankeyDiagramChartConfiguration")
        .optional("data_labels", &p.data_labels)
        .optional("field_wells", &wells)
        .optional("sort_configuration", &sort)
        .register(reg);
    visual("SankeyDiagramVisual", c)
        .optional("chart_configuration", &configuration)
        .register(reg)
}

fn scatter_plot(reg: &mut Registry, ctx: &Ctx) -> Node {
    let (c, p) = (ctx.common, ctx.parts);
    let categorical = StructBuilder::new("ScatterPlotCategoricallyAggregatedFieldWells")
        .list("category", &p.dimension_field, 0, 200)
        .list("label", &p.dimension_field, 0, 200)
        .list("size", &p.measure_field, 0, 200)
        .list("x_axis", &p.measure_field, 0, 200)
        .list("y_axis", &p.measure_field, 0, 200)
        .register(reg);
    let unaggregated = StructBuilder::new("ScatterPlotUnaggregatedFieldWells")
        .list("category", &p.dimension_field, 0, 200)
        .list("label", &p.dimension_field, 0, 200)
        .list("size", &p.measure_field, 0, 200)
        .list("x_axis", &p.dimension_field, 0, 200)
        .list("y_axis", &p.dimension_field, 0, 200)
        .register(reg);
    let wells = StructBuilder::new("ScatterPlotFieldWells")
        .optional("scatter_plot_categorically_aggregated_field_wells", &categorical)
        .optional("scatter_plot_unaggregated_field_wells", &unaggregated)
        .register(reg);
    let configuration = StructBuilder::new("ScatterPlotConfiguration")
        .optional("data_labels", &p.data_labels)
        .optional("field_wells", &wells)
        .optional("legend", &p.legend)
        .optional("tooltip", &p.tooltip)
        .optional("visual_palette", &p.visual_palette)
        .optional("x_axis_display_options", &p.axis_display_options)
        .optional("x_axis_label_options", &p.axis_label_options)
        .optional("y_axis_display_options", &p.axis_display_options)
        .optional("y_axis_label_options", &p.axis_label_options)
        .register(reg);
    hierarchical_visual("ScatterPlotVisual", c)
        .optional("chart_configuration", &configuration)
        .register(reg)
}

fn tree_map(reg: &mut Registry, ctx: &Ctx) -> Node {
    let (c, p) = (ctx.common, ctx.parts);
    let wells = field_wells(
        reg,
        "TreeMapFieldWells",
        StructBuilder::new("TreeMapAggregatedFieldWells")
            .list("colors", &p.measure_field, 0, 1)
            .list("groups", &p.dimension_field, 0, 1)
            .list("sizes", &p.measure_field, 0, 1),
        "tree_map_aggregated_field_wells",
    );
    let sort = StructBuilder::new("TreeMapSortConfiguration")
        .optional("tree_map_group_items_limit_configuration", &c.items_limit)
        .list("tree_map_sort", &c.field_sort_options, 0, 100)
        .register(reg);
    let configuration = StructBuilder::new("TreeMapConfiguration")
        .optional("color_label_options", &p.axis_label_options)
        .optional("color_scale", &p.color_scale)
        .optional("data_labels", &p.data_labels)
        .optional("field_wells", &wells)
        .optional("group_label_options", &p.axis_label_options)
        .optional("legend", &p.legend)
        .optional("size_label_options", &p.axis_label_options)
        .optional("sort_configuration", &sort)
        .optional("tooltip", &p.tooltip)
        .register(reg);
    hierarchical_visual("TreeMapVisual", c)
        .optional("chart_configuration", &configuration)
        .register(reg)
}

fn waterfall(reg: &mut Registry, ctx: &Ctx) -> Node {
    let (c, p) = (ctx.common, ctx.parts);
    let wells = field_wells(
        reg,
        "WaterfallChartFieldWells",
        StructBuilder::new("WaterfallChartAggregatedFieldWells")
            .list("breakdowns", &p.dimension_field, 0, 200)
            .list("categories", &p.dimension_field, 0, 200)
            .list("values", &p.measure_field, 0, 200),
        "waterfall_chart_aggregated_field_wells",
    );
    let sort = StructBuilder::new("WaterfallChartSortConfiguration")
        .optional("breakdown_items_limit", &c.items_limit)
        .list("category_sort", &c.field_sort_options, 0, 100)
        .register(reg);
    let options = StructBuilder::new("WaterfallChartOptions")
        .optional("total_bar_label", &string())
        .register(reg);
    let configuration = StructBuilder::new("WaterfallChartConfiguration")
        .optional("category_axis_display_options", &p.axis_display_options)
        .optional("category_axis_label_options", &p.axis_label_options)
        .optional("data_labels", &p.data_labels)
        .optional("field_wells", &wells)
        .optional("legend", &p.legend)
        .optional("primary_y_axis_display_options", &p.axis_display_options)
        .optional("primary_y_axis_label_options", &p.axis_label_options)
        .optional("sort_configuration", &sort)
        .optional("visual_palette", &p.visual_palette)
        .optional("waterfall_chart_options", &options)
        .register(reg);
    hierarchical_visual("WaterfallVisual", c)
        .optional("chart_configuration", &configuration)
        .register(reg)
}

fn word_cloud(reg: &mut Registry, ctx: &Ctx) -> Node {
    let (c, p) = (ctx.common, ctx.parts);
    let wells = field_wells(
        reg,
        "WordCloudFieldWells",
        StructBuilder::new("WordCloudAggregatedFieldWells")
            .list("group_by", &p.dimension_field, 0, 10)
            .list("size", &p.measure_field, 0, 1),
        "word_cloud_aggregated_field_wells",
    );
    let sort = StructBuilder::new("WordCloudSortConfiguration")
        .optional("category_items_limit", &c.items_limit)
        .list("category_sort", &c.field_sort_options, 0, 100)
        .register(reg);
    let options = StructBuilder::new("WordCloudOptions")
        .optional("cloud_layout", &enumeration(&["FLUID", "NORMAL"]))
        .optional("maximum_string_length", &int_range(1, 100))
        .optional("word_casing", &enumeration(&["LOWER_CASE", "EXISTING_CASE"]))
        .optional("word_orientation", &enumeration(&["HORIZONTAL", "HORIZONTAL_AND_VERTICAL"]))
        .optional("word_padding", &enumeration(&["NONE", "SMALL", "MEDIUM", "LARGE"]))
        .optional("word_scaling", &enumeration(&["EMPHASIZE", "NORMAL"]))
        .register(reg);
    let configuration = StructBuilder::new("WordCloudChartConfiguration")
        .optional("category_label_options", &p.axis_label_options)
        .optional("field_wells", &wells)
        .optional("sort_configuration", &sort)
        .optional("word_cloud_options", &options)
        .register(reg);
    hierarchical_visual("WordCloudVisual", c)
        .optional("chart_configuration", &configuration)
        .register(reg)
}
