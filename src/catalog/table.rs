//! Table and pivot table configurations

use super::Node;
use super::chart::ChartParts;
use super::common::Common;
use super::enums::*;
use super::format::Formats;
use crate::schema::builder::*;
use crate::schema::{OneOfBuilder, Registry, StructBuilder};

/// Chart configuration and conditional formatting of one table kind
pub(crate) struct TableNodes {
    pub chart_configuration: Node,
    pub conditional_formatting: Node,
}

/// Cell styling shared by both table kinds
pub(crate) struct TableStyles {
    cell_style: Node,
    row_alternate_color: Node,
    total_options: Node,
    paginated_report_options: Node,
    text_format: Node,
}

impl TableStyles {
    pub(crate) fn build(reg: &mut Registry, common: &Common) -> Self {
        let border_options = StructBuilder::new("TableBorderOptions")
            .optional("color", &common.color)
            .optional("style", &enumeration(TABLE_BORDER_STYLE))
            .optional("thickness", &int_range(1, 4))
            .register(reg);
        let side_specific = StructBuilder::new("TableSideBorderOptions")
            .optional("bottom", &border_options)
            .optional("inner_horizontal", &border_options)
            .optional("inner_vertical", &border_options)
            .optional("left", &border_options)
            .optional("right", &border_options)
            .optional("top", &border_options)
            .register(reg);
        let border = OneOfBuilder::new("GlobalTableBorderOptions")
            .variant("side_specific_border", &side_specific)
            .variant("uniform_border", &border_options)
            .register(reg);
        let cell_style = StructBuilder::new("TableCellStyle")
            .optional("background_color", &common.color)
            .optional("border", &border)
            .optional("font_configuration", &common.font_configuration)
            .optional("height", &int_range(8, 500))
            .optional("horizontal_text_alignment", &enumeration(HORIZONTAL_TEXT_ALIGNMENT))
            .optional("text_wrap", &enumeration(TEXT_WRAP))
            .optional("vertical_text_alignment", &enumeration(VERTICAL_TEXT_ALIGNMENT))
            .optional("visibility", &common.visibility)
            .register(reg);
        let row_alternate_color = StructBuilder::new("RowAlternateColorOptions")
            .list("row_alternate_colors", &common.color, 0, 1)
            .optional("status", &common.status)
            .register(reg);
        let total_options = StructBuilder::new("TotalOptions")
            .optional("custom_label", &common.label)
            .optional("placement", &enumeration(TABLE_TOTALS_PLACEMENT))
            .optional("scroll_status", &enumeration(TABLE_TOTALS_SCROLL_STATUS))
            .optional("total_cell_style", &cell_style)
            .optional("totals_visibility", &common.visibility)
            .register(reg);
        let paginated_report_options = StructBuilder::new("TablePaginatedReportOptions")
            .optional("overflow_column_header_visibility", &common.visibility)
            .optional("vertical_overflow_visibility", &common.visibility)
            .register(reg);
        let text_format = StructBuilder::new("TextConditionalFormat")
            .optional("background_color", &common.conditional_color)
            .optional("text_color", &common.conditional_color)
            .register(reg);

        Self {
            cell_style,
            row_alternate_color,
            total_options,
            paginated_report_options,
            text_format,
        }
    }
}

pub(crate) fn table(
    reg: &mut Registry,
    common: &Common,
    formats: &Formats,
    parts: &ChartParts,
    styles: &TableStyles,
) -> TableNodes {
    let custom_icon = StructBuilder::new("TableFieldCustomIconContent")
        .optional("icon", &enumeration(&["LINK"]))
        .register(reg);
    let custom_text = StructBuilder::new("TableFieldCustomTextContent")
        .required("font_configuration", &common.font_configuration)
        .optional("value", &string())
        .register(reg);
    let link_content = OneOfBuilder::new("TableFieldLinkContentConfiguration")
        .variant("custom_icon_content", &custom_icon)
        .variant("custom_text_content", &custom_text)
        .register(reg);
    let link = StructBuilder::new("TableFieldLinkConfiguration")
        .required("content", &link_content)
        .required("target", &enumeration(URL_TARGET))
        .register(reg);
    let image_sizing = StructBuilder::new("TableCellImageSizingConfiguration")
        .optional("table_cell_image_scaling_configuration", &enumeration(TABLE_CELL_IMAGE_SCALING))
        .register(reg);
    let image = StructBuilder::new("TableFieldImageConfiguration")
        .optional("sizing_options", &image_sizing)
        .register(reg);
    let url_styling = OneOfBuilder::new("TableFieldURLConfiguration")
        .variant("image_configuration", &image)
        .variant("link_configuration", &link)
        .register(reg);
    let field_option = StructBuilder::new("TableFieldOption")
        .required("field_id", &common.field_id)
        .optional("custom_label", &common.label)
        .optional("url_styling", &url_styling)
        .wire("URLStyling")
        .optional("visibility", &common.visibility)
        .optional("width", &common.length)
        .register(reg);
    let field_options = StructBuilder::new("TableFieldOptions")
        .list("order", &common.field_id, 0, 200)
        .list("selected_field_options", &field_option, 0, 100)
        .register(reg);

    let aggregated = StructBuilder::new("TableAggregatedFieldWells")
        .list("group_by", &parts.dimension_field, 0, 200)
        .list("values", &parts.measure_field, 0, 200)
        .register(reg);
    let unaggregated_field = StructBuilder::new("UnaggregatedField")
        .required("column", &common.column)
        .required("field_id", &common.field_id)
        .optional("format_configuration", &formats.format_configuration)
        .register(reg);
    let unaggregated = StructBuilder::new("TableUnaggregatedFieldWells")
        .list("values", &unaggregated_field, 0, 200)
        .register(reg);
    let field_wells = OneOfBuilder::new("TableFieldWells")
        .variant("table_aggregated_field_wells", &aggregated)
        .variant("table_unaggregated_field_wells", &unaggregated)
        .register(reg);

    let sort = StructBuilder::new("TableSortConfiguration")
        .optional("pagination_configuration", &common.pagination)
        .list("row_sort", &common.field_sort_options, 0, 100)
        .register(reg);
    let data_bars = StructBuilder::new("DataBarsOptions")
        .required("field_id", &common.field_id)
        .optional("negative_color", &common.color)
        .optional("positive_color", &common.color)
        .register(reg);
    let inline_visualization = StructBuilder::new("TableInlineVisualization")
        .optional("data_bars", &data_bars)
        .register(reg);
    let table_options = StructBuilder::new("TableOptions")
        .optional("cell_style", &styles.cell_style)
        .optional("header_style", &styles.cell_style)
        .optional("orientation", &enumeration(TABLE_ORIENTATION))
        .optional("row_alternate_color_options", &styles.row_alternate_color)
        .register(reg);

    let chart_configuration = StructBuilder::new("TableConfiguration")
        .optional("field_options", &field_options)
        .optional("field_wells", &field_wells)
        .optional("paginated_report_options", &styles.paginated_report_options)
        .optional("sort_configuration", &sort)
        .list("table_inline_visualizations", &inline_visualization, 0, 200)
        .optional("table_options", &table_options)
        .optional("total_options", &styles.total_options)
        .register(reg);

    let cell = StructBuilder::new("TableCellConditionalFormatting")
        .required("field_id", &common.field_id)
        .optional("text_format", &styles.text_format)
        .register(reg);
    let row = StructBuilder::new("TableRowConditionalFormatting")
        .optional("background_color", &common.conditional_color)
        .optional("text_color", &common.conditional_color)
        .register(reg);
    let option = OneOfBuilder::new("TableConditionalFormattingOption")
        .variant("cell", &cell)
        .variant("row", &row)
        .register(reg);
    let conditional_formatting = StructBuilder::new("TableConditionalFormatting")
        .list("conditional_formatting_options", &option, 0, 100)
        .register(reg);

    TableNodes {
        chart_configuration,
        conditional_formatting,
    }
}

pub(crate) fn pivot_table(
    reg: &mut Registry,
    common: &Common,
    parts: &ChartParts,
    styles: &TableStyles,
) -> TableNodes {
    let data_path_option = StructBuilder::new("PivotTableDataPathOption")
        .list("data_path_list", &common.data_path_value, 0, 20)
        .optional("width", &common.length)
        .register(reg);
    let selected_field_option = StructBuilder::new("PivotTableFieldOption")
        .required("field_id", &common.field_id)
        .optional("custom_label", &common.label)
        .optional("visibility", &common.visibility)
        .register(reg);
    let field_options = StructBuilder::new("PivotTableFieldOptions")
        .list("data_path_options", &data_path_option, 0, 100)
        .list("selected_field_options", &selected_field_option, 0, 100)
        .register(reg);

    let aggregated = StructBuilder::new("PivotTableAggregatedFieldWells")
        .list("columns", &parts.dimension_field, 0, 40)
        .list("rows", &parts.dimension_field, 0, 40)
        .list("values", &parts.measure_field, 0, 40)
        .register(reg);
    let field_wells = StructBuilder::new("PivotTableFieldWells")
        .optional("pivot_table_aggregated_field_wells", &aggregated)
        .register(reg);

    let data_path_sort = StructBuilder::new("DataPathSort")
        .required("direction", &common.sort_direction)
        .list("sort_paths", &common.data_path_value, 1, 20)
        .register(reg);
    let field_sort = StructBuilder::new("PivotTableFieldSort")
        .required("direction", &common.sort_direction)
        .required("field_id", &common.field_id)
        .register(reg);
    let sort_by = OneOfBuilder::new("PivotTableSortBy")
        .variant("column", &common.column_sort)
        .variant("data_path", &data_path_sort)
        .variant("field", &field_sort)
        .register(reg);
    let field_sort_options = StructBuilder::new("PivotFieldSortOptions")
        .required("field_id", &common.field_id)
        .required("sort_by", &sort_by)
        .register(reg);
    let sort = StructBuilder::new("PivotTableSortConfiguration")
        .list("field_sort_options", &field_sort_options, 0, 200)
        .register(reg);

    let table_options = StructBuilder::new("PivotTableOptions")
        .optional("cell_style", &styles.cell_style)
        .optional("column_header_style", &styles.cell_style)
        .optional("column_names_visibility", &common.visibility)
        .optional("metric_placement", &enumeration(PIVOT_METRIC_PLACEMENT))
        .optional("row_alternate_color_options", &styles.row_alternate_color)
        .optional("row_field_names_style", &styles.cell_style)
        .optional("row_header_style", &styles.cell_style)
        .optional("rows_label_options", &common.label_options)
        .optional("rows_layout", &enumeration(PIVOT_ROWS_LAYOUT))
        .optional("single_metric_visibility", &common.visibility)
        .optional("toggle_buttons_visibility", &common.visibility)
        .register(reg);

    let subtotal = StructBuilder::new("SubtotalOptions")
        .optional("custom_label", &common.label)
        .optional("metric_header_cell_style", &styles.cell_style)
        .optional("total_cell_style", &styles.cell_style)
        .optional("totals_visibility", &common.visibility)
        .optional("value_cell_style", &styles.cell_style)
        .register(reg);
    let pivot_total = StructBuilder::new("PivotTotalOptions")
        .optional("custom_label", &common.label)
        .optional("metric_header_cell_style", &styles.cell_style)
        .optional("placement", &enumeration(TABLE_TOTALS_PLACEMENT))
        .optional("scroll_status", &enumeration(TABLE_TOTALS_SCROLL_STATUS))
        .optional("total_cell_style", &styles.cell_style)
        .optional("totals_visibility", &common.visibility)
        .optional("value_cell_style", &styles.cell_style)
        .register(reg);
    let total_options = StructBuilder::new("PivotTableTotalOptions")
        .optional("column_subtotal_options", &subtotal)
        .optional("column_total_options", &pivot_total)
        .optional("row_subtotal_options", &subtotal)
        .optional("row_total_options", &pivot_total)
        .register(reg);

    let chart_configuration = StructBuilder::new("PivotTableConfiguration")
        .optional("field_options", &field_options)
        .optional("field_wells", &field_wells)
        .optional("paginated_report_options", &styles.paginated_report_options)
        .optional("sort_configuration", &sort)
        .optional("table_options", &table_options)
        .optional("total_options", &total_options)
        .register(reg);

    let cell = StructBuilder::new("PivotTableCellConditionalFormatting")
        .required("field_id", &common.field_id)
        .optional("text_format", &styles.text_format)
        .register(reg);
    let option = StructBuilder::new("PivotTableConditionalFormattingOption")
        .optional("cell", &cell)
        .register(reg);
    let conditional_formatting = StructBuilder::new("PivotTableConditionalFormatting")
        .list("conditional_formatting_options", &option, 0, 100)
        .register(reg);

    TableNodes {
        chart_configuration,
        conditional_formatting,
    }
}
