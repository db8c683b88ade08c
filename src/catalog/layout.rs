//! Sheet layouts (free-form, grid, section based) and analysis defaults

use super::Node;
use super::common::Common;
use super::enums::*;
use crate::schema::builder::*;
use crate::schema::{OneOfBuilder, Registry, StructBuilder};

pub(crate) struct Layouts {
    pub layout: Node,
    pub sheet_control_layout: Node,
    pub analysis_defaults: Node,
}

impl Layouts {
    pub(crate) fn build(reg: &mut Registry, common: &Common) -> Self {
        let element_type = enumeration(LAYOUT_ELEMENT_TYPE);

        let grid_screen = StructBuilder::new("GridLayoutScreenCanvasSizeOptions")
            .required("resize_option", &enumeration(RESIZE_OPTION))
            .optional("optimized_view_port_width", &common.length)
            .register(reg);
        let grid_canvas = StructBuilder::new("GridLayoutCanvasSizeOptions")
            .optional("screen_canvas_size_options", &grid_screen)
            .register(reg);
        let grid_element = StructBuilder::new("GridLayoutElement")
            .required("column_span", &int_range(1, 36))
            .required("element_id", &common.id)
            .required("element_type", &element_type)
            .required("row_span", &int_range(1, 21))
            .optional("column_index", &nullable_int(0, 35))
            .optional("row_index", &nullable_int(0, 9009))
            .register(reg);
        let grid_layout = StructBuilder::new("GridLayoutConfiguration")
            .list("elements", &grid_element, 1, 430)
            .optional("canvas_size_options", &grid_canvas)
            .register(reg);

        let free_form_screen = StructBuilder::new("FreeFormLayoutScreenCanvasSizeOptions")
            .required("optimized_view_port_width", &common.length)
            .register(reg);
        let free_form_canvas = StructBuilder::new("FreeFormLayoutCanvasSizeOptions")
            .optional("screen_canvas_size_options", &free_form_screen)
            .register(reg);
        let free_form_elements = free_form_element(reg, common, &element_type);
        let free_form_layout = StructBuilder::new("FreeFormLayoutConfiguration")
            .list("elements", &free_form_elements, 1, 430)
            .optional("canvas_size_options", &free_form_canvas)
            .register(reg);

        let (section_based_layout, paper_canvas) = section_based(reg, common, &free_form_elements);

        let configuration = OneOfBuilder::new("LayoutConfiguration")
            .variant("free_form_layout", &free_form_layout)
            .variant("grid_layout", &grid_layout)
            .variant("section_based_layout", &section_based_layout)
            .register(reg);
        let layout = StructBuilder::new("Layout")
            .required("configuration", &configuration)
            .register(reg);

        let sheet_control_configuration = StructBuilder::new("SheetControlLayoutConfiguration")
            .optional("grid_layout", &grid_layout)
            .register(reg);
        let sheet_control_layout = StructBuilder::new("SheetControlLayout")
            .required("configuration", &sheet_control_configuration)
            .register(reg);

        let interactive = StructBuilder::new("DefaultInteractiveLayoutConfiguration")
            .optional(
                "free_form",
                &StructBuilder::new("DefaultFreeFormLayoutConfiguration")
                    .required("canvas_size_options", &free_form_canvas)
                    .register(reg),
            )
            .optional(
                "grid",
                &StructBuilder::new("DefaultGridLayoutConfiguration")
                    .required("canvas_size_options", &grid_canvas)
                    .register(reg),
            )
            .register(reg);
        let paginated = StructBuilder::new("DefaultPaginatedLayoutConfiguration")
            .optional(
                "section_based",
                &StructBuilder::new("DefaultSectionBasedLayoutConfiguration")
                    .required("canvas_size_options", &paper_canvas)
                    .register(reg),
            )
            .register(reg);
        let new_sheet = StructBuilder::new("DefaultNewSheetConfiguration")
            .optional("interactive_layout_configuration", &interactive)
            .optional("paginated_layout_configuration", &paginated)
            .optional("sheet_content_type", &enumeration(SHEET_CONTENT_TYPE))
            .register(reg);
        let analysis_defaults = StructBuilder::new("AnalysisDefaults")
            .required("default_new_sheet_configuration", &new_sheet)
            .register(reg);

        Self {
            layout,
            sheet_control_layout,
            analysis_defaults,
        }
    }
}

fn free_form_element(reg: &mut Registry, common: &Common, element_type: &Node) -> Node {
    let background = StructBuilder::new("FreeFormLayoutElementBackgroundStyle")
        .optional("color", &common.color_alpha)
        .optional("visibility", &common.visibility)
        .register(reg);
    let border = StructBuilder::new("FreeFormLayoutElementBorderStyle")
        .optional("color", &common.color_alpha)
        .optional("visibility", &common.visibility)
        .register(reg);
    let overrides = StructBuilder::new("SheetElementConfigurationOverrides")
        .optional("visibility", &common.visibility)
        .register(reg);
    let rendering_rule = StructBuilder::new("SheetElementRenderingRule")
        .required("configuration_overrides", &overrides)
        .required("expression", &common.expression)
        .register(reg);

    StructBuilder::new("FreeFormLayoutElement")
        .required("element_id", &common.id)
        .required("element_type", element_type)
        .required("height", &common.length)
        .required("width", &common.length)
        .required("x_axis_location", &common.length)
        .required("y_axis_location", &common.length)
        .optional("background_style", &background)
        .optional("border_style", &border)
        .optional("loading_animation", &common.visibility_options)
        .list("rendering_rules", &rendering_rule, 0, 10_000)
        .optional("selected_border_style", &border)
        .optional("visibility", &common.visibility)
        .register(reg)
}

/// Paginated layouts; returns the layout node and the paper canvas options
fn section_based(reg: &mut Registry, common: &Common, free_form_element: &Node) -> (Node, Node) {
    let free_form_section = StructBuilder::new("FreeFormSectionLayoutConfiguration")
        .list("elements", free_form_element, 0, 430)
        .register(reg);
    let section_layout = StructBuilder::new("SectionLayoutConfiguration")
        .required("free_form_layout", &free_form_section)
        .register(reg);
    let section_style = StructBuilder::new("SectionStyle")
        .optional("height", &common.length)
        .optional("padding", &common.spacing)
        .register(reg);
    let after = StructBuilder::new("SectionAfterPageBreak")
        .optional("status", &common.status)
        .register(reg);
    let page_break = StructBuilder::new("SectionPageBreakConfiguration")
        .optional("after", &after)
        .register(reg);
    let body_content = StructBuilder::new("BodySectionContent")
        .optional("layout", &section_layout)
        .register(reg);
    let body = StructBuilder::new("BodySectionConfiguration")
        .required("content", &body_content)
        .required("section_id", &common.id)
        .optional("page_break_configuration", &page_break)
        .optional("style", &section_style)
        .register(reg);
    let header_footer = StructBuilder::new("HeaderFooterSectionConfiguration")
        .required("layout", &section_layout)
        .required("section_id", &common.id)
        .optional("style", &section_style)
        .register(reg);

    let paper = StructBuilder::new("SectionBasedLayoutPaperCanvasSizeOptions")
        .optional("paper_margin", &common.spacing)
        .optional("paper_orientation", &enumeration(PAPER_ORIENTATION))
        .optional("paper_size", &enumeration(PAPER_SIZE))
        .register(reg);
    let canvas = StructBuilder::new("SectionBasedLayoutCanvasSizeOptions")
        .optional("paper_canvas_size_options", &paper)
        .register(reg);

    let layout = StructBuilder::new("SectionBasedLayoutConfiguration")
        .list("body_sections", &body, 0, 28)
        .required("canvas_size_options", &canvas)
        .list("footer_sections", &header_footer, 0, 1)
        .list("header_sections", &header_footer, 0, 1)
        .register(reg);
    (layout, canvas)
}
