//! Sheet controls: filter controls, parameter controls and the default
//! control attached to a filter

use super::Node;
use super::common::Common;
use super::enums::*;
use crate::schema::builder::*;
use crate::schema::{OneOfBuilder, Registry, StructBuilder};

pub(crate) struct Controls {
    pub filter_control: Node,
    pub parameter_control: Node,
    pub default_filter_control_configuration: Node,
}

struct DisplayOptions {
    date_time_picker: Node,
    drop_down: Node,
    list: Node,
    relative_date_time: Node,
    slider: Node,
    text_area: Node,
    text_field: Node,
}

impl Controls {
    pub(crate) fn build(reg: &mut Registry, common: &Common) -> Self {
        let display = display_options(reg, common);

        let source_control = StructBuilder::new("CascadingControlSource")
            .optional("column_to_match", &common.column)
            .optional("source_sheet_control_id", &common.id)
            .register(reg);
        let cascading = StructBuilder::new("CascadingControlConfiguration")
            .list("source_controls", &source_control, 0, 200)
            .register(reg);
        let selectable_values = StructBuilder::new("FilterSelectableValues")
            .list("values", &string(), 0, 50_000)
            .register(reg);
        let delimiter = string_len(1, 2048);

        let filter_control = filter_controls(reg, common, &display, &cascading, &selectable_values, &delimiter);
        let parameter_control = parameter_controls(reg, common, &display, &cascading, &delimiter);

        let commit_mode = enumeration(COMMIT_MODE);
        let date_time_picker = StructBuilder::new("DefaultDateTimePickerControlOptions")
            .optional("commit_mode", &commit_mode)
            .optional("display_options", &display.date_time_picker)
            .optional("type", &enumeration(DATE_TIME_PICKER_TYPE))
            .register(reg);
        let dropdown = StructBuilder::new("DefaultFilterDropDownControlOptions")
            .optional("commit_mode", &commit_mode)
            .optional("display_options", &display.drop_down)
            .optional("selectable_values", &selectable_values)
            .optional("type", &enumeration(LIST_CONTROL_TYPE))
            .register(reg);
        let list = StructBuilder::new("DefaultFilterListControlOptions")
            .optional("display_options", &display.list)
            .optional("selectable_values", &selectable_values)
            .optional("type", &enumeration(LIST_CONTROL_TYPE))
            .register(reg);
        let relative_date_time = StructBuilder::new("DefaultRelativeDateTimeControlOptions")
            .optional("commit_mode", &commit_mode)
            .optional("display_options", &display.relative_date_time)
            .register(reg);
        let slider = StructBuilder::new("DefaultSliderControlOptions")
            .required("maximum_value", &common.float)
            .required("minimum_value", &common.float)
            .required("step_size", &common.float)
            .optional("display_options", &display.slider)
            .optional("type", &enumeration(SLIDER_TYPE))
            .register(reg);
        let text_area = StructBuilder::new("DefaultTextAreaControlOptions")
            .optional("delimiter", &delimiter)
            .optional("display_options", &display.text_area)
            .register(reg);
        let text_field = StructBuilder::new("DefaultTextFieldControlOptions")
            .optional("display_options", &display.text_field)
            .register(reg);

        let control_options = OneOfBuilder::new("DefaultFilterControlOptions")
            .variant("default_date_time_picker_options", &date_time_picker)
            .variant("default_dropdown_options", &dropdown)
            .variant("default_list_options", &list)
            .variant("default_relative_date_time_options", &relative_date_time)
            .variant("default_slider_options", &slider)
            .variant("default_text_area_options", &text_area)
            .variant("default_text_field_options", &text_field)
            .register(reg);
        let default_filter_control_configuration = StructBuilder::new("DefaultFilterControlConfiguration")
            .required("control_options", &control_options)
            .required("title", &common.title)
            .register(reg);

        Self {
            filter_control,
            parameter_control,
            default_filter_control_configuration,
        }
    }
}

fn display_options(reg: &mut Registry, common: &Common) -> DisplayOptions {
    let placeholder = StructBuilder::new("PlaceholderOptions")
        .optional("visibility", &common.visibility)
        .register(reg);
    let select_all = StructBuilder::new("ListControlSelectAllOptions")
        .optional("visibility", &common.visibility)
        .register(reg);
    let search = StructBuilder::new("ListControlSearchOptions")
        .optional("visibility", &common.visibility)
        .register(reg);
    let date_time_format = string_len(1, 128);

    DisplayOptions {
        date_time_picker: StructBuilder::new("DateTimePickerControlDisplayOptions")
            .optional("date_time_format", &date_time_format)
            .optional("title_options", &common.label_options)
            .register(reg),
        drop_down: StructBuilder::new("DropDownControlDisplayOptions")
            .optional("select_all_options", &select_all)
            .optional("title_options", &common.label_options)
            .register(reg),
        list: StructBuilder::new("ListControlDisplayOptions")
            .optional("search_options", &search)
            .optional("select_all_options", &select_all)
            .optional("title_options", &common.label_options)
            .register(reg),
        relative_date_time: StructBuilder::new("RelativeDateTimeControlDisplayOptions")
            .optional("date_time_format", &date_time_format)
            .optional("title_options", &common.label_options)
            .register(reg),
        slider: StructBuilder::new("SliderControlDisplayOptions")
            .optional("title_options", &common.label_options)
            .register(reg),
        text_area: StructBuilder::new("TextAreaControlDisplayOptions")
            .optional("placeholder_options", &placeholder)
            .optional("title_options", &common.label_options)
            .register(reg),
        text_field: StructBuilder::new("TextFieldControlDisplayOptions")
            .optional("placeholder_options", &placeholder)
            .optional("title_options", &common.label_options)
            .register(reg),
    }
}

/// Filter controls share an id, the filter they drive and a title
fn filter_control(name: &str, common: &Common) -> StructBuilder {
    StructBuilder::new(name)
        .required("filter_control_id", &common.id)
        .required("source_filter_id", &common.id)
        .required("title", &common.title)
}

fn filter_controls(
    reg: &mut Registry,
    common: &Common,
    display: &DisplayOptions,
    cascading: &Node,
    selectable_values: &Node,
    delimiter: &Node,
) -> Node {
    let list_type = enumeration(LIST_CONTROL_TYPE);

    let date_time_picker = filter_control("FilterDateTimePickerControl", common)
        .optional("display_options", &display.date_time_picker)
        .optional("type", &enumeration(DATE_TIME_PICKER_TYPE))
        .register(reg);
    let dropdown = filter_control("FilterDropDownControl", common)
        .optional("cascading_control_configuration", cascading)
        .optional("display_options", &display.drop_down)
        .optional("selectable_values", selectable_values)
        .optional("type", &list_type)
        .register(reg);
    let list = filter_control("FilterListControl", common)
        .optional("cascading_control_configuration", cascading)
        .optional("display_options", &display.list)
        .optional("selectable_values", selectable_values)
        .optional("type", &list_type)
        .register(reg);
    let relative_date_time = filter_control("FilterRelativeDateTimeControl", common)
        .optional("display_options", &display.relative_date_time)
        .register(reg);
    let slider = filter_control("FilterSliderControl", common)
        .required("maximum_value", &common.float)
        .required("minimum_value", &common.float)
        .required("step_size", &common.float)
        .optional("display_options", &display.slider)
        .optional("type", &enumeration(SLIDER_TYPE))
        .register(reg);
    let text_area = filter_control("FilterTextAreaControl", common)
        .optional("delimiter", delimiter)
        .optional("display_options", &display.text_area)
        .register(reg);
    let text_field = filter_control("FilterTextFieldControl", common)
        .optional("display_options", &display.text_field)
        .register(reg);

    OneOfBuilder::new("FilterControl")
        .variant("date_time_picker", &date_time_picker)
        .variant("dropdown", &dropdown)
        .variant("list", &list)
        .variant("relative_date_time", &relative_date_time)
        .variant("slider", &slider)
        .variant("text_area", &text_area)
        .variant("text_field", &text_field)
        .register(reg)
}

fn parameter_control(name: &str, common: &Common) -> StructBuilder {
    StructBuilder::new(name)
        .required("parameter_control_id", &common.id)
        .required("source_parameter_name", &common.parameter_name)
        .required("title", &common.title)
}

fn parameter_controls(
    reg: &mut Registry,
    common: &Common,
    display: &DisplayOptions,
    cascading: &Node,
    delimiter: &Node,
) -> Node {
    let list_type = enumeration(LIST_CONTROL_TYPE);
    let selectable_values = StructBuilder::new("ParameterSelectableValues")
        .optional("link_to_data_set_column", &common.column)
        .list("values", &string(), 0, 50_000)
        .register(reg);

    let date_time_picker = parameter_control("ParameterDateTimePickerControl", common)
        .optional("display_options", &display.date_time_picker)
        .register(reg);
    let dropdown = parameter_control("ParameterDropDownControl", common)
        .optional("cascading_control_configuration", cascading)
        .optional("display_options", &display.drop_down)
        .optional("selectable_values", &selectable_values)
        .optional("type", &list_type)
        .register(reg);
    let list = parameter_control("ParameterListControl", common)
        .optional("cascading_control_configuration", cascading)
        .optional("display_options", &display.list)
        .optional("selectable_values", &selectable_values)
        .optional("type", &list_type)
        .register(reg);
    let slider = parameter_control("ParameterSliderControl", common)
        .required("maximum_value", &common.float)
        .required("minimum_value", &common.float)
        .required("step_size", &common.float)
        .optional("display_options", &display.slider)
        .register(reg);
    let text_area = parameter_control("ParameterTextAreaControl", common)
        .optional("delimiter", delimiter)
        .optional("display_options", &display.text_area)
        .register(reg);
    let text_field = parameter_control("ParameterTextFieldControl", common)
        .optional("display_options", &display.text_field)
        .register(reg);

    OneOfBuilder::new("ParameterControl")
        .variant("date_time_picker", &date_time_picker)
        .variant("dropdown", &dropdown)
        .variant("list", &list)
        .variant("slider", &slider)
        .variant("text_area", &text_area)
        .variant("text_field", &text_field)
        .register(reg)
}
