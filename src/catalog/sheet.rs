//! Sheet definitions

use super::Node;
use super::common::Common;
use super::control::Controls;
use super::enums::*;
use super::layout::Layouts;
use crate::schema::builder::*;
use crate::schema::{Registry, StructBuilder};

pub(crate) fn build(
    reg: &mut Registry,
    common: &Common,
    controls: &Controls,
    layouts: &Layouts,
    visual: &Node,
) -> Node {
    let text_box = StructBuilder::new("SheetTextBox")
        .required("sheet_text_box_id", &common.id)
        .optional("content", &string_len(1, 150_000))
        .register(reg);

    StructBuilder::new("SheetDefinition")
        .required("sheet_id", &common.id)
        .optional("content_type", &enumeration(SHEET_CONTENT_TYPE))
        .optional("description", &string_len(1, 1024))
        .list("filter_controls", &controls.filter_control, 0, 200)
        .list("layouts", &layouts.layout, 1, 1)
        .optional("name", &string_len(1, 2048))
        .list("parameter_controls", &controls.parameter_control, 0, 200)
        .list("sheet_control_layouts", &layouts.sheet_control_layout, 0, 1)
        .list("text_boxes", &text_box, 0, 100)
        .optional("title", &string_len(1, 1024))
        .list("visuals", visual, 0, 50)
        .register(reg)
}
