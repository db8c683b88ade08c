//! Parameter declarations

use super::Node;
use super::common::Common;
use super::enums::*;
use crate::schema::builder::*;
use crate::schema::{OneOfBuilder, Registry, StructBuilder};

pub(crate) fn build(reg: &mut Registry, common: &Common) -> Node {
    let value_when_unset_option = enumeration(VALUE_WHEN_UNSET);
    let parameter_value_type = enumeration(PARAMETER_VALUE_TYPE);

    let dynamic_value = StructBuilder::new("DynamicDefaultValue")
        .required("default_value_column", &common.column)
        .optional("group_name_column", &common.column)
        .optional("user_name_column", &common.column)
        .register(reg);
    let mapped = StructBuilder::new("MappedDataSetParameter")
        .required("data_set_identifier", &common.data_set_identifier)
        .required("data_set_parameter_name", &common.parameter_name)
        .register(reg);

    let date_time = StructBuilder::new("DateTimeParameterDeclaration")
        .required("name", &common.parameter_name)
        .optional(
            "default_values",
            &StructBuilder::new("DateTimeDefaultValues")
                .optional("dynamic_value", &dynamic_value)
                .optional("rolling_date", &common.rolling_date)
                .list("static_values", &common.timestamp, 0, 50_000)
                .register(reg),
        )
        .list("mapped_data_set_parameters", &mapped, 0, 150)
        .optional("time_granularity", &common.time_granularity)
        .optional(
            "value_when_unset",
            &StructBuilder::new("DateTimeValueWhenUnsetConfiguration")
                .optional("custom_value", &common.timestamp)
                .optional("value_when_unset_option", &value_when_unset_option)
                .register(reg),
        )
        .register(reg);

    let decimal = StructBuilder::new("DecimalParameterDeclaration")
        .required("name", &common.parameter_name)
        .required("parameter_value_type", &parameter_value_type)
        .optional(
            "default_values",
            &StructBuilder::new("DecimalDefaultValues")
                .optional("dynamic_value", &dynamic_value)
                .list("static_values", &common.float, 0, 50_000)
                .register(reg),
        )
        .list("mapped_data_set_parameters", &mapped, 0, 150)
        .optional(
            "value_when_unset",
            &StructBuilder::new("DecimalValueWhenUnsetConfiguration")
                .optional("custom_value", &common.float)
                .optional("value_when_unset_option", &value_when_unset_option)
                .register(reg),
        )
        .register(reg);

    let integer = StructBuilder::new("IntegerParameterDeclaration")
        .required("name", &common.parameter_name)
        .required("parameter_value_type", &parameter_value_type)
        .optional(
            "default_values",
            &StructBuilder::new("IntegerDefaultValues")
                .optional("dynamic_value", &dynamic_value)
                .list("static_values", &common.integer, 0, 50_000)
                .register(reg),
        )
        .list("mapped_data_set_parameters", &mapped, 0, 150)
        .optional(
            "value_when_unset",
            &StructBuilder::new("IntegerValueWhenUnsetConfiguration")
                .optional("custom_value", &common.integer)
                .optional("value_when_unset_option", &value_when_unset_option)
                .register(reg),
        )
        .register(reg);

    let string_declaration = StructBuilder::new("StringParameterDeclaration")
        .required("name", &common.parameter_name)
        .required("parameter_value_type", &parameter_value_type)
        .optional(
            "default_values",
            &StructBuilder::new("StringDefaultValues")
                .optional("dynamic_value", &dynamic_value)
                .list("static_values", &string(), 0, 50_000)
                .register(reg),
        )
        .list("mapped_data_set_parameters", &mapped, 0, 150)
        .optional(
            "value_when_unset",
            &StructBuilder::new("StringValueWhenUnsetConfiguration")
                .optional("custom_value", &string())
                .optional("value_when_unset_option", &value_when_unset_option)
                .register(reg),
        )
        .register(reg);

    OneOfBuilder::new("ParameterDeclaration")
        .variant("date_time_parameter_declaration", &date_time)
        .variant("decimal_parameter_declaration", &decimal)
        .variant("integer_parameter_declaration", &integer)
        .variant("string_parameter_declaration", &string_declaration)
        .register(reg)
}
