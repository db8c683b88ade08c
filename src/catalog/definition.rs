//! Root definitions of analyses and templates

use super::Node;
use super::common::Common;
use super::enums::*;
use super::format::Formats;
use crate::schema::builder::*;
use crate::schema::{OneOfBuilder, Registry, StructBuilder};

/// Parts every definition is assembled from
pub(crate) struct DefinitionParts<'a> {
    pub common: &'a Common,
    pub formats: &'a Formats,
    pub parameter_declaration: &'a Node,
    pub filter_group: &'a Node,
    pub sheet: &'a Node,
    pub analysis_defaults: &'a Node,
}

/// Register `AnalysisDefinition`, `TemplateVersionDefinition` and `TemplateSourceEntity`
pub(crate) fn build(reg: &mut Registry, parts: &DefinitionParts) {
    let common = parts.common;

    let calculated_field = StructBuilder::new("CalculatedField")
        .required("data_set_identifier", &common.data_set_identifier)
        .required("expression", &string_len(1, 32_000))
        .required("name", &common.name)
        .register(reg);
    let column_configuration = StructBuilder::new("ColumnConfiguration")
        .required("column", &common.column)
        .optional("format_configuration", &parts.formats.format_configuration)
        .optional("role", &enumeration(COLUMN_ROLE))
        .register(reg);
    let options = StructBuilder::new("AssetOptions")
        .optional("timezone", &string())
        .optional("week_start", &enumeration(DAY_OF_WEEK))
        .register(reg);
    let data_set_identifier_declaration = StructBuilder::new("DataSetIdentifierDeclaration")
        .required("data_set_arn", &string())
        .required("identifier", &common.data_set_identifier)
        .register(reg);

    StructBuilder::new("AnalysisDefinition")
        .list(
            "data_set_identifiers_declarations",
            &data_set_identifier_declaration,
            1,
            50,
        )
        .wire("DataSetIdentifierDeclarations")
        .optional("analysis_defaults", parts.analysis_defaults)
        .set("calculated_fields", &calculated_field, 0, 500)
        .list("column_configurations", &column_configuration, 0, 200)
        .list("filter_groups", parts.filter_group, 0, 2000)
        .optional("options", &options)
        .list("parameter_declarations", parts.parameter_declaration, 0, 200)
        .list("sheets", parts.sheet, 0, 20)
        .register(reg);

    let column_schema = StructBuilder::new("ColumnSchema")
        .optional("data_type", &string())
        .optional("geographic_role", &string())
        .optional("name", &string())
        .register(reg);
    let column_group_column_schema = StructBuilder::new("ColumnGroupColumnSchema")
        .optional("name", &string())
        .register(reg);
    let column_group_schema = StructBuilder::new("ColumnGroupSchema")
        .list("column_group_column_schema_list", &column_group_column_schema, 0, 500)
        .optional("name", &string())
        .register(reg);
    let data_set_schema = StructBuilder::new("DataSetSchema")
        .list("column_schema_list", &column_schema, 0, 500)
        .register(reg);
    let data_set_configuration = StructBuilder::new("DataSetConfiguration")
        .list("column_group_schema_list", &column_group_schema, 0, 500)
        .optional("data_set_schema", &data_set_schema)
        .optional("placeholder", &string())
        .register(reg);

    StructBuilder::new("TemplateVersionDefinition")
        .list("data_set_configuration", &data_set_configuration, 1, 30)
        .wire("DataSetConfigurations")
        .optional("analysis_defaults", parts.analysis_defaults)
        .set("calculated_fields", &calculated_field, 0, 500)
        .list("column_configurations", &column_configuration, 0, 200)
        .list("filter_groups", parts.filter_group, 0, 2000)
        .optional("options", &options)
        .list("parameter_declarations", parts.parameter_declaration, 0, 200)
        .list("sheets", parts.sheet, 0, 20)
        .register(reg);

    let data_set_reference = StructBuilder::new("DataSetReference")
        .required("data_set_arn", &string())
        .required("data_set_placeholder", &string())
        .register(reg);
    let source_analysis = StructBuilder::new("TemplateSourceAnalysis")
        .required("arn", &string())
        .list("data_set_references", &data_set_reference, 1, 100)
        .register(reg);
    let source_template = StructBuilder::new("TemplateSourceTemplate")
        .required("arn", &string())
        .register(reg);
    OneOfBuilder::new("TemplateSourceEntity")
        .variant("source_analysis", &source_analysis)
        .variant("source_template", &source_template)
        .register(reg);
}
