//! Data set definitions: physical and logical table maps with their
//! transforms, column groups, folders and permissions

use super::Node;
use super::common::Common;
use super::enums::*;
use crate::schema::builder::*;
use crate::schema::{OneOfBuilder, Registry, StructBuilder};

pub(crate) fn build(reg: &mut Registry, common: &Common) -> Node {
    let arn = string();
    let column_name = string_len(1, 128);

    let input_column = StructBuilder::new("InputColumn")
        .required("name", &column_name)
        .required("type", &enumeration(INPUT_COLUMN_TYPE))
        .register(reg);
    let physical_table_map = physical_table_map(reg, common, &arn, &input_column);
    let logical_table_map = logical_table_map(reg, common, &arn, &column_name);

    let geo_spatial = StructBuilder::new("GeoSpatialColumnGroup")
        .list("columns", &column_name, 1, 16)
        .required("country_code", &enumeration(&["US"]))
        .required("name", &string_len(1, 64))
        .register(reg);
    let column_group = StructBuilder::new("ColumnGroup")
        .optional("geo_spatial_column_group", &geo_spatial)
        .register(reg);
    let column_level_permission_rule = StructBuilder::new("ColumnLevelPermissionRule")
        .list("column_names", &string(), 1, 1000)
        .list("principals", &arn, 1, 100)
        .register(reg);
    let usage = StructBuilder::new("DataSetUsageConfiguration")
        .optional("disable_use_as_direct_query_source", &common.boolean)
        .optional("disable_use_as_imported_source", &common.boolean)
        .register(reg);
    let field_folder = StructBuilder::new("FieldFolder")
        .required("field_folders_id", &string())
        .list("columns", &string(), 0, 5000)
        .optional("description", &string_len(0, 500))
        .register(reg);
    let row_level_permission_data_set = StructBuilder::new("RowLevelPermissionDataSet")
        .required("arn", &arn)
        .required("permission_policy", &enumeration(ROW_LEVEL_PERMISSION_POLICY))
        .optional("format_version", &enumeration(ROW_LEVEL_PERMISSION_FORMAT_VERSION))
        .optional("namespace", &string_len(0, 64))
        .optional("status", &common.status)
        .register(reg);
    let tag_rule = StructBuilder::new("RowLevelPermissionTagRule")
        .required("column_name", &string())
        .required("tag_key", &string_len(1, 128))
        .optional("match_all_value", &string_len(1, 256))
        .optional("tag_multi_value_delimiter", &string_len(0, 10))
        .register(reg);
    let tag_configuration = StructBuilder::new("RowLevelPermissionTagConfiguration")
        .list("tag_rules", &tag_rule, 1, 50)
        .optional("status", &common.status)
        .register(reg);

    let lookback_window = StructBuilder::new("LookbackWindow")
        .required("column_name", &string())
        .required("size", &common.integer)
        .required("size_unit", &enumeration(LOOKBACK_WINDOW_SIZE_UNIT))
        .register(reg);
    let incremental_refresh = StructBuilder::new("IncrementalRefresh")
        .required("lookback_window", &lookback_window)
        .register(reg);
    let refresh_configuration = StructBuilder::new("RefreshConfiguration")
        .required("incremental_refresh", &incremental_refresh)
        .register(reg);
    let refresh_properties = StructBuilder::new("DataSetRefreshProperties")
        .required("refresh_configuration", &refresh_configuration)
        .register(reg);

    StructBuilder::new("DataSetDefinition")
        .required("data_set_id", &common.id)
        .required("name", &string_len(1, 128))
        .required("import_mode", &enumeration(IMPORT_MODE))
        .set("physical_table_map", &physical_table_map, 1, 32)
        .set("logical_table_map", &logical_table_map, 0, 64)
        .list("column_groups", &column_group, 0, 8)
        .list("column_level_permission_rules", &column_level_permission_rule, 0, 100)
        .optional("data_set_refresh_properties", &refresh_properties)
        .optional("data_set_usage_configuration", &usage)
        .set("field_folders", &field_folder, 0, 1000)
        .optional("row_level_permission_data_set", &row_level_permission_data_set)
        .optional("row_level_permission_tag_configuration", &tag_configuration)
        .register(reg)
}

fn physical_table_map(reg: &mut Registry, common: &Common, arn: &Node, input_column: &Node) -> Node {
    let custom_sql = StructBuilder::new("CustomSql")
        .list("columns", input_column, 1, 2048)
        .required("data_source_arn", arn)
        .required("name", &string_len(1, 64))
        .required("sql_query", &string_len(1, 65_536))
        .register(reg);
    let relational_table = StructBuilder::new("RelationalTable")
        .required("data_source_arn", arn)
        .list("input_columns", input_column, 1, 2048)
        .required("name", &string_len(1, 64))
        .optional("catalog", &string_len(0, 256))
        .optional("schema", &string_len(0, 256))
        .register(reg);
    let upload_settings = StructBuilder::new("UploadSettings")
        .optional("contains_header", &common.boolean)
        .optional("delimiter", &string_len(1, 1))
        .optional("format", &enumeration(FILE_FORMAT))
        .optional("start_from_row", &int_range(1, i64::from(i32::MAX)))
        .optional("text_qualifier", &enumeration(TEXT_QUALIFIER))
        .register(reg);
    let s3_source = StructBuilder::new("S3Source")
        .required("data_source_arn", arn)
        .list("input_columns", input_column, 1, 2048)
        .optional("upload_settings", &upload_settings)
        .register(reg);
    let physical_table = OneOfBuilder::new("PhysicalTable")
        .variant("custom_sql", &custom_sql)
        .variant("relational_table", &relational_table)
        .variant("s3_source", &s3_source)
        .register(reg);

    StructBuilder::new("PhysicalTableMapEntry")
        .required("physical_table_map_id", &string_len(1, 64))
        .required("physical_table", &physical_table)
        .register(reg)
}

fn logical_table_map(reg: &mut Registry, common: &Common, arn: &Node, column_name: &Node) -> Node {
    let cast_column_type = StructBuilder::new("CastColumnTypeOperation")
        .required("column_name", column_name)
        .required("new_column_type", &enumeration(CAST_COLUMN_TYPE))
        .optional("format", &string_len(0, 32))
        .register(reg);
    let calculated_column = StructBuilder::new("CalculatedColumn")
        .required("column_id", &string_len(1, 64))
        .required("column_name", column_name)
        .required("expression", &string_len(1, 4096))
        .register(reg);
    let create_columns = StructBuilder::new("CreateColumnsOperation")
        .list("columns", &calculated_column, 1, 128)
        .register(reg);
    let filter = StructBuilder::new("FilterOperation")
        .required("condition_expression", &string_len(1, 4096))
        .register(reg);
    let project = StructBuilder::new("ProjectOperation")
        .list("projected_columns", &string(), 1, 2000)
        .register(reg);
    let rename = StructBuilder::new("RenameColumnOperation")
        .required("column_name", column_name)
        .required("new_column_name", column_name)
        .register(reg);

    let description = StructBuilder::new("ColumnDescription")
        .optional("text", &string_len(0, 500))
        .register(reg);
    let column_tag = OneOfBuilder::new("ColumnTag")
        .variant("column_description", &description)
        .variant("column_geographic_role", &enumeration(GEOGRAPHIC_ROLE))
        .register(reg);
    let tag = StructBuilder::new("TagColumnOperation")
        .required("column_name", column_name)
        .list("tags", &column_tag, 1, 16)
        .register(reg);
    let untag = StructBuilder::new("UntagColumnOperation")
        .required("column_name", column_name)
        .list("tag_names", &enumeration(COLUMN_TAG_NAME), 1, 2)
        .register(reg);

    let transform = OneOfBuilder::new("TransformOperation")
        .variant("cast_column_type_operation", &cast_column_type)
        .variant("create_columns_operation", &create_columns)
        .variant("filter_operation", &filter)
        .variant("project_operation", &project)
        .variant("rename_column_operation", &rename)
        .variant("tag_column_operation", &tag)
        .variant("untag_column_operation", &untag)
        .register(reg);

    let join_key = StructBuilder::new("JoinKeyProperties")
        .optional("unique_key", &common.boolean)
        .register(reg);
    let join_instruction = StructBuilder::new("JoinInstruction")
        .required("left_operand", &string_len(1, 64))
        .required("on_clause", &string_len(1, 512))
        .required("right_operand", &string_len(1, 64))
        .required("type", &enumeration(JOIN_TYPE))
        .optional("left_join_key_properties", &join_key)
        .optional("right_join_key_properties", &join_key)
        .register(reg);
    let source = OneOfBuilder::new("LogicalTableSource")
        .variant("data_set_arn", arn)
        .variant("join_instruction", &join_instruction)
        .variant("physical_table_id", &string_len(1, 64))
        .register(reg);

    StructBuilder::new("LogicalTableMapEntry")
        .required("logical_table_map_id", &string_len(1, 64))
        .required("alias", &string_len(1, 64))
        .list("data_transforms", &transform, 0, 2048)
        .required("source", &source)
        .register(reg)
}
