//! Closed value sets used across the catalog

pub const VISIBILITY: &[&str] = &["HIDDEN", "VISIBLE"];
pub const STATUS: &[&str] = &["ENABLED", "DISABLED"];
pub const SORT_DIRECTION: &[&str] = &["ASC", "DESC"];

pub const TIME_GRANULARITY: &[&str] = &[
    "YEAR",
    "QUARTER",
    "MONTH",
    "WEEK",
    "DAY",
    "HOUR",
    "MINUTE",
    "SECOND",
    "MILLISECOND",
];

pub const CATEGORICAL_AGGREGATION: &[&str] = &["COUNT", "DISTINCT_COUNT"];
pub const DATE_AGGREGATION: &[&str] = &["COUNT", "DISTINCT_COUNT", "MIN", "MAX"];
pub const SIMPLE_NUMERICAL_AGGREGATION: &[&str] = &[
    "SUM",
    "AVERAGE",
    "MIN",
    "MAX",
    "COUNT",
    "DISTINCT_COUNT",
    "VAR",
    "VARP",
    "STDEV",
    "STDEVP",
    "MEDIAN",
];

pub const FILTER_NULL_OPTION: &[&str] = &["ALL_VALUES", "NULLS_ONLY", "NON_NULLS_ONLY"];
pub const CATEGORY_FILTER_MATCH_OPERATOR: &[&str] = &[
    "EQUALS",
    "DOES_NOT_EQUAL",
    "CONTAINS",
    "DOES_NOT_CONTAIN",
    "STARTS_WITH",
    "ENDS_WITH",
];
pub const NUMERIC_EQUALITY_MATCH_OPERATOR: &[&str] = &["EQUALS", "DOES_NOT_EQUAL"];
pub const SELECT_ALL_OPTIONS: &[&str] = &["FILTER_ALL_VALUES"];
pub const RELATIVE_DATE_TYPE: &[&str] = &["PREVIOUS", "THIS", "LAST", "NOW", "NEXT"];
pub const ANCHOR_OPTION: &[&str] = &["NOW"];
pub const CROSS_DATASET: &[&str] = &["ALL_DATASETS", "SINGLE_DATASET"];
pub const FILTER_VISUAL_SCOPE: &[&str] = &["ALL_VISUALS", "SELECTED_VISUALS"];

pub const COMMIT_MODE: &[&str] = &["AUTO", "MANUAL"];
pub const DATE_TIME_PICKER_TYPE: &[&str] = &["SINGLE_VALUED", "DATE_RANGE"];
pub const LIST_CONTROL_TYPE: &[&str] = &["MULTI_SELECT", "SINGLE_SELECT"];
pub const SLIDER_TYPE: &[&str] = &["SINGLE_POINT", "RANGE"];

pub const PARAMETER_VALUE_TYPE: &[&str] = &["MULTI_VALUED", "SINGLE_VALUED"];
pub const VALUE_WHEN_UNSET: &[&str] = &["RECOMMENDED_VALUE", "NULL"];

pub const RELATIVE_FONT_SIZE: &[&str] = &["EXTRA_SMALL", "SMALL", "MEDIUM", "LARGE", "EXTRA_LARGE"];
pub const FONT_WEIGHT: &[&str] = &["NORMAL", "BOLD"];
pub const FONT_STYLE: &[&str] = &["NORMAL", "ITALIC"];
pub const FONT_DECORATION: &[&str] = &["UNDERLINE", "NONE"];
pub const HORIZONTAL_TEXT_ALIGNMENT: &[&str] = &["LEFT", "CENTER", "RIGHT", "AUTO"];
pub const VERTICAL_TEXT_ALIGNMENT: &[&str] = &["TOP", "MIDDLE", "BOTTOM"];
pub const TEXT_WRAP: &[&str] = &["NONE", "WRAP"];

pub const NUMBER_SCALE: &[&str] = &["NONE", "AUTO", "THOUSANDS", "MILLIONS", "BILLIONS", "TRILLIONS"];
pub const NUMERIC_SEPARATOR_SYMBOL: &[&str] = &["COMMA", "DOT", "SPACE"];
pub const NEGATIVE_VALUE_DISPLAY_MODE: &[&str] = &["POSITIVE", "NEGATIVE"];
pub const COMPARISON_METHOD: &[&str] = &["DIFFERENCE", "PERCENT_DIFFERENCE", "PERCENT"];

pub const LEGEND_POSITION: &[&str] = &["AUTO", "RIGHT", "BOTTOM", "TOP"];
pub const SELECTED_TOOLTIP_TYPE: &[&str] = &["BASIC", "DETAILED"];
pub const TOOLTIP_TITLE_TYPE: &[&str] = &["NONE", "PRIMARY_VALUE"];
pub const DATA_LABEL_CONTENT: &[&str] = &["VALUE", "PERCENT", "VALUE_AND_PERCENT"];
pub const DATA_LABEL_OVERLAP: &[&str] = &["DISABLE_OVERLAP", "ENABLE_OVERLAP"];
pub const DATA_LABEL_POSITION: &[&str] = &["INSIDE", "OUTSIDE", "LEFT", "TOP", "BOTTOM", "RIGHT"];
pub const COLOR_FILL_TYPE: &[&str] = &["DISCRETE", "GRADIENT"];
pub const OTHER_CATEGORIES: &[&str] = &["INCLUDE", "EXCLUDE"];
pub const AXIS_BINDING: &[&str] = &["PRIMARY_YAXIS", "SECONDARY_YAXIS"];
pub const LINE_PATTERN: &[&str] = &["SOLID", "DASHED", "DOTTED"];
pub const HORIZONTAL_POSITION: &[&str] = &["LEFT", "CENTER", "RIGHT"];
pub const VERTICAL_POSITION: &[&str] = &["ABOVE", "BELOW"];
pub const VALUE_LABEL_RELATIVE_POSITION: &[&str] = &["BEFORE_CUSTOM_LABEL", "AFTER_CUSTOM_LABEL"];
pub const ORIENTATION: &[&str] = &["HORIZONTAL", "VERTICAL"];
pub const BARS_ARRANGEMENT: &[&str] = &["CLUSTERED", "STACKED", "STACKED_PERCENT"];
pub const ARC_THICKNESS: &[&str] = &["SMALL", "MEDIUM", "LARGE", "WHOLE"];
pub const PRIMARY_VALUE_DISPLAY_TYPE: &[&str] = &["HIDDEN", "COMPARISON", "ACTUAL"];
pub const BASE_MAP_STYLE: &[&str] = &["LIGHT_GRAY", "DARK_GRAY", "STREET", "IMAGERY"];
pub const MAP_ZOOM_MODE: &[&str] = &["AUTO", "MANUAL"];

pub const LINE_CHART_TYPE: &[&str] = &["LINE", "AREA", "STACKED_AREA"];
pub const LINE_INTERPOLATION: &[&str] = &["LINEAR", "SMOOTH", "STEPPED"];
pub const MARKER_SHAPE: &[&str] = &["CIRCLE", "TRIANGLE", "SQUARE", "DIAMOND", "ROUNDED_SQUARE"];
pub const MISSING_DATA_TREATMENT: &[&str] = &["INTERPOLATE", "SHOW_AS_ZERO", "SHOW_AS_BLANK"];

pub const TABLE_ORIENTATION: &[&str] = &["VERTICAL", "HORIZONTAL"];
pub const TABLE_TOTALS_PLACEMENT: &[&str] = &["START", "END"];
pub const TABLE_TOTALS_SCROLL_STATUS: &[&str] = &["PINNED", "SCROLLED"];
pub const TABLE_BORDER_STYLE: &[&str] = &["NONE", "SOLID"];
pub const PIVOT_ROWS_LAYOUT: &[&str] = &["TABULAR", "HIERARCHY"];
pub const PIVOT_METRIC_PLACEMENT: &[&str] = &["ROW", "COLUMN"];
pub const URL_TARGET: &[&str] = &["NEW_TAB", "NEW_WINDOW", "SAME_TAB"];
pub const TABLE_CELL_IMAGE_SCALING: &[&str] = &["FIT_TO_CELL_HEIGHT", "FIT_TO_CELL_WIDTH", "DO_NOT_SCALE"];

pub const LAYOUT_ELEMENT_TYPE: &[&str] = &["VISUAL", "FILTER_CONTROL", "PARAMETER_CONTROL", "TEXT_BOX"];
pub const RESIZE_OPTION: &[&str] = &["FIXED", "RESPONSIVE"];
pub const PAPER_ORIENTATION: &[&str] = &["PORTRAIT", "LANDSCAPE"];
pub const PAPER_SIZE: &[&str] = &[
    "US_LETTER",
    "US_LEGAL",
    "US_TABLOID_LEDGER",
    "A0",
    "A1",
    "A2",
    "A3",
    "A4",
    "A5",
    "JIS_B4",
    "JIS_B5",
];
pub const SHEET_CONTENT_TYPE: &[&str] = &["PAGINATED", "INTERACTIVE"];

pub const CUSTOM_ACTION_TRIGGER: &[&str] = &["DATA_POINT_CLICK", "DATA_POINT_MENU"];
pub const SELECTED_FIELD_OPTIONS: &[&str] = &["ALL_FIELDS"];
pub const TARGET_VISUAL_OPTIONS: &[&str] = &["ALL_VISUALS"];
pub const SELECT_ALL_VALUE_OPTIONS: &[&str] = &["ALL_VALUES"];

pub const COLUMN_ROLE: &[&str] = &["DIMENSION", "MEASURE"];
pub const DAY_OF_WEEK: &[&str] = &[
    "SUNDAY",
    "MONDAY",
    "TUESDAY",
    "WEDNESDAY",
    "THURSDAY",
    "FRIDAY",
    "SATURDAY",
];
pub const GEOGRAPHIC_ROLE: &[&str] = &[
    "COUNTRY",
    "STATE",
    "COUNTY",
    "CITY",
    "POSTCODE",
    "LONGITUDE",
    "LATITUDE",
];

pub const INPUT_COLUMN_TYPE: &[&str] = &["STRING", "INTEGER", "DECIMAL", "DATETIME", "BIT", "BOOLEAN", "JSON"];
pub const CAST_COLUMN_TYPE: &[&str] = &["STRING", "INTEGER", "DECIMAL", "DATETIME"];
pub const JOIN_TYPE: &[&str] = &["INNER", "OUTER", "LEFT", "RIGHT"];
pub const FILE_FORMAT: &[&str] = &["CSV", "TSV", "CLF", "ELF", "XLSX", "JSON"];
pub const TEXT_QUALIFIER: &[&str] = &["DOUBLE_QUOTE", "SINGLE_QUOTE"];
pub const COLUMN_TAG_NAME: &[&str] = &["COLUMN_GEOGRAPHIC_ROLE", "COLUMN_DESCRIPTION"];
pub const IMPORT_MODE: &[&str] = &["SPICE", "DIRECT_QUERY"];
pub const ROW_LEVEL_PERMISSION_POLICY: &[&str] = &["GRANT_ACCESS", "DENY_ACCESS"];
pub const ROW_LEVEL_PERMISSION_FORMAT_VERSION: &[&str] = &["VERSION_1", "VERSION_2"];
pub const LOOKBACK_WINDOW_SIZE_UNIT: &[&str] = &["HOUR", "DAY", "WEEK"];
