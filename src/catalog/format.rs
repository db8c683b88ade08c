//! Number, date and string format configurations

use once_cell::sync::Lazy;
use regex::Regex;

use super::Node;
use super::common::Common;
use super::enums::*;
use crate::schema::builder::*;
use crate::schema::{OneOfBuilder, Registry, StructBuilder};

/// ISO 4217 currency code
static CURRENCY_SYMBOL: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[A-Z]{3}$").unwrap());

pub(crate) struct Formats {
    pub format_configuration: Node,
    pub numeric_format_configuration: Node,
    pub number_format_configuration: Node,
    pub date_time_format_configuration: Node,
    pub string_format_configuration: Node,
    pub comparison_configuration: Node,
}

impl Formats {
    pub(crate) fn build(reg: &mut Registry, common: &Common) -> Self {
        let affix = string_len(1, 128);

        let null_value = StructBuilder::new("NullValueFormatConfiguration")
            .required("null_string", &string_len(1, 128))
            .register(reg);
        let thousands = StructBuilder::new("ThousandSeparatorOptions")
            .optional("symbol", &enumeration(NUMERIC_SEPARATOR_SYMBOL))
            .optional("visibility", &common.visibility)
            .register(reg);
        let separator = StructBuilder::new("NumericSeparatorConfiguration")
            .optional("decimal_separator", &enumeration(NUMERIC_SEPARATOR_SYMBOL))
            .optional("thousands_separator", &thousands)
            .register(reg);
        let decimal_places = StructBuilder::new("DecimalPlacesConfiguration")
            .required("decimal_places", &int_range(0, 20))
            .register(reg);
        let negative_value = StructBuilder::new("NegativeValueConfiguration")
            .required("display_mode", &enumeration(NEGATIVE_VALUE_DISPLAY_MODE))
            .register(reg);

        let number_display_format = StructBuilder::new("NumberDisplayFormatConfiguration")
            .optional("decimal_places_configuration", &decimal_places)
            .optional("negative_value_configuration", &negative_value)
            .optional("null_value_format_configuration", &null_value)
            .optional("number_scale", &enumeration(NUMBER_SCALE))
            .optional("prefix", &affix)
            .optional("separator_configuration", &separator)
            .optional("suffix", &affix)
            .register(reg);
        let currency_display_format = StructBuilder::new("CurrencyDisplayFormatConfiguration")
            .optional("decimal_places_configuration", &decimal_places)
            .optional("negative_value_configuration", &negative_value)
            .optional("null_value_format_configuration", &null_value)
            .optional("number_scale", &enumeration(NUMBER_SCALE))
            .optional("prefix", &affix)
            .optional("separator_configuration", &separator)
            .optional("suffix", &affix)
            .optional("symbol", &pattern(&CURRENCY_SYMBOL))
            .register(reg);
        let percentage_display_format = StructBuilder::new("PercentageDisplayFormatConfiguration")
            .optional("decimal_places_configuration", &decimal_places)
            .optional("negative_value_configuration", &negative_value)
            .optional("null_value_format_configuration", &null_value)
            .optional("prefix", &affix)
            .optional("separator_configuration", &separator)
            .optional("suffix", &affix)
            .register(reg);

        let numeric_format_configuration = OneOfBuilder::new("NumericFormatConfiguration")
            .variant("currency_display_format_configuration", &currency_display_format)
            .variant("number_display_format_configuration", &number_display_format)
            .variant("percentage_display_format_configuration", &percentage_display_format)
            .register(reg);

        let number_format_configuration = StructBuilder::new("NumberFormatConfiguration")
            .optional("format_configuration", &numeric_format_configuration)
            .register(reg);
        let date_time_format_configuration = StructBuilder::new("DateTimeFormatConfiguration")
            .optional("date_time_format", &string_len(1, 128))
            .optional("null_value_format_configuration", &null_value)
            .optional("numeric_format_configuration", &numeric_format_configuration)
            .register(reg);
        let string_format_configuration = StructBuilder::new("StringFormatConfiguration")
            .optional("null_value_format_configuration", &null_value)
            .optional("numeric_format_configuration", &numeric_format_configuration)
            .register(reg);

        let format_configuration = OneOfBuilder::new("FormatConfiguration")
            .variant("date_time_format_configuration", &date_time_format_configuration)
            .variant("number_format_configuration", &number_format_configuration)
            .variant("string_format_configuration", &string_format_configuration)
            .register(reg);

        let comparison_format = StructBuilder::new("ComparisonFormatConfiguration")
            .optional("number_display_format_configuration", &number_display_format)
            .optional("percentage_display_format_configuration", &percentage_display_format)
            .register(reg);
        let comparison_configuration = StructBuilder::new("ComparisonConfiguration")
            .optional("comparison_format", &comparison_format)
            .optional("comparison_method", &enumeration(COMPARISON_METHOD))
            .register(reg);

        Self {
            format_configuration,
            numeric_format_configuration,
            number_format_configuration,
            date_time_format_configuration,
            string_format_configuration,
            comparison_configuration,
        }
    }
}
