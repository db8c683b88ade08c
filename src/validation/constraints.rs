//! Scalar constraint and cardinality checks
//!
//! The host configuration system normally enforces these before a tree reaches
//! the converter; expand only runs them when asked to.

use crate::error::ExpandErrorKind;
use crate::models::Scalar;
use crate::schema::{Cardinality, ScalarKind, ScalarSchema};

/// Result of a constraint check
pub type ConstraintResult = Result<(), ExpandErrorKind>;

/// Check a tree scalar against the constraints of its schema
///
/// Enum membership is reported as `InvalidEnumValue`; length, pattern and range
/// failures as `ConstraintViolation`. Nullable integer sentinels always pass.
///
/// # Example
///
/// ```rust
/// use analysis_definition_sdk::models::Scalar;
/// use analysis_definition_sdk::schema::{ScalarKind, ScalarSchema};
/// use analysis_definition_sdk::validation::check_scalar;
///
/// let schema = ScalarSchema::new(ScalarKind::String).with_length(1, 3);
/// assert!(check_scalar(&Scalar::from("abc"), &schema).is_ok());
/// assert!(check_scalar(&Scalar::from("abcd"), &schema).is_err());
/// ```
pub fn check_scalar(value: &Scalar, schema: &ScalarSchema) -> ConstraintResult {
    let constraints = &schema.constraints;

    if schema.kind == ScalarKind::NullableInt
        && let Scalar::String(s) = value
        && (s.is_empty() || s == "null")
    {
        return Ok(());
    }

    if !constraints.enum_values.is_empty() {
        let candidate = value.as_str().unwrap_or_default();
        if !constraints.enum_values.iter().any(|v| v == candidate) {
            return Err(ExpandErrorKind::InvalidEnumValue {
                value: display(value),
                allowed: constraints.enum_values.clone(),
            });
        }
    }

    if let Scalar::String(s) = value
        && schema.kind != ScalarKind::NullableInt
    {
        if let Some((min, max)) = constraints.length {
            let len = s.chars().count();
            if len < min || len > max {
                return Err(ExpandErrorKind::ConstraintViolation(format!(
                    "length {} outside {}..={}",
                    len, min, max
                )));
            }
        }
        if let Some(pattern) = &constraints.pattern
            && !pattern.is_match(s)
        {
            return Err(ExpandErrorKind::ConstraintViolation(format!(
                "{:?} does not match pattern {}",
                s,
                pattern.as_str()
            )));
        }
    }

    if let Some((min, max)) = constraints.range
        && let Some(number) = numeric(value, schema.kind)
        && (number < min || number > max)
    {
        return Err(ExpandErrorKind::ConstraintViolation(format!(
            "{} outside {}..={}",
            number, min, max
        )));
    }

    Ok(())
}

/// Check an element count against a field's cardinality
///
/// Singular cardinalities only reject more than one element; a missing
/// required value is reported separately as `MissingRequiredField`.
pub fn check_cardinality(actual: usize, cardinality: Cardinality) -> ConstraintResult {
    let (min, max) = cardinality.bounds();
    let ok = match cardinality {
        Cardinality::Required | Cardinality::OptionalSingle => actual <= 1,
        Cardinality::List { .. } | Cardinality::Set { .. } => actual >= min && actual <= max,
    };
    if ok {
        Ok(())
    } else {
        Err(ExpandErrorKind::CardinalityViolation { min, max, actual })
    }
}

fn numeric(value: &Scalar, kind: ScalarKind) -> Option<f64> {
    match value {
        Scalar::Number(n) => n.as_f64(),
        Scalar::String(s) if kind == ScalarKind::NullableInt => s.parse::<i64>().ok().map(|v| v as f64),
        Scalar::String(s) if kind == ScalarKind::Float => s.parse::<f64>().ok(),
        _ => None,
    }
}

fn display(value: &Scalar) -> String {
    match value {
        Scalar::String(s) => s.clone(),
        Scalar::Number(n) => n.to_string(),
        Scalar::Bool(b) => b.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::builder::{COLOR_PATTERN, ID_PATTERN};

    #[test]
    fn test_enum_membership_is_case_sensitive() {
        let schema = ScalarSchema::new(ScalarKind::Enum).with_enum_values(["ENABLED", "DISABLED"]);
        assert!(check_scalar(&Scalar::from("ENABLED"), &schema).is_ok());
        assert!(matches!(
            check_scalar(&Scalar::from("enabled"), &schema),
            Err(ExpandErrorKind::InvalidEnumValue { .. })
        ));
    }

    #[test]
    fn test_length_counts_characters() {
        let schema = ScalarSchema::new(ScalarKind::String).with_length(1, 2);
        assert!(check_scalar(&Scalar::from("äö"), &schema).is_ok());
        assert!(check_scalar(&Scalar::from(""), &schema).is_err());
    }

    #[test]
    fn test_pattern() {
        let id = ScalarSchema::new(ScalarKind::String).with_pattern(&ID_PATTERN);
        assert!(check_scalar(&Scalar::from("visual-1"), &id).is_ok());
        assert!(check_scalar(&Scalar::from("visual 1"), &id).is_err());

        let color = ScalarSchema::new(ScalarKind::Color).with_pattern(&COLOR_PATTERN);
        assert!(check_scalar(&Scalar::from("#FFAA00"), &color).is_ok());
        assert!(check_scalar(&Scalar::from("red"), &color).is_err());
    }

    #[test]
    fn test_range() {
        let schema = ScalarSchema::new(ScalarKind::Integer).with_range(1.0, 1000.0);
        assert!(check_scalar(&Scalar::from(1000), &schema).is_ok());
        assert!(check_scalar(&Scalar::from(0), &schema).is_err());

        let float = ScalarSchema::new(ScalarKind::Float).with_range(0.0, 1.0);
        assert!(check_scalar(&Scalar::from_f64(f64::INFINITY), &float).is_err());
        assert!(check_scalar(&Scalar::from_f64(0.5), &float).is_ok());
    }

    #[test]
    fn test_nullable_int_range_and_sentinels() {
        let schema = ScalarSchema::new(ScalarKind::NullableInt).with_range(0.0, 35.0);
        assert!(check_scalar(&Scalar::from(""), &schema).is_ok());
        assert!(check_scalar(&Scalar::from("null"), &schema).is_ok());
        assert!(check_scalar(&Scalar::from("35"), &schema).is_ok());
        assert!(check_scalar(&Scalar::from("36"), &schema).is_err());
    }

    #[test]
    fn test_cardinality() {
        let list = Cardinality::List { min: 1, max: 3 };
        assert!(check_cardinality(1, list).is_ok());
        assert!(check_cardinality(3, list).is_ok());
        assert_eq!(
            check_cardinality(0, list),
            Err(ExpandErrorKind::CardinalityViolation { min: 1, max: 3, actual: 0 })
        );
        assert!(check_cardinality(4, list).is_err());
        assert!(check_cardinality(2, Cardinality::OptionalSingle).is_err());
        assert!(check_cardinality(0, Cardinality::Required).is_ok());
    }
}
