//! Configuration for expand and flatten

use serde::{Deserialize, Serialize};

/// How a oneof block with several populated candidates is resolved
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum VariantPolicy {
    /// Fail with `AmbiguousVariant`
    #[default]
    Strict,
    /// Take the first populated candidate in declared order and log a warning
    FirstMatch,
}

/// How a scalar that cannot be parsed in its declared format is handled
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum MalformedScalarPolicy {
    /// Fail with `MalformedScalar`
    #[default]
    Strict,
    /// Drop the value (the field becomes absent) and log a warning
    Lenient,
}

/// Configuration for conversions
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ConversionConfig {
    /// Oneof ambiguity handling
    pub variant_policy: VariantPolicy,

    /// Unparseable timestamp and nullable integer handling
    pub malformed_scalar_policy: MalformedScalarPolicy,

    /// Check list and set element counts against their declared bounds
    pub enforce_cardinality: bool,

    /// Check scalar length, pattern and range constraints
    pub validate_constraints: bool,

    /// Treat `""` in optional textual fields as absent
    pub empty_strings_as_absent: bool,

    /// Maximum block nesting depth
    pub max_depth: usize,
}

impl Default for ConversionConfig {
    fn default() -> Self {
        Self {
            variant_policy: VariantPolicy::Strict,
            malformed_scalar_policy: MalformedScalarPolicy::Strict,
            enforce_cardinality: false,
            validate_constraints: false,
            empty_strings_as_absent: false,
            max_depth: 64,
        }
    }
}

impl ConversionConfig {
    /// Create a new configuration with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a builder for custom configuration
    pub fn builder() -> ConversionConfigBuilder {
        ConversionConfigBuilder::default()
    }

    /// Settings matching the permissive behavior of earlier provider releases:
    /// first populated variant wins and malformed scalars are dropped
    pub fn compatible() -> Self {
        Self::builder()
            .variant_policy(VariantPolicy::FirstMatch)
            .malformed_scalar_policy(MalformedScalarPolicy::Lenient)
            .empty_strings_as_absent(true)
            .build()
    }
}

/// Builder for ConversionConfig
#[derive(Debug, Default)]
pub struct ConversionConfigBuilder {
    config: ConversionConfig,
}

impl ConversionConfigBuilder {
    pub fn variant_policy(mut self, policy: VariantPolicy) -> Self {
        self.config.variant_policy = policy;
        self
    }

    pub fn malformed_scalar_policy(mut self, policy: MalformedScalarPolicy) -> Self {
        self.config.malformed_scalar_policy = policy;
        self
    }

    /// Enable or disable list and set bound checks
    pub fn enforce_cardinality(mut self, enforce: bool) -> Self {
        self.config.enforce_cardinality = enforce;
        self
    }

    /// Enable or disable scalar constraint checks
    pub fn validate_constraints(mut self, validate: bool) -> Self {
        self.config.validate_constraints = validate;
        self
    }

    pub fn empty_strings_as_absent(mut self, absent: bool) -> Self {
        self.config.empty_strings_as_absent = absent;
        self
    }

    /// Set the maximum nesting depth (at least 1)
    pub fn max_depth(mut self, depth: usize) -> Self {
        self.config.max_depth = depth.max(1);
        self
    }

    /// Build the configuration
    pub fn build(self) -> ConversionConfig {
        self.config
    }
}
