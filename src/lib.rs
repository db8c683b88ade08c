//! Analysis Definition SDK - Schema-driven conversion for analysis definitions
//!
//! Provides unified interfaces for:
//! - Schema descriptors (scalars, structs, oneof groups) and their builders
//! - The node catalog for analysis, template and data set definitions
//! - Expanding configuration trees into domain object graphs
//! - Flattening domain object graphs back into configuration trees
//! - Rendering domain values in the service wire shape

pub mod catalog;
#[cfg(feature = "cli")]
pub mod cli;
pub mod convert;
pub mod error;
pub mod models;
pub mod schema;
pub mod validation;
pub mod wire;

// Re-export commonly used types
pub use catalog::Catalog;
pub use convert::{
    ConversionConfig, Converter, MalformedScalarPolicy, VariantPolicy, expand, flatten, normalize,
};
pub use error::{ExpandError, ExpandErrorKind, ExpandResult, FieldPath, PathSegment};
pub use models::{ConfigValue, DomainValue, Leaf, Scalar};
pub use schema::{Cardinality, SchemaNode};
pub use wire::{from_wire, to_wire};
