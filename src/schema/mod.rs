//! Schema descriptors
//!
//! Immutable metadata describing the legal shape of every node type:
//! scalars with constraints, structs with per-field cardinality and oneof
//! groups of mutually exclusive candidates.

pub mod builder;
pub mod node;

pub use builder::{OneOfBuilder, Registry, StructBuilder};
pub use node::{
    Cardinality, Constraints, Field, OneOfSchema, ScalarKind, ScalarSchema, SchemaNode,
    StructSchema, pascal_case,
};
