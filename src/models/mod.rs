//! Value models
//!
//! The two value universes the conversion engine maps between:
//! - [`ConfigValue`] - the configuration tree supplied by the host
//! - [`DomainValue`] - the resolved domain object graph sent to the remote service

pub mod config;
pub mod domain;

pub use config::{ConfigValue, Scalar};
pub use domain::{DomainValue, Leaf};
