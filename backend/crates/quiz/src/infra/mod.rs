//! Infrastructure Layer
//!
//! Implementations of the domain's storage interfaces and data loaders.

pub mod json;
pub mod memory;
