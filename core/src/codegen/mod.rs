#![deny(missing_docs)]

//! # Code Generation
//!
//! Emitters turning a parsed [`crate::oas::ApiDefinition`] into TypeScript
//! source text. Pure functions over the document; no I/O, no state between
//! calls.

/// Identifier casing helpers.
pub mod naming;

/// Schema node -> type expression rendering.
pub mod shape;

/// Operation methods and the final client module.
pub mod client;

pub use client::{format_operation, format_parameter_interface, format_typescript_client};
pub use shape::format_schema_shape;
