#![deny(missing_docs)]

//! # TsGen Core
//!
//! Core library for the OpenAPI -> TypeScript client generator.
//!
//! Reads an OpenAPI 3.x document into an immutable data model, compiles each
//! JSON Schema node into a TypeScript type expression, and assembles one
//! typed client class with an async method per GET/POST operation. The whole
//! pipeline is pure: document in, one source string out.

/// Shared error types.
pub mod error;

/// OpenAPI (OAS) parsing and data model.
pub mod oas;

/// TypeScript emitters.
pub mod codegen;

pub use codegen::{
    format_operation, format_parameter_interface, format_schema_shape, format_typescript_client,
};
pub use error::{AppError, AppResult};
pub use oas::{
    load_api_document, parse_api_document, ApiDefinition, ApiOperation, ApiSchema,
    OperationDefinition, ParamLocation, ParameterDefinition, SchemaDefinition, SchemaShape,
};
