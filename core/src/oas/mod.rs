#![deny(missing_docs)]

//! # OpenAPI (OAS) Parsing
//!
//! Data model and loader for the subset of OpenAPI 3.x the generator
//! consumes: paths with GET/POST operations, string parameters, `200`
//! JSON responses, and named component schemas.

/// Document-level structures and the YAML loader.
pub mod document;

/// JSON Schema fragments and shape classification.
pub mod schemas;

pub use document::{
    load_api_document, parse_api_document, ApiDefinition, ApiInfo, ApiOperation, ApiSchema,
    ComponentsDefinition, ContentDefinition, OperationDefinition, ParamLocation,
    ParameterDefinition, PathDefinition, ResponseDefinition,
};
pub use schemas::{SchemaDefinition, SchemaShape};
