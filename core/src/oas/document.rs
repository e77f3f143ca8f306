#![deny(missing_docs)]

//! # OpenAPI Document Parsing
//!
//! Deserialization structures for the parts of an OpenAPI 3.x document the
//! generator consumes, plus the loader and the operation/schema listings the
//! emitter walks.
//!
//! The document is parsed once per run and never mutated; `IndexMap` keeps
//! every mapping in document order so repeated runs over the same file
//! produce identical output.

use crate::error::{AppError, AppResult};
use crate::oas::schemas::SchemaDefinition;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Document metadata from the `info` block.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ApiInfo {
    /// Human-readable API title.
    pub title: String,
    /// API version string.
    pub version: String,
}

/// Where a parameter is carried on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ParamLocation {
    /// URL query string.
    Query,
    /// HTTP request header.
    Header,
    /// URL path template segment.
    Path,
    /// Cookie. Parsed but never wired into generated marshalling code.
    Cookie,
}

/// One operation parameter.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParameterDefinition {
    /// Parameter name as it appears on the wire.
    pub name: String,
    /// Wire location. `None` when the document omits `in`; such a parameter
    /// is declared in the generated interface but never marshalled.
    #[serde(rename = "in", skip_serializing_if = "Option::is_none")]
    pub location: Option<ParamLocation>,
    /// Whether the parameter must be supplied.
    pub required: bool,
    /// Value schema.
    pub schema: SchemaDefinition,
}

/// A media-type entry under a response's `content`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContentDefinition {
    /// Body schema for this media type.
    pub schema: SchemaDefinition,
}

/// One response listed under an operation's `responses`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ResponseDefinition {
    /// Response description.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub description: String,
    /// Media-type map (`application/json`, ...), document order.
    #[serde(skip_serializing_if = "IndexMap::is_empty")]
    pub content: IndexMap<String, ContentDefinition>,
}

/// One path operation (a single HTTP method slot under a path).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OperationDefinition {
    /// Unique identifier; drives method and interface naming.
    #[serde(rename = "operationId", skip_serializing_if = "String::is_empty")]
    pub operation_id: String,
    /// Short summary line.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub summary: String,
    /// Longer description.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub description: String,
    /// Declared parameters, document order.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub parameters: Vec<ParameterDefinition>,
    /// Responses keyed by status-code string.
    #[serde(skip_serializing_if = "IndexMap::is_empty")]
    pub responses: IndexMap<String, ResponseDefinition>,
}

impl OperationDefinition {
    /// Returns the `200` / `application/json` response schema, if declared.
    ///
    /// Callers substitute the empty schema (rendering `unknown`) when absent;
    /// a missing entry is never an error.
    pub fn json_response_schema(&self) -> Option<&SchemaDefinition> {
        self.responses
            .get("200")
            .and_then(|response| response.content.get("application/json"))
            .map(|content| &content.schema)
    }
}

/// The HTTP method slots of one path item.
///
/// PUT, DELETE and PATCH are parsed for round-trip printing but are never
/// surfaced as operations; only GET and POST are listed.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PathDefinition {
    /// GET slot.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub get: Option<OperationDefinition>,
    /// POST slot.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub post: Option<OperationDefinition>,
    /// PUT slot.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub put: Option<OperationDefinition>,
    /// DELETE slot.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub delete: Option<OperationDefinition>,
    /// PATCH slot.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub patch: Option<OperationDefinition>,
}

/// The `components` block.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ComponentsDefinition {
    /// Named schemas; these become exported type aliases.
    #[serde(skip_serializing_if = "IndexMap::is_empty")]
    pub schemas: IndexMap<String, SchemaDefinition>,
    /// Named responses. Parsed for round-trip printing only.
    #[serde(skip_serializing_if = "IndexMap::is_empty")]
    pub responses: IndexMap<String, ResponseDefinition>,
}

/// A fully parsed OpenAPI document.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ApiDefinition {
    /// OpenAPI version string (e.g. `3.0.0`).
    #[serde(skip_serializing_if = "String::is_empty")]
    pub openapi: String,
    /// Document metadata.
    pub info: ApiInfo,
    /// Path items keyed by URL template, document order.
    #[serde(skip_serializing_if = "IndexMap::is_empty")]
    pub paths: IndexMap<String, PathDefinition>,
    /// Reusable components.
    pub components: ComponentsDefinition,
}

/// One listed operation: a path+method pair with its definition.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiOperation {
    /// URL template (e.g. `/users/{id}`).
    pub path: String,
    /// Declared HTTP method slot, lowercase (`get` or `post`).
    pub method: String,
    /// The operation definition.
    pub definition: OperationDefinition,
}

/// One named component schema.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiSchema {
    /// Component name as written in the document.
    pub name: String,
    /// The schema definition.
    pub schema: SchemaDefinition,
}

impl ApiDefinition {
    /// Lists the operations the generator emits methods for.
    ///
    /// A path+method slot counts as an operation only when the slot is
    /// present with a non-empty `operationId`. Only the GET and POST slots
    /// are inspected.
    pub fn list_operations(&self) -> Vec<ApiOperation> {
        let mut result = Vec::new();

        for (path, definition) in &self.paths {
            for (method, slot) in [("get", &definition.get), ("post", &definition.post)] {
                if let Some(operation) = slot {
                    if !operation.operation_id.is_empty() {
                        result.push(ApiOperation {
                            path: path.clone(),
                            method: method.to_string(),
                            definition: operation.clone(),
                        });
                    }
                }
            }
        }

        result
    }

    /// Lists the named component schemas, document order.
    pub fn list_schemas(&self) -> Vec<ApiSchema> {
        self.components
            .schemas
            .iter()
            .map(|(name, schema)| ApiSchema {
                name: name.clone(),
                schema: schema.clone(),
            })
            .collect()
    }

    /// Re-serializes the parsed document to YAML (the `print` mode).
    pub fn to_yaml(&self) -> AppResult<String> {
        serde_yaml::to_string(self).map_err(AppError::Parse)
    }
}

/// Parses an OpenAPI document from YAML text.
pub fn parse_api_document(yaml_content: &str) -> AppResult<ApiDefinition> {
    let document: ApiDefinition = serde_yaml::from_str(yaml_content)?;
    tracing::debug!(
        paths = document.paths.len(),
        schemas = document.components.schemas.len(),
        "parsed OpenAPI document"
    );
    Ok(document)
}

/// Reads and parses an OpenAPI document from a file.
pub fn load_api_document(path: &Path) -> AppResult<ApiDefinition> {
    let content = fs::read_to_string(path)?;
    parse_api_document(&content)
}
