#![deny(missing_docs)]

//! # JSON Schema Definitions
//!
//! Deserialization structures for the JSON Schema fragments embedded in an
//! OpenAPI document, plus the `SchemaShape` classification used by the
//! TypeScript emitter.
//!
//! Classification encodes a fixed precedence: combinators win over `items`,
//! `items` over `enum`, `enum` over primitive `type`, and `$ref` is only
//! consulted when nothing else matched. A node matching no rule is `Unknown`.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// One JSON Schema fragment as written in the YAML document.
///
/// Every field defaults, so an absent or null nested node deserializes to the
/// empty schema (which classifies as [`SchemaShape::Unknown`]).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SchemaDefinition {
    /// The `type` keyword (`"object"`, `"string"`, ...). Empty when absent.
    #[serde(rename = "type", skip_serializing_if = "String::is_empty")]
    pub type_: String,

    /// Named sub-schemas for `type: object`. Keeps document order.
    #[serde(skip_serializing_if = "IndexMap::is_empty")]
    pub properties: IndexMap<String, SchemaDefinition>,

    /// A `$ref` target such as `#/components/schemas/User`. Empty when absent.
    #[serde(rename = "$ref", skip_serializing_if = "String::is_empty")]
    pub reference: String,

    /// Property names that must be present on an object.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub required: Vec<String>,

    /// The `additionalProperties` flag. Defaults to `false`.
    #[serde(
        rename = "additionalProperties",
        skip_serializing_if = "std::ops::Not::not"
    )]
    pub additional_properties: bool,

    /// Union members (`oneOf`).
    #[serde(rename = "oneOf", skip_serializing_if = "Vec::is_empty")]
    pub one_of: Vec<SchemaDefinition>,

    /// Intersection members (`allOf`).
    #[serde(rename = "allOf", skip_serializing_if = "Vec::is_empty")]
    pub all_of: Vec<SchemaDefinition>,

    /// String literal alternatives (`enum`). Only string enums are supported.
    #[serde(rename = "enum", skip_serializing_if = "Vec::is_empty")]
    pub enum_values: Vec<String>,

    /// Element schema for arrays.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub items: Option<Box<SchemaDefinition>>,
}

/// The classified shape of a schema node.
///
/// Borrowed views into the owning [`SchemaDefinition`]; produced by
/// [`SchemaDefinition::shape`] and consumed by the emitter's exhaustive match.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SchemaShape<'a> {
    /// `allOf` combinator: intersection of the member shapes.
    Intersection(&'a [SchemaDefinition]),
    /// `oneOf` combinator: union of the member shapes.
    Union(&'a [SchemaDefinition]),
    /// Array schema with the given element schema.
    Array(&'a SchemaDefinition),
    /// String literal enumeration, document order.
    Enum(&'a [String]),
    /// `type: boolean`.
    Boolean,
    /// `type: string`.
    String,
    /// `type: number` or `type: integer`.
    Number,
    /// `type: object`; the full node is kept to reach properties and
    /// `required`/`additionalProperties`.
    Object(&'a SchemaDefinition),
    /// A `$ref` target, rendered as a bare name and never inlined.
    Ref(&'a str),
    /// No recognized shape signal.
    Unknown,
}

impl SchemaDefinition {
    /// Classifies this node, applying the emitter's precedence order.
    ///
    /// A node setting several signals at once (e.g. both `oneOf` and `type`)
    /// resolves to the highest-precedence one.
    pub fn shape(&self) -> SchemaShape<'_> {
        if !self.all_of.is_empty() {
            return SchemaShape::Intersection(&self.all_of);
        }
        if !self.one_of.is_empty() {
            return SchemaShape::Union(&self.one_of);
        }
        if let Some(items) = &self.items {
            return SchemaShape::Array(items);
        }
        if !self.enum_values.is_empty() {
            return SchemaShape::Enum(&self.enum_values);
        }
        match self.type_.as_str() {
            "boolean" => SchemaShape::Boolean,
            "string" => SchemaShape::String,
            "number" | "integer" => SchemaShape::Number,
            "object" => SchemaShape::Object(self),
            _ if !self.reference.is_empty() => SchemaShape::Ref(&self.reference),
            _ => SchemaShape::Unknown,
        }
    }

    /// True when a property name is listed in `required`.
    pub fn is_required(&self, property: &str) -> bool {
        self.required.iter().any(|name| name == property)
    }
}
