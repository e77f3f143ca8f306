#![deny(missing_docs)]

//! # Schema Shape Rendering
//!
//! Turns a classified schema node into its TypeScript type expression.
//!
//! Rendering is total: anything the classifier cannot place degrades to the
//! sentinel `unknown` so an incomplete document still yields compilable
//! output. `$ref` targets render as bare names and are never inlined, which
//! keeps recursion bounded for named recursive schemas.

use crate::codegen::naming::type_name;
use crate::oas::schemas::{SchemaDefinition, SchemaShape};

/// The prefix stripped from `$ref` targets before camel-casing.
const SCHEMA_REF_PREFIX: &str = "#/components/schemas/";

/// Renders a schema node as a TypeScript type expression.
pub fn format_schema_shape(schema: &SchemaDefinition) -> String {
    match schema.shape() {
        SchemaShape::Intersection(members) => {
            format!("({})", format_shape_members(members).join(" & "))
        }
        SchemaShape::Union(members) => {
            format!("({})", format_shape_members(members).join(" | "))
        }
        SchemaShape::Array(items) => format!("({})[]", format_schema_shape(items)),
        SchemaShape::Enum(values) => {
            let literals: Vec<String> = values
                .iter()
                .map(|value| format!("\"{}\"", value))
                .collect();
            format!("({})", literals.join(" | "))
        }
        SchemaShape::Boolean => "boolean".to_string(),
        SchemaShape::String => "string".to_string(),
        SchemaShape::Number => "number".to_string(),
        SchemaShape::Object(object) => format_object_shape(object),
        SchemaShape::Ref(reference) => {
            type_name(reference.strip_prefix(SCHEMA_REF_PREFIX).unwrap_or(reference))
        }
        SchemaShape::Unknown => "unknown".to_string(),
    }
}

/// Renders combinator members, collapsing duplicates.
///
/// Duplicates are detected on the rendered string, not the input node, so two
/// structurally different schemas that print identically count as one.
/// First-seen order is kept.
fn format_shape_members(members: &[SchemaDefinition]) -> Vec<String> {
    let mut rendered = Vec::new();

    for member in members {
        let shape = format_schema_shape(member);
        if !rendered.contains(&shape) {
            rendered.push(shape);
        }
    }

    rendered
}

/// Renders an object schema as an inline record type.
///
/// Properties are emitted sorted by name; map iteration order in the source
/// document must not leak into the output.
fn format_object_shape(schema: &SchemaDefinition) -> String {
    let mut names: Vec<&String> = schema.properties.keys().collect();
    names.sort();

    let props: Vec<String> = names
        .into_iter()
        .map(|name| {
            let suffix = if schema.is_required(name) { "" } else { "?" };
            let property = &schema.properties[name];
            format!("{}{}: {}", name, suffix, format_schema_shape(property))
        })
        .collect();

    if props.is_empty() && schema.additional_properties {
        return "Record<string, unknown>".to_string();
    }

    if props.is_empty() {
        return "Record<string, never>".to_string();
    }

    format!("{{{}}}", props.join(";"))
}
