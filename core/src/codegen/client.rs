#![deny(missing_docs)]

//! # Client Emission
//!
//! Compiles operations into async client methods and assembles the final
//! TypeScript module: exported type aliases for named schemas, one exported
//! parameter interface per operation, and one `Api` class wrapping all
//! methods.
//!
//! Emission is pure text assembly; writing the result anywhere is the
//! caller's job.

use crate::codegen::naming::{field_name, method_name, params_interface_name, type_name};
use crate::codegen::shape::format_schema_shape;
use crate::oas::document::{ApiDefinition, OperationDefinition, ParamLocation, ParameterDefinition};
use crate::oas::schemas::SchemaDefinition;

/// Renders the exported parameter interface for one operation.
///
/// Every declared parameter appears as a field, `?`-suffixed when not
/// required, regardless of whether it is wired into marshalling code.
pub fn format_parameter_interface(
    operation_id: &str,
    parameters: &[ParameterDefinition],
) -> String {
    let mut lines = vec![format!(
        "export interface {} {{",
        params_interface_name(operation_id)
    )];

    for parameter in parameters {
        let suffix = if parameter.required { "" } else { "?" };
        lines.push(format!(
            "  {}{}: {}",
            field_name(&parameter.name),
            suffix,
            format_schema_shape(&parameter.schema)
        ));
    }

    lines.push("}".to_string());
    lines.join("\n")
}

/// Renders marshalling statements for one parameter.
///
/// Only string-typed query/header/path parameters produce code; cookie,
/// location-less, and non-string parameters are declared in the interface
/// but have no runtime effect.
fn format_parameter_marshalling(parameter: &ParameterDefinition) -> Vec<String> {
    if parameter.schema.type_ != "string" {
        return Vec::new();
    }

    let value = format!("params.{}", field_name(&parameter.name));

    match parameter.location {
        Some(ParamLocation::Query) => vec![
            format!("    if ({} !== undefined) {{", value),
            format!(
                "      url.searchParams.set(\"{}\", {});",
                parameter.name, value
            ),
            "    }".to_string(),
        ],
        Some(ParamLocation::Header) => vec![
            format!("    if ({} !== undefined) {{", value),
            format!("      headers.set(\"{}\", {});", parameter.name, value),
            "    }".to_string(),
        ],
        Some(ParamLocation::Path) => vec![format!(
            "    url.pathname = url.pathname.replace(\"{{{}}}\", {});",
            parameter.name, value
        )],
        Some(ParamLocation::Cookie) | None => Vec::new(),
    }
}

/// Renders one operation as an async client method.
///
/// Every method issues a plain `fetch` with accumulated headers, which is a
/// GET; POST-declared operations are emitted the same way.
pub fn format_operation(path: &str, operation: &OperationDefinition) -> String {
    let name = method_name(&operation.operation_id);
    let interface = params_interface_name(&operation.operation_id);

    // A missing 200/application/json entry renders as the empty schema.
    let empty = SchemaDefinition::default();
    let response_shape =
        format_schema_shape(operation.json_response_schema().unwrap_or(&empty));

    let params_suffix = if operation.parameters.is_empty() { "?" } else { "" };

    let mut lines = vec![
        format!(
            "  async {}(params{}: {}): Promise<{}> {{",
            name, params_suffix, interface, response_shape
        ),
        "    const headers = new Headers();".to_string(),
        format!("    const url = new URL(\"{}\", this.baseUrl);", path),
    ];

    for parameter in &operation.parameters {
        lines.extend(format_parameter_marshalling(parameter));
    }

    lines.extend([
        "    const response = await fetch(url, { headers });".to_string(),
        "    const body = await response.json();".to_string(),
        "    return body;".to_string(),
        "  }".to_string(),
    ]);

    lines.join("\n")
}

/// Emits the complete TypeScript client module for a parsed document.
///
/// Sections in order: schema type aliases, parameter interfaces, the `Api`
/// class, separated by blank lines.
pub fn format_typescript_client(document: &ApiDefinition) -> String {
    let operations = document.list_operations();
    let schemas = document.list_schemas();
    tracing::debug!(
        operations = operations.len(),
        schemas = schemas.len(),
        "emitting TypeScript client"
    );

    let aliases: Vec<String> = schemas
        .iter()
        .map(|schema| {
            format!(
                "export type {} = {}",
                type_name(&schema.name),
                format_schema_shape(&schema.schema)
            )
        })
        .collect();

    let interfaces: Vec<String> = operations
        .iter()
        .map(|operation| {
            format_parameter_interface(
                &operation.definition.operation_id,
                &operation.definition.parameters,
            )
        })
        .collect();

    let methods: Vec<String> = operations
        .iter()
        .map(|operation| format_operation(&operation.path, &operation.definition))
        .collect();

    let class = [
        "export class Api {".to_string(),
        "  constructor(private baseUrl: string = window.location.origin) {".to_string(),
        "  }".to_string(),
        String::new(),
        methods.join("\n\n"),
        "}".to_string(),
    ]
    .join("\n");

    [aliases.join("\n"), interfaces.join("\n"), class].join("\n\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn string_schema() -> SchemaDefinition {
        SchemaDefinition {
            type_: "string".into(),
            ..Default::default()
        }
    }

    fn parameter(name: &str, location: ParamLocation, required: bool) -> ParameterDefinition {
        ParameterDefinition {
            name: name.to_string(),
            location: Some(location),
            required,
            schema: string_schema(),
        }
    }

    #[test]
    fn test_parameter_interface_fields() {
        let parameters = vec![
            parameter("q1", ParamLocation::Query, false),
            parameter("q2", ParamLocation::Query, true),
        ];
        let result = format_parameter_interface("getHello", &parameters);

        assert_eq!(
            result,
            "export interface GetHelloParams {\n  q1?: string\n  q2: string\n}"
        );
    }

    #[test]
    fn test_empty_parameter_interface() {
        let result = format_parameter_interface("postHello", &[]);
        assert_eq!(result, "export interface PostHelloParams {\n}");
    }

    #[test]
    fn test_query_parameter_is_guarded() {
        let operation = OperationDefinition {
            operation_id: "getHello".into(),
            parameters: vec![parameter("q1", ParamLocation::Query, false)],
            ..Default::default()
        };
        let result = format_operation("/", &operation);

        assert!(result.contains("if (params.q1 !== undefined) {"));
        assert!(result.contains("url.searchParams.set(\"q1\", params.q1);"));
    }

    #[test]
    fn test_header_parameter_is_guarded() {
        let operation = OperationDefinition {
            operation_id: "getHello".into(),
            parameters: vec![parameter("X-Trace-Id", ParamLocation::Header, false)],
            ..Default::default()
        };
        let result = format_operation("/", &operation);

        assert!(result.contains("if (params.xTraceId !== undefined) {"));
        assert!(result.contains("headers.set(\"X-Trace-Id\", params.xTraceId);"));
    }

    #[test]
    fn test_path_parameter_substitution_is_unconditional() {
        let operation = OperationDefinition {
            operation_id: "getUser".into(),
            parameters: vec![parameter("id", ParamLocation::Path, true)],
            ..Default::default()
        };
        let result = format_operation("/users/{id}", &operation);

        assert!(result
            .contains("url.pathname = url.pathname.replace(\"{id}\", params.id);"));
        assert!(!result.contains("if (params.id"));
    }

    #[test]
    fn test_cookie_and_non_string_parameters_produce_no_marshalling() {
        let mut number_param = parameter("limit", ParamLocation::Query, false);
        number_param.schema.type_ = "number".into();
        let operation = OperationDefinition {
            operation_id: "getHello".into(),
            parameters: vec![
                number_param,
                parameter("session", ParamLocation::Cookie, false),
            ],
            ..Default::default()
        };
        let result = format_operation("/", &operation);

        assert!(!result.contains("limit"));
        assert!(!result.contains("session"));
        // They still show up in the interface.
        let interface =
            format_parameter_interface("getHello", &operation.parameters);
        assert!(interface.contains("limit?: number"));
        assert!(interface.contains("session?: string"));
    }

    #[test]
    fn test_parameter_without_location_produces_no_marshalling() {
        let mut no_location = parameter("q1", ParamLocation::Query, false);
        no_location.location = None;
        let operation = OperationDefinition {
            operation_id: "getHello".into(),
            parameters: vec![no_location],
            ..Default::default()
        };
        let result = format_operation("/", &operation);

        assert!(!result.contains("url.searchParams.set(\"q1\""));
        assert!(!result.contains("headers.set(\"q1\""));
        // Still declared in the interface.
        let interface = format_parameter_interface("getHello", &operation.parameters);
        assert!(interface.contains("q1?: string"));
    }

    #[test]
    fn test_missing_response_renders_unknown() {
        let operation = OperationDefinition {
            operation_id: "getHello".into(),
            ..Default::default()
        };
        let result = format_operation("/", &operation);

        assert!(result.contains("Promise<unknown>"));
    }

    #[test]
    fn test_zero_parameters_makes_argument_optional() {
        let operation = OperationDefinition {
            operation_id: "getHello".into(),
            ..Default::default()
        };
        let result = format_operation("/", &operation);

        assert!(result.contains("async getHello(params?: GetHelloParams)"));
    }

    #[test]
    fn test_method_body_layout() {
        let operation = OperationDefinition {
            operation_id: "getUser".into(),
            ..Default::default()
        };
        let result = format_operation("/users", &operation);

        let expected = [
            "  async getUser(params?: GetUserParams): Promise<unknown> {",
            "    const headers = new Headers();",
            "    const url = new URL(\"/users\", this.baseUrl);",
            "    const response = await fetch(url, { headers });",
            "    const body = await response.json();",
            "    return body;",
            "  }",
        ]
        .join("\n");

        assert_eq!(result, expected);
    }
}
