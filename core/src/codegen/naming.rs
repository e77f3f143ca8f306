#![deny(missing_docs)]

//! # Naming Utilities
//!
//! Helper functions for deriving TypeScript identifiers from OpenAPI
//! schema names, operation IDs, and parameter names.

use heck::{ToLowerCamelCase, ToUpperCamelCase};

/// Converts a schema or interface name to `UpperCamelCase`.
///
/// e.g. `user_profile` -> `UserProfile`
pub fn type_name(name: &str) -> String {
    name.to_upper_camel_case()
}

/// Converts an `operationId` to a `lowerCamelCase` method name.
///
/// e.g. `get_user` -> `getUser`
pub fn method_name(operation_id: &str) -> String {
    operation_id.to_lower_camel_case()
}

/// Derives the parameter-interface name for an operation.
///
/// The literal suffix `_params` is appended to the method name before
/// camel-casing. e.g. `getUser` -> `GetUserParams`.
pub fn params_interface_name(operation_id: &str) -> String {
    type_name(&format!("{}_params", method_name(operation_id)))
}

/// Converts a parameter name to a `lowerCamelCase` field name.
pub fn field_name(name: &str) -> String {
    name.to_lower_camel_case()
}
