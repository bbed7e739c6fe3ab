//! Conversion of generated-module building blocks into TypeScript text.

/// Renders a value as the TypeScript source text that declares it.
pub trait Emit {
    fn emit(&self) -> String;
}

/// Quotes `value` as a double-quoted string literal, escaped exactly the way
/// `JSON.stringify` escapes it. Identical input always yields identical
/// output, which keeps generated files diff-stable.
pub(crate) fn string_literal(value: &str) -> String {
    serde_json::Value::from(value).to_string()
}
