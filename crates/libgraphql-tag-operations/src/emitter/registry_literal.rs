use crate::Registry;
use crate::emit;
use crate::emit::Emit;

/// The registry rendered as an exported object literal whose values
/// reference the generated definitions through a namespace import:
///
/// ```text
/// export const documents = {
///     "query A { id }": graphql.ADocument,
/// };
/// ```
///
/// Declared as a `const` value so that `typeof documents` is the registry
/// *type* which the local overloads index into.
#[derive(Debug)]
pub struct RegistryLiteral<'a> {
    pub(crate) namespace: &'a str,
    pub(crate) registry: &'a Registry,
    pub(crate) registry_name: &'a str,
}

impl<'a> RegistryLiteral<'a> {
    pub fn new(registry: &'a Registry, registry_name: &'a str, namespace: &'a str) -> Self {
        Self {
            namespace,
            registry,
            registry_name,
        }
    }
}

impl Emit for RegistryLiteral<'_> {
    fn emit(&self) -> String {
        if self.registry.is_empty() {
            return format!("export const {} = {{}};", self.registry_name);
        }

        let mut output = format!("export const {} = {{\n", self.registry_name);
        for (raw_text, definition_name) in self.registry.entries() {
            output.push_str(&format!(
                "    {}: {}.{definition_name},\n",
                emit::string_literal(raw_text),
                self.namespace,
            ));
        }
        output.push_str("};");
        output
    }
}
