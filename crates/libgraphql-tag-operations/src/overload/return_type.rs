use crate::emit;
use crate::emit::Emit;

/// The declared return type of a tag-function signature.
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub enum ReturnType {
    /// `(typeof <registry_name>)["<raw_text>"]`: indexed access into the
    /// type of the locally emitted registry value.
    RegistryIndex {
        registry_name: String,
        raw_text: String,
    },

    /// `typeof import('<definitions_module>').<definition_name>`: a direct
    /// reference to the externally generated document symbol.
    DefinitionRef {
        definitions_module: String,
        definition_name: String,
    },

    Unknown,
}

impl Emit for ReturnType {
    fn emit(&self) -> String {
        match self {
            Self::RegistryIndex { registry_name, raw_text } => format!(
                "(typeof {registry_name})[{}]",
                emit::string_literal(raw_text),
            ),

            Self::DefinitionRef { definitions_module, definition_name } => format!(
                "typeof import('{definitions_module}').{definition_name}",
            ),

            Self::Unknown => "unknown".to_string(),
        }
    }
}
