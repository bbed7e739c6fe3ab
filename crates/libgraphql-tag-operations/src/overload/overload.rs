use crate::emit::Emit;
use crate::overload::ParamType;
use crate::overload::ReturnType;

/// One call signature of the tag function.
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub struct Overload {
    pub(super) param_type: ParamType,
    pub(super) return_type: ReturnType,
}

impl Overload {
    pub fn catch_all() -> Self {
        Self {
            param_type: ParamType::String,
            return_type: ReturnType::Unknown,
        }
    }

    pub fn is_catch_all(&self) -> bool {
        self.param_type == ParamType::String
    }

    pub fn param_type(&self) -> &ParamType {
        &self.param_type
    }

    pub fn return_type(&self) -> &ReturnType {
        &self.return_type
    }

    /// Renders this signature as an exported, body-less function
    /// declaration named `function_name`.
    pub fn emit_declaration(&self, function_name: &str) -> String {
        format!(
            "export function {function_name}(source: {}): {};",
            self.param_type.emit(),
            self.return_type.emit(),
        )
    }
}
