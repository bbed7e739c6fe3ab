use crate::emit;
use crate::emit::Emit;

/// The type of the single `source` parameter of a tag-function signature.
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub enum ParamType {
    /// Exactly this string literal (not the general `string` type).
    Literal(String),

    /// Any `string`; used only by the catch-all signature.
    String,
}

impl ParamType {
    pub fn as_literal(&self) -> Option<&str> {
        match self {
            Self::Literal(raw_text) => Some(raw_text.as_str()),
            Self::String => None,
        }
    }
}

impl Emit for ParamType {
    fn emit(&self) -> String {
        match self {
            Self::Literal(raw_text) => emit::string_literal(raw_text),
            Self::String => "string".to_string(),
        }
    }
}
