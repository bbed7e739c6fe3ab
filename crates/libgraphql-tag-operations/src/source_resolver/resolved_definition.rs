use crate::source_resolver::DefinitionKind;

/// A named operation or fragment declared by a document source.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ResolvedDefinition {
    pub kind: DefinitionKind,
    pub name: String,
    pub symbol_name: String,
}
