use crate::DocumentSource;
use crate::source_resolver::ResolvedDefinition;
use std::path::PathBuf;

/// A document source together with every named definition it declares, in
/// declaration order. Always holds at least one definition.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct SourceWithDefinitions {
    pub(super) definitions: Vec<ResolvedDefinition>,
    pub(super) file_path: Option<PathBuf>,
    pub(super) raw_text: String,
}

impl SourceWithDefinitions {
    pub fn definitions(&self) -> &[ResolvedDefinition] {
        self.definitions.as_slice()
    }

    pub fn file_path(&self) -> Option<&PathBuf> {
        self.file_path.as_ref()
    }

    /// The definition the source dispatches to: its first named one.
    pub fn primary_definition(&self) -> &ResolvedDefinition {
        &self.definitions[0]
    }

    pub fn raw_text(&self) -> &str {
        self.raw_text.as_str()
    }

    pub fn to_document_source(&self) -> DocumentSource {
        DocumentSource::new(
            self.raw_text.to_owned(),
            self.primary_definition().symbol_name.to_owned(),
        )
    }
}
