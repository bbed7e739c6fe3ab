use crate::DocumentSource;
use crate::DuplicatePolicy;
use crate::registry::DuplicateSource;
use crate::registry::RegistryBuilder;
use indexmap::IndexMap;

/// Immutable mapping from a document's raw source text to the generated
/// symbol of its primary definition.
///
/// Keys are kept in the order they were first seen. The same `Registry`
/// drives both the emitted registry literal and the emitted overloads, so
/// the two can never disagree about what a literal resolves to.
#[derive(Clone, Debug, PartialEq)]
pub struct Registry {
    pub(super) duplicates: Vec<DuplicateSource>,
    pub(super) entries: IndexMap<String, String>,
}

impl Registry {
    /// Convenience for building a [`Registry`] from an already-materialized
    /// list of sources in a single call.
    pub fn from_sources<'a>(
        sources: impl IntoIterator<Item = &'a DocumentSource>,
        policy: DuplicatePolicy,
    ) -> Self {
        let mut builder = RegistryBuilder::new(policy);
        for source in sources {
            builder.add_document_source(source);
        }
        builder.build()
    }

    pub fn definition_name(&self, raw_text: &str) -> Option<&str> {
        self.entries.get(raw_text).map(String::as_str)
    }

    /// Ambiguous sources encountered while building, in encounter order.
    pub fn duplicates(&self) -> &[DuplicateSource] {
        self.duplicates.as_slice()
    }

    /// `(raw_text, definition_name)` pairs in first-seen order.
    pub fn entries(&self) -> impl ExactSizeIterator<Item = (&str, &str)> {
        self.entries
            .iter()
            .map(|(raw_text, def_name)| (raw_text.as_str(), def_name.as_str()))
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }
}
