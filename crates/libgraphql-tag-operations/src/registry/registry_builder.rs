use crate::DocumentSource;
use crate::DuplicatePolicy;
use crate::registry::DuplicateSource;
use crate::registry::Registry;
use indexmap::IndexMap;
use indexmap::map::Entry;

/// Incrementally deduplicates document sources by raw text and produces a
/// [`Registry`].
///
/// Sources sharing raw text *and* definition name collapse silently. Sources
/// sharing raw text but naming different definitions are resolved by the
/// builder's [`DuplicatePolicy`] and recorded as a [`DuplicateSource`].
///
/// # Example
///
/// ```
/// use libgraphql_tag_operations::DuplicatePolicy;
/// use libgraphql_tag_operations::RegistryBuilder;
///
/// let mut builder = RegistryBuilder::new(DuplicatePolicy::FirstWins);
/// builder.add_source("query A { id }", "ADocument");
/// builder.add_source("query B { id }", "BDocument");
/// builder.add_source("query A { id }", "OtherDocument");
///
/// let registry = builder.build();
/// assert_eq!(registry.len(), 2);
/// assert_eq!(registry.definition_name("query A { id }"), Some("ADocument"));
/// assert_eq!(registry.duplicates().len(), 1);
/// ```
#[derive(Debug)]
pub struct RegistryBuilder {
    duplicates: Vec<DuplicateSource>,
    entries: IndexMap<String, String>,
    policy: DuplicatePolicy,
}

impl RegistryBuilder {
    pub fn new(policy: DuplicatePolicy) -> Self {
        Self {
            duplicates: vec![],
            entries: IndexMap::new(),
            policy,
        }
    }

    pub fn add_document_source(&mut self, source: &DocumentSource) -> &mut Self {
        self.add_source(source.raw_text(), source.primary_definition_name())
    }

    pub fn add_source(
        &mut self,
        raw_text: impl Into<String>,
        definition_name: impl Into<String>,
    ) -> &mut Self {
        let definition_name = definition_name.into();
        match self.entries.entry(raw_text.into()) {
            Entry::Vacant(entry) => {
                entry.insert(definition_name);
            },

            Entry::Occupied(entry) if entry.get() == &definition_name => (),

            Entry::Occupied(mut entry) => {
                let existing_name = entry.get().to_owned();
                let (kept, discarded) = match self.policy {
                    DuplicatePolicy::FirstWins => (existing_name, definition_name),
                    DuplicatePolicy::LastWins => {
                        entry.insert(definition_name.clone());
                        (definition_name, existing_name)
                    },
                };

                log::warn!(
                    "Document source is registered for both `{kept}` and \
                    `{discarded}`; dispatching to `{kept}` ({:?}).",
                    self.policy,
                );

                self.duplicates.push(DuplicateSource {
                    raw_text: entry.key().to_owned(),
                    kept_definition_name: kept,
                    discarded_definition_name: discarded,
                });
            },
        }

        self
    }

    pub fn build(self) -> Registry {
        Registry {
            duplicates: self.duplicates,
            entries: self.entries,
        }
    }
}

impl std::default::Default for RegistryBuilder {
    fn default() -> Self {
        Self::new(DuplicatePolicy::default())
    }
}
