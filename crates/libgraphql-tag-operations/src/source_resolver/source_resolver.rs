use crate::DocumentSource;
use crate::file_reader;
use crate::source_resolver::DefinitionKind;
use crate::source_resolver::DefinitionNamer;
use crate::source_resolver::ResolvedDefinition;
use crate::source_resolver::SourceResolveError;
use crate::source_resolver::SourceWithDefinitions;
use graphql_parser::query::Definition;
use graphql_parser::query::OperationDefinition;
use std::path::Path;

type Result<T> = std::result::Result<T, SourceResolveError>;

/// Collects GraphQL document sources and resolves each one to the named
/// operations and fragments it declares.
///
/// Line breaks are normalized to `\n` before parsing, and the normalized
/// text becomes the source's raw text. Anonymous operations are ignored and
/// sources without any named definition are skipped.
///
/// # Example
///
/// ```
/// use libgraphql_tag_operations::SourceResolver;
///
/// let mut resolver = SourceResolver::new();
/// resolver.add_from_str("query GetUser { user { id } }", None).unwrap();
/// resolver.add_from_str("fragment UserFields on User { id }", None).unwrap();
///
/// let sources = resolver.resolve();
/// assert_eq!(sources[0].primary_definition_name(), "GetUserDocument");
/// assert_eq!(sources[1].primary_definition_name(), "UserFieldsFragmentDoc");
/// ```
#[derive(Debug, Default)]
pub struct SourceResolver {
    namer: DefinitionNamer,
    sources: Vec<SourceWithDefinitions>,
}

impl SourceResolver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_namer(namer: DefinitionNamer) -> Self {
        Self {
            namer,
            sources: vec![],
        }
    }

    /// Read a file and add its full content as one document source.
    pub fn add_from_file(&mut self, file_path: impl AsRef<Path>) -> Result<()> {
        let file_path = file_path.as_ref();
        let content = file_reader::read_content(file_path)?;
        self.add_from_str(content, Some(file_path))
    }

    /// Parse `content` as an executable document and add it as one document
    /// source.
    pub fn add_from_str(
        &mut self,
        content: impl AsRef<str>,
        file_path: Option<&Path>,
    ) -> Result<()> {
        let raw_text = fix_line_breaks(content.as_ref());
        let definitions = self.resolve_definitions(&raw_text, file_path)?;
        if definitions.is_empty() {
            log::debug!(
                "Skipping document source{} with no named operations or \
                fragments.",
                file_path.map(|p| format!(" at {p:?}")).unwrap_or_default(),
            );
            return Ok(());
        }

        log::trace!(
            "Resolved {} definitions; primary is `{}`.",
            definitions.len(),
            definitions[0].symbol_name,
        );
        self.sources.push(SourceWithDefinitions {
            definitions,
            file_path: file_path.map(Path::to_path_buf),
            raw_text,
        });

        Ok(())
    }

    /// One `(raw text, primary definition)` record per added source, in the
    /// order the sources were added.
    pub fn resolve(&self) -> Vec<DocumentSource> {
        self.sources
            .iter()
            .map(SourceWithDefinitions::to_document_source)
            .collect()
    }

    fn resolve_definitions(
        &self,
        raw_text: &str,
        file_path: Option<&Path>,
    ) -> Result<Vec<ResolvedDefinition>> {
        let ast_doc = graphql_parser::query::parse_query::<String>(raw_text)
            .map_err(|err| SourceResolveError::Parse {
                file_path: file_path.map(Path::to_path_buf),
                err,
            })?;

        let definitions = ast_doc.definitions
            .iter()
            .filter_map(|def| {
                let (kind, name) = match def {
                    Definition::Fragment(frag_def) =>
                        (DefinitionKind::Fragment, Some(&frag_def.name)),
                    Definition::Operation(OperationDefinition::Query(query)) =>
                        (DefinitionKind::Query, query.name.as_ref()),
                    Definition::Operation(OperationDefinition::Mutation(mutation)) =>
                        (DefinitionKind::Mutation, mutation.name.as_ref()),
                    Definition::Operation(OperationDefinition::Subscription(sub)) =>
                        (DefinitionKind::Subscription, sub.name.as_ref()),
                    Definition::Operation(OperationDefinition::SelectionSet(_)) =>
                        (DefinitionKind::Query, None),
                };

                name.map(|name| ResolvedDefinition {
                    kind,
                    name: name.to_owned(),
                    symbol_name: self.namer.symbol_name(kind, name),
                })
            })
            .collect::<Vec<_>>();

        Ok(definitions)
    }

    pub fn sources_with_definitions(&self) -> &[SourceWithDefinitions] {
        self.sources.as_slice()
    }
}

fn fix_line_breaks(content: &str) -> String {
    content.replace("\r\n", "\n")
}
