mod definition_kind;
mod definition_namer;
mod naming_convention;
mod resolved_definition;
mod source_resolve_error;
#[allow(clippy::module_inception)]
mod source_resolver;
mod source_with_definitions;

pub use definition_kind::DefinitionKind;
pub use definition_namer::DefinitionNamer;
pub use naming_convention::NamingConvention;
pub use resolved_definition::ResolvedDefinition;
pub use source_resolve_error::SourceResolveError;
pub use source_resolver::SourceResolver;
pub use source_with_definitions::SourceWithDefinitions;

#[cfg(test)]
mod tests;
