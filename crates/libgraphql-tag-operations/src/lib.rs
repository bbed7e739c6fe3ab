//! Generates the `gql` tag module for GraphQL operations and fragments:
//! a registry keyed by each document's literal source text, plus one
//! literal-keyed overload of the tag function per registered source, so
//! that `gql("query A { id }")` is typed by its source text alone.
//!
//! The pipeline is [`SourceResolver`] (optional; any host that already
//! knows each source's primary definition can skip it) →
//! [`Registry`] → [`OverloadSet`] → [`Emitter`].

mod document_source;
mod duplicate_policy;
pub mod emit;
mod emission_mode;
mod emitter;
mod emitter_config;
pub mod file_reader;
mod overload;
mod registry;
mod source_resolver;

pub use document_source::DocumentSource;
pub use duplicate_policy::DuplicatePolicy;
pub use emission_mode::EmissionMode;
pub use emitter::Emitter;
pub use emitter::GeneratedModule;
pub use emitter::RegistryLiteral;
pub use emitter_config::CodegenConfig;
pub use emitter_config::ConfigError;
pub use emitter_config::EmitterConfig;
pub use overload::Overload;
pub use overload::OverloadSet;
pub use overload::ParamType;
pub use overload::ReturnType;
pub use registry::DuplicateSource;
pub use registry::Registry;
pub use registry::RegistryBuilder;
pub use source_resolver::DefinitionKind;
pub use source_resolver::DefinitionNamer;
pub use source_resolver::NamingConvention;
pub use source_resolver::ResolvedDefinition;
pub use source_resolver::SourceResolveError;
pub use source_resolver::SourceResolver;
pub use source_resolver::SourceWithDefinitions;
