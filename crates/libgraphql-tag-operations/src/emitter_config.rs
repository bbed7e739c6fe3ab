use crate::DuplicatePolicy;
use crate::EmissionMode;
use crate::source_resolver::DefinitionNamer;
use serde::Deserialize;
use serde::Serialize;
use thiserror::Error;

const DEFAULT_DEFINITIONS_MODULE: &str = "./graphql";
const DEFINITIONS_NAMESPACE: &str = "graphql";
const DEFAULT_REGISTRY_NAME: &str = "documents";
const DEFAULT_TAG_FUNCTION_NAME: &str = "gql";
const DEFAULT_TYPED_DOCUMENT_MODULE: &str = "@graphql-typed-document-node/core";

/// Configuration consumed by [`Emitter`](crate::Emitter).
///
/// The presence of [`EmitterConfig::augmented_module_name`] is what selects
/// [`EmissionMode::Augmented`]; leaving it unset selects
/// [`EmissionMode::Local`]. The module name itself is not validated.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(default, rename_all = "camelCase")]
pub struct EmitterConfig {
    pub augmented_module_name: Option<String>,
    pub definitions_module: String,
    pub duplicate_policy: DuplicatePolicy,
    pub header: Option<String>,
    pub registry_name: String,
    pub tag_function_name: String,
    pub typed_document_module: String,
}

impl EmitterConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn emission_mode(&self) -> EmissionMode {
        match &self.augmented_module_name {
            Some(module_name) => EmissionMode::Augmented {
                module_name: module_name.to_owned(),
            },
            None => EmissionMode::Local,
        }
    }

    /// The identifier a local module declares its registry value under:
    /// [`EmitterConfig::registry_name`], suffixed with `_` for as long as it
    /// would collide with the tag function.
    pub fn registry_identifier(&self) -> String {
        unique_identifier(&self.registry_name, &[self.tag_function_name.as_str()])
    }

    /// The namespace a local module imports the generated definitions under:
    /// `graphql`, suffixed with `_` for as long as it would collide with the
    /// tag function or the registry.
    pub fn definitions_namespace(&self) -> String {
        let registry_identifier = self.registry_identifier();
        unique_identifier(
            DEFINITIONS_NAMESPACE,
            &[self.tag_function_name.as_str(), registry_identifier.as_str()],
        )
    }

    pub fn with_augmented_module_name(mut self, module_name: impl Into<String>) -> Self {
        self.augmented_module_name = Some(module_name.into());
        self
    }

    pub fn with_duplicate_policy(mut self, policy: DuplicatePolicy) -> Self {
        self.duplicate_policy = policy;
        self
    }

    pub fn with_header(mut self, header: impl Into<String>) -> Self {
        self.header = Some(header.into());
        self
    }
}

impl std::default::Default for EmitterConfig {
    fn default() -> Self {
        Self {
            augmented_module_name: None,
            definitions_module: DEFAULT_DEFINITIONS_MODULE.to_string(),
            duplicate_policy: DuplicatePolicy::default(),
            header: None,
            registry_name: DEFAULT_REGISTRY_NAME.to_string(),
            tag_function_name: DEFAULT_TAG_FUNCTION_NAME.to_string(),
            typed_document_module: DEFAULT_TYPED_DOCUMENT_MODULE.to_string(),
        }
    }
}

fn unique_identifier(preferred: &str, taken: &[&str]) -> String {
    let mut identifier = preferred.to_string();
    while taken.contains(&identifier.as_str()) {
        identifier.push('_');
    }
    identifier
}

/// The on-disk shape of a codegen configuration file: emitter settings and
/// definition-naming settings side by side in one flat JSON object.
///
/// ```
/// use libgraphql_tag_operations::CodegenConfig;
///
/// let config = CodegenConfig::from_json_str(r#"{
///     "augmentedModuleName": "@urql/core",
///     "header": "/* eslint-disable */",
///     "transformUnderscore": true
/// }"#).unwrap();
///
/// assert_eq!(
///     config.emitter.augmented_module_name.as_deref(),
///     Some("@urql/core"),
/// );
/// assert!(config.naming.transform_underscore);
/// ```
#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
pub struct CodegenConfig {
    #[serde(flatten)]
    pub emitter: EmitterConfig,

    #[serde(flatten)]
    pub naming: DefinitionNamer,
}

impl CodegenConfig {
    pub fn from_json_str(content: impl AsRef<str>) -> Result<Self, ConfigError> {
        serde_json::from_str(content.as_ref())
            .map_err(ConfigError::InvalidJson)
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid codegen config JSON: {0}")]
    InvalidJson(#[source] serde_json::Error),
}
