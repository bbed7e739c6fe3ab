use crate::DocumentSource;
use crate::EmissionMode;
use crate::EmitterConfig;
use crate::OverloadSet;
use crate::Registry;
use crate::emit;
use crate::emit::Emit;
use crate::emitter::GeneratedModule;
use crate::emitter::RegistryLiteral;
use crate::emitter::document_type_utility::DOCUMENT_TYPE_UTILITY;

/// Turns a resolved list of [`DocumentSource`]s into a generated TypeScript
/// module.
///
/// Emission is a single pure pass: the sources are deduplicated into a
/// [`Registry`], an [`OverloadSet`] is derived from that same registry, and
/// both are assembled into text according to the configured
/// [`EmissionMode`]. For a fixed input and config the output is
/// byte-identical across runs.
///
/// # Example
///
/// ```
/// use libgraphql_tag_operations::DocumentSource;
/// use libgraphql_tag_operations::Emitter;
/// use libgraphql_tag_operations::EmitterConfig;
///
/// let sources = vec![DocumentSource::new("query A { id }", "ADoc")];
/// let module = Emitter::new(EmitterConfig::default()).emit(&sources);
///
/// assert!(module.content().contains(r#""query A { id }": graphql.ADoc,"#));
/// assert!(module.content().contains(
///     r#"export function gql(source: "query A { id }"): (typeof documents)["query A { id }"];"#,
/// ));
/// ```
#[derive(Clone, Debug, Default)]
pub struct Emitter {
    config: EmitterConfig,
}

impl Emitter {
    pub fn new(config: EmitterConfig) -> Self {
        Self { config }
    }

    pub fn emit<'a>(
        &self,
        sources: impl IntoIterator<Item = &'a DocumentSource>,
    ) -> GeneratedModule {
        let mode = self.config.emission_mode();
        let registry = Registry::from_sources(sources, self.config.duplicate_policy);
        let overloads = OverloadSet::generate(&registry, &mode, &self.config);
        log::debug!(
            "Emitting {} `{}` overloads ({mode:?}) for {} unique document \
            sources.",
            overloads.len(),
            self.config.tag_function_name,
            registry.len(),
        );

        let mut lines = vec![];
        if let Some(header) = &self.config.header {
            lines.push(header.to_owned());
        }

        match &mode {
            EmissionMode::Local => self.assemble_local(&registry, &overloads, &mut lines),
            EmissionMode::Augmented { module_name } =>
                self.assemble_augmented(module_name, &overloads, &mut lines),
        }

        let mut content = lines.join("\n");
        content.push('\n');

        GeneratedModule {
            content,
            mode,
            overloads,
            registry,
        }
    }

    fn assemble_local(
        &self,
        registry: &Registry,
        overloads: &OverloadSet,
        lines: &mut Vec<String>,
    ) {
        let function_name = self.config.tag_function_name.as_str();
        let registry_name = self.config.registry_identifier();
        let namespace = self.config.definitions_namespace();
        if registry_name != self.config.registry_name {
            log::warn!(
                "Registry name `{}` collides with the `{function_name}` tag \
                function; declaring the registry as `{registry_name}`.",
                self.config.registry_name,
            );
        }

        lines.push(format!(
            "import * as {namespace} from '{}';",
            self.config.definitions_module,
        ));
        lines.push(self.typed_document_import());
        lines.push(String::new());

        lines.push(
            RegistryLiteral::new(registry, &registry_name, &namespace).emit()
        );
        lines.push(String::new());

        lines.extend(
            overloads.iter().map(|overload| overload.emit_declaration(function_name))
        );
        lines.push(format!("export function {function_name}(source: string) {{"));
        lines.push(format!("  return ({registry_name} as any)[source] ?? {{}};"));
        lines.push("}".to_string());
        lines.push(String::new());

        lines.extend(DOCUMENT_TYPE_UTILITY.iter().map(|line| line.to_string()));
    }

    fn assemble_augmented(
        &self,
        module_name: &str,
        overloads: &OverloadSet,
        lines: &mut Vec<String>,
    ) {
        let function_name = self.config.tag_function_name.as_str();

        lines.push(self.typed_document_import());
        lines.push(String::new());
        lines.push(format!("declare module {} {{", emit::string_literal(module_name)));

        let mut block = overloads
            .iter()
            .map(|overload| overload.emit_declaration(function_name))
            .collect::<Vec<_>>();
        block.push(String::new());
        block.extend(DOCUMENT_TYPE_UTILITY.iter().map(|line| line.to_string()));

        lines.extend(block.into_iter().map(|line| {
            if line.is_empty() {
                line
            } else {
                format!("  {line}")
            }
        }));
        lines.push("}".to_string());
    }

    fn typed_document_import(&self) -> String {
        format!(
            "import {{ TypedDocumentNode as DocumentNode }} from '{}';",
            self.config.typed_document_module,
        )
    }
}
