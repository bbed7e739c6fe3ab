use crate::Cli;
use crate::CommandResult;
use crate::RunnableCommand;
use crate::document_files::DocumentArgs;
use crate::output_utils;
use libgraphql_tag_operations::CodegenConfig;
use libgraphql_tag_operations::DuplicatePolicy;
use libgraphql_tag_operations::Emitter;
use libgraphql_tag_operations::GeneratedModule;
use std::path::PathBuf;

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
enum DuplicatePolicyArg {
    FirstWins,
    LastWins,
}
impl From<DuplicatePolicyArg> for DuplicatePolicy {
    fn from(arg: DuplicatePolicyArg) -> Self {
        match arg {
            DuplicatePolicyArg::FirstWins => DuplicatePolicy::FirstWins,
            DuplicatePolicyArg::LastWins => DuplicatePolicy::LastWins,
        }
    }
}

#[derive(Debug, clap::Args)]
pub(crate) struct GenerateCmd {
    #[arg(
        help="Emit declarations which augment the `gql` function of this \
             module instead of a self-contained lookup module.",
        long,
    )]
    augmented_module_name: Option<String>,

    #[arg(
        help="Which definition wins when two documents have identical \
             source text but different primary definitions.",
        long,
        value_enum,
    )]
    duplicate_policy: Option<DuplicatePolicyArg>,

    #[command(flatten)]
    documents: DocumentArgs,

    #[arg(
        help="A line of text to prepend to the generated module (e.g. \
             `/* eslint-disable */`).",
        long,
    )]
    header: Option<String>,

    #[arg(
        help="File to write the generated module to. Written to stdout if \
             omitted.",
        long,
        short='o',
    )]
    output: Option<PathBuf>,
}

impl GenerateCmd {
    fn apply_overrides(&self, config: &mut CodegenConfig) {
        if let Some(module_name) = &self.augmented_module_name {
            config.emitter.augmented_module_name = Some(module_name.to_owned());
        }
        if let Some(policy) = self.duplicate_policy {
            config.emitter.duplicate_policy = policy.into();
        }
        if let Some(header) = &self.header {
            config.emitter.header = Some(header.to_owned());
        }
    }

    fn generate(&self) -> anyhow::Result<GeneratedModule> {
        let mut config = self.documents.load_config()?;
        self.apply_overrides(&mut config);

        let sources = self.documents.resolve_sources(&config)?.resolve();
        Ok(Emitter::new(config.emitter).emit(&sources))
    }
}

#[inherent::inherent]
impl RunnableCommand for GenerateCmd {
    pub async fn run(self, _cli: Cli) -> CommandResult {
        let module = match self.generate() {
            Ok(module) => module,
            Err(e) => return CommandResult::stderr(format_args!(
                "{} {e:#}",
                output_utils::RED_X,
            )),
        };

        for duplicate in module.registry().duplicates() {
            log::warn!(
                "{} `{}` and `{}` share identical source text; only `{}` is \
                reachable through the generated overloads.",
                output_utils::WARNING_SIGN,
                duplicate.kept_definition_name,
                duplicate.discarded_definition_name,
                duplicate.kept_definition_name,
            );
        }

        let Some(output_path) = &self.output else {
            let content = module.content();
            return CommandResult::stdout(format_args!(
                "{}",
                content.strip_suffix('\n').unwrap_or(content),
            ));
        };

        if let Some(parent) = output_path.parent()
            && !parent.as_os_str().is_empty()
            && let Err(e) = std::fs::create_dir_all(parent) {
            return CommandResult::stderr(format_args!(
                "{} Failed to create {parent:#?}: {e}",
                output_utils::RED_X,
            ));
        }

        if let Err(e) = std::fs::write(output_path, module.content()) {
            return CommandResult::stderr(format_args!(
                "{} Failed to write {output_path:#?}: {e}",
                output_utils::RED_X,
            ));
        }

        CommandResult::stdout(format_args!(
            concat!(
                "{} Generated {:#?}:\n",
                "  * Registered {} document sources.\n",
                "  * Emitted {} overloads ({}).\n",
                "  * Skipped {} ambiguous duplicate sources.",
            ),
            output_utils::GREEN_CHECK,
            output_path,
            module.registry().len(),
            module.overloads().len(),
            match module.mode().augmented_module_name() {
                Some(module_name) => format!("augmenting `{module_name}`"),
                None => "local".to_string(),
            },
            module.registry().duplicates().len(),
        ))
    }
}
