use crate::Cli;
use crate::CommandResult;
use crate::RunnableCommand;
use crate::document_files::DocumentArgs;
use crate::output_utils;

#[derive(Debug, clap::Args)]
pub(crate) struct ResolveCmd {
    #[command(flatten)]
    documents: DocumentArgs,
}

impl ResolveCmd {
    fn resolve_json(&self) -> anyhow::Result<String> {
        let config = self.documents.load_config()?;
        let sources = self.documents.resolve_sources(&config)?.resolve();
        Ok(serde_json::to_string_pretty(&sources)?)
    }
}

#[inherent::inherent]
impl RunnableCommand for ResolveCmd {
    pub async fn run(self, _cli: Cli) -> CommandResult {
        match self.resolve_json() {
            Ok(json) => CommandResult::stdout(format_args!("{json}")),
            Err(e) => CommandResult::stderr(format_args!(
                "{} {e:#}",
                output_utils::RED_X,
            )),
        }
    }
}
