mod generate;
mod resolve;

use crate::Cli;
use crate::CommandResult;
use generate::GenerateCmd;
use resolve::ResolveCmd;

/// A subcommand which consumes the parsed [`Cli`] and reports its outcome
/// as a [`CommandResult`] rather than printing directly.
pub(crate) trait RunnableCommand: std::fmt::Debug {
    async fn run(self, cli: Cli) -> CommandResult;
}

#[derive(Debug, clap::Parser)]
#[command(name = "gql-tag-codegen")]
pub(crate) enum CommandEnum {
    /// Emit the `gql` tag module for a set of GraphQL documents.
    Generate(Box<GenerateCmd>),

    /// Print each document's raw text and primary definition as JSON.
    Resolve(Box<ResolveCmd>),
}
impl CommandEnum {
    pub(crate) async fn run(self, cli: Cli) -> CommandResult {
        match self {
            Self::Generate(cmd) => cmd.run(cli).await,
            Self::Resolve(cmd) => cmd.run(cli).await,
        }
    }
}
