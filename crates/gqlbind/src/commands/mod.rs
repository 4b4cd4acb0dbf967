mod args;
mod binding_inputs;
mod check;

#[cfg(test)]
mod tests;

use crate::Cli;
use crate::CommandResult;
use crate::RunnableCommand;
use args::ArgsCmd;
use check::CheckCmd;

#[derive(Debug, clap::Parser)]
#[command(name = "gqlbind")]
pub(crate) enum CommandEnum {
    /// Print every argument set the schema produces.
    Args(Box<ArgsCmd>),

    /// Bind the schema and report whether every argument binds cleanly.
    Check(Box<CheckCmd>),
}
impl CommandEnum {
    pub(crate) async fn run(self, cli: Cli) -> CommandResult {
        match self {
            Self::Args(cmd) => cmd.run(cli).await,
            Self::Check(cmd) => cmd.run(cli).await,
        }
    }
}
