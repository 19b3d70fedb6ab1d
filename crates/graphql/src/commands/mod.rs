mod validate;

use crate::Cli;
use crate::CommandResult;
use validate::ValidateCmd;

#[derive(Debug, clap::Subcommand)]
pub(crate) enum CommandEnum {
    /// Check that every variable used by a GraphQL document is declared and
    /// every declared variable is used.
    Validate(Box<ValidateCmd>),
}
impl CommandEnum {
    pub(crate) async fn run(self, cli: &Cli) -> CommandResult {
        match self {
            Self::Validate(cmd) => cmd.run(cli).await,
        }
    }
}
