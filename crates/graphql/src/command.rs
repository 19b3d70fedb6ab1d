use crate::Cli;
use crate::CommandResult;

/// A subcommand that runs to completion and reports what happened through
/// its [`CommandResult`] rather than by printing directly.
pub(crate) trait RunnableCommand: std::fmt::Debug {
    async fn run(self, cli: &Cli) -> CommandResult;
}
