//! Pluggable groups of commands loaded into the bot at setup

use crate::command::{Args, CommandSpec};
use crate::context::ChatContext;
use crate::error::{CommandError, CommandResult};

pub trait Extension: Send + Sync {
    fn name(&self) -> &'static str;

    /// Commands this extension answers to
    fn commands(&self) -> &'static [CommandSpec];

    fn invoke(
        &self,
        command: &CommandSpec,
        args: Args<'_>,
        ctx: &mut dyn ChatContext,
    ) -> CommandResult;

    /// Turns a failed invocation into a reply; whatever is returned as `Err` reaches the host.
    ///
    /// The default only lets [`CommandError::Unknown`] through and logs the rest.
    fn on_error(
        &self,
        command: &CommandSpec,
        err: CommandError,
        _ctx: &mut dyn ChatContext,
    ) -> anyhow::Result<()> {
        match err {
            CommandError::Unknown(source) => Err(source),
            other => {
                log::info!("Command {} rejected: {other}", command.name);
                Ok(())
            }
        }
    }
}

impl<E: Extension> Extension for std::sync::Arc<E> {
    fn name(&self) -> &'static str {
        (**self).name()
    }

    fn commands(&self) -> &'static [CommandSpec] {
        (**self).commands()
    }

    fn invoke(
        &self,
        command: &CommandSpec,
        args: Args<'_>,
        ctx: &mut dyn ChatContext,
    ) -> CommandResult {
        (**self).invoke(command, args, ctx)
    }

    fn on_error(
        &self,
        command: &CommandSpec,
        err: CommandError,
        ctx: &mut dyn ChatContext,
    ) -> anyhow::Result<()> {
        (**self).on_error(command, err, ctx)
    }
}
