//! Error kinds raised while handling chat commands

use kugo_core::GameError;
use thiserror::Error;

/// Failure of a single command invocation
#[derive(Error, Debug)]
pub enum CommandError {
    /// Board size or bomb count outside the accepted range
    #[error("Argument out of range")]
    RangeViolation,

    /// An argument could not be read as an integer
    #[error("Invalid value {value:?} for argument {name}")]
    BadArgument { name: &'static str, value: String },

    /// Anything else, surfaced to the host after the user is told
    #[error(transparent)]
    Unknown(#[from] anyhow::Error),
}

impl From<GameError> for CommandError {
    fn from(err: GameError) -> Self {
        if err.is_range_violation() {
            CommandError::RangeViolation
        } else {
            CommandError::Unknown(err.into())
        }
    }
}

/// Errors escaping the bot to the hosting process
#[derive(Error, Debug)]
pub enum BotError {
    #[error("Command \"{0}\" is not found")]
    UnknownCommand(String),

    #[error("Extension {0} is already loaded")]
    ExtensionAlreadyLoaded(&'static str),

    #[error("Command {name} is already registered by {owner}")]
    CommandConflict {
        name: &'static str,
        owner: &'static str,
    },

    #[error("Command {command} failed: {source}")]
    Command {
        command: &'static str,
        #[source]
        source: anyhow::Error,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for command handlers
pub type CommandResult<T = ()> = std::result::Result<T, CommandError>;

/// Result type for bot operations
pub type Result<T> = std::result::Result<T, BotError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn range_errors_from_core_are_range_violations() {
        let err: CommandError = GameError::TooFewBombs(0).into();
        assert!(matches!(err, CommandError::RangeViolation));

        let err: CommandError = GameError::InvalidSize { width: 2, height: 9 }.into();
        assert!(matches!(err, CommandError::RangeViolation));
    }

    #[test]
    fn other_core_errors_are_unknown() {
        let err: CommandError = GameError::TooManyBombs {
            requested: 10,
            capacity: 9,
        }
        .into();

        assert!(matches!(err, CommandError::Unknown(_)));
        assert_eq!(err.to_string(), "Cannot place 10 bombs on a board of 9 cells");
    }
}
