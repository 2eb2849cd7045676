//! Runtime configuration of the bot

use kugo_core::Masking;

use crate::cli::Cli;
use crate::minesweeper::SeedSource;

pub const DEFAULT_PREFIX: &str = "!";
pub const DEFAULT_NAME: &str = "Kugo";

/// Resolved settings the bot runs with
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BotConfig {
    /// Text a message must start with to be read as a command
    pub prefix: String,
    /// Name the bot introduces itself with
    pub name: String,
    /// Account ID of the bot; a terminal session has none
    pub id: Option<u64>,
    /// First seed of a reproducible run, random boards when unset
    pub seed: Option<u64>,
    pub masking: Masking,
}

impl BotConfig {
    pub fn seed_source(&self) -> SeedSource {
        match self.seed {
            Some(seed) => SeedSource::starting_at(seed),
            None => SeedSource::Entropy,
        }
    }
}

impl Default for BotConfig {
    fn default() -> Self {
        Self {
            prefix: DEFAULT_PREFIX.to_owned(),
            name: DEFAULT_NAME.to_owned(),
            id: None,
            seed: None,
            masking: Masking::Spoiler,
        }
    }
}

impl From<&Cli> for BotConfig {
    fn from(cli: &Cli) -> Self {
        Self {
            prefix: cli.prefix.clone(),
            name: cli.name.clone(),
            id: cli.id,
            seed: cli.seed,
            masking: if cli.plain {
                Masking::Plain
            } else {
                Masking::Spoiler
            },
        }
    }
}
