//! Chat bot that answers `!minesweeper` with a ready-made board hidden behind spoiler tags.
//!
//! The board itself comes from [`kugo_core`]; this crate parses the command, validates and clamps the
//! parameters, and maps every failure to the message the user sees.

pub mod bot;
pub mod cli;
pub mod command;
pub mod config;
pub mod console;
pub mod context;
pub mod error;
pub mod extension;
pub mod minesweeper;

pub use bot::Bot;
pub use config::BotConfig;
pub use context::{ChatContext, Transcript};
pub use error::{BotError, CommandError};
