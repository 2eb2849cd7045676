//! Command-line interface of the console host

use clap::{Parser, Subcommand};
use clap_verbosity_flag::{InfoLevel, Verbosity};

use crate::config::{DEFAULT_NAME, DEFAULT_PREFIX};

#[derive(Parser, Debug)]
#[command(author, version, about = "Minesweeper chat bot, hosted on the terminal", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    #[command(flatten)]
    pub verbose: Verbosity<InfoLevel>,

    /// Prefix that marks a message as a command
    #[arg(long, default_value = DEFAULT_PREFIX)]
    pub prefix: String,

    /// Name the bot logs in as
    #[arg(long, default_value = DEFAULT_NAME)]
    pub name: String,

    /// Account ID reported at login
    #[arg(long)]
    pub id: Option<u64>,

    /// Name shown as the author of messages typed on the terminal
    #[arg(long, default_value = "console")]
    pub author: String,

    /// Seed for reproducible boards, each board uses the next one
    #[arg(long)]
    pub seed: Option<u64>,

    /// Show boards without spoiler marks
    #[arg(long)]
    pub plain: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Read chat messages from stdin and answer them (default)
    Run,
    /// Generate a single board and exit
    Board {
        /// Width, height and bomb count, as they would follow the command in chat
        #[arg(allow_negative_numbers = true)]
        args: Vec<String>,

        /// Print the generated grid as JSON instead of the chat message
        #[arg(long)]
        json: bool,
    },
}
