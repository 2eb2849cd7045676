//! Kugo - minesweeper chat bot hosted on the terminal

use std::io;

use anyhow::{Context, Result};
use clap::Parser;

use kugo_bot::{
    cli::{Cli, Commands},
    command::Invocation,
    console::{self, Console},
    minesweeper::Minesweeper,
    Bot, BotConfig,
};

fn main() -> Result<()> {
    let cli = Cli::parse();

    env_logger::Builder::new()
        .filter_level(cli.verbose.log_level_filter())
        .init();

    let config = BotConfig::from(&cli);
    let mut bot = Bot::new(config);
    bot.setup()?;

    let mut console = Console::new(cli.author.clone(), io::stdout().lock());
    match cli.command.unwrap_or(Commands::Run) {
        Commands::Run => {
            bot.on_ready();
            let failures = console::run(&bot, io::stdin().lock(), &mut console)?;
            if failures > 0 {
                log::warn!("{failures} command(s) failed during this session");
            }
        }
        Commands::Board { args, json: false } => {
            let line = command_line(&bot, &args);
            bot.handle_message(&line, &mut console)?;
        }
        Commands::Board { args, json: true } => {
            let line = command_line(&bot, &args);
            let invocation = Invocation::parse(&bot.config().prefix, &line)
                .context("building board command")?;
            let minesweeper = bot
                .minesweeper()
                .context("minesweeper extension is not loaded")?;
            println!("{}", minesweeper.board_json(invocation.args)?);
        }
    }
    Ok(())
}

/// The chat line a user would type to ask for the same board
fn command_line(bot: &Bot, args: &[String]) -> String {
    let mut line = format!("{}{}", bot.config().prefix, Minesweeper::COMMAND.name);
    for arg in args {
        line.push(' ');
        line.push_str(arg);
    }
    line
}
