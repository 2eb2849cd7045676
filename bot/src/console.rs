//! Terminal stand-in for a chat channel

use std::io::{BufRead, Write};

use anyhow::Context as _;

use crate::bot::Bot;
use crate::context::ChatContext;
use crate::error::{BotError, Result};

/// Chat context that prints every message to a writer
pub struct Console<W> {
    author: String,
    out: W,
}

impl<W: Write> Console<W> {
    pub fn new(author: impl Into<String>, out: W) -> Self {
        Self {
            author: author.into(),
            out,
        }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> ChatContext for Console<W> {
    fn author(&self) -> &str {
        &self.author
    }

    fn send(&mut self, text: &str) -> anyhow::Result<()> {
        writeln!(self.out, "{text}").context("writing message to console")?;
        self.out.flush().context("flushing console")?;
        Ok(())
    }
}

/// Feeds every input line to the bot until EOF.
///
/// Failures escaping a command are logged and the loop goes on. Returns how many commands failed; unknown
/// command names are only warned about.
pub fn run<R: BufRead, W: Write>(
    bot: &Bot,
    input: R,
    console: &mut Console<W>,
) -> Result<usize> {
    let mut failures = 0;
    for line in input.lines() {
        let line = line?;
        match bot.handle_message(&line, console) {
            Ok(()) => {}
            Err(err @ BotError::UnknownCommand(_)) => log::warn!("{err}"),
            Err(err) => {
                failures += 1;
                log::error!("Ignoring exception in command: {err:#}");
            }
        }
    }
    Ok(failures)
}
