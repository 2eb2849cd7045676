//! Parsing chat lines into command invocations

use std::num::IntErrorKind;
use std::str::SplitWhitespace;

use crate::error::{CommandError, CommandResult};

/// Registration metadata of a command
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CommandSpec {
    pub name: &'static str,
    pub aliases: &'static [&'static str],
    /// Argument synopsis, e.g. `[width] [height]`
    pub usage: &'static str,
    pub help: &'static str,
}

impl CommandSpec {
    /// Whether `name` is this command's name or one of its aliases
    pub fn answers_to(&self, name: &str) -> bool {
        self.name == name || self.aliases.contains(&name)
    }

    pub fn signature(&self, prefix: &str) -> String {
        if self.usage.is_empty() {
            format!("{prefix}{}", self.name)
        } else {
            format!("{prefix}{} {}", self.name, self.usage)
        }
    }
}

/// A chat line addressed to the bot
#[derive(Debug)]
pub struct Invocation<'a> {
    pub name: &'a str,
    pub args: Args<'a>,
}

impl<'a> Invocation<'a> {
    /// Splits `line` into command name and arguments, `None` when it does not start with `prefix`
    pub fn parse(prefix: &str, line: &'a str) -> Option<Self> {
        let rest = line.trim_end().strip_prefix(prefix)?;
        // whitespace between the prefix and the name means no command
        if rest.starts_with(char::is_whitespace) {
            return None;
        }
        let mut words = rest.split_whitespace();
        let name = words.next()?;
        Some(Self {
            name,
            args: Args { words },
        })
    }
}

/// Positional arguments of an invocation, consumed left to right
#[derive(Debug)]
pub struct Args<'a> {
    words: SplitWhitespace<'a>,
}

impl<'a> Args<'a> {
    pub fn next_word(&mut self) -> Option<&'a str> {
        self.words.next()
    }

    /// Reads the next argument as an integer, `default` when there are no more arguments
    pub fn next_int(&mut self, name: &'static str, default: i64) -> CommandResult<i64> {
        let Some(word) = self.words.next() else {
            return Ok(default);
        };
        word.parse::<i64>().map_err(|err| match err.kind() {
            IntErrorKind::PosOverflow | IntErrorKind::NegOverflow => CommandError::RangeViolation,
            _ => CommandError::BadArgument {
                name,
                value: word.to_owned(),
            },
        })
    }

    /// Like [`Args::next_int`], but a value too large for `i64` reads as `i64::MAX` instead of failing.
    ///
    /// For arguments that are clamped down later, where any huge number means the same thing.
    pub fn next_int_saturating(&mut self, name: &'static str, default: i64) -> CommandResult<i64> {
        let Some(word) = self.words.next() else {
            return Ok(default);
        };
        word.parse::<i64>().or_else(|err| match err.kind() {
            IntErrorKind::PosOverflow => Ok(i64::MAX),
            IntErrorKind::NegOverflow => Err(CommandError::RangeViolation),
            _ => Err(CommandError::BadArgument {
                name,
                value: word.to_owned(),
            }),
        })
    }

    /// Drops whatever arguments were not consumed
    pub fn finish(mut self) {
        let extra: Vec<_> = self.words.by_ref().collect();
        if !extra.is_empty() {
            log::debug!("Ignoring extra arguments: {extra:?}");
        }
    }
}
