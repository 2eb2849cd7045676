//! Bot lifecycle and command dispatch

use std::fmt::Write;
use std::sync::Arc;

use crate::command::{Args, CommandSpec, Invocation};
use crate::config::BotConfig;
use crate::context::ChatContext;
use crate::error::{BotError, Result};
use crate::extension::Extension;
use crate::minesweeper::Minesweeper;

pub struct Bot {
    config: BotConfig,
    extensions: Vec<Box<dyn Extension>>,
    minesweeper: Option<Arc<Minesweeper>>,
}

impl Bot {
    pub const HELP: CommandSpec = CommandSpec {
        name: "help",
        aliases: &[],
        usage: "[command]",
        help: "Shows this message",
    };

    pub fn new(config: BotConfig) -> Self {
        Self {
            config,
            extensions: Vec::new(),
            minesweeper: None,
        }
    }

    pub fn config(&self) -> &BotConfig {
        &self.config
    }

    /// Loads the built-in extensions
    pub fn setup(&mut self) -> Result<()> {
        let minesweeper = Arc::new(Minesweeper::new(
            self.config.seed_source(),
            self.config.masking,
        ));
        self.load_extension(Box::new(Arc::clone(&minesweeper)))?;
        self.minesweeper = Some(minesweeper);
        Ok(())
    }

    /// The minesweeper extension loaded by [`Bot::setup`]
    pub fn minesweeper(&self) -> Option<&Minesweeper> {
        self.minesweeper.as_deref()
    }

    pub fn load_extension(&mut self, extension: Box<dyn Extension>) -> Result<()> {
        let name = extension.name();
        if self.extensions.iter().any(|loaded| loaded.name() == name) {
            return Err(BotError::ExtensionAlreadyLoaded(name));
        }

        for spec in extension.commands() {
            for &alias in std::iter::once(&spec.name).chain(spec.aliases) {
                if Self::HELP.answers_to(alias) {
                    return Err(BotError::CommandConflict {
                        name: alias,
                        owner: "bot",
                    });
                }
                if let Some((owner, _)) = self.find_command(alias) {
                    return Err(BotError::CommandConflict {
                        name: alias,
                        owner: owner.name(),
                    });
                }
            }
        }

        log::info!("Loaded extension {name}");
        self.extensions.push(extension);
        Ok(())
    }

    pub fn extension_names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.extensions.iter().map(|extension| extension.name())
    }

    pub fn on_ready(&self) {
        log::info!("{}", self.ready_message());
        log::info!("-------------------------------");
    }

    pub fn ready_message(&self) -> String {
        match self.config.id {
            Some(id) => format!("Logged in as {} with ID {id}", self.config.name),
            None => format!("Logged in as {} (local session, no account ID)", self.config.name),
        }
    }

    /// All registered commands, `help` first
    pub fn commands(&self) -> impl Iterator<Item = &CommandSpec> {
        std::iter::once(&Self::HELP).chain(
            self.extensions
                .iter()
                .flat_map(|extension| extension.commands()),
        )
    }

    fn find_command(&self, name: &str) -> Option<(&dyn Extension, &'static CommandSpec)> {
        self.extensions.iter().find_map(|extension| {
            extension
                .commands()
                .iter()
                .find(|spec| spec.answers_to(name))
                .map(|spec| (&**extension, spec))
        })
    }

    /// Handles one chat message.
    ///
    /// Returns failures the command could not report to the user, and [`BotError::UnknownCommand`] for a prefixed
    /// message naming no command. Nothing is sent to the chat in either case beyond what the command sent itself.
    pub fn handle_message(&self, line: &str, ctx: &mut dyn ChatContext) -> Result<()> {
        let Some(invocation) = Invocation::parse(&self.config.prefix, line) else {
            return Ok(());
        };

        if Self::HELP.answers_to(invocation.name) {
            return self
                .send_help(invocation.args, ctx)
                .map_err(|source| BotError::Command {
                    command: Self::HELP.name,
                    source,
                });
        }

        let Some((extension, spec)) = self.find_command(invocation.name) else {
            return Err(BotError::UnknownCommand(invocation.name.to_owned()));
        };

        log::debug!("{} invoked {}", ctx.author(), spec.name);
        match extension.invoke(spec, invocation.args, ctx) {
            Ok(()) => Ok(()),
            Err(err) => {
                extension
                    .on_error(spec, err, ctx)
                    .map_err(|source| BotError::Command {
                        command: spec.name,
                        source,
                    })
            }
        }
    }

    fn send_help(&self, mut args: Args<'_>, ctx: &mut dyn ChatContext) -> anyhow::Result<()> {
        let prefix = &self.config.prefix;
        let text = match args.next_word() {
            None => self.overview(),
            Some(name) => match self.commands().find(|spec| spec.answers_to(name)) {
                Some(spec) => Self::details(prefix, spec),
                None => format!("No command called \"{name}\" found."),
            },
        };
        args.finish();
        ctx.send(&text)
    }

    fn overview(&self) -> String {
        let prefix = &self.config.prefix;
        let mut text = String::from("```\nCommands:\n");
        for spec in self.commands() {
            let summary = spec.help.lines().next().unwrap_or_default();
            let _ = writeln!(text, "  {:<40} {summary}", spec.signature(prefix));
        }
        let _ = write!(
            text,
            "\nType {prefix}{} command for more info on a command.\n```",
            Self::HELP.name
        );
        text
    }

    fn details(prefix: &str, spec: &CommandSpec) -> String {
        let mut text = format!("```\n{}\n", spec.signature(prefix));
        if !spec.aliases.is_empty() {
            let _ = writeln!(text, "Aliases: {}", spec.aliases.join(", "));
        }
        let _ = write!(text, "\n{}\n```", spec.help);
        text
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::context::Transcript;
    use crate::error::{CommandError, CommandResult};

    struct Echo {
        commands: &'static [CommandSpec],
    }

    const ECHO: CommandSpec = CommandSpec {
        name: "echo",
        aliases: &["say"],
        usage: "[word]",
        help: "Repeats a word",
    };

    impl Extension for Echo {
        fn name(&self) -> &'static str {
            "echo"
        }

        fn commands(&self) -> &'static [CommandSpec] {
            self.commands
        }

        fn invoke(
            &self,
            _command: &CommandSpec,
            mut args: Args<'_>,
            ctx: &mut dyn ChatContext,
        ) -> CommandResult {
            match args.next_word() {
                Some("fail") => Err(anyhow::anyhow!("echo broke").into()),
                Some(word) => Ok(ctx.send(word)?),
                None => Err(CommandError::RangeViolation),
            }
        }
    }

    fn bot() -> Bot {
        let mut bot = Bot::new(BotConfig {
            seed: Some(1),
            ..BotConfig::default()
        });
        bot.setup().unwrap();
        bot
    }

    #[test]
    fn loading_twice_is_rejected() {
        let mut bot = bot();

        let err = bot
            .load_extension(Box::new(Minesweeper::default()))
            .unwrap_err();

        assert!(matches!(err, BotError::ExtensionAlreadyLoaded("minesweeper")));
        assert_eq!(bot.extension_names().collect::<Vec<_>>(), ["minesweeper"]);
    }

    #[test]
    fn clashing_command_names_are_rejected() {
        const CLASH: CommandSpec = CommandSpec {
            name: "echo",
            aliases: &["ms"],
            usage: "",
            help: "",
        };
        let mut bot = bot();

        let err = bot
            .load_extension(Box::new(Echo { commands: &[CLASH] }))
            .unwrap_err();

        assert!(matches!(
            err,
            BotError::CommandConflict {
                name: "ms",
                owner: "minesweeper"
            }
        ));
    }

    #[test]
    fn default_error_hook_only_propagates_unknown() {
        let mut bot = bot();
        bot.load_extension(Box::new(Echo { commands: &[ECHO] }))
            .unwrap();
        let mut ctx = Transcript::new("tester");

        bot.handle_message("!say hi", &mut ctx).unwrap();
        bot.handle_message("!echo", &mut ctx).unwrap();
        let err = bot.handle_message("!echo fail", &mut ctx).unwrap_err();

        assert_eq!(ctx.messages(), ["hi"]);
        assert!(matches!(err, BotError::Command { command: "echo", .. }));
        assert_eq!(bot.commands().count(), 3);
    }

    #[test]
    fn ready_message_names_the_account() {
        let with_id = Bot::new(BotConfig {
            name: "Botkugo".into(),
            id: Some(42),
            ..BotConfig::default()
        });

        assert_eq!(with_id.ready_message(), "Logged in as Botkugo with ID 42");
        assert_eq!(
            bot().ready_message(),
            "Logged in as Kugo (local session, no account ID)"
        );
    }

    #[test]
    fn loaded_minesweeper_keeps_seed_sequence() {
        let bot = bot();
        let mut ctx = Transcript::new("tester");
        bot.handle_message("!ms", &mut ctx).unwrap();

        let shared = bot.minesweeper().unwrap();
        let next = Minesweeper::new(crate::minesweeper::SeedSource::starting_at(2), Default::default());

        assert_eq!(
            shared.generate(Default::default()).unwrap(),
            next.generate(Default::default()).unwrap()
        );
    }

    #[test]
    fn minesweeper_is_absent_before_setup() {
        assert!(Bot::new(BotConfig::default()).minesweeper().is_none());
    }

    #[test]
    fn messages_without_prefix_are_ignored() {
        let mut ctx = Transcript::new("tester");

        bot().handle_message("ms 3 3 3", &mut ctx).unwrap();

        assert!(ctx.messages().is_empty());
    }

    #[test]
    fn unknown_commands_get_no_reply() {
        let mut ctx = Transcript::new("tester");

        let err = bot().handle_message("!flag 1 1", &mut ctx).unwrap_err();

        assert!(matches!(err, BotError::UnknownCommand(ref name) if name == "flag"));
        assert_eq!(err.to_string(), "Command \"flag\" is not found");
        assert!(ctx.messages().is_empty());
    }

    #[test]
    fn alias_and_name_dispatch_alike() {
        let bot = bot();
        let mut ctx = Transcript::new("tester");

        bot.handle_message("!ms 4 4 2", &mut ctx).unwrap();
        bot.handle_message("!minesweeper 4 4 2", &mut ctx).unwrap();

        let messages = ctx.drain();
        assert_eq!(messages.len(), 2);
        assert!(messages.iter().all(|m| m.starts_with("Grid: 4x4 | Bombs: 2\n")));
    }

    #[test]
    fn help_lists_every_command() {
        let mut ctx = Transcript::new("tester");

        bot().handle_message("!help", &mut ctx).unwrap();

        let text = &ctx.messages()[0];
        assert!(text.contains("!help [command]"));
        assert!(text.contains("!minesweeper [width] [height] [bombs]"));
        assert!(text.contains("Start a new game of minesweeper."));
    }

    #[test]
    fn help_for_alias_shows_details() {
        let mut ctx = Transcript::new("tester");

        bot().handle_message("!help ms", &mut ctx).unwrap();
        bot().handle_message("!help nope", &mut ctx).unwrap();

        let messages = ctx.messages();
        assert!(messages[0].contains("Aliases: ms"));
        assert!(messages[0].contains("default 12"));
        assert_eq!(messages[1], "No command called \"nope\" found.");
    }

    #[test]
    fn custom_prefix() {
        let mut bot = Bot::new(BotConfig {
            prefix: "kugo ".into(),
            ..BotConfig::default()
        });
        bot.setup().unwrap();
        let mut ctx = Transcript::new("tester");

        bot.handle_message("!ms", &mut ctx).unwrap();
        assert!(ctx.messages().is_empty());

        bot.handle_message("kugo ms", &mut ctx).unwrap();
        assert_eq!(ctx.messages().len(), 1);
    }
}
