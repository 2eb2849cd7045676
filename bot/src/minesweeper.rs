//! The `minesweeper` command: generates a solved board and sends it hidden behind spoilers

use std::sync::atomic::{AtomicU64, Ordering};

use kugo_core::*;

use crate::command::{Args, CommandSpec};
use crate::context::ChatContext;
use crate::error::{CommandError, CommandResult};
use crate::extension::Extension;

pub const RANGE_VIOLATION_MESSAGE: &str = "Board width and height must be between 3 and 15, and number of bombs must be at least one, up to 1/3 of the board size. Please try again.";

pub const BAD_ARGUMENT_MESSAGE: &str =
    "Please enter a valid number for width, height, and number of bombs.";

pub const UNKNOWN_ERROR_MESSAGE: &str =
    "`ERROR` - we encountered an unknown error. Sorry about that.";

/// Where board seeds come from
#[derive(Debug, Default)]
pub enum SeedSource {
    /// Fresh random seed per board
    #[default]
    Entropy,
    /// Consecutive seeds starting at a fixed value, for reproducible runs
    Sequence(AtomicU64),
}

impl SeedSource {
    pub fn starting_at(seed: u64) -> Self {
        Self::Sequence(AtomicU64::new(seed))
    }

    pub fn next_seed(&self) -> u64 {
        match self {
            Self::Entropy => rand::random(),
            Self::Sequence(next) => next.fetch_add(1, Ordering::Relaxed),
        }
    }
}

#[derive(Debug, Default)]
pub struct Minesweeper {
    seeds: SeedSource,
    renderer: Renderer,
}

impl Minesweeper {
    pub const COMMAND: CommandSpec = CommandSpec {
        name: "minesweeper",
        aliases: &["ms"],
        usage: "[width] [height] [bombs]",
        help: "Start a new game of minesweeper.\n\n\
               Optionally, a game grid width, height, and number of bombs may be passed in.\n\n\
               width: the width of the game grid (3-15), default 9\n\
               height: the height of the game grid (3-15), default 9\n\
               bombs: the number of bombs on the grid (1 to 1/3 of the grid size), default 12",
    };

    pub fn new(seeds: SeedSource, masking: Masking) -> Self {
        Self {
            seeds,
            renderer: Renderer::new(masking),
        }
    }

    /// Reads `width`, `height` and `bombs` in order, range checking each side as soon as it is read.
    pub fn read_config(mut args: Args<'_>) -> CommandResult<Validated> {
        let width = args.next_int("width", DEFAULT_WIDTH.into())?;
        BoardConfig::side(width).ok_or(CommandError::RangeViolation)?;
        let height = args.next_int("height", DEFAULT_HEIGHT.into())?;
        BoardConfig::side(height).ok_or(CommandError::RangeViolation)?;
        let bombs = args.next_int_saturating("bombs", DEFAULT_BOMBS.into())?;
        args.finish();

        Ok(BoardConfig::validate(width, height, bombs)?)
    }

    pub fn generate(&self, config: BoardConfig) -> Result<Grid> {
        RandomBoardGenerator::new(self.seeds.next_seed()).generate(config)
    }

    pub fn new_game(&self, args: Args<'_>, ctx: &mut dyn ChatContext) -> CommandResult {
        let Validated {
            config,
            clamped_from,
        } = Self::read_config(args)?;

        if let Some(requested) = clamped_from {
            log::debug!("{} asked for {requested} bombs", ctx.author());
            ctx.send(&clamp_notice(config))?;
        }

        let grid = self.generate(config)?;
        ctx.send(&board_message(config, &self.renderer.render(&grid)))?;
        Ok(())
    }

    /// Same arguments as the chat command, but the generated grid comes back as JSON
    pub fn board_json(&self, args: Args<'_>) -> anyhow::Result<String> {
        let Validated {
            config,
            clamped_from,
        } = Self::read_config(args)?;

        if clamped_from.is_some() {
            log::info!("{}", clamp_notice(config));
        }

        let grid = self.generate(config)?;
        Ok(serde_json::to_string_pretty(&grid)?)
    }
}

impl Extension for Minesweeper {
    fn name(&self) -> &'static str {
        "minesweeper"
    }

    fn commands(&self) -> &'static [CommandSpec] {
        &[Self::COMMAND]
    }

    fn invoke(
        &self,
        _command: &CommandSpec,
        args: Args<'_>,
        ctx: &mut dyn ChatContext,
    ) -> CommandResult {
        self.new_game(args, ctx)
    }

    fn on_error(
        &self,
        _command: &CommandSpec,
        err: CommandError,
        ctx: &mut dyn ChatContext,
    ) -> anyhow::Result<()> {
        present_error(err, ctx)
    }
}

pub fn clamp_notice(config: BoardConfig) -> String {
    format!(
        "Max bombs allowed for {}x{} board is {max}, using {max}.",
        config.width,
        config.height,
        max = config.bombs
    )
}

pub fn board_message(config: BoardConfig, board: &str) -> String {
    format!(
        "Grid: {}x{} | Bombs: {}\n{board}",
        config.width, config.height, config.bombs
    )
}

/// Tells the user what went wrong; unknown failures are still returned so the host sees them
pub fn present_error(err: CommandError, ctx: &mut dyn ChatContext) -> anyhow::Result<()> {
    match err {
        CommandError::RangeViolation => ctx.send(RANGE_VIOLATION_MESSAGE),
        CommandError::BadArgument { .. } => ctx.send(BAD_ARGUMENT_MESSAGE),
        CommandError::Unknown(source) => {
            if let Err(send_err) = ctx.send(UNKNOWN_ERROR_MESSAGE) {
                log::warn!("Could not deliver error notice: {send_err}");
            }
            Err(source)
        }
    }
}
