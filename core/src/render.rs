use alloc::string::String;

use crate::*;

/// Emoji shortcodes for adjacent counts `0..=8`, indexed by the count.
pub const NUMBER_GLYPHS: [&str; 9] = [
    ":zero:", ":one:", ":two:", ":three:", ":four:", ":five:", ":six:", ":seven:", ":eight:",
];

pub const BOMB_GLYPH: &str = ":boom:";

const SPOILER_MARK: &str = "||";

/// How each glyph is hidden from the viewer.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum Masking {
    /// Wrapped in `||`, revealed by clicking in the chat client.
    #[default]
    Spoiler,
    /// Bare glyphs, the whole solution is visible at once.
    Plain,
}

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct Renderer {
    pub masking: Masking,
}

impl Renderer {
    pub const fn new(masking: Masking) -> Self {
        Self { masking }
    }

    pub const fn glyph(cell: Cell) -> &'static str {
        match cell {
            Cell::Bomb => BOMB_GLYPH,
            // counts above eight cannot occur, show them as the highest glyph rather than panicking
            Cell::Adjacent(count) if count as usize >= NUMBER_GLYPHS.len() => NUMBER_GLYPHS[8],
            Cell::Adjacent(count) => NUMBER_GLYPHS[count as usize],
        }
    }

    /// One line per row, glyphs concatenated without separators, lines joined by `\n`.
    pub fn render(&self, grid: &Grid) -> String {
        let mut out = String::new();
        for (i, row) in grid.rows().enumerate() {
            if i > 0 {
                out.push('\n');
            }
            for &cell in row.iter() {
                self.push_glyph(&mut out, cell);
            }
        }
        out
    }

    fn push_glyph(&self, out: &mut String, cell: Cell) {
        let glyph = Self::glyph(cell);
        match self.masking {
            Masking::Spoiler => {
                out.push_str(SPOILER_MARK);
                out.push_str(glyph);
                out.push_str(SPOILER_MARK);
            }
            Masking::Plain => out.push_str(glyph),
        }
    }
}

/// Renders with spoiler masking, the format sent to chat.
pub fn render(grid: &Grid) -> String {
    Renderer::default().render(grid)
}
