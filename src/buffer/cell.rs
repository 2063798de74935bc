use crate::types::{Rgb, TextStyle};

/// One screen cell. The renderer only ever produces three kinds: a
/// styled glyph, a blank background fill, and the trailing half of a
/// double-width glyph.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    pub char: char,
    pub fg: Rgb,
    pub bg: Rgb,
    pub style: TextStyle,
    /// Marks the second column of a double-width glyph; the terminal
    /// writer skips these.
    pub wide_continuation: bool,
}

impl Cell {
    /// Foreground of an unstyled cell.
    pub const DEFAULT_FG: Rgb = Rgb::new(255, 255, 255);
    /// Background of an unstyled cell.
    pub const DEFAULT_BG: Rgb = Rgb::new(0, 0, 0);

    /// A glyph cell carrying the full resolved style.
    pub fn styled(char: char, fg: Rgb, bg: Rgb, style: TextStyle) -> Self {
        Self {
            char,
            fg,
            bg,
            style,
            wide_continuation: false,
        }
    }

    /// A space cell used to fill an element's background rect.
    pub fn blank(fg: Rgb, bg: Rgb) -> Self {
        Self::styled(' ', fg, bg, TextStyle::new())
    }

    /// The filler behind the visible half of a wide glyph.
    pub fn continuation(fg: Rgb, bg: Rgb) -> Self {
        Self {
            wide_continuation: true,
            ..Self::blank(fg, bg)
        }
    }
}

impl Default for Cell {
    fn default() -> Self {
        Self::blank(Self::DEFAULT_FG, Self::DEFAULT_BG)
    }
}
