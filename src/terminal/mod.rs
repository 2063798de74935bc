use std::io::{self, BufWriter, Stdout, Write};
use std::time::Duration;

use crossterm::{
    cursor,
    event::{self, Event as CrosstermEvent},
    execute, queue,
    style::{Attribute, Color as CtColor, Print, SetAttribute, SetBackgroundColor, SetForegroundColor},
    terminal,
};

use crate::buffer::{Buffer, Cell};
use crate::element::Element;
use crate::layout::{layout, LayoutResult, Rect};
use crate::render::render_to_buffer;
use crate::text::char_width;
use crate::types::{Rgb, TextStyle};

/// Raw-mode terminal with double-buffered output: each `render` draws
/// the document into the back buffer and writes only the cells that
/// changed since the previous frame.
pub struct Terminal {
    out: BufWriter<Stdout>,
    /// What is currently on screen.
    front: Buffer,
    /// The frame being drawn.
    back: Buffer,
    last_layout: LayoutResult,
}

impl Terminal {
    pub fn new() -> io::Result<Self> {
        terminal::enable_raw_mode()?;

        let mut out = BufWriter::new(io::stdout());
        queue!(
            out,
            terminal::EnterAlternateScreen,
            cursor::Hide,
            event::EnableMouseCapture
        )?;
        out.flush()?;

        let (width, height) = terminal::size()?;
        Ok(Self {
            out,
            front: Buffer::new(width, height),
            back: Buffer::new(width, height),
            last_layout: LayoutResult::new(),
        })
    }

    /// Collect pending input. With a timeout this waits at most that
    /// long for the first event; either way every already-queued event
    /// is drained so one frame sees the whole burst.
    pub fn poll(&self, timeout: Option<Duration>) -> io::Result<Vec<CrosstermEvent>> {
        let mut events = Vec::new();

        match timeout {
            Some(wait) => {
                if !event::poll(wait)? {
                    return Ok(events);
                }
                events.push(event::read()?);
            }
            None => events.push(event::read()?),
        }
        while event::poll(Duration::ZERO)? {
            events.push(event::read()?);
        }

        Ok(events)
    }

    pub fn render(&mut self, root: &Element) -> io::Result<&LayoutResult> {
        let (width, height) = terminal::size()?;
        if width != self.back.width() || height != self.back.height() {
            log::debug!("[terminal] resized to {width}x{height}");
            self.front = Buffer::new(width, height);
            self.back = Buffer::new(width, height);
        }

        self.back.clear();
        self.last_layout = layout(root, Rect::from_size(width, height));
        render_to_buffer(root, &self.last_layout, &mut self.back);

        self.blit()?;
        std::mem::swap(&mut self.back, &mut self.front);

        Ok(&self.last_layout)
    }

    /// Get the layout from the last render.
    pub fn layout(&self) -> &LayoutResult {
        &self.last_layout
    }

    /// Write the changed cells, tracking pen state so color and
    /// attribute sequences are only emitted on transitions.
    fn blit(&mut self) -> io::Result<()> {
        let mut pen = Pen::reset();
        queue!(self.out, SetAttribute(Attribute::Reset))?;

        // Where the terminal cursor lands after the previous write;
        // consecutive cells then need no explicit MoveTo.
        let mut cursor_after: Option<(u16, u16)> = None;

        for (x, y, cell) in self.back.diff(&self.front) {
            if cell.wide_continuation {
                continue;
            }

            if cursor_after != Some((x, y)) {
                queue!(self.out, cursor::MoveTo(x, y))?;
            }

            if cell.fg != pen.fg {
                queue!(self.out, SetForegroundColor(rgb(cell.fg)))?;
                pen.fg = cell.fg;
            }
            if cell.bg != pen.bg {
                queue!(self.out, SetBackgroundColor(rgb(cell.bg)))?;
                pen.bg = cell.bg;
            }
            for attr in attr_updates(pen.style, cell.style) {
                queue!(self.out, SetAttribute(attr))?;
            }
            pen.style = cell.style;

            queue!(self.out, Print(cell.char))?;
            cursor_after = Some((x + char_width(cell.char).max(1) as u16, y));
        }

        queue!(self.out, SetAttribute(Attribute::Reset))?;
        self.out.flush()
    }
}

impl Drop for Terminal {
    fn drop(&mut self) {
        let _ = execute!(
            self.out,
            event::DisableMouseCapture,
            cursor::Show,
            terminal::LeaveAlternateScreen
        );
        let _ = terminal::disable_raw_mode();
    }
}

/// The writer's current colors and attributes.
struct Pen {
    fg: Rgb,
    bg: Rgb,
    style: TextStyle,
}

impl Pen {
    /// State after `Attribute::Reset`.
    fn reset() -> Self {
        Self {
            fg: Cell::DEFAULT_FG,
            bg: Cell::DEFAULT_BG,
            style: TextStyle::new(),
        }
    }
}

fn rgb(c: Rgb) -> CtColor {
    CtColor::Rgb {
        r: c.r,
        g: c.g,
        b: c.b,
    }
}

/// The attribute sequence that takes the terminal from `prev` to `next`.
/// Bold and dim share `NormalIntensity` as their only off switch, so any
/// intensity change clears both and re-asserts what `next` wants.
fn attr_updates(prev: TextStyle, next: TextStyle) -> Vec<Attribute> {
    let mut updates = Vec::new();

    if prev.bold != next.bold || prev.dim != next.dim {
        updates.push(Attribute::NormalIntensity);
        if next.bold {
            updates.push(Attribute::Bold);
        }
        if next.dim {
            updates.push(Attribute::Dim);
        }
    }
    if prev.underline != next.underline {
        updates.push(if next.underline {
            Attribute::Underlined
        } else {
            Attribute::NoUnderline
        });
    }

    updates
}
