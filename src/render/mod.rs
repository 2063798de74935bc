use std::time::Instant;

use crate::buffer::{Buffer, Cell};
use crate::element::{Content, Element};
use crate::layout::LayoutResult;
use crate::text::{align_offset, char_width, display_width, truncate_to_width};
use crate::types::{Rgb, TextStyle};

/// Render a laid-out element tree into the buffer. Elements with
/// `display == false` are skipped entirely, along with their subtrees.
pub fn render_to_buffer(root: &Element, layout: &LayoutResult, buffer: &mut Buffer) {
    let inherited = Inherited {
        fg: Cell::DEFAULT_FG,
        bg: Cell::DEFAULT_BG,
        text_style: TextStyle::new(),
    };
    render_element(root, layout, buffer, inherited);
}

#[derive(Clone, Copy)]
struct Inherited {
    fg: Rgb,
    bg: Rgb,
    text_style: TextStyle,
}

fn render_element(element: &Element, layout: &LayoutResult, buffer: &mut Buffer, mut inherited: Inherited) {
    if !element.display {
        return;
    }

    let Some(rect) = layout.get(&element.id) else {
        return;
    };
    if rect.is_empty() {
        return;
    }

    if let Some(fg) = &element.style.foreground {
        inherited.fg = fg.to_rgb();
    }
    if let Some(bg) = &element.style.background {
        inherited.bg = bg.to_rgb();
    }
    inherited.text_style = merge(inherited.text_style, element.style.text_style);

    // Paint the background across the element's own rect.
    if element.style.background.is_some() {
        for y in rect.y..rect.bottom() {
            for x in rect.x..rect.right() {
                buffer.set(x, y, Cell::blank(inherited.fg, inherited.bg));
            }
        }
    }

    match &element.content {
        Content::Text(text) => {
            // Overlong text clips with an ellipsis instead of spilling.
            let text = truncate_to_width(text, rect.width as usize);
            let offset = align_offset(
                display_width(&text),
                rect.width as usize,
                element.text_align,
            );
            draw_text(
                buffer,
                rect.x + offset as u16,
                rect.y,
                rect.right(),
                &text,
                inherited,
            );
        }
        Content::TextInput {
            value,
            cursor,
            placeholder,
            focused,
        } => {
            let (shown, style) = if value.is_empty() {
                match placeholder.as_deref() {
                    Some(p) => (p, merge(inherited.text_style, TextStyle::new().dim())),
                    None => ("", inherited.text_style),
                }
            } else {
                (value.as_str(), inherited.text_style)
            };
            draw_text(
                buffer,
                rect.x,
                rect.y,
                rect.right(),
                shown,
                Inherited {
                    text_style: style,
                    ..inherited
                },
            );
            // Show the cursor as an underlined cell when focused.
            if *focused {
                let cursor_x = rect.x
                    + value
                        .chars()
                        .take(*cursor)
                        .map(|c| char_width(c) as u16)
                        .sum::<u16>();
                if let Some(mut cell) = buffer.get(cursor_x, rect.y).copied() {
                    cell.style.underline = true;
                    buffer.set(cursor_x, rect.y, cell);
                }
            }
        }
        Content::Children(children) => {
            for child in children {
                render_element(child, layout, buffer, inherited);
            }
        }
        Content::Frames {
            children,
            interval,
            repeat,
        } => {
            if let Some(frame) = current_frame(children.len(), interval.as_millis(), *repeat) {
                render_element(&children[frame], layout, buffer, inherited);
            }
        }
        Content::None => {}
    }
}

fn draw_text(buffer: &mut Buffer, x: u16, y: u16, max_x: u16, text: &str, inherited: Inherited) {
    let mut cx = x;
    for ch in text.chars() {
        let w = char_width(ch) as u16;
        if w == 0 {
            continue;
        }
        if cx + w > max_x {
            break;
        }
        buffer.set(
            cx,
            y,
            Cell::styled(ch, inherited.fg, inherited.bg, inherited.text_style),
        );
        for extra in 1..w {
            buffer.set(cx + extra, y, Cell::continuation(inherited.fg, inherited.bg));
        }
        cx += w;
    }
}

fn merge(base: TextStyle, overlay: TextStyle) -> TextStyle {
    TextStyle {
        bold: base.bold || overlay.bold,
        underline: base.underline || overlay.underline,
        dim: base.dim || overlay.dim,
    }
}

fn current_frame(frame_count: usize, interval_ms: u128, repeat: bool) -> Option<usize> {
    use std::sync::OnceLock;
    static EPOCH: OnceLock<Instant> = OnceLock::new();

    if frame_count == 0 {
        return None;
    }
    if interval_ms == 0 {
        return Some(0);
    }
    let elapsed = EPOCH.get_or_init(Instant::now).elapsed().as_millis();
    let index = (elapsed / interval_ms) as usize;
    if repeat {
        Some(index % frame_count)
    } else {
        Some(index.min(frame_count - 1))
    }
}
