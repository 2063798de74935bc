mod rect;

pub use rect::Rect;

use std::collections::HashMap;

use crate::element::{Content, Element};
use crate::text::display_width;
use crate::types::Direction;

/// Computed rectangles from a layout pass, keyed by element id.
#[derive(Debug, Clone, Default)]
pub struct LayoutResult {
    rects: HashMap<String, Rect>,
}

impl LayoutResult {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, id: String, rect: Rect) {
        self.rects.insert(id, rect);
    }

    pub fn get(&self, id: &str) -> Option<&Rect> {
        self.rects.get(id)
    }
}

/// Flow layout: columns stack their visible children top to bottom, rows
/// place them left to right, text takes its intrinsic width. There is no
/// flexing or wrapping; the document is a page of lines, not an app shell.
pub fn layout(root: &Element, available: Rect) -> LayoutResult {
    let mut result = LayoutResult::new();
    place(root, available.x, available.y, &mut result);
    result
}

fn place(element: &Element, x: u16, y: u16, result: &mut LayoutResult) -> (u16, u16) {
    if !element.display {
        return (0, 0);
    }

    let (w, h) = measure(element);
    result.insert(element.id.clone(), Rect::new(x, y, w, h));

    match &element.content {
        Content::Children(children) => {
            let mut cx = x;
            let mut cy = y;
            for child in children {
                if !child.display {
                    continue;
                }
                let (cw, ch) = place(child, cx, cy, result);
                match element.direction {
                    Direction::Row => cx += cw + element.gap,
                    Direction::Column => cy += ch + element.gap,
                }
            }
        }
        Content::Frames { children, .. } => {
            // All frames share the element's origin; render decides which
            // one is current.
            for child in children {
                place(child, x, y, result);
            }
        }
        _ => {}
    }

    (w, h)
}

fn measure(element: &Element) -> (u16, u16) {
    if !element.display {
        return (0, 0);
    }

    let (intrinsic_w, h) = match &element.content {
        Content::None => (0, 0),
        Content::Text(s) => (display_width(s) as u16, 1),
        Content::TextInput {
            value, placeholder, ..
        } => {
            let text_w = display_width(value)
                .max(placeholder.as_deref().map(display_width).unwrap_or(0));
            // One extra cell so the cursor can sit past the last character.
            (text_w as u16 + 1, 1)
        }
        Content::Children(children) => {
            let visible: Vec<(u16, u16)> = children
                .iter()
                .filter(|c| c.display)
                .map(|c| measure(c))
                .collect();
            if visible.is_empty() {
                (0, 0)
            } else {
                let gaps = element.gap * (visible.len() as u16 - 1);
                match element.direction {
                    Direction::Row => (
                        visible.iter().map(|(w, _)| w).sum::<u16>() + gaps,
                        visible.iter().map(|(_, h)| *h).max().unwrap_or(0),
                    ),
                    Direction::Column => (
                        visible.iter().map(|(w, _)| *w).max().unwrap_or(0),
                        visible.iter().map(|(_, h)| h).sum::<u16>() + gaps,
                    ),
                }
            }
        }
        Content::Frames { children, .. } => children
            .iter()
            .map(measure)
            .fold((0, 0), |(aw, ah), (w, h)| (aw.max(w), ah.max(h))),
    };

    (element.width.unwrap_or(intrinsic_w), h)
}
