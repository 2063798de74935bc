//! Animated stat counter: counts up from zero to a target value.
//!
//! Built on frame content; the step size scales with the target so every
//! counter finishes in roughly the same number of frames.

use std::time::Duration;

use crate::element::Element;
use crate::types::Style;

/// Builder for an animated counter.
#[derive(Clone, Debug)]
pub struct Counter {
    id: Option<String>,
    target: u64,
    /// Frame duration in milliseconds.
    frame_ms: u64,
    style: Style,
}

impl Default for Counter {
    fn default() -> Self {
        Self {
            id: None,
            target: 0,
            frame_ms: 30,
            style: Style::new().bold(),
        }
    }
}

impl Counter {
    pub fn new(target: u64) -> Self {
        Self {
            target,
            ..Default::default()
        }
    }

    /// Set the element ID for stable animation state.
    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// Set the frame duration.
    pub fn frame_ms(mut self, ms: u64) -> Self {
        self.frame_ms = ms;
        self
    }

    pub fn style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }

    /// Build the counter element. The last frame holds the final value,
    /// so the animation settles on the target.
    pub fn build(self) -> Element {
        let mut elem =
            Element::frames_once(self.generate_frames(), Duration::from_millis(self.frame_ms));
        if let Some(id) = &self.id {
            elem = elem.id(id);
        }
        elem.class("stat-counter")
    }

    fn generate_frames(&self) -> Vec<Element> {
        // Spread the climb over ~40 frames regardless of magnitude.
        let step = self.target.div_ceil(40).max(1);
        let mut frames = Vec::new();
        let mut value = 0;
        while value < self.target {
            frames.push(self.frame(value));
            value += step;
        }
        frames.push(self.frame(self.target));
        frames
    }

    fn frame(&self, value: u64) -> Element {
        Element::text(value.to_string()).style(self.style.clone())
    }
}
