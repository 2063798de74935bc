//! Activity feed: a typed event list with per-kind icons and filtering.

use crate::element::{find_element_mut, Element};
use crate::types::Style;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActivityKind {
    Product,
    Invoice,
    Client,
    Message,
    System,
}

impl ActivityKind {
    /// Icon glyph shown next to the entry text.
    pub fn icon(self) -> &'static str {
        match self {
            Self::Product => "◆",
            Self::Invoice => "▤",
            Self::Client => "●",
            Self::Message => "✉",
            Self::System => "⚙",
        }
    }

    pub fn class(self) -> &'static str {
        match self {
            Self::Product => "activity-product",
            Self::Invoice => "activity-invoice",
            Self::Client => "activity-client",
            Self::Message => "activity-message",
            Self::System => "activity-system",
        }
    }
}

#[derive(Debug, Clone)]
pub struct ActivityEntry {
    pub kind: ActivityKind,
    pub text: String,
    pub timestamp: String,
}

impl ActivityEntry {
    pub fn new(kind: ActivityKind, text: impl Into<String>, timestamp: impl Into<String>) -> Self {
        Self {
            kind,
            text: text.into(),
            timestamp: timestamp.into(),
        }
    }
}

/// Renders entries into a host container, newest first, with an
/// optional kind filter and an empty-state line when nothing matches.
#[derive(Debug)]
pub struct ActivityFeed {
    container_id: String,
    entries: Vec<ActivityEntry>,
    filter: Option<ActivityKind>,
    /// Set when the newest entry arrived through `push` and should carry
    /// the `new` marker.
    pushed: bool,
}

impl ActivityFeed {
    pub fn new(container_id: impl Into<String>, entries: Vec<ActivityEntry>) -> Self {
        Self {
            container_id: container_id.into(),
            entries,
            filter: None,
            pushed: false,
        }
    }

    pub fn entries(&self) -> &[ActivityEntry] {
        &self.entries
    }

    /// Restrict the feed to one kind; None shows everything.
    pub fn set_filter(&mut self, root: &mut Element, filter: Option<ActivityKind>) {
        self.filter = filter;
        self.render(root);
    }

    /// Insert a new entry at the top, flagged `new`.
    pub fn push(&mut self, root: &mut Element, entry: ActivityEntry) {
        log::debug!("[activity] {} push {:?}", self.container_id, entry.kind);
        self.entries.insert(0, entry);
        self.pushed = true;
        self.render(root);
    }

    /// Rewrite the container's children from the entry list.
    pub fn render(&self, root: &mut Element) {
        let Some(container) = find_element_mut(root, &self.container_id) else {
            return;
        };

        let shown: Vec<&ActivityEntry> = self
            .entries
            .iter()
            .filter(|e| self.filter.is_none_or(|f| e.kind == f))
            .collect();

        if shown.is_empty() {
            container.set_children(vec![Element::text("No activities found")
                .class("activity-empty")
                .style(Style::new().dim())]);
            return;
        }

        let items = shown
            .iter()
            .enumerate()
            .map(|(index, entry)| {
                let mut item = Element::row()
                    .class("activity-item")
                    .class(entry.kind.class())
                    .child(Element::text(entry.kind.icon()).width(2))
                    .child(Element::text(&entry.text))
                    .child(
                        Element::text(&entry.timestamp)
                            .class("activity-time")
                            .style(Style::new().dim()),
                    );
                // Only a freshly pushed entry carries the arrival marker.
                if index == 0 && self.pushed && self.filter.is_none() {
                    item = item.class("new");
                }
                item
            })
            .collect();
        container.set_children(items);
    }
}
