//! Tab bar widget: a row of buttons switching between panes.

use crate::element::{find_element_mut, Element};
use crate::event::Event;
use crate::types::Style;

/// Builder for a tab bar. `build` produces the element subtree and the
/// state handle that routes clicks afterwards.
#[derive(Debug)]
pub struct TabBar {
    id: String,
    labels: Vec<String>,
    panes: Vec<Element>,
}

impl TabBar {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            labels: Vec::new(),
            panes: Vec::new(),
        }
    }

    /// Add one tab: a button label and the pane it reveals.
    pub fn tab(mut self, label: impl Into<String>, pane: Element) -> Self {
        self.labels.push(label.into());
        self.panes.push(pane);
        self
    }

    /// Build the subtree: a button strip over the panes, with the first
    /// tab active and only its pane displayed.
    pub fn build(self) -> (Element, TabBarState) {
        let state = TabBarState {
            id: self.id.clone(),
            count: self.labels.len(),
            active: 0,
        };

        let buttons = Element::row()
            .id(format!("{}_buttons", self.id))
            .class("tab-buttons")
            .gap(2)
            .children(self.labels.iter().enumerate().map(|(index, label)| {
                let mut button = Element::button(label.clone())
                    .id(state.button_id(index))
                    .class("tab-btn");
                if index == 0 {
                    button = button.class("active").style(Style::new().bold());
                }
                button
            }));

        let panes = self.panes.into_iter().enumerate().map(|(index, pane)| {
            let mut pane = pane.id(state.pane_id(index)).class("tab-pane");
            if index == 0 {
                pane = pane.class("active");
            } else {
                pane = pane.display(false);
            }
            pane
        });

        let root = Element::col()
            .id(self.id)
            .gap(1)
            .child(buttons)
            .children(panes);
        (root, state)
    }
}

/// Routes clicks on the built tab bar and moves the `active` class
/// between buttons and panes.
#[derive(Debug)]
pub struct TabBarState {
    id: String,
    count: usize,
    active: usize,
}

impl TabBarState {
    pub fn active(&self) -> usize {
        self.active
    }

    fn button_id(&self, index: usize) -> String {
        format!("{}_tab_{}", self.id, index)
    }

    fn pane_id(&self, index: usize) -> String {
        format!("{}_pane_{}", self.id, index)
    }

    pub fn handle_event(&mut self, root: &mut Element, event: &Event) -> bool {
        let Event::Click {
            target: Some(id), ..
        } = event
        else {
            return false;
        };
        let Some(index) = (0..self.count).find(|&i| self.button_id(i) == *id) else {
            return false;
        };
        self.select(root, index);
        true
    }

    /// Activate a tab: one active button, one displayed pane.
    pub fn select(&mut self, root: &mut Element, index: usize) {
        if index >= self.count {
            return;
        }
        log::debug!("[tabs] {} select {}", self.id, index);
        self.active = index;

        for i in 0..self.count {
            if let Some(button) = find_element_mut(root, &self.button_id(i)) {
                button.remove_class("active");
                button.style = Style::new();
                if i == index {
                    button.add_class("active");
                    button.style = Style::new().bold();
                }
            }
            if let Some(pane) = find_element_mut(root, &self.pane_id(i)) {
                pane.remove_class("active");
                pane.display = i == index;
                if i == index {
                    pane.add_class("active");
                }
            }
        }
    }
}
