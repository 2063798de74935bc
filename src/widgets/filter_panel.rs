//! Filter panel: named text inputs that produce removable filter chips.
//!
//! The host document provides inputs tagged `data("filter-name", ..)`
//! inside the panel; the panel injects a chip strip plus apply/reset
//! buttons and keeps the chips in sync with the non-empty input values.

use crate::element::{find_element, find_element_mut, Content, Element};
use crate::event::Event;
use crate::types::Style;

#[derive(Debug)]
pub struct FilterPanel {
    panel_id: String,
    /// (input element id, filter name) pairs found at initialization.
    inputs: Vec<(String, String)>,
    /// Values snapshotted by the last apply, by filter name.
    applied: Vec<(String, String)>,
}

impl FilterPanel {
    /// Attach to an existing panel, injecting the chip strip and the
    /// apply/reset buttons after its current content. Returns None when
    /// the panel is missing.
    pub fn init(root: &mut Element, panel_id: &str) -> Option<Self> {
        let panel = find_element(root, panel_id)?;

        let mut inputs = Vec::new();
        collect_inputs(panel, &mut inputs);

        let filter = Self {
            panel_id: panel_id.to_string(),
            inputs,
            applied: Vec::new(),
        };

        let panel = find_element_mut(root, panel_id)?;
        if let Some(children) = panel.child_elements_mut() {
            children.push(
                Element::row()
                    .id(filter.chips_id())
                    .class("filter-chips")
                    .gap(1),
            );
            children.push(
                Element::row()
                    .gap(2)
                    .child(
                        Element::button("Apply")
                            .id(filter.apply_id())
                            .class("filter-apply"),
                    )
                    .child(
                        Element::button("Reset")
                            .id(filter.reset_id())
                            .class("filter-reset"),
                    ),
            );
        }
        Some(filter)
    }

    fn chips_id(&self) -> String {
        format!("{}_chips", self.panel_id)
    }

    fn apply_id(&self) -> String {
        format!("{}_apply", self.panel_id)
    }

    fn reset_id(&self) -> String {
        format!("{}_reset", self.panel_id)
    }

    fn chip_remove_id(&self, name: &str) -> String {
        format!("{}_chip_{}_remove", self.panel_id, name)
    }

    /// Filter values snapshotted by the last apply.
    pub fn applied(&self) -> &[(String, String)] {
        &self.applied
    }

    pub fn handle_event(&mut self, root: &mut Element, event: &Event) -> bool {
        let Event::Click {
            target: Some(id), ..
        } = event
        else {
            return false;
        };

        if *id == self.apply_id() {
            self.apply(root);
            return true;
        }
        if *id == self.reset_id() {
            self.reset(root);
            return true;
        }
        let removed = self
            .inputs
            .iter()
            .find(|(_, name)| self.chip_remove_id(name) == *id)
            .map(|(input_id, name)| (input_id.clone(), name.clone()));
        if let Some((input_id, name)) = removed {
            log::debug!("[filter] {} remove chip {:?}", self.panel_id, name);
            clear_input(root, &input_id);
            self.apply(root);
            return true;
        }
        false
    }

    /// Snapshot the non-empty input values and rebuild the chip strip.
    pub fn apply(&mut self, root: &mut Element) {
        self.applied = self
            .inputs
            .iter()
            .filter_map(|(input_id, name)| {
                let value = input_value(root, input_id)?;
                let value = value.trim();
                if value.is_empty() {
                    return None;
                }
                Some((name.clone(), value.to_string()))
            })
            .collect();
        log::debug!(
            "[filter] {} applied {} filter(s)",
            self.panel_id,
            self.applied.len()
        );

        let chips = self
            .applied
            .iter()
            .map(|(name, value)| {
                Element::row()
                    .class("filter-chip")
                    .child(Element::text(format!("{name}: {value}")))
                    .child(
                        Element::button("✕")
                            .id(self.chip_remove_id(name))
                            .class("chip-remove")
                            .style(Style::new().dim()),
                    )
            })
            .collect();
        if let Some(container) = find_element_mut(root, &self.chips_id()) {
            container.set_children(chips);
        }
    }

    /// Clear every input and the chip strip.
    pub fn reset(&mut self, root: &mut Element) {
        log::debug!("[filter] {} reset", self.panel_id);
        for (input_id, _) in &self.inputs {
            clear_input(root, input_id);
        }
        self.apply(root);
    }
}

fn collect_inputs(element: &Element, inputs: &mut Vec<(String, String)>) {
    if let Some(name) = element.get_data("filter-name") {
        if matches!(element.content, Content::TextInput { .. }) {
            inputs.push((element.id.clone(), name.clone()));
        }
    }
    for child in element.child_elements() {
        collect_inputs(child, inputs);
    }
}

fn input_value(root: &Element, input_id: &str) -> Option<String> {
    match &find_element(root, input_id)?.content {
        Content::TextInput { value, .. } => Some(value.clone()),
        _ => None,
    }
}

fn clear_input(root: &mut Element, input_id: &str) {
    if let Some(input) = find_element_mut(root, input_id) {
        if let Content::TextInput { value, cursor, .. } = &mut input.content {
            value.clear();
            *cursor = 0;
        }
    }
}
