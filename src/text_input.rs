use std::collections::HashMap;

use crate::element::{find_element, Content, Element};
use crate::event::{Event, Key, Modifiers};
use crate::focus::FocusState;

/// Data for a single text input: text content and cursor position
/// (in characters).
#[derive(Debug, Clone, Default)]
pub struct TextInputData {
    pub text: String,
    pub cursor: usize,
}

impl TextInputData {
    pub fn new(text: impl Into<String>) -> Self {
        let text = text.into();
        let cursor = text.chars().count();
        Self { text, cursor }
    }
}

/// Tracks text input state for multiple elements.
#[derive(Debug, Default)]
pub struct TextInputState {
    inputs: HashMap<String, TextInputData>,
}

impl TextInputState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the text value for an input.
    pub fn get(&self, id: &str) -> &str {
        self.inputs.get(id).map(|d| d.text.as_str()).unwrap_or("")
    }

    /// Set the text value for an input, placing cursor at end.
    pub fn set(&mut self, id: &str, text: impl Into<String>) {
        self.inputs.insert(id.to_string(), TextInputData::new(text));
    }

    fn get_data_mut(&mut self, id: &str) -> &mut TextInputData {
        self.inputs.entry(id.to_string()).or_default()
    }

    /// Process events and handle text editing.
    /// Returns generated events (Change, Submit) plus passed-through ones.
    pub fn process_events(&mut self, events: &[Event], root: &Element) -> Vec<Event> {
        let mut output = Vec::new();

        for event in events {
            match event {
                Event::Key {
                    target: Some(target),
                    key,
                    modifiers,
                } => {
                    if let Some(element) = find_element(root, target) {
                        if element.captures_input {
                            match self.handle_key(target, *key, *modifiers) {
                                TextEditResult::Changed => {
                                    output.push(Event::Change {
                                        target: target.clone(),
                                        text: self.get(target).to_string(),
                                    });
                                    continue;
                                }
                                TextEditResult::Submitted => {
                                    output.push(Event::Submit {
                                        target: target.clone(),
                                    });
                                    continue;
                                }
                                TextEditResult::Handled => {
                                    continue;
                                }
                                TextEditResult::Ignored => {}
                            }
                        }
                    }
                    output.push(event.clone());
                }
                _ => output.push(event.clone()),
            }
        }

        output
    }

    /// Write the tracked values back into the document's input elements so
    /// the next render shows them.
    pub fn apply(&self, root: &mut Element, focus: &FocusState) {
        apply_recursive(&self.inputs, root, focus.focused());
    }

    fn handle_key(&mut self, id: &str, key: Key, modifiers: Modifiers) -> TextEditResult {
        match key {
            Key::Char(c) if modifiers.none() || (modifiers.shift && !modifiers.ctrl) => {
                let data = self.get_data_mut(id);
                let byte_pos = char_to_byte_index(&data.text, data.cursor);
                data.text.insert(byte_pos, c);
                data.cursor += 1;
                TextEditResult::Changed
            }

            Key::Backspace if modifiers.none() => {
                let data = self.get_data_mut(id);
                if data.cursor > 0 {
                    let start = char_to_byte_index(&data.text, data.cursor - 1);
                    let end = char_to_byte_index(&data.text, data.cursor);
                    data.text.replace_range(start..end, "");
                    data.cursor -= 1;
                    TextEditResult::Changed
                } else {
                    TextEditResult::Handled
                }
            }

            Key::Delete if modifiers.none() => {
                let data = self.get_data_mut(id);
                if data.cursor < data.text.chars().count() {
                    let start = char_to_byte_index(&data.text, data.cursor);
                    let end = char_to_byte_index(&data.text, data.cursor + 1);
                    data.text.replace_range(start..end, "");
                    TextEditResult::Changed
                } else {
                    TextEditResult::Handled
                }
            }

            Key::Left if modifiers.none() => {
                let data = self.get_data_mut(id);
                data.cursor = data.cursor.saturating_sub(1);
                TextEditResult::Handled
            }

            Key::Right if modifiers.none() => {
                let data = self.get_data_mut(id);
                data.cursor = (data.cursor + 1).min(data.text.chars().count());
                TextEditResult::Handled
            }

            Key::Home if modifiers.none() => {
                self.get_data_mut(id).cursor = 0;
                TextEditResult::Handled
            }

            Key::End if modifiers.none() => {
                let data = self.get_data_mut(id);
                data.cursor = data.text.chars().count();
                TextEditResult::Handled
            }

            Key::Enter => TextEditResult::Submitted,

            _ => TextEditResult::Ignored,
        }
    }
}

/// Result of handling a text editing key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextEditResult {
    /// Text was modified.
    Changed,
    /// Enter was pressed.
    Submitted,
    /// Key was handled but text didn't change (cursor movement).
    Handled,
    /// Key was not handled, should be passed through.
    Ignored,
}

fn apply_recursive(
    inputs: &HashMap<String, TextInputData>,
    element: &mut Element,
    focused: Option<&str>,
) {
    let id = element.id.clone();
    match &mut element.content {
        Content::TextInput {
            value,
            cursor,
            focused: input_focused,
            ..
        } => {
            if let Some(data) = inputs.get(&id) {
                *value = data.text.clone();
                *cursor = data.cursor;
            }
            *input_focused = focused == Some(id.as_str());
        }
        Content::Children(children) | Content::Frames { children, .. } => {
            for child in children {
                apply_recursive(inputs, child, focused);
            }
        }
        _ => {}
    }
}

/// Convert character index to byte index in a string.
fn char_to_byte_index(s: &str, char_idx: usize) -> usize {
    s.char_indices()
        .nth(char_idx)
        .map(|(i, _)| i)
        .unwrap_or(s.len())
}
