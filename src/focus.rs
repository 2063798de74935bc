use crate::element::{Content, Element};

/// Tracks which element currently has keyboard focus.
/// User-managed state that persists across frames.
#[derive(Debug, Default)]
pub struct FocusState {
    focused: Option<String>,
}

impl FocusState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn focused(&self) -> Option<&str> {
        self.focused.as_deref()
    }

    /// Focus an element. Returns true if focus changed.
    pub fn focus(&mut self, id: &str) -> bool {
        if self.focused.as_deref() == Some(id) {
            return false;
        }
        log::debug!("[focus] Changing focus from {:?} to {}", self.focused, id);
        self.focused = Some(id.to_string());
        true
    }

    /// Clear focus. Returns true if something was focused.
    pub fn blur(&mut self) -> bool {
        if self.focused.is_none() {
            return false;
        }
        self.focused = None;
        true
    }

    /// Move focus to the next focusable element in document order,
    /// wrapping around. Returns the newly focused id, or None if focus
    /// could not move.
    pub fn focus_next(&mut self, root: &Element) -> Option<String> {
        let focusable = collect_focusable(root);
        if focusable.is_empty() {
            return None;
        }

        let next = match self.focused.as_deref() {
            Some(current) => {
                let pos = focusable.iter().position(|id| id == current);
                match pos {
                    Some(i) => focusable[(i + 1) % focusable.len()].clone(),
                    None => focusable[0].clone(),
                }
            }
            None => focusable[0].clone(),
        };

        if self.focus(&next) {
            Some(next)
        } else {
            None
        }
    }

    /// Move focus to the previous focusable element, wrapping around.
    pub fn focus_prev(&mut self, root: &Element) -> Option<String> {
        let focusable = collect_focusable(root);
        if focusable.is_empty() {
            return None;
        }

        let prev = match self.focused.as_deref() {
            Some(current) => {
                let pos = focusable.iter().position(|id| id == current);
                match pos {
                    Some(i) => focusable[(i + focusable.len() - 1) % focusable.len()].clone(),
                    None => focusable[focusable.len() - 1].clone(),
                }
            }
            None => focusable[focusable.len() - 1].clone(),
        };

        if self.focus(&prev) {
            Some(prev)
        } else {
            None
        }
    }
}

/// Collect the ids of all visible, enabled focusable elements in
/// document order.
pub fn collect_focusable(element: &Element) -> Vec<String> {
    let mut result = Vec::new();
    collect_focusable_recursive(element, &mut result);
    result
}

fn collect_focusable_recursive(element: &Element, result: &mut Vec<String>) {
    if !element.display {
        return;
    }
    if element.focusable && !element.disabled {
        result.push(element.id.clone());
    }
    if let Content::Children(children) = &element.content {
        for child in children {
            collect_focusable_recursive(child, result);
        }
    }
}
