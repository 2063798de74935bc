use crate::element::Element;
use crate::focus::FocusState;
use crate::hit::{hit_test, hit_test_focusable};
use crate::layout::LayoutResult;

/// High-level events with element targeting
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// Key press event, targeted at the focused element
    Key {
        target: Option<String>,
        key: Key,
        modifiers: Modifiers,
    },
    /// Mouse click event
    Click {
        target: Option<String>,
        x: u16,
        y: u16,
        button: MouseButton,
    },
    /// A text input's value changed
    Change { target: String, text: String },
    /// Enter was pressed inside a text input
    Submit { target: String },
    /// Element gained focus
    Focus { target: String },
    /// Element lost focus
    Blur { target: String },
    /// Terminal resized
    Resize { width: u16, height: u16 },
}

/// Simplified key representation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    Char(char),
    Enter,
    Backspace,
    Delete,
    Tab,
    BackTab,
    Escape,
    Up,
    Down,
    Left,
    Right,
    Home,
    End,
    PageUp,
    PageDown,
    F(u8),
}

/// Key modifiers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Modifiers {
    pub shift: bool,
    pub ctrl: bool,
    pub alt: bool,
}

impl Modifiers {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn shift() -> Self {
        Self {
            shift: true,
            ..Default::default()
        }
    }

    pub fn ctrl() -> Self {
        Self {
            ctrl: true,
            ..Default::default()
        }
    }

    pub fn none(&self) -> bool {
        !self.shift && !self.ctrl && !self.alt
    }
}

/// Mouse button
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MouseButton {
    Left,
    Right,
    Middle,
}

/// Turn raw terminal events into targeted events: clicks are hit-tested
/// against the last layout (also moving focus to the element under the
/// cursor), key presses are addressed to the focused element, Tab walks
/// focus through the document.
pub fn translate(
    raw: &[crossterm::event::Event],
    root: &Element,
    layout: &LayoutResult,
    focus: &mut FocusState,
) -> Vec<Event> {
    use crossterm::event::{Event as CtEvent, KeyEventKind, MouseEventKind};

    let mut events = Vec::new();

    for event in raw {
        match event {
            CtEvent::Key(key) if key.kind != KeyEventKind::Release => {
                let k = Key::from(key.code);
                let modifiers = Modifiers::from(key.modifiers);

                match k {
                    Key::Tab if modifiers.none() => {
                        let previous = focus.focused().map(str::to_string);
                        if let Some(next) = focus.focus_next(root) {
                            if let Some(old) = previous {
                                events.push(Event::Blur { target: old });
                            }
                            events.push(Event::Focus { target: next });
                        }
                        continue;
                    }
                    Key::BackTab => {
                        let previous = focus.focused().map(str::to_string);
                        if let Some(prev) = focus.focus_prev(root) {
                            if let Some(old) = previous {
                                events.push(Event::Blur { target: old });
                            }
                            events.push(Event::Focus { target: prev });
                        }
                        continue;
                    }
                    _ => {}
                }

                events.push(Event::Key {
                    target: focus.focused().map(str::to_string),
                    key: k,
                    modifiers,
                });
            }
            CtEvent::Mouse(mouse) => {
                if let MouseEventKind::Down(button) = mouse.kind {
                    let target = hit_test(layout, root, mouse.column, mouse.row);
                    if let Some(focus_target) =
                        hit_test_focusable(layout, root, mouse.column, mouse.row)
                    {
                        let previous = focus.focused().map(str::to_string);
                        if focus.focus(&focus_target) {
                            if let Some(old) = previous {
                                events.push(Event::Blur { target: old });
                            }
                            events.push(Event::Focus {
                                target: focus_target,
                            });
                        }
                    }
                    events.push(Event::Click {
                        target,
                        x: mouse.column,
                        y: mouse.row,
                        button: MouseButton::from(button),
                    });
                }
            }
            CtEvent::Resize(width, height) => {
                events.push(Event::Resize {
                    width: *width,
                    height: *height,
                });
            }
            _ => {}
        }
    }

    events
}

// Conversion from crossterm types
impl From<crossterm::event::KeyCode> for Key {
    fn from(code: crossterm::event::KeyCode) -> Self {
        use crossterm::event::KeyCode;
        match code {
            KeyCode::Char(c) => Key::Char(c),
            KeyCode::Enter => Key::Enter,
            KeyCode::Backspace => Key::Backspace,
            KeyCode::Delete => Key::Delete,
            KeyCode::Tab => Key::Tab,
            KeyCode::BackTab => Key::BackTab,
            KeyCode::Esc => Key::Escape,
            KeyCode::Up => Key::Up,
            KeyCode::Down => Key::Down,
            KeyCode::Left => Key::Left,
            KeyCode::Right => Key::Right,
            KeyCode::Home => Key::Home,
            KeyCode::End => Key::End,
            KeyCode::PageUp => Key::PageUp,
            KeyCode::PageDown => Key::PageDown,
            KeyCode::F(n) => Key::F(n),
            _ => Key::Char('\0'), // Placeholder for unsupported keys
        }
    }
}

impl From<crossterm::event::KeyModifiers> for Modifiers {
    fn from(mods: crossterm::event::KeyModifiers) -> Self {
        use crossterm::event::KeyModifiers;
        Self {
            shift: mods.contains(KeyModifiers::SHIFT),
            ctrl: mods.contains(KeyModifiers::CONTROL),
            alt: mods.contains(KeyModifiers::ALT),
        }
    }
}

impl From<crossterm::event::MouseButton> for MouseButton {
    fn from(btn: crossterm::event::MouseButton) -> Self {
        use crossterm::event::MouseButton as CtBtn;
        match btn {
            CtBtn::Left => MouseButton::Left,
            CtBtn::Right => MouseButton::Right,
            CtBtn::Middle => MouseButton::Middle,
        }
    }
}
