use std::time::Duration;

#[derive(Debug, Clone, Default)]
pub enum Content {
    #[default]
    None,
    Text(String),
    Children(Vec<super::Element>),
    /// Editable single-line input (the search box).
    TextInput {
        value: String,
        cursor: usize,
        placeholder: Option<String>,
        focused: bool,
    },
    /// Animated frames - advances through children at the specified
    /// interval. Only the current frame is laid out and rendered.
    /// Looping frames cycle forever; one-shot frames stop on the last.
    Frames {
        children: Vec<super::Element>,
        interval: Duration,
        repeat: bool,
    },
}
