pub mod buffer;
pub mod element;
pub mod event;
pub mod focus;
pub mod hit;
pub mod layout;
pub mod render;
pub mod table;
pub mod terminal;
pub mod text;
pub mod text_input;
pub mod types;
pub mod widgets;

pub use buffer::Buffer;
pub use element::{
    collect_text, find_element, find_element_mut, insert_after, insert_before, remove_element,
    Content, Element,
};
pub use event::{translate, Event, Key, Modifiers, MouseButton};
pub use focus::{collect_focusable, FocusState};
pub use hit::{hit_test, hit_test_any, hit_test_focusable};
pub use layout::{layout, LayoutResult, Rect};
pub use render::render_to_buffer;
pub use table::{EnhancedTable, TableConfig};
pub use terminal::Terminal;
pub use text_input::TextInputState;
pub use types::*;
