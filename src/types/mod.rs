mod color;
mod enums;
mod style;

pub use color::{Color, Rgb};
pub use enums::{Direction, TextAlign, TextStyle};
pub use style::Style;
