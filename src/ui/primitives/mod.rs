mod icon;
mod text;

pub use icon::Icon;
pub use text::ColoredText;
