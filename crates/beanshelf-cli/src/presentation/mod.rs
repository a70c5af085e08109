pub mod console;
pub mod swatch;
pub mod text;
pub mod tui;

pub use swatch::parse_hex_color;
pub use text::truncate;
