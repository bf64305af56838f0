//! Tree output destinations
//!
//! # Module Structure
//!
//! - `text` - Plain UTF-8 lines for any `io::Write`
//! - `color` - Colored lines for the terminal
//! - `file` - Atomically written structure file

mod color;
mod file;
mod text;

pub use color::ColorOutput;
pub use file::write_structure;
pub use text::TextOutput;
