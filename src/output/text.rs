//! Plain-text output
//!
//! `TextOutput` writes the tree as uncolored UTF-8 lines to any `io::Write`.
//! This is the format of the structure file.

use std::io::{self, Write};

use crate::tree::StreamingOutput;
use crate::tree::traversal::connector;

/// Writes one line per node: `prefix + connector + name`, with `/` after directories.
pub struct TextOutput<W: Write> {
    writer: W,
}

impl<W: Write> TextOutput<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    pub fn get_ref(&self) -> &W {
        &self.writer
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> StreamingOutput for TextOutput<W> {
    fn output_node(
        &mut self,
        name: &str,
        is_dir: bool,
        is_last: bool,
        prefix: &str,
        is_root: bool,
    ) -> io::Result<()> {
        let slash = if is_dir { "/" } else { "" };
        if is_root {
            writeln!(self.writer, "{}{}", name, slash)
        } else {
            writeln!(
                self.writer,
                "{}{}{}{}",
                prefix,
                connector(is_last),
                name,
                slash
            )
        }
    }

    fn finish(&mut self) -> io::Result<()> {
        self.writer.flush()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_root_line() {
        let mut out = TextOutput::new(Vec::new());
        out.output_node("project", true, true, "", true).unwrap();
        assert_eq!(out.into_inner(), "project/\n".as_bytes());
    }

    #[test]
    fn test_node_lines() {
        let mut out = TextOutput::new(Vec::new());
        out.output_node("src", true, false, "", false).unwrap();
        out.output_node("main.rs", false, true, "│   ", false).unwrap();
        out.output_node("README.md", false, true, "", false).unwrap();
        out.finish().unwrap();

        let text = String::from_utf8(out.into_inner()).unwrap();
        assert_eq!(text, "├── src/\n│   └── main.rs\n└── README.md\n");
    }

    #[test]
    fn test_empty_root_name_renders_slash() {
        let mut out = TextOutput::new(Vec::new());
        out.output_node("", true, true, "", true).unwrap();
        assert_eq!(out.get_ref().as_slice(), b"/\n");
    }
}
