//! Colored terminal output
//!
//! Same layout as the structure file, with directory names in bold blue.

use std::io;

use termcolor::{Color, ColorChoice, ColorSpec, StandardStream, WriteColor};

use crate::tree::StreamingOutput;
use crate::tree::traversal::connector;

/// Streaming formatter for a color-capable writer, usually stdout.
pub struct ColorOutput<W: WriteColor> {
    out: W,
}

impl ColorOutput<StandardStream> {
    /// Output to stdout, colored only when `use_color` is set.
    ///
    /// Terminal detection is the caller's job; `use_color` is taken as final.
    pub fn stdout(use_color: bool) -> Self {
        let choice = if use_color {
            ColorChoice::Always
        } else {
            ColorChoice::Never
        };
        Self::new(StandardStream::stdout(choice))
    }
}

impl<W: WriteColor> ColorOutput<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn write_dir_name(&mut self, name: &str) -> io::Result<()> {
        self.out
            .set_color(ColorSpec::new().set_fg(Some(Color::Blue)).set_bold(true))?;
        write!(self.out, "{}/", name)?;
        self.out.reset()?;
        writeln!(self.out)
    }
}

impl<W: WriteColor> StreamingOutput for ColorOutput<W> {
    fn output_node(
        &mut self,
        name: &str,
        is_dir: bool,
        is_last: bool,
        prefix: &str,
        is_root: bool,
    ) -> io::Result<()> {
        if !is_root {
            write!(self.out, "{}{}", prefix, connector(is_last))?;
        }
        if is_dir {
            self.write_dir_name(name)
        } else {
            writeln!(self.out, "{}", name)
        }
    }

    fn finish(&mut self) -> io::Result<()> {
        self.out.reset()?;
        self.out.flush()
    }
}
