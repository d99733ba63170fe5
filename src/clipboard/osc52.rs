//! Terminal clipboard via the OSC 52 escape sequence.

use std::fmt::{self, Debug};
use std::io::{self, Write};

use base64::{engine::general_purpose::STANDARD, Engine as _};
use crossterm::{execute, Command};

use super::{Clipboard, ClipboardError};

/// A command that sets the system clipboard ("c" selection) to the given
/// text. The payload is base64 encoded and terminated with BEL.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SetClipboard<'a>(pub &'a str);

impl Command for SetClipboard<'_> {
    fn write_ansi(&self, f: &mut impl fmt::Write) -> fmt::Result {
        write!(f, "\x1b]52;c;{}\x07", STANDARD.encode(self.0))
    }

    #[cfg(windows)]
    fn execute_winapi(&self) -> io::Result<()> {
        Err(io::Error::new(
            io::ErrorKind::Unsupported,
            "OSC 52 requires an ANSI terminal",
        ))
    }
}

/// Copies text by asking the terminal emulator to set the system
/// clipboard (OSC 52). Works over SSH as long as the terminal allows it.
#[derive(Debug)]
pub struct Osc52Clipboard<W: Write = io::Stdout> {
    out: W,
}

impl Osc52Clipboard {
    /// Write escape sequences to standard output.
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> Osc52Clipboard<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    /// Consume the clipboard, returning the underlying writer.
    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W> Clipboard for Osc52Clipboard<W>
where
    W: Write + Send + Debug,
{
    fn write_text(&mut self, text: &str) -> Result<(), ClipboardError> {
        execute!(self.out, SetClipboard(text))?;
        Ok(())
    }

    fn description(&self) -> &str {
        "terminal (OSC 52)"
    }
}
