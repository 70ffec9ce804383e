//! The display surface for the status line.
//!
//! [`StatusPanel`] is the single boundary the lookup writes to. It enforces
//! the write-once invariant: however the lookup ends, exactly one status line
//! lands on the panel per invocation.

use std::io::Write;

use crate::config::{FALLBACK_TEXT, STATUS_PREFIX};

/// Builds the status line for a successful lookup.
pub fn success_text(addr: &str) -> String {
    format!("{}{}", STATUS_PREFIX, addr)
}

/// The status line for any failed lookup.
pub fn fallback_text() -> &'static str {
    FALLBACK_TEXT
}

/// A write-once display surface backed by any [`Write`] sink.
///
/// The first call to [`set_text`](StatusPanel::set_text) writes the line;
/// later calls are ignored and logged at debug level.
#[derive(Debug)]
pub struct StatusPanel<W: Write> {
    writer: W,
    written: bool,
}

impl<W: Write> StatusPanel<W> {
    /// Creates a panel over the given sink.
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            written: false,
        }
    }

    /// Writes the status line, exactly once.
    ///
    /// A second call on the same panel is a no-op so a single invocation can
    /// never produce duplicate writes.
    ///
    /// # Errors
    ///
    /// Returns an I/O error if writing to the underlying sink fails.
    pub fn set_text(&mut self, text: &str) -> std::io::Result<()> {
        if self.written {
            log::debug!("Ignoring duplicate status write: {}", text);
            return Ok(());
        }
        writeln!(self.writer, "{}", text)?;
        self.writer.flush()?;
        self.written = true;
        Ok(())
    }

    /// Whether the status line has been written.
    pub fn was_written(&self) -> bool {
        self.written
    }

    /// Consumes the panel, returning the underlying sink.
    pub fn into_inner(self) -> W {
        self.writer
    }
}
