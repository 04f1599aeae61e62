//! Console progress reporting
//!
//! Human-readable scan/progress lines, not intended for machine parsing.
//! The percentage line overwrites itself with a carriage return, so the
//! stream is flushed after every update.

use std::io::{self, Write};

use termcolor::{Color, ColorChoice, ColorSpec, StandardStream, WriteColor};

/// Writes scan progress to stdout.
pub struct Reporter {
    out: StandardStream,
    /// Suppresses everything; used by tests that only care about output files.
    quiet: bool,
}

impl Reporter {
    pub fn new(use_color: bool) -> Self {
        let choice = if use_color {
            ColorChoice::Always
        } else {
            ColorChoice::Never
        };
        Self {
            out: StandardStream::stdout(choice),
            quiet: false,
        }
    }

    /// A reporter that prints nothing.
    pub fn silent() -> Self {
        Self {
            out: StandardStream::stdout(ColorChoice::Never),
            quiet: true,
        }
    }

    pub fn scan_started(&mut self) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        writeln!(self.out, "Starting scan...")
    }

    pub fn total_files(&mut self, total: usize) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        writeln!(self.out, "Total files to process: {}", total)
    }

    pub fn processing(&mut self, rel_path: &str) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        writeln!(self.out, "Processing: {}", rel_path)
    }

    /// Overwrite the status line with the current percentage.
    pub fn progress(&mut self, processed: usize, total: usize) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        let pct = if total == 0 {
            100
        } else {
            ((processed as f64 / total as f64) * 100.0).round() as u32
        };
        write!(self.out, "\rProgress: {}%", pct)?;
        self.out.flush()
    }

    pub fn writing(&mut self, filename: &str) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        writeln!(self.out, "\nWriting {}...", filename)
    }

    /// Final completion line, highlighted when color is enabled.
    pub fn done(&mut self, path: &std::path::Path) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        self.out.set_color(ColorSpec::new().set_fg(Some(Color::Green)))?;
        write!(self.out, "Done!")?;
        self.out.reset()?;
        writeln!(self.out, " Saved to {}", path.display())
    }

    pub fn warn(&mut self, message: &str) {
        if self.quiet {
            return;
        }
        eprintln!("pare: warning: {}", message);
    }
}
