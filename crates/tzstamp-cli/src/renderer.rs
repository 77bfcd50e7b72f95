//! Terminal output for tzs.
//!
//! Two kinds of output leave the binary. Reports (`zone show`, `zone list`,
//! status lines) are markdown and get termimad styling unless `--no-color` is
//! set. Values (formatted timestamps, raw fallbacks, JSON) are written
//! verbatim in every mode so scripts can consume them.

use std::io::{self, Write};

use anyhow::Result;
use termimad::{crossterm::style::Color, MadSkin};

const BLUE: &str = "\x1b[34m";
const GREEN: &str = "\x1b[32m";
const RED: &str = "\x1b[31m";
const RESET: &str = "\x1b[0m";

/// Terminal renderer that can switch between rich and plain text output
pub struct TerminalRenderer {
    rich_enabled: bool,
    skin: MadSkin,
}

impl TerminalRenderer {
    pub fn new(rich_enabled: bool) -> Self {
        let mut skin = MadSkin::default();

        skin.set_headers_fg(Color::Blue);
        skin.bold.set_fg(Color::Yellow);
        skin.italic.set_fg(Color::Magenta);

        Self { rich_enabled, skin }
    }

    /// Render a markdown report to stdout.
    pub fn render(&self, markdown: &str) -> Result<()> {
        let mut out = io::stdout().lock();
        self.write_report(&mut out, markdown)?;
        out.flush()?;
        Ok(())
    }

    /// Write values to stdout exactly as given, one per line.
    pub fn render_values(&self, text: &str) -> Result<()> {
        let mut out = io::stdout().lock();
        write_values(&mut out, text)?;
        out.flush()?;
        Ok(())
    }

    fn write_report<W: Write>(&self, out: &mut W, markdown: &str) -> io::Result<()> {
        if !self.rich_enabled {
            return write!(out, "{markdown}");
        }

        for line in markdown.lines() {
            // termimad drops the hashes, keep them visible
            if line.starts_with('#') {
                writeln!(out, "{BLUE}{line}{RESET}")?;
            } else if let Some(rest) = line.strip_prefix("Success:") {
                writeln!(out, "{GREEN}Success:{RESET}{}", self.skin.inline(rest))?;
            } else if let Some(rest) = line.strip_prefix("Error:") {
                writeln!(out, "{RED}Error:{RESET}{}", self.skin.inline(rest))?;
            } else {
                writeln!(out, "{}", self.skin.inline(line))?;
            }
        }
        Ok(())
    }
}

fn write_values<W: Write>(out: &mut W, text: &str) -> io::Result<()> {
    out.write_all(text.as_bytes())?;
    if !text.is_empty() && !text.ends_with('\n') {
        out.write_all(b"\n")?;
    }
    Ok(())
}
