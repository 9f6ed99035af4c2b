//! Terminal output for reports and plans.
//!
//! Markdown lines go through termimad. A line carrying a step outcome icon
//! is colored by that outcome so failures and skips stand out in long runs.

use std::io::{self, Write};

use log::warn;
use termimad::{
    crossterm::style::{Color, Stylize},
    MadSkin,
};

/// Terminal renderer that can switch between rich and plain text output
pub struct TerminalRenderer {
    rich_enabled: bool,
    skin: MadSkin,
}

/// Color for a line that reports a step outcome, if it does.
fn outcome_color(line: &str) -> Option<Color> {
    [
        ("✗ ", Color::Red),
        ("⚠ ", Color::Yellow),
        ("○ ", Color::DarkGrey),
        ("✓ ", Color::Green),
        ("🎉 ", Color::Green),
    ]
    .into_iter()
    .find(|(icon, _)| line.contains(icon))
    .map(|(_, color)| color)
}

impl TerminalRenderer {
    pub fn new(rich_enabled: bool) -> Self {
        let mut skin = MadSkin::default();

        skin.set_headers_fg(Color::Blue);
        skin.bold.set_fg(Color::Yellow);
        skin.inline_code.set_bg(Color::AnsiValue(238));

        Self { rich_enabled, skin }
    }

    /// Render markdown to stdout.
    pub fn render(&self, markdown: &str) {
        let stdout = io::stdout();
        if let Err(e) = self.render_to(&mut stdout.lock(), markdown) {
            warn!("Failed to write output: {e}");
        }
    }

    /// Render markdown to any writer.
    pub fn render_to<W: Write>(&self, out: &mut W, markdown: &str) -> io::Result<()> {
        if !self.rich_enabled {
            return write!(out, "{markdown}");
        }
        for line in markdown.lines() {
            if line.starts_with('#') {
                writeln!(out, "{}", line.with(Color::Blue))?;
            } else if let Some(color) = outcome_color(line) {
                writeln!(out, "{}", line.with(color))?;
            } else {
                writeln!(out, "{}", self.skin.inline(line))?;
            }
        }
        out.flush()
    }
}

impl Default for TerminalRenderer {
    fn default() -> Self {
        Self::new(true)
    }
}
