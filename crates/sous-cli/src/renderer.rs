//! Terminal rendering for markdown output and notices.
//!
//! Screens are rendered with termimad when color is enabled and printed as
//! plain markdown otherwise. Notices go to stderr so stdout carries only the
//! requested content.

use std::io::Write;

use anyhow::Result;
use sous_core::{Notice, NoticeLevel, Notifier};
use termimad::crossterm::cursor::MoveTo;
use termimad::crossterm::execute;
use termimad::crossterm::style::Color;
use termimad::crossterm::terminal::{Clear, ClearType};
use termimad::MadSkin;

/// Terminal renderer that can switch between rich and plain text output
pub struct TerminalRenderer {
    rich_enabled: bool,
    skin: MadSkin,
}

impl TerminalRenderer {
    pub fn new(rich_enabled: bool) -> Self {
        let mut skin = MadSkin::default();
        skin.set_headers_fg(Color::Green);
        skin.bold.set_fg(Color::Yellow);
        skin.italic.set_fg(Color::Magenta);
        skin.inline_code.set_fg(Color::Cyan);
        skin.inline_code.set_bg(Color::AnsiValue(236));

        Self { rich_enabled, skin }
    }

    pub fn is_rich(&self) -> bool {
        self.rich_enabled
    }

    /// Render markdown text to stdout
    pub fn render(&self, markdown: &str) -> Result<()> {
        let mut out = std::io::stdout().lock();
        if self.rich_enabled {
            for line in markdown.lines() {
                if line.starts_with('#') {
                    writeln!(out, "\x1b[32m{}\x1b[0m", line.trim_start_matches('#').trim())?;
                } else {
                    writeln!(out, "{}", self.skin.inline(line))?;
                }
            }
        } else {
            write!(out, "{markdown}")?;
        }
        out.flush()?;
        Ok(())
    }

    /// Clears the screen before a full redraw. Plain output is never cleared.
    pub fn clear(&self) -> Result<()> {
        if self.rich_enabled {
            let mut out = std::io::stdout().lock();
            execute!(out, Clear(ClearType::All), MoveTo(0, 0))?;
        }
        Ok(())
    }

    fn notice_line(&self, notice: &Notice) -> String {
        let line = notice.to_string();
        if !self.rich_enabled {
            return line;
        }
        let color = match notice.level {
            NoticeLevel::Info => "34",
            NoticeLevel::Success => "32",
            NoticeLevel::Error => "31",
        };
        format!("\x1b[{color}m{}\x1b[0m\n", line.trim_end())
    }
}

impl Default for TerminalRenderer {
    fn default() -> Self {
        Self::new(true)
    }
}

impl Notifier for TerminalRenderer {
    fn notify(&self, notice: Notice) {
        eprint!("{}", self.notice_line(&notice));
    }
}
