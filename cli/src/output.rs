//! Styled terminal lines for the roster commands.
//!
//! Write errors are dropped: a closed stdout (e.g. `roster list | head`) must not
//! turn into a failure.

use std::fmt::Display;

use console::{Term, style};
use roster_business::{Notice, NoticeKind};

pub struct Output {
    term: Term,
}

impl Default for Output {
    fn default() -> Self {
        Self::new()
    }
}

impl Output {
    pub fn new() -> Self {
        Self {
            term: Term::stdout(),
        }
    }

    fn line(&self, text: &str) {
        drop(self.term.write_line(text));
    }

    /// A notice behind a coloured mark: ✓ success, ✗ error, ℹ info.
    pub fn notice(&self, notice: &Notice) {
        let mark = match notice.kind {
            NoticeKind::Success => style("✓").green(),
            NoticeKind::Error => style("✗").red(),
            NoticeKind::Info => style("ℹ").blue(),
        };
        self.line(&format!("{} {notice}", mark.bold()));
    }

    pub fn print(&self, message: impl Display) {
        self.line(&message.to_string());
    }

    pub fn heading(&self, title: impl Display) {
        self.line(&style(title).bold().cyan().to_string());
    }

    pub fn muted(&self, message: impl Display) {
        self.line(&style(message).dim().to_string());
    }

    /// `  label: value`, label dimmed.
    pub fn field(&self, label: impl Display, value: impl Display) {
        self.line(&format!("  {}: {value}", style(label).dim()));
    }

    /// Progress line on a terminal, removed by [`clear_status`](Self::clear_status).
    pub fn status(&self, message: impl Display) {
        if self.term.is_term() {
            self.muted(message);
        }
    }

    pub fn clear_status(&self) {
        if self.term.is_term() {
            drop(self.term.clear_last_lines(1));
        }
    }

    /// Clears the screen between interactive redraws; ignored when not a terminal.
    pub fn clear(&self) {
        if self.term.is_term() {
            drop(self.term.clear_screen());
        }
    }
}
