//! Terminal rendering for the draw menus.
//!
//! Everything here is cosmetic: the engine never sees it. Output goes to any
//! [`Write`] sink; with styling off (tests, dumb terminals) only plain text is
//! written, with no escape sequences.

use crate::config::AnimationConfig;
use crossterm::cursor::{MoveTo, MoveToColumn};
use crossterm::queue;
use crossterm::style::{Color, Print, ResetColor, SetForegroundColor};
use crossterm::terminal::{Clear, ClearType};
use draw_core::DrawError;
use std::fmt::Display;
use std::io::{self, Write};
use std::thread;
use std::time::Duration;

const BOX_WIDTH: usize = 70;
const RULE_WIDTH: usize = 60;
const APP_TITLE: &str = "Draw System";

/// Renders headers, menus, lists and results.
pub struct Presenter<W: Write> {
    out: W,
    styled: bool,
    animation: AnimationConfig,
}

impl<W: Write> Presenter<W> {
    /// Create a presenter writing to `out`.
    pub fn new(out: W, styled: bool, animation: AnimationConfig) -> Self {
        Self {
            out,
            styled,
            animation,
        }
    }

    /// Plain presenter with the ticker off.
    pub fn plain(out: W) -> Self {
        Self::new(
            out,
            false,
            AnimationConfig {
                enabled: false,
                ..AnimationConfig::default()
            },
        )
    }

    /// True when a ticker runs before each draw.
    pub fn animates(&self) -> bool {
        self.animation.enabled && self.animation.frames > 0
    }

    /// Consume the presenter, returning the sink.
    pub fn into_inner(self) -> W {
        self.out
    }

    fn colored(&mut self, color: Color, text: &str) -> io::Result<()> {
        if self.styled {
            queue!(self.out, SetForegroundColor(color), Print(text), ResetColor)
        } else {
            self.out.write_all(text.as_bytes())
        }
    }

    /// Screen header: boxed application title, then a title and subtitle.
    pub fn header(&mut self, title: &str, subtitle: &str) -> io::Result<()> {
        if self.styled {
            queue!(self.out, Clear(ClearType::All), MoveTo(0, 0))?;
        } else {
            writeln!(self.out)?;
        }

        let edge = format!("+{}+\n", "-".repeat(BOX_WIDTH - 2));
        self.colored(Color::Cyan, &edge)?;
        for (color, line) in [
            (Color::Yellow, APP_TITLE),
            (Color::Green, title),
            (Color::Grey, subtitle),
        ] {
            self.colored(Color::Cyan, "|")?;
            self.colored(color, &centered(line, BOX_WIDTH - 2))?;
            self.colored(Color::Cyan, "|\n")?;
        }
        self.colored(Color::Cyan, &edge)?;
        self.out.flush()
    }

    /// Status line with a right-aligned tag.
    pub fn status(&mut self, left: &str, right: &str) -> io::Result<()> {
        self.colored(Color::DarkGrey, &format!("\n{}\n", "-".repeat(RULE_WIDTH)))?;
        let width = left.chars().count();
        let gap = RULE_WIDTH.saturating_sub(width).max(1);
        writeln!(self.out, "{}{}{}", left, " ".repeat(gap), right)
    }

    /// Numbered menu lines followed by a prompt.
    pub fn menu(&mut self, items: &[&str], prompt: &str) -> io::Result<()> {
        writeln!(self.out)?;
        for item in items {
            self.colored(Color::Cyan, &format!("{item}\n"))?;
        }
        self.prompt(&format!("\n{prompt}: "))
    }

    /// Prompt text without a trailing newline.
    pub fn prompt(&mut self, text: &str) -> io::Result<()> {
        write!(self.out, "{text}")?;
        self.out.flush()
    }

    /// Numbered list, or `empty` when there is nothing to show.
    pub fn list<T: Display>(&mut self, items: &[T], empty: &str) -> io::Result<()> {
        writeln!(self.out)?;
        if items.is_empty() {
            return self.colored(Color::DarkGrey, &format!("{empty}\n"));
        }
        for (i, item) in items.iter().enumerate() {
            self.colored(Color::White, &format!("{}. {}\n", i + 1, item))?;
        }
        Ok(())
    }

    /// Comma-separated values on one line, or `empty`.
    pub fn inline<T: Display>(&mut self, items: &[T], empty: &str) -> io::Result<()> {
        writeln!(self.out)?;
        if items.is_empty() {
            return self.colored(Color::DarkGrey, &format!("{empty}\n"));
        }
        let joined = items
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(", ");
        self.colored(Color::White, &format!("{joined}\n"))
    }

    /// Draw result.
    pub fn winner(&mut self, label: &str, value: &str) -> io::Result<()> {
        self.colored(Color::Green, &format!("\n* {label}: "))?;
        self.colored(Color::Yellow, &format!("{value}\n"))
    }

    /// Positive confirmation.
    pub fn success(&mut self, msg: &str) -> io::Result<()> {
        self.colored(Color::Green, &format!("\n{msg}\n"))
    }

    /// Neutral line.
    pub fn note(&mut self, msg: &str) -> io::Result<()> {
        writeln!(self.out, "{msg}")
    }

    /// Recovered error, tagged with its kind.
    pub fn failure(&mut self, err: &DrawError) -> io::Result<()> {
        self.colored(Color::Red, &format!("\n! [{}] {}\n", err.kind().label(), err))
    }

    /// Press-Enter prompt shown after each operation.
    pub fn pause(&mut self) -> io::Result<()> {
        self.colored(Color::Green, "\nPress Enter to continue...")?;
        self.out.flush()
    }

    /// Cosmetic ticker cycling through values from `next` before a draw.
    ///
    /// Values shown here are never the recorded result.
    pub fn ticker<F>(&mut self, mut next: F) -> io::Result<()>
    where
        F: FnMut() -> String,
    {
        if !self.animates() {
            return Ok(());
        }
        writeln!(self.out)?;
        for i in 0..self.animation.frames {
            let value = next();
            if self.styled {
                queue!(self.out, MoveToColumn(0))?;
            } else {
                write!(self.out, "\r")?;
            }
            self.colored(Color::Cyan, ">>> ")?;
            self.colored(Color::White, &format!("{value:<32}"))?;
            self.out.flush()?;
            let delay = self.animation.frame_delay_ms + (i as u64 / 10) * 10;
            thread::sleep(Duration::from_millis(delay));
        }
        writeln!(self.out)
    }
}

/// Centre `text` in `width` columns, counting chars (wide glyphs are not
/// measured).
fn centered(text: &str, width: usize) -> String {
    let len = text.chars().count();
    let pad = width.saturating_sub(len) / 2;
    let tail = width.saturating_sub(len + pad);
    format!("{}{}{}", " ".repeat(pad), text, " ".repeat(tail))
}
