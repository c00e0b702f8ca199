//! Range (mode B) menu.

use super::{parse_int, Console, Mode, Reply};
use draw_core::{draw_from_range, DrawError, UniformSource};
use rand::Rng;
use std::io::{self, BufRead, Write};
use tracing::info;

fn yes_no(flag: bool) -> &'static str {
    if flag {
        "yes"
    } else {
        "no"
    }
}

impl<R: BufRead, W: Write, G: UniformSource> Console<R, W, G> {
    pub(super) fn range_menu(&mut self) -> io::Result<Mode> {
        self.ui
            .header("Mode B: range draw (1..N)", "Optional no-repeat, with reset and status")?;
        self.render_range_status()?;

        let toggle = format!(
            "2) Toggle no-repeat (currently: {})",
            yes_no(self.range.no_repeat())
        );
        self.ui.menu(
            &[
                "1) Set N",
                toggle.as_str(),
                "3) Draw once",
                "4) View drawn numbers",
                "5) Reset (clear drawn / rebuild pool)",
                "0) Back to main menu",
            ],
            "Option",
        )?;

        match self.read_reply()?.choice() {
            Some(0) => return Ok(Mode::Top),
            Some(1) => self.set_range()?,
            Some(2) => self.toggle_no_repeat()?,
            Some(3) => self.draw_number()?,
            Some(4) => self.view_numbers()?,
            Some(5) => self.reset_range()?,
            _ => self.invalid_option()?,
        }
        Ok(Mode::Range)
    }

    fn render_range_status(&mut self) -> io::Result<()> {
        let snap = self.range.snapshot();
        let remaining = snap
            .remaining()
            .map_or_else(|| "-".to_string(), |n| n.to_string());
        let left = format!(
            "Status: N={} / no-repeat={} / available={} / drawn={}",
            snap.n,
            yes_no(snap.no_repeat),
            remaining,
            snap.history.len()
        );
        self.ui.status(&left, "Mode B")
    }

    fn set_range(&mut self) -> io::Result<()> {
        self.ui.header("Set N", "For example 50 draws from 1..50")?;
        self.ui.prompt("Enter N: ")?;

        let n = match self.read_reply()? {
            Reply::Text(text) => parse_int(&text),
            Reply::Undecodable => None,
            Reply::Eof => return Ok(()),
        };
        let Some(n) = n else {
            return self.report(&DrawError::invalid_input("N must be a whole number"));
        };

        match self.range.set_n(n) {
            Ok(()) => {
                self.ui.success(&format!("N set to {}", self.range.n()))?;
                self.pause()
            }
            Err(err) => self.report(&err),
        }
    }

    fn toggle_no_repeat(&mut self) -> io::Result<()> {
        let now = match self.range.toggle_no_repeat() {
            Ok(now) => now,
            Err(err) => return self.report(&err),
        };
        info!(no_repeat = now, "No-repeat toggled");
        if now {
            self.ui.success("No-repeat is now: yes (pool rebuilt, drawn numbers cleared)")?;
        } else {
            self.ui.success("No-repeat is now: no (repeats allowed)")?;
        }
        self.pause()
    }

    fn draw_number(&mut self) -> io::Result<()> {
        let drawable = self.range.is_configured()
            && (!self.range.no_repeat() || !self.range.pool().is_empty());
        if drawable {
            self.ui.header("Drawing (numbers)", "Numbers spinning...")?;
            // Preview spans the whole range; the result comes from the engine.
            let n = self.range.n();
            let mut preview = rand::thread_rng();
            self.pre_draw(move || preview.gen_range(1..=n).to_string())?;
        }

        match draw_from_range(&mut self.range, &mut self.rng) {
            Ok(value) => {
                info!(value, "Number drawn");
                let subtitle = if self.range.no_repeat() {
                    "Congratulations!"
                } else {
                    "(repeats allowed in this mode)"
                };
                self.ui.header("Draw result", subtitle)?;
                self.ui.winner("Winning number", &value.to_string())?;
                if let Some(left) = self.range.snapshot().remaining() {
                    self.ui.note(&format!("Remaining: {left}"))?;
                }
                self.pause()
            }
            Err(err) => {
                let hint = match err {
                    DrawError::NotConfigured => "Set N first",
                    _ => "Pool is empty; reset or turn off no-repeat",
                };
                self.ui.header("Draw once", hint)?;
                self.report(&err)
            }
        }
    }

    fn view_numbers(&mut self) -> io::Result<()> {
        self.ui
            .header("Drawn numbers", "Sorted ascending (draw order is unchanged)")?;
        let sorted = self.range.sorted_history();
        self.ui.inline(&sorted, "(nothing drawn yet)")?;
        self.pause()
    }

    fn reset_range(&mut self) -> io::Result<()> {
        self.range.reset();
        info!(n = self.range.n(), "Range reset");
        self.ui.header("Reset", "Drawn numbers cleared and pool rebuilt")?;
        let remaining = self
            .range
            .snapshot()
            .remaining()
            .map_or_else(|| "-".to_string(), |n| n.to_string());
        self.ui
            .success(&format!("N={} / available={}", self.range.n(), remaining))?;
        self.pause()
    }
}
