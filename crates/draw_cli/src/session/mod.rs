//! Menu state machine.
//!
//! The console owns both stores for the whole process and moves between
//! three menus. Each step renders one menu, reads one choice, runs at most
//! one operation, and returns the next [`Mode`]:
//!
//! ```text
//! Top --1--> Roster --0--> Top
//! Top --2--> Range  --0--> Top
//! Top --0--> Exit
//! ```
//!
//! Draw errors are rendered and recovered inside the menu that caused them.
//! Only failures writing to the output sink propagate. End of input acts
//! like choosing `0` at every prompt, so a closed stdin unwinds to `Exit`.

mod range;
mod roster;

use crate::presenter::Presenter;
use draw_core::roster::io::{next_line, Line};
use draw_core::{DrawError, DrawRng, RangeStore, RosterStore, UniformSource};
use std::io::{self, BufRead, Write};
use tracing::info;

/// Which menu is active.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Top-level mode selection
    Top,
    /// Roster (mode A) menu
    Roster,
    /// Range (mode B) menu
    Range,
    /// Leave the program
    Exit,
}

/// One line of user input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Reply {
    /// Trimmed text, possibly empty
    Text(String),
    /// Line was not valid UTF-8
    Undecodable,
    /// Input closed
    Eof,
}

impl Reply {
    /// Numeric menu choice: first token as an integer, `0` at end of input.
    pub(crate) fn choice(&self) -> Option<i64> {
        match self {
            Self::Text(text) => parse_int(text),
            Self::Undecodable => None,
            Self::Eof => Some(0),
        }
    }

    /// First whitespace-delimited token.
    pub(crate) fn token(&self) -> Option<&str> {
        match self {
            Self::Text(text) => text.split_whitespace().next(),
            _ => None,
        }
    }
}

pub(crate) fn parse_int(text: &str) -> Option<i64> {
    text.split_whitespace().next()?.parse().ok()
}

/// Interactive driver owning input, presenter, RNG and both stores.
pub struct Console<R, W: Write, G = DrawRng> {
    input: R,
    ui: Presenter<W>,
    rng: G,
    roster: RosterStore,
    range: RangeStore,
}

impl<R: BufRead, W: Write, G: UniformSource> Console<R, W, G> {
    /// Create a console. `no_repeat` is the initial range-mode policy.
    pub fn new(input: R, ui: Presenter<W>, rng: G, no_repeat: bool) -> Self {
        Self {
            input,
            ui,
            rng,
            roster: RosterStore::new(),
            range: RangeStore::new(no_repeat),
        }
    }

    /// Run menus until the user exits or input ends.
    pub fn run(&mut self) -> io::Result<()> {
        let mut mode = Mode::Top;
        while mode != Mode::Exit {
            mode = self.step(mode)?;
        }
        self.ui.header("Goodbye", "")?;
        self.ui.note("Program finished.")
    }

    /// Run a single menu interaction.
    pub fn step(&mut self, mode: Mode) -> io::Result<Mode> {
        match mode {
            Mode::Top => self.top_menu(),
            Mode::Roster => self.roster_menu(),
            Mode::Range => self.range_menu(),
            Mode::Exit => Ok(Mode::Exit),
        }
    }

    /// Roster state.
    pub fn roster(&self) -> &RosterStore {
        &self.roster
    }

    /// Range state.
    pub fn range(&self) -> &RangeStore {
        &self.range
    }

    /// Consume the console, returning the presenter.
    pub fn into_presenter(self) -> Presenter<W> {
        self.ui
    }

    fn top_menu(&mut self) -> io::Result<Mode> {
        self.ui.header("Main menu", "Choose a draw mode")?;
        self.ui.menu(
            &[
                "1) Mode A: roster draw (no repeats, type or load names, export CSV)",
                "2) Mode B: range draw (1..N, no-repeat can be toggled)",
                "0) Exit",
            ],
            "Option",
        )?;

        let next = match self.read_reply()?.choice() {
            Some(0) => Mode::Exit,
            Some(1) => Mode::Roster,
            Some(2) => Mode::Range,
            _ => {
                self.invalid_option()?;
                Mode::Top
            }
        };
        if next != Mode::Top {
            info!(?next, "Mode selected");
        }
        Ok(next)
    }

    pub(crate) fn read_reply(&mut self) -> io::Result<Reply> {
        match next_line(&mut self.input) {
            Ok(None) => Ok(Reply::Eof),
            Ok(Some(Line::Entry(text))) => Ok(Reply::Text(text)),
            Ok(Some(Line::Blank)) => Ok(Reply::Text(String::new())),
            Err(e) if e.kind() == io::ErrorKind::InvalidData => Ok(Reply::Undecodable),
            Err(e) => Err(e),
        }
    }

    pub(crate) fn pause(&mut self) -> io::Result<()> {
        self.ui.pause()?;
        self.read_reply()?;
        self.ui.note("")
    }

    pub(crate) fn invalid_option(&mut self) -> io::Result<()> {
        self.report(&DrawError::invalid_input("unknown option"))
    }

    /// Render a recovered error and wait for acknowledgement.
    pub(crate) fn report(&mut self, err: &DrawError) -> io::Result<()> {
        info!(kind = err.kind().label(), error = %err, "Operation rejected");
        self.ui.failure(err)?;
        self.pause()
    }

    /// Wait for Enter, then play the ticker, when animation is on.
    pub(crate) fn pre_draw<F>(&mut self, next: F) -> io::Result<()>
    where
        F: FnMut() -> String,
    {
        if !self.ui.animates() {
            return Ok(());
        }
        self.ui.prompt("Press Enter to start the draw...")?;
        self.read_reply()?;
        self.ui.ticker(next)
    }
}
