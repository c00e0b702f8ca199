//! Roster (mode A) menu.

use super::{Console, Mode, Reply};
use crate::presenter::Presenter;
use draw_core::{draw_from_roster, DrawError, UniformSource};
use rand::Rng;
use std::io::{self, BufRead, Write};
use tracing::info;

impl<R: BufRead, W: Write, G: UniformSource> Console<R, W, G> {
    pub(super) fn roster_menu(&mut self) -> io::Result<Mode> {
        self.ui
            .header("Mode A: roster draw (no repeats)", "Type or load names; drawn names leave the pool")?;
        render_status(&mut self.ui, &self.roster)?;
        self.ui.menu(
            &[
                "1) Enter names (one per line, blank line to finish)",
                "2) Load names from file (one name per line)",
                "3) Draw one",
                "4) View names (all / remaining / drawn)",
                "5) Reset (return drawn names to the pool)",
                "6) Export drawn results (CSV)",
                "0) Back to main menu",
            ],
            "Option",
        )?;

        match self.read_reply()?.choice() {
            Some(0) => return Ok(Mode::Top),
            Some(1) => self.enter_names()?,
            Some(2) => self.load_names()?,
            Some(3) => self.draw_name()?,
            Some(4) => self.view_names()?,
            Some(5) => self.reset_roster()?,
            Some(6) => self.export_names()?,
            _ => self.invalid_option()?,
        }
        Ok(Mode::Roster)
    }

    fn enter_names(&mut self) -> io::Result<()> {
        self.ui.header("Enter names", "One name per line; a blank line finishes")?;

        let mut lines = Vec::new();
        loop {
            self.ui.prompt("> ")?;
            match self.read_reply()? {
                Reply::Text(text) if text.is_empty() => break,
                Reply::Text(text) => lines.push(text),
                Reply::Undecodable => {
                    self.ui
                        .failure(&DrawError::invalid_input("line is not valid UTF-8; skipped"))?;
                }
                Reply::Eof => break,
            }
        }

        let added = self.roster.add_many(&lines);
        info!(added, total = self.roster.all().len(), "Names entered");
        self.ui.success(&format!(
            "Added {}; {} available to draw.",
            added,
            self.roster.pool().len()
        ))?;
        self.pause()
    }

    fn load_names(&mut self) -> io::Result<()> {
        self.ui
            .header("Load names from file", "One name per line, e.g. names.txt")?;
        self.ui.prompt("File name/path: ")?;

        let reply = self.read_reply()?;
        let Some(path) = reply.token() else {
            return self.report(&DrawError::invalid_input("no file name given"));
        };

        match self.roster.load_file(path) {
            Ok(added) => {
                self.ui.success(&format!(
                    "Loaded {}; {} available to draw.",
                    added,
                    self.roster.pool().len()
                ))?;
                self.pause()
            }
            Err(err) => self.report(&err),
        }
    }

    fn draw_name(&mut self) -> io::Result<()> {
        if !self.roster.pool().is_empty() {
            self.ui.header("Drawing (roster)", "Candidates shuffling...")?;
            let candidates = self.roster.pool().to_vec();
            let mut preview = rand::thread_rng();
            self.pre_draw(move || candidates[preview.gen_range(0..candidates.len())].clone())?;
        }

        match draw_from_roster(&mut self.roster, &mut self.rng) {
            Ok(winner) => {
                info!(winner = %winner, "Name drawn");
                self.ui.header("Draw result", "Congratulations!")?;
                self.ui.winner("Winner", &winner)?;
                self.ui
                    .note(&format!("Remaining: {}", self.roster.pool().len()))?;
                self.pause()
            }
            Err(err) => {
                self.ui
                    .header("Draw one", "Pool is empty; add names or reset first")?;
                self.report(&err)
            }
        }
    }

    fn view_names(&mut self) -> io::Result<()> {
        self.ui.header("View names", "All / remaining / drawn")?;
        self.ui.menu(
            &["1) Full roster", "2) Remaining in pool", "3) Drawn so far", "0) Back"],
            "Option",
        )?;

        match self.read_reply()?.choice() {
            Some(0) => return Ok(()),
            Some(1) => self.ui.list(self.roster.all(), "(no names yet)")?,
            Some(2) => self.ui.list(self.roster.pool(), "(pool is empty)")?,
            Some(3) => self.ui.list(self.roster.history(), "(nobody drawn yet)")?,
            _ => return self.invalid_option(),
        }
        self.pause()
    }

    fn reset_roster(&mut self) -> io::Result<()> {
        self.roster.reset();
        info!(pool = self.roster.pool().len(), "Roster reset");
        self.ui
            .header("Reset complete", "Drawn names are back in the pool")?;
        self.ui
            .success(&format!("Available: {}", self.roster.pool().len()))?;
        self.pause()
    }

    fn export_names(&mut self) -> io::Result<()> {
        self.ui
            .header("Export drawn results", "CSV records: index,name")?;
        self.ui.prompt("Output file name (e.g. result.csv): ")?;

        let reply = self.read_reply()?;
        let Some(path) = reply.token() else {
            return self.report(&DrawError::invalid_input("no file name given"));
        };

        match self.roster.export_history(path) {
            Ok(()) => {
                self.ui.success(&format!(
                    "Exported {} record(s) to {} (empty file when nothing was drawn).",
                    self.roster.history().len(),
                    path
                ))?;
                self.pause()
            }
            Err(err) => self.report(&err),
        }
    }
}

fn render_status<W: Write>(ui: &mut Presenter<W>, roster: &draw_core::RosterStore) -> io::Result<()> {
    let (all, pool, drawn) = roster.snapshot().counts();
    ui.status(
        &format!("Status: all {all} / available {pool} / drawn {drawn}"),
        "Mode A",
    )
}
