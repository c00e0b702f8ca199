//! Roster ingestion and history export.
//!
//! Lines are read as raw bytes and trimmed of ASCII space, tab, CR and LF
//! only. Trimming never lands inside a multi-byte UTF-8 sequence because
//! those bytes are all >= 0x80.
//!
//! History is exported as `index,name` records with a 1-based index and no
//! header. Names are written verbatim: a comma or newline inside a name is
//! not escaped.

use super::RosterStore;
use crate::error::{DrawError, Result};
use csv::{QuoteStyle, Terminator, WriterBuilder};
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;
use tracing::{info, warn};

const TRIM_BYTES: &[u8] = b" \t\r\n";

/// What a blank line means to [`read_entries`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OnBlank {
    /// Blank line ends the input (interactive entry)
    Stop,
    /// Blank line is ignored (file input)
    Skip,
}

/// One line of roster input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Line {
    /// Non-blank, trimmed entry
    Entry(String),
    /// Line was empty after trimming
    Blank,
}

/// Entries collected by [`read_entries`], plus the error that cut reading
/// short, if any.
#[derive(Debug, Default)]
pub struct ReadOutcome {
    pub entries: Vec<String>,
    pub error: Option<io::Error>,
}

/// Trims ASCII whitespace from a string, returning `None` when blank.
pub fn normalize_str(line: &str) -> Option<&str> {
    let trimmed = line.trim_matches(|c: char| c.is_ascii() && TRIM_BYTES.contains(&(c as u8)));
    (!trimmed.is_empty()).then_some(trimmed)
}

/// Trims a raw line and decodes it as UTF-8.
///
/// Returns `Ok(None)` for a blank line and an `InvalidData` error when the
/// bytes are not valid UTF-8.
pub fn normalize_line(bytes: &[u8]) -> io::Result<Option<String>> {
    let start = bytes
        .iter()
        .position(|b| !TRIM_BYTES.contains(b))
        .unwrap_or(bytes.len());
    let end = bytes
        .iter()
        .rposition(|b| !TRIM_BYTES.contains(b))
        .map_or(start, |i| i + 1);

    let trimmed = &bytes[start..end];
    if trimmed.is_empty() {
        return Ok(None);
    }

    std::str::from_utf8(trimmed)
        .map(|s| Some(s.to_owned()))
        .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))
}

/// Reads the next line from `reader`.
///
/// Returns `Ok(None)` at end of input.
pub fn next_line<R: BufRead + ?Sized>(reader: &mut R) -> io::Result<Option<Line>> {
    let mut buf = Vec::new();
    if reader.read_until(b'\n', &mut buf)? == 0 {
        return Ok(None);
    }
    Ok(Some(match normalize_line(&buf)? {
        Some(entry) => Line::Entry(entry),
        None => Line::Blank,
    }))
}

/// Collects entries until end of input, an error, or (with
/// [`OnBlank::Stop`]) the first blank line.
pub fn read_entries<R: BufRead>(mut reader: R, on_blank: OnBlank) -> ReadOutcome {
    let mut outcome = ReadOutcome::default();
    loop {
        match next_line(&mut reader) {
            Ok(None) => break,
            Ok(Some(Line::Entry(entry))) => outcome.entries.push(entry),
            Ok(Some(Line::Blank)) if on_blank == OnBlank::Stop => break,
            Ok(Some(Line::Blank)) => {}
            Err(e) => {
                outcome.error = Some(e);
                break;
            }
        }
    }
    outcome
}

/// Writes `history` as `index,name` CSV records.
///
/// The file is created or truncated. An empty history leaves a zero-byte
/// file.
pub fn write_history_csv(history: &[String], path: &Path) -> io::Result<()> {
    let mut writer = WriterBuilder::new()
        .has_headers(false)
        .quote_style(QuoteStyle::Never)
        .terminator(Terminator::Any(b'\n'))
        .from_path(path)?;

    for (i, name) in history.iter().enumerate() {
        let index = (i + 1).to_string();
        writer.write_record([index.as_str(), name.as_str()])?;
    }

    writer.flush()
}

impl RosterStore {
    /// Loads names from a UTF-8 text file, one per line.
    ///
    /// Blank lines are skipped. Returns the pre-dedup count of entries added.
    ///
    /// # Errors
    ///
    /// - [`DrawError::Io`] when the file cannot be opened; the store is
    ///   unchanged.
    /// - [`DrawError::PartialRead`] when reading fails part-way; entries read
    ///   before the failure have been added.
    pub fn load_file(&mut self, path: impl AsRef<Path>) -> Result<usize> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|e| DrawError::io(path, e))?;

        let outcome = read_entries(BufReader::new(file), OnBlank::Skip);
        let added = self.add_many(&outcome.entries);

        match outcome.error {
            None => {
                info!(path = %path.display(), added, "Roster file loaded");
                Ok(added)
            }
            Some(source) => {
                warn!(path = %path.display(), kept = added, error = %source, "Roster file read interrupted");
                Err(DrawError::PartialRead {
                    path: path.to_path_buf(),
                    kept: added,
                    source,
                })
            }
        }
    }

    /// Exports the draw history as CSV.
    ///
    /// # Errors
    ///
    /// [`DrawError::Io`] when the file cannot be created or written.
    pub fn export_history(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        write_history_csv(self.history(), path).map_err(|e| DrawError::io(path, e))?;
        info!(path = %path.display(), records = self.history().len(), "History exported");
        Ok(())
    }
}
