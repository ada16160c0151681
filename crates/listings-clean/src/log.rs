//! Side-channel violation log.
//!
//! Rule stages report violations here; the log never touches the record
//! set. Lines are written to the sink as stages execute, so an interrupted
//! run leaves a partial log and no output file.

use std::io::{self, Write};

/// One loggable outcome of a rule stage.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogEntry {
    /// A rule violated by the rows at `indices` (positions in the record
    /// set at the time the rule ran).
    Rule {
        message: &'static str,
        indices: Vec<usize>,
    },
    /// A standalone notice with no affected rows.
    Note { message: &'static str },
}

/// Append-style writer for rule violations.
pub struct ViolationLog<W: Write> {
    sink: W,
    lines: usize,
}

impl<W: Write> ViolationLog<W> {
    pub fn new(sink: W) -> Self {
        Self { sink, lines: 0 }
    }

    /// Number of lines written so far.
    pub fn lines(&self) -> usize {
        self.lines
    }

    /// Writes `<message> Indices: <i, j, ...>`. A no-op when no row
    /// violated the rule.
    pub fn record(&mut self, message: &str, indices: &[usize]) -> io::Result<()> {
        if indices.is_empty() {
            return Ok(());
        }
        let joined = indices
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(", ");
        writeln!(self.sink, "{message} Indices: {joined}")?;
        self.lines += 1;
        Ok(())
    }

    /// Writes a bare message line.
    pub fn note(&mut self, message: &str) -> io::Result<()> {
        writeln!(self.sink, "{message}")?;
        self.lines += 1;
        Ok(())
    }

    pub fn write_entry(&mut self, entry: &LogEntry) -> io::Result<()> {
        match entry {
            LogEntry::Rule { message, indices } => self.record(message, indices),
            LogEntry::Note { message } => self.note(message),
        }
    }

    pub fn flush(&mut self) -> io::Result<()> {
        self.sink.flush()
    }

    pub fn into_inner(self) -> W {
        self.sink
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn record_formats_indices_line() {
        let mut log = ViolationLog::new(Vec::new());
        log.record("Null IDs found.", &[0, 2, 5]).unwrap();
        let text = String::from_utf8(log.into_inner()).unwrap();
        assert_eq!(text, "Null IDs found. Indices: 0, 2, 5\n");
    }

    #[test]
    fn record_is_noop_without_violations() {
        let mut log = ViolationLog::new(Vec::new());
        log.record("Null IDs found.", &[]).unwrap();
        assert_eq!(log.lines(), 0);
        assert!(log.into_inner().is_empty());
    }

    #[test]
    fn note_writes_bare_message() {
        let mut log = ViolationLog::new(Vec::new());
        log.note("raw_price column missing.").unwrap();
        assert_eq!(log.lines(), 1);
        let text = String::from_utf8(log.into_inner()).unwrap();
        assert_eq!(text, "raw_price column missing.\n");
    }
}
