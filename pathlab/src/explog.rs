//! Exploration log: a found path as two-column CSV.
//!
//! One header row (`Row,Column`) followed by one `row,col` line per path
//! step, in start-to-end order. Writing is a best-effort concern of the
//! caller: a failed export must never abort a session or alter a search
//! result.

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use wayfind_core::Coord;

/// Writes path steps to a byte-oriented writer.
pub struct ExplorationLog<W: Write> {
    writer: W,
}

impl<W: Write> ExplorationLog<W> {
    /// Wrap a writer.
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    /// Write the header row and every step of `path`.
    pub fn write_path(&mut self, path: &[Coord]) -> io::Result<()> {
        self.writer.write_all(b"Row,Column\n")?;
        for c in path {
            writeln!(self.writer, "{},{}", c.row, c.col)?;
        }
        Ok(())
    }

    /// Flush the underlying writer.
    pub fn flush(&mut self) -> io::Result<()> {
        self.writer.flush()
    }

    /// Unwrap the underlying writer.
    pub fn into_inner(self) -> W {
        self.writer
    }
}

/// Write `path` as a CSV file at `file`, creating or truncating it.
pub fn export(file: &Path, path: &[Coord]) -> io::Result<()> {
    let mut log = ExplorationLog::new(BufWriter::new(File::create(file)?));
    log.write_path(path)?;
    log.flush()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn writes_header_and_steps() {
        let mut log = ExplorationLog::new(Vec::new());
        log.write_path(&[Coord::new(1, 1), Coord::new(1, 2), Coord::new(2, 2)])
            .unwrap();
        let csv = String::from_utf8(log.into_inner()).unwrap();
        assert_eq!(csv, "Row,Column\n1,1\n1,2\n2,2\n");
    }

    #[test]
    fn empty_path_writes_only_the_header() {
        let mut log = ExplorationLog::new(Vec::new());
        log.write_path(&[]).unwrap();
        assert_eq!(log.into_inner(), b"Row,Column\n");
    }
}
