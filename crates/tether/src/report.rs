//! Line-oriented demonstration output.
//!
//! A [`Report`] collects the lines a demonstration prints. It can be
//! written as plain text or persisted as a JSON array of strings.

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use tether_log::debug;

use crate::error::{Error, Result};

/// Ordered lines of output.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Report {
    lines: Vec<String>,
}

impl Report {
    /// Creates an empty report.
    #[must_use]
    pub const fn new() -> Self {
        Self { lines: Vec::new() }
    }

    /// Appends one line.
    pub fn line(&mut self, line: impl Into<String>) {
        self.lines.push(line.into());
    }

    /// Appends a blank separator followed by `title`.
    pub fn section(&mut self, title: &str) {
        self.line("");
        self.line(title);
    }

    /// All lines so far.
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Number of lines.
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// Returns true if no line has been written.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Appends every line of `other`.
    pub fn extend(&mut self, other: Report) {
        self.lines.extend(other.lines);
    }

    /// Writes each line followed by `\n`.
    pub fn write_to<W: Write>(&self, mut out: W) -> Result<()> {
        for line in &self.lines {
            writeln!(out, "{line}")?;
        }
        out.flush()?;
        Ok(())
    }

    /// Serializes the lines as a JSON array indented one space per level,
    /// with a trailing newline.
    pub fn to_json_string(&self) -> Result<String> {
        let mut buf = Vec::new();
        self.write_json(&mut buf)?;
        String::from_utf8(buf)
            .map_err(|err| Error::Io(io::Error::new(io::ErrorKind::InvalidData, err)))
    }

    /// Writes the JSON form of the report to `path`, replacing any existing
    /// file. The file is closed on every exit path.
    pub fn save_json(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let mut writer = BufWriter::new(File::create(path)?);
        self.write_json(&mut writer)?;
        writer.flush()?;
        debug!("saved {} lines to {}", self.lines.len(), path.display());
        Ok(())
    }

    fn write_json<W: Write>(&self, mut out: W) -> Result<()> {
        let formatter = PrettyFormatter::with_indent(b" ");
        let mut ser = serde_json::Serializer::with_formatter(&mut out, formatter);
        self.serialize(&mut ser)?;
        out.write_all(b"\n")?;
        Ok(())
    }
}

impl From<Vec<String>> for Report {
    fn from(lines: Vec<String>) -> Self {
        Self { lines }
    }
}
