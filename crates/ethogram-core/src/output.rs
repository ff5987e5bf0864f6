//! Run Output
//!
//! Append-only JSONL series logging and end-of-run report writing.

use std::fs::{self, File, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use ethogram_events::{RunReport, TickSnapshot};

/// Writes the snapshot series to a JSONL file, one tick per line.
pub struct SeriesWriter {
    writer: Option<BufWriter<File>>,
    line_count: u64,
}

impl SeriesWriter {
    /// Creates a writer targeting the given path, truncating any existing
    /// file.
    pub fn new(path: impl AsRef<Path>) -> std::io::Result<Self> {
        let file = OpenOptions::new()
            .create(true)
            .write(true)
            .truncate(true)
            .open(path)?;

        Ok(Self {
            writer: Some(BufWriter::new(file)),
            line_count: 0,
        })
    }

    /// Creates a writer that discards snapshots (for testing).
    pub fn null() -> Self {
        Self {
            writer: None,
            line_count: 0,
        }
    }

    /// Appends one snapshot as a JSON line.
    pub fn append(&mut self, snapshot: &TickSnapshot) -> std::io::Result<()> {
        self.line_count += 1;
        if let Some(ref mut writer) = self.writer {
            let json = serde_json::to_string(snapshot).map_err(std::io::Error::from)?;
            writeln!(writer, "{}", json)?;
        }
        Ok(())
    }

    /// Flushes buffered lines to disk.
    pub fn flush(&mut self) -> std::io::Result<()> {
        if let Some(ref mut writer) = self.writer {
            writer.flush()?;
        }
        Ok(())
    }

    /// Number of snapshots appended so far.
    pub fn line_count(&self) -> u64 {
        self.line_count
    }
}

/// Writes the full run report as pretty JSON under the output directory,
/// named by the run id. Returns the written path.
pub fn write_report(dir: impl AsRef<Path>, report: &RunReport) -> std::io::Result<PathBuf> {
    let path = dir.as_ref().join(format!("{}.json", report.summary.run_id));
    let json = serde_json::to_string_pretty(report).map_err(std::io::Error::from)?;
    fs::write(&path, json)?;
    Ok(path)
}
