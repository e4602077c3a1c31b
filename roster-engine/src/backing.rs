//! Backing-file persistence adapter
//!
//! The roster lives in a plain UTF-8 text file, one record per
//! four-line block:
//!
//! ```text
//! name
//! age
//! enrollment
//!              <- blank separator
//! ```
//!
//! No header, no footer, no checksum. The file is the sole source of
//! truth across restarts; the in-memory store is rebuilt from it at
//! startup. A trailing blank line at end-of-file is tolerated.

use std::fs::{self, File, OpenOptions};
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;

use tracing::debug;

use crate::error::{RosterError, RosterResult};
use crate::storage::record::StudentRecord;

/// Read the backing file into an ordered record sequence.
///
/// A missing or unopenable file is reported as `FileMissing`; callers
/// normally proceed with an empty store. A malformed numeric field
/// fails the whole load, so a partial file never produces a half-valid
/// store.
pub fn load(path: &Path) -> RosterResult<Vec<StudentRecord>> {
    let file = File::open(path).map_err(|_| RosterError::FileMissing {
        path: path.display().to_string(),
    })?;
    let reader = BufReader::new(file);

    let mut records = Vec::new();
    let mut lines = reader.lines().enumerate();

    while let Some((idx, line)) = lines.next() {
        let name = line?;
        if name.trim().is_empty() {
            // Blank separator between blocks, or trailing blank at EOF
            continue;
        }

        let age = parse_field(lines.next(), idx + 2, "age")?;
        let enrollment = parse_field(lines.next(), idx + 3, "enrollment")?;

        let record =
            StudentRecord::new(name, age, enrollment).map_err(|_| RosterError::Parse {
                line: idx + 1,
                field: "name",
            })?;
        records.push(record);
    }

    debug!(count = records.len(), path = %path.display(), "loaded backing file");
    Ok(records)
}

fn parse_field(
    line: Option<(usize, std::io::Result<String>)>,
    expected_line: usize,
    field: &'static str,
) -> RosterResult<u32> {
    let (idx, line) = line.ok_or(RosterError::Parse {
        line: expected_line,
        field,
    })?;
    let line = line?;
    line.trim()
        .parse::<u32>()
        .map_err(|_| RosterError::Parse { line: idx + 1, field })
}

/// Append one record block to the backing file, creating the file if
/// it does not exist yet. The handle is closed on every exit path.
pub fn append_record(path: &Path, record: &StudentRecord) -> RosterResult<()> {
    let file = OpenOptions::new().append(true).create(true).open(path)?;
    let mut writer = BufWriter::new(file);
    write_block(&mut writer, record)?;
    writer.flush()?;
    debug!(name = %record.name, path = %path.display(), "appended record");
    Ok(())
}

/// Rewrite the backing file from the in-memory store state.
///
/// Used after removal: the store is mutated first, then the whole file
/// is reconstructed from it. The new content goes to a sibling temp
/// file which replaces the original in one rename, so the backing file
/// is never observably half-written.
pub fn rewrite(path: &Path, records: &[StudentRecord]) -> RosterResult<()> {
    let tmp_path = path.with_extension("tmp");
    {
        let file = File::create(&tmp_path)?;
        let mut writer = BufWriter::new(file);
        for record in records {
            write_block(&mut writer, record)?;
        }
        writer.flush()?;
    }
    fs::rename(&tmp_path, path)?;
    debug!(count = records.len(), path = %path.display(), "rewrote backing file");
    Ok(())
}

fn write_block<W: Write>(writer: &mut W, record: &StudentRecord) -> std::io::Result<()> {
    writeln!(writer, "{}", record.name)?;
    writeln!(writer, "{}", record.age)?;
    writeln!(writer, "{}", record.enrollment)?;
    writeln!(writer)
}
