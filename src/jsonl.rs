// JSONL export/import of task collections

use crate::error::Result;
use crate::record::Record;
use fs2::FileExt;
use serde::de::DeserializeOwned;
use std::collections::HashSet;
use std::fs::{File, OpenOptions};
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;
use tracing::{info, warn};

/// Write records to a JSONL file, one per line, replacing its contents
pub fn write_jsonl<T: Record>(path: &Path, records: &[T]) -> Result<()> {
    let file = OpenOptions::new()
        .create(true)
        .write(true)
        .truncate(true)
        .open(path)?;

    // Held until the file is dropped
    file.lock_exclusive()?;

    let mut writer = BufWriter::new(&file);
    for record in records {
        serde_json::to_writer(&mut writer, record)?;
        writer.write_all(b"\n")?;
    }
    writer.flush()?;
    drop(writer);
    file.sync_all()?; // Ensure data is flushed to disk

    info!(file = ?path, count = records.len(), "Wrote JSONL export");
    Ok(())
}

/// Read records from a JSONL file in file order
///
/// Blank and malformed lines are skipped. When an id appears more than once,
/// the first occurrence wins.
pub fn read_jsonl<T: Record>(path: &Path) -> Result<Vec<T>> {
    if !path.exists() {
        return Ok(Vec::new());
    }

    let file = File::open(path)?;
    let reader = BufReader::new(file);
    let mut seen = HashSet::new();
    let mut records = Vec::new();

    for (line_num, line) in reader.lines().enumerate() {
        let line = match line {
            Ok(l) => l,
            Err(e) => {
                warn!(
                    file = ?path,
                    line = line_num + 1,
                    error = ?e,
                    "Failed to read line, skipping"
                );
                continue;
            }
        };

        if line.trim().is_empty() {
            continue;
        }

        let record: T = match serde_json::from_str(&line) {
            Ok(r) => r,
            Err(e) => {
                warn!(
                    file = ?path,
                    line = line_num + 1,
                    error = ?e,
                    "Failed to parse JSON, skipping"
                );
                continue;
            }
        };

        if !seen.insert(record.id().to_string()) {
            warn!(file = ?path, line = line_num + 1, id = record.id(), "Duplicate id, skipping");
            continue;
        }

        records.push(record);
    }

    info!(file = ?path, count = records.len(), "Loaded records from JSONL");
    Ok(records)
}

/// Read a file holding a single JSON array of records
pub fn read_json_array<T: DeserializeOwned>(path: &Path) -> Result<Vec<T>> {
    let content = std::fs::read_to_string(path)?;
    let records: Vec<T> = serde_json::from_str(&content)?;
    Ok(records)
}
