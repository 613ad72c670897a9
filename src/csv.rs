// src/csv.rs
//
// Typed listing files. Always headed; an empty cell is an absent value.

use std::fs::File;
use std::io::{Read, Write};
use std::path::Path;

use serde::{de::DeserializeOwned, Serialize};

use crate::error::{Error, Result};
use crate::file::ensure_parent;

/* ---------------- Reading ---------------- */

/// Read every record from any reader (first line is the header).
pub fn read_records<T, R>(rdr: R) -> std::result::Result<Vec<T>, csv::Error>
where
    T: DeserializeOwned,
    R: Read,
{
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(rdr);
    reader.deserialize().collect()
}

/// Read a listing file. A missing file is `Error::MissingInput`.
pub fn read_path<T: DeserializeOwned>(path: &Path) -> Result<Vec<T>> {
    if !path.exists() {
        return Err(Error::MissingInput(path.to_path_buf()));
    }
    let file = File::open(path).map_err(|e| Error::io(path, e))?;
    read_records(file).map_err(|e| Error::csv(path, e))
}

/* ---------------- Writing ---------------- */

/// Write a header row plus one row per record to any writer.
pub fn write_records<T, W>(w: W, records: &[T]) -> std::result::Result<(), csv::Error>
where
    T: Serialize,
    W: Write,
{
    let mut writer = csv::WriterBuilder::new().has_headers(true).from_writer(w);
    for rec in records {
        writer.serialize(rec)?;
    }
    writer.flush()?;
    Ok(())
}

/// Create/truncate `path` (parents included) and write `records` into it.
pub fn write_path<T: Serialize>(path: &Path, records: &[T]) -> Result<()> {
    ensure_parent(path)?;
    let file = File::create(path).map_err(|e| Error::io(path, e))?;
    write_records(file, records).map_err(|e| Error::csv(path, e))
}

