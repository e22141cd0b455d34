//! # Tabular Export
//!
//! Writes extracted readings to a flat CSV file with a fixed column order:
//!
//! | Column | Description |
//! |--------|-------------|
//! | Era | Generation label |
//! | Chip | Device display name |
//! | Qubit_Index | Physical qubit index |
//! | T1_us | T1 in microseconds, four decimals |
//! | T2_us | T2 in microseconds, four decimals, empty when absent |
//! | Readout_Error_Pct | Readout error in percent, four decimals, empty when absent |
//!
//! The target file is replaced atomically: rows are written to a temporary
//! file next to it and then persisted over the old file.

use std::fs::{self, File};
use std::io::BufReader;
use std::path::Path;

use tempfile::NamedTempFile;

use crate::extract::{QubitReading, READING_HEADER};


/// Errors that can occur while writing or reading an export
#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    /// I/O error during file operations
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    /// CSV encoding or decoding error
    #[error("CSV error: {0}")]
    CsvError(#[from] csv::Error),

    /// Failed to move the temporary file into place
    #[error("Failed to persist export: {0}")]
    PersistError(#[from] tempfile::PersistError),
}

/// Write readings to `path`, creating parent directories.
///
/// Returns the number of rows written (header excluded).
pub fn write_readings<P: AsRef<Path>>(
    path: P,
    readings: &[QubitReading],
) -> Result<usize, ExportError> {
    let path = path.as_ref();
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    fs::create_dir_all(dir)?;

    let temp_file = NamedTempFile::new_in(dir)?;
    {
        let mut writer = csv::Writer::from_writer(temp_file.as_file());
        writer.write_record(READING_HEADER)?;
        for reading in readings {
            writer.write_record(reading.to_record())?;
        }
        writer.flush()?;
    }
    temp_file.persist(path)?;

    log::debug!("Wrote {} readings to {}", readings.len(), path.display());
    Ok(readings.len())
}

/// Read readings previously written by [`write_readings`]
pub fn read_readings<P: AsRef<Path>>(path: P) -> Result<Vec<QubitReading>, ExportError> {
    let file = File::open(path)?;
    let mut reader = csv::Reader::from_reader(BufReader::new(file));

    let mut readings = Vec::new();
    for record in reader.deserialize() {
        readings.push(record?);
    }
    Ok(readings)
}
