use std::path::PathBuf;

/// Errors that can occur while loading roadmap data
#[derive(Debug, thiserror::Error)]
pub enum RoadmapError {
    /// The input file does not exist
    #[error("Roadmap file not found: {}", .0.display())]
    NotFound(PathBuf),

    /// I/O error reading the input
    #[error("Failed to read file: {0}")]
    IoError(#[from] std::io::Error),

    /// CSV parsing error
    #[error("CSV parsing error: {0}")]
    CsvError(#[from] csv::Error),

    /// Missing required column
    #[error("Missing required roadmap column: {0}")]
    MissingColumn(String),
}
