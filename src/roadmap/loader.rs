use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use log::debug;

use super::{RoadmapError, RoadmapPoint, Status};

/// Accepted header spellings per field (compared lowercase, trimmed)
const ROADMAP_YEAR_HEADERS: &[&str] = &["roadmap_year", "year (roadmap)"];
const QUBITS_HEADERS: &[&str] = &["qubits", "qubit counts"];
const STATUS_HEADERS: &[&str] = &["status", "expected qubit counts"];
const LABEL_HEADERS: &[&str] = &["label"];
const YEAR_HEADERS: &[&str] = &["year"];

/// Parse a qubit count written as `128`, `10,000` or `7.5K`.
///
/// Returns `None` for anything that is still not a finite number after
/// cleaning; `nan` and `inf` count as missing.
pub fn clean_count(raw: &str) -> Option<f64> {
    let cleaned = raw.trim().replace(',', "");

    if cleaned.contains(['k', 'K']) {
        let number = cleaned.replace(['k', 'K'], "");
        return parse_finite(&number).map(|v| v * 1000.0);
    }

    parse_finite(&cleaned)
}

fn parse_finite(raw: &str) -> Option<f64> {
    raw.trim().parse::<f64>().ok().filter(|v| v.is_finite())
}

fn column(headers: &[String], names: &[&str]) -> Result<usize, RoadmapError> {
    headers
        .iter()
        .position(|h| names.contains(&h.as_str()))
        .ok_or_else(|| RoadmapError::MissingColumn(names[0].to_string()))
}

/// Load roadmap points from a CSV file
pub fn load_roadmap<P: AsRef<Path>>(path: P) -> Result<Vec<RoadmapPoint>, RoadmapError> {
    let path = path.as_ref();
    if !path.exists() {
        return Err(RoadmapError::NotFound(path.to_path_buf()));
    }
    let file = File::open(path)?;
    load_roadmap_from_reader(BufReader::new(file))
}

/// Load roadmap points from any CSV reader.
///
/// Rows whose qubit count or year cannot be parsed are dropped.
pub fn load_roadmap_from_reader<R: Read>(reader: R) -> Result<Vec<RoadmapPoint>, RoadmapError> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .flexible(true)
        .has_headers(true)
        .from_reader(reader);

    let headers: Vec<String> = csv_reader
        .headers()?
        .iter()
        .map(|s| s.trim().to_lowercase())
        .collect();

    let roadmap_year_col = column(&headers, ROADMAP_YEAR_HEADERS)?;
    let qubits_col = column(&headers, QUBITS_HEADERS)?;
    let status_col = column(&headers, STATUS_HEADERS)?;
    let label_col = column(&headers, LABEL_HEADERS)?;
    let year_col = column(&headers, YEAR_HEADERS)?;

    let mut points = Vec::new();
    let mut dropped = 0usize;

    for record in csv_reader.records() {
        let record = record?;
        let field = |i: usize| record.get(i).unwrap_or("").trim();

        let Some(qubits) = clean_count(field(qubits_col)) else {
            debug!("Dropping row with qubit count {:?}", field(qubits_col));
            dropped += 1;
            continue;
        };
        let Some(year) = parse_finite(field(year_col)) else {
            debug!("Dropping row with year {:?}", field(year_col));
            dropped += 1;
            continue;
        };

        points.push(RoadmapPoint {
            roadmap_year: normalize_year(field(roadmap_year_col)),
            label: field(label_col).to_string(),
            year,
            qubits,
            status: Status::from(field(status_col)),
        });
    }

    if dropped > 0 {
        debug!("Dropped {} roadmap rows with unparseable values", dropped);
    }

    Ok(points)
}

/// "2022.0" and "2022" name the same roadmap edition
fn normalize_year(raw: &str) -> String {
    raw.strip_suffix(".0").unwrap_or(raw).to_string()
}
