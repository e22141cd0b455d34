//! # Roadmap Trends
//!
//! Loads published processor roadmaps and fits doubling trends to them.
//!
//! Qubit counts arrive in several spellings (`128`, `10,000`, `7.5K`); rows that
//! still fail to parse after cleaning are dropped rather than reported. Trends
//! assume exponential growth, so each subset is fitted as a straight line in
//! `(year, log2(count))` space and summarized as a doubling period in months.

mod error;
mod loader;
mod point;
mod trend;

#[cfg(test)]
mod tests;

pub use error::RoadmapError;
pub use loader::{clean_count, load_roadmap, load_roadmap_from_reader};
pub use point::{RoadmapPoint, Status};
pub use trend::{calculate_trends, roadmap_years, LinearFit, TrendConfig, TrendGroup, TrendLine};
