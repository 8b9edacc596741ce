//! Attraction Table Loading Module
//!
//! This module handles loading of the attraction table from the optional
//! CSV data source. The table is read once per session and never written
//! back; when no data file exists the built-in sample table is used.

use std::collections::HashSet;
use std::path::Path;

use serde::Deserialize;
use tracing::{debug, info, warn};

use crate::Result;
use crate::config::TourlyticsConfig;
use crate::error::TourlyticsError;
use crate::models::AttractionRecord;

/// Columns the CSV data source must provide
const REQUIRED_COLUMNS: [&str; 5] = ["Attraction", "MeanRating", "Count", "Type", "Vibe"];

/// Immutable attraction table for one session
#[derive(Debug, Clone)]
pub struct AttractionTable {
    records: Vec<AttractionRecord>,
}

impl AttractionTable {
    /// Build a table from records, enforcing the table invariants
    ///
    /// Every record must pass validation and names must be unique.
    pub fn from_records(records: Vec<AttractionRecord>) -> Result<Self> {
        let mut seen_names = HashSet::new();
        for record in &records {
            record.validate()?;
            if !seen_names.insert(record.name.as_str()) {
                return Err(TourlyticsError::data(format!(
                    "duplicate attraction name '{}' in table",
                    record.name
                )));
            }
        }
        Ok(Self { records })
    }

    /// All records in original table order
    #[must_use]
    pub fn records(&self) -> &[AttractionRecord] {
        &self.records
    }

    /// Look up a record by its unique name
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&AttractionRecord> {
        self.records.iter().find(|r| r.name == name)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

/// One row of the CSV data source
#[derive(Debug, Deserialize)]
struct AttractionRow {
    #[serde(rename = "Attraction")]
    attraction: String,
    #[serde(rename = "MeanRating")]
    mean_rating: f64,
    #[serde(rename = "Count")]
    count: u32,
    #[serde(rename = "Type")]
    category: String,
    #[serde(rename = "Vibe")]
    vibe: String,
}

impl From<AttractionRow> for AttractionRecord {
    fn from(row: AttractionRow) -> Self {
        AttractionRecord {
            name: row.attraction,
            mean_rating: row.mean_rating,
            visit_count: row.count,
            category: row.category,
            vibe: row.vibe,
        }
    }
}

/// Service for loading the attraction table
pub struct TableLoader;

impl TableLoader {
    /// Load the attraction table from the configured data source
    pub fn load(config: Option<&TourlyticsConfig>) -> Result<AttractionTable> {
        let path = config.map_or("attractions.csv", |c| c.data.table_path.as_str());
        Self::load_from_path(Path::new(path))
    }

    /// Load the attraction table from a specific path, falling back to the
    /// built-in table when the file does not exist
    pub fn load_from_path(path: &Path) -> Result<AttractionTable> {
        let table = if path.exists() {
            debug!("Loading attraction table from {}", path.display());
            Self::read_csv_table(path)?
        } else {
            warn!(
                "Attraction table not found at {}, using built-in sample table",
                path.display()
            );
            Self::fallback_table()
        };

        info!("Loaded {} attractions", table.len());
        Ok(table)
    }

    /// Parse the CSV data source, failing fast on malformed input
    fn read_csv_table(path: &Path) -> Result<AttractionTable> {
        let mut reader = csv::Reader::from_path(path).map_err(|e| {
            TourlyticsError::data(format!(
                "failed to open attraction table {}: {e}",
                path.display()
            ))
        })?;

        let headers = reader.headers().map_err(|e| {
            TourlyticsError::data(format!("failed to read attraction table header: {e}"))
        })?;
        Self::check_required_columns(headers)?;

        let mut records = Vec::new();
        for row in reader.deserialize() {
            let row: AttractionRow = row
                .map_err(|e| TourlyticsError::data(format!("malformed attraction row: {e}")))?;
            records.push(AttractionRecord::from(row));
        }

        AttractionTable::from_records(records)
    }

    fn check_required_columns(headers: &csv::StringRecord) -> Result<()> {
        for column in REQUIRED_COLUMNS {
            if !headers.iter().any(|h| h == column) {
                return Err(TourlyticsError::data(format!(
                    "attraction table is missing required column '{column}'"
                )));
            }
        }
        Ok(())
    }

    /// Built-in sample table used when no data file is present
    #[must_use]
    pub fn fallback_table() -> AttractionTable {
        AttractionTable {
            records: vec![
                AttractionRecord::new("Taj Mahal", 4.9, 650, "Historical", "Romantic"),
                AttractionRecord::new("Eiffel Tower", 4.8, 820, "Modern", "Romantic"),
                AttractionRecord::new("Big Ben", 4.7, 540, "Historical", "Iconic"),
                AttractionRecord::new("Statue of Liberty", 4.6, 710, "Cultural", "Iconic"),
                AttractionRecord::new("Christ the Redeemer", 4.8, 480, "Cultural", "Majestic"),
                AttractionRecord::new("Colosseum", 4.7, 600, "Historical", "Ancient"),
                AttractionRecord::new("Great Wall", 4.8, 760, "Historical", "Ancient"),
                AttractionRecord::new("Pyramids", 4.7, 520, "Historical", "Ancient"),
            ],
        }
    }
}
