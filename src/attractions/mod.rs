//! Attraction table module
//!
//! This module provides the read-only attraction table backing the
//! recommendation ranker:
//! - CSV table loading with fail-fast validation
//! - Built-in fallback table used when no data file is present

pub mod table_loader;

// Re-export commonly used types from submodules
pub use table_loader::{AttractionTable, TableLoader};
