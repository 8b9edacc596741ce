//! `Tourlytics` - Tourism analytics core
//!
//! This library provides the core logic behind a tourism analytics
//! dashboard: attraction rating estimation, visit mode classification,
//! and attraction recommendations over a read-only table.

pub mod analytics;
pub mod attractions;
pub mod config;
pub mod error;
pub mod models;

// Re-export core types for public API
pub use analytics::{RecommendationQuery, classify_visit_mode, estimate_rating, rank_recommendations};
pub use attractions::{AttractionTable, TableLoader};
pub use config::TourlyticsConfig;
pub use error::TourlyticsError;
pub use models::{AttractionRecord, BudgetTier, VisitMode};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Core result type used throughout the library
pub type Result<T> = std::result::Result<T, TourlyticsError>;
