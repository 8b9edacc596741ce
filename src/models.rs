//! Domain data types for tourism analytics
//!
//! This module contains the attraction record shape shared by the table
//! loader and the recommendation ranker, plus the categorical input and
//! output types used by the visit mode classifier.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::TourlyticsError;

/// Lowest rating an attraction can carry
pub const MIN_MEAN_RATING: f64 = 1.0;
/// Highest rating an attraction can carry
pub const MAX_MEAN_RATING: f64 = 5.0;

/// A single attraction in the read-only table
///
/// Records are loaded once at startup and never mutated afterwards.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct AttractionRecord {
    /// Attraction name, unique within the table
    pub name: String,
    /// Mean visitor rating on the 1.0-5.0 scale
    pub mean_rating: f64,
    /// Total recorded visits
    pub visit_count: u32,
    /// Coarse category tag, e.g. "Historical" or "Nature"
    pub category: String,
    /// Free-form descriptive tag used as the recommendation filter key
    pub vibe: String,
}

impl AttractionRecord {
    /// Create a new attraction record
    pub fn new(
        name: impl Into<String>,
        mean_rating: f64,
        visit_count: u32,
        category: impl Into<String>,
        vibe: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            mean_rating,
            visit_count,
            category: category.into(),
            vibe: vibe.into(),
        }
    }

    /// Check the record invariants, rejecting ratings outside the 1.0-5.0 scale
    pub fn validate(&self) -> crate::Result<()> {
        if self.name.trim().is_empty() {
            return Err(TourlyticsError::data("attraction name cannot be empty"));
        }
        if !(MIN_MEAN_RATING..=MAX_MEAN_RATING).contains(&self.mean_rating) {
            return Err(TourlyticsError::data(format!(
                "MeanRating {} for '{}' is outside the valid range {MIN_MEAN_RATING}-{MAX_MEAN_RATING}",
                self.mean_rating, self.name
            )));
        }
        Ok(())
    }
}

/// Budget tier of a planned visit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BudgetTier {
    Low,
    Medium,
    High,
    Luxury,
}

impl BudgetTier {
    /// Parse a budget tier from its textual form (case-insensitive)
    pub fn parse(input: &str) -> crate::Result<Self> {
        match input.trim().to_ascii_lowercase().as_str() {
            "low" => Ok(BudgetTier::Low),
            "medium" => Ok(BudgetTier::Medium),
            "high" => Ok(BudgetTier::High),
            "luxury" => Ok(BudgetTier::Luxury),
            other => Err(TourlyticsError::validation(format!(
                "Unknown budget tier '{other}'. Must be one of: Low, Medium, High, Luxury"
            ))),
        }
    }

    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            BudgetTier::Low => "Low",
            BudgetTier::Medium => "Medium",
            BudgetTier::High => "High",
            BudgetTier::Luxury => "Luxury",
        }
    }
}

impl fmt::Display for BudgetTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Social composition of a visit, as predicted by the classifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum VisitMode {
    Solo,
    Couple,
    Family,
    Friends,
    Business,
}

impl VisitMode {
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            VisitMode::Solo => "Solo",
            VisitMode::Couple => "Couple",
            VisitMode::Family => "Family",
            VisitMode::Friends => "Friends",
            VisitMode::Business => "Business",
        }
    }
}

impl fmt::Display for VisitMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
