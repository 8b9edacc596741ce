//! Analytics module
//!
//! This module provides the three analytics operations of the system:
//! - Attraction rating estimation from visitor feedback and visit volume
//! - Visit mode classification from group size and budget tier
//! - Attraction recommendation ranking over the read-only table

pub mod rating;
pub mod recommendations;
pub mod visit_mode;

// Re-export commonly used items from submodules
pub use rating::estimate_rating;
pub use recommendations::{RecommendationQuery, rank_recommendations};
pub use visit_mode::classify_visit_mode;
