//! Visit mode classification
//!
//! Maps group size and budget tier to the social composition of a visit
//! using ordered threshold rules, first match wins.

use crate::models::{BudgetTier, VisitMode};

/// Classify the visit mode for a group
///
/// Total over the input domain (`num_people >= 1`); larger groups split
/// on budget tier: luxury budgets read as business travel.
#[must_use]
pub fn classify_visit_mode(num_people: u32, budget: BudgetTier) -> VisitMode {
    match num_people {
        1 => VisitMode::Solo,
        n if n <= 2 => VisitMode::Couple,
        n if n <= 4 => VisitMode::Family,
        _ => {
            if budget == BudgetTier::Luxury {
                VisitMode::Business
            } else {
                VisitMode::Friends
            }
        }
    }
}
