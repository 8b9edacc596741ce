//! Attraction recommendation ranking
//!
//! Filters the read-only attraction table by vibe membership and rating
//! threshold, then ranks matches by mean rating. An empty result set is a
//! normal outcome signalling "no matches", not an error.

use std::collections::HashSet;

use tracing::debug;

use crate::models::AttractionRecord;

/// Filter and ranking parameters for a recommendation request
#[derive(Debug, Clone, Default)]
pub struct RecommendationQuery {
    /// Vibes a record must carry to qualify
    pub vibes: HashSet<String>,
    /// Minimum mean rating a record must reach
    pub min_rating: f64,
    /// Optional category restriction on top of the vibe filter
    pub categories: Option<HashSet<String>>,
    /// Maximum number of results to return, unbounded when `None`
    pub limit: Option<usize>,
}

impl RecommendationQuery {
    /// Create a query filtering by vibe membership and rating threshold
    pub fn new<I, S>(vibes: I, min_rating: f64) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            vibes: vibes.into_iter().map(Into::into).collect(),
            min_rating,
            categories: None,
            limit: None,
        }
    }

    /// Restrict results to the given categories
    #[must_use]
    pub fn with_categories<I, S>(mut self, categories: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.categories = Some(categories.into_iter().map(Into::into).collect());
        self
    }

    /// Keep only the top `limit` results
    #[must_use]
    pub fn with_limit(mut self, limit: usize) -> Self {
        self.limit = Some(limit);
        self
    }

    fn matches(&self, record: &AttractionRecord) -> bool {
        if !self.vibes.contains(&record.vibe) {
            return false;
        }
        if record.mean_rating < self.min_rating {
            return false;
        }
        if let Some(categories) = &self.categories {
            if !categories.contains(&record.category) {
                return false;
            }
        }
        true
    }
}

/// Rank attractions matching the query, best rated first
///
/// The sort is stable: records with equal ratings keep their original
/// table order. Returns an empty vector when nothing matches.
#[must_use]
pub fn rank_recommendations<'a>(
    records: &'a [AttractionRecord],
    query: &RecommendationQuery,
) -> Vec<&'a AttractionRecord> {
    let mut matches: Vec<&AttractionRecord> =
        records.iter().filter(|r| query.matches(r)).collect();

    debug!(
        "Recommendation filter matched {} of {} attractions",
        matches.len(),
        records.len()
    );

    matches.sort_by(|a, b| b.mean_rating.total_cmp(&a.mean_rating));

    if let Some(limit) = query.limit {
        matches.truncate(limit);
    }

    matches
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_table() -> Vec<AttractionRecord> {
        vec![
            AttractionRecord::new("Taj Mahal", 4.8, 650, "Historical", "Ancient"),
            AttractionRecord::new("Eiffel Tower", 4.7, 820, "Landmark", "Romantic"),
            AttractionRecord::new("Colosseum", 4.7, 600, "Historical", "Ancient"),
            AttractionRecord::new("Pyramids", 4.2, 520, "Historical", "Ancient"),
            AttractionRecord::new("Santorini", 3.4, 210, "Beach", "Romantic"),
        ]
    }

    #[test]
    fn test_filter_by_vibe_and_threshold() {
        let table = create_test_table();
        let query = RecommendationQuery::new(["Romantic"], 4.0);

        let results = rank_recommendations(&table, &query);

        assert_eq!(results.len(), 1);
        assert_eq!(results[0].name, "Eiffel Tower");
    }

    #[test]
    fn test_results_sorted_descending_with_stable_ties() {
        let table = create_test_table();
        let query = RecommendationQuery::new(["Ancient"], 1.0);

        let results = rank_recommendations(&table, &query);

        assert_eq!(results.len(), 3);
        assert_eq!(results[0].name, "Taj Mahal");
        // Colosseum ties Eiffel Tower's rating but keeps its table position
        assert_eq!(results[1].name, "Colosseum");
        assert_eq!(results[2].name, "Pyramids");
        for pair in results.windows(2) {
            assert!(pair[0].mean_rating >= pair[1].mean_rating);
        }
    }

    #[test]
    fn test_limit_truncates_results() {
        let table = create_test_table();
        let query = RecommendationQuery::new(["Ancient"], 1.0).with_limit(2);

        let results = rank_recommendations(&table, &query);

        assert_eq!(results.len(), 2);
        assert_eq!(results[0].name, "Taj Mahal");
    }

    #[test]
    fn test_category_restriction() {
        let table = create_test_table();
        let query = RecommendationQuery::new(["Romantic"], 1.0).with_categories(["Beach"]);

        let results = rank_recommendations(&table, &query);

        assert_eq!(results.len(), 1);
        assert_eq!(results[0].name, "Santorini");
    }

    #[test]
    fn test_no_matches_returns_empty_not_error() {
        let table = create_test_table();
        let query = RecommendationQuery::new(["Mystical"], 1.0);

        let results = rank_recommendations(&table, &query);

        assert!(results.is_empty());
    }

    #[test]
    fn test_ranking_is_idempotent() {
        let table = create_test_table();
        let query = RecommendationQuery::new(["Ancient", "Romantic"], 3.0).with_limit(3);

        let first = rank_recommendations(&table, &query);
        let second = rank_recommendations(&table, &query);

        assert_eq!(first, second);
    }

    #[test]
    fn test_every_result_satisfies_the_predicate() {
        let table = create_test_table();
        let query = RecommendationQuery::new(["Ancient", "Romantic"], 4.0);

        for record in rank_recommendations(&table, &query) {
            assert!(query.vibes.contains(&record.vibe));
            assert!(record.mean_rating >= query.min_rating);
        }
    }
}
