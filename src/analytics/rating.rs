//! Attraction rating estimation

use crate::models::MAX_MEAN_RATING;

/// Visit count contribution scale: every 200 visits add one rating point
/// to the blend before averaging
const VISIT_COUNT_SCALE: f64 = 200.0;

/// Estimate the rating an attraction will receive
///
/// Blends the visitor experience rating (1.0-5.0) with the visit volume
/// (1-1000) and clamps the result to the rating scale ceiling. Pure and
/// deterministic; callers constrain the inputs to their domains.
#[must_use]
pub fn estimate_rating(visitor_rating: f64, visit_count: u32) -> f64 {
    let blended = (visitor_rating + f64::from(visit_count) / VISIT_COUNT_SCALE) / 2.0;
    blended.min(MAX_MEAN_RATING)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(4.0, 100, 2.25)]
    #[case(1.0, 1, 0.5025)]
    #[case(5.0, 200, 3.0)]
    #[case(3.5, 500, 3.0)]
    fn test_estimate_matches_blend_formula(
        #[case] visitor_rating: f64,
        #[case] visit_count: u32,
        #[case] expected: f64,
    ) {
        let estimate = estimate_rating(visitor_rating, visit_count);
        assert!((estimate - expected).abs() < 1e-12);
    }

    #[test]
    fn test_estimate_clamps_to_rating_ceiling() {
        // 5.0 + 1000/200 = 10.0, averaged to 5.0, right at the ceiling
        assert_eq!(estimate_rating(5.0, 1000), 5.0);
        // Anything pushing the blend above 5.0 stays clamped
        assert_eq!(estimate_rating(5.0, 2000), 5.0);
    }

    #[test]
    fn test_estimate_never_exceeds_ceiling_over_domain() {
        for count in (1..=1000).step_by(7) {
            for tenths in 10..=50 {
                let rating = f64::from(tenths) / 10.0;
                let estimate = estimate_rating(rating, count);
                assert!(estimate <= MAX_MEAN_RATING);
            }
        }
    }

    #[test]
    fn test_estimate_is_deterministic() {
        assert_eq!(estimate_rating(4.2, 321), estimate_rating(4.2, 321));
    }
}
