use anyhow::Result;
use tracing_subscriber::EnvFilter;

use tourlytics::{
    BudgetTier, RecommendationQuery, TableLoader, TourlyticsConfig, classify_visit_mode,
    estimate_rating, rank_recommendations,
};

fn init_logging(config: &TourlyticsConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.logging.level.clone()));

    if config.logging.format == "json" {
        tracing_subscriber::fmt().with_env_filter(filter).json().init();
    } else {
        tracing_subscriber::fmt().with_env_filter(filter).init();
    }
}

fn main() -> Result<()> {
    let config = TourlyticsConfig::load()?;
    init_logging(&config);

    let table = TableLoader::load(Some(&config))?;

    println!("Tourlytics demo - {} attractions loaded", table.len());
    println!();

    // Rating estimation for each attraction at a sample visitor rating
    let visitor_rating = 4.0;
    println!("Estimated ratings (visitor experience rating {visitor_rating:.1}):");
    for record in table.records() {
        let estimate = estimate_rating(visitor_rating, record.visit_count.min(1000));
        println!("  - {}: {:.2}/5.0", record.name, estimate);
    }
    println!();

    // Visit mode classification for a few sample groups
    println!("Visit mode classification:");
    for (num_people, budget) in [
        (1, BudgetTier::Medium),
        (2, BudgetTier::High),
        (4, BudgetTier::Low),
        (6, BudgetTier::Luxury),
        (6, BudgetTier::Low),
    ] {
        let mode = classify_visit_mode(num_people, budget);
        println!("  - {num_people} people, {budget} budget: {mode}");
    }
    println!();

    // Recommendations using the configured defaults
    let query = RecommendationQuery::new(
        ["Romantic", "Iconic"],
        config.defaults.min_rating_threshold,
    )
    .with_limit(config.defaults.max_recommendations as usize);
    let recommendations = rank_recommendations(table.records(), &query);

    println!("Top recommendations (Romantic or Iconic vibes):");
    if recommendations.is_empty() {
        println!("  No attractions match your preferences.");
    } else {
        for (idx, record) in recommendations.iter().enumerate() {
            println!(
                "  {}. {} - {:.1}/5.0 ({})",
                idx + 1,
                record.name,
                record.mean_rating,
                record.category
            );
        }
    }

    Ok(())
}
