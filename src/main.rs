//! ShiftBuddy preview binary.
//!
//! Usage: `shift-buddy [CITY] [BUDGET] [LANGUAGE]`
//!
//! Loads the configured catalogs and prints the buddy recommendations for
//! the given preferences together with the popular localities, as JSON.

use std::error::Error;
use std::sync::Arc;

use clap::Parser;
use serde_json::json;
use tracing::info;

use shift_buddy::adapters::{FileCatalogSource, SeededCatalogSource};
use shift_buddy::application::{CatalogSnapshot, RecommendBuddiesHandler, RecommendBuddiesQuery};
use shift_buddy::config::AppConfig;
use shift_buddy::ports::CatalogSource;
use shift_buddy::telemetry;

#[derive(Debug, Parser)]
#[command(
    name = "shift-buddy",
    about = "Preview buddy recommendations and popular localities"
)]
struct Args {
    /// City to search in; blank or omitted matches every city
    city: Option<String>,

    /// Budget bracket such as "₹2,000 - ₹5,000" or "₹10,000+"
    budget: Option<String>,

    /// Language the buddy should speak
    language: Option<String>,
}

impl From<Args> for RecommendBuddiesQuery {
    fn from(args: Args) -> Self {
        Self {
            city: args.city,
            budget: args.budget,
            language: args.language,
        }
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    let args = Args::parse();

    let config = AppConfig::load()?;
    config.validate()?;
    telemetry::init_tracing(&config.logging)?;

    let source: Arc<dyn CatalogSource> = match config.catalog.file_paths() {
        Some((localities, buddies)) => Arc::new(FileCatalogSource::new(localities, buddies)),
        None => Arc::new(SeededCatalogSource::new()),
    };
    let snapshot = CatalogSnapshot::load(source.as_ref()).await?;

    let query = RecommendBuddiesQuery::from(args);
    info!(city = ?query.city, budget = ?query.budget, language = ?query.language, "Previewing");

    let popular = snapshot.localities().popular();
    let buddies = RecommendBuddiesHandler::new(snapshot.clone()).handle(&query);

    let preview = json!({
        "recommendedBuddies": buddies,
        "popularLocalities": popular,
    });
    println!("{}", serde_json::to_string_pretty(&preview)?);

    Ok(())
}
