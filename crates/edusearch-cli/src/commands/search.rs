//! Search command implementation
//!
//! Looks the keyword up in both catalog tables and prints one line per hit.

use edusearch_catalog::{Class, Database, Exam, KeywordSearch, SearchService};
use tracing::{debug, info};

use crate::config::Config;
use crate::error::Result;

/// Run the search command
///
/// # Arguments
///
/// * `keyword` - Search term, validated by the catalog
/// * `config` - Database settings
pub async fn run(keyword: &str, config: &Config) -> Result<()> {
    debug!(keyword = %keyword, url = %config.database.url, "Starting search");

    let db = Database::connect_lazy(&config.database)?;
    let service = SearchService::from_database(&db);

    let outcome = execute(&service, keyword).await;
    db.close().await;

    for line in outcome? {
        println!("{}", line);
    }

    Ok(())
}

/// Search and render the output lines, including the empty-result message
pub async fn execute<C, E>(service: &SearchService<C, E>, keyword: &str) -> Result<Vec<String>>
where
    C: KeywordSearch<Item = Class>,
    E: KeywordSearch<Item = Exam>,
{
    let results = service.search(keyword).await?;
    info!(count = results.len(), "Search complete");

    if results.is_empty() {
        return Ok(vec![no_results_message(keyword)]);
    }

    Ok(service.format_results(&results))
}

fn no_results_message(keyword: &str) -> String {
    format!("No results found for: \"{}\"", keyword)
}
