use std::path::Path;

use chrono::Utc;
use tracing::{info, warn};

use crate::config::Config;
use crate::constants::RAW_OUTPUT_PATH;
use crate::error::Result;
use crate::export::export_to_path;
use crate::flatten::flatten_all;
use crate::provider::OddsApiClient;

#[derive(Debug)]
pub struct RunSummary {
    pub records: usize,
    pub events: usize,
    pub skipped_events: usize,
    pub output_path: String,
}

/// One collection pass: fetch → flatten → export, then a terminal summary.
pub async fn run(config: Config) -> Result<RunSummary> {
    info!("Fetching odds for sport: {}", config.sport_key);
    info!(
        "Regions: {}, markets: {}, odds format: {}",
        config.regions, config.markets, config.odds_format
    );

    let client = OddsApiClient::new(&config)?;
    let snapshot = client.fetch_odds(&config).await?;

    if config.save_raw {
        save_raw(&snapshot.events)?;
        info!("Raw response saved to {RAW_OUTPUT_PATH}");
    }

    let scraped_at = Utc::now();
    let (records, stats) = flatten_all(&snapshot.events, scraped_at);
    let written = export_to_path(&config.output_path, &records)?;

    info!("Scraped {written} odds records from {} events", stats.events_seen);
    if stats.skipped_events > 0 {
        warn!("Skipped {} malformed events", stats.skipped_events);
        for path in &stats.malformed {
            warn!("  {path}");
        }
    }
    info!("Data saved to {}", config.output_path);

    Ok(RunSummary {
        records: written,
        events: stats.events_seen,
        skipped_events: stats.skipped_events,
        output_path: config.output_path,
    })
}

fn save_raw(events: &[serde_json::Value]) -> Result<()> {
    if let Some(parent) = Path::new(RAW_OUTPUT_PATH).parent() {
        std::fs::create_dir_all(parent)?;
    }
    let json = serde_json::to_string_pretty(events)?;
    std::fs::write(RAW_OUTPUT_PATH, json)?;
    Ok(())
}
