//! List available sports from The Odds API. Does not count against quota.

use tracing::error;

use odds_harvest::config::Config;
use odds_harvest::logging;
use odds_harvest::provider::OddsApiClient;

#[tokio::main]
async fn main() {
    logging::init();

    let all = std::env::args().any(|a| a == "--all");

    let config = match Config::from_env() {
        Ok(c) => c,
        Err(e) => {
            error!("{e}");
            std::process::exit(2);
        }
    };

    let client = match OddsApiClient::new(&config) {
        Ok(c) => c,
        Err(e) => {
            error!("{e}");
            std::process::exit(1);
        }
    };

    match client.fetch_sports(all).await {
        Ok(sports) => {
            println!("{:<40} {:<30} active", "key", "group");
            for sport in &sports {
                println!(
                    "{:<40} {:<30} {}",
                    sport.key,
                    sport.group,
                    if sport.active { "yes" } else { "no" }
                );
            }
            println!("\n{} sports listed", sports.len());
        }
        Err(e) => {
            error!("Failed to fetch sports: {e}");
            std::process::exit(1);
        }
    }
}
