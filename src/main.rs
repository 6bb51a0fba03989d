use tracing::error;

use odds_harvest::app::run;
use odds_harvest::config::Config;
use odds_harvest::logging;

const USAGE: &str = "\
Usage: odds-harvest [SPORT]

Fetch current odds and export them to CSV (ODDS_API_OUTPUT).

SPORT is a shortcut (nba, nfl, mlb, nhl, ncaab, ncaaf, soccer) or any
provider sport key (e.g. basketball_nba). Defaults to ODDS_API_SPORT.";

#[tokio::main]
async fn main() {
    logging::init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    if args.iter().any(|a| a == "--help" || a == "-h") {
        println!("{USAGE}");
        return;
    }

    let mut config = match Config::from_env() {
        Ok(c) => c,
        Err(e) => {
            error!("{e}");
            std::process::exit(2);
        }
    };
    if let Some(sport) = args.first() {
        config = config.with_sport_arg(sport);
    }

    match run(config).await {
        Ok(summary) if summary.records > 0 => {}
        Ok(summary) => {
            error!(
                "No odds records produced ({} events, {} skipped)",
                summary.events, summary.skipped_events
            );
            std::process::exit(1);
        }
        Err(e) => {
            error!("Fatal error: {e}");
            std::process::exit(1);
        }
    }
}
