use std::str::FromStr;
use std::time::Duration;

use crate::constants::{
    DEFAULT_MARKETS, DEFAULT_MAX_RETRIES, DEFAULT_OUTPUT, DEFAULT_REGIONS, DEFAULT_SPORT,
    DEFAULT_TIMEOUT_SECS, ODDS_API_BASE_URL,
};
use crate::error::{Error, Result};

/// Odds format requested from the provider.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OddsFormat {
    Decimal,
    American,
}

impl OddsFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            OddsFormat::Decimal => "decimal",
            OddsFormat::American => "american",
        }
    }
}

impl FromStr for OddsFormat {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "decimal" => Ok(OddsFormat::Decimal),
            "american" => Ok(OddsFormat::American),
            other => Err(Error::Config(format!(
                "ODDS_API_ODDS_FORMAT must be 'decimal' or 'american', got '{other}'"
            ))),
        }
    }
}

impl std::fmt::Display for OddsFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    pub api_key: String,
    pub base_url: String,
    pub sport_key: String,
    pub regions: String,
    pub markets: String,
    pub odds_format: OddsFormat,
    pub output_path: String,
    pub save_raw: bool,
    pub request_timeout: Duration,
    pub max_retries: u32,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenv::dotenv().ok();

        let api_key = std::env::var("ODDS_API_KEY")
            .map_err(|_| Error::Config("ODDS_API_KEY not set".into()))?;
        if api_key.trim().is_empty() || api_key == "your_api_key_here" {
            return Err(Error::Config(
                "ODDS_API_KEY is empty or still the .env.example placeholder".into(),
            ));
        }

        let odds_format = std::env::var("ODDS_API_ODDS_FORMAT")
            .unwrap_or_else(|_| "decimal".to_string())
            .parse::<OddsFormat>()?;

        let timeout_secs = std::env::var("ODDS_API_TIMEOUT_SECS")
            .unwrap_or_else(|_| DEFAULT_TIMEOUT_SECS.to_string())
            .parse::<u64>()
            .map_err(|_| Error::Config("ODDS_API_TIMEOUT_SECS must be an integer".into()))?;

        let max_retries = std::env::var("ODDS_API_MAX_RETRIES")
            .unwrap_or_else(|_| DEFAULT_MAX_RETRIES.to_string())
            .parse::<u32>()
            .map_err(|_| Error::Config("ODDS_API_MAX_RETRIES must be an integer".into()))?;

        Ok(Config {
            api_key,
            base_url: std::env::var("ODDS_API_BASE_URL")
                .unwrap_or_else(|_| ODDS_API_BASE_URL.to_string()),
            sport_key: std::env::var("ODDS_API_SPORT")
                .unwrap_or_else(|_| DEFAULT_SPORT.to_string()),
            regions: std::env::var("ODDS_API_REGIONS")
                .unwrap_or_else(|_| DEFAULT_REGIONS.to_string()),
            markets: std::env::var("ODDS_API_MARKETS")
                .unwrap_or_else(|_| DEFAULT_MARKETS.to_string()),
            odds_format,
            output_path: std::env::var("ODDS_API_OUTPUT")
                .unwrap_or_else(|_| DEFAULT_OUTPUT.to_string()),
            save_raw: std::env::var("SAVE_RAW")
                .map(|v| is_truthy(&v))
                .unwrap_or(false),
            request_timeout: Duration::from_secs(timeout_secs),
            max_retries,
        })
    }

    /// Apply a CLI sport shortcut (e.g. `nfl`), overriding ODDS_API_SPORT.
    pub fn with_sport_arg(mut self, arg: &str) -> Self {
        self.sport_key = resolve_sport_shortcut(arg);
        self
    }
}

fn is_truthy(v: &str) -> bool {
    matches!(v.trim().to_lowercase().as_str(), "1" | "true" | "yes")
}

/// Map a CLI shortcut to the provider's sport key. Unknown values pass through
/// unchanged so any valid provider key works as a positional argument; the
/// provider rejects keys it does not recognize.
pub fn resolve_sport_shortcut(arg: &str) -> String {
    let key = arg.trim().to_lowercase();
    match key.as_str() {
        "nba" => "basketball_nba".to_string(),
        "nfl" => "americanfootball_nfl".to_string(),
        "mlb" => "baseball_mlb".to_string(),
        "nhl" => "icehockey_nhl".to_string(),
        "ncaab" => "basketball_ncaab".to_string(),
        "ncaaf" => "americanfootball_ncaaf".to_string(),
        "soccer" => "soccer_epl".to_string(),
        _ => key,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_shortcuts_resolve() {
        let table = [
            ("nba", "basketball_nba"),
            ("nfl", "americanfootball_nfl"),
            ("mlb", "baseball_mlb"),
            ("nhl", "icehockey_nhl"),
            ("ncaab", "basketball_ncaab"),
            ("ncaaf", "americanfootball_ncaaf"),
            ("soccer", "soccer_epl"),
        ];
        for (shortcut, key) in table {
            assert_eq!(resolve_sport_shortcut(shortcut), key);
        }
    }

    #[test]
    fn unknown_shortcut_passes_through_as_sport_key() {
        assert_eq!(resolve_sport_shortcut("cricket_ipl"), "cricket_ipl");
        // Case-normalized like the known shortcuts
        assert_eq!(resolve_sport_shortcut("NBA"), "basketball_nba");
    }

    #[test]
    fn odds_format_parses_both_variants() {
        assert_eq!("decimal".parse::<OddsFormat>().unwrap(), OddsFormat::Decimal);
        assert_eq!("American".parse::<OddsFormat>().unwrap(), OddsFormat::American);
        assert!("fractional".parse::<OddsFormat>().is_err());
    }

    #[test]
    fn truthy_values() {
        assert!(is_truthy("true"));
        assert!(is_truthy("1"));
        assert!(is_truthy("YES"));
        assert!(!is_truthy("false"));
        assert!(!is_truthy("0"));
    }
}
