/// The Odds API v4 base URL. Override with ODDS_API_BASE_URL (useful for tests).
pub const ODDS_API_BASE_URL: &str = "https://api.the-odds-api.com/v4";

/// Quota headers returned on every odds request.
pub const HEADER_REQUESTS_REMAINING: &str = "x-requests-remaining";
pub const HEADER_REQUESTS_USED: &str = "x-requests-used";

/// Marker written for columns that do not apply to a record (e.g. outcome_point
/// on h2h markets, team names on outrights). The column set never varies.
pub const NOT_APPLICABLE: &str = "NA";

/// Fixed CSV header, one column per FlatOddsRecord field, in export order.
pub const CSV_HEADER: &[&str] = &[
    "event_id",
    "sport",
    "home_team",
    "away_team",
    "commence_time",
    "bookmaker_key",
    "bookmaker_title",
    "market",
    "outcome_name",
    "outcome_price",
    "outcome_point",
    "last_update",
    "scraped_at",
];

pub const DEFAULT_SPORT: &str = "basketball_nba";
pub const DEFAULT_OUTPUT: &str = "data/odds_data.csv";
pub const DEFAULT_REGIONS: &str = "us";
pub const DEFAULT_MARKETS: &str = "h2h,spreads";
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;
pub const DEFAULT_MAX_RETRIES: u32 = 3;

/// Where the raw provider response lands when SAVE_RAW is enabled.
pub const RAW_OUTPUT_PATH: &str = "data/raw_odds.json";
