use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One sporting event with its attached bookmaker quotes, as the provider
/// shapes it. Unknown fields are ignored so provider schema additions do not
/// break deserialization.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct RawEvent {
    pub id: String,
    pub sport_key: String,
    #[serde(default)]
    pub sport_title: Option<String>,
    /// Absent for outrights markets, which have no per-event teams.
    #[serde(default)]
    pub home_team: Option<String>,
    #[serde(default)]
    pub away_team: Option<String>,
    pub commence_time: DateTime<Utc>,
    #[serde(default)]
    pub bookmakers: Vec<RawBookmaker>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct RawBookmaker {
    pub key: String,
    pub title: String,
    pub last_update: DateTime<Utc>,
    #[serde(default)]
    pub markets: Vec<RawMarket>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct RawMarket {
    /// Market type: h2h, spreads, totals, outrights.
    pub key: String,
    /// Per-market update time; overrides the bookmaker's when present.
    #[serde(default)]
    pub last_update: Option<DateTime<Utc>>,
    #[serde(default)]
    pub outcomes: Vec<RawOutcome>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct RawOutcome {
    pub name: String,
    /// Decimal or American numeric encoding, per the oddsFormat request param.
    pub price: f64,
    /// Spread/total line; absent for h2h.
    #[serde(default)]
    pub point: Option<f64>,
}

/// Entry from the /sports listing endpoint.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Sport {
    pub key: String,
    pub title: String,
    #[serde(default)]
    pub group: String,
    #[serde(default)]
    pub active: bool,
    #[serde(default)]
    pub has_outrights: bool,
}

/// Quota state from the x-requests-remaining / x-requests-used response
/// headers. Surfaced to callers, never acted upon here.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct QuotaUsage {
    pub remaining: Option<u64>,
    pub used: Option<u64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn event_deserializes_with_unknown_fields_ignored() {
        let json = serde_json::json!({
            "id": "e1",
            "sport_key": "basketball_nba",
            "sport_title": "NBA",
            "home_team": "Boston Celtics",
            "away_team": "Miami Heat",
            "commence_time": "2026-01-15T00:10:00Z",
            "bookmakers": [],
            "some_future_field": {"nested": true}
        });
        let event: RawEvent = serde_json::from_value(json).unwrap();
        assert_eq!(event.id, "e1");
        assert!(event.bookmakers.is_empty());
    }

    #[test]
    fn outright_event_has_no_teams() {
        let json = serde_json::json!({
            "id": "e2",
            "sport_key": "golf_masters_tournament_winner",
            "commence_time": "2026-04-09T12:00:00Z"
        });
        let event: RawEvent = serde_json::from_value(json).unwrap();
        assert!(event.home_team.is_none());
        assert!(event.away_team.is_none());
    }

    #[test]
    fn missing_required_field_is_an_error() {
        let json = serde_json::json!({
            "sport_key": "basketball_nba",
            "commence_time": "2026-01-15T00:10:00Z"
        });
        assert!(serde_json::from_value::<RawEvent>(json).is_err());
    }

    #[test]
    fn outcome_point_defaults_to_none() {
        let json = serde_json::json!({"name": "Boston Celtics", "price": 1.91});
        let o: RawOutcome = serde_json::from_value(json).unwrap();
        assert_eq!(o.point, None);
    }
}
