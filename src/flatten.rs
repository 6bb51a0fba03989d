//! Odds normalizer: walks the nested event → bookmaker → market → outcome
//! structure and emits one flat record per priced outcome.

use std::collections::VecDeque;

use chrono::{DateTime, Utc};
use serde::Deserialize;
use tracing::warn;

use crate::provider::odds_api::models::RawEvent;

/// Denormalized join of all four nesting levels plus the capture timestamp.
/// One record per (event, bookmaker, market, outcome) tuple; provider-side
/// duplicates are emitted as-is, never deduplicated.
#[derive(Debug, Clone, PartialEq)]
pub struct FlatOddsRecord {
    pub event_id: String,
    pub sport_key: String,
    /// None for outrights, which carry no per-event teams.
    pub home_team: Option<String>,
    pub away_team: Option<String>,
    pub commence_time: DateTime<Utc>,
    pub bookmaker_key: String,
    pub bookmaker_title: String,
    pub market: String,
    pub outcome_name: String,
    pub outcome_price: f64,
    /// None for markets without a spread/total line (h2h, outrights).
    pub outcome_point: Option<f64>,
    pub last_update: DateTime<Utc>,
    pub scraped_at: DateTime<Utc>,
}

#[derive(Debug, Default, Clone)]
pub struct FlattenStats {
    pub events_seen: usize,
    pub skipped_events: usize,
    /// Offending path + cause for each skipped event, e.g.
    /// `events[3]: missing field `id``.
    pub malformed: Vec<String>,
}

/// Lazily flatten a raw event array. One pass, restartable only by calling
/// [`flatten_events`] again; memory stays proportional to one event. A
/// malformed event is skipped and counted while its siblings keep flowing.
pub fn flatten_events(events: &[serde_json::Value], scraped_at: DateTime<Utc>) -> FlattenIter<'_> {
    FlattenIter {
        events,
        next_idx: 0,
        buffer: VecDeque::new(),
        scraped_at,
        stats: FlattenStats::default(),
    }
}

/// Eagerly flatten, returning the records alongside the pass statistics.
pub fn flatten_all(
    events: &[serde_json::Value],
    scraped_at: DateTime<Utc>,
) -> (Vec<FlatOddsRecord>, FlattenStats) {
    let mut iter = flatten_events(events, scraped_at);
    let records: Vec<_> = iter.by_ref().collect();
    (records, iter.stats().clone())
}

pub struct FlattenIter<'a> {
    events: &'a [serde_json::Value],
    next_idx: usize,
    buffer: VecDeque<FlatOddsRecord>,
    scraped_at: DateTime<Utc>,
    stats: FlattenStats,
}

impl FlattenIter<'_> {
    /// Pass statistics so far; complete once the iterator is exhausted.
    pub fn stats(&self) -> &FlattenStats {
        &self.stats
    }
}

impl Iterator for FlattenIter<'_> {
    type Item = FlatOddsRecord;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(record) = self.buffer.pop_front() {
                return Some(record);
            }

            let raw = self.events.get(self.next_idx)?;
            let idx = self.next_idx;
            self.next_idx += 1;
            self.stats.events_seen += 1;

            match RawEvent::deserialize(raw) {
                Ok(event) => flatten_event(&event, self.scraped_at, &mut self.buffer),
                Err(e) => {
                    let path = format!("events[{idx}]: {e}");
                    warn!("Skipping malformed event at {path}");
                    self.stats.skipped_events += 1;
                    self.stats.malformed.push(path);
                }
            }
        }
    }
}

fn flatten_event(event: &RawEvent, scraped_at: DateTime<Utc>, out: &mut VecDeque<FlatOddsRecord>) {
    for bookmaker in &event.bookmakers {
        for market in &bookmaker.markets {
            for outcome in &market.outcomes {
                out.push_back(FlatOddsRecord {
                    event_id: event.id.clone(),
                    sport_key: event.sport_key.clone(),
                    home_team: event.home_team.clone(),
                    away_team: event.away_team.clone(),
                    commence_time: event.commence_time,
                    bookmaker_key: bookmaker.key.clone(),
                    bookmaker_title: bookmaker.title.clone(),
                    market: market.key.clone(),
                    outcome_name: outcome.name.clone(),
                    outcome_price: outcome.price,
                    outcome_point: outcome.point,
                    last_update: market.last_update.unwrap_or(bookmaker.last_update),
                    scraped_at,
                });
            }
        }
    }
}
