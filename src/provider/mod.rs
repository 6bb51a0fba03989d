pub mod odds_api;

pub use odds_api::{OddsApiClient, OddsSnapshot, QuotaUsage, Sport};
