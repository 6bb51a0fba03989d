//! The Odds API v4 REST client

use reqwest::header::HeaderMap;
use reqwest::{Client as HttpClient, StatusCode};
use tracing::{debug, info};

use super::models::{QuotaUsage, Sport};
use crate::config::Config;
use crate::constants::{HEADER_REQUESTS_REMAINING, HEADER_REQUESTS_USED};
use crate::error::{Error, Result};
use crate::retry::{retry, RetryStrategy};

/// One odds response: the event array exactly as received, plus the quota
/// state read from the response headers.
#[derive(Debug, Clone)]
pub struct OddsSnapshot {
    pub events: Vec<serde_json::Value>,
    pub quota: QuotaUsage,
}

pub struct OddsApiClient {
    http: HttpClient,
    base_url: String,
    api_key: String,
    retry_strategy: RetryStrategy,
}

impl OddsApiClient {
    pub fn new(config: &Config) -> Result<Self> {
        // Catches a mangled ODDS_API_BASE_URL override before the first request
        url::Url::parse(&config.base_url)?;

        let http = HttpClient::builder()
            .timeout(config.request_timeout)
            .build()?;

        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            api_key: config.api_key.clone(),
            retry_strategy: RetryStrategy::default().with_max_retries(config.max_retries),
        })
    }

    /// Fetch odds for one sport. Transient network failures are retried with
    /// backoff up to the configured bound; all other errors surface at once.
    pub async fn fetch_odds(&self, config: &Config) -> Result<OddsSnapshot> {
        let url = format!(
            "{}/sports/{}/odds?apiKey={}&regions={}&markets={}&oddsFormat={}&dateFormat=iso",
            self.base_url,
            config.sport_key,
            self.api_key,
            config.regions,
            config.markets,
            config.odds_format,
        );

        retry(&self.retry_strategy, || self.get_odds_once(&url)).await
    }

    async fn get_odds_once(&self, url: &str) -> Result<OddsSnapshot> {
        debug!("GET {}/sports/.../odds", self.base_url);
        let resp = self.http.get(url).send().await?;

        let status = resp.status();
        let quota = parse_quota_headers(resp.headers());

        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(classify_status(status, body));
        }

        if let (Some(remaining), Some(used)) = (quota.remaining, quota.used) {
            info!("API usage: remaining={remaining} used={used}");
        }

        let body: serde_json::Value = resp.json().await?;
        let events = match body {
            serde_json::Value::Array(events) => events,
            _ => {
                return Err(Error::MalformedResponse {
                    path: "$ (odds response is not an array)".to_string(),
                })
            }
        };

        Ok(OddsSnapshot { events, quota })
    }

    /// List available sports. Does not count against the usage quota.
    pub async fn fetch_sports(&self, all: bool) -> Result<Vec<Sport>> {
        let mut url = format!("{}/sports?apiKey={}", self.base_url, self.api_key);
        if all {
            url.push_str("&all=true");
        }

        retry(&self.retry_strategy, || self.get_sports_once(&url)).await
    }

    async fn get_sports_once(&self, url: &str) -> Result<Vec<Sport>> {
        let resp = self.http.get(url).send().await?;
        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(classify_status(status, body));
        }
        Ok(resp.json::<Vec<Sport>>().await?)
    }
}

/// Map a non-2xx status to the error taxonomy. 401/403 and 429 carry the
/// provider's own message so the user sees the cause verbatim.
fn classify_status(status: StatusCode, body: String) -> Error {
    match status {
        StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => {
            Error::Auth(format!("invalid or missing API key: {body}"))
        }
        StatusCode::TOO_MANY_REQUESTS => Error::QuotaExceeded(body),
        _ => Error::Upstream {
            status: status.as_u16(),
            body,
        },
    }
}

fn parse_quota_headers(headers: &HeaderMap) -> QuotaUsage {
    let parse = |name: &str| {
        headers
            .get(name)
            .and_then(|v| v.to_str().ok())
            // The provider reports fractional credits for some plans
            .and_then(|s| s.parse::<f64>().ok())
            .map(|n| n as u64)
    };

    QuotaUsage {
        remaining: parse(HEADER_REQUESTS_REMAINING),
        used: parse(HEADER_REQUESTS_USED),
    }
}
