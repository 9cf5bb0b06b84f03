use std::time::Duration;

use crate::apod::{ApodResponse, ApodSummary};
use crate::asteroids::{summarize_feed, AsteroidReport, NeoFeedResponse};
use crate::earth_events::{summarize_events, EarthEventReport, EonetResponse};
use crate::error::{Result, SpaceDataError};
use crate::people::{AstrosResponse, IssNowResponse, PeopleInSpaceReport};

const DEFAULT_NASA_BASE: &str = "https://api.nasa.gov";
const DEFAULT_EONET_BASE: &str = "https://eonet.gsfc.nasa.gov/api/v3";
const DEFAULT_OPEN_NOTIFY_BASE: &str = "http://api.open-notify.org";
const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Client for the public space-data APIs
///
/// One reqwest client with a short fixed timeout serves all feeds. Base URLs
/// are overridable so tests can stand in for the upstreams; only the NASA
/// APIs take the api_key.
#[derive(Debug)]
pub struct SpaceDataClient {
    http_client: reqwest::Client,
    api_key: String,
    nasa_base: String,
    eonet_base: String,
    open_notify_base: String,
}

impl SpaceDataClient {
    /// Create new space data client with builder pattern
    pub fn builder() -> SpaceDataClientBuilder {
        SpaceDataClientBuilder::default()
    }

    async fn get_json<T: serde::de::DeserializeOwned>(&self, url: &str) -> Result<T> {
        let response = self.http_client.get(url).send().await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(SpaceDataError::Status { status, body });
        }

        Ok(response.json().await?)
    }

    /// Near-earth objects approaching on a single date (YYYY-MM-DD)
    pub async fn asteroid_feed(&self, date: &str) -> Result<AsteroidReport> {
        let url = format!(
            "{}/neo/rest/v1/feed?start_date={}&end_date={}&api_key={}",
            self.nasa_base, date, date, self.api_key
        );

        let feed: NeoFeedResponse = self.get_json(&url).await?;
        summarize_feed(date, &feed)
    }

    /// Astronomy picture of the day; today's when `date` is None
    pub async fn apod(&self, date: Option<&str>) -> Result<ApodSummary> {
        let mut url = format!("{}/planetary/apod?api_key={}", self.nasa_base, self.api_key);
        if let Some(date) = date {
            url.push_str("&date=");
            url.push_str(date);
        }

        let response: ApodResponse = self.get_json(&url).await?;
        Ok(response.into_summary())
    }

    /// Natural events still open, observed within the last `days` days
    pub async fn earth_events(&self, days: u32) -> Result<EarthEventReport> {
        let url = format!("{}/events?days={}&status=open", self.eonet_base, days);

        let response: EonetResponse = self.get_json(&url).await?;
        Ok(summarize_events(days, response))
    }

    /// Who is in space right now, plus the current ISS position
    ///
    /// Both feeds are fetched concurrently; either failing fails the whole
    /// call (callers decide whether to degrade, see
    /// [`PeopleInSpaceReport::fallback`]).
    pub async fn people_in_space(&self) -> Result<PeopleInSpaceReport> {
        let astros_url = format!("{}/astros.json", self.open_notify_base);
        let iss_url = format!("{}/iss-now.json", self.open_notify_base);

        let (astros, iss): (AstrosResponse, IssNowResponse) =
            tokio::try_join!(self.get_json(&astros_url), self.get_json(&iss_url))?;

        PeopleInSpaceReport::from_feeds(astros, iss)
    }
}

/// Builder for SpaceDataClient
#[derive(Default)]
pub struct SpaceDataClientBuilder {
    api_key: Option<String>,
    nasa_base: Option<String>,
    eonet_base: Option<String>,
    open_notify_base: Option<String>,
    timeout: Option<Duration>,
}

impl SpaceDataClientBuilder {
    pub fn api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    pub fn nasa_base(mut self, base: impl Into<String>) -> Self {
        self.nasa_base = Some(base.into());
        self
    }

    pub fn eonet_base(mut self, base: impl Into<String>) -> Self {
        self.eonet_base = Some(base.into());
        self
    }

    pub fn open_notify_base(mut self, base: impl Into<String>) -> Self {
        self.open_notify_base = Some(base.into());
        self
    }

    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    pub fn build(self) -> Result<SpaceDataClient> {
        let api_key = self
            .api_key
            .ok_or_else(|| SpaceDataError::Config("API key is required".to_string()))?;

        let http_client = reqwest::Client::builder()
            .timeout(self.timeout.unwrap_or(Duration::from_secs(DEFAULT_TIMEOUT_SECS)))
            .build()?;

        Ok(SpaceDataClient {
            http_client,
            api_key,
            nasa_base: trim_base(self.nasa_base, DEFAULT_NASA_BASE),
            eonet_base: trim_base(self.eonet_base, DEFAULT_EONET_BASE),
            open_notify_base: trim_base(self.open_notify_base, DEFAULT_OPEN_NOTIFY_BASE),
        })
    }
}

fn trim_base(base: Option<String>, default: &str) -> String {
    base.unwrap_or_else(|| default.to_string())
        .trim_end_matches('/')
        .to_string()
}
