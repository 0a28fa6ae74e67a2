//! random.org Client Implementation
//!
//! Fetches a single true random integer from random.org's plain-text
//! integer API.
//!
//! # Examples
//!
//! ```no_run
//! use boxing_random::RandomOrgClient;
//! use boxing_domain::traits::RandomSource;
//!
//! let client = RandomOrgClient::from_env().unwrap();
//! let draw = client.get_random(100).unwrap();
//! assert!((1.0..=100.0).contains(&draw));
//! ```

use crate::RandomError;
use boxing_domain::traits::RandomSource;
use std::time::Duration;
use tracing::{error, info};

/// Default random.org integer endpoint, without the `max` parameter
pub const DEFAULT_URL: &str =
    "https://www.random.org/integers/?num=1&min=1&col=1&base=10&format=plain&rnd=new";

/// Environment variable that overrides the endpoint
pub const URL_ENV_VAR: &str = "RANDOM_ORG_URL";

/// Default timeout for random.org requests (5 seconds)
pub const DEFAULT_TIMEOUT_SECS: u64 = 5;

/// Blocking client for random.org
pub struct RandomOrgClient {
    base_url: String,
    client: reqwest::blocking::Client,
}

impl RandomOrgClient {
    /// Create a client for the given base URL
    ///
    /// The URL must already carry a query string; `&max=N` is appended per draw.
    pub fn new(base_url: impl Into<String>) -> Result<Self, RandomError> {
        Self::with_timeout(base_url, Duration::from_secs(DEFAULT_TIMEOUT_SECS))
    }

    /// Create a client with a custom request timeout
    pub fn with_timeout(base_url: impl Into<String>, timeout: Duration) -> Result<Self, RandomError> {
        let client = reqwest::blocking::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| RandomError::Unavailable(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            base_url: base_url.into(),
            client,
        })
    }

    /// Create a client from `RANDOM_ORG_URL`, falling back to the public endpoint
    pub fn from_env() -> Result<Self, RandomError> {
        let url = std::env::var(URL_ENV_VAR).unwrap_or_else(|_| DEFAULT_URL.to_string());
        Self::new(url)
    }

    /// Base URL draws are made against
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn request_url(&self, max: u32) -> String {
        format!("{}&max={}", self.base_url, max)
    }
}

/// Parse a plain-text response body into a number
pub(crate) fn parse_body(body: &str) -> Result<f64, RandomError> {
    let trimmed = body.trim();
    trimmed
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
        .ok_or_else(|| {
            error!("Invalid response from random.org: {}", trimmed);
            RandomError::MalformedResponse(trimmed.to_string())
        })
}

impl From<reqwest::Error> for RandomError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_timeout() {
            RandomError::Timeout
        } else if e.is_status() {
            match e.status() {
                Some(status) => RandomError::Unavailable(format!("HTTP {}", status)),
                None => RandomError::Unavailable(e.to_string()),
            }
        } else {
            RandomError::Unavailable(e.to_string())
        }
    }
}

impl RandomSource for RandomOrgClient {
    type Error = RandomError;

    fn get_random(&self, max: u32) -> Result<f64, Self::Error> {
        if max < 1 {
            return Err(RandomError::InvalidMax(max));
        }

        let url = self.request_url(max);
        info!("Fetching random number from {}", url);

        let body = self
            .client
            .get(&url)
            .send()
            .and_then(|response| response.error_for_status())
            .and_then(|response| response.text())
            .map_err(|e| {
                let err = RandomError::from(e);
                error!("{}", err);
                err
            })?;

        let value = parse_body(&body)?;
        info!("Received random number: {}", value);
        Ok(value)
    }
}
