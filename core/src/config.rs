//! Per-endpoint request configuration.
//!
//! A `RequestSpec` is the base URL, default headers and timeout every request
//! from one endpoint shares. Each endpoint owns its own copy.

use std::env;
use std::time::Duration;

use url::Url;

use crate::error::{ApiError, Result};

/// Environment variable prefix for `RequestSpec::from_env`.
const ENV_PREFIX: &str = "PLACEHOLDER";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestSpec {
    base_url: Url,
    headers: Vec<(String, String)>,
    timeout: Duration,
}

impl RequestSpec {
    pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

    /// Parse `base_url`. It must be an absolute URL that can carry a path;
    /// any query it has is kept on every request.
    pub fn new(base_url: &str) -> Result<Self> {
        let raw = base_url.trim();
        if raw.is_empty() {
            return Err(ApiError::Config("base URL is empty".to_string()));
        }
        let base_url = Url::parse(raw)
            .map_err(|e| ApiError::Config(format!("invalid base URL {raw:?}: {e}")))?;
        if base_url.cannot_be_a_base() {
            return Err(ApiError::Config(format!("base URL {raw:?} cannot carry a path")));
        }
        Ok(Self {
            base_url,
            headers: Vec::new(),
            timeout: Self::DEFAULT_TIMEOUT,
        })
    }

    /// Add a header sent with every request.
    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }

    pub fn bearer_token(self, token: &str) -> Self {
        self.header("authorization", format!("Bearer {token}"))
    }

    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Load from `PLACEHOLDER_BASE_URL`, `PLACEHOLDER_TIMEOUT_SECS` and
    /// `PLACEHOLDER_TOKEN`.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub(crate) fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let get = |suffix: &str| {
            lookup(&format!("{ENV_PREFIX}_{suffix}")).filter(|value| !value.trim().is_empty())
        };

        let base_url = get("BASE_URL")
            .ok_or_else(|| ApiError::Config(format!("{ENV_PREFIX}_BASE_URL is not set")))?;
        let mut spec = Self::new(&base_url)?;

        if let Some(raw) = get("TIMEOUT_SECS") {
            let secs: u64 = raw.trim().parse().map_err(|_| {
                ApiError::Config(format!("{ENV_PREFIX}_TIMEOUT_SECS must be an integer, got {raw:?}"))
            })?;
            spec = spec.timeout(Duration::from_secs(secs));
        }
        if let Some(token) = get("TOKEN") {
            spec = spec.bearer_token(token.trim());
        }
        Ok(spec)
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    pub fn headers(&self) -> &[(String, String)] {
        &self.headers
    }

    pub fn timeout_duration(&self) -> Duration {
        self.timeout
    }

    /// Append path segments to the base URL. Each segment is percent-encoded,
    /// so a `/` inside one does not start a new segment.
    pub fn url<I>(&self, segments: I) -> Url
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        let mut url = self.base_url.clone();
        // `new` rejects cannot-be-a-base URLs, so this always succeeds.
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().extend(segments);
        }
        url
    }
}
