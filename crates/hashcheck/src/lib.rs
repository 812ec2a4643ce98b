//! Check passwords against the Have I Been Pwned range API.
//!
//! Only the first five characters of the SHA-1 hash of a
//! password are sent to the service; the response lists every
//! known hash suffix for that prefix which is matched locally.
#![deny(missing_docs)]
#![forbid(unsafe_code)]

mod error;

pub use error::Error;

use async_trait::async_trait;
use sha1::{Digest, Sha1};
use std::time::Duration;

/// Result type for the library.
pub type Result<T> = std::result::Result<T, Error>;

/// Default endpoint for range queries.
pub const ENDPOINT: &str = "https://api.pwnedpasswords.com";

/// Default timeout for range queries.
pub const TIMEOUT: Duration = Duration::from_secs(2);

/// Length of the hash prefix sent to the service.
const PREFIX_LENGTH: usize = 5;

/// Check whether a password appears in a corpus of
/// leaked passwords.
#[async_trait]
pub trait BreachCheck: Send + Sync {
    /// Determine if the password has been leaked.
    async fn is_leaked(&self, password: &str) -> Result<bool>;
}

/// Upper-case hex encoded SHA-1 hash of a password.
pub fn password_hash(password: &str) -> String {
    hex::encode_upper(Sha1::digest(password.as_bytes()))
}

/// Split a hash into the prefix sent to the service and the
/// suffix matched against the response.
pub fn split_hash(hash: &str) -> (&str, &str) {
    hash.split_at(PREFIX_LENGTH.min(hash.len()))
}

/// Determine if a range response lists the hash suffix.
///
/// Each line of the response is `SUFFIX:COUNT`; padding
/// entries carry a count of zero and never match.
pub fn is_listed(body: &str, suffix: &str) -> Result<bool> {
    for line in body.lines() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        let (candidate, count) = line
            .split_once(':')
            .ok_or_else(|| Error::MalformedResponse(line.to_owned()))?;
        if candidate.eq_ignore_ascii_case(suffix) {
            let count: u64 = count
                .trim()
                .parse()
                .map_err(|_| Error::MalformedResponse(line.to_owned()))?;
            return Ok(count > 0);
        }
    }
    Ok(false)
}

/// Client for the range API.
#[derive(Debug, Clone)]
pub struct HashCheck {
    client: reqwest::Client,
    endpoint: String,
}

impl HashCheck {
    /// Create a client for an endpoint with a request timeout.
    ///
    /// When no endpoint is given [ENDPOINT] is used. Every
    /// client carries a timeout, use [TIMEOUT] for the default.
    pub fn new(endpoint: Option<String>, timeout: Duration) -> Result<Self> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        let endpoint = endpoint
            .unwrap_or_else(|| ENDPOINT.to_owned())
            .trim_end_matches('/')
            .to_owned();
        Ok(Self { client, endpoint })
    }

    /// Endpoint for range queries.
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Fetch the range response for a hash prefix.
    pub async fn range(&self, prefix: &str) -> Result<String> {
        tracing::info!(host = %self.endpoint, "hashcheck");
        let url = format!("{}/range/{}", self.endpoint, prefix);
        let res = self
            .client
            .get(url)
            .header("Add-Padding", "true")
            .send()
            .await?;
        tracing::debug!(
            status = %res.status(), "hashcheck response status (range)");
        let res = res.error_for_status()?;
        Ok(res.text().await?)
    }
}

#[async_trait]
impl BreachCheck for HashCheck {
    async fn is_leaked(&self, password: &str) -> Result<bool> {
        let hash = password_hash(password);
        let (prefix, suffix) = split_hash(&hash);
        let body = self.range(prefix).await?;
        is_listed(&body, suffix)
    }
}
