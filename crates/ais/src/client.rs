//! HTTP client for the AIS address search endpoint.
//!
//! Wraps `GET {base}/search/{address}?gatekeeperKey={key}` using
//! [`reqwest`]. Transport failures, provider rejections, and zero-match
//! responses surface as distinct [`AisError`] variants so callers can tell
//! an outage from a bad address.

use crate::response::AddressLookup;

/// Production AIS endpoint.
pub const DEFAULT_BASE_URL: &str = "https://api.phila.gov/ais/v1";

/// Client for a single AIS deployment.
pub struct AisClient {
    http: reqwest::Client,
    base_url: String,
    gatekeeper_key: String,
}

/// Errors from the AIS lookup layer.
#[derive(Debug, thiserror::Error)]
pub enum AisError {
    /// The HTTP request itself failed (network, DNS, TLS, etc.).
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// AIS returned a non-2xx status code.
    #[error("AIS error ({status}): {body}")]
    Api {
        /// HTTP status code.
        status: u16,
        /// Raw response body for debugging.
        body: String,
    },

    /// The base URL or address could not form a valid request URL.
    #[error("Invalid AIS URL: {0}")]
    Url(String),

    /// Required configuration is missing from the environment.
    #[error("AIS configuration missing: {0}")]
    Config(&'static str),

    /// The lookup completed but produced no usable feature.
    #[error("No matching address")]
    NoMatch,
}

impl AisClient {
    /// Create a client against the production endpoint.
    pub fn new(gatekeeper_key: impl Into<String>) -> Self {
        Self::with_base_url(DEFAULT_BASE_URL, gatekeeper_key)
    }

    /// Create a client against a specific AIS deployment.
    pub fn with_base_url(base_url: impl Into<String>, gatekeeper_key: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into(),
            gatekeeper_key: gatekeeper_key.into(),
        }
    }

    /// Create a client from `AIS_GATEKEEPER_KEY` (and optionally
    /// `AIS_BASE_URL`), loading `.env` first if present.
    pub fn from_env() -> Result<Self, AisError> {
        dotenvy::dotenv().ok();
        let key =
            std::env::var("AIS_GATEKEEPER_KEY").map_err(|_| AisError::Config("AIS_GATEKEEPER_KEY"))?;
        let base_url =
            std::env::var("AIS_BASE_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());
        Ok(Self::with_base_url(base_url, key))
    }

    /// Look up an address.
    ///
    /// Issues exactly one request. The returned payload still has to be
    /// checked for success — a well-formed "no match" response is not a
    /// transport error.
    pub async fn search(&self, address: &str) -> Result<AddressLookup, AisError> {
        let url = self.search_url(address)?;
        tracing::debug!(address, "AIS address search");

        let response = self.http.get(url).send().await?;
        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "<unreadable body>".to_string());
            return Err(AisError::Api {
                status: status.as_u16(),
                body,
            });
        }

        Ok(response.json::<AddressLookup>().await?)
    }

    /// Build the search URL with the address percent-encoded as one path
    /// segment and the gatekeeper key appended.
    fn search_url(&self, address: &str) -> Result<reqwest::Url, AisError> {
        let mut url =
            reqwest::Url::parse(&self.base_url).map_err(|e| AisError::Url(e.to_string()))?;
        url.path_segments_mut()
            .map_err(|_| AisError::Url("base URL cannot be a base".to_string()))?
            .pop_if_empty()
            .push("search")
            .push(address);
        url.query_pairs_mut()
            .append_pair("gatekeeperKey", &self.gatekeeper_key);
        Ok(url)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    #[test]
    fn search_url_encodes_the_address() {
        let client = AisClient::with_base_url("https://api.phila.gov/ais/v1", "secret");
        let url = client.search_url("1234 Market St").unwrap();
        assert_eq!(
            url.as_str(),
            "https://api.phila.gov/ais/v1/search/1234%20Market%20St?gatekeeperKey=secret"
        );
    }

    #[test]
    fn search_url_keeps_slashes_out_of_the_path() {
        let client = AisClient::with_base_url("https://api.phila.gov/ais/v1", "secret");
        let url = client.search_url("1234 Market St / Apt 2").unwrap();
        assert!(url.path().ends_with("/search/1234%20Market%20St%20%2F%20Apt%202"));
    }

    #[test]
    fn trailing_slash_on_the_base_does_not_double_up() {
        let client = AisClient::with_base_url("https://api.phila.gov/ais/v1/", "secret");
        let url = client.search_url("19107").unwrap();
        assert_eq!(url.path(), "/ais/v1/search/19107");
    }

    #[test]
    fn unparseable_base_url_is_reported() {
        let client = AisClient::with_base_url("not a url", "secret");
        assert_matches!(client.search_url("19107"), Err(AisError::Url(_)));
    }
}
