//! CatalogClient - fetches the emoji name → image URL mapping.

use std::collections::BTreeMap;
use std::time::Duration;

use serde::Deserialize;

/// The environment variable holding an optional API token.
pub const GITHUB_TOKEN_ENV: &str = "GITHUB_TOKEN";

/// Default endpoint listing every GitHub emoji.
pub const DEFAULT_CATALOG_URL: &str = "https://api.github.com/emojis";

/// Default timeout for HTTP requests (30 seconds).
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Default connection timeout (10 seconds).
const DEFAULT_CONNECT_TIMEOUT: Duration = Duration::from_secs(10);

/// HTTP status code for a missing or bad credential.
const HTTP_STATUS_UNAUTHORIZED: u16 = 401;

/// HTTP status code for a credential without access (or rate limited).
const HTTP_STATUS_FORBIDDEN: u16 = 403;

/// Media type GitHub recommends for REST requests.
const GITHUB_ACCEPT: &str = "application/vnd.github+json";

/// Emoji names mapped to image references (URL or local path).
///
/// Names are unique, non-empty and case-sensitive. Iteration is in name order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EmojiCatalog {
    entries: BTreeMap<String, String>,
}

impl EmojiCatalog {
    /// Build a catalog from name/reference pairs, skipping empty names.
    ///
    /// Later duplicates replace earlier ones.
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let entries = pairs
            .into_iter()
            .map(|(k, v)| (k.into(), v.into()))
            .filter(|(k, _)| !k.is_empty())
            .collect();
        Self { entries }
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries.get(name).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Names in lexicographic order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    /// `(name, image_ref)` pairs in name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

/// Error body returned by the GitHub API.
#[derive(Debug, Deserialize)]
struct ApiMessage {
    message: String,
}

/// Client for the emoji catalog endpoint.
pub struct CatalogClient {
    token: Option<String>,
    url: String,
    http_client: reqwest::Client,
}

impl CatalogClient {
    /// Create a client for the default endpoint.
    ///
    /// A `Some` token is sent as a bearer credential; `None` (or an empty
    /// token) issues unauthenticated requests.
    pub fn new(token: Option<String>) -> Result<Self, CatalogError> {
        Self::with_base_url(DEFAULT_CATALOG_URL.to_string(), token)
    }

    /// Create a client for a custom endpoint.
    ///
    /// Useful for testing against a mock server.
    pub fn with_base_url(url: String, token: Option<String>) -> Result<Self, CatalogError> {
        let http_client = reqwest::Client::builder()
            .timeout(DEFAULT_TIMEOUT)
            .connect_timeout(DEFAULT_CONNECT_TIMEOUT)
            .user_agent(concat!("emojiterm/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(CatalogError::Network)?;

        Ok(Self {
            token: token.filter(|t| !t.is_empty()),
            url,
            http_client,
        })
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn is_authenticated(&self) -> bool {
        self.token.is_some()
    }

    /// The underlying HTTP client, for reuse by other requests.
    pub fn http_client(&self) -> &reqwest::Client {
        &self.http_client
    }

    /// Fetch the full catalog.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::Network` if the request cannot be sent,
    /// `CatalogError::Auth` if the endpoint rejects the credential (401/403),
    /// or `CatalogError::Protocol` for any other failure status or a body
    /// that is not a JSON object of non-empty names to strings.
    pub async fn fetch_catalog(&self) -> Result<EmojiCatalog, CatalogError> {
        log::info!(
            "Fetching emoji catalog from {} ({})",
            self.url,
            if self.is_authenticated() {
                "authenticated"
            } else {
                "unauthenticated"
            }
        );

        let mut request = self
            .http_client
            .get(&self.url)
            .header(reqwest::header::ACCEPT, GITHUB_ACCEPT);
        if let Some(token) = &self.token {
            request = request.bearer_auth(token);
        }

        let response = request.send().await.map_err(CatalogError::Network)?;
        let status = response.status();
        let body = response.text().await.map_err(CatalogError::Network)?;

        if !status.is_success() {
            let message = serde_json::from_str::<ApiMessage>(&body)
                .map(|m| m.message)
                .unwrap_or(body);
            let code = status.as_u16();
            if code == HTTP_STATUS_UNAUTHORIZED || code == HTTP_STATUS_FORBIDDEN {
                log::warn!("Catalog request rejected with {}: {}", status, message);
                return Err(CatalogError::Auth { status: code, message });
            }
            return Err(CatalogError::Protocol(format!(
                "catalog request failed with status {}: {}",
                status, message
            )));
        }

        let entries: BTreeMap<String, String> = serde_json::from_str(&body)
            .map_err(|e| CatalogError::Protocol(format!("malformed catalog: {}", e)))?;
        if entries.keys().any(String::is_empty) {
            return Err(CatalogError::Protocol(
                "malformed catalog: empty emoji name".to_string(),
            ));
        }

        log::debug!("Catalog contains {} emojis", entries.len());
        Ok(EmojiCatalog { entries })
    }
}

/// Errors that can occur while fetching the catalog.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("Network error: {0}")]
    Network(#[source] reqwest::Error),

    #[error("Authentication failed ({status}): {message}")]
    Auth {
        /// HTTP status returned by the endpoint
        status: u16,
        /// Message from the response body
        message: String,
    },

    #[error("Protocol error: {0}")]
    Protocol(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_uses_default_url() {
        let client = CatalogClient::new(None).unwrap();
        assert_eq!(client.url(), DEFAULT_CATALOG_URL);
        assert!(!client.is_authenticated());
    }

    #[test]
    fn test_token_enables_auth() {
        let client = CatalogClient::new(Some("abc".to_string())).unwrap();
        assert!(client.is_authenticated());
    }

    #[test]
    fn test_empty_token_is_ignored() {
        let client = CatalogClient::new(Some(String::new())).unwrap();
        assert!(!client.is_authenticated());
    }

    #[test]
    fn test_catalog_from_pairs_sorted_and_unique() {
        let catalog = EmojiCatalog::from_pairs([
            ("smiley", "b.png"),
            ("smile", "a.png"),
            ("", "ignored.png"),
            ("smile", "c.png"),
        ]);
        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.names().collect::<Vec<_>>(), vec!["smile", "smiley"]);
        assert_eq!(catalog.get("smile"), Some("c.png"));
        assert_eq!(catalog.get("missing"), None);
    }

    #[test]
    fn test_catalog_error_display() {
        let err = CatalogError::Auth {
            status: 401,
            message: "Bad credentials".to_string(),
        };
        assert_eq!(err.to_string(), "Authentication failed (401): Bad credentials");
        assert_eq!(
            CatalogError::Protocol("oops".to_string()).to_string(),
            "Protocol error: oops"
        );
    }
}
