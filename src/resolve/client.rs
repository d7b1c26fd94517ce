use std::time::Duration;

use reqwest::Url;
use reqwest::blocking::Client;
use thiserror::Error;
use tracing::debug;

/// Why a single external lookup failed.
#[derive(Debug, Error)]
pub enum LookupError {
    /// The request never produced a response (connection failure, timeout,
    /// or a body that could not be read).
    #[error("request to {url} failed: {source}")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// The service answered with a non-success status, typically 404 for a
    /// name it does not know.
    #[error("{url} answered with HTTP status {status}")]
    Status { url: String, status: u16 },

    /// The service answered 2xx but the body was empty or whitespace.
    #[error("no usable body from {url}")]
    EmptyBody { url: String },

    /// The configured base URL cannot carry path segments.
    #[error("base URL '{url}' cannot host path segments")]
    BadBaseUrl { url: String },
}

/// The blocking lookup function set over the external chemical-name resolution
/// service.
///
/// Each call hits one endpoint and may fail independently; failures are
/// surfaced, never masked, and no retry or caching happens at this level —
/// callers treat any failure as "lookup unavailable right now". The trait is
/// the injection seam: the resolution cache only ever talks to this.
pub trait LookupClient: Send + Sync {
    /// Gets the chemical formula for a free-text name, e.g. `"H2O"` for
    /// `"water"`.
    fn formula(&self, name: &str) -> Result<String, LookupError>;

    /// Gets the standard InChI key for a free-text name — the canonical
    /// cross-reference identifier for the resolved substance.
    fn inchi_key(&self, name: &str) -> Result<String, LookupError>;

    /// Gets the official IUPAC name for a name or InChI key.
    fn iupac_name(&self, key_or_name: &str) -> Result<String, LookupError>;

    /// Gets commercially, colloquially and scientifically used names for a
    /// name or InChI key, in the order the service returns them. Duplicates
    /// are kept.
    fn synonyms(&self, key_or_name: &str) -> Result<Vec<String>, LookupError>;
}

/// Client for the NIH Cactus Chemical Identifier Resolver.
///
/// Lookups are plain blocking GETs against
/// `<base>/<escaped name>/<target>`, answering with plain-text bodies. A
/// request timeout guards against the service hanging; a timeout surfaces as
/// an ordinary [`LookupError::Transport`] and is retryable like any other
/// failure.
#[derive(Debug, Clone)]
pub struct CactusClient {
    http: Client,
    base: Url,
}

/// Configures a [`CactusClient`]; obtained via [`CactusClient::builder`].
#[derive(Debug, Clone)]
pub struct CactusClientBuilder {
    base: Url,
    timeout: Duration,
}

impl CactusClient {
    /// The public Cactus service.
    pub const DEFAULT_BASE_URL: &'static str = "https://cactus.nci.nih.gov/chemical/structure/";

    /// The default per-request timeout.
    pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

    /// Creates a client against the public Cactus service with the default
    /// timeout.
    ///
    /// # Panics
    ///
    /// Panics if the TLS backend cannot be initialized (the same contract as
    /// `reqwest::blocking::Client::new`).
    pub fn new() -> Self {
        Self::builder().build()
    }

    /// Starts configuring a client, e.g. to point it at a mirror or shorten
    /// the timeout.
    pub fn builder() -> CactusClientBuilder {
        CactusClientBuilder {
            base: Url::parse(Self::DEFAULT_BASE_URL)
                .expect("default base URL is well-formed"),
            timeout: Self::DEFAULT_TIMEOUT,
        }
    }

    fn endpoint(&self, name: &str, target: &str) -> Result<Url, LookupError> {
        let mut url = self.base.clone();
        url.path_segments_mut()
            .map_err(|_| LookupError::BadBaseUrl {
                url: self.base.to_string(),
            })?
            .pop_if_empty()
            .push(name)
            .push(target);
        Ok(url)
    }

    fn fetch(&self, name: &str, target: &str) -> Result<String, LookupError> {
        let url = self.endpoint(name, target)?;
        debug!(%url, "querying chemical name resolver");

        let response = self
            .http
            .get(url.clone())
            .send()
            .map_err(|source| LookupError::Transport {
                url: url.to_string(),
                source,
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(LookupError::Status {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        let body = response.text().map_err(|source| LookupError::Transport {
            url: url.to_string(),
            source,
        })?;
        let body = body.trim();
        if body.is_empty() {
            return Err(LookupError::EmptyBody {
                url: url.to_string(),
            });
        }
        Ok(body.to_string())
    }
}

impl Default for CactusClient {
    fn default() -> Self {
        Self::new()
    }
}

impl CactusClientBuilder {
    /// Overrides the service base URL.
    pub fn base_url(mut self, base: Url) -> Self {
        self.base = base;
        self
    }

    /// Overrides the per-request timeout.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Builds the client.
    ///
    /// # Panics
    ///
    /// Panics if the TLS backend cannot be initialized (the same contract as
    /// `reqwest::blocking::Client::new`).
    pub fn build(self) -> CactusClient {
        let http = Client::builder()
            .timeout(self.timeout)
            .build()
            .expect("failed to initialize HTTP client");
        CactusClient {
            http,
            base: self.base,
        }
    }
}

impl LookupClient for CactusClient {
    fn formula(&self, name: &str) -> Result<String, LookupError> {
        self.fetch(name, "formula")
    }

    fn inchi_key(&self, name: &str) -> Result<String, LookupError> {
        self.fetch(name, "stdinchikey")
    }

    fn iupac_name(&self, key_or_name: &str) -> Result<String, LookupError> {
        self.fetch(key_or_name, "iupac_name")
    }

    fn synonyms(&self, key_or_name: &str) -> Result<Vec<String>, LookupError> {
        let body = self.fetch(key_or_name, "names")?;
        Ok(body.lines().map(str::to_string).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoints_append_name_and_target_to_the_base() {
        let client = CactusClient::new();
        let url = client.endpoint("water", "formula").unwrap();
        assert_eq!(
            url.as_str(),
            "https://cactus.nci.nih.gov/chemical/structure/water/formula"
        );
    }

    #[test]
    fn names_with_spaces_and_reserved_characters_are_escaped() {
        let client = CactusClient::new();
        let url = client.endpoint("magnesium dioxide", "formula").unwrap();
        assert_eq!(
            url.as_str(),
            "https://cactus.nci.nih.gov/chemical/structure/magnesium%20dioxide/formula"
        );

        let url = client.endpoint("a/b#c", "stdinchikey").unwrap();
        assert!(url.as_str().ends_with("/a%2Fb%23c/stdinchikey"));
    }

    #[test]
    fn custom_base_urls_are_honored() {
        let base = Url::parse("http://localhost:8080/resolver/").unwrap();
        let client = CactusClient::builder().base_url(base).build();
        let url = client.endpoint("water", "iupac_name").unwrap();
        assert_eq!(url.as_str(), "http://localhost:8080/resolver/water/iupac_name");
    }

    #[test]
    fn base_urls_without_segments_are_rejected() {
        let base = Url::parse("mailto:someone@example.com").unwrap();
        let client = CactusClient::builder().base_url(base).build();
        let err = client.endpoint("water", "formula").unwrap_err();
        assert!(matches!(err, LookupError::BadBaseUrl { .. }));
    }
}
