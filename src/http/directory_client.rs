//! Typed client for the cosmos.directory API.
//!
//! The directory is served from three hosts per domain:
//!
//! - `chains.{domain}`: the chain collection and single chains
//! - `status.{domain}`: live API health
//! - `validators.{domain}`: validator operators and per-chain validator sets
//!
//! Each operation performs exactly one GET, parses the body as JSON,
//! validates it against the payload's schema (unless disabled) and
//! deserialises it into the payload type. Any failure is returned as-is.
//!
//! # Example
//!
//! ```rust,no_run
//! use cosmos_directory::http::DirectoryClient;
//!
//! # async fn example() -> Result<(), anyhow::Error> {
//! let client = DirectoryClient::new()?;
//!
//! let osmosis = client.fetch_chain("osmosis").await?;
//! println!("{} is at height {:?}", osmosis.chain.pretty_name, osmosis.chain.height);
//! # Ok(())
//! # }
//! ```

use log::{debug, warn};
use serde_json::Value;
use url::Url;

use super::error::HttpError;
use super::fetch::{Fetch, FetchOptions, ReqwestFetcher};
use crate::payloads::{
    ChainValidators, DirectoryChain, DirectoryChains, DirectoryStatus, DirectoryValidator, DirectoryValidators, Payload,
};

pub const DEFAULT_PROTOCOL: &str = "https";
pub const MAINNET_DOMAIN: &str = "cosmos.directory";
pub const TESTNET_DOMAIN: &str = "testcosmos.directory";

/// Settings for a [`DirectoryClient`].
///
/// Endpoints left as `None` are derived from `protocol` and `domain`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientOptions {
    pub protocol: String,
    /// Falls back to [`MAINNET_DOMAIN`], or [`TESTNET_DOMAIN`] for
    /// [`DirectoryClient::testnet`].
    pub domain: Option<String>,
    pub chains_endpoint: Option<String>,
    pub status_endpoint: Option<String>,
    pub validators_endpoint: Option<String>,
    pub fetch_options: FetchOptions,
    /// Check every response against its schema before deserialising.
    pub validate: bool,
}

impl Default for ClientOptions {
    fn default() -> Self {
        Self {
            protocol: DEFAULT_PROTOCOL.to_string(),
            domain: None,
            chains_endpoint: None,
            status_endpoint: None,
            validators_endpoint: None,
            fetch_options: FetchOptions::default(),
            validate: true,
        }
    }
}

impl ClientOptions {
    fn endpoint(&self, configured: Option<&str>, host: &str) -> Result<Url, HttpError> {
        let raw = match configured {
            Some(endpoint) => endpoint.to_string(),
            None => format!(
                "{}://{}.{}",
                self.protocol,
                host,
                self.domain.as_deref().unwrap_or(MAINNET_DOMAIN)
            ),
        };
        let url = Url::parse(&raw)?;
        if url.cannot_be_a_base() {
            return Err(HttpError::InvalidEndpoint(raw));
        }
        Ok(url)
    }
}

/// Client for the cosmos.directory chain, status and validator APIs.
///
/// The client holds no mutable state; it is `Send + Sync` whenever its
/// fetcher is, and concurrent calls need no coordination.
#[derive(Debug, Clone)]
pub struct DirectoryClient<F = ReqwestFetcher> {
    fetcher: F,
    chains: Url,
    status: Url,
    validators: Url,
    fetch_options: FetchOptions,
    validate: bool,
}

impl DirectoryClient<ReqwestFetcher> {
    /// Creates a client for the production directory.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be initialized (e.g. TLS
    /// backend initialization failure).
    pub fn new() -> Result<Self, HttpError> {
        Self::with_options(ClientOptions::default())
    }

    pub fn with_options(options: ClientOptions) -> Result<Self, HttpError> {
        Self::with_fetcher(options, ReqwestFetcher::new()?)
    }

    /// Creates a client for the testnet directory.
    ///
    /// Uses [`TESTNET_DOMAIN`] unless `options` names a domain; every other
    /// option, including explicit endpoint overrides, is kept.
    pub fn testnet(options: ClientOptions) -> Result<Self, HttpError> {
        Self::with_options(ClientOptions {
            domain: options.domain.or_else(|| Some(TESTNET_DOMAIN.to_string())),
            ..options
        })
    }
}

impl<F: Fetch> DirectoryClient<F> {
    /// Creates a client that performs its requests through `fetcher`.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError::UrlError`] or [`HttpError::InvalidEndpoint`] if an
    /// endpoint cannot be used as a base URL.
    pub fn with_fetcher(options: ClientOptions, fetcher: F) -> Result<Self, HttpError> {
        let chains = options.endpoint(options.chains_endpoint.as_deref(), "chains")?;
        let status = options.endpoint(options.status_endpoint.as_deref(), "status")?;
        let validators = options.endpoint(options.validators_endpoint.as_deref(), "validators")?;

        Ok(Self {
            fetcher,
            chains,
            status,
            validators,
            fetch_options: options.fetch_options,
            validate: options.validate,
        })
    }

    pub fn chains_endpoint(&self) -> &Url {
        &self.chains
    }

    pub fn status_endpoint(&self) -> &Url {
        &self.status
    }

    pub fn validators_endpoint(&self) -> &Url {
        &self.validators
    }

    /// Every chain the directory tracks.
    pub async fn fetch_chains(&self) -> Result<DirectoryChains, HttpError> {
        self.get(join(&self.chains, &[])?).await
    }

    /// One chain by its directory path, e.g. `osmosis` or `cosmoshub`.
    pub async fn fetch_chain(&self, path: &str) -> Result<DirectoryChain, HttpError> {
        self.get(join(&self.chains, &[path])?).await
    }

    /// API health of every chain.
    pub async fn fetch_status(&self) -> Result<DirectoryStatus, HttpError> {
        self.get(join(&self.status, &[])?).await
    }

    /// Every validator operator in the validator registry.
    pub async fn fetch_validators(&self) -> Result<DirectoryValidators, HttpError> {
        self.get(join(&self.validators, &[])?).await
    }

    /// One validator operator by its registry path, e.g. `ecostake`.
    pub async fn fetch_validator(&self, path: &str) -> Result<DirectoryValidator, HttpError> {
        self.get(join(&self.validators, &[path])?).await
    }

    /// The validator set of one chain.
    pub async fn fetch_chain_validators(&self, path: &str) -> Result<ChainValidators, HttpError> {
        self.get(join(&self.validators, &["chains", path])?).await
    }

    async fn get<T: Payload>(&self, url: Url) -> Result<T, HttpError> {
        debug!(url:% = url, payload:% = T::KIND; "HTTP: Fetching directory document");

        let body = self.fetcher.fetch(&url, &self.fetch_options).await?;
        let value: Value = serde_json::from_str(&body)?;
        let value = if self.validate {
            T::registry().cast(&value).inspect_err(|e| {
                warn!(url:% = url, payload:% = T::KIND, error:% = e; "HTTP: Directory document failed validation");
            })?
        } else {
            value
        };

        Ok(serde_json::from_value(value)?)
    }
}

/// Appends percent-encoded path segments to `base`. A `/` inside a segment
/// is encoded as `%2F` rather than starting a new segment.
fn join(base: &Url, segments: &[&str]) -> Result<Url, HttpError> {
    let mut url = base.clone();
    if segments.is_empty() {
        return Ok(url);
    }
    {
        let mut path = url
            .path_segments_mut()
            .map_err(|()| HttpError::InvalidEndpoint(base.to_string()))?;
        path.pop_if_empty().extend(segments);
    }
    Ok(url)
}
