// Copyright 2025 The cosmos-directory Authors
// SPDX-License-Identifier: BSD-3-Clause

use std::collections::BTreeMap;
use std::future::Future;
use std::time::Duration;

use log::{debug, warn};
use reqwest::Client;
use url::Url;

use super::error::HttpError;

const USER_AGENT: &str = concat!("cosmos-directory/", env!("CARGO_PKG_VERSION"));

/// Per-request settings passed through to the fetcher unchanged.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FetchOptions {
    /// Extra request headers, e.g. an API key for a private mirror.
    pub headers: BTreeMap<String, String>,
    /// Upper bound on the whole request. `None` leaves it to the fetcher.
    pub timeout: Option<Duration>,
}

impl FetchOptions {
    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(name.into(), value.into());
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }
}

/// Performs a single GET and yields the response body.
///
/// The client depends only on this trait, so tests and embedders can swap
/// the network for a stub.
pub trait Fetch: Send + Sync {
    fn fetch(&self, url: &Url, options: &FetchOptions) -> impl Future<Output = Result<String, HttpError>> + Send;
}

/// [`Fetch`] over a shared `reqwest` client.
#[derive(Debug, Clone)]
pub struct ReqwestFetcher {
    client: Client,
}

impl ReqwestFetcher {
    pub fn new() -> Result<Self, HttpError> {
        let client = Client::builder().user_agent(USER_AGENT).build()?;
        Ok(Self { client })
    }

    pub fn from_client(client: Client) -> Self {
        Self { client }
    }
}

impl Fetch for ReqwestFetcher {
    async fn fetch(&self, url: &Url, options: &FetchOptions) -> Result<String, HttpError> {
        let mut request = self.client.get(url.clone());
        for (name, value) in &options.headers {
            request = request.header(name, value);
        }
        if let Some(timeout) = options.timeout {
            request = request.timeout(timeout);
        }

        let resp = request.send().await?;
        let status = resp.status();
        if !status.is_success() {
            let body = resp
                .text()
                .await
                .unwrap_or_else(|_| "Failed to read response body".into());
            warn!(url:% = url, status:% = status; "HTTP: Directory returned an error status");
            return Err(HttpError::ServerError { status, body });
        }

        let body = resp.text().await?;
        debug!(url:% = url, bytes = body.len(); "HTTP: Response received");
        Ok(body)
    }
}
