//! HTTP client module for the cosmos.directory API.
//!
//! This module provides a typed client for the three directory services:
//! chain metadata, API status and the validator registry. Responses are
//! validated against the payload schemas in [`crate::payloads`] before they
//! are handed to the caller.
//!
//! # Architecture
//!
//! The module is organized into several components:
//!
//! - [`DirectoryClient`] - High-level client with one method per directory endpoint
//! - [`Fetch`] - The seam between the client and the network, with
//!   [`ReqwestFetcher`] as the production implementation
//! - [`HttpError`] - Error types for HTTP operations
//!
//! # Features
//!
//! - **Injectable transport**: Any [`Fetch`] implementation can stand in for the
//!   network, which is how the client is tested without a server
//! - **Schema validation**: Every response is checked against its payload schema,
//!   reporting the first offending field by path
//! - **Testnet support**: [`DirectoryClient::testnet`] targets `testcosmos.directory`
//!
//! # Example
//!
//! ```rust,no_run
//! use cosmos_directory::http::DirectoryClient;
//!
//! # async fn example() -> Result<(), anyhow::Error> {
//! let client = DirectoryClient::new()?;
//!
//! let status = client.fetch_status().await?;
//! for chain in status.available() {
//!     println!("{} is serving at height {:?}", chain.name, chain.height);
//! }
//! # Ok(())
//! # }
//! ```
//!
//! # Error Handling
//!
//! All operations return [`Result`] types with appropriate error information.
//! The [`HttpError`] enum provides specific error variants for different failure modes:
//!
//! - Network failures (connection refused, timeouts)
//! - Server errors (4xx/5xx responses)
//! - Malformed JSON and schema violations
//! - Endpoint URL errors

mod directory_client;
mod error;
mod fetch;

pub use directory_client::{ClientOptions, DEFAULT_PROTOCOL, DirectoryClient, MAINNET_DOMAIN, TESTNET_DOMAIN};
pub use error::HttpError;
pub use fetch::{Fetch, FetchOptions, ReqwestFetcher};
