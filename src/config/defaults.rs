use std::collections::BTreeMap;
use std::fmt::{self, Display};
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::cli::{ApplyArgs, ConnectionArgs};
use crate::http::{ClientOptions, DEFAULT_PROTOCOL, FetchOptions, MAINNET_DOMAIN, TESTNET_DOMAIN};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Network {
    #[default]
    Mainnet,
    Testnet,
}

impl Network {
    pub fn domain(self) -> &'static str {
        match self {
            Network::Mainnet => MAINNET_DOMAIN,
            Network::Testnet => TESTNET_DOMAIN,
        }
    }
}

impl Display for Network {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Network::Mainnet => write!(f, "mainnet"),
            Network::Testnet => write!(f, "testnet"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct DirectoryConfig {
    pub network: Network,
    pub protocol: String,
    /// Takes precedence over the domain implied by `network`.
    pub domain: Option<String>,
    pub chains_endpoint: Option<String>,
    pub status_endpoint: Option<String>,
    pub validators_endpoint: Option<String>,
    pub timeout_secs: Option<u64>,
    pub headers: BTreeMap<String, String>,
    pub validate: bool,
}

impl Default for DirectoryConfig {
    fn default() -> Self {
        Self {
            network: Network::Mainnet,
            protocol: DEFAULT_PROTOCOL.to_string(),
            domain: None,
            chains_endpoint: None,
            status_endpoint: None,
            validators_endpoint: None,
            timeout_secs: Some(30),
            headers: BTreeMap::new(),
            validate: true,
        }
    }
}

impl DirectoryConfig {
    pub fn domain(&self) -> &str {
        self.domain.as_deref().unwrap_or(self.network.domain())
    }

    pub fn to_client_options(&self) -> ClientOptions {
        let mut fetch_options = self
            .headers
            .iter()
            .fold(FetchOptions::default(), |options, (name, value)| {
                options.with_header(name, value)
            });
        if let Some(secs) = self.timeout_secs {
            fetch_options = fetch_options.with_timeout(Duration::from_secs(secs));
        }

        ClientOptions {
            protocol: self.protocol.clone(),
            domain: Some(self.domain().to_string()),
            chains_endpoint: self.chains_endpoint.clone(),
            status_endpoint: self.status_endpoint.clone(),
            validators_endpoint: self.validators_endpoint.clone(),
            fetch_options,
            validate: self.validate,
        }
    }
}

impl ApplyArgs for DirectoryConfig {
    fn apply_connection(&mut self, args: &ConnectionArgs) {
        if let Some(network) = args.network {
            self.network = network;
        }
        if let Some(domain) = &args.domain {
            self.domain = Some(domain.clone());
        }
        if let Some(protocol) = &args.protocol {
            self.protocol = protocol.clone();
        }
        if args.no_validate {
            self.validate = false;
        }
    }
}
