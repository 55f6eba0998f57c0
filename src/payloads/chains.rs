//! `GET {chains}/` : every chain the directory tracks.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::dsl::*;
use super::network::{
    Asset, BestApis, ChainPrices, ChainServices, ChainStatus, Explorer, NetworkParams, NetworkType, define_chain_metadata,
};
use super::{Payload, PayloadKind, Repository, repository};
use crate::schema::{RegistryBuilder, SchemaRegistry};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DirectoryChains {
    pub chains: Vec<ChainSummary>,
    pub repository: Repository,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Payload for DirectoryChains {
    const KIND: PayloadKind = PayloadKind::Chains;
}

/// One entry of the chains collection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChainSummary {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub assets: Option<Vec<Asset>>,
    pub best_apis: BestApis,
    pub chain_id: String,
    pub chain_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub coingecko_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub decimals: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub denom: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub explorers: Option<Vec<Explorer>>,
    pub height: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    pub name: String,
    pub network_type: NetworkType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub params: Option<NetworkParams>,
    pub path: String,
    pub pretty_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prices: Option<ChainPrices>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub services: Option<ChainServices>,
    pub status: ChainStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub symbol: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl DirectoryChains {
    pub fn find(&self, path: &str) -> Option<&ChainSummary> {
        self.chains.iter().find(|chain| chain.path == path)
    }
}

fn chain_summary() -> TypeDescriptor {
    record()
        .optional("assets", list(reference("Asset")))
        .required("best_apis", reference("BestApis"))
        .required("chain_id", string())
        .required("chain_name", string())
        .optional("coingecko_id", string())
        .optional("decimals", integer())
        .optional("denom", string())
        .optional("display", string())
        .optional("explorers", list(reference("Explorer")))
        .required("height", nullable(integer()))
        .optional("image", string())
        .required("name", string())
        .required("network_type", reference("NetworkType"))
        .optional("params", reference("NetworkParams"))
        .required("path", string())
        .required("pretty_name", string())
        .optional("prices", reference("ChainPrices"))
        .optional("services", reference("ChainServices"))
        .required("status", reference("ChainStatus"))
        .optional("symbol", string())
        .build()
}

pub(crate) fn schema() -> RegistryBuilder {
    let builder = SchemaRegistry::builder("DirectoryChains")
        .define(
            "DirectoryChains",
            record()
                .required("chains", list(reference("ChainSummary")))
                .required("repository", reference("Repository"))
                .build(),
        )
        .define("ChainSummary", chain_summary())
        .define("Repository", repository())
        // The collection has only ever listed mainnets.
        .define("NetworkType", literal(&["mainnet"]));
    define_chain_metadata(builder, false)
}
