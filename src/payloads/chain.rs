//! `GET {chains}/{path}` : the full chain-registry entry for one chain,
//! enriched with live parameters and prices.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::dsl::*;
use super::network::{
    ApiEndpoint, Asset, BestApis, ChainPrices, ChainServices, ChainStatus, Explorer, NetworkParams, NetworkType,
    RpcEndpoint, define_chain_metadata,
};
use super::{Payload, PayloadKind, Repository, repository};
use crate::schema::{RegistryBuilder, SchemaRegistry};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DirectoryChain {
    pub chain: ChainDetail,
    pub repository: Repository,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Payload for DirectoryChain {
    const KIND: PayloadKind = PayloadKind::Chain;
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChainDetail {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub apis: Option<Apis>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub assets: Option<Vec<Asset>>,
    pub bech32_prefix: String,
    pub best_apis: BestApis,
    pub chain_id: String,
    pub chain_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub codebase: Option<Codebase>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub coingecko_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub daemon_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub decimals: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub denom: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub explorers: Option<Vec<Explorer>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fees: Option<Fees>,
    pub genesis: Genesis,
    pub height: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub key_algos: Option<Vec<KeyAlgo>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub keywords: Option<Vec<String>>,
    #[serde(rename = "logo_URIs", default, skip_serializing_if = "Option::is_none")]
    pub logo_uris: Option<ChainLogoUris>,
    pub name: String,
    pub network_type: NetworkType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub node_home: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub params: Option<NetworkParams>,
    pub path: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub peers: Option<Peers>,
    pub pretty_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prices: Option<ChainPrices>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub services: Option<ChainServices>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub slip44: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub staking: Option<ChainStaking>,
    pub status: ChainStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub symbol: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updatelink: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Every endpoint the chain registry lists, grouped by API kind.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Apis {
    #[serde(rename = "evm-http-jsonrpc", default, skip_serializing_if = "Option::is_none")]
    pub evm_http_jsonrpc: Option<Vec<ApiEndpoint>>,
    #[serde(rename = "evm-jsonrpc", default, skip_serializing_if = "Option::is_none")]
    pub evm_jsonrpc: Option<Vec<ApiEndpoint>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub grpc: Option<Vec<ApiEndpoint>>,
    #[serde(rename = "grpc-web", default, skip_serializing_if = "Option::is_none")]
    pub grpc_web: Option<Vec<ApiEndpoint>>,
    pub rest: Vec<ApiEndpoint>,
    pub rpc: Vec<RpcEndpoint>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sidechains_rpc: Option<Vec<ApiEndpoint>>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Codebase {
    /// Download URLs keyed by `os/arch`, e.g. `linux/amd64`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub binaries: Option<BTreeMap<String, String>>,
    pub compatible_versions: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cosmos_sdk_version: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cosmwasm_enabled: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cosmwasm_version: Option<String>,
    pub git_repo: String,
    pub recommended_version: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tendermint_version: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Fees {
    pub fee_tokens: Vec<FeeToken>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeeToken {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub average_gas_price: Option<f64>,
    pub denom: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fixed_min_gas_price: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub high_gas_price: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub low_gas_price: Option<f64>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Genesis {
    pub genesis_url: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum KeyAlgo {
    Ed25519,
    Ethsecp256k1,
    Secp256k1,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChainLogoUris {
    pub png: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub svg: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Peers {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub persistent_peers: Option<Vec<Peer>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seeds: Option<Vec<Peer>>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Peer {
    pub address: String,
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub provider: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChainStaking {
    pub staking_tokens: Vec<StakingToken>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StakingToken {
    pub denom: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

const BINARY_PLATFORMS: [&str; 7] = [
    "darwin/amd64",
    "darwin/arm64",
    "linux/amd64",
    "linux/arm64",
    "linux/armv6",
    "windows/amd64",
    "windows/arm64",
];

fn chain_detail() -> TypeDescriptor {
    record()
        .optional("apis", reference("Apis"))
        .optional("assets", list(reference("Asset")))
        .required("bech32_prefix", string())
        .required("best_apis", reference("BestApis"))
        .required("chain_id", string())
        .required("chain_name", string())
        .optional("codebase", reference("Codebase"))
        .optional("coingecko_id", string())
        .optional("daemon_name", string())
        .optional("decimals", integer())
        .optional("denom", string())
        .optional("display", string())
        .optional("explorers", list(reference("Explorer")))
        .optional("fees", reference("Fees"))
        .required("genesis", reference("Genesis"))
        .required("height", nullable(integer()))
        .optional("image", string())
        .optional("key_algos", list(reference("KeyAlgo")))
        .optional("keywords", list(string()))
        .optional("logo_URIs", reference("ChainLogoUris"))
        .required("name", string())
        .required("network_type", reference("NetworkType"))
        .optional("node_home", string())
        .optional("params", reference("NetworkParams"))
        .required("path", string())
        .optional("peers", reference("Peers"))
        .required("pretty_name", string())
        .optional("prices", reference("ChainPrices"))
        .optional("services", reference("ChainServices"))
        .optional("slip44", integer())
        .optional("staking", reference("ChainStaking"))
        .required("status", reference("ChainStatus"))
        .optional("symbol", string())
        .optional("updatelink", string())
        .build()
}

fn apis() -> TypeDescriptor {
    let endpoints = || list(reference("ApiEndpoint"));
    record()
        .optional("evm-http-jsonrpc", endpoints())
        .optional("evm-jsonrpc", endpoints())
        .optional("grpc", endpoints())
        .optional("grpc-web", endpoints())
        .required("rest", endpoints())
        .required("rpc", list(reference("RpcEndpoint")))
        .optional("sidechains_rpc", endpoints())
        .build()
}

fn codebase() -> TypeDescriptor {
    record()
        .optional("binaries", reference("Binaries"))
        .required("compatible_versions", list(string()))
        .optional("cosmos_sdk_version", string())
        .optional("cosmwasm_enabled", boolean())
        .optional("cosmwasm_version", string())
        .required("git_repo", string())
        .required("recommended_version", string())
        .optional("tendermint_version", string())
        .build()
}

fn binaries() -> TypeDescriptor {
    BINARY_PLATFORMS
        .into_iter()
        .fold(record(), |builder, platform| builder.optional(platform, string()))
        .build()
}

fn fee_token() -> TypeDescriptor {
    record()
        .optional("average_gas_price", number())
        .required("denom", string())
        .optional("fixed_min_gas_price", number())
        .optional("high_gas_price", number())
        .optional("low_gas_price", number())
        .build()
}

fn peer() -> TypeDescriptor {
    record()
        .required("address", string())
        .required("id", string())
        .optional("provider", string())
        .build()
}

pub(crate) fn schema() -> RegistryBuilder {
    let builder = SchemaRegistry::builder("DirectoryChain")
        .define(
            "DirectoryChain",
            record()
                .required("chain", reference("ChainDetail"))
                .required("repository", reference("Repository"))
                .build(),
        )
        .define("ChainDetail", chain_detail())
        .define("Repository", repository())
        .define("NetworkType", literal(&["mainnet", "testnet"]))
        .define("Apis", apis())
        .define("Codebase", codebase())
        .define("Binaries", binaries())
        .define("Fees", record().required("fee_tokens", list(reference("FeeToken"))).build())
        .define("FeeToken", fee_token())
        .define("Genesis", record().required("genesis_url", string()).build())
        .define("KeyAlgo", literal(&["ed25519", "ethsecp256k1", "secp256k1"]))
        .define(
            "ChainLogoUris",
            record()
                .required("png", string())
                .optional("svg", string())
                .build(),
        )
        .define(
            "Peers",
            record()
                .optional("persistent_peers", list(reference("Peer")))
                .optional("seeds", list(reference("Peer")))
                .build(),
        )
        .define("Peer", peer())
        .define(
            "ChainStaking",
            record()
                .required("staking_tokens", list(reference("StakingToken")))
                .build(),
        )
        .define("StakingToken", record().required("denom", string()).build());
    define_chain_metadata(builder, true)
}
