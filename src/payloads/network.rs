//! Chain metadata shared by the chains, chain and status documents.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::dsl::*;
use crate::schema::RegistryBuilder;

/// A public REST, gRPC or EVM endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiEndpoint {
    pub address: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub provider: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// A public Tendermint RPC endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RpcEndpoint {
    pub address: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub archive: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub provider: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Endpoints the directory currently ranks as healthiest.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BestApis {
    pub rest: Vec<ApiEndpoint>,
    pub rpc: Vec<RpcEndpoint>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NetworkType {
    Mainnet,
    Testnet,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChainStatus {
    Killed,
    Live,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DenomUnit {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub aliases: Option<Vec<String>>,
    pub denom: String,
    pub exponent: i64,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct AssetLogoUris {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub jpeg: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub png: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub svg: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CoingeckoPrice {
    pub usd: f64,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssetPrices {
    pub coingecko: CoingeckoPrice,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Asset {
    pub base: DenomUnit,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub coingecko_id: Option<String>,
    pub decimals: i64,
    pub denom: String,
    pub denom_units: Vec<DenomUnit>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display: Option<DenomUnit>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(rename = "logo_URIs", default, skip_serializing_if = "Option::is_none")]
    pub logo_uris: Option<AssetLogoUris>,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prices: Option<AssetPrices>,
    pub symbol: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Explorer {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub account_page: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tx_page: Option<String>,
    pub url: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Staking and inflation parameters as aggregated by the directory.
///
/// The APR and bonded ratio keys may be absent or `null`; the outer `Option`
/// tells the two apart. The chains collection requires `calculated_apr`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NetworkParams {
    pub actual_block_time: f64,
    pub actual_blocks_per_year: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub annual_provision: Option<String>,
    pub authz: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base_inflation: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub block_time: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub blocks_per_year: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none", with = "crate::utils::double_option")]
    pub bonded_ratio: Option<Option<f64>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bonded_tokens: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none", with = "crate::utils::double_option")]
    pub calculated_apr: Option<Option<f64>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub community_tax: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub distribution: Option<Distribution>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub epoch_duration: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none", with = "crate::utils::double_option")]
    pub estimated_apr: Option<Option<f64>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub inflation: Option<Inflation>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_validators: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mint: Option<Mint>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub minting_epoch_provision: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub slashing: Option<Slashing>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub staking: Option<StakingParams>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_supply: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unbonding_time: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub year_minting_provision: Option<i64>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Distribution {
    pub base_proposer_reward: String,
    pub bonus_proposer_reward: String,
    pub community_tax: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub liquidity_provider_reward: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub secret_foundation_address: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub secret_foundation_tax: Option<String>,
    pub withdraw_addr_enabled: bool,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Inflation {
    pub enable_inflation: bool,
    pub exponential_calculation: ExponentialCalculation,
    pub inflation_distribution: InflationDistribution,
    pub mint_denom: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExponentialCalculation {
    pub a: String,
    pub bonding_target: String,
    pub c: String,
    pub max_variance: String,
    pub r: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InflationDistribution {
    pub community_pool: String,
    pub staking_rewards: String,
    pub usage_incentives: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Mint {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub blocks_per_year: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub distribution_proportions: Option<DistributionProportions>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub epoch_identifier: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub genesis_epoch_provisions: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub goal_bonded: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub inflation_max: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub inflation_min: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub inflation_rate: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub inflation_rate_change: Option<String>,
    pub mint_denom: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub minting_rewards_distribution_start_epoch: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reduction_factor: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reduction_period_in_epochs: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weighted_developer_rewards_receivers: Option<Vec<WeightedDeveloperRewardsReceiver>>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DistributionProportions {
    pub community_pool: String,
    pub developer_rewards: String,
    pub pool_incentives: String,
    pub staking: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeightedDeveloperRewardsReceiver {
    pub address: String,
    pub weight: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Slashing {
    pub downtime_jail_duration: String,
    pub min_signed_per_window: String,
    pub signed_blocks_window: String,
    pub slash_fraction_double_sign: String,
    pub slash_fraction_downtime: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StakingParams {
    pub bond_denom: String,
    pub historical_entries: i64,
    pub max_entries: i64,
    pub max_validators: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_commission_rate: Option<String>,
    pub unbonding_time: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Prices keyed by asset denom.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChainPrices {
    pub coingecko: BTreeMap<String, CoingeckoPrice>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ChainServices {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub staking_rewards: Option<StakingRewardsListing>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StakingRewardsListing {
    pub name: String,
    pub slug: String,
    pub symbol: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

pub(crate) fn api_endpoint() -> TypeDescriptor {
    record()
        .required("address", string())
        .optional("provider", string())
        .build()
}

pub(crate) fn rpc_endpoint() -> TypeDescriptor {
    record()
        .required("address", string())
        .optional("archive", boolean())
        .optional("provider", string())
        .build()
}

pub(crate) fn best_apis() -> TypeDescriptor {
    record()
        .required("rest", list(reference("ApiEndpoint")))
        .required("rpc", list(reference("RpcEndpoint")))
        .build()
}

pub(crate) fn chain_status() -> TypeDescriptor {
    literal(&["killed", "live"])
}

pub(crate) fn denom_unit() -> TypeDescriptor {
    record()
        .optional("aliases", list(string()))
        .required("denom", string())
        .required("exponent", integer())
        .build()
}

/// The chains collection only ever advertises `png` and `svg` logos.
pub(crate) fn asset_logo_uris(with_jpeg: bool) -> TypeDescriptor {
    let builder = if with_jpeg {
        record().optional("jpeg", string())
    } else {
        record()
    };
    builder
        .optional("png", string())
        .optional("svg", string())
        .build()
}

pub(crate) fn coingecko_price() -> TypeDescriptor {
    record().required("usd", number()).build()
}

pub(crate) fn asset_prices() -> TypeDescriptor {
    record().required("coingecko", reference("CoingeckoPrice")).build()
}

pub(crate) fn asset() -> TypeDescriptor {
    record()
        .required("base", reference("DenomUnit"))
        .optional("coingecko_id", string())
        .required("decimals", integer())
        .required("denom", string())
        .required("denom_units", list(reference("DenomUnit")))
        .optional("description", string())
        .optional("display", reference("DenomUnit"))
        .optional("image", string())
        .optional("logo_URIs", reference("AssetLogoUris"))
        .required("name", string())
        .optional("prices", reference("AssetPrices"))
        .required("symbol", string())
        .build()
}

pub(crate) fn explorer() -> TypeDescriptor {
    record()
        .optional("account_page", string())
        .optional("kind", string())
        .optional("name", string())
        .optional("tx_page", string())
        .required("url", string())
        .build()
}

/// `calculated_apr` is mandatory in the chains collection and optional on a
/// single chain.
pub(crate) fn network_params(calculated_apr_required: bool) -> TypeDescriptor {
    let builder = record()
        .required("actual_block_time", number())
        .required("actual_blocks_per_year", number())
        .optional("annual_provision", string())
        .required("authz", boolean())
        .optional("base_inflation", number())
        .optional("block_time", number())
        .optional("blocks_per_year", integer())
        .optional("bonded_ratio", nullable(number()))
        .optional("bonded_tokens", string());
    let builder = if calculated_apr_required {
        builder.required("calculated_apr", nullable(number()))
    } else {
        builder.optional("calculated_apr", nullable(number()))
    };
    builder
        .optional("community_tax", number())
        .optional("distribution", reference("Distribution"))
        .optional("epoch_duration", integer())
        .optional("estimated_apr", nullable(number()))
        .optional("inflation", reference("Inflation"))
        .optional("max_validators", integer())
        .optional("mint", reference("Mint"))
        .optional("minting_epoch_provision", number())
        .optional("slashing", reference("Slashing"))
        .optional("staking", reference("StakingParams"))
        .optional("total_supply", string())
        .optional("unbonding_time", integer())
        .optional("year_minting_provision", integer())
        .build()
}

pub(crate) fn distribution() -> TypeDescriptor {
    record()
        .required("base_proposer_reward", string())
        .required("bonus_proposer_reward", string())
        .required("community_tax", string())
        .optional("liquidity_provider_reward", string())
        .optional("secret_foundation_address", string())
        .optional("secret_foundation_tax", string())
        .required("withdraw_addr_enabled", boolean())
        .build()
}

pub(crate) fn inflation() -> TypeDescriptor {
    record()
        .required("enable_inflation", boolean())
        .required("exponential_calculation", reference("ExponentialCalculation"))
        .required("inflation_distribution", reference("InflationDistribution"))
        .required("mint_denom", string())
        .build()
}

pub(crate) fn exponential_calculation() -> TypeDescriptor {
    record()
        .required("a", string())
        .required("bonding_target", string())
        .required("c", string())
        .required("max_variance", string())
        .required("r", string())
        .build()
}

pub(crate) fn inflation_distribution() -> TypeDescriptor {
    record()
        .required("community_pool", string())
        .required("staking_rewards", string())
        .required("usage_incentives", string())
        .build()
}

pub(crate) fn mint() -> TypeDescriptor {
    record()
        .optional("blocks_per_year", string())
        .optional("distribution_proportions", reference("DistributionProportions"))
        .optional("epoch_identifier", string())
        .optional("genesis_epoch_provisions", string())
        .optional("goal_bonded", string())
        .optional("inflation_max", string())
        .optional("inflation_min", string())
        .optional("inflation_rate", string())
        .optional("inflation_rate_change", string())
        .required("mint_denom", string())
        .optional("minting_rewards_distribution_start_epoch", string())
        .optional("reduction_factor", string())
        .optional("reduction_period_in_epochs", string())
        .optional(
            "weighted_developer_rewards_receivers",
            list(reference("WeightedDeveloperRewardsReceiver")),
        )
        .build()
}

pub(crate) fn distribution_proportions() -> TypeDescriptor {
    record()
        .required("community_pool", string())
        .required("developer_rewards", string())
        .required("pool_incentives", string())
        .required("staking", string())
        .build()
}

pub(crate) fn weighted_developer_rewards_receiver() -> TypeDescriptor {
    record()
        .required("address", string())
        .required("weight", string())
        .build()
}

pub(crate) fn slashing() -> TypeDescriptor {
    record()
        .required("downtime_jail_duration", string())
        .required("min_signed_per_window", string())
        .required("signed_blocks_window", string())
        .required("slash_fraction_double_sign", string())
        .required("slash_fraction_downtime", string())
        .build()
}

pub(crate) fn staking_params() -> TypeDescriptor {
    record()
        .required("bond_denom", string())
        .required("historical_entries", integer())
        .required("max_entries", integer())
        .required("max_validators", integer())
        .optional("min_commission_rate", string())
        .required("unbonding_time", string())
        .build()
}

pub(crate) fn chain_prices() -> TypeDescriptor {
    record()
        .required("coingecko", map(reference("CoingeckoPrice")))
        .build()
}

pub(crate) fn chain_services() -> TypeDescriptor {
    record()
        .optional("staking_rewards", reference("StakingRewardsListing"))
        .build()
}

pub(crate) fn staking_rewards_listing() -> TypeDescriptor {
    record()
        .required("name", string())
        .required("slug", string())
        .required("symbol", string())
        .build()
}

/// Registers the parameter, asset and pricing definitions used by both the
/// chains collection and the single-chain document.
pub(crate) fn define_chain_metadata(builder: RegistryBuilder, detailed: bool) -> RegistryBuilder {
    builder
        .define("ApiEndpoint", api_endpoint())
        .define("RpcEndpoint", rpc_endpoint())
        .define("BestApis", best_apis())
        .define("ChainStatus", chain_status())
        .define("Asset", asset())
        .define("DenomUnit", denom_unit())
        .define("AssetLogoUris", asset_logo_uris(detailed))
        .define("AssetPrices", asset_prices())
        .define("CoingeckoPrice", coingecko_price())
        .define("Explorer", explorer())
        .define("NetworkParams", network_params(!detailed))
        .define("Distribution", distribution())
        .define("Inflation", inflation())
        .define("ExponentialCalculation", exponential_calculation())
        .define("InflationDistribution", inflation_distribution())
        .define("Mint", mint())
        .define("DistributionProportions", distribution_proportions())
        .define("WeightedDeveloperRewardsReceiver", weighted_developer_rewards_receiver())
        .define("Slashing", slashing())
        .define("StakingParams", staking_params())
        .define("ChainPrices", chain_prices())
        .define("ChainServices", chain_services())
        .define("StakingRewardsListing", staking_rewards_listing())
}
