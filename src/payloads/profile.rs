//! Validator profile and per-chain validator records shared by the
//! validators, validator and chain-validators documents.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::dsl::*;
use crate::schema::RegistryBuilder;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BondStatus {
    #[serde(rename = "BOND_STATUS_BONDED")]
    Bonded,
    #[serde(rename = "BOND_STATUS_UNBONDED")]
    Unbonded,
    #[serde(rename = "BOND_STATUS_UNBONDING")]
    Unbonding,
}

/// The only schema marker the validator registry publishes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ProfileSchema {
    #[serde(rename = "../profile.schema.json")]
    ProfileJson,
}

/// Self-declared identity of a validator operator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    #[serde(rename = "$schema", default, skip_serializing_if = "Option::is_none")]
    pub schema: Option<ProfileSchema>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub apps: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contacts: Option<Contacts>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<ProfileDescription>,
    pub identity: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub twitter: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contacts {
    pub discord: String,
    pub email: String,
    pub others: OtherContacts,
    pub telegram: String,
    pub telephone: String,
    pub twitter: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OtherContacts {
    pub emergency: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileDescription {
    pub overview: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub security: Option<String>,
    pub team: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// A product or tool an operator advertises alongside validation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Service {
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    pub title: String,
    pub url: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Delegations {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_count: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_tokens: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_tokens_display: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_usd: Option<f64>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// On-chain description set by the operator with `MsgEditValidator`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidatorDescription {
    pub details: String,
    pub identity: String,
    pub moniker: String,
    pub security_contact: String,
    pub website: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MissedBlocksPeriod {
    pub blocks: i64,
    pub missed: i64,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// When REStake runs: a single cron expression or a list of times.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RunTime {
    Many(Vec<String>),
    One(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Restake {
    pub address: String,
    pub minimum_reward: i64,
    pub run_time: RunTime,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Slash {
    pub fraction: String,
    pub validator_period: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Commission settings. The validators collection only reports `rate`.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Commission {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub commission_rates: Option<CommissionRates>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rate: Option<f64>,
    /// `Some(None)` is an explicit `null`, which the chain validator set allows.
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "crate::utils::timestamp::optional_nullable"
    )]
    pub update_time: Option<Option<DateTime<Utc>>>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommissionRates {
    pub max_change_rate: String,
    pub max_rate: String,
    pub rate: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PubKeyType {
    #[serde(rename = "/cosmos.crypto.ed25519.PubKey")]
    Ed25519,
    #[serde(rename = "/cosmos.crypto.secp256k1.PubKey")]
    Secp256k1,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConsensusPubkey {
    #[serde(rename = "@type")]
    pub key_type: PubKeyType,
    pub key: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Public infrastructure an operator runs for a chain, keyed by API kind.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PublicNodes {
    #[serde(rename = "evm-http-jsonrpc", default, skip_serializing_if = "Option::is_none")]
    pub evm_http_jsonrpc: Option<Vec<PublicNode>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub grpc: Option<Vec<PublicNode>>,
    #[serde(rename = "grpc-web", default, skip_serializing_if = "Option::is_none")]
    pub grpc_web: Option<Vec<PublicNode>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rest: Option<Vec<PublicNode>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rpc: Option<Vec<PublicNode>>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PublicNode {
    pub address: String,
    pub provider: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidatorServices {
    pub staking_rewards: VerifiedStakingRewards,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VerifiedStakingRewards {
    pub name: String,
    pub slug: String,
    pub verified: bool,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SigningInfo {
    pub address: String,
    pub index_offset: String,
    #[serde(with = "crate::utils::timestamp::nullable")]
    pub jailed_until: Option<DateTime<Utc>>,
    pub missed_blocks_counter: String,
    pub start_height: String,
    pub tombstoned: bool,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UptimePeriod {
    pub blocks: i64,
    pub uptime: f64,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

pub(crate) fn bond_status() -> TypeDescriptor {
    literal(&["BOND_STATUS_BONDED", "BOND_STATUS_UNBONDED", "BOND_STATUS_UNBONDING"])
}

pub(crate) fn profile() -> TypeDescriptor {
    record()
        .optional("$schema", reference("ProfileSchema"))
        .optional("apps", list(string()))
        .optional("contacts", reference("Contacts"))
        .optional("description", reference("ProfileDescription"))
        .required("identity", string())
        .required("name", string())
        .optional("twitter", string())
        .optional("website", string())
        .build()
}

pub(crate) fn contacts() -> TypeDescriptor {
    record()
        .required("discord", string())
        .required("email", string())
        .required("others", reference("OtherContacts"))
        .required("telegram", string())
        .required("telephone", string())
        .required("twitter", string())
        .build()
}

pub(crate) fn other_contacts() -> TypeDescriptor {
    record().required("emergency", string()).build()
}

pub(crate) fn profile_description() -> TypeDescriptor {
    record()
        .required("overview", string())
        .optional("security", string())
        .required("team", string())
        .build()
}

pub(crate) fn service() -> TypeDescriptor {
    record()
        .required("description", string())
        .optional("image", string())
        .required("title", string())
        .required("url", string())
        .build()
}

pub(crate) fn delegations() -> TypeDescriptor {
    record()
        .optional("total_count", integer())
        .optional("total_tokens", string())
        .optional("total_tokens_display", number())
        .optional("total_usd", number())
        .build()
}

pub(crate) fn validator_description() -> TypeDescriptor {
    record()
        .required("details", string())
        .required("identity", string())
        .required("moniker", string())
        .required("security_contact", string())
        .required("website", string())
        .build()
}

pub(crate) fn missed_blocks_period() -> TypeDescriptor {
    record()
        .required("blocks", integer())
        .required("missed", integer())
        .build()
}

pub(crate) fn restake() -> TypeDescriptor {
    record()
        .required("address", string())
        .required("minimum_reward", integer())
        .required("run_time", TypeDescriptor::union([list(string()), string()]))
        .build()
}

pub(crate) fn slash() -> TypeDescriptor {
    record()
        .required("fraction", string())
        .required("validator_period", string())
        .build()
}

/// The collection-level commission summary: only the rate.
pub(crate) fn commission_summary() -> TypeDescriptor {
    record().required("rate", number()).build()
}

pub(crate) fn commission(all_required: bool) -> TypeDescriptor {
    let fields = [
        ("commission_rates", reference("CommissionRates")),
        ("rate", number()),
        ("update_time", temporal()),
    ];
    fields
        .into_iter()
        .fold(record(), |builder, (key, descriptor)| {
            if all_required {
                builder.required(key, descriptor)
            } else {
                builder.optional(key, descriptor)
            }
        })
        .build()
}

pub(crate) fn commission_rates() -> TypeDescriptor {
    record()
        .required("max_change_rate", string())
        .required("max_rate", string())
        .required("rate", string())
        .build()
}

pub(crate) fn consensus_pubkey() -> TypeDescriptor {
    record()
        .required("@type", reference("PubKeyType"))
        .required("key", string())
        .build()
}

pub(crate) fn pub_key_type() -> TypeDescriptor {
    literal(&["/cosmos.crypto.ed25519.PubKey", "/cosmos.crypto.secp256k1.PubKey"])
}

pub(crate) fn public_nodes() -> TypeDescriptor {
    ["evm-http-jsonrpc", "grpc", "grpc-web", "rest", "rpc"]
        .into_iter()
        .fold(record(), |builder, key| builder.optional(key, list(reference("PublicNode"))))
        .build()
}

pub(crate) fn public_node() -> TypeDescriptor {
    record()
        .required("address", string())
        .required("provider", string())
        .build()
}

pub(crate) fn validator_services() -> TypeDescriptor {
    record()
        .required("staking_rewards", reference("VerifiedStakingRewards"))
        .build()
}

pub(crate) fn verified_staking_rewards() -> TypeDescriptor {
    record()
        .required("name", string())
        .required("slug", string())
        .required("verified", boolean())
        .build()
}

pub(crate) fn signing_info() -> TypeDescriptor {
    record()
        .required("address", string())
        .required("index_offset", string())
        .required("jailed_until", temporal())
        .required("missed_blocks_counter", string())
        .required("start_height", string())
        .required("tombstoned", boolean())
        .build()
}

pub(crate) fn uptime_period() -> TypeDescriptor {
    record()
        .required("blocks", integer())
        .required("uptime", number())
        .build()
}

/// Registers the operator profile definitions.
pub(crate) fn define_profile(builder: RegistryBuilder) -> RegistryBuilder {
    builder
        .define("Profile", profile())
        .define("ProfileSchema", literal(&["../profile.schema.json"]))
        .define("Contacts", contacts())
        .define("OtherContacts", other_contacts())
        .define("ProfileDescription", profile_description())
        .define("Service", service())
}

/// Registers the per-chain definitions the validators collection reports,
/// apart from `Commission` whose shape differs per document.
pub(crate) fn define_chain_summary(builder: RegistryBuilder) -> RegistryBuilder {
    builder
        .define("BondStatus", bond_status())
        .define("Delegations", delegations())
        .define("ValidatorDescription", validator_description())
        .define("MissedBlocksPeriod", missed_blocks_period())
        .define("Restake", restake())
        .define("Slash", slash())
}

/// Registers the full description of a validator's standing on one chain,
/// again apart from `Commission`.
pub(crate) fn define_chain_standing(builder: RegistryBuilder) -> RegistryBuilder {
    define_chain_summary(builder)
        .define("CommissionRates", commission_rates())
        .define("ConsensusPubkey", consensus_pubkey())
        .define("PubKeyType", pub_key_type())
        .define("PublicNodes", public_nodes())
        .define("PublicNode", public_node())
        .define("ValidatorServices", validator_services())
        .define("VerifiedStakingRewards", verified_staking_rewards())
        .define("SigningInfo", signing_info())
        .define("UptimePeriod", uptime_period())
}
