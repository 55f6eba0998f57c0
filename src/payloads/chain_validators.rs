//! `GET {validators}/chains/{path}` : the active and inactive validator set of
//! one chain.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::dsl::*;
use super::profile::{
    BondStatus, Commission, ConsensusPubkey, Delegations, MissedBlocksPeriod, PublicNodes, Restake, SigningInfo, Slash,
    UptimePeriod, ValidatorDescription, ValidatorServices, commission, define_chain_standing,
};
use super::{Payload, PayloadKind};
use crate::schema::{RegistryBuilder, SchemaRegistry};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChainValidators {
    pub name: String,
    pub validators: Vec<ChainValidator>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Payload for ChainValidators {
    const KIND: PayloadKind = PayloadKind::ChainValidators;
}

impl ChainValidators {
    /// Validators in the active set, ordered by rank.
    pub fn active(&self) -> Vec<&ChainValidator> {
        let mut active: Vec<_> = self.validators.iter().filter(|validator| validator.active).collect();
        active.sort_by_key(|validator| validator.rank);
        active
    }

    pub fn by_operator(&self, operator_address: &str) -> Option<&ChainValidator> {
        self.validators
            .iter()
            .find(|validator| validator.operator_address == operator_address)
    }
}

/// A validator as seen from the chain, straight from the staking module
/// with directory enrichments.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChainValidator {
    pub active: bool,
    pub address: String,
    pub commission: Commission,
    pub consensus_pubkey: ConsensusPubkey,
    pub delegations: Delegations,
    pub delegator_shares: String,
    pub description: ValidatorDescription,
    pub hex_address: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub identity: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    pub jailed: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub keybase_image: Option<String>,
    pub min_self_delegation: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mintscan_image: Option<String>,
    pub missed_blocks: i64,
    pub missed_blocks_periods: Vec<MissedBlocksPeriod>,
    pub moniker: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub operator_address: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub public_nodes: Option<PublicNodes>,
    pub rank: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub restake: Option<Restake>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub services: Option<ValidatorServices>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub signing_info: Option<SigningInfo>,
    #[serde(default, skip_serializing_if = "Option::is_none", with = "crate::utils::double_option")]
    pub slashes: Option<Option<Vec<Slash>>>,
    pub status: BondStatus,
    pub tokens: String,
    pub unbonding_height: String,
    #[serde(with = "crate::utils::timestamp::nullable")]
    pub unbonding_time: Option<DateTime<Utc>>,
    pub uptime: f64,
    pub uptime_periods: Vec<UptimePeriod>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

fn chain_validator() -> TypeDescriptor {
    record()
        .required("active", boolean())
        .required("address", string())
        .required("commission", reference("Commission"))
        .required("consensus_pubkey", reference("ConsensusPubkey"))
        .required("delegations", reference("Delegations"))
        .required("delegator_shares", string())
        .required("description", reference("ValidatorDescription"))
        .required("hex_address", string())
        .optional("identity", string())
        .optional("image", string())
        .required("jailed", boolean())
        .optional("keybase_image", string())
        .required("min_self_delegation", string())
        .optional("mintscan_image", string())
        .required("missed_blocks", integer())
        .required("missed_blocks_periods", list(reference("MissedBlocksPeriod")))
        .required("moniker", string())
        .optional("name", string())
        .required("operator_address", string())
        .optional("path", string())
        .optional("public_nodes", reference("PublicNodes"))
        .required("rank", integer())
        .optional("restake", reference("Restake"))
        .optional("services", reference("ValidatorServices"))
        .optional("signing_info", reference("SigningInfo"))
        .optional("slashes", nullable(list(reference("Slash"))))
        .required("status", reference("BondStatus"))
        .required("tokens", string())
        .required("unbonding_height", string())
        .required("unbonding_time", temporal())
        .required("uptime", number())
        .required("uptime_periods", list(reference("UptimePeriod")))
        .build()
}

pub(crate) fn schema() -> RegistryBuilder {
    let builder = SchemaRegistry::builder("ChainValidators")
        .define(
            "ChainValidators",
            record()
                .required("name", string())
                .required("validators", list(reference("ChainValidator")))
                .build(),
        )
        .define("ChainValidator", chain_validator())
        .define("Commission", commission(true));
    define_chain_standing(builder)
}
