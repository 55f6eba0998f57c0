//! `GET {validators}/` : every validator operator in the validator registry
//! and the chains each one validates.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::dsl::*;
use super::profile::{
    BondStatus, Commission, ConsensusPubkey, Delegations, MissedBlocksPeriod, Profile, PublicNodes, Restake, Service,
    SigningInfo, Slash, UptimePeriod, ValidatorDescription, ValidatorServices, commission_summary, define_chain_summary,
    define_profile,
};
use super::{Payload, PayloadKind, Repository, repository};
use crate::schema::{RegistryBuilder, SchemaRegistry};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DirectoryValidators {
    pub repository: Repository,
    pub validators: Vec<Validator>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Payload for DirectoryValidators {
    const KIND: PayloadKind = PayloadKind::Validators;
}

impl DirectoryValidators {
    pub fn find(&self, path: &str) -> Option<&Validator> {
        self.validators.iter().find(|validator| validator.path == path)
    }
}

/// A validator operator and its presence across chains.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Validator {
    pub chains: Vec<ValidatorChain>,
    pub identity: String,
    pub name: String,
    pub path: String,
    pub profile: Profile,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub services: Option<Vec<Service>>,
    pub total_usd: f64,
    pub total_users: i64,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Validator {
    pub fn chain(&self, name: &str) -> Option<&ValidatorChain> {
        self.chains.iter().find(|chain| chain.name == name)
    }
}

/// A validator's standing on one chain.
///
/// The collection reports a subset of these fields; the single-validator
/// document fills in the rest.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValidatorChain {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub active: Option<bool>,
    pub address: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub commission: Option<Commission>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub consensus_pubkey: Option<ConsensusPubkey>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub delegations: Option<Delegations>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub delegator_shares: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<ValidatorDescription>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hex_address: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub identity: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub jailed: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub keybase_image: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_self_delegation: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mintscan_image: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub missed_blocks: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub missed_blocks_periods: Option<Vec<MissedBlocksPeriod>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub moniker: Option<String>,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub operator_address: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub public_nodes: Option<PublicNodes>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rank: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub restake: Option<Restake>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub services: Option<ValidatorServices>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub signing_info: Option<SigningInfo>,
    #[serde(default, skip_serializing_if = "Option::is_none", with = "crate::utils::double_option")]
    pub slashes: Option<Option<Vec<Slash>>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<BondStatus>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tokens: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unbonding_height: Option<String>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "crate::utils::timestamp::optional_nullable"
    )]
    pub unbonding_time: Option<Option<DateTime<Utc>>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub uptime: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub uptime_periods: Option<Vec<UptimePeriod>>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

pub(crate) fn validator() -> TypeDescriptor {
    record()
        .required("chains", list(reference("ValidatorChain")))
        .required("identity", string())
        .required("name", string())
        .required("path", string())
        .required("profile", reference("Profile"))
        .optional("services", list(reference("Service")))
        .required("total_usd", number())
        .required("total_users", integer())
        .build()
}

fn validator_chain() -> TypeDescriptor {
    record()
        .optional("active", boolean())
        .required("address", string())
        .optional("commission", reference("Commission"))
        .optional("delegations", reference("Delegations"))
        .optional("description", reference("ValidatorDescription"))
        .optional("identity", string())
        .optional("image", string())
        .optional("jailed", boolean())
        .optional("missed_blocks_periods", list(reference("MissedBlocksPeriod")))
        .optional("moniker", string())
        .required("name", string())
        .optional("rank", integer())
        .optional("restake", reference("Restake"))
        .optional("slashes", nullable(list(reference("Slash"))))
        .optional("status", reference("BondStatus"))
        .build()
}

pub(crate) fn schema() -> RegistryBuilder {
    let builder = SchemaRegistry::builder("DirectoryValidators")
        .define(
            "DirectoryValidators",
            record()
                .required("repository", reference("Repository"))
                .required("validators", list(reference("Validator")))
                .build(),
        )
        .define("Repository", repository())
        .define("Validator", validator())
        .define("ValidatorChain", validator_chain())
        .define("Commission", commission_summary());
    define_chain_summary(define_profile(builder))
}
