//! `GET {validators}/{path}` : one validator operator with full per-chain
//! detail.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::dsl::*;
use super::profile::{commission, define_chain_standing, define_profile};
use super::validators::{Validator, validator};
use super::{Payload, PayloadKind, Repository};
use crate::schema::{RegistryBuilder, SchemaRegistry};

/// Registry branch the validator document has been published from.
const REGISTRY_BRANCH: &str = "master";
/// Registry commit pinned in the published validator document type.
const REGISTRY_COMMIT: &str = "bff0e86e5d1a2b0f2a78e7d55d5e70ca4f1b1a21";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DirectoryValidator {
    pub repository: Repository,
    pub validator: Validator,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Payload for DirectoryValidator {
    const KIND: PayloadKind = PayloadKind::Validator;
}

fn validator_chain() -> TypeDescriptor {
    record()
        .optional("active", boolean())
        .required("address", string())
        .optional("commission", reference("Commission"))
        .optional("consensus_pubkey", reference("ConsensusPubkey"))
        .optional("delegations", reference("Delegations"))
        .optional("delegator_shares", string())
        .optional("description", reference("ValidatorDescription"))
        .optional("hex_address", string())
        .optional("identity", string())
        .optional("image", string())
        .optional("jailed", boolean())
        .optional("keybase_image", string())
        .optional("min_self_delegation", string())
        .optional("mintscan_image", string())
        .optional("missed_blocks", integer())
        .optional("missed_blocks_periods", list(reference("MissedBlocksPeriod")))
        .optional("moniker", string())
        .required("name", string())
        .optional("operator_address", string())
        .optional("path", string())
        .optional("public_nodes", reference("PublicNodes"))
        .optional("rank", integer())
        .optional("restake", reference("Restake"))
        .optional("services", reference("ValidatorServices"))
        .optional("signing_info", reference("SigningInfo"))
        .optional("slashes", nullable(list(reference("Slash"))))
        .optional("status", reference("BondStatus"))
        .optional("tokens", string())
        .optional("unbonding_height", string())
        .optional("unbonding_time", temporal())
        .optional("uptime", number())
        .optional("uptime_periods", list(reference("UptimePeriod")))
        .build()
}

pub(crate) fn schema() -> RegistryBuilder {
    let builder = SchemaRegistry::builder("DirectoryValidator")
        .define(
            "DirectoryValidator",
            record()
                .required("repository", reference("Repository"))
                .required("validator", reference("Validator"))
                .build(),
        )
        .define(
            "Repository",
            record()
                .required("branch", reference("Branch"))
                .required("commit", reference("Commit"))
                .required("timestamp", integer())
                .required("url", string())
                .build(),
        )
        .define("Branch", literal(&[REGISTRY_BRANCH]))
        .define("Commit", literal(&[REGISTRY_COMMIT]))
        .define("Validator", validator())
        .define("ValidatorChain", validator_chain())
        .define("Commission", commission(false));
    define_chain_standing(define_profile(builder))
}

#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Utc};
    use serde_json::{Value, json};

    use super::*;
    use crate::convert;
    use crate::payloads::profile::PubKeyType;

    fn document() -> Value {
        json!({
            "repository": {
                "url": "https://github.com/eco-stake/validator-registry",
                "branch": "master",
                "commit": "bff0e86e5d1a2b0f2a78e7d55d5e70ca4f1b1a21",
                "timestamp": 1675081290
            },
            "validator": {
                "path": "ecostake",
                "name": "ECO Stake 🌱",
                "identity": "5992A6D423A406D6",
                "total_usd": 10318539.35,
                "total_users": 10745,
                "profile": { "name": "ECO Stake 🌱", "identity": "5992A6D423A406D6" },
                "chains": [{
                    "name": "cosmoshub",
                    "address": "cosmosvaloper1ma02nlc7lchu7caufyrrqt4r6v2mpsj90y9wzd",
                    "operator_address": "cosmosvaloper1ma02nlc7lchu7caufyrrqt4r6v2mpsj90y9wzd",
                    "hex_address": "F05A3B2B8B3E5DB0C5C53D5B78C1A8F5E0B3A0C2",
                    "consensus_pubkey": {
                        "@type": "/cosmos.crypto.ed25519.PubKey",
                        "key": "b77zCh/VsRgVvfGXuW4dB+Dhg4PrMWWBC5G2K/qFgiU="
                    },
                    "jailed": false,
                    "status": "BOND_STATUS_BONDED",
                    "tokens": "1124396313465",
                    "delegator_shares": "1124396313465.000000000000000000",
                    "min_self_delegation": "1",
                    "unbonding_height": "0",
                    "unbonding_time": "1970-01-01T00:00:00Z",
                    "commission": {
                        "commission_rates": { "rate": "0.050000000000000000", "max_rate": "0.200000000000000000", "max_change_rate": "0.010000000000000000" },
                        "update_time": "2021-10-01T15:00:00.000Z",
                        "rate": 0.05
                    },
                    "signing_info": {
                        "address": "cosmosvalcons1lnsh4kg0etk0adsmwjkn8rl4jm7wgcnsvd3ssc",
                        "start_height": "0",
                        "index_offset": "4719453",
                        "jailed_until": "1970-01-01T00:00:00Z",
                        "tombstoned": false,
                        "missed_blocks_counter": "2"
                    },
                    "public_nodes": {
                        "rpc": [{ "address": "https://rpc-cosmoshub.ecostake.com", "provider": "ECO Stake 🌱" }]
                    },
                    "services": {
                        "staking_rewards": { "name": "ECO Stake", "slug": "ecostake", "verified": true }
                    },
                    "uptime": 0.99,
                    "uptime_periods": [{ "blocks": 100, "uptime": 1 }, { "blocks": 10000, "uptime": 0.9998 }]
                }]
            }
        })
    }

    #[test]
    fn test_cast_accepts_validator_document() {
        let value = document();
        assert_eq!(DirectoryValidator::registry().cast(&value).unwrap(), value);

        let document: DirectoryValidator = serde_json::from_value(value).unwrap();
        let chain = document.validator.chain("cosmoshub").unwrap();
        assert_eq!(chain.consensus_pubkey.as_ref().unwrap().key_type, PubKeyType::Ed25519);
        assert_eq!(
            chain.commission.as_ref().unwrap().update_time,
            Some(Some(Utc.with_ymd_and_hms(2021, 10, 1, 15, 0, 0).unwrap()))
        );
        assert!(chain.services.as_ref().unwrap().staking_rewards.verified);
        assert_eq!(chain.public_nodes.as_ref().unwrap().rpc.as_ref().unwrap().len(), 1);
    }

    #[test]
    fn test_repository_commit_is_pinned() {
        let mut value = document();
        value["repository"]["commit"] = json!("0000000000000000000000000000000000000000");
        let err = DirectoryValidator::registry().cast(&value).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Invalid value for key \"repository.commit\". Expected type Commit (one of \
             [\"bff0e86e5d1a2b0f2a78e7d55d5e70ca4f1b1a21\"]) but got \"0000000000000000000000000000000000000000\""
        );
    }

    #[test]
    fn test_unparseable_unbonding_time_is_rejected() {
        let mut value = document();
        value["validator"]["chains"][0]["unbonding_time"] = json!("soon");
        let err = DirectoryValidator::registry().cast(&value).unwrap_err();
        assert_eq!(err.path().unwrap().to_string(), "validator.chains[0].unbonding_time");
    }

    #[test]
    fn test_public_node_requires_provider() {
        let mut value = document();
        value["validator"]["chains"][0]["public_nodes"]["rpc"][0]
            .as_object_mut()
            .unwrap()
            .remove("provider");
        let err = DirectoryValidator::registry().cast(&value).unwrap_err();
        assert_eq!(
            err.path().unwrap().to_string(),
            "validator.chains[0].public_nodes.rpc[0].provider"
        );
    }

    #[test]
    fn test_to_json_keeps_undeclared_keys_and_nulls() {
        let mut value = document();
        value["validator"]["chains"][0]["unbonding_time"] = Value::Null;
        value["validator"]["chains"][0]["commission"]
            .as_object_mut()
            .unwrap()
            .remove("update_time");
        value["validator"]["chains"][0]["signing_info"]["jailed_until"] = Value::Null;
        value["validator"]["chains"][0]["services"]["staking_rewards"]["tier"] = json!("gold");

        let document: DirectoryValidator = convert::from_value(value).unwrap();
        let chain = document.validator.chain("cosmoshub").unwrap();
        assert_eq!(chain.unbonding_time, Some(None));
        assert_eq!(chain.commission.as_ref().unwrap().update_time, None);

        let output: Value = serde_json::from_str(&convert::to_json(&document).unwrap()).unwrap();
        let chain = &output["validator"]["chains"][0];
        assert_eq!(chain.get("unbonding_time"), Some(&Value::Null));
        assert!(chain["commission"].get("update_time").is_none());
        assert_eq!(chain["signing_info"].get("jailed_until"), Some(&Value::Null));
        assert_eq!(chain["services"]["staking_rewards"]["tier"], "gold");
    }
}
