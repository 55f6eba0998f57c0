// Canned directory documents
//
// Each function returns a document that satisfies the corresponding payload
// schema. Scenarios break them on purpose where they need a violation.

use serde_json::{Value, json};

fn chain_registry() -> Value {
    json!({
        "url": "https://github.com/cosmos/chain-registry",
        "branch": "master",
        "commit": "a6f1aa2e1e6fa51a2e82cab8c3a8ae2fef4b6cbd",
        "timestamp": 1675082410
    })
}

fn validator_registry() -> Value {
    json!({
        "url": "https://github.com/eco-stake/validator-registry",
        "branch": "master",
        "commit": "bff0e86e5d1a2b0f2a78e7d55d5e70ca4f1b1a21",
        "timestamp": 1675081290
    })
}

fn chain_summary(name: &str, pretty_name: &str, denom: &str, height: i64) -> Value {
    json!({
        "name": name,
        "path": name,
        "chain_name": name,
        "network_type": "mainnet",
        "pretty_name": pretty_name,
        "chain_id": format!("{name}-1"),
        "status": "live",
        "symbol": denom.trim_start_matches('u').to_uppercase(),
        "denom": denom,
        "decimals": 6,
        "image": format!("https://raw.githubusercontent.com/cosmos/chain-registry/master/{name}/images/logo.png"),
        "height": height,
        "best_apis": {
            "rest": [{ "address": format!("https://rest.{name}.example"), "provider": "Example" }],
            "rpc": [{ "address": format!("https://rpc.{name}.example"), "archive": false }]
        },
        "params": {
            "authz": true,
            "actual_block_time": 6.2,
            "actual_blocks_per_year": 5086451.6,
            "calculated_apr": 0.14,
            "bonded_ratio": 0.27
        },
        "prices": { "coingecko": { denom: { "usd": 0.56 } } }
    })
}

pub fn chains_document() -> Value {
    json!({
        "chains": [
            chain_summary("osmosis", "Osmosis", "uosmo", 11963010),
            chain_summary("cosmoshub", "Cosmos Hub", "uatom", 13916221)
        ],
        "repository": chain_registry()
    })
}

pub fn chain_document(path: &str) -> Value {
    json!({
        "chain": {
            "name": path,
            "path": path,
            "chain_name": path,
            "pretty_name": "Cosmos Hub",
            "network_type": "mainnet",
            "chain_id": "cosmoshub-4",
            "status": "live",
            "bech32_prefix": "cosmos",
            "slip44": 118,
            "daemon_name": "gaiad",
            "node_home": "$HOME/.gaia",
            "key_algos": ["secp256k1"],
            "height": 13916221,
            "genesis": {
                "genesis_url": "https://github.com/cosmos/mainnet/raw/master/genesis/genesis.cosmoshub-4.json.gz"
            },
            "codebase": {
                "git_repo": "https://github.com/cosmos/gaia",
                "recommended_version": "v8.0.0",
                "compatible_versions": ["v8.0.0"]
            },
            "fees": { "fee_tokens": [{ "denom": "uatom", "fixed_min_gas_price": 0 }] },
            "staking": { "staking_tokens": [{ "denom": "uatom" }] },
            "peers": {
                "seeds": [{ "id": "bf8328b66dceb4987e5cd94430af66045e59899f", "address": "public-seed.cosmos.vitwit.com:26656" }]
            },
            "apis": {
                "rpc": [{ "address": "https://rpc-cosmoshub.blockapsis.com" }],
                "rest": [{ "address": "https://lcd-cosmoshub.blockapsis.com", "provider": "chainapsis" }]
            },
            "best_apis": {
                "rest": [{ "address": "https://lcd-cosmoshub.blockapsis.com" }],
                "rpc": [{ "address": "https://rpc-cosmoshub.blockapsis.com" }]
            },
            "logo_URIs": { "png": "https://example.com/atom.png" },
            "params": {
                "authz": true,
                "actual_block_time": 7.1,
                "actual_blocks_per_year": 4441691.1,
                "bonded_ratio": 0.66
            }
        },
        "repository": chain_registry()
    })
}

pub fn status_document() -> Value {
    json!({
        "chains": [
            {
                "name": "akash",
                "available": true,
                "height": 9400213,
                "rest": {
                    "available": true,
                    "height": 9400213,
                    "best": [{ "address": "https://akash-api.polkachu.com", "provider": "Polkachu" }]
                },
                "rpc": {
                    "available": true,
                    "height": 9400213,
                    "best": [{ "address": "https://akash-rpc.polkachu.com", "archive": false }]
                }
            },
            {
                "name": "bostrom",
                "available": false,
                "height": null,
                "rest": { "available": false, "height": null, "best": [] },
                "rpc": { "available": false, "height": null, "best": [] }
            }
        ]
    })
}

pub fn validators_document() -> Value {
    json!({
        "repository": validator_registry(),
        "validators": [{
            "path": "ecostake",
            "name": "ECO Stake 🌱",
            "identity": "5992A6D423A406D6",
            "total_usd": 10318539.35,
            "total_users": 10745,
            "profile": { "name": "ECO Stake 🌱", "identity": "5992A6D423A406D6" },
            "chains": [{
                "name": "akash",
                "address": "akashvaloper1xgnd8aach3vawsl38snpydkng2nv8a4kqgs8hf",
                "active": true,
                "rank": 26,
                "commission": { "rate": 0.05 }
            }]
        }]
    })
}

pub fn validator_document(path: &str) -> Value {
    json!({
        "repository": validator_registry(),
        "validator": {
            "path": path,
            "name": "ECO Stake 🌱",
            "identity": "5992A6D423A406D6",
            "total_usd": 10318539.35,
            "total_users": 10745,
            "profile": { "name": "ECO Stake 🌱", "identity": "5992A6D423A406D6" },
            "chains": [{
                "name": "cosmoshub",
                "address": "cosmosvaloper1ma02nlc7lchu7caufyrrqt4r6v2mpsj90y9wzd",
                "jailed": false,
                "status": "BOND_STATUS_BONDED",
                "commission": { "rate": 0.05 },
                "uptime": 0.99
            }]
        }
    })
}

fn chain_validator(moniker: &str, rank: i64, active: bool) -> Value {
    let operator = format!("junovaloper1{}", moniker.to_lowercase());
    let status = if active { "BOND_STATUS_BONDED" } else { "BOND_STATUS_UNBONDED" };
    json!({
        "moniker": moniker,
        "address": operator,
        "operator_address": operator,
        "hex_address": "F05A3B2B8B3E5DB0C5C53D5B78C1A8F5E0B3A0C2",
        "active": active,
        "rank": rank,
        "jailed": false,
        "status": status,
        "tokens": "46213892883",
        "delegator_shares": "46213892883.000000000000000000",
        "min_self_delegation": "1",
        "unbonding_height": "0",
        "unbonding_time": "1970-01-01T00:00:00Z",
        "missed_blocks": 0,
        "uptime": 1.0,
        "description": {
            "moniker": moniker,
            "identity": "",
            "website": "",
            "security_contact": "",
            "details": ""
        },
        "commission": {
            "commission_rates": { "rate": "0.05", "max_rate": "0.2", "max_change_rate": "0.01" },
            "update_time": "2021-06-18T17:00:00Z",
            "rate": 0.05
        },
        "consensus_pubkey": {
            "@type": "/cosmos.crypto.ed25519.PubKey",
            "key": "ilz9VBHBy2ZmLSM6iP3e3UdWb1u+Eif3atBq3fW2FhU="
        },
        "delegations": { "total_tokens": "46213892883", "total_count": 88 },
        "missed_blocks_periods": [{ "blocks": 100, "missed": 0 }],
        "uptime_periods": [{ "blocks": 100, "uptime": 1 }]
    })
}

pub fn chain_validators_document(chain: &str) -> Value {
    json!({
        "name": chain,
        "validators": [
            chain_validator("Dormant", 150, false),
            chain_validator("Second", 2, true),
            chain_validator("First", 1, true)
        ]
    })
}
