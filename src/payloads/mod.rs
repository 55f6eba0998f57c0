// Copyright 2025 The cosmos-directory Authors
// SPDX-License-Identifier: BSD-3-Clause

//! Typed payloads of the directory API and the schema tables that describe
//! them.
//!
//! Each payload module pairs the Rust structs a caller works with and the
//! descriptor table the structural caster validates raw JSON against. Field
//! names, optionality and enum cases follow the upstream contract exactly,
//! including where it is narrower than real-world data (single-case literals
//! such as the validator repository `commit`).
//!
//! Every record is open, so each struct carries the keys it does not declare
//! in a flattened `extra` map. Optional keys that may be `null` are
//! `Option<Option<_>>`: absent and `null` stay distinct through a round trip.
//!
//! Registries are built once on first use and shared for the life of the
//! process.

use std::fmt::{self, Display};
use std::sync::LazyLock;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::schema::{RegistryBuilder, SchemaRegistry, TypeDescriptor};

pub mod chain;
pub mod chain_validators;
pub mod chains;
pub mod network;
pub mod profile;
pub mod status;
pub mod validator;
pub mod validators;

pub use chain::DirectoryChain;
pub use chain_validators::ChainValidators;
pub use chains::DirectoryChains;
pub use status::DirectoryStatus;
pub use validator::DirectoryValidator;
pub use validators::DirectoryValidators;

/// A document returned by one of the directory endpoints.
pub trait Payload: Serialize + DeserializeOwned {
    const KIND: PayloadKind;

    fn registry() -> &'static SchemaRegistry {
        Self::KIND.registry()
    }
}

/// The six documents the directory serves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, clap::ValueEnum)]
pub enum PayloadKind {
    Chains,
    Chain,
    Status,
    Validators,
    Validator,
    ChainValidators,
}

impl PayloadKind {
    pub const ALL: [PayloadKind; 6] = [
        PayloadKind::Chains,
        PayloadKind::Chain,
        PayloadKind::Status,
        PayloadKind::Validators,
        PayloadKind::Validator,
        PayloadKind::ChainValidators,
    ];

    pub fn registry(self) -> &'static SchemaRegistry {
        match self {
            PayloadKind::Chains => &CHAINS,
            PayloadKind::Chain => &CHAIN,
            PayloadKind::Status => &STATUS,
            PayloadKind::Validators => &VALIDATORS,
            PayloadKind::Validator => &VALIDATOR,
            PayloadKind::ChainValidators => &CHAIN_VALIDATORS,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            PayloadKind::Chains => "chains",
            PayloadKind::Chain => "chain",
            PayloadKind::Status => "status",
            PayloadKind::Validators => "validators",
            PayloadKind::Validator => "validator",
            PayloadKind::ChainValidators => "chain-validators",
        }
    }
}

impl Display for PayloadKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

static CHAINS: LazyLock<SchemaRegistry> = LazyLock::new(|| build(chains::schema()));
static CHAIN: LazyLock<SchemaRegistry> = LazyLock::new(|| build(chain::schema()));
static STATUS: LazyLock<SchemaRegistry> = LazyLock::new(|| build(status::schema()));
static VALIDATORS: LazyLock<SchemaRegistry> = LazyLock::new(|| build(validators::schema()));
static VALIDATOR: LazyLock<SchemaRegistry> = LazyLock::new(|| build(validator::schema()));
static CHAIN_VALIDATORS: LazyLock<SchemaRegistry> = LazyLock::new(|| build(chain_validators::schema()));

// The tables are static data; a broken one is a bug in this crate, not bad input.
fn build(builder: RegistryBuilder) -> SchemaRegistry {
    builder.build().expect("Embedded payload schema table is invalid")
}

/// Shorthand used by the schema tables.
pub(crate) mod dsl {
    pub(crate) use crate::schema::{RecordBuilder, TypeDescriptor};

    pub(crate) fn string() -> TypeDescriptor {
        TypeDescriptor::string()
    }

    pub(crate) fn number() -> TypeDescriptor {
        TypeDescriptor::number()
    }

    pub(crate) fn integer() -> TypeDescriptor {
        TypeDescriptor::integer()
    }

    pub(crate) fn boolean() -> TypeDescriptor {
        TypeDescriptor::boolean()
    }

    pub(crate) fn temporal() -> TypeDescriptor {
        TypeDescriptor::temporal()
    }

    pub(crate) fn nullable(descriptor: TypeDescriptor) -> TypeDescriptor {
        TypeDescriptor::nullable(descriptor)
    }

    pub(crate) fn list(of: TypeDescriptor) -> TypeDescriptor {
        TypeDescriptor::sequence(of)
    }

    pub(crate) fn reference(name: &str) -> TypeDescriptor {
        TypeDescriptor::reference(name)
    }

    pub(crate) fn literal(cases: &[&str]) -> TypeDescriptor {
        TypeDescriptor::literal(cases.iter().copied())
    }

    pub(crate) fn map(values: TypeDescriptor) -> TypeDescriptor {
        TypeDescriptor::map(values)
    }

    /// Directory records are open: keys they do not declare are kept as-is.
    pub(crate) fn record() -> RecordBuilder {
        RecordBuilder::new().additional(TypeDescriptor::any())
    }
}

/// Commit of the chain-registry or validator-registry data a response was
/// built from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Repository {
    pub branch: String,
    pub commit: String,
    pub timestamp: i64,
    pub url: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

pub(crate) fn repository() -> TypeDescriptor {
    use dsl::*;

    record()
        .required("branch", string())
        .required("commit", string())
        .required("timestamp", integer())
        .required("url", string())
        .build()
}
