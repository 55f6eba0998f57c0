//! `GET {status}/` : live API health per chain.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::dsl::*;
use super::network::{ApiEndpoint, RpcEndpoint, api_endpoint, rpc_endpoint};
use super::{Payload, PayloadKind};
use crate::schema::{RegistryBuilder, SchemaRegistry};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DirectoryStatus {
    pub chains: Vec<ChainHealth>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Payload for DirectoryStatus {
    const KIND: PayloadKind = PayloadKind::Status;
}

impl DirectoryStatus {
    /// Chains whose REST and RPC proxies are both reachable.
    pub fn available(&self) -> impl Iterator<Item = &ChainHealth> {
        self.chains.iter().filter(|chain| chain.available)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChainHealth {
    pub available: bool,
    pub height: Option<i64>,
    pub name: String,
    pub rest: ServiceHealth<ApiEndpoint>,
    pub rpc: ServiceHealth<RpcEndpoint>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Health of one proxied API and the endpoints currently serving it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceHealth<E> {
    pub available: bool,
    pub best: Vec<E>,
    pub height: Option<i64>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

fn service_health(endpoint: &str) -> TypeDescriptor {
    record()
        .required("available", boolean())
        .required("best", list(reference(endpoint)))
        .required("height", nullable(integer()))
        .build()
}

pub(crate) fn schema() -> RegistryBuilder {
    SchemaRegistry::builder("DirectoryStatus")
        .define(
            "DirectoryStatus",
            record().required("chains", list(reference("ChainHealth"))).build(),
        )
        .define(
            "ChainHealth",
            record()
                .required("available", boolean())
                .required("height", nullable(integer()))
                .required("name", string())
                .required("rest", reference("RestHealth"))
                .required("rpc", reference("RpcHealth"))
                .build(),
        )
        .define("RestHealth", service_health("ApiEndpoint"))
        .define("RpcHealth", service_health("RpcEndpoint"))
        .define("ApiEndpoint", api_endpoint())
        .define("RpcEndpoint", rpc_endpoint())
}
