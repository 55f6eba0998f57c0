//! Offline conversion between JSON text and the typed payloads.
//!
//! These helpers run the same parse, cast and deserialise pipeline as
//! [`DirectoryClient`](crate::http::DirectoryClient), for documents that come
//! from somewhere other than the network (a saved response, a fixture).

use serde_json::Value;
use thiserror::Error;

use crate::payloads::{Payload, PayloadKind};
use crate::schema::CastError;

#[derive(Debug, Error)]
pub enum ConvertError {
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("{0}")]
    Cast(#[from] CastError),
}

/// Parses `json`, checks it against the payload schema and deserialises it.
pub fn from_json<T: Payload>(json: &str) -> Result<T, ConvertError> {
    let value: Value = serde_json::from_str(json)?;
    from_value(value)
}

pub fn from_value<T: Payload>(value: Value) -> Result<T, ConvertError> {
    let checked = T::registry().cast(&value)?;
    Ok(serde_json::from_value(checked)?)
}

/// Serialises a payload back to its wire form, pretty-printed with two-space
/// indentation.
pub fn to_json<T: Payload>(payload: &T) -> Result<String, ConvertError> {
    let value = serde_json::to_value(payload)?;
    let wire = T::registry().uncast(&value)?;
    Ok(serde_json::to_string_pretty(&wire)?)
}

/// Schema-only check of an untyped document.
pub fn validate(kind: PayloadKind, value: &Value) -> Result<Value, CastError> {
    kind.registry().cast(value)
}
