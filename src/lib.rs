pub mod cli;
pub mod config;
pub mod convert;
pub mod http;
pub mod log;
pub mod payloads;
pub mod schema;
pub mod utils;

pub use crate::convert::{ConvertError, from_json, to_json};
pub use crate::http::{ClientOptions, DirectoryClient, HttpError};
pub use crate::payloads::{Payload, PayloadKind};
pub use crate::schema::{CastError, SchemaRegistry};
