//! Runtime structural validation of untyped JSON.
//!
//! The directory service publishes its payloads as plain JSON. Before a
//! response is turned into one of the typed payload structs it is checked
//! against a declarative description of its shape, so a contract violation
//! is reported with the exact field that broke it rather than as an opaque
//! deserialization failure.
//!
//! # Architecture
//!
//! - [`TypeDescriptor`] - the closed set of shapes: primitives, literal
//!   enums, sequences, ordered unions, records, timestamps, named references
//!   and a wildcard
//! - [`SchemaRegistry`] - an immutable table of named descriptors, one per
//!   payload kind, checked for dangling references and reference cycles when
//!   it is built
//! - [`cast`] / [`uncast`] - the interpreter, walking a value and a
//!   descriptor together
//! - [`CastError`] / [`RegistryError`] - failure reporting
//!
//! # Example
//!
//! ```rust
//! use cosmos_directory::schema::{SchemaRegistry, TypeDescriptor, RecordBuilder, cast};
//! use serde_json::json;
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let registry = SchemaRegistry::builder("Health")
//!     .define(
//!         "Health",
//!         RecordBuilder::new()
//!             .required("status", TypeDescriptor::literal(["killed", "live"]))
//!             .required("height", TypeDescriptor::nullable(TypeDescriptor::integer()))
//!             .build(),
//!     )
//!     .build()?;
//!
//! let value = json!({ "status": "live", "height": 1200 });
//! let checked = cast(&value, registry.root_descriptor(), &registry)?;
//! assert_eq!(checked, value);
//! # Ok(())
//! # }
//! ```

mod caster;
mod descriptor;
mod error;
mod registry;

pub use caster::{Direction, cast, uncast};
pub use descriptor::{AdditionalFields, FieldDescriptor, KeySide, PrimitiveKind, RecordBuilder, RecordDescriptor, TypeDescriptor};
pub use error::{CastError, FieldPath, PathSegment, RegistryError};
pub use registry::{RegistryBuilder, SchemaRegistry};
