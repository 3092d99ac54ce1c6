//! Package.resolved decoding
//!
//! Each on-disk schema has its own record types and its own entry point.
//! Choosing the schema is the caller's job; [`peek_schema`] and
//! [`decode_pins`] implement the usual choice for callers that don't care.
//!
//! v1 format (older):
//! ```json
//! {
//!   "object": {
//!     "pins": [{
//!       "package": "PackageName",
//!       "repositoryURL": "https://github.com/...",
//!       "state": { "branch": null, "revision": "...", "version": "1.0.0" }
//!     }]
//!   },
//!   "version": 1
//! }
//! ```
//!
//! v2 format (Swift 5.6+):
//! ```json
//! {
//!   "pins": [{
//!     "identity": "package-name",
//!     "kind": "remoteSourceControl",
//!     "location": "https://github.com/...",
//!     "state": { "revision": "...", "version": "1.0.0" }
//!   }],
//!   "version": 2
//! }
//! ```
//!
//! v3 (Swift 5.10+) only adds a top-level `originHash`, so it is decoded with
//! the v2 records.

use crate::pin::Pin;
use serde::Deserialize;
use serde::de::{DeserializeOwned, IgnoredAny};
use std::fmt;
use thiserror::Error;
use tracing::debug;

/// On-disk schema of a Package.resolved file
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SchemaVersion {
    V1,
    V2,
    V3,
}

impl fmt::Display for SchemaVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SchemaVersion::V1 => write!(f, "v1"),
            SchemaVersion::V2 => write!(f, "v2"),
            SchemaVersion::V3 => write!(f, "v3"),
        }
    }
}

#[derive(Error, Debug)]
pub enum DecodeError {
    #[error("Failed to read Package.resolved header at `{field}`: {source}")]
    Header {
        field: String,
        source: serde_json::Error,
    },

    #[error("Failed to decode Package.resolved ({schema}) at `{field}`: {source}")]
    Invalid {
        schema: SchemaVersion,
        field: String,
        source: serde_json::Error,
    },

    #[error("Unsupported Package.resolved version: {version}")]
    UnsupportedVersion { version: u64 },
}

impl DecodeError {
    /// JSON path of the value that failed to decode, e.g. `object.pins[1].state.revision`
    pub fn field(&self) -> Option<&str> {
        match self {
            DecodeError::Header { field, .. } | DecodeError::Invalid { field, .. } => Some(field),
            DecodeError::UnsupportedVersion { .. } => None,
        }
    }
}

// Only the fields needed to pick a schema
#[derive(Deserialize)]
struct Header {
    version: Option<u64>,
    object: Option<IgnoredAny>,
}

// v1 format structures
#[derive(Debug, Clone, Deserialize)]
pub struct PackageResolvedV1 {
    pub object: ObjectV1,
    pub version: Option<u64>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ObjectV1 {
    pub pins: Vec<PinV1>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PinV1 {
    pub package: String,
    #[serde(rename = "repositoryURL")]
    pub repository_url: String,
    pub state: StateV1,
}

#[derive(Debug, Clone, Deserialize)]
pub struct StateV1 {
    pub branch: Option<String>,
    pub revision: String,
    pub version: Option<String>,
}

// v2 format structures (also used for v3)
#[derive(Debug, Clone, Deserialize)]
pub struct PackageResolvedV2 {
    pub pins: Vec<PinV2>,
    pub version: Option<u64>,
    #[serde(rename = "originHash")]
    pub origin_hash: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PinV2 {
    pub identity: String,
    /// `remoteSourceControl`, `localSourceControl`, ...; not used for decoding
    pub kind: Option<String>,
    pub location: String,
    pub state: StateV2,
}

#[derive(Debug, Clone, Deserialize)]
pub struct StateV2 {
    pub branch: Option<String>,
    pub revision: String,
    pub version: Option<String>,
}

/// Decode a v1 Package.resolved
pub fn decode_v1(bytes: &[u8]) -> Result<PackageResolvedV1, DecodeError> {
    decode_as(bytes, SchemaVersion::V1)
}

/// Decode a v2 Package.resolved
pub fn decode_v2(bytes: &[u8]) -> Result<PackageResolvedV2, DecodeError> {
    decode_as(bytes, SchemaVersion::V2)
}

/// Work out which schema a Package.resolved uses
///
/// The top-level `version` integer decides. Without one, a top-level `object`
/// means v1 and anything else is treated as v2.
pub fn peek_schema(bytes: &[u8]) -> Result<SchemaVersion, DecodeError> {
    let header: Header = deserialize_tracked(bytes)
        .map_err(|(field, source)| DecodeError::Header { field, source })?;

    match header.version {
        Some(1) => Ok(SchemaVersion::V1),
        Some(2) => Ok(SchemaVersion::V2),
        Some(3) => Ok(SchemaVersion::V3),
        Some(version) => Err(DecodeError::UnsupportedVersion { version }),
        None if header.object.is_some() => Ok(SchemaVersion::V1),
        None => Ok(SchemaVersion::V2),
    }
}

/// Decode any supported Package.resolved into unified pins, in file order
pub fn decode_pins(bytes: &[u8]) -> Result<Vec<Pin>, DecodeError> {
    let schema = peek_schema(bytes)?;
    debug!(%schema, "decoding Package.resolved");

    let pins = match schema {
        SchemaVersion::V1 => decode_v1(bytes)?.into_pins(),
        SchemaVersion::V2 => decode_v2(bytes)?.into_pins(),
        SchemaVersion::V3 => decode_as::<PackageResolvedV2>(bytes, SchemaVersion::V3)?.into_pins(),
    };
    Ok(pins)
}

fn decode_as<T: DeserializeOwned>(bytes: &[u8], schema: SchemaVersion) -> Result<T, DecodeError> {
    deserialize_tracked(bytes).map_err(|(field, source)| DecodeError::Invalid {
        schema,
        field,
        source,
    })
}

/// Deserialize while keeping the path to whatever failed
fn deserialize_tracked<T: DeserializeOwned>(
    bytes: &[u8],
) -> Result<T, (String, serde_json::Error)> {
    let mut de = serde_json::Deserializer::from_slice(bytes);
    let value: T = serde_path_to_error::deserialize(&mut de).map_err(|err| {
        let path = err.path().to_string();
        let source = err.into_inner();
        match missing_field(&source) {
            Some(key) if path == "." => (key, source),
            Some(key) => (format!("{path}.{key}"), source),
            None => (path, source),
        }
    })?;
    de.end().map_err(|source| (".".to_string(), source))?;
    Ok(value)
}

/// The key named by serde's "missing field `key`" error, if that is the error
///
/// The tracked path stops at the containing object for these.
fn missing_field(err: &serde_json::Error) -> Option<String> {
    let message = err.to_string();
    let rest = message.strip_prefix("missing field `")?;
    let (key, _) = rest.split_once('`')?;
    Some(key.to_string())
}
