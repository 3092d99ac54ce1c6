//! End-to-end resolution of Package.resolved manifests
//!
//! Every pin ends up as exactly one [`Resolution`], so callers can tell
//! "resolved to owner/name" from "not resolvable". A manifest that fails to
//! decode surfaces as an `Err` for that manifest alone.

use crate::config::Config;
use crate::github::{self, RepositoryIdentity};
use crate::pin::Pin;
use crate::rename::apply_renames;
use crate::swift::{self, DecodeError};
use serde::Serialize;
use std::collections::HashMap;
use tracing::warn;

/// Outcome for a single dependency
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum Resolution {
    Resolved(RepositoryIdentity),
    /// License lookup has to be skipped for this dependency
    Unresolved(UnresolvedPin),
}

/// A dependency whose location is not a GitHub repository
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UnresolvedPin {
    pub package_name: String,
    pub source_location: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
}

impl Resolution {
    pub fn identity(&self) -> Option<&RepositoryIdentity> {
        match self {
            Resolution::Resolved(identity) => Some(identity),
            Resolution::Unresolved(_) => None,
        }
    }

    pub fn is_resolved(&self) -> bool {
        matches!(self, Resolution::Resolved(_))
    }
}

/// Resolve one pin and apply renames on top
pub fn resolve_pin(pin: Pin, renames: &HashMap<String, String>) -> Resolution {
    match github::resolve(&pin) {
        Some(identity) => Resolution::Resolved(apply_renames(identity, renames)),
        None => Resolution::Unresolved(UnresolvedPin {
            package_name: pin.package_name,
            source_location: pin.source_location,
            version: pin.version,
        }),
    }
}

/// Decode a Package.resolved and resolve each of its pins, in file order
pub fn resolve_manifest(bytes: &[u8], config: &Config) -> Result<Vec<Resolution>, DecodeError> {
    let pins = swift::decode_pins(bytes)?;
    Ok(pins
        .into_iter()
        .map(|pin| resolve_pin(pin, &config.renames))
        .collect())
}

/// Resolve several manifests independently
///
/// Results line up with the input order. One manifest failing to decode has
/// no effect on the others; deciding whether to abort is left to the caller.
pub fn resolve_manifests<'a, I>(
    manifests: I,
    config: &Config,
) -> Vec<Result<Vec<Resolution>, DecodeError>>
where
    I: IntoIterator<Item = &'a [u8]>,
{
    manifests
        .into_iter()
        .enumerate()
        .map(|(index, bytes)| {
            let result = resolve_manifest(bytes, config);
            if let Err(ref err) = result {
                warn!(manifest = index, error = %err, "skipping manifest that failed to decode");
            }
            result
        })
        .collect()
}
