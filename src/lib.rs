//! Resolve Swift Package Manager dependencies to GitHub repositories
//!
//! Package.resolved bytes go in, one [`Resolution`] per pin comes out:
//!
//! ```
//! use licensepins::{Config, Resolution, resolve_manifest};
//!
//! let manifest = br#"{
//!   "pins": [{
//!     "identity": "swift-argument-parser",
//!     "kind": "remoteSourceControl",
//!     "location": "https://github.com/apple/swift-argument-parser.git",
//!     "state": { "revision": "41982a3", "version": "1.5.0" }
//!   }],
//!   "version": 2
//! }"#;
//!
//! let resolutions = resolve_manifest(manifest, &Config::default()).unwrap();
//! let Resolution::Resolved(identity) = &resolutions[0] else { panic!() };
//! assert_eq!(identity.owner, "apple");
//! assert_eq!(identity.name, "swift-argument-parser");
//! ```

pub mod config;
pub mod github;
pub mod pin;
pub mod rename;
pub mod resolution;
pub mod swift;

pub use config::{Config, ConfigError};
pub use github::RepositoryIdentity;
pub use pin::Pin;
pub use resolution::{Resolution, UnresolvedPin, resolve_manifest, resolve_manifests, resolve_pin};
pub use swift::{DecodeError, SchemaVersion};
