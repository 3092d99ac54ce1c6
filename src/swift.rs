//! Swift Package Manager support
//!
//! Handles:
//! - Decoding Package.resolved (v1, v2 and v3 formats)
//! - Normalizing every schema's pins into [`crate::pin::Pin`]

mod lockfile;
mod normalize;

pub use lockfile::{
    DecodeError, ObjectV1, PackageResolvedV1, PackageResolvedV2, PinV1, PinV2, SchemaVersion,
    StateV1, StateV2, decode_pins, decode_v1, decode_v2, peek_schema,
};
