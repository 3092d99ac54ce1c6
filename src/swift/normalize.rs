//! Mapping from schema-specific pins onto the unified [`Pin`]

use super::lockfile::{PackageResolvedV1, PackageResolvedV2, PinV1, PinV2};
use crate::pin::Pin;

impl From<PinV1> for Pin {
    fn from(pin: PinV1) -> Self {
        Pin {
            package_name: pin.package,
            source_location: pin.repository_url,
            revision: pin.state.revision,
            branch: pin.state.branch,
            version: pin.state.version,
        }
    }
}

impl From<PinV2> for Pin {
    fn from(pin: PinV2) -> Self {
        Pin {
            package_name: pin.identity,
            source_location: pin.location,
            revision: pin.state.revision,
            branch: pin.state.branch,
            version: pin.state.version,
        }
    }
}

impl PackageResolvedV1 {
    /// Unified pins in declaration order
    pub fn into_pins(self) -> Vec<Pin> {
        self.object.pins.into_iter().map(Pin::from).collect()
    }
}

impl PackageResolvedV2 {
    /// Unified pins in declaration order
    pub fn into_pins(self) -> Vec<Pin> {
        self.pins.into_iter().map(Pin::from).collect()
    }
}
