//! Identification tables
//!
//! Static data a host uses to route a discovered device to this driver.
//! The driver logic never consults these itself.

/// Driver name
pub const DRIVER_NAME: &str = "nunchuk";

/// Bus-level device id entry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct DeviceId {
    /// Device type name
    pub name: &'static str,
    /// Per-variant data handed to attach (unused, single variant)
    pub driver_data: usize,
}

/// Device type names this driver binds to
pub const DEVICE_IDS: &[DeviceId] = &[DeviceId {
    name: "nunchuk-white",
    driver_data: 0,
}];

/// Firmware-description compatible strings this driver binds to
pub const COMPATIBLE: &[&str] = &["nintendo,nunchuk-white"];

/// Find the id entry matching a device type name
pub fn match_id(name: &str) -> Option<&'static DeviceId> {
    DEVICE_IDS.iter().find(|id| id.name == name)
}

/// Check whether a compatible string routes to this driver
pub fn matches_compatible(compatible: &str) -> bool {
    COMPATIBLE.iter().any(|c| *c == compatible)
}
