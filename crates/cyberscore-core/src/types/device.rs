//! Device and network observations.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::error::CoreError;

/// Category of the current network connection.
///
/// Deserialization goes through [`FromStr`], so reports accept the same
/// spellings as the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", try_from = "String")]
pub enum NetworkKind {
    Wifi,
    Cellular,
    Ethernet,
    /// No connection at all
    None,
    /// Bluetooth, VPN, WiMAX and the rest
    Other,
}

impl NetworkKind {
    /// Only Wi-Fi counts as the expected network.
    #[must_use]
    pub const fn is_wifi(self) -> bool {
        matches!(self, Self::Wifi)
    }
}

impl FromStr for NetworkKind {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "wifi" | "wi-fi" | "wlan" => Ok(Self::Wifi),
            "cellular" | "mobile" | "4g" | "5g" => Ok(Self::Cellular),
            "ethernet" | "wired" => Ok(Self::Ethernet),
            "none" | "offline" => Ok(Self::None),
            "other" | "bluetooth" | "vpn" | "wimax" => Ok(Self::Other),
            _ => Err(CoreError::DeviceReport(format!("unknown network type: {s}"))),
        }
    }
}

impl TryFrom<String> for NetworkKind {
    type Error = CoreError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

/// Biometric hardware and enrolment state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", try_from = "String")]
pub enum BiometricStatus {
    /// Hardware present, at least one biometric enrolled
    Enrolled,
    /// Hardware present, nothing enrolled
    NotEnrolled,
    /// No biometric hardware
    Unavailable,
}

impl BiometricStatus {
    /// Whether the device can be unlocked biometrically.
    #[must_use]
    pub const fn is_enrolled(self) -> bool {
        matches!(self, Self::Enrolled)
    }
}

impl FromStr for BiometricStatus {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "enrolled" => Ok(Self::Enrolled),
            "not-enrolled" | "not_enrolled" | "none" => Ok(Self::NotEnrolled),
            "unavailable" | "no-hardware" | "no_hardware" => Ok(Self::Unavailable),
            _ => Err(CoreError::DeviceReport(format!(
                "unknown biometric status: {s}"
            ))),
        }
    }
}

impl TryFrom<String> for BiometricStatus {
    type Error = CoreError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

/// Everything the device score looks at.
///
/// `None` means the query failed or was not made; it is never penalised.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeviceObservations {
    pub network: Option<NetworkKind>,
    pub rooted: Option<bool>,
    pub biometric: Option<BiometricStatus>,
    pub camera_granted: Option<bool>,
    pub location_granted: Option<bool>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_network_aliases() {
        assert_eq!("Wi-Fi".parse::<NetworkKind>().unwrap(), NetworkKind::Wifi);
        assert_eq!("5g".parse::<NetworkKind>().unwrap(), NetworkKind::Cellular);
        assert!("carrier-pigeon".parse::<NetworkKind>().is_err());
    }

    #[test]
    fn parse_biometric() {
        assert_eq!(
            "not-enrolled".parse::<BiometricStatus>().unwrap(),
            BiometricStatus::NotEnrolled
        );
        assert!(!BiometricStatus::Unavailable.is_enrolled());
    }

    #[test]
    fn deserialize_accepts_flag_spellings() {
        let network: NetworkKind = serde_json::from_str("\"Wi-Fi\"").unwrap();
        assert_eq!(network, NetworkKind::Wifi);
        let biometric: BiometricStatus = serde_json::from_str("\"not_enrolled\"").unwrap();
        assert_eq!(biometric, BiometricStatus::NotEnrolled);
        assert!(serde_json::from_str::<NetworkKind>("\"carrier-pigeon\"").is_err());
    }

    #[test]
    fn serialize_uses_canonical_names() {
        assert_eq!(serde_json::to_string(&NetworkKind::Wifi).unwrap(), "\"wifi\"");
        assert_eq!(
            serde_json::to_string(&BiometricStatus::NotEnrolled).unwrap(),
            "\"not-enrolled\""
        );
    }

    #[test]
    fn default_is_all_unknown() {
        let obs = DeviceObservations::default();
        assert!(obs.network.is_none());
        assert!(obs.rooted.is_none());
        assert!(obs.biometric.is_none());
    }
}
