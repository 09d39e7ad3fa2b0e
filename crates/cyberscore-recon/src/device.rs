//! Device state reports.

use cyberscore_core::{BiometricStatus, DeviceObservations, NetworkKind};
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::{ReconError, ReconResult};

/// What a device-side collector reported.
///
/// Every field is optional; a missing field means the query was not made
/// or failed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DeviceReport {
    pub network: Option<NetworkKind>,
    pub rooted: Option<bool>,
    pub biometric: Option<BiometricStatus>,
    /// Granted runtime permissions, e.g. `camera`, `location`
    pub granted_permissions: Option<Vec<String>>,
}

impl DeviceReport {
    pub fn from_json(content: &str) -> ReconResult<Self> {
        Ok(serde_json::from_str(content)?)
    }

    pub fn from_toml(content: &str) -> ReconResult<Self> {
        toml::from_str(content).map_err(|e| ReconError::DeviceReport(e.to_string()))
    }

    /// Parse by file extension: `.toml` is TOML, anything else JSON.
    pub fn from_path_content(path: &Path, content: &str) -> ReconResult<Self> {
        match path.extension().and_then(|e| e.to_str()) {
            Some("toml") => Self::from_toml(content),
            _ => Self::from_json(content),
        }
    }

    fn permission_granted(&self, name: &str) -> Option<bool> {
        self.granted_permissions
            .as_ref()
            .map(|granted| granted.iter().any(|p| p.eq_ignore_ascii_case(name)))
    }

    /// Convert to scorer observations.
    #[must_use]
    pub fn observations(&self) -> DeviceObservations {
        DeviceObservations {
            network: self.network,
            rooted: self.rooted,
            biometric: self.biometric,
            camera_granted: self.permission_granted("camera"),
            location_granted: self.permission_granted("location"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn json_report() {
        let report = DeviceReport::from_json(
            r#"{"network": "cellular", "rooted": false, "biometric": "not-enrolled",
                "granted_permissions": ["Camera"]}"#,
        )
        .unwrap();
        let obs = report.observations();
        assert_eq!(obs.network, Some(NetworkKind::Cellular));
        assert_eq!(obs.biometric, Some(BiometricStatus::NotEnrolled));
        assert_eq!(obs.camera_granted, Some(true));
        assert_eq!(obs.location_granted, Some(false));
    }

    #[test]
    fn report_accepts_display_spellings() {
        let report =
            DeviceReport::from_json(r#"{"network": "Wi-Fi", "biometric": "no_hardware"}"#).unwrap();
        assert_eq!(report.network, Some(NetworkKind::Wifi));
        assert_eq!(report.biometric, Some(BiometricStatus::Unavailable));
    }

    #[test]
    fn toml_report_with_gaps() {
        let report = DeviceReport::from_toml("network = \"wifi\"\n").unwrap();
        let obs = report.observations();
        assert_eq!(obs.network, Some(NetworkKind::Wifi));
        assert_eq!(obs.rooted, None);
        // No permission list at all means the query failed
        assert_eq!(obs.camera_granted, None);
    }

    #[test]
    fn extension_selects_format() {
        let path = Path::new("device.toml");
        assert!(DeviceReport::from_path_content(path, "rooted = true").is_ok());
        let path = Path::new("device.json");
        assert!(DeviceReport::from_path_content(path, "rooted = true").is_err());
    }
}
