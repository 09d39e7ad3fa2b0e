//! Fixed signal definitions.
//!
//! Weights are subtracted from a starting score of 100.

use crate::types::{SignalDefinition, SignalId};

pub const NOT_ON_WIFI: SignalDefinition = SignalDefinition {
    id: SignalId::NotOnWifi,
    weight: 20,
    finding: "Not connected to Wi-Fi: traffic goes over a network you don't control",
};

pub const DEVICE_ROOTED: SignalDefinition = SignalDefinition {
    id: SignalId::DeviceRooted,
    weight: 30,
    finding: "Device is rooted or jailbroken: platform security checks are bypassed",
};

pub const BIOMETRIC_NOT_ENROLLED: SignalDefinition = SignalDefinition {
    id: SignalId::BiometricNotEnrolled,
    weight: 10,
    finding: "No biometric lock enrolled",
};

pub const CAMERA_PERMISSION_GRANTED: SignalDefinition = SignalDefinition {
    id: SignalId::CameraPermissionGranted,
    weight: 10,
    finding: "Camera permission is granted",
};

pub const LOCATION_PERMISSION_GRANTED: SignalDefinition = SignalDefinition {
    id: SignalId::LocationPermissionGranted,
    weight: 10,
    finding: "Location permission is granted",
};

pub const NOT_HTTPS: SignalDefinition = SignalDefinition {
    id: SignalId::NotHttps,
    weight: 30,
    finding: "Website is not using HTTPS",
};

pub const MALICIOUS_VERDICT: SignalDefinition = SignalDefinition {
    id: SignalId::MaliciousVerdict,
    weight: 50,
    finding: "URL is flagged as malicious by a reputation service",
};

pub const DOMAIN_AGE_UNDER_1YR: SignalDefinition = SignalDefinition {
    id: SignalId::DomainAgeUnder1yr,
    weight: 20,
    finding: "Domain was registered less than a year ago",
};

pub const RISK_KEYWORD_IN_CONTENT: SignalDefinition = SignalDefinition {
    id: SignalId::RiskKeywordInContent,
    weight: 30,
    finding: "Page content contains a risk keyword",
};

/// Device/network signals in evaluation order.
pub const DEVICE_SIGNALS: [SignalDefinition; 5] = [
    NOT_ON_WIFI,
    DEVICE_ROOTED,
    BIOMETRIC_NOT_ENROLLED,
    CAMERA_PERMISSION_GRANTED,
    LOCATION_PERMISSION_GRANTED,
];

/// Website signals in evaluation order.
pub const WEBSITE_SIGNALS: [SignalDefinition; 4] = [
    NOT_HTTPS,
    MALICIOUS_VERDICT,
    DOMAIN_AGE_UNDER_1YR,
    RISK_KEYWORD_IN_CONTENT,
];
