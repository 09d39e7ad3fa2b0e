//! Signals, observations and the ordered signal set fed to the scorer.

use serde::{Deserialize, Serialize};

/// Stable identifier of a security signal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SignalId {
    /// Device is on something other than Wi-Fi
    NotOnWifi,
    /// Device is rooted or jailbroken
    DeviceRooted,
    /// No biometric enrolled (or no biometric hardware)
    BiometricNotEnrolled,
    /// Camera permission has been granted
    CameraPermissionGranted,
    /// Location permission has been granted
    LocationPermissionGranted,
    /// Site is not served over HTTPS
    NotHttps,
    /// URL reputation lookup flagged the site
    MaliciousVerdict,
    /// Domain was registered less than a year ago
    #[serde(rename = "domain_age_under_1yr")]
    DomainAgeUnder1yr,
    /// Page text contains a risk keyword
    RiskKeywordInContent,
}

impl SignalId {
    /// Snake-case key, as used in reports and config files.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::NotOnWifi => "not_on_wifi",
            Self::DeviceRooted => "device_rooted",
            Self::BiometricNotEnrolled => "biometric_not_enrolled",
            Self::CameraPermissionGranted => "camera_permission_granted",
            Self::LocationPermissionGranted => "location_permission_granted",
            Self::NotHttps => "not_https",
            Self::MaliciousVerdict => "malicious_verdict",
            Self::DomainAgeUnder1yr => "domain_age_under_1yr",
            Self::RiskKeywordInContent => "risk_keyword_in_content",
        }
    }
}

impl std::fmt::Display for SignalId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A signal with its fixed penalty and the finding shown when it fires.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SignalDefinition {
    /// Which signal this is
    pub id: SignalId,
    /// Points subtracted from the score when triggered
    pub weight: u32,
    /// Human-readable explanation
    pub finding: &'static str,
}

/// Outcome of observing a single signal.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Observation {
    /// The risky condition holds
    Triggered,
    /// The risky condition does not hold
    Clear,
    /// The observation could not be made; never penalised
    #[default]
    Unknown,
}

impl Observation {
    /// Whether this observation applies the signal's penalty.
    #[must_use]
    pub const fn is_triggered(self) -> bool {
        matches!(self, Self::Triggered)
    }

    /// `Some(true)` triggers, `Some(false)` clears, `None` is unknown.
    #[must_use]
    pub const fn from_flag(flag: Option<bool>) -> Self {
        match flag {
            Some(true) => Self::Triggered,
            Some(false) => Self::Clear,
            None => Self::Unknown,
        }
    }
}

impl From<bool> for Observation {
    fn from(triggered: bool) -> Self {
        if triggered {
            Self::Triggered
        } else {
            Self::Clear
        }
    }
}

/// One evaluated entry of a [`SignalSet`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SignalEntry {
    /// The signal being observed
    pub definition: SignalDefinition,
    /// What was observed
    pub observation: Observation,
}

/// Ordered signals for one scoring invocation.
///
/// Insertion order is evaluation order, which is the order findings appear in.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SignalSet {
    entries: Vec<SignalEntry>,
}

impl SignalSet {
    /// Create an empty signal set.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Append an observed signal.
    pub fn push(&mut self, definition: SignalDefinition, observation: Observation) {
        self.entries.push(SignalEntry {
            definition,
            observation,
        });
    }

    /// Builder form of [`SignalSet::push`].
    #[must_use]
    pub fn with(mut self, definition: SignalDefinition, observation: Observation) -> Self {
        self.push(definition, observation);
        self
    }

    /// Entries in evaluation order.
    pub fn iter(&self) -> impl Iterator<Item = &SignalEntry> {
        self.entries.iter()
    }

    /// Number of signals in the set.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the set has no signals.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<'a> IntoIterator for &'a SignalSet {
    type Item = &'a SignalEntry;
    type IntoIter = std::slice::Iter<'a, SignalEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
