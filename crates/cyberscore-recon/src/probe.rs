//! Fail-open assembly of scorer observations.
//!
//! Each lookup result is handed over as a [`ReconResult`]. An error is
//! logged, recorded as a degraded signal and leaves the observation
//! unknown; building never fails.

use cyberscore_core::{
    BiometricStatus, DeviceObservations, NetworkKind, SignalId, WebsiteObservations,
};
use serde::Serialize;
use tracing::warn;
use url::Url;

use crate::device::DeviceReport;
use crate::error::ReconResult;
use crate::reputation::Verdict;
use crate::transport::uses_encrypted_transport;
use crate::whois::checked_age_years;

/// A signal that could not be observed, and why.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DegradedSignal {
    pub signal: SignalId,
    pub reason: String,
}

/// Observations plus the signals that fell back to unknown.
#[derive(Debug, Clone, Serialize)]
pub struct Probed<T> {
    pub observations: T,
    pub degraded: Vec<DegradedSignal>,
}

fn accept<T>(
    degraded: &mut Vec<DegradedSignal>,
    signal: SignalId,
    result: ReconResult<T>,
) -> Option<T> {
    match result {
        Ok(value) => Some(value),
        Err(e) => {
            warn!(%signal, error = %e, "signal unavailable, scoring without it");
            degraded.push(DegradedSignal {
                signal,
                reason: e.to_string(),
            });
            None
        }
    }
}

/// Builder for website observations
#[derive(Debug, Default)]
pub struct WebsiteProbe {
    observations: WebsiteObservations,
    degraded: Vec<DegradedSignal>,
}

impl WebsiteProbe {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add the analysed URL (sets the transport signal)
    #[must_use]
    pub fn with_url(mut self, url: ReconResult<Url>) -> Self {
        self.observations.encrypted_transport = accept(&mut self.degraded, SignalId::NotHttps, url)
            .map(|u| uses_encrypted_transport(&u));
        self
    }

    /// Add the reputation verdict
    #[must_use]
    pub fn with_verdict(mut self, verdict: ReconResult<Verdict>) -> Self {
        self.observations.malicious = accept(&mut self.degraded, SignalId::MaliciousVerdict, verdict)
            .map(|v| v.is_malicious());
        self
    }

    /// Add the domain age in years; negative or non-finite ages degrade
    #[must_use]
    pub fn with_domain_age(mut self, years: ReconResult<f64>) -> Self {
        self.observations.domain_age_years = accept(
            &mut self.degraded,
            SignalId::DomainAgeUnder1yr,
            years.and_then(checked_age_years),
        );
        self
    }

    /// Add the fetched page text
    #[must_use]
    pub fn with_content(mut self, text: ReconResult<String>) -> Self {
        self.observations.content =
            accept(&mut self.degraded, SignalId::RiskKeywordInContent, text);
        self
    }

    #[must_use]
    pub fn finish(self) -> Probed<WebsiteObservations> {
        Probed {
            observations: self.observations,
            degraded: self.degraded,
        }
    }
}

/// Builder for device observations
#[derive(Debug, Default)]
pub struct DeviceProbe {
    observations: DeviceObservations,
    degraded: Vec<DegradedSignal>,
}

impl DeviceProbe {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from a collector report; later `with_*` calls override its fields
    #[must_use]
    pub fn with_report(mut self, report: ReconResult<DeviceReport>) -> Self {
        // A missing report degrades every device signal
        match report {
            Ok(report) => self.observations = report.observations(),
            Err(e) => {
                warn!(error = %e, "device report unavailable, scoring without it");
                for signal in [
                    SignalId::NotOnWifi,
                    SignalId::DeviceRooted,
                    SignalId::BiometricNotEnrolled,
                    SignalId::CameraPermissionGranted,
                    SignalId::LocationPermissionGranted,
                ] {
                    self.degraded.push(DegradedSignal {
                        signal,
                        reason: e.to_string(),
                    });
                }
            }
        }
        self
    }

    #[must_use]
    pub fn with_network(mut self, network: ReconResult<NetworkKind>) -> Self {
        if let Some(n) = accept(&mut self.degraded, SignalId::NotOnWifi, network) {
            self.observations.network = Some(n);
        }
        self
    }

    #[must_use]
    pub fn with_rooted(mut self, rooted: ReconResult<bool>) -> Self {
        if let Some(r) = accept(&mut self.degraded, SignalId::DeviceRooted, rooted) {
            self.observations.rooted = Some(r);
        }
        self
    }

    #[must_use]
    pub fn with_biometric(mut self, status: ReconResult<BiometricStatus>) -> Self {
        if let Some(b) = accept(&mut self.degraded, SignalId::BiometricNotEnrolled, status) {
            self.observations.biometric = Some(b);
        }
        self
    }

    #[must_use]
    pub fn with_camera(mut self, granted: ReconResult<bool>) -> Self {
        if let Some(g) = accept(&mut self.degraded, SignalId::CameraPermissionGranted, granted) {
            self.observations.camera_granted = Some(g);
        }
        self
    }

    #[must_use]
    pub fn with_location(mut self, granted: ReconResult<bool>) -> Self {
        if let Some(g) = accept(&mut self.degraded, SignalId::LocationPermissionGranted, granted) {
            self.observations.location_granted = Some(g);
        }
        self
    }

    #[must_use]
    pub fn finish(self) -> Probed<DeviceObservations> {
        Probed {
            observations: self.observations,
            degraded: self.degraded,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ReconError;
    use crate::transport::normalize_url;
    use cyberscore_core::{score_device, score_website, ScoreLabel};

    #[test]
    fn failed_lookups_still_produce_a_score() {
        let probed = WebsiteProbe::new()
            .with_url(normalize_url("http://example.com"))
            .with_verdict(Err(ReconError::Reputation("HTTP 503".into())))
            .with_domain_age(Err(ReconError::Whois("no creation date in record".into())))
            .with_content(Ok("Hello".into()))
            .finish();

        assert_eq!(probed.degraded.len(), 2);
        assert_eq!(probed.degraded[0].signal, SignalId::MaliciousVerdict);
        assert_eq!(probed.degraded[1].signal, SignalId::DomainAgeUnder1yr);

        let result = score_website(&probed.observations);
        assert_eq!(result.score, 70);
        assert_eq!(result.label, ScoreLabel::Good);
    }

    #[test]
    fn invalid_domain_age_is_degraded_not_penalised() {
        for years in [f64::NAN, -2.0] {
            let probed = WebsiteProbe::new().with_domain_age(Ok(years)).finish();
            assert_eq!(probed.observations.domain_age_years, None);
            assert_eq!(probed.degraded.len(), 1);
            assert_eq!(probed.degraded[0].signal, SignalId::DomainAgeUnder1yr);
            assert_eq!(score_website(&probed.observations).score, 100);
        }
    }

    #[test]
    fn malicious_verdict_flows_through() {
        let probed = WebsiteProbe::new()
            .with_verdict(Ok(Verdict::Malicious {
                threats: vec!["MALWARE".into()],
            }))
            .finish();
        assert_eq!(probed.observations.malicious, Some(true));
        assert!(probed.degraded.is_empty());
    }

    #[test]
    fn explicit_device_values_override_report() {
        let report = DeviceReport {
            network: Some(NetworkKind::Wifi),
            rooted: Some(true),
            ..DeviceReport::default()
        };
        let probed = DeviceProbe::new()
            .with_report(Ok(report))
            .with_rooted(Ok(false))
            .with_camera(Err(ReconError::DeviceReport("permission query rejected".into())))
            .finish();

        assert_eq!(probed.observations.rooted, Some(false));
        assert_eq!(probed.observations.camera_granted, None);
        assert_eq!(probed.degraded.len(), 1);
        assert_eq!(score_device(&probed.observations).score, 100);
    }

    #[test]
    fn missing_report_degrades_everything() {
        let probed = DeviceProbe::new()
            .with_report(Err(ReconError::DeviceReport("collector offline".into())))
            .finish();
        assert_eq!(probed.degraded.len(), 5);
        assert_eq!(score_device(&probed.observations).score, 100);
    }
}
