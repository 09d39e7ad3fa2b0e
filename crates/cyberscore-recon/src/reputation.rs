//! URL reputation verdicts.
//!
//! Interprets the JSON body returned by a Safe Browsing style
//! `threatMatches:find` call. The call itself is made by the caller.

use serde::{Deserialize, Serialize};

use crate::error::{ReconError, ReconResult};

/// Reputation service verdict for a URL.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "verdict", rename_all = "lowercase")]
pub enum Verdict {
    Clean,
    Malicious {
        /// Threat types reported, e.g. `MALWARE`, `SOCIAL_ENGINEERING`
        threats: Vec<String>,
    },
}

impl Verdict {
    #[must_use]
    pub const fn is_malicious(&self) -> bool {
        matches!(self, Self::Malicious { .. })
    }
}

#[derive(Debug, Deserialize)]
struct ThreatMatchesResponse {
    #[serde(default)]
    matches: Vec<ThreatMatch>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ThreatMatch {
    #[serde(default)]
    threat_type: Option<String>,
}

/// Parse a reputation response body.
pub fn parse_verdict(body: &str) -> ReconResult<Verdict> {
    if body.trim().is_empty() {
        return Err(ReconError::Reputation("empty response body".into()));
    }

    let response: ThreatMatchesResponse = serde_json::from_str(body)?;
    if response.matches.is_empty() {
        return Ok(Verdict::Clean);
    }

    let mut threats: Vec<String> = Vec::new();
    for threat in response.matches.into_iter().filter_map(|m| m.threat_type) {
        if !threats.contains(&threat) {
            threats.push(threat);
        }
    }
    Ok(Verdict::Malicious { threats })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_object_is_clean() {
        assert_eq!(parse_verdict("{}").unwrap(), Verdict::Clean);
        assert_eq!(parse_verdict(r#"{"matches": []}"#).unwrap(), Verdict::Clean);
    }

    #[test]
    fn matches_are_malicious() {
        let body = r#"{
            "matches": [
                {"threatType": "MALWARE", "platformType": "ANY_PLATFORM",
                 "threat": {"url": "http://malware.testing.google.test/testing/malware/"}},
                {"threatType": "SOCIAL_ENGINEERING", "platformType": "ANY_PLATFORM"},
                {"threatType": "MALWARE", "platformType": "WINDOWS"}
            ]
        }"#;
        let verdict = parse_verdict(body).unwrap();
        assert!(verdict.is_malicious());
        assert_eq!(
            verdict,
            Verdict::Malicious {
                threats: vec!["MALWARE".into(), "SOCIAL_ENGINEERING".into()]
            }
        );
    }

    #[test]
    fn broken_bodies_are_errors() {
        assert!(parse_verdict("").is_err());
        assert!(parse_verdict("<html>502 Bad Gateway</html>").is_err());
    }
}
