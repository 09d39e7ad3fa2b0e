//! Website score.

use serde::Serialize;

use super::compute_score;
use super::weights::{DOMAIN_AGE_UNDER_1YR, MALICIOUS_VERDICT, NOT_HTTPS, RISK_KEYWORD_IN_CONTENT};
use crate::types::{Observation, ScoreResult, SignalSet, WebsiteObservations};

/// Terms that flag page content as risky. Matched case-sensitively.
pub const RISK_KEYWORDS: &[&str] = &["scam", "phishing", "malware", "fake", "fraud", "not secure"];

/// Domains younger than this many years are penalised.
const MIN_DOMAIN_AGE_YEARS: f64 = 1.0;

/// Website score plus the keyword that tripped the content check, if any.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WebsiteAssessment {
    #[serde(flatten)]
    pub result: ScoreResult,
    pub matched_keyword: Option<&'static str>,
}

/// First risk keyword (in list order) contained in `text`.
#[must_use]
pub fn find_risk_keyword(text: &str) -> Option<&'static str> {
    RISK_KEYWORDS.iter().copied().find(|kw| text.contains(kw))
}

/// Build the website signal set in evaluation order.
#[must_use]
pub fn website_signals(obs: &WebsiteObservations) -> SignalSet {
    let young_domain = obs
        .domain_age_years
        .filter(|age| age.is_finite())
        .map(|age| age < MIN_DOMAIN_AGE_YEARS);
    let keyword_hit = obs.content.as_deref().map(|c| find_risk_keyword(c).is_some());

    SignalSet::new()
        .with(
            NOT_HTTPS,
            Observation::from_flag(obs.encrypted_transport.map(|tls| !tls)),
        )
        .with(MALICIOUS_VERDICT, Observation::from_flag(obs.malicious))
        .with(DOMAIN_AGE_UNDER_1YR, Observation::from_flag(young_domain))
        .with(RISK_KEYWORD_IN_CONTENT, Observation::from_flag(keyword_hit))
}

/// Score a website.
#[must_use]
pub fn score_website(obs: &WebsiteObservations) -> ScoreResult {
    compute_score(&website_signals(obs))
}

/// Score a website and report the matching keyword for display.
#[must_use]
pub fn assess_website(obs: &WebsiteObservations) -> WebsiteAssessment {
    WebsiteAssessment {
        result: score_website(obs),
        matched_keyword: obs.content.as_deref().and_then(find_risk_keyword),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::ScoreLabel;

    #[test]
    fn worst_case_clamps_to_zero() {
        let obs = WebsiteObservations {
            encrypted_transport: Some(false),
            malicious: Some(true),
            domain_age_years: Some(0.5),
            content: Some("Beware of phishing pages".into()),
        };
        let result = score_website(&obs);
        assert_eq!(result.score, 0);
        assert_eq!(result.label, ScoreLabel::Poor);
        assert_eq!(
            result.findings,
            vec![
                NOT_HTTPS.finding,
                MALICIOUS_VERDICT.finding,
                DOMAIN_AGE_UNDER_1YR.finding,
                RISK_KEYWORD_IN_CONTENT.finding,
            ]
        );
    }

    #[test]
    fn failed_lookups_are_fail_open() {
        let obs = WebsiteObservations {
            encrypted_transport: Some(true),
            ..WebsiteObservations::default()
        };
        let result = score_website(&obs);
        assert_eq!(result.score, 100);
        assert!(result.findings.is_empty());
    }

    #[test]
    fn many_keywords_cost_one_penalty() {
        let obs = WebsiteObservations {
            content: Some("scam fraud malware fake".into()),
            ..WebsiteObservations::default()
        };
        let assessment = assess_website(&obs);
        assert_eq!(assessment.result.score, 70);
        assert_eq!(assessment.result.findings.len(), 1);
        assert_eq!(assessment.matched_keyword, Some("scam"));
    }

    #[test]
    fn keyword_match_is_case_sensitive() {
        assert_eq!(find_risk_keyword("PHISHING alert"), None);
        assert_eq!(find_risk_keyword("this page is not secure"), Some("not secure"));
        assert_eq!(find_risk_keyword("Not Secure"), None);
    }

    #[test]
    fn domain_age_boundary() {
        let at = |age: f64| WebsiteObservations {
            domain_age_years: Some(age),
            ..WebsiteObservations::default()
        };
        assert_eq!(score_website(&at(0.99)).score, 80);
        assert_eq!(score_website(&at(1.0)).score, 100);
        assert_eq!(score_website(&at(f64::NAN)).score, 100);
    }

    #[test]
    fn plain_http_on_old_clean_domain_is_good() {
        let obs = WebsiteObservations {
            encrypted_transport: Some(false),
            malicious: Some(false),
            domain_age_years: Some(12.0),
            content: Some("Welcome to our bakery".into()),
        };
        let result = score_website(&obs);
        assert_eq!(result.score, 70);
        assert_eq!(result.label, ScoreLabel::Good);
    }
}
