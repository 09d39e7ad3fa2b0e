//! Composite risk scoring.
//!
//! Every score starts at 100. Each triggered signal subtracts its fixed
//! weight and contributes one finding; the total is clamped to 0..=100 and
//! mapped to a [`ScoreLabel`](crate::types::ScoreLabel).

pub mod device;
pub mod website;
pub mod weights;

pub use device::{device_signals, score_device};
pub use website::{
    assess_website, find_risk_keyword, score_website, website_signals, WebsiteAssessment,
    RISK_KEYWORDS,
};

use tracing::debug;

use crate::types::{ScoreResult, SignalSet, MAX_SCORE};

/// Score a signal set.
///
/// Pure and infallible: unknown observations are skipped, and an empty set
/// scores 100.
#[must_use]
pub fn compute_score(signals: &SignalSet) -> ScoreResult {
    let mut total = i64::from(MAX_SCORE);
    let mut findings = Vec::new();

    for entry in signals {
        if entry.observation.is_triggered() {
            debug!(
                signal = %entry.definition.id,
                weight = entry.definition.weight,
                "signal triggered"
            );
            total -= i64::from(entry.definition.weight);
            findings.push(entry.definition.finding.to_string());
        }
    }

    ScoreResult::from_total(total, findings)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Observation, ScoreLabel, SignalDefinition, SignalId};
    use proptest::prelude::*;

    fn def(weight: u32) -> SignalDefinition {
        SignalDefinition {
            id: SignalId::NotOnWifi,
            weight,
            finding: "custom",
        }
    }

    #[test]
    fn empty_set_is_excellent() {
        let result = compute_score(&SignalSet::new());
        assert_eq!(result.score, 100);
        assert_eq!(result.label, ScoreLabel::Excellent);
        assert!(result.findings.is_empty());
    }

    #[test]
    fn label_boundaries_through_weights() {
        let cases = [
            (20, 80, ScoreLabel::Excellent),
            (21, 79, ScoreLabel::Good),
            (40, 60, ScoreLabel::Good),
            (41, 59, ScoreLabel::Average),
            (60, 40, ScoreLabel::Average),
            (61, 39, ScoreLabel::Poor),
            (100, 0, ScoreLabel::Poor),
        ];
        for (weight, score, label) in cases {
            let set = SignalSet::new().with(def(weight), Observation::Triggered);
            let result = compute_score(&set);
            assert_eq!(result.score, score, "weight {weight}");
            assert_eq!(result.label, label, "weight {weight}");
        }
    }

    #[test]
    fn unknown_and_clear_cost_nothing() {
        let set = SignalSet::new()
            .with(def(50), Observation::Unknown)
            .with(def(50), Observation::Clear);
        let result = compute_score(&set);
        assert_eq!(result.score, 100);
        assert!(result.findings.is_empty());
    }

    #[test]
    fn same_input_same_output() {
        let set = SignalSet::new()
            .with(def(30), Observation::Triggered)
            .with(def(15), Observation::Unknown);
        assert_eq!(compute_score(&set), compute_score(&set));
    }

    fn arb_observation() -> impl Strategy<Value = Observation> {
        prop_oneof![
            Just(Observation::Triggered),
            Just(Observation::Clear),
            Just(Observation::Unknown),
        ]
    }

    proptest! {
        #[test]
        fn score_always_in_range(
            entries in proptest::collection::vec((0u32..200, arb_observation()), 0..20)
        ) {
            let mut set = SignalSet::new();
            for (weight, obs) in &entries {
                set.push(def(*weight), *obs);
            }
            let result = compute_score(&set);
            prop_assert!(result.score <= 100);
            prop_assert_eq!(result.label, ScoreLabel::from_score(result.score));

            let triggered = entries.iter().filter(|(_, o)| o.is_triggered()).count();
            prop_assert_eq!(result.findings.len(), triggered);

            let penalty: i64 = entries
                .iter()
                .filter(|(_, o)| o.is_triggered())
                .map(|(w, _)| i64::from(*w))
                .sum();
            prop_assert_eq!(i64::from(result.score), (100 - penalty).max(0));
        }
    }
}
