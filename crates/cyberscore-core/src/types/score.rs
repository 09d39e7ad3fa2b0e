//! Score result and qualitative label.

use serde::{Deserialize, Serialize};

/// Highest possible score, and the starting point of every computation.
pub const MAX_SCORE: u8 = 100;

/// Qualitative band for a score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ScoreLabel {
    /// 80..=100
    Excellent,
    /// 60..=79
    Good,
    /// 40..=59
    Average,
    /// 0..=39
    Poor,
}

impl ScoreLabel {
    /// Map a clamped score to its band. Lower bounds are inclusive.
    #[must_use]
    pub const fn from_score(score: u8) -> Self {
        match score {
            80..=u8::MAX => Self::Excellent,
            60..=79 => Self::Good,
            40..=59 => Self::Average,
            _ => Self::Poor,
        }
    }

    /// Label text.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Excellent => "Excellent",
            Self::Good => "Good",
            Self::Average => "Average",
            Self::Poor => "Poor",
        }
    }
}

impl std::fmt::Display for ScoreLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Output of one scoring invocation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreResult {
    /// Score in 0..=100
    pub score: u8,
    /// Band derived from `score`
    pub label: ScoreLabel,
    /// Findings of triggered signals, in evaluation order
    pub findings: Vec<String>,
}

impl ScoreResult {
    /// Build a result from a raw running total, clamping it into range.
    #[must_use]
    pub fn from_total(total: i64, findings: Vec<String>) -> Self {
        let score = u8::try_from(total.clamp(0, i64::from(MAX_SCORE))).unwrap_or(0);
        Self {
            score,
            label: ScoreLabel::from_score(score),
            findings,
        }
    }

    /// True when nothing was flagged.
    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.findings.is_empty()
    }
}
