//! Password strength checking and generation.

use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::error::{CoreError, Result};

const UPPERCASE: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ";
const LOWERCASE: &[u8] = b"abcdefghijklmnopqrstuvwxyz";
const DIGITS: &[u8] = b"0123456789";
const SPECIALS: &[u8] = b"@$!%*?&#";

/// Minimum length that fits one character of every class.
pub const MIN_GENERATED_LENGTH: usize = 4;

/// Longest password that will be generated.
pub const MAX_GENERATED_LENGTH: usize = 128;

/// Length used when none is configured.
pub const DEFAULT_GENERATED_LENGTH: usize = 12;

/// Coarse password strength rating.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum PasswordStrength {
    Weak,
    Medium,
    Strong,
}

impl std::fmt::Display for PasswordStrength {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Weak => write!(f, "Weak"),
            Self::Medium => write!(f, "Medium"),
            Self::Strong => write!(f, "Strong"),
        }
    }
}

/// Which strength criteria a password meets.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct StrengthReport {
    pub long_enough: bool,
    pub has_uppercase: bool,
    pub has_digit: bool,
    pub has_special: bool,
}

impl StrengthReport {
    /// Evaluate a password against the four criteria.
    #[must_use]
    pub fn evaluate(password: &str) -> Self {
        Self {
            long_enough: password.chars().count() >= 8,
            has_uppercase: password.chars().any(|c| c.is_ascii_uppercase()),
            has_digit: password.chars().any(|c| c.is_ascii_digit()),
            has_special: password.bytes().any(|b| SPECIALS.contains(&b)),
        }
    }

    /// Number of criteria met (0..=4).
    #[must_use]
    pub fn points(&self) -> u8 {
        u8::from(self.long_enough)
            + u8::from(self.has_uppercase)
            + u8::from(self.has_digit)
            + u8::from(self.has_special)
    }

    /// Strength band for the points earned.
    #[must_use]
    pub fn strength(&self) -> PasswordStrength {
        match self.points() {
            0 | 1 => PasswordStrength::Weak,
            2 => PasswordStrength::Medium,
            _ => PasswordStrength::Strong,
        }
    }
}

/// Rate a password: 0-1 criteria Weak, 2 Medium, 3-4 Strong.
#[must_use]
pub fn check_strength(password: &str) -> PasswordStrength {
    StrengthReport::evaluate(password).strength()
}

/// Check that `length` lies in `MIN_GENERATED_LENGTH..=MAX_GENERATED_LENGTH`.
pub fn validate_length(length: usize) -> Result<()> {
    if (MIN_GENERATED_LENGTH..=MAX_GENERATED_LENGTH).contains(&length) {
        Ok(())
    } else {
        Err(CoreError::InvalidPasswordLength {
            requested: length,
            minimum: MIN_GENERATED_LENGTH,
            maximum: MAX_GENERATED_LENGTH,
        })
    }
}

/// Generate a random password with at least one character of every class.
pub fn generate_password(length: usize) -> Result<String> {
    validate_length(length)?;

    let mut rng = rand::thread_rng();
    let all: Vec<u8> = [UPPERCASE, LOWERCASE, DIGITS, SPECIALS].concat();

    let mut bytes: Vec<u8> = [UPPERCASE, LOWERCASE, DIGITS, SPECIALS]
        .iter()
        .map(|class| class[rng.gen_range(0..class.len())])
        .collect();
    while bytes.len() < length {
        bytes.push(all[rng.gen_range(0..all.len())]);
    }
    bytes.shuffle(&mut rng);

    String::from_utf8(bytes).map_err(|e| CoreError::Internal(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strength_bands() {
        assert_eq!(check_strength(""), PasswordStrength::Weak);
        assert_eq!(check_strength("abcdefgh"), PasswordStrength::Weak);
        assert_eq!(check_strength("Abcdefgh"), PasswordStrength::Medium);
        assert_eq!(check_strength("123456"), PasswordStrength::Weak);
        assert_eq!(check_strength("Pass@123"), PasswordStrength::Strong);
        assert_eq!(check_strength("aB3#"), PasswordStrength::Strong);
    }

    #[test]
    fn report_lists_criteria() {
        let report = StrengthReport::evaluate("hunter2!");
        assert!(report.long_enough);
        assert!(!report.has_uppercase);
        assert!(report.has_digit);
        assert!(report.has_special);
        assert_eq!(report.points(), 3);
    }

    #[test]
    fn generated_password_has_every_class() {
        for _ in 0..50 {
            let pw = generate_password(DEFAULT_GENERATED_LENGTH).unwrap();
            assert_eq!(pw.len(), DEFAULT_GENERATED_LENGTH);
            assert!(pw.bytes().any(|b| UPPERCASE.contains(&b)));
            assert!(pw.bytes().any(|b| LOWERCASE.contains(&b)));
            assert!(pw.bytes().any(|b| DIGITS.contains(&b)));
            assert!(pw.bytes().any(|b| SPECIALS.contains(&b)));
            assert_eq!(check_strength(&pw), PasswordStrength::Strong);
        }
    }

    #[test]
    fn minimum_length_enforced() {
        assert_eq!(generate_password(4).unwrap().len(), 4);
        assert!(matches!(
            generate_password(3),
            Err(CoreError::InvalidPasswordLength { requested: 3, minimum: 4, .. })
        ));
    }

    #[test]
    fn maximum_length_enforced() {
        assert_eq!(generate_password(MAX_GENERATED_LENGTH).unwrap().len(), 128);
        assert!(matches!(
            generate_password(MAX_GENERATED_LENGTH + 1),
            Err(CoreError::InvalidPasswordLength { requested: 129, maximum: 128, .. })
        ));
        assert!(validate_length(100_000_000_000).is_err());
    }
}
