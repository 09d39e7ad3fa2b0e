use thiserror::Error;

/// Result type alias for cyberscore operations
pub type Result<T> = std::result::Result<T, CoreError>;

/// Errors that can occur outside the scorer itself.
///
/// Scoring never fails; these cover the supporting tools (password
/// generation, questionnaire grading, lessons) and device value parsing.
#[derive(Error, Debug)]
pub enum CoreError {
    /// Requested password length is outside the generatable range
    #[error("password length {requested} is out of range, must be between {minimum} and {maximum}")]
    InvalidPasswordLength {
        /// Length that was asked for
        requested: usize,
        /// Smallest length that holds one character of every class
        minimum: usize,
        /// Largest length that will be generated
        maximum: usize,
    },

    /// Questionnaire answers don't line up with the questions
    #[error("expected {expected} answers, got {actual}")]
    AnswerCount {
        /// Number of questions
        expected: usize,
        /// Number of answers supplied
        actual: usize,
    },

    /// Unknown lesson module key
    #[error("unknown lesson module: {0}")]
    UnknownModule(String),

    /// Unrecognised device state value
    #[error("device report unavailable: {0}")]
    DeviceReport(String),

    /// Generic internal error
    #[error("internal error: {0}")]
    Internal(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_problem() {
        let err = CoreError::InvalidPasswordLength {
            requested: 2,
            minimum: 4,
            maximum: 128,
        };
        assert_eq!(
            err.to_string(),
            "password length 2 is out of range, must be between 4 and 128"
        );
    }
}
