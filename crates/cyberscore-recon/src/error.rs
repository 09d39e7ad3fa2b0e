use thiserror::Error;

/// Result type alias for signal gathering
pub type ReconResult<T> = std::result::Result<T, ReconError>;

/// Errors from gathering a single signal.
///
/// None of these abort a score; probes degrade them to unknown observations.
#[derive(Error, Debug)]
pub enum ReconError {
    /// URL could not be parsed
    #[error("invalid URL: {0}")]
    InvalidUrl(String),

    /// WHOIS text had no usable creation date
    #[error("WHOIS error: {0}")]
    Whois(String),

    /// Reputation response was malformed
    #[error("reputation error: {0}")]
    Reputation(String),

    /// Device report was malformed
    #[error("device report error: {0}")]
    DeviceReport(String),

    /// Reading collaborator output failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Collaborator output was not valid JSON
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
