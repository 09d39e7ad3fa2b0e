//! Website observations.

use serde::{Deserialize, Serialize};

/// Everything the website score looks at.
///
/// Each field is `None` when the corresponding lookup failed.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WebsiteObservations {
    /// URL scheme is `https`
    pub encrypted_transport: Option<bool>,
    /// Reputation service flagged the URL
    pub malicious: Option<bool>,
    /// Years since the domain was registered
    pub domain_age_years: Option<f64>,
    /// Fetched page text to scan for risk keywords
    pub content: Option<String>,
}
