//! URL normalisation and transport checks.

use url::Url;

use crate::error::{ReconError, ReconResult};

/// Parse user input as a URL, assuming `https://` when no HTTP scheme is given.
pub fn normalize_url(input: &str) -> ReconResult<Url> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(ReconError::InvalidUrl("empty URL".into()));
    }

    let candidate = if trimmed.starts_with("http://") || trimmed.starts_with("https://") {
        trimmed.to_string()
    } else {
        format!("https://{trimmed}")
    };

    let url = Url::parse(&candidate).map_err(|e| ReconError::InvalidUrl(format!("{trimmed}: {e}")))?;
    if url.host_str().is_none() {
        return Err(ReconError::InvalidUrl(format!("{trimmed}: missing host")));
    }
    Ok(url)
}

/// Whether the URL is served over TLS.
#[must_use]
pub fn uses_encrypted_transport(url: &Url) -> bool {
    url.scheme() == "https"
}

/// Registrable-ish domain for WHOIS: the host without a leading `www.`.
#[must_use]
pub fn whois_domain(url: &Url) -> Option<String> {
    url.host_str()
        .map(|h| h.strip_prefix("www.").unwrap_or(h).to_lowercase())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bare_host_gets_https() {
        let url = normalize_url("example.com/login").unwrap();
        assert_eq!(url.as_str(), "https://example.com/login");
        assert!(uses_encrypted_transport(&url));
    }

    #[test]
    fn explicit_http_is_kept() {
        let url = normalize_url("  http://example.com ").unwrap();
        assert!(!uses_encrypted_transport(&url));
    }

    #[test]
    fn garbage_is_rejected() {
        assert!(normalize_url("").is_err());
        assert!(normalize_url("http://").is_err());
    }

    #[test]
    fn domain_strips_www() {
        let url = normalize_url("https://WWW.Example.org/a").unwrap();
        assert_eq!(whois_domain(&url).as_deref(), Some("example.org"));
    }
}
