//! WHOIS record parsing and domain age.
//!
//! Lookups happen elsewhere; this module only interprets the raw text a
//! WHOIS server returned.

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use serde::Serialize;

use crate::error::{ReconError, ReconResult};

const DAYS_PER_YEAR: f64 = 365.25;

/// Fields extracted from a WHOIS response
#[derive(Debug, Clone, Default, Serialize)]
pub struct WhoisRecord {
    /// Registrar name
    pub registrar: Option<String>,
    /// Domain creation date, if it could be parsed
    pub creation_date: Option<DateTime<Utc>>,
    /// Domain expiration date, if it could be parsed
    pub expiration_date: Option<DateTime<Utc>>,
    /// Name servers
    pub name_servers: Vec<String>,
    /// Domain status codes
    pub status: Vec<String>,
}

impl WhoisRecord {
    /// Domain age in years at `now`, or `None` without a creation date.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn age_years(&self, now: DateTime<Utc>) -> Option<f64> {
        self.creation_date
            .map(|created| (now - created).num_days().max(0) as f64 / DAYS_PER_YEAR)
    }

    /// Like [`WhoisRecord::age_years`] but an error when the date is missing.
    pub fn require_age_years(&self, now: DateTime<Utc>) -> ReconResult<f64> {
        self.age_years(now)
            .ok_or_else(|| ReconError::Whois("no creation date in record".into()))
    }
}

/// Parse a raw WHOIS response.
///
/// Unknown keys are ignored; the first creation/expiry line wins.
#[must_use]
pub fn parse_whois(raw: &str) -> WhoisRecord {
    let mut record = WhoisRecord::default();

    // Simple line-based parsing
    for line in raw.lines() {
        let line = line.trim();
        if line.starts_with('%') || line.starts_with('#') {
            continue;
        }
        let Some((key, value)) = line.split_once(':') else {
            continue;
        };
        let key = key.trim().to_lowercase();
        let value = value.trim();
        if value.is_empty() {
            continue;
        }

        match key.as_str() {
            "registrar" => {
                record.registrar.get_or_insert_with(|| value.to_string());
            }
            "creation date" | "created" | "created on" | "registered on" | "domain registration date" => {
                if record.creation_date.is_none() {
                    record.creation_date = parse_date(value);
                }
            }
            "expiration date" | "expires" | "expires on" | "registry expiry date"
            | "registrar registration expiration date" => {
                if record.expiration_date.is_none() {
                    record.expiration_date = parse_date(value);
                }
            }
            "name server" | "nserver" => record.name_servers.push(value.to_lowercase()),
            "status" | "domain status" => record.status.push(value.to_string()),
            _ => {}
        }
    }

    record
}

/// Parse the date formats WHOIS servers commonly emit.
/// Accept a domain age only if it is a finite, non-negative number of years.
pub fn checked_age_years(years: f64) -> ReconResult<f64> {
    if years.is_finite() && years >= 0.0 {
        Ok(years)
    } else {
        Err(ReconError::Whois(format!(
            "domain age must be a non-negative number of years, got {years}"
        )))
    }
}

fn parse_date(value: &str) -> Option<DateTime<Utc>> {
    // Some registries append a timezone name after the timestamp
    let value = value.split_whitespace().next()?;

    if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        return Some(dt.with_timezone(&Utc));
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S") {
        return Some(dt.and_utc());
    }
    ["%Y-%m-%d", "%d-%b-%Y", "%Y.%m.%d", "%d.%m.%Y"]
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(value, fmt).ok())
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|dt| dt.and_utc())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    const VERISIGN: &str = "\
   Domain Name: EXAMPLE.COM
   Registry Domain ID: 2336799_DOMAIN_COM-VRSN
   Registrar WHOIS Server: whois.iana.org
   Updated Date: 2024-08-14T07:01:34Z
   Creation Date: 1995-08-14T04:00:00Z
   Registry Expiry Date: 2025-08-13T04:00:00Z
   Registrar: RESERVED-Internet Assigned Numbers Authority
   Domain Status: clientDeleteProhibited https://icann.org/epp#clientDeleteProhibited
   Name Server: A.IANA-SERVERS.NET
   Name Server: B.IANA-SERVERS.NET
";

    #[test]
    fn parses_verisign_style_record() {
        let record = parse_whois(VERISIGN);
        assert_eq!(
            record.registrar.as_deref(),
            Some("RESERVED-Internet Assigned Numbers Authority")
        );
        assert_eq!(
            record.creation_date,
            Some(Utc.with_ymd_and_hms(1995, 8, 14, 4, 0, 0).unwrap())
        );
        assert_eq!(record.name_servers, vec!["a.iana-servers.net", "b.iana-servers.net"]);
        assert_eq!(record.status.len(), 1);
    }

    #[test]
    fn parses_day_month_year() {
        let record = parse_whois("created: 03-Mar-2024\nregistrar: Foo");
        assert_eq!(
            record.creation_date,
            Some(Utc.with_ymd_and_hms(2024, 3, 3, 0, 0, 0).unwrap())
        );
    }

    #[test]
    fn age_in_years() {
        let record = parse_whois("Creation Date: 2024-01-01");
        let now = Utc.with_ymd_and_hms(2024, 7, 2, 0, 0, 0).unwrap();
        let age = record.age_years(now).unwrap();
        assert!(age > 0.49 && age < 0.51, "age was {age}");
    }

    #[test]
    fn missing_creation_date_is_unknown() {
        let record = parse_whois("% no match for domain\nDomain Status: free");
        assert!(record.age_years(Utc::now()).is_none());
        assert!(record.require_age_years(Utc::now()).is_err());
    }

    #[test]
    fn nonsensical_ages_are_rejected() {
        assert!(checked_age_years(0.0).is_ok());
        assert!(checked_age_years(3.5).is_ok());
        assert!(checked_age_years(f64::NAN).is_err());
        assert!(checked_age_years(f64::INFINITY).is_err());
        assert!(checked_age_years(-1.0).is_err());
    }
}
