//! Signal gathering for the cyberscore risk scorer.
//!
//! The scorer never performs I/O. Callers look things up (WHOIS servers,
//! reputation services, device APIs) and hand the raw results to this crate,
//! which turns them into scorer observations:
//!
//! - [`transport`]: URL normalisation and the HTTPS check
//! - [`whois`]: WHOIS text parsing and domain age
//! - [`reputation`]: reputation service verdicts
//! - [`device`]: device state reports
//! - [`probe`]: fail-open builders that assemble observations

mod error;

pub mod device;
pub mod probe;
pub mod reputation;
pub mod transport;
pub mod whois;

pub use error::{ReconError, ReconResult};
pub use probe::{DegradedSignal, DeviceProbe, Probed, WebsiteProbe};
