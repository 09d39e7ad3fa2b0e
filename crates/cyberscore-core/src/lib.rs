//! Core scoring and learning tools for cyberscore.
//!
//! - **Scoring**: the composite risk scorer ([`compute_score`]) and its two
//!   instantiations, [`score_device`] and [`score_website`]
//! - **Types**: signals, observations and [`ScoreResult`]
//! - **Password**: strength rating and generation
//! - **Quiz** and **Lessons**: the awareness questionnaire and reading list
//! - **Errors**: [`CoreError`]
//!
//! # Example
//!
//! ```rust
//! use cyberscore_core::{score_device, DeviceObservations, NetworkKind, ScoreLabel};
//!
//! let obs = DeviceObservations {
//!     network: Some(NetworkKind::Cellular),
//!     rooted: Some(false),
//!     ..DeviceObservations::default()
//! };
//! let result = score_device(&obs);
//! assert_eq!(result.score, 80);
//! assert_eq!(result.label, ScoreLabel::Excellent);
//! ```

mod error;
pub mod lessons;
pub mod password;
pub mod quiz;
pub mod scoring;
pub mod types;

pub use error::{CoreError, Result};
pub use scoring::{
    assess_website, compute_score, score_device, score_website, WebsiteAssessment,
};
pub use types::*;
