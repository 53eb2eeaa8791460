//! Workplace psychosocial risk assessment.
//!
//! The [`assessment`] module holds the scoring engine: dimension catalogs, reverse-item and
//! polarity handling, risk classification, the risk-weighted composite index, alert rules, and
//! rule-table driven recommendations. The remaining modules carry the surrounding service
//! plumbing (configuration, telemetry, and the application error type).

pub mod assessment;
pub mod config;
pub mod error;
pub mod telemetry;
