//! Fraud Engine
//!
//! Deterministic, rule-based fraud risk scoring for single transactions

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod error;
pub mod rules;
pub mod scoring;
pub mod types;

pub use error::{Error, Result};
pub use rules::RiskRule;
pub use scoring::RiskScorer;
pub use types::*;
