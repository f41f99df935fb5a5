//! Wraps scoring verdicts into API responses

use crate::models::PredictionResponse;
use chrono::{DateTime, Utc};
use fraud_engine::ScoringVerdict;
use uuid::Uuid;

/// `TXN_{YYYYMMDD}_{HHMMSS}_{NNNN}`
pub fn transaction_id(at: DateTime<Utc>) -> String {
    let suffix = Uuid::new_v4().as_u128() % 10_000;
    format!("TXN_{}_{:04}", at.format("%Y%m%d_%H%M%S"), suffix)
}

pub fn compose(verdict: ScoringVerdict, analysis_time: DateTime<Utc>) -> PredictionResponse {
    PredictionResponse {
        is_fraud: verdict.is_fraud,
        confidence: verdict.rounded_confidence(),
        risk_level: verdict.risk_level,
        risk_score: verdict.rounded_score(),
        risk_factors: verdict.risk_factors,
        analysis_time,
        transaction_id: transaction_id(analysis_time),
    }
}
