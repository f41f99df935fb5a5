//! Risk scoring engine

use crate::rules::{self, RiskRule};
use crate::{RiskLevel, ScoringVerdict, Transaction};
use tracing::debug;

/// Score at or above which a transaction is flagged as fraud.
///
/// Sits inside the medium band, so some medium verdicts are flagged.
pub const FRAUD_THRESHOLD: f64 = 0.5;

/// Risk scorer
///
/// Stateless; a single instance can be shared across threads.
#[derive(Debug, Clone, Copy, Default)]
pub struct RiskScorer;

impl RiskScorer {
    /// Create new risk scorer
    pub fn new() -> Self {
        Self
    }

    /// Rules that fire for `tx`, in evaluation order
    pub fn triggered_rules(&self, tx: &Transaction) -> Vec<RiskRule> {
        let mut triggered = Vec::with_capacity(RiskRule::ALL.len());

        if let Some(rule) = rules::amount_tier(tx) {
            triggered.push(rule);
        }
        if let Some(rule) = rules::type_tier(tx) {
            triggered.push(rule);
        }

        let checks: [(RiskRule, fn(&Transaction) -> bool); 6] = [
            (RiskRule::AccountDrained, rules::account_drained),
            (RiskRule::EmptyOriginLargeAmount, rules::empty_origin_large_amount),
            (RiskRule::OriginBalanceMismatch, rules::origin_balance_mismatch),
            (RiskRule::DestinationBalanceMismatch, rules::destination_balance_mismatch),
            (RiskRule::RoundAmount, rules::round_amount),
            (RiskRule::BalanceRatio, rules::balance_ratio_exceeded),
        ];
        triggered.extend(
            checks
                .iter()
                .filter(|(_, check)| check(tx))
                .map(|(rule, _)| *rule),
        );

        triggered
    }

    /// Score a transaction
    pub fn score(&self, tx: &Transaction) -> ScoringVerdict {
        let triggered_rules = self.triggered_rules(tx);

        let risk_score = triggered_rules
            .iter()
            .map(RiskRule::weight)
            .fold(0.0, |acc, weight| acc + weight);
        let risk_factors: Vec<String> = triggered_rules.iter().map(|r| r.describe(tx)).collect();
        let risk_level = RiskLevel::from_score(risk_score);
        let confidence = confidence(risk_score, risk_level);
        let is_fraud = risk_score >= FRAUD_THRESHOLD;

        debug!(
            risk_score,
            risk_level = %risk_level,
            factors = risk_factors.len(),
            "Transaction scored"
        );

        ScoringVerdict {
            risk_score,
            risk_level,
            confidence,
            is_fraud,
            risk_factors,
            triggered_rules,
        }
    }
}

/// Presentation confidence for a score within its band
pub fn confidence(risk_score: f64, level: RiskLevel) -> f64 {
    match level {
        RiskLevel::High => (75.0 + risk_score * 25.0).min(95.0),
        RiskLevel::Medium => (60.0 + risk_score * 35.0).min(85.0),
        RiskLevel::Low => (80.0 - risk_score * 20.0).max(60.0),
    }
}
