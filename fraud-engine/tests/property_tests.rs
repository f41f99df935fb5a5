//! Property-based tests for the fraud engine
//!
//! Covers invariants that must hold for every valid transaction:
//! - Scores are never negative
//! - The fraud flag depends only on the score
//! - Threshold rules are monotone in the amount
//! - Scoring is deterministic

use fraud_engine::{RiskLevel, RiskRule, RiskScorer, Transaction};
use proptest::prelude::*;

fn tx_type() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("PAYMENT".to_string()),
        Just("TRANSFER".to_string()),
        Just("CASH_OUT".to_string()),
        Just("CASH_IN".to_string()),
        Just("DEBIT".to_string()),
        "[A-Z_]{1,12}",
    ]
}

fn money() -> impl Strategy<Value = f64> {
    prop_oneof![
        Just(0.0),
        (0u64..1_000u64).prop_map(|thousands| (thousands * 1_000) as f64),
        0.0f64..500_000.0f64,
    ]
}

/// Combined weight of the rules whose condition only tightens as the amount grows
fn threshold_weight(rules: &[RiskRule]) -> f64 {
    rules
        .iter()
        .filter(|rule| {
            matches!(
                rule,
                RiskRule::ExtremeAmount
                    | RiskRule::LargeAmount
                    | RiskRule::HighAmount
                    | RiskRule::MediumRiskTypeHighAmount
                    | RiskRule::EmptyOriginLargeAmount
                    | RiskRule::BalanceRatio
            )
        })
        .map(RiskRule::weight)
        .sum()
}

proptest! {
    /// Property: every weight is non-negative, so the score is too
    #[test]
    fn score_is_non_negative(
        kind in tx_type(),
        amount in money(),
        old_org in money(),
        new_org in money(),
        old_dest in money(),
        new_dest in money(),
    ) {
        let tx = Transaction::new(kind, amount, old_org, new_org, old_dest, new_dest).unwrap();
        let verdict = RiskScorer::new().score(&tx);

        prop_assert!(verdict.risk_score >= 0.0);
        prop_assert!(verdict.confidence >= 0.0 && verdict.confidence <= 100.0);
    }

    /// Property: fraud flag is exactly score >= 0.5, whatever the level
    #[test]
    fn fraud_flag_follows_score(
        kind in tx_type(),
        amount in money(),
        old_org in money(),
        new_org in money(),
        old_dest in money(),
        new_dest in money(),
    ) {
        let tx = Transaction::new(kind, amount, old_org, new_org, old_dest, new_dest).unwrap();
        let verdict = RiskScorer::new().score(&tx);

        prop_assert_eq!(verdict.is_fraud, verdict.risk_score >= 0.5);
        prop_assert_eq!(verdict.risk_level, RiskLevel::from_score(verdict.risk_score));
    }

    /// Property: factors and rules line up one-to-one and sum to the score
    #[test]
    fn factors_match_triggered_rules(
        kind in tx_type(),
        amount in money(),
        old_org in money(),
        new_org in money(),
        old_dest in money(),
        new_dest in money(),
    ) {
        let tx = Transaction::new(kind, amount, old_org, new_org, old_dest, new_dest).unwrap();
        let verdict = RiskScorer::new().score(&tx);

        prop_assert_eq!(verdict.risk_factors.len(), verdict.triggered_rules.len());
        let total: f64 = verdict.triggered_rules.iter().map(RiskRule::weight).sum();
        prop_assert!((total - verdict.risk_score).abs() < 1e-9);

        let order: Vec<usize> = verdict
            .triggered_rules
            .iter()
            .map(|rule| RiskRule::ALL.iter().position(|r| r == rule).unwrap())
            .collect();
        prop_assert!(order.windows(2).all(|w| w[0] < w[1]));
    }

    /// Property: raising the amount never lowers the threshold-rule weight
    #[test]
    fn threshold_rules_monotone_in_amount(
        kind in tx_type(),
        amount in money(),
        increase in 0.0f64..200_000.0f64,
        old_org in money(),
        new_org in money(),
        old_dest in money(),
        new_dest in money(),
    ) {
        let scorer = RiskScorer::new();
        let build = |kind: String, amount: f64| {
            Transaction::new(kind, amount, old_org, new_org, old_dest, new_dest).unwrap()
        };
        let lower = build(kind.clone(), amount);
        let higher = build(kind, amount + increase);

        let lower_weight = threshold_weight(&scorer.triggered_rules(&lower));
        let higher_weight = threshold_weight(&scorer.triggered_rules(&higher));

        prop_assert!(higher_weight >= lower_weight - 1e-9);
    }

    /// Property: same input, same verdict
    #[test]
    fn scoring_deterministic(
        kind in tx_type(),
        amount in money(),
        old_org in money(),
        new_org in money(),
        old_dest in money(),
        new_dest in money(),
    ) {
        let tx = Transaction::new(kind, amount, old_org, new_org, old_dest, new_dest).unwrap();
        let scorer = RiskScorer::new();

        prop_assert_eq!(scorer.score(&tx), scorer.score(&tx.clone()));
    }

    /// Property: negative amounts never produce a transaction
    #[test]
    fn negative_amount_rejected(amount in -1_000_000.0f64..-0.0001f64) {
        prop_assert!(Transaction::new("PAYMENT", amount, 0.0, 0.0, 0.0, 0.0).is_err());
    }
}
