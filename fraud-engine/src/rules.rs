//! Fraud heuristics
//!
//! Each rule contributes a fixed weight to the risk score when it fires.
//! `RiskRule::ALL` lists them in evaluation order.

use crate::{Transaction, TransactionType};
use serde::{Deserialize, Serialize};

/// Amount above which a transfer is "extremely large"
pub const EXTREME_AMOUNT: f64 = 100_000.0;
/// Amount above which a transfer is "large"
pub const LARGE_AMOUNT: f64 = 50_000.0;
/// Amount above which a transfer is "high"
pub const HIGH_AMOUNT: f64 = 20_000.0;
/// Amount above which medium-risk types, empty accounts and round numbers count
pub const NOTABLE_AMOUNT: f64 = 10_000.0;
/// Tolerance for balance arithmetic
pub const BALANCE_TOLERANCE: f64 = 0.01;
/// Modulus for round-number detection
pub const ROUND_NUMBER_UNIT: f64 = 1_000.0;
/// Share of the origin balance above which a transaction is suspicious
pub const BALANCE_RATIO_LIMIT: f64 = 0.8;

/// A single fraud heuristic
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RiskRule {
    /// amount > 100K
    ExtremeAmount,
    /// 50K < amount <= 100K
    LargeAmount,
    /// 20K < amount <= 50K
    HighAmount,
    /// TRANSFER or CASH_OUT
    HighRiskType,
    /// DEBIT or PAYMENT above 10K
    MediumRiskTypeHighAmount,
    /// Origin account emptied by the transaction
    AccountDrained,
    /// Large transaction from an origin account that started at zero
    EmptyOriginLargeAmount,
    /// Origin balance change does not equal the amount
    OriginBalanceMismatch,
    /// Destination balance change does not equal the amount
    DestinationBalanceMismatch,
    /// Whole-thousand amount above 10K
    RoundAmount,
    /// Amount above 80% of the origin balance
    BalanceRatio,
}

impl RiskRule {
    /// Every rule, in evaluation order
    pub const ALL: [RiskRule; 11] = [
        RiskRule::ExtremeAmount,
        RiskRule::LargeAmount,
        RiskRule::HighAmount,
        RiskRule::HighRiskType,
        RiskRule::MediumRiskTypeHighAmount,
        RiskRule::AccountDrained,
        RiskRule::EmptyOriginLargeAmount,
        RiskRule::OriginBalanceMismatch,
        RiskRule::DestinationBalanceMismatch,
        RiskRule::RoundAmount,
        RiskRule::BalanceRatio,
    ];

    /// Contribution to the risk score
    pub fn weight(&self) -> f64 {
        match self {
            RiskRule::ExtremeAmount => 0.5,
            RiskRule::LargeAmount => 0.3,
            RiskRule::HighAmount => 0.2,
            RiskRule::HighRiskType => 0.3,
            RiskRule::MediumRiskTypeHighAmount => 0.15,
            RiskRule::AccountDrained => 0.4,
            RiskRule::EmptyOriginLargeAmount => 0.35,
            RiskRule::OriginBalanceMismatch => 0.25,
            RiskRule::DestinationBalanceMismatch => 0.2,
            RiskRule::RoundAmount => 0.1,
            RiskRule::BalanceRatio => 0.25,
        }
    }

    /// Human-readable risk factor
    pub fn describe(&self, tx: &Transaction) -> String {
        match self {
            RiskRule::ExtremeAmount => "Extremely large transaction amount (>$100K)".to_string(),
            RiskRule::LargeAmount => "Large transaction amount (>$50K)".to_string(),
            RiskRule::HighAmount => "High transaction amount (>$20K)".to_string(),
            RiskRule::HighRiskType => format!("High-risk transaction type: {}", tx.tx_type()),
            RiskRule::MediumRiskTypeHighAmount => format!(
                "Medium-risk transaction type with high amount: {}",
                tx.tx_type()
            ),
            RiskRule::AccountDrained => "Account completely drained to zero".to_string(),
            RiskRule::EmptyOriginLargeAmount => {
                "Large transaction from previously empty account".to_string()
            }
            RiskRule::OriginBalanceMismatch => {
                "Mathematical inconsistency in balance calculation".to_string()
            }
            RiskRule::DestinationBalanceMismatch => {
                "Destination balance change doesn't match transaction amount".to_string()
            }
            RiskRule::RoundAmount => "Suspicious round-number transaction".to_string(),
            RiskRule::BalanceRatio => "Transaction represents >80% of account balance".to_string(),
        }
    }
}

/// Amount tier (rule 1); at most one tier fires
pub fn amount_tier(tx: &Transaction) -> Option<RiskRule> {
    let amount = tx.amount();
    if amount > EXTREME_AMOUNT {
        Some(RiskRule::ExtremeAmount)
    } else if amount > LARGE_AMOUNT {
        Some(RiskRule::LargeAmount)
    } else if amount > HIGH_AMOUNT {
        Some(RiskRule::HighAmount)
    } else {
        None
    }
}

/// Type tier (rule 2); unknown types never fire
pub fn type_tier(tx: &Transaction) -> Option<RiskRule> {
    let tx_type = tx.tx_type();
    if tx_type.is_high_risk() {
        Some(RiskRule::HighRiskType)
    } else if tx_type.is_medium_risk() && tx.amount() > NOTABLE_AMOUNT {
        Some(RiskRule::MediumRiskTypeHighAmount)
    } else {
        None
    }
}

/// Rule 3
pub fn account_drained(tx: &Transaction) -> bool {
    tx.old_balance_origin() > 0.0 && tx.new_balance_origin() == 0.0
}

/// Rule 4
pub fn empty_origin_large_amount(tx: &Transaction) -> bool {
    tx.old_balance_origin() == 0.0 && tx.amount() > NOTABLE_AMOUNT
}

/// Rule 5
pub fn origin_balance_mismatch(tx: &Transaction) -> bool {
    let expected = tx.old_balance_origin() - tx.amount();
    (tx.new_balance_origin() - expected).abs() > BALANCE_TOLERANCE
}

/// Rule 6; CASH_OUT is exempt since the receiver is not credited
pub fn destination_balance_mismatch(tx: &Transaction) -> bool {
    let increase = tx.new_balance_dest() - tx.old_balance_dest();
    (increase - tx.amount()).abs() > BALANCE_TOLERANCE
        && *tx.tx_type() != TransactionType::CashOut
}

/// Rule 7
pub fn round_amount(tx: &Transaction) -> bool {
    tx.amount() % ROUND_NUMBER_UNIT == 0.0 && tx.amount() > NOTABLE_AMOUNT
}

/// Rule 8; the denominator floors at 1 so an empty account never divides by zero
pub fn balance_ratio_exceeded(tx: &Transaction) -> bool {
    let ratio = tx.amount() / tx.old_balance_origin().max(1.0);
    ratio > BALANCE_RATIO_LIMIT
}
