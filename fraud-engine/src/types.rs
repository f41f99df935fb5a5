//! Core types for fraud engine

use crate::{Error, Result, RiskRule};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Transaction type label
///
/// The set of labels is open: anything not listed here is kept verbatim in
/// [`TransactionType::Other`] and never matches a type-based rule.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum TransactionType {
    /// PAYMENT
    Payment,
    /// TRANSFER
    Transfer,
    /// CASH_OUT
    CashOut,
    /// CASH_IN
    CashIn,
    /// DEBIT
    Debit,
    /// Any other label
    Other(String),
}

impl TransactionType {
    /// Wire label
    pub fn as_str(&self) -> &str {
        match self {
            TransactionType::Payment => "PAYMENT",
            TransactionType::Transfer => "TRANSFER",
            TransactionType::CashOut => "CASH_OUT",
            TransactionType::CashIn => "CASH_IN",
            TransactionType::Debit => "DEBIT",
            TransactionType::Other(label) => label,
        }
    }

    /// TRANSFER and CASH_OUT
    pub fn is_high_risk(&self) -> bool {
        matches!(self, TransactionType::Transfer | TransactionType::CashOut)
    }

    /// DEBIT and PAYMENT
    pub fn is_medium_risk(&self) -> bool {
        matches!(self, TransactionType::Debit | TransactionType::Payment)
    }
}

impl From<String> for TransactionType {
    fn from(label: String) -> Self {
        match label.as_str() {
            "PAYMENT" => TransactionType::Payment,
            "TRANSFER" => TransactionType::Transfer,
            "CASH_OUT" => TransactionType::CashOut,
            "CASH_IN" => TransactionType::CashIn,
            "DEBIT" => TransactionType::Debit,
            _ => TransactionType::Other(label),
        }
    }
}

impl From<&str> for TransactionType {
    fn from(label: &str) -> Self {
        TransactionType::from(label.to_string())
    }
}

impl From<TransactionType> for String {
    fn from(tx_type: TransactionType) -> Self {
        match tx_type {
            TransactionType::Other(label) => label,
            known => known.as_str().to_string(),
        }
    }
}

impl fmt::Display for TransactionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single transaction to be scored
///
/// Every numeric field is finite and non-negative; [`Transaction::new`] is
/// the only way to build one.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Transaction {
    tx_type: TransactionType,
    amount: f64,
    old_balance_origin: f64,
    new_balance_origin: f64,
    old_balance_dest: f64,
    new_balance_dest: f64,
}

impl Transaction {
    /// Build a transaction, rejecting negative or non-finite values
    pub fn new(
        tx_type: impl Into<TransactionType>,
        amount: f64,
        old_balance_origin: f64,
        new_balance_origin: f64,
        old_balance_dest: f64,
        new_balance_dest: f64,
    ) -> Result<Self> {
        check_amount("amount", amount)?;
        check_amount("oldbalanceOrg", old_balance_origin)?;
        check_amount("newbalanceOrig", new_balance_origin)?;
        check_amount("oldbalanceDest", old_balance_dest)?;
        check_amount("newbalanceDest", new_balance_dest)?;

        Ok(Self {
            tx_type: tx_type.into(),
            amount,
            old_balance_origin,
            new_balance_origin,
            old_balance_dest,
            new_balance_dest,
        })
    }

    /// Transaction type
    pub fn tx_type(&self) -> &TransactionType {
        &self.tx_type
    }

    /// Transaction amount
    pub fn amount(&self) -> f64 {
        self.amount
    }

    /// Sender balance before the transaction
    pub fn old_balance_origin(&self) -> f64 {
        self.old_balance_origin
    }

    /// Sender balance after the transaction
    pub fn new_balance_origin(&self) -> f64 {
        self.new_balance_origin
    }

    /// Receiver balance before the transaction
    pub fn old_balance_dest(&self) -> f64 {
        self.old_balance_dest
    }

    /// Receiver balance after the transaction
    pub fn new_balance_dest(&self) -> f64 {
        self.new_balance_dest
    }
}

fn check_amount(field: &'static str, value: f64) -> Result<()> {
    if !value.is_finite() {
        return Err(Error::InvalidInput {
            field,
            reason: format!("must be a finite number, got {}", value),
        });
    }
    if value < 0.0 {
        return Err(Error::InvalidInput {
            field,
            reason: format!("must be non-negative, got {}", value),
        });
    }
    Ok(())
}

/// Risk level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskLevel {
    /// Score below 0.4
    Low,
    /// Score in [0.4, 0.7)
    Medium,
    /// Score of 0.7 or more
    High,
}

impl RiskLevel {
    /// Band for an unrounded risk score
    pub fn from_score(score: f64) -> Self {
        if score >= 0.7 {
            RiskLevel::High
        } else if score >= 0.4 {
            RiskLevel::Medium
        } else {
            RiskLevel::Low
        }
    }

    /// Lowercase label
    pub fn as_str(&self) -> &'static str {
        match self {
            RiskLevel::Low => "low",
            RiskLevel::Medium => "medium",
            RiskLevel::High => "high",
        }
    }
}

impl fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Outcome of scoring one transaction
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoringVerdict {
    /// Sum of triggered rule weights
    pub risk_score: f64,

    /// Band derived from the score
    pub risk_level: RiskLevel,

    /// Presentation confidence, 0-100
    pub confidence: f64,

    /// Flagged as fraud (score >= 0.5)
    pub is_fraud: bool,

    /// One description per triggered rule, in evaluation order
    pub risk_factors: Vec<String>,

    /// Rules behind `risk_factors`, same order
    pub triggered_rules: Vec<RiskRule>,
}

impl ScoringVerdict {
    /// Risk score rounded to 3 decimal places
    pub fn rounded_score(&self) -> f64 {
        round_to(self.risk_score, 3)
    }

    /// Confidence rounded to 1 decimal place
    pub fn rounded_confidence(&self) -> f64 {
        round_to(self.confidence, 1)
    }
}

/// Exact halves go to the even neighbour, so 79.25 presents as 79.2
fn round_to(value: f64, places: i32) -> f64 {
    let factor = 10f64.powi(places);
    (value * factor).round_ties_even() / factor
}
