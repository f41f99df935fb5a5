use chrono::{DateTime, Utc};
use fraud_engine::{RiskLevel, Transaction};
use serde::{Deserialize, Serialize};
use validator::Validate;

// ===== Prediction Request =====
#[derive(Debug, Clone, Deserialize, Serialize, Validate)]
pub struct TransactionRequest {
    /// PAYMENT, TRANSFER, CASH_OUT, ...
    #[serde(rename = "type")]
    #[validate(length(min = 1, message = "transaction type is required"))]
    pub tx_type: String,

    #[validate(range(min = 0.0))]
    pub amount: f64,

    #[serde(rename = "oldbalanceOrg")]
    #[validate(range(min = 0.0))]
    pub old_balance_origin: f64,

    #[serde(rename = "newbalanceOrig")]
    #[validate(range(min = 0.0))]
    pub new_balance_origin: f64,

    #[serde(rename = "oldbalanceDest")]
    #[validate(range(min = 0.0))]
    pub old_balance_dest: f64,

    #[serde(rename = "newbalanceDest")]
    #[validate(range(min = 0.0))]
    pub new_balance_dest: f64,
}

impl TransactionRequest {
    /// Hand the payload to the engine, which rejects non-finite values too
    pub fn into_transaction(self) -> fraud_engine::Result<Transaction> {
        Transaction::new(
            self.tx_type,
            self.amount,
            self.old_balance_origin,
            self.new_balance_origin,
            self.old_balance_dest,
            self.new_balance_dest,
        )
    }
}

// ===== Prediction Response =====
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PredictionResponse {
    pub is_fraud: bool,
    pub confidence: f64,
    pub risk_level: RiskLevel,
    pub risk_factors: Vec<String>,
    pub risk_score: f64,
    pub analysis_time: DateTime<Utc>,
    pub transaction_id: String,
}

// ===== System Statistics =====
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatsResponse {
    pub total_transactions_analyzed: u64,
    pub accuracy_rate: f64,
    pub avg_processing_time: f64,
    pub last_updated: DateTime<Utc>,
}

// ===== Health Check =====
#[derive(Debug, Serialize, Deserialize)]
pub struct RootResponse {
    pub message: String,
    pub status: String,
    pub timestamp: DateTime<Utc>,
    pub version: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: DateTime<Utc>,
    pub uptime_seconds: u64,
    pub api_version: String,
    pub total_requests: u64,
    pub avg_response_time: String,
}

// ===== Error Response =====
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(amount: f64) -> TransactionRequest {
        TransactionRequest {
            tx_type: "PAYMENT".to_string(),
            amount,
            old_balance_origin: 5000.0,
            new_balance_origin: 3500.0,
            old_balance_dest: 2000.0,
            new_balance_dest: 3500.0,
        }
    }

    #[test]
    fn test_wire_names() {
        let parsed: TransactionRequest = serde_json::from_value(serde_json::json!({
            "type": "TRANSFER",
            "amount": 10.0,
            "oldbalanceOrg": 1.0,
            "newbalanceOrig": 2.0,
            "oldbalanceDest": 3.0,
            "newbalanceDest": 4.0
        }))
        .unwrap();
        assert_eq!(parsed.tx_type, "TRANSFER");
        assert_eq!(parsed.new_balance_dest, 4.0);
    }

    #[test]
    fn test_negative_amount_fails_validation() {
        assert!(request(1500.0).validate().is_ok());
        assert!(request(-1.0).validate().is_err());
    }

    #[test]
    fn test_empty_type_fails_validation() {
        let mut req = request(1500.0);
        req.tx_type = String::new();
        assert!(req.validate().is_err());
    }

    #[test]
    fn test_non_finite_rejected_by_engine() {
        assert!(request(f64::INFINITY).into_transaction().is_err());
        assert!(request(1500.0).into_transaction().is_ok());
    }
}
