use crate::composer;
use crate::config::AnalysisConfig;
use crate::errors::{ApiError, ApiResult};
use crate::metrics;
use crate::models::*;
use crate::stats::StatsCounter;
use actix_web::{web, HttpResponse};
use chrono::Utc;
use fraud_engine::RiskScorer;
use prometheus::Registry;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tracing::{error, info, warn};
use validator::Validate;

const SERVICE_VERSION: &str = env!("CARGO_PKG_VERSION");

// ===== Health Check =====
pub async fn root() -> HttpResponse {
    HttpResponse::Ok().json(RootResponse {
        message: "Fraud Detection API is running".to_string(),
        status: "healthy".to_string(),
        timestamp: Utc::now(),
        version: SERVICE_VERSION.to_string(),
    })
}

pub async fn health_check(stats: web::Data<Arc<StatsCounter>>) -> HttpResponse {
    HttpResponse::Ok().json(HealthResponse {
        status: "healthy".to_string(),
        timestamp: Utc::now(),
        uptime_seconds: stats.uptime().as_secs(),
        api_version: SERVICE_VERSION.to_string(),
        total_requests: stats.total_analyzed(),
        avg_response_time: format!("{}ms", stats.avg_processing_time_ms()),
    })
}

// ===== System Statistics =====
pub async fn get_stats(stats: web::Data<Arc<StatsCounter>>) -> HttpResponse {
    HttpResponse::Ok().json(StatsResponse {
        total_transactions_analyzed: stats.total_analyzed(),
        accuracy_rate: stats.accuracy_rate(),
        avg_processing_time: stats.avg_processing_time_ms(),
        last_updated: Utc::now(),
    })
}

// ===== Predict =====
pub async fn predict(
    req: web::Json<TransactionRequest>,
    scorer: web::Data<Arc<RiskScorer>>,
    stats: web::Data<Arc<StatsCounter>>,
    analysis: web::Data<AnalysisConfig>,
) -> ApiResult<HttpResponse> {
    let started = Instant::now();
    let request = req.into_inner();

    if let Err(e) = request.validate() {
        warn!("Rejected transaction payload: {}", e);
        return Err(e.into());
    }
    let transaction = request.into_transaction().map_err(|e| {
        warn!("Rejected transaction payload: {}", e);
        ApiError::from(e)
    })?;

    info!(
        "Analyzing transaction: {}, Amount: ${}",
        transaction.tx_type(),
        transaction.amount()
    );

    if analysis.simulated_delay_ms > 0 {
        tokio::time::sleep(Duration::from_millis(analysis.simulated_delay_ms)).await;
    }

    let verdict = scorer.score(&transaction);
    let elapsed = started.elapsed();

    stats.record(elapsed);
    metrics::observe_verdict(&verdict, elapsed.as_secs_f64());

    let response = composer::compose(verdict, Utc::now());

    info!(
        "Analysis complete: {} risk, {}% confidence ({})",
        response.risk_level, response.confidence, response.transaction_id
    );

    Ok(HttpResponse::Ok().json(response))
}

// ===== Prometheus =====
pub async fn metrics_endpoint(registry: web::Data<Registry>) -> ApiResult<HttpResponse> {
    let body = metrics::metrics_handler(registry.get_ref()).map_err(|e| {
        error!("Failed to encode metrics: {}", e);
        ApiError::InternalError(e.to_string())
    })?;

    Ok(HttpResponse::Ok()
        .content_type("text/plain; version=0.0.4")
        .body(body))
}

/// Malformed JSON is reported the same way as a failed validation
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(|err, _req| {
        warn!("Rejected transaction payload: {}", err);
        ApiError::ValidationError(err.to_string()).into()
    })
}

// ===== Configure Routes =====
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.app_data(json_config())
        .route("/", web::get().to(root))
        .route("/health", web::get().to(health_check))
        .route("/stats", web::get().to(get_stats))
        .route("/predict", web::post().to(predict))
        .route("/metrics", web::get().to(metrics_endpoint));
}
