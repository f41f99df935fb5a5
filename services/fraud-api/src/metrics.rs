use actix_web::body::MessageBody;
use actix_web::dev::{ServiceRequest, ServiceResponse};
use actix_web::middleware::Next;
use fraud_engine::ScoringVerdict;
use lazy_static::lazy_static;
use prometheus::{
    Encoder, Histogram, HistogramOpts, IntCounter, IntCounterVec, Opts, Registry, TextEncoder,
};

lazy_static! {
    // HTTP metrics
    pub static ref HTTP_REQUESTS_TOTAL: IntCounterVec = IntCounterVec::new(
        Opts::new("http_requests_total", "Total HTTP requests"),
        &["method", "path", "status"]
    ).expect("metric can be created");

    // Business metrics - fraud scoring
    pub static ref TRANSACTIONS_ANALYZED: IntCounter = IntCounter::new(
        "transactions_analyzed_total",
        "Total transactions scored"
    ).expect("metric can be created");

    pub static ref TRANSACTIONS_FLAGGED: IntCounter = IntCounter::new(
        "transactions_flagged_total",
        "Total transactions flagged as fraud"
    ).expect("metric can be created");

    pub static ref RISK_LEVEL_TOTAL: IntCounterVec = IntCounterVec::new(
        Opts::new("risk_level_total", "Scored transactions by risk level"),
        &["level"]
    ).expect("metric can be created");

    pub static ref RISK_SCORE: Histogram = Histogram::with_opts(
        HistogramOpts::new("risk_score_distribution", "Distribution of risk scores")
            .buckets(vec![0.1, 0.2, 0.4, 0.5, 0.7, 1.0, 1.5, 2.0, 3.0])
    ).expect("metric can be created");

    pub static ref SCORING_DURATION: Histogram = Histogram::with_opts(
        HistogramOpts::new("scoring_duration_seconds", "Time spent scoring a transaction")
            .buckets(vec![0.00001, 0.0001, 0.001, 0.01, 0.1, 1.0])
    ).expect("metric can be created");
}

/// Register all metrics with the given registry
pub fn register_metrics(registry: &Registry) -> Result<(), Box<dyn std::error::Error>> {
    registry.register(Box::new(HTTP_REQUESTS_TOTAL.clone()))?;

    registry.register(Box::new(TRANSACTIONS_ANALYZED.clone()))?;
    registry.register(Box::new(TRANSACTIONS_FLAGGED.clone()))?;
    registry.register(Box::new(RISK_LEVEL_TOTAL.clone()))?;
    registry.register(Box::new(RISK_SCORE.clone()))?;
    registry.register(Box::new(SCORING_DURATION.clone()))?;

    Ok(())
}

/// Record the outcome of one scoring call
pub fn observe_verdict(verdict: &ScoringVerdict, elapsed_seconds: f64) {
    TRANSACTIONS_ANALYZED.inc();
    if verdict.is_fraud {
        TRANSACTIONS_FLAGGED.inc();
    }
    RISK_LEVEL_TOTAL
        .with_label_values(&[verdict.risk_level.as_str()])
        .inc();
    RISK_SCORE.observe(verdict.risk_score);
    SCORING_DURATION.observe(elapsed_seconds);
}

/// Count every request by method, matched route pattern and status
///
/// Mounted with `middleware::from_fn`; unrouted paths are labelled
/// `unmatched` so arbitrary URLs cannot grow the label set.
pub async fn track_http_requests(
    req: ServiceRequest,
    next: Next<impl MessageBody>,
) -> Result<ServiceResponse<impl MessageBody>, actix_web::Error> {
    let method = req.method().to_string();
    let path = req
        .match_pattern()
        .unwrap_or_else(|| "unmatched".to_string());

    let res = next.call(req).await?;
    HTTP_REQUESTS_TOTAL
        .with_label_values(&[&method, &path, res.status().as_str()])
        .inc();

    Ok(res)
}

/// Generate metrics output in Prometheus text format
pub fn metrics_handler(registry: &Registry) -> Result<String, Box<dyn std::error::Error>> {
    let encoder = TextEncoder::new();
    let metric_families = registry.gather();
    let mut buffer = vec![];
    encoder.encode(&metric_families, &mut buffer)?;
    Ok(String::from_utf8(buffer)?)
}
