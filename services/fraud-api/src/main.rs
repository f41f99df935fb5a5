use actix_cors::Cors;
use actix_web::{middleware, web, App, HttpServer};
use anyhow::Context;
use dotenv::dotenv;
use fraud_api::{config::Config, handlers, metrics, StatsCounter};
use fraud_engine::RiskScorer;
use prometheus::Registry;
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .json()
        .init();

    info!("Starting Fraud Detection API...");

    // Load configuration
    let config = Config::from_env().context("Failed to load configuration")?;
    info!("Configuration loaded successfully");

    let registry = Registry::new();
    metrics::register_metrics(&registry)
        .map_err(|e| anyhow::anyhow!("Failed to register metrics: {}", e))?;

    // Initialize components
    let scorer = Arc::new(RiskScorer::new());
    let stats = Arc::new(StatsCounter::new(&config.stats));
    let analysis = config.analysis.clone();
    let origins = config.cors.origins();

    info!("Risk scorer initialized with {} allowed origins", origins.len());

    let server_config = config.server.clone();

    info!(
        "Starting HTTP server on {}:{}",
        server_config.host, server_config.port
    );

    HttpServer::new(move || {
        let cors = origins
            .iter()
            .fold(Cors::default(), |cors, origin| cors.allowed_origin(origin))
            .supports_credentials()
            .allow_any_method()
            .allow_any_header()
            .max_age(3600);

        App::new()
            .app_data(web::Data::new(scorer.clone()))
            .app_data(web::Data::new(stats.clone()))
            .app_data(web::Data::new(analysis.clone()))
            .app_data(web::Data::new(registry.clone()))
            .wrap(middleware::from_fn(metrics::track_http_requests))
            .wrap(cors)
            .wrap(middleware::Logger::default())
            .configure(handlers::configure_routes)
    })
    .workers(server_config.workers)
    .bind((server_config.host, server_config.port))?
    .run()
    .await?;

    Ok(())
}
