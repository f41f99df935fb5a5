use config::{ConfigError, Environment};
use serde::{Deserialize, Serialize};
use std::env;

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct Config {
    pub server: ServerConfig,
    pub cors: CorsConfig,
    pub analysis: AnalysisConfig,
    pub stats: StatsConfig,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub workers: usize,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct CorsConfig {
    /// Comma-separated list of origins
    pub allowed_origins: String,
}

impl CorsConfig {
    pub fn origins(&self) -> Vec<String> {
        self.allowed_origins
            .split(',')
            .map(str::trim)
            .filter(|origin| !origin.is_empty())
            .map(str::to_string)
            .collect()
    }
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct AnalysisConfig {
    /// Artificial delay before scoring, for demos of the UI spinner
    pub simulated_delay_ms: u64,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct StatsConfig {
    pub initial_total_analyzed: u64,
    pub accuracy_rate: f64,
    pub baseline_processing_time_ms: f64,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        let mut builder = config::Config::builder()
            // Server defaults
            .set_default("server.host", "0.0.0.0")?
            .set_default("server.port", 8000)?
            .set_default("server.workers", 4)?
            // Next.js frontend
            .set_default(
                "cors.allowed_origins",
                "http://localhost:3000,http://127.0.0.1:3000",
            )?
            .set_default("analysis.simulated_delay_ms", 0)?
            // Statistics
            .set_default("stats.initial_total_analyzed", 0)?
            .set_default("stats.accuracy_rate", 99.9)?
            .set_default("stats.baseline_processing_time_ms", 45.2)?;

        builder = builder.add_source(Environment::with_prefix("FRAUD_API").separator("__"));

        if let Ok(port) = env::var("SERVICE_PORT") {
            builder = builder.set_override("server.port", port)?;
        }

        builder.build()?.try_deserialize()
    }
}
