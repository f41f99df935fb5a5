pub mod composer;
pub mod config;
pub mod errors;
pub mod handlers;
pub mod metrics;
pub mod models;
pub mod stats;

// Re-exports for convenience
pub use config::Config;
pub use errors::{ApiError, ApiResult};
pub use stats::StatsCounter;
