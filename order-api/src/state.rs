//! Application state for order-api

use std::time::Duration;

use sqlx::PgPool;
use sqlx::postgres::PgPoolOptions;

use crate::config::Config;

type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Shared application state, built once in `main` and cloned into handlers
#[derive(Clone)]
pub struct AppState {
    /// PostgreSQL connection pool
    pub pool: PgPool,
    /// HTTP client for the risk service (bounded timeout)
    pub http: reqwest::Client,
    /// Base URL of the risk calculation service
    pub risk_service_base_url: String,
}

impl AppState {
    /// Create a new AppState: connect the pool, run migrations, build the
    /// outbound HTTP client
    pub async fn new(config: &Config) -> Result<Self, BoxError> {
        let pool = PgPoolOptions::new()
            .max_connections(config.database_max_connections)
            .connect(&config.database_url)
            .await?;

        sqlx::migrate!("./migrations").run(&pool).await?;

        let http = reqwest::Client::builder()
            .timeout(Duration::from_millis(config.risk_service_timeout_ms))
            .build()?;

        Ok(Self {
            pool,
            http,
            risk_service_base_url: config.risk_service_base_url.clone(),
        })
    }
}
