//! risk-mock — stand-in for the external risk calculation service
//!
//! Always scores 23. An outage can be toggled at runtime to exercise the
//! order service's fail-open path:
//!
//!   curl -X POST localhost:3001/risk/cause-outage
//!   curl -X POST localhost:3001/risk/end-outage

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::post;
use axum::{Json, Router};

#[derive(Clone, Default)]
struct MockState {
    outage: Arc<AtomicBool>,
}

async fn calculate_order_risk(State(state): State<MockState>) -> impl IntoResponse {
    if state.outage.load(Ordering::Relaxed) {
        return StatusCode::INTERNAL_SERVER_ERROR.into_response();
    }
    Json(serde_json::json!({ "score": 23 })).into_response()
}

async fn cause_outage(State(state): State<MockState>) -> StatusCode {
    state.outage.store(true, Ordering::Relaxed);
    tracing::info!("risk outage enabled");
    StatusCode::OK
}

async fn end_outage(State(state): State<MockState>) -> StatusCode {
    state.outage.store(false, Ordering::Relaxed);
    tracing::info!("risk outage ended");
    StatusCode::OK
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "risk_mock=info".into()),
        )
        .init();

    let app = Router::new()
        .route("/risk/calculate-order-risk", post(calculate_order_risk))
        .route("/risk/cause-outage", post(cause_outage))
        .route("/risk/end-outage", post(end_outage))
        .with_state(MockState::default());

    let port: u16 = std::env::var("PORT")
        .ok()
        .and_then(|p| p.parse().ok())
        .unwrap_or(3001);
    let addr = format!("0.0.0.0:{port}");
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("risk-mock listening on {addr}");

    axum::serve(listener, app).await?;
    Ok(())
}
