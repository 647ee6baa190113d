//! Risk service client (REST, no SDK dependency)
//!
//! Fail-open by contract: order creation must never be blocked by risk
//! service unavailability, so every failure outcome (non-2xx status,
//! unreachable host, timeout, malformed body) scores the order 0. Single
//! attempt per order, no retries.

use serde::Deserialize;

use crate::models::CreateOrderRequest;

#[derive(Deserialize)]
struct RiskResponse {
    score: f64,
}

/// POST the create-order payload to `{base_url}/calculate-order-risk` and
/// return the score, or 0 on any failure.
pub async fn get_order_risk_score(
    client: &reqwest::Client,
    base_url: &str,
    request: &CreateOrderRequest,
) -> f64 {
    let url = format!("{base_url}/calculate-order-risk");

    let response = match client.post(&url).json(request).send().await {
        Ok(resp) => resp,
        Err(e) => {
            tracing::warn!(error = %e, "risk service unreachable, scoring 0");
            return 0.0;
        }
    };

    if !response.status().is_success() {
        tracing::warn!(status = %response.status(), "risk service returned non-success, scoring 0");
        return 0.0;
    }

    match response.json::<RiskResponse>().await {
        Ok(body) => body.score,
        Err(e) => {
            tracing::warn!(error = %e, "risk service returned malformed body, scoring 0");
            0.0
        }
    }
}
