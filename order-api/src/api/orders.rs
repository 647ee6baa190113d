//! Order endpoints: create, get by id, list

use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::{StatusCode, header};
use axum::response::IntoResponse;

use crate::db::orders;
use crate::error::{ApiError, ApiResult};
use crate::models::{CreateOrderRequest, Order};
use crate::risk;
use crate::state::AppState;

/// Shape check on the raw payload: `amountCents` must be present and an
/// integer token. Strings, floats (even with a zero fraction) and missing
/// fields all fail.
fn is_valid_create_order(payload: &serde_json::Value) -> bool {
    payload.get("amountCents").is_some_and(serde_json::Value::is_i64)
}

/// POST /orders
///
/// Validates the payload (400 on any malformed body), scores it against the
/// risk service, persists the order, and answers 303 pointing at the new
/// resource.
pub async fn create_order(
    State(state): State<AppState>,
    payload: Result<Json<serde_json::Value>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let Ok(Json(payload)) = payload else {
        return Err(ApiError::InvalidRequest);
    };
    if !is_valid_create_order(&payload) {
        return Err(ApiError::InvalidRequest);
    }
    let request: CreateOrderRequest =
        serde_json::from_value(payload).map_err(|_| ApiError::InvalidRequest)?;

    let risk_score =
        risk::get_order_risk_score(&state.http, &state.risk_service_base_url, &request).await;

    let order = Order::new(request.amount_cents, risk_score);
    orders::create(&state.pool, &order).await?;

    Ok((
        StatusCode::SEE_OTHER,
        [(header::LOCATION, format!("/orders/{}", order.id))],
    ))
}

/// GET /orders/{order_id}
pub async fn get_order(
    State(state): State<AppState>,
    Path(order_id): Path<String>,
) -> ApiResult<Order> {
    let order = orders::find_by_id(&state.pool, &order_id)
        .await?
        .ok_or_else(|| ApiError::OrderNotFound(order_id))?;
    Ok(Json(order))
}

/// GET /orders
pub async fn list_orders(State(state): State<AppState>) -> ApiResult<Vec<Order>> {
    let orders = orders::list_all(&state.pool).await?;
    Ok(Json(orders))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_accepts_integer_amounts() {
        assert!(is_valid_create_order(&json!({ "amountCents": 123 })));
        assert!(is_valid_create_order(&json!({ "amountCents": 0 })));
    }

    #[test]
    fn test_rejects_missing_amount() {
        assert!(!is_valid_create_order(&json!({})));
        assert!(!is_valid_create_order(&json!({ "foo": "bar" })));
    }

    #[test]
    fn test_rejects_non_numeric_amount() {
        assert!(!is_valid_create_order(&json!({ "amountCents": "123" })));
        assert!(!is_valid_create_order(&json!({ "amountCents": null })));
        assert!(!is_valid_create_order(&json!({ "amountCents": [123] })));
    }

    #[test]
    fn test_rejects_fractional_amount() {
        assert!(!is_valid_create_order(&json!({ "amountCents": 123.45 })));
    }

    #[test]
    fn test_rejects_non_object_payloads() {
        assert!(!is_valid_create_order(&json!(null)));
        assert!(!is_valid_create_order(&json!("amountCents")));
        assert!(!is_valid_create_order(&json!([123])));
    }
}
