//! Order statistics endpoint

use axum::Json;
use axum::extract::State;

use crate::db::orders;
use crate::error::ApiResult;
use crate::models::WeeklyOrderStats;
use crate::state::AppState;

/// GET /order-stats
///
/// Average order amount per day of week, computed fresh on every request.
/// The store returns only days that have orders; the expansion zero-fills
/// the rest.
pub async fn order_stats(State(state): State<AppState>) -> ApiResult<WeeklyOrderStats> {
    let records = orders::avg_amount_by_day_of_week(&state.pool).await?;
    Ok(Json(WeeklyOrderStats::from_records(&records)))
}
