//! Order table queries
//!
//! The `"order"` table is append-only: insert, point select, select-all and
//! one grouped aggregate. No update or delete statements exist.

use sqlx::PgPool;

use crate::models::{DayOfWeekAverage, Order};

pub async fn create(pool: &PgPool, order: &Order) -> Result<(), sqlx::Error> {
    sqlx::query(
        r#"INSERT INTO "order" (id, created_at, amount_cents, risk_score)
           VALUES ($1, $2, $3, $4)"#,
    )
    .bind(&order.id)
    .bind(order.created_at)
    .bind(order.amount_cents)
    .bind(order.risk_score)
    .execute(pool)
    .await?;
    Ok(())
}

pub async fn find_by_id(pool: &PgPool, id: &str) -> Result<Option<Order>, sqlx::Error> {
    sqlx::query_as(r#"SELECT * FROM "order" WHERE id = $1"#)
        .bind(id)
        .fetch_optional(pool)
        .await
}

pub async fn list_all(pool: &PgPool) -> Result<Vec<Order>, sqlx::Error> {
    sqlx::query_as(r#"SELECT * FROM "order""#).fetch_all(pool).await
}

/// Rounded average order amount per day of week (0 = sunday .. 6 = saturday),
/// one row per day that has at least one order. Rounding happens in SQL
/// (half away from zero); callers must not assume any row order.
pub async fn avg_amount_by_day_of_week(
    pool: &PgPool,
) -> Result<Vec<DayOfWeekAverage>, sqlx::Error> {
    sqlx::query_as(
        r#"
        SELECT
            CAST(DATE_PART('dow', created_at) AS INT) AS day_of_week,
            CAST(ROUND(AVG(amount_cents)) AS BIGINT) AS average_amount_cents
        FROM "order"
        GROUP BY DATE_PART('dow', created_at)
        "#,
    )
    .fetch_all(pool)
    .await
}
