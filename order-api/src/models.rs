//! Domain models and the per-weekday statistics expansion

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A persisted purchase record. Immutable once created; the service has no
/// update or delete path.
#[derive(Debug, Clone, PartialEq, Serialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub id: String,
    pub amount_cents: i64,
    pub created_at: DateTime<Utc>,
    pub risk_score: f64,
}

impl Order {
    /// Build a new order from a validated amount and its risk score,
    /// assigning a fresh id and creation timestamp
    pub fn new(amount_cents: i64, risk_score: f64) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            amount_cents,
            created_at: Utc::now(),
            risk_score,
        }
    }
}

/// Create-order payload; also forwarded verbatim to the risk service
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateOrderRequest {
    pub amount_cents: i64,
}

/// One aggregate row from the store: rounded average order amount for a
/// single day of week (0 = sunday .. 6 = saturday). Days without orders
/// have no row.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct DayOfWeekAverage {
    pub day_of_week: i32,
    pub average_amount_cents: i64,
}

/// Dense per-weekday average order size, zero-filled for days without orders
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WeeklyOrderStats {
    pub sunday: i64,
    pub monday: i64,
    pub tuesday: i64,
    pub wednesday: i64,
    pub thursday: i64,
    pub friday: i64,
    pub saturday: i64,
}

impl WeeklyOrderStats {
    /// Expand a sparse, unordered set of per-weekday averages into the
    /// fixed seven-slot structure. Missing days stay 0; record order is
    /// irrelevant; an out-of-range day index is ignored.
    pub fn from_records(records: &[DayOfWeekAverage]) -> Self {
        let mut slots = [0i64; 7];
        for record in records {
            if let Some(slot) = usize::try_from(record.day_of_week)
                .ok()
                .and_then(|day| slots.get_mut(day))
            {
                *slot = record.average_amount_cents;
            }
        }
        Self {
            sunday: slots[0],
            monday: slots[1],
            tuesday: slots[2],
            wednesday: slots[3],
            thursday: slots[4],
            friday: slots[5],
            saturday: slots[6],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(day_of_week: i32, average_amount_cents: i64) -> DayOfWeekAverage {
        DayOfWeekAverage {
            day_of_week,
            average_amount_cents,
        }
    }

    #[test]
    fn test_empty_records_expand_to_all_zero() {
        let stats = WeeklyOrderStats::from_records(&[]);
        assert_eq!(
            stats,
            WeeklyOrderStats {
                sunday: 0,
                monday: 0,
                tuesday: 0,
                wednesday: 0,
                thursday: 0,
                friday: 0,
                saturday: 0,
            }
        );
    }

    #[test]
    fn test_single_record_fills_exactly_its_slot() {
        for day in 0..7 {
            let stats = WeeklyOrderStats::from_records(&[record(day, 941)]);
            let slots = [
                stats.sunday,
                stats.monday,
                stats.tuesday,
                stats.wednesday,
                stats.thursday,
                stats.friday,
                stats.saturday,
            ];
            for (i, slot) in slots.iter().enumerate() {
                let expected = if i == day as usize { 941 } else { 0 };
                assert_eq!(*slot, expected, "day {day}, slot {i}");
            }
        }
    }

    #[test]
    fn test_expansion_is_order_independent() {
        let forward = WeeklyOrderStats::from_records(&[
            record(0, 1625),
            record(4, 5489),
            record(5, 941),
        ]);
        let shuffled = WeeklyOrderStats::from_records(&[
            record(5, 941),
            record(0, 1625),
            record(4, 5489),
        ]);
        assert_eq!(forward, shuffled);
        assert_eq!(forward.sunday, 1625);
        assert_eq!(forward.thursday, 5489);
        assert_eq!(forward.friday, 941);
        assert_eq!(forward.monday, 0);
    }

    #[test]
    fn test_full_week_mirrors_input() {
        let records: Vec<_> = (0..7).map(|d| record(d, (d as i64 + 1) * 100)).collect();
        let stats = WeeklyOrderStats::from_records(&records);
        assert_eq!(stats.sunday, 100);
        assert_eq!(stats.monday, 200);
        assert_eq!(stats.tuesday, 300);
        assert_eq!(stats.wednesday, 400);
        assert_eq!(stats.thursday, 500);
        assert_eq!(stats.friday, 600);
        assert_eq!(stats.saturday, 700);
    }

    #[test]
    fn test_duplicate_day_is_last_write_wins() {
        let stats = WeeklyOrderStats::from_records(&[record(2, 10), record(2, 20)]);
        assert_eq!(stats.tuesday, 20);
    }

    #[test]
    fn test_out_of_range_day_is_ignored() {
        let stats = WeeklyOrderStats::from_records(&[record(7, 100), record(-1, 100)]);
        assert_eq!(stats, WeeklyOrderStats::from_records(&[]));
    }

    #[test]
    fn test_new_order_stamps_id_amount_and_score() {
        let order = Order::new(1234, 23.0);
        assert_eq!(order.amount_cents, 1234);
        assert_eq!(order.risk_score, 23.0);
        assert!(!order.id.is_empty());

        let other = Order::new(1234, 23.0);
        assert_ne!(order.id, other.id);
    }

    #[test]
    fn test_order_serializes_camel_case() {
        let order = Order::new(489, 0.0);
        let json = serde_json::to_value(&order).unwrap();
        assert_eq!(json["amountCents"], 489);
        assert_eq!(json["riskScore"], 0.0);
        assert!(json["createdAt"].is_string());
        assert!(json["id"].is_string());
    }
}
