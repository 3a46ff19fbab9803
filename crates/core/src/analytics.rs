//! Sales Analytics
//!
//! Daily sales points as reported by the backend, and the headline figures
//! shown above the sales charts.

use jiff::civil::Date;
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

/// Sales for one day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SalesPoint {
    /// Calendar day
    pub date: Date,

    /// Orders placed that day
    pub orders: u64,

    /// Revenue for the day in major currency units
    #[serde(with = "rust_decimal::serde::float")]
    pub revenue: Decimal,
}

/// Headline figures over a range of sales points.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SalesSummary {
    /// Sum of revenue
    pub total_revenue: Decimal,

    /// Sum of orders
    pub total_orders: u64,

    /// Revenue per order rounded to cents, `None` without orders
    pub average_order_value: Option<Decimal>,

    /// Highest-revenue day; the earliest wins a tie
    pub best_day: Option<SalesPoint>,
}

impl SalesSummary {
    /// Summarise `points`.
    #[must_use]
    pub fn from_points(points: &[SalesPoint]) -> Self {
        let total_revenue = points
            .iter()
            .fold(Decimal::ZERO, |total, point| total.saturating_add(point.revenue));

        let total_orders = points
            .iter()
            .fold(0_u64, |total, point| total.saturating_add(point.orders));

        let average_order_value = (total_orders > 0)
            .then(|| total_revenue.checked_div(Decimal::from(total_orders)))
            .flatten()
            .map(|value| value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero));

        let best_day = points
            .iter()
            .reduce(|best, point| if point.revenue > best.revenue { point } else { best })
            .cloned();

        Self {
            total_revenue,
            total_orders,
            average_order_value,
            best_day,
        }
    }
}

#[cfg(test)]
mod tests {
    use jiff::civil::date;
    use rust_decimal::dec;
    use serde_json::json;
    use testresult::TestResult;

    use super::*;

    fn point(day: i8, orders: u64, revenue: Decimal) -> SalesPoint {
        SalesPoint {
            date: date(2026, 3, day),
            orders,
            revenue,
        }
    }

    #[test]
    fn summarises_totals_and_average() {
        let summary = SalesSummary::from_points(&[
            point(1, 4, dec!(40.00)),
            point(2, 2, dec!(30.50)),
            point(3, 0, dec!(0)),
        ]);

        assert_eq!(summary.total_revenue, dec!(70.50));
        assert_eq!(summary.total_orders, 6);
        assert_eq!(summary.average_order_value, Some(dec!(11.75)));
    }

    #[test]
    fn best_day_prefers_earliest_on_tie() {
        let summary = SalesSummary::from_points(&[
            point(1, 1, dec!(10)),
            point(2, 3, dec!(25)),
            point(3, 5, dec!(25)),
        ]);

        assert_eq!(summary.best_day.map(|day| day.date), Some(date(2026, 3, 2)));
    }

    #[test]
    fn empty_range_has_no_average_or_best_day() {
        let summary = SalesSummary::from_points(&[]);

        assert_eq!(summary.total_revenue, Decimal::ZERO);
        assert_eq!(summary.average_order_value, None);
        assert_eq!(summary.best_day, None);
    }

    #[test]
    fn deserializes_backend_points() -> TestResult {
        let point: SalesPoint = serde_json::from_value(json!({
            "date": "2026-03-14",
            "orders": 12,
            "revenue": 180.25
        }))?;

        assert_eq!(point.date, date(2026, 3, 14));
        assert_eq!(point.revenue, dec!(180.25));

        Ok(())
    }
}
