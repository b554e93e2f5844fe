use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Common shape of the dashboard metric snapshots
pub trait MetricDelta {
    /// Current value (counts as-is, money in cents)
    fn value(&self) -> i64;
    /// Percentage versus the previous comparable period
    fn delta(&self) -> f64;
}

/// `GET /metrics/day-orders-amount`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DayOrdersAmount {
    pub amount: i64,
    pub diff_from_yesterday: f64,
}

/// `GET /metrics/month-orders-amount`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthOrdersAmount {
    pub amount: i64,
    pub diff_from_last_month: f64,
}

/// `GET /metrics/month-canceled-orders-amount`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthCanceledOrdersAmount {
    pub amount: i64,
    pub diff_from_last_month: f64,
}

/// `GET /metrics/month-receipt`, receipt in cents
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthReceipt {
    pub receipt: i64,
    pub diff_from_last_month: f64,
}

impl MetricDelta for DayOrdersAmount {
    fn value(&self) -> i64 {
        self.amount
    }
    fn delta(&self) -> f64 {
        self.diff_from_yesterday
    }
}

impl MetricDelta for MonthOrdersAmount {
    fn value(&self) -> i64 {
        self.amount
    }
    fn delta(&self) -> f64 {
        self.diff_from_last_month
    }
}

impl MetricDelta for MonthCanceledOrdersAmount {
    fn value(&self) -> i64 {
        self.amount
    }
    fn delta(&self) -> f64 {
        self.diff_from_last_month
    }
}

impl MetricDelta for MonthReceipt {
    fn value(&self) -> i64 {
        self.receipt
    }
    fn delta(&self) -> f64 {
        self.diff_from_last_month
    }
}

/// Query of `GET /metrics/daily-revenue-in-period`
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DailyRevenueQuery {
    pub from: NaiveDate,
    pub to: NaiveDate,
}

impl DailyRevenueQuery {
    /// The `days` days ending on `today` (inclusive)
    pub fn last_days(today: NaiveDate, days: i64) -> Self {
        Self {
            from: today - chrono::Duration::days(days),
            to: today,
        }
    }

    /// Swaps the bounds if they were entered backwards
    pub fn normalized(self) -> Self {
        if self.from <= self.to {
            self
        } else {
            Self {
                from: self.to,
                to: self.from,
            }
        }
    }
}

/// One point of the revenue chart; `date` is the backend label ("15/03")
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyRevenue {
    pub date: String,
    pub receipt: i64,
}

/// `GET /metrics/popular-products`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PopularProduct {
    pub product: String,
    pub amount: i64,
}

/// Share of each product in percent, same order as the input
pub fn product_shares(products: &[PopularProduct]) -> Vec<f64> {
    let total: i64 = products.iter().map(|p| p.amount).sum();
    products
        .iter()
        .map(|p| {
            if total == 0 {
                0.0
            } else {
                p.amount as f64 * 100.0 / total as f64
            }
        })
        .collect()
}
