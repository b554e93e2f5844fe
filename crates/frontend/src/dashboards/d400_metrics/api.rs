use contracts::dashboards::d400_metrics::{
    DailyRevenue, DailyRevenueQuery, DayOrdersAmount, MonthCanceledOrdersAmount,
    MonthOrdersAmount, MonthReceipt, PopularProduct,
};

use crate::shared::http::{ApiClient, ApiRequest, HttpError};
use crate::shared::query::QueryKey;

pub const METRICS_OPERATION: &str = "metrics";

pub fn metric_key(metric: &str) -> QueryKey {
    QueryKey::new(METRICS_OPERATION).with(metric)
}

pub fn daily_revenue_key(query: &DailyRevenueQuery) -> QueryKey {
    metric_key("daily-revenue-in-period")
        .with(query.from)
        .with(query.to)
}

pub async fn get_day_orders_amount(api: ApiClient, _: ()) -> Result<DayOrdersAmount, HttpError> {
    api.fetch_json(ApiRequest::get("/metrics/day-orders-amount")).await
}

pub async fn get_month_orders_amount(api: ApiClient, _: ()) -> Result<MonthOrdersAmount, HttpError> {
    api.fetch_json(ApiRequest::get("/metrics/month-orders-amount")).await
}

pub async fn get_month_canceled_orders_amount(
    api: ApiClient,
    _: (),
) -> Result<MonthCanceledOrdersAmount, HttpError> {
    api.fetch_json(ApiRequest::get("/metrics/month-canceled-orders-amount"))
        .await
}

pub async fn get_month_receipt(api: ApiClient, _: ()) -> Result<MonthReceipt, HttpError> {
    api.fetch_json(ApiRequest::get("/metrics/month-receipt")).await
}

pub async fn get_daily_revenue_in_period(
    api: ApiClient,
    query: DailyRevenueQuery,
) -> Result<Vec<DailyRevenue>, HttpError> {
    api.fetch_json(ApiRequest::get("/metrics/daily-revenue-in-period").with_query(&query)?)
        .await
}

pub async fn get_popular_products(api: ApiClient, _: ()) -> Result<Vec<PopularProduct>, HttpError> {
    api.fetch_json(ApiRequest::get("/metrics/popular-products")).await
}
