use contracts::dashboards::d400_metrics::MetricDelta;
use contracts::shared::format::{format_brl_cents, format_count, format_delta, DeltaDisplay};
use leptos::prelude::*;
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::dashboards::d400_metrics::api;
use crate::shared::components::metric_card::MetricCard;
use crate::shared::http::{ApiClient, HttpError};
use crate::shared::query::{use_query, QueryHandle, QueryOptions};

const SINCE_YESTERDAY: &str = "em relação a ontem";
const SINCE_LAST_MONTH: &str = "em relação ao mês passado";

fn use_metric<T, F, Fut>(name: &'static str, fetch: F) -> QueryHandle<T>
where
    T: MetricDelta + Serialize + DeserializeOwned + Clone + PartialEq + Send + Sync + 'static,
    F: Fn(ApiClient, ()) -> Fut + Clone + 'static,
    Fut: std::future::Future<Output = Result<T, HttpError>> + 'static,
{
    use_query(|| (), move |_: &()| api::metric_key(name), fetch, QueryOptions::default())
}

fn value_signal<T>(metric: QueryHandle<T>, format: fn(i64) -> String) -> Signal<Option<String>>
where
    T: MetricDelta + Clone + PartialEq + Send + Sync + 'static,
{
    Signal::derive(move || metric.data().map(|m| format(m.value())))
}

fn delta_signal<T>(metric: QueryHandle<T>) -> Signal<Option<DeltaDisplay>>
where
    T: MetricDelta + Clone + PartialEq + Send + Sync + 'static,
{
    Signal::derive(move || metric.data().map(|m| format_delta(m.delta())))
}

#[component]
pub fn DayOrdersAmountCard() -> impl IntoView {
    let metric = use_metric("day-orders-amount", api::get_day_orders_amount);
    view! {
        <MetricCard
            title="Pedidos (dia)"
            icon_name="utensils"
            value=value_signal(metric, format_count)
            delta=delta_signal(metric)
            caption=SINCE_YESTERDAY
        />
    }
}

#[component]
pub fn MonthOrdersAmountCard() -> impl IntoView {
    let metric = use_metric("month-orders-amount", api::get_month_orders_amount);
    view! {
        <MetricCard
            title="Pedidos (mês)"
            icon_name="utensils"
            value=value_signal(metric, format_count)
            delta=delta_signal(metric)
            caption=SINCE_LAST_MONTH
        />
    }
}

#[component]
pub fn MonthCanceledOrdersAmountCard() -> impl IntoView {
    let metric = use_metric(
        "month-canceled-orders-amount",
        api::get_month_canceled_orders_amount,
    );
    view! {
        <MetricCard
            title="Cancelamentos (mês)"
            icon_name="x"
            value=value_signal(metric, format_count)
            delta=delta_signal(metric)
            caption=SINCE_LAST_MONTH
        />
    }
}

/// Receipt arrives in cents
#[component]
pub fn MonthRevenueCard() -> impl IntoView {
    let metric = use_metric("month-receipt", api::get_month_receipt);
    view! {
        <MetricCard
            title="Receita total (mês)"
            icon_name="dollar-sign"
            value=value_signal(metric, format_brl_cents)
            delta=delta_signal(metric)
            caption=SINCE_LAST_MONTH
        />
    }
}
