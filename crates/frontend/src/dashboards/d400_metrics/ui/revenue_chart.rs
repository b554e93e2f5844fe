use chrono::{NaiveDate, Utc};
use contracts::dashboards::d400_metrics::{DailyRevenue, DailyRevenueQuery};
use leptos::prelude::*;

use crate::dashboards::d400_metrics::api::{self, daily_revenue_key};
use crate::dashboards::d400_metrics::chart::{
    axis_ticks, chart_points, polyline, HEIGHT, PADDING_LEFT, WIDTH,
};
use crate::shared::components::date_range_picker::DateRangePicker;
use crate::shared::query::{use_query, QueryOptions};

pub const DEFAULT_PERIOD_DAYS: i64 = 7;

#[component]
fn RevenueLine(data: Vec<DailyRevenue>) -> impl IntoView {
    let points = chart_points(&data);
    let ticks = axis_ticks(&data);
    let line = polyline(&points);
    let view_box = format!("0 0 {} {}", WIDTH, HEIGHT);

    view! {
        <svg class="revenue-chart__svg" viewBox=view_box preserveAspectRatio="none">
            {ticks
                .into_iter()
                .map(|tick| view! {
                    <g class="revenue-chart__tick">
                        <line x1=PADDING_LEFT x2=WIDTH y1=tick.y y2=tick.y />
                        <text x={PADDING_LEFT - 8.0} y=tick.y text-anchor="end">{tick.label}</text>
                    </g>
                })
                .collect_view()}
            <polyline class="revenue-chart__line" points=line fill="none" />
            {points
                .into_iter()
                .map(|point| view! {
                    <g class="revenue-chart__point">
                        <circle cx=point.x cy=point.y r="3" />
                        <text x=point.x y={HEIGHT - 6.0} text-anchor="middle">{point.label}</text>
                    </g>
                })
                .collect_view()}
        </svg>
    }
}

/// Daily revenue in the chosen period
#[component]
pub fn RevenueChart() -> impl IntoView {
    let initial = DailyRevenueQuery::last_days(Utc::now().date_naive(), DEFAULT_PERIOD_DAYS);
    let period = RwSignal::new(initial);

    let revenue = use_query(
        move || period.get(),
        daily_revenue_key,
        api::get_daily_revenue_in_period,
        QueryOptions::default(),
    );

    let on_change = Callback::new(move |(from, to): (NaiveDate, NaiveDate)| {
        period.set(DailyRevenueQuery { from, to }.normalized());
    });

    view! {
        <div class="revenue-chart card">
            <div class="revenue-chart__header">
                <div>
                    <h3 class="card-title">"Receita no período"</h3>
                    <p class="muted">"Receita diária no período"</p>
                </div>
                <DateRangePicker
                    date_from=Signal::derive(move || period.get().from)
                    date_to=Signal::derive(move || period.get().to)
                    on_change=on_change
                    label="Período"
                />
            </div>
            <div class="revenue-chart__body">
                {move || match (revenue.data(), revenue.error()) {
                    (Some(data), _) if data.is_empty() => view! {
                        <p class="muted">"Nenhuma receita no período."</p>
                    }
                    .into_any(),
                    (Some(data), _) => view! { <RevenueLine data=data /> }.into_any(),
                    (None, Some(error)) => view! {
                        <p class="error-message">{format!("Falha ao carregar receita: {}", error)}</p>
                    }
                    .into_any(),
                    (None, None) => view! { <div class="skeleton skeleton--chart"></div> }.into_any(),
                }}
            </div>
        </div>
    }
}
