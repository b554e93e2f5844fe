use leptos::prelude::*;

use super::cards::{
    DayOrdersAmountCard, MonthCanceledOrdersAmountCard, MonthOrdersAmountCard, MonthRevenueCard,
};
use super::popular_products::PopularProducts;
use super::revenue_chart::RevenueChart;
use crate::shared::page_title::set_page_title;

#[component]
pub fn DashboardPage() -> impl IntoView {
    set_page_title("Dashboard");

    view! {
        <div class="page dashboard-page">
            <h1 class="page-title">"Dashboard"</h1>
            <div class="dashboard-page__cards">
                <MonthRevenueCard />
                <MonthOrdersAmountCard />
                <DayOrdersAmountCard />
                <MonthCanceledOrdersAmountCard />
            </div>
            <div class="dashboard-page__charts">
                <RevenueChart />
                <PopularProducts />
            </div>
        </div>
    }
}
