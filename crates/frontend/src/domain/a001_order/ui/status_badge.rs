use contracts::domain::a001_order::{OrderStatus, StatusTone};
use leptos::prelude::*;

fn dot_class(tone: StatusTone) -> &'static str {
    match tone {
        StatusTone::Waiting => "order-status__dot order-status__dot--waiting",
        StatusTone::InProgress => "order-status__dot order-status__dot--progress",
        StatusTone::Done => "order-status__dot order-status__dot--done",
        StatusTone::Stopped => "order-status__dot order-status__dot--stopped",
    }
}

#[component]
pub fn OrderStatusBadge(status: OrderStatus) -> impl IntoView {
    view! {
        <div class="order-status">
            <span class=dot_class(status.tone())></span>
            <span class="order-status__label">{status.display_name()}</span>
        </div>
    }
}
