use crate::shared::icons::icon;
use contracts::shared::format::DeltaDisplay;
use leptos::prelude::*;

#[component]
pub fn MetricCardSkeleton() -> impl IntoView {
    view! {
        <div class="metric-card__skeleton">
            <div class="skeleton skeleton--value"></div>
            <div class="skeleton skeleton--caption"></div>
        </div>
    }
}

#[component]
pub fn MetricCard(
    /// Label displayed above the value
    title: &'static str,
    /// Icon name from the icon() helper
    icon_name: &'static str,
    /// Formatted value, `None` while loading
    #[prop(into)]
    value: Signal<Option<String>>,
    /// Delta versus the previous period
    #[prop(into)]
    delta: Signal<Option<DeltaDisplay>>,
    /// "em relação a ontem" and the like
    caption: &'static str,
) -> impl IntoView {
    let body = move || match (value.get(), delta.get()) {
        (Some(value), Some(delta)) => view! {
            <div class="metric-card__value">{value}</div>
            <p class="metric-card__caption">
                <span class=delta.tone.css_class()>{delta.text}</span>
                " "
                {caption}
            </p>
        }
        .into_any(),
        _ => view! { <MetricCardSkeleton /> }.into_any(),
    };

    view! {
        <div class="metric-card">
            <div class="metric-card__header">
                <span class="metric-card__title">{title}</span>
                <span class="metric-card__icon">{icon(icon_name)}</span>
            </div>
            <div class="metric-card__content">{body}</div>
        </div>
    }
}
