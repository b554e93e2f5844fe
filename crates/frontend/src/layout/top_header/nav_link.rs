use crate::shared::icons::icon;
use leptos::prelude::*;
use leptos_router::components::A;

/// Header link; the router marks the current one with `aria-current="page"`
#[component]
pub fn NavLink(href: &'static str, icon_name: &'static str, label: &'static str) -> impl IntoView {
    view! {
        <A href=href attr:class="top-header__link">
            {icon(icon_name)}
            <span>{label}</span>
        </A>
    }
}
