pub mod top_header;

use crate::shared::icons::icon;
use leptos::prelude::*;
use leptos_router::components::Outlet;
use top_header::TopHeader;

/// Shell of the signed-in pages
///
/// ```text
/// +------------------------------------------+
/// |              TopHeader                    |
/// +------------------------------------------+
/// |               Content                     |
/// +------------------------------------------+
/// ```
#[component]
pub fn AppLayout() -> impl IntoView {
    view! {
        <div class="app-layout">
            <TopHeader />
            <main class="app-main">
                <Outlet />
            </main>
        </div>
    }
}

/// Two-column shell of the sign-in and sign-up pages
#[component]
pub fn AuthLayout() -> impl IntoView {
    view! {
        <div class="auth-layout">
            <div class="auth-layout__aside">
                <div class="auth-layout__brand">
                    {icon("pizza")}
                    <span>"pizza.shop"</span>
                </div>
                <footer class="auth-layout__footer">
                    "Painel do parceiro © pizza.shop"
                </footer>
            </div>
            <div class="auth-layout__content">
                <Outlet />
            </div>
        </div>
    }
}
