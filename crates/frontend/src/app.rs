use crate::routes::routes::AppRoutes;
use crate::shared::http::ApiClient;
use crate::shared::query::QueryClient;
use crate::shared::theme::ThemeProvider;
use crate::shared::toast::{ToastService, Toaster};
use crate::system::pages::error_page::ErrorPage;
use leptos::prelude::*;

#[component]
pub fn App(api: ApiClient) -> impl IntoView {
    // Backend client, query cache and toasts are shared with every page via context.
    provide_context(api);
    provide_context(QueryClient::new());
    provide_context(ToastService::new());

    view! {
        <ThemeProvider>
            <ErrorBoundary fallback=|errors| view! { <ErrorPage errors=errors /> }>
                <AppRoutes />
            </ErrorBoundary>
            <Toaster />
        </ThemeProvider>
    }
}
