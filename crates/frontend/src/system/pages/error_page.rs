use leptos::prelude::*;
use leptos_router::components::A;

use crate::shared::page_title::set_page_title;

/// Shown by the top-level error boundary; recovery is a link back, not a retry
#[component]
pub fn ErrorPage(errors: ArcRwSignal<Errors>) -> impl IntoView {
    set_page_title("Erro");

    view! {
        <div class="status-page">
            <h1 class="status-page__title">"Ops, algo deu errado!"</h1>
            <p class="muted">"Um erro aconteceu na aplicação, abaixo você encontra mais detalhes:"</p>
            <ul class="status-page__errors">
                {move || {
                    errors
                        .get()
                        .into_iter()
                        .map(|(_, error)| view! { <li><code>{error.to_string()}</code></li> })
                        .collect_view()
                }}
            </ul>
            <A href="/dashboard" attr:class="link">"Voltar ao Dashboard"</A>
        </div>
    }
}
