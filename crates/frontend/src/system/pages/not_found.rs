use leptos::prelude::*;
use leptos_router::components::A;

use crate::shared::page_title::set_page_title;

#[component]
pub fn NotFoundPage() -> impl IntoView {
    set_page_title("Página não encontrada");

    view! {
        <div class="status-page">
            <h1 class="status-page__title">"Página não encontrada"</h1>
            <p class="muted">
                "Voltar para o "
                <A href="/" attr:class="link">"Dashboard"</A>
            </p>
        </div>
    }
}
