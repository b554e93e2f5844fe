use crate::shared::icons::icon;
use leptos::prelude::*;

/// Page navigation under a list. Pages are 0-indexed here and shown 1-based.
#[component]
pub fn PaginationControls(
    /// Current page (0-indexed)
    #[prop(into)]
    current_page: Signal<usize>,

    /// Total number of pages
    #[prop(into)]
    total_pages: Signal<usize>,

    /// Total count of items
    #[prop(into)]
    total_count: Signal<usize>,

    /// Callback with the requested 0-indexed page
    on_page_change: Callback<usize>,
) -> impl IntoView {
    let is_first = move || current_page.get() == 0;
    let is_last = move || current_page.get() + 1 >= total_pages.get();

    view! {
        <div class="pagination-controls">
            <span class="pagination-total">
                {move || format!("Total de {} item(s)", total_count.get())}
            </span>
            <div class="pagination-nav">
                <span class="pagination-info">
                    {move || format!("Página {} de {}", current_page.get() + 1, total_pages.get().max(1))}
                </span>
                <button
                    class="pagination-btn"
                    on:click=move |_| on_page_change.run(0)
                    disabled=is_first
                    title="Primeira página"
                >
                    {icon("chevrons-left")}
                </button>
                <button
                    class="pagination-btn"
                    on:click=move |_| {
                        let page = current_page.get();
                        if page > 0 {
                            on_page_change.run(page - 1);
                        }
                    }
                    disabled=is_first
                    title="Página anterior"
                >
                    {icon("chevron-left")}
                </button>
                <button
                    class="pagination-btn"
                    on:click=move |_| {
                        let page = current_page.get();
                        if page + 1 < total_pages.get() {
                            on_page_change.run(page + 1);
                        }
                    }
                    disabled=is_last
                    title="Próxima página"
                >
                    {icon("chevron-right")}
                </button>
                <button
                    class="pagination-btn"
                    on:click=move |_| {
                        let total = total_pages.get();
                        if total > 0 {
                            on_page_change.run(total - 1);
                        }
                    }
                    disabled=is_last
                    title="Última página"
                >
                    {icon("chevrons-right")}
                </button>
            </div>
        </div>
    }
}
