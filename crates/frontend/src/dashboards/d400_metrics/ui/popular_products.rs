use contracts::dashboards::d400_metrics::{product_shares, PopularProduct};
use contracts::shared::format::format_count;
use leptos::prelude::*;

use crate::dashboards::d400_metrics::api::{self, metric_key};
use crate::shared::query::{use_query, QueryOptions};

#[component]
fn ProductShareList(products: Vec<PopularProduct>) -> impl IntoView {
    let shares = product_shares(&products);
    products
        .into_iter()
        .zip(shares)
        .map(|(product, share)| {
            let width = format!("width: {:.1}%;", share);
            view! {
                <li class="popular-products__item">
                    <div class="popular-products__row">
                        <span class="popular-products__name">{product.product}</span>
                        <span class="muted">
                            {format!("{} ({:.0}%)", format_count(product.amount), share)}
                        </span>
                    </div>
                    <div class="popular-products__bar">
                        <div class="popular-products__fill" style=width></div>
                    </div>
                </li>
            }
        })
        .collect_view()
}

/// Best selling products with their share of all sold items
#[component]
pub fn PopularProducts() -> impl IntoView {
    let products = use_query(
        || (),
        |_: &()| metric_key("popular-products"),
        api::get_popular_products,
        QueryOptions::default(),
    );

    view! {
        <div class="popular-products card">
            <h3 class="card-title">"Produtos populares"</h3>
            {move || match (products.data(), products.error()) {
                (Some(list), _) if list.is_empty() => view! {
                    <p class="muted">"Nenhum produto vendido."</p>
                }
                .into_any(),
                (Some(list), _) => view! {
                    <ul class="popular-products__list">
                        <ProductShareList products=list />
                    </ul>
                }
                .into_any(),
                (None, Some(error)) => view! {
                    <p class="error-message">{format!("Falha ao carregar produtos: {}", error)}</p>
                }
                .into_any(),
                (None, None) => view! { <div class="skeleton skeleton--chart"></div> }.into_any(),
            }}
        </div>
    }
}
