use contracts::domain::a001_order::{OrderFilters, OrdersUrlParams, StatusFilter};
use leptos::prelude::*;
use leptos_router::hooks::use_navigate;
use leptos_router::NavigateOptions;
use thaw::*;

use super::state::orders_href;
use crate::shared::icons::icon;

#[component]
pub fn OrderTableFilters(filters: Memo<OrderFilters>) -> impl IntoView {
    let navigate = use_navigate();
    let current = filters.get_untracked();

    let order_id = RwSignal::new(current.order_id.clone().unwrap_or_default());
    let customer_name = RwSignal::new(current.customer_name.clone().unwrap_or_default());
    let status = RwSignal::new(current.status.code().to_string());

    let on_filter = {
        let navigate = navigate.clone();
        move |_| {
            let params = OrdersUrlParams::from_form(
                &order_id.get_untracked(),
                &customer_name.get_untracked(),
                StatusFilter::parse(&status.get_untracked()),
            );
            navigate(&orders_href(&params), NavigateOptions::default());
        }
    };

    let on_clear = move |_| {
        order_id.set(String::new());
        customer_name.set(String::new());
        status.set(StatusFilter::All.code().to_string());
        navigate(&orders_href(&OrdersUrlParams::cleared()), NavigateOptions::default());
    };

    view! {
        <div class="order-filters">
            <Flex gap=FlexGap::Small align=FlexAlign::Center>
                <span class="order-filters__label">"Filtros:"</span>
                <Input value=order_id placeholder="ID do pedido" />
                <Input value=customer_name placeholder="Nome do cliente" attr:style="width: 320px;" />
                <Select value=status>
                    {StatusFilter::options()
                        .into_iter()
                        .map(|option| view! {
                            <option value=option.code()>{option.display_name()}</option>
                        })
                        .collect_view()}
                </Select>
                <Button size=ButtonSize::Small appearance=ButtonAppearance::Secondary on_click=on_filter>
                    {icon("search")}
                    "Filtrar resultados"
                </Button>
                <Button size=ButtonSize::Small appearance=ButtonAppearance::Subtle on_click=on_clear>
                    {icon("x")}
                    "Remover filtros"
                </Button>
            </Flex>
        </div>
    }
}
