pub mod filters;
pub mod row;
pub mod state;

use contracts::domain::a001_order::{GetOrdersResponse, OrderSummary, OrdersUrlParams};
use leptos::prelude::*;
use leptos_router::hooks::use_navigate;
use leptos_router::NavigateOptions;
use thaw::*;

use crate::domain::a001_order::api::{self, orders_key};
use crate::shared::components::pagination_controls::PaginationControls;
use crate::shared::page_title::set_page_title;
use crate::shared::query::{use_query, QueryOptions};
use filters::OrderTableFilters;
use row::OrderTableRow;
use state::{
    orders_href, row_key, row_status, table_message, use_order_filters, TableMessage,
    COLUMN_COUNT, SKELETON_ROWS,
};

#[component]
fn OrderTableSkeleton() -> impl IntoView {
    (0..SKELETON_ROWS)
        .map(|_| {
            view! {
                <TableRow>
                    {(0..COLUMN_COUNT)
                        .map(|_| view! {
                            <TableCell><div class="skeleton skeleton--cell"></div></TableCell>
                        })
                        .collect_view()}
                </TableRow>
            }
        })
        .collect_view()
}

/// A single row spanning every column
#[component]
fn FullWidthRow(message: String) -> impl IntoView {
    view! {
        <tr class="table-message-row">
            <td colspan={COLUMN_COUNT.to_string()}>{message}</td>
        </tr>
    }
}

#[component]
pub fn OrdersPage() -> impl IntoView {
    set_page_title("Pedidos");

    let filters = use_order_filters();
    let orders = use_query(
        move || filters.get().to_query(),
        orders_key,
        api::get_orders,
        QueryOptions::default(),
    );

    let navigate = use_navigate();
    let on_page_change = Callback::new(move |page: usize| {
        let params = OrdersUrlParams::with_page(&filters.get_untracked(), page as u32);
        navigate(&orders_href(&params), NavigateOptions::default());
    });

    let meta = move || orders.data().map(|data: GetOrdersResponse| data.meta);

    let message = Memo::new(move |_| {
        let error = orders.error();
        orders.with_data(|data| table_message(data, error))
    });
    let message_rows = move || match message.get() {
        TableMessage::Loading => view! { <OrderTableSkeleton /> }.into_any(),
        TableMessage::Failed(text) => view! { <FullWidthRow message=text /> }.into_any(),
        TableMessage::Empty => {
            view! { <FullWidthRow message="Nenhum pedido encontrado.".to_string() /> }.into_any()
        }
        TableMessage::None => ().into_any(),
    };

    let rows = move || orders.data().map(|data| data.orders).unwrap_or_default();
    let row = move |order: OrderSummary| {
        let order_id = order.order_id.clone();
        let initial = order.status;
        let status = Memo::new(move |_| {
            orders
                .with_data(|data| data.and_then(|data| row_status(data, &order_id)))
                .unwrap_or(initial)
        });
        view! { <OrderTableRow order=order status=status /> }
    };

    view! {
        <div class="page orders-page">
            <h1 class="page-title">"Pedidos"</h1>
            <div class="orders-page__content">
                <OrderTableFilters filters=filters />

                <div class="table-wrapper">
                    <Table attr:style="width: 100%;">
                        <TableHeader>
                            <TableRow>
                                <TableHeaderCell min_width=64.0></TableHeaderCell>
                                <TableHeaderCell min_width=140.0>"Identificador"</TableHeaderCell>
                                <TableHeaderCell min_width=140.0>"Realizado há"</TableHeaderCell>
                                <TableHeaderCell min_width=140.0>"Status"</TableHeaderCell>
                                <TableHeaderCell>"Cliente"</TableHeaderCell>
                                <TableHeaderCell min_width=140.0>"Total do pedido"</TableHeaderCell>
                                <TableHeaderCell min_width=164.0></TableHeaderCell>
                                <TableHeaderCell min_width=132.0></TableHeaderCell>
                            </TableRow>
                        </TableHeader>
                        <TableBody>
                            {message_rows}
                            <For each=rows key=row_key children=row />
                        </TableBody>
                    </Table>
                </div>

                {move || meta().map(|meta| view! {
                    <PaginationControls
                        current_page={meta.page_index as usize}
                        total_pages={meta.total_pages() as usize}
                        total_count={meta.total_count as usize}
                        on_page_change=on_page_change
                    />
                })}
            </div>
        </div>
    }
}
