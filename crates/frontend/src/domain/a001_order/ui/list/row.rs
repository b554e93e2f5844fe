use contracts::domain::a001_order::{OrderAction, OrderStatus, OrderSummary};
use contracts::shared::format::format_brl_cents;
use leptos::prelude::*;
use thaw::*;

use crate::domain::a001_order::api::{self, order_details_key, OrderActionVars};
use crate::domain::a001_order::hooks::OrderActionHooks;
use crate::domain::a001_order::ui::details::OrderDetailsModal;
use crate::domain::a001_order::ui::status_badge::OrderStatusBadge;
use crate::shared::date_utils::format_relative_now;
use crate::shared::icons::icon;
use crate::shared::query::{use_mutation, use_query, use_query_client, QueryOptions};
use crate::shared::toast::use_toast;

/// `status` follows the cached list so actions update the row in place
#[component]
pub fn OrderTableRow(
    order: OrderSummary,
    #[prop(into)] status: Signal<OrderStatus>,
) -> impl IntoView {
    let details_open = RwSignal::new(false);
    let order_id = order.order_id.clone();

    let details = {
        let order_id = order_id.clone();
        use_query(
            move || order_id.clone(),
            |id: &String| order_details_key(id),
            api::get_order_details,
            QueryOptions::enabled(details_open.into()),
        )
    };

    let action = use_mutation(
        OrderActionHooks::new(use_query_client(), use_toast()),
        api::run_order_action,
    );
    let pending = action.pending();

    let run = {
        let order_id = order_id.clone();
        move |kind: OrderAction| {
            action.mutate(OrderActionVars {
                order_id: order_id.clone(),
                action: kind,
            })
        }
    };

    let forward_button = {
        let run = run.clone();
        move || {
            status.get().available_actions().forward.map(|forward| {
                let run = run.clone();
                view! {
                    <Button
                        size=ButtonSize::Small
                        appearance=ButtonAppearance::Subtle
                        on_click=move |_| run(forward)
                        disabled=pending
                    >
                        {icon("arrow-right")}
                        {forward.label()}
                    </Button>
                }
            })
        }
    };
    let cancel_disabled =
        Signal::derive(move || !status.get().available_actions().cancel_enabled || pending.get());

    view! {
        <TableRow>
            <TableCell>
                <Button
                    size=ButtonSize::Small
                    appearance=ButtonAppearance::Subtle
                    on_click=move |_| details_open.set(true)
                    attr:title="Detalhes do pedido"
                >
                    {icon("search")}
                </Button>
                {move || details_open.get().then(|| view! {
                    <OrderDetailsModal
                        order_id=order_id.clone()
                        details=details
                        on_close=Callback::new(move |_| details_open.set(false))
                    />
                })}
            </TableCell>
            <TableCell>
                <TableCellLayout truncate=true>
                    <span class="order-id">{order.order_id.clone()}</span>
                </TableCellLayout>
            </TableCell>
            <TableCell>
                <TableCellLayout>
                    <span class="muted">{format_relative_now(order.created_at)}</span>
                </TableCellLayout>
            </TableCell>
            <TableCell>
                {move || view! { <OrderStatusBadge status=status.get() /> }}
            </TableCell>
            <TableCell>
                <TableCellLayout truncate=true>
                    <span style="font-weight: 500;">{order.customer_name.clone()}</span>
                </TableCellLayout>
            </TableCell>
            <TableCell>
                <TableCellLayout>
                    <span style="font-weight: 500;">{format_brl_cents(order.total)}</span>
                </TableCellLayout>
            </TableCell>
            <TableCell>{forward_button}</TableCell>
            <TableCell>
                <Button
                    size=ButtonSize::Small
                    appearance=ButtonAppearance::Subtle
                    on_click=move |_| run(OrderAction::Cancel)
                    disabled=cancel_disabled
                >
                    {icon("x")}
                    {OrderAction::Cancel.label()}
                </Button>
            </TableCell>
        </TableRow>
    }
}
