use contracts::domain::a001_order::OrderDetails;
use contracts::shared::format::format_brl_cents;
use leptos::prelude::*;
use thaw::*;

use crate::domain::a001_order::ui::status_badge::OrderStatusBadge;
use crate::shared::date_utils::format_relative_now;
use crate::shared::modal::Modal;
use crate::shared::query::QueryHandle;

const PHONE_FALLBACK: &str = "Não informado";

#[component]
fn InfoRow(label: &'static str, children: Children) -> impl IntoView {
    view! {
        <TableRow>
            <TableCell><span class="muted">{label}</span></TableCell>
            <TableCell><div class="cell-right">{children()}</div></TableCell>
        </TableRow>
    }
}

#[component]
fn OrderDetailsSkeleton() -> impl IntoView {
    view! {
        <div class="order-details order-details--loading">
            {(0..5).map(|_| view! { <div class="skeleton skeleton--line"></div> }).collect_view()}
            <div class="skeleton skeleton--block"></div>
        </div>
    }
}

#[component]
fn OrderDetailsContent(details: OrderDetails) -> impl IntoView {
    let phone = details
        .customer
        .phone
        .clone()
        .unwrap_or_else(|| PHONE_FALLBACK.to_string());
    let status = details.status;
    let customer_name = details.customer.name.clone();
    let email = details.customer.email.to_lowercase();
    let placed = format_relative_now(details.created_at);
    let total = format_brl_cents(details.total_in_cents);

    let items = details
        .order_items
        .iter()
        .map(|item| {
            let name = item.product.name.clone();
            let quantity = item.quantity_or_zero();
            let price = format_brl_cents(item.price_in_cents);
            let subtotal = format_brl_cents(item.subtotal_in_cents());
            view! {
                <TableRow>
                    <TableCell>{name}</TableCell>
                    <TableCell><div class="cell-right">{quantity}</div></TableCell>
                    <TableCell><div class="cell-right">{price}</div></TableCell>
                    <TableCell><div class="cell-right">{subtotal}</div></TableCell>
                </TableRow>
            }
        })
        .collect_view();

    view! {
        <div class="order-details">
            <Table>
                <TableBody>
                    <InfoRow label="Status">
                        <OrderStatusBadge status=status />
                    </InfoRow>
                    <InfoRow label="Cliente">{customer_name}</InfoRow>
                    <InfoRow label="Telefone">{phone}</InfoRow>
                    <InfoRow label="Email">{email}</InfoRow>
                    <InfoRow label="Realizado há">{placed}</InfoRow>
                </TableBody>
            </Table>

            <Table>
                <TableHeader>
                    <TableRow>
                        <TableHeaderCell>"Produto"</TableHeaderCell>
                        <TableHeaderCell>"Quantidade"</TableHeaderCell>
                        <TableHeaderCell>"Preço"</TableHeaderCell>
                        <TableHeaderCell>"Subtotal"</TableHeaderCell>
                    </TableRow>
                </TableHeader>
                <TableBody>
                    {items}
                    <TableRow>
                        <TableCell>"Total do pedido"</TableCell>
                        <TableCell></TableCell>
                        <TableCell></TableCell>
                        <TableCell>
                            <div class="cell-right" style="font-weight: 600;">
                                {total}
                            </div>
                        </TableCell>
                    </TableRow>
                </TableBody>
            </Table>
        </div>
    }
}

/// Details of one order; the query behind `details` only runs while this is open
#[component]
pub fn OrderDetailsModal(
    order_id: String,
    details: QueryHandle<OrderDetails>,
    on_close: Callback<()>,
) -> impl IntoView {
    view! {
        <Modal
            title=format!("Pedido: {}", order_id)
            subtitle="Detalhes do pedido".to_string()
            on_close=on_close
        >
            {move || match (details.data(), details.error()) {
                (Some(data), _) => view! { <OrderDetailsContent details=data /> }.into_any(),
                (None, Some(error)) => view! {
                    <p class="error-message">{format!("Não foi possível carregar o pedido: {}", error)}</p>
                }
                .into_any(),
                (None, None) => view! { <OrderDetailsSkeleton /> }.into_any(),
            }}
        </Modal>
    }
}
