use contracts::domain::a001_order::{
    GetOrdersResponse, OrderFilters, OrderStatus, OrderSummary, OrdersUrlParams,
};
use leptos::prelude::*;
use leptos_router::hooks::use_query_map;

pub const ORDERS_PATH: &str = "/orders";
pub const SKELETON_ROWS: usize = 10;
pub const COLUMN_COUNT: usize = 8;

/// Filters and page read back from the URL on every change
pub fn use_order_filters() -> Memo<OrderFilters> {
    let query = use_query_map();
    Memo::new(move |_| query.with(|q| OrderFilters::from_params(|name| q.get(name))))
}

/// Location of the order list for `params`
pub fn orders_href(params: &OrdersUrlParams) -> String {
    match serde_qs::to_string(params) {
        Ok(query) if !query.is_empty() => format!("{}?{}", ORDERS_PATH, query),
        Ok(_) => ORDERS_PATH.to_string(),
        Err(e) => {
            log::error!("Failed to encode order list params: {}", e);
            ORDERS_PATH.to_string()
        }
    }
}

/// What the table shows besides the order rows themselves
#[derive(Debug, Clone, PartialEq)]
pub enum TableMessage {
    Loading,
    Failed(String),
    Empty,
    None,
}

pub fn table_message(data: Option<&GetOrdersResponse>, error: Option<String>) -> TableMessage {
    match (data, error) {
        (Some(data), _) if data.orders.is_empty() => TableMessage::Empty,
        (Some(_), _) => TableMessage::None,
        (None, Some(error)) => TableMessage::Failed(format!("Falha ao carregar pedidos: {}", error)),
        (None, None) => TableMessage::Loading,
    }
}

/// Rows are keyed by order id alone: a status change updates the row in place
pub fn row_key(order: &OrderSummary) -> String {
    order.order_id.clone()
}

pub fn row_status(data: &GetOrdersResponse, order_id: &str) -> Option<OrderStatus> {
    data.orders
        .iter()
        .find(|o| o.order_id == order_id)
        .map(|o| o.status)
}
