use contracts::domain::a001_order::{GetOrdersQuery, GetOrdersResponse, OrderAction, OrderDetails};

use crate::shared::http::{ApiClient, ApiRequest, HttpError};
use crate::shared::query::QueryKey;

pub const ORDERS_OPERATION: &str = "orders";
pub const ORDER_DETAILS_OPERATION: &str = "order";

/// Prefix shared by every cached list page
pub fn orders_prefix() -> QueryKey {
    QueryKey::new(ORDERS_OPERATION)
}

/// One cache entry per page and filter combination
pub fn orders_key(query: &GetOrdersQuery) -> QueryKey {
    orders_prefix()
        .with(query.page_index)
        .with_opt(query.order_id.as_deref())
        .with_opt(query.customer_name.as_deref())
        .with(query.status.map(|s| s.code()).unwrap_or("all"))
}

pub fn order_details_key(order_id: &str) -> QueryKey {
    QueryKey::new(ORDER_DETAILS_OPERATION).with(order_id)
}

/// Status transition triggered from a list row
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderActionVars {
    pub order_id: String,
    pub action: OrderAction,
}

pub async fn get_orders(api: ApiClient, query: GetOrdersQuery) -> Result<GetOrdersResponse, HttpError> {
    api.fetch_json(ApiRequest::get("/orders").with_query(&query)?)
        .await
}

pub async fn get_order_details(api: ApiClient, order_id: String) -> Result<OrderDetails, HttpError> {
    api.fetch_json(ApiRequest::get(format!("/orders/{}", order_id)))
        .await
}

pub async fn run_order_action(api: ApiClient, vars: OrderActionVars) -> Result<(), HttpError> {
    api.execute(ApiRequest::post(vars.action.path(&vars.order_id)))
        .await
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::a001_order::OrderStatus;

    #[test]
    fn test_orders_key_differs_per_filter() {
        let first = orders_key(&GetOrdersQuery::default());
        let filtered = orders_key(&GetOrdersQuery {
            status: Some(OrderStatus::Pending),
            ..Default::default()
        });
        let second_page = orders_key(&GetOrdersQuery {
            page_index: 1,
            ..Default::default()
        });

        assert_eq!(first.parts(), ["orders", "0", "", "", "all"]);
        assert_ne!(first, filtered);
        assert_ne!(first, second_page);
        assert!(filtered.starts_with(&orders_prefix()));
        assert!(!order_details_key("abc").starts_with(&orders_prefix()));
    }
}
