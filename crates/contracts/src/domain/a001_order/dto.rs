use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::status::OrderStatus;

/// One row of the paginated order list
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderSummary {
    pub order_id: String,
    pub created_at: DateTime<Utc>,
    pub status: OrderStatus,
    pub customer_name: String,
    /// Total in cents
    pub total: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageMeta {
    pub page_index: u32,
    pub per_page: u32,
    pub total_count: u32,
}

impl PageMeta {
    pub fn total_pages(&self) -> u32 {
        if self.per_page == 0 || self.total_count == 0 {
            return 1;
        }
        self.total_count.div_ceil(self.per_page)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GetOrdersResponse {
    pub orders: Vec<OrderSummary>,
    pub meta: PageMeta,
}

impl GetOrdersResponse {
    pub fn contains(&self, order_id: &str) -> bool {
        self.orders.iter().any(|o| o.order_id == order_id)
    }
}

/// Query string of `GET /orders`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GetOrdersQuery {
    pub page_index: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<OrderStatus>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Customer {
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductRef {
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderItem {
    pub id: String,
    pub price_in_cents: i64,
    pub quantity: Option<i64>,
    pub product: ProductRef,
}

impl OrderItem {
    pub fn quantity_or_zero(&self) -> i64 {
        self.quantity.unwrap_or(0)
    }

    pub fn subtotal_in_cents(&self) -> i64 {
        self.price_in_cents * self.quantity_or_zero()
    }
}

/// Response of `GET /orders/{id}`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderDetails {
    pub id: String,
    pub status: OrderStatus,
    pub created_at: DateTime<Utc>,
    pub total_in_cents: i64,
    pub customer: Customer,
    pub order_items: Vec<OrderItem>,
}
