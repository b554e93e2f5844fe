//! Order list filters as they live in the URL
//!
//! The URL is the single source of truth for the list: `orderId`,
//! `customerName`, `status` and a 1-based `page`. Everything here is derived
//! again on every render.

use serde::{Deserialize, Serialize};

use super::dto::GetOrdersQuery;
use super::status::OrderStatus;

/// Status filter; `All` is the sentinel for "no status filter"
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum StatusFilter {
    #[default]
    All,
    Only(OrderStatus),
}

impl StatusFilter {
    /// Unknown values are treated as `All`
    pub fn parse(value: &str) -> Self {
        match OrderStatus::from_code(value.trim()) {
            Some(status) => StatusFilter::Only(status),
            None => StatusFilter::All,
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            StatusFilter::All => "all",
            StatusFilter::Only(status) => status.code(),
        }
    }

    pub fn status(&self) -> Option<OrderStatus> {
        match self {
            StatusFilter::All => None,
            StatusFilter::Only(status) => Some(*status),
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            StatusFilter::All => "Todos status",
            StatusFilter::Only(status) => status.display_name(),
        }
    }

    /// Options for the status select, `All` first
    pub fn options() -> Vec<StatusFilter> {
        std::iter::once(StatusFilter::All)
            .chain(OrderStatus::all().into_iter().map(StatusFilter::Only))
            .collect()
    }
}

/// Filters and 0-based page index derived from the URL
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct OrderFilters {
    pub order_id: Option<String>,
    pub customer_name: Option<String>,
    pub status: StatusFilter,
    pub page_index: u32,
}

impl OrderFilters {
    /// Build from a URL parameter lookup
    pub fn from_params<F>(get: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        Self {
            order_id: non_empty(get("orderId")),
            customer_name: non_empty(get("customerName")),
            status: get("status")
                .map(|s| StatusFilter::parse(&s))
                .unwrap_or_default(),
            page_index: page_index_from_param(get("page").as_deref()),
        }
    }

    pub fn to_query(&self) -> GetOrdersQuery {
        GetOrdersQuery {
            page_index: self.page_index,
            order_id: self.order_id.clone(),
            customer_name: self.customer_name.clone(),
            status: self.status.status(),
        }
    }

    pub fn is_filtered(&self) -> bool {
        self.order_id.is_some() || self.customer_name.is_some() || self.status != StatusFilter::All
    }
}

/// `page` is 1-based in the URL; anything unparsable or below 1 maps to index 0
pub fn page_index_from_param(page: Option<&str>) -> u32 {
    let page = page
        .and_then(|p| p.trim().parse::<i64>().ok())
        .unwrap_or(1);
    if page <= 1 {
        0
    } else {
        u32::try_from(page - 1).unwrap_or(u32::MAX)
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

/// Serializable form of the order list URL parameters
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrdersUrlParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<OrderStatus>,
    pub page: u32,
}

impl OrdersUrlParams {
    /// Applying the filter form always goes back to page 1
    pub fn from_form(order_id: &str, customer_name: &str, status: StatusFilter) -> Self {
        Self {
            order_id: non_empty(Some(order_id.to_string())),
            customer_name: non_empty(Some(customer_name.to_string())),
            status: status.status(),
            page: 1,
        }
    }

    pub fn cleared() -> Self {
        Self {
            order_id: None,
            customer_name: None,
            status: None,
            page: 1,
        }
    }

    /// Keep the current filters, move to `page_index` (0-based)
    pub fn with_page(filters: &OrderFilters, page_index: u32) -> Self {
        Self {
            order_id: filters.order_id.clone(),
            customer_name: filters.customer_name.clone(),
            status: filters.status.status(),
            page: page_index.saturating_add(1),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn params(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    fn filters(pairs: &[(&str, &str)]) -> OrderFilters {
        let map = params(pairs);
        OrderFilters::from_params(|key| map.get(key).cloned())
    }

    #[test]
    fn test_page_translation() {
        assert_eq!(filters(&[]).page_index, 0);
        assert_eq!(filters(&[("page", "1")]).page_index, 0);
        assert_eq!(filters(&[("page", "3")]).page_index, 2);
        assert_eq!(filters(&[("page", "0")]).page_index, 0);
        assert_eq!(filters(&[("page", "-3")]).page_index, 0);
        assert_eq!(filters(&[("page", "abc")]).page_index, 0);
    }

    #[test]
    fn test_invalid_status_is_all() {
        assert_eq!(filters(&[("status", "shipped")]).status, StatusFilter::All);
        assert_eq!(filters(&[("status", "all")]).status, StatusFilter::All);
        assert_eq!(filters(&[("status", "shipped")]), filters(&[("status", "all")]));
        assert_eq!(
            filters(&[("status", "delivering")]).status,
            StatusFilter::Only(OrderStatus::Delivering)
        );
    }

    #[test]
    fn test_empty_text_filters_are_absent() {
        let f = filters(&[("orderId", "  "), ("customerName", "Ana")]);
        assert_eq!(f.order_id, None);
        assert_eq!(f.customer_name.as_deref(), Some("Ana"));
        assert!(f.is_filtered());
        assert!(!filters(&[("page", "2")]).is_filtered());
    }

    #[test]
    fn test_to_query_omits_all_status() {
        let query = filters(&[("status", "all"), ("page", "2")]).to_query();
        assert_eq!(query.status, None);
        assert_eq!(query.page_index, 1);
    }

    #[test]
    fn test_filter_form_resets_page() {
        let url = OrdersUrlParams::from_form("abc", "", StatusFilter::Only(OrderStatus::Pending));
        assert_eq!(url.page, 1);
        assert_eq!(url.order_id.as_deref(), Some("abc"));
        assert_eq!(url.customer_name, None);

        let url = OrdersUrlParams::from_form("", "", StatusFilter::All);
        assert_eq!(url, OrdersUrlParams::cleared());
    }

    #[test]
    fn test_with_page_keeps_filters() {
        let current = filters(&[("customerName", "Ana"), ("page", "4")]);
        let url = OrdersUrlParams::with_page(&current, 4);
        assert_eq!(url.page, 5);
        assert_eq!(url.customer_name.as_deref(), Some("Ana"));
    }

    #[test]
    fn test_status_options_start_with_all() {
        let options = StatusFilter::options();
        assert_eq!(options[0], StatusFilter::All);
        assert_eq!(options.len(), 6);
        assert_eq!(StatusFilter::parse(options[3].code()), options[3]);
    }
}
