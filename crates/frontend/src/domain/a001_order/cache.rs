use contracts::domain::a001_order::{GetOrdersResponse, OrderDetails, OrderStatus};

use super::api::{order_details_key, orders_prefix};
use crate::shared::query::QueryCache;

/// Set the status of `order_id` in every cached list page and in its cached
/// details. Other orders and fields are left untouched; returns how many list
/// pages were patched.
pub fn patch_order_status(cache: &mut QueryCache, order_id: &str, status: OrderStatus) -> usize {
    let mut patched = 0;

    for (key, mut page) in cache.get_queries_data::<GetOrdersResponse>(&orders_prefix()) {
        let mut changed = false;
        for order in page.orders.iter_mut().filter(|o| o.order_id == order_id) {
            order.status = status;
            changed = true;
        }
        if changed {
            cache.set_query_data(&key, &page);
            patched += 1;
        }
    }

    let details_key = order_details_key(order_id);
    if let Some(mut details) = cache.get_query_data::<OrderDetails>(&details_key) {
        details.status = status;
        cache.set_query_data(&details_key, &details);
    }

    log::debug!("Order {} set to {} in {} cached pages", order_id, status, patched);
    patched
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a001_order::api::orders_key;
    use chrono::Utc;
    use contracts::domain::a001_order::{
        Customer, GetOrdersQuery, OrderSummary, PageMeta,
    };

    fn summary(id: &str, status: OrderStatus) -> OrderSummary {
        OrderSummary {
            order_id: id.to_string(),
            created_at: Utc::now(),
            status,
            customer_name: format!("Cliente {}", id),
            total: 1000,
        }
    }

    fn page(orders: Vec<OrderSummary>) -> GetOrdersResponse {
        GetOrdersResponse {
            meta: PageMeta {
                page_index: 0,
                per_page: 10,
                total_count: orders.len() as u32,
            },
            orders,
        }
    }

    fn seeded() -> QueryCache {
        let mut cache = QueryCache::new();
        cache.set_query_data(
            &orders_key(&GetOrdersQuery::default()),
            &page(vec![
                summary("abc-123", OrderStatus::Pending),
                summary("def-456", OrderStatus::Pending),
            ]),
        );
        cache.set_query_data(
            &orders_key(&GetOrdersQuery {
                status: Some(OrderStatus::Pending),
                ..Default::default()
            }),
            &page(vec![summary("abc-123", OrderStatus::Pending)]),
        );
        cache.set_query_data(
            &orders_key(&GetOrdersQuery {
                page_index: 1,
                ..Default::default()
            }),
            &page(vec![summary("zzz-999", OrderStatus::Delivering)]),
        );
        cache
    }

    #[test]
    fn test_patch_updates_every_page_with_the_order() {
        let mut cache = seeded();
        let patched = patch_order_status(&mut cache, "abc-123", OrderStatus::Processing);
        assert_eq!(patched, 2);

        for (_, page) in cache.get_queries_data::<GetOrdersResponse>(&orders_prefix()) {
            for order in page.orders {
                match order.order_id.as_str() {
                    "abc-123" => assert_eq!(order.status, OrderStatus::Processing),
                    "def-456" => assert_eq!(order.status, OrderStatus::Pending),
                    _ => assert_eq!(order.status, OrderStatus::Delivering),
                }
            }
        }
    }

    #[test]
    fn test_patch_is_idempotent_and_keeps_other_fields() {
        let mut cache = seeded();
        patch_order_status(&mut cache, "abc-123", OrderStatus::Canceled);
        let once = cache.get_queries_data::<GetOrdersResponse>(&orders_prefix());
        patch_order_status(&mut cache, "abc-123", OrderStatus::Canceled);
        let twice = cache.get_queries_data::<GetOrdersResponse>(&orders_prefix());
        assert_eq!(once, twice);

        let first = &twice[0].1.orders[0];
        assert_eq!(first.order_id, "abc-123");
        assert_eq!(first.total, 1000);
        assert_eq!(first.customer_name, "Cliente abc-123");
    }

    #[test]
    fn test_concurrent_patches_on_different_orders_are_independent() {
        let mut cache = seeded();
        patch_order_status(&mut cache, "abc-123", OrderStatus::Processing);
        patch_order_status(&mut cache, "def-456", OrderStatus::Canceled);

        let (_, first_page) = &cache.get_queries_data::<GetOrdersResponse>(&orders_prefix())[0];
        assert_eq!(first_page.orders[0].status, OrderStatus::Processing);
        assert_eq!(first_page.orders[1].status, OrderStatus::Canceled);
    }

    #[test]
    fn test_patch_updates_cached_details() {
        let mut cache = seeded();
        let details = OrderDetails {
            id: "abc-123".into(),
            status: OrderStatus::Pending,
            created_at: Utc::now(),
            total_in_cents: 1000,
            customer: Customer {
                name: "Ana".into(),
                email: "ana@pizza.shop".into(),
                phone: None,
            },
            order_items: vec![],
        };
        cache.set_query_data(&order_details_key("abc-123"), &details);

        patch_order_status(&mut cache, "abc-123", OrderStatus::Processing);
        let patched: OrderDetails = cache.get_query_data(&order_details_key("abc-123")).unwrap();
        assert_eq!(patched.status, OrderStatus::Processing);
        assert_eq!(patched.id, "abc-123");
    }
}
