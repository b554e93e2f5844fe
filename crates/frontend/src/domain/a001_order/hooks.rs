use super::api::OrderActionVars;
use super::cache::patch_order_status;
use crate::shared::http::HttpError;
use crate::shared::query::{MutationHooks, QueryClient};
use crate::shared::toast::ToastService;

/// Status transitions are confirmed by the backend before the cache is
/// patched; no optimistic step, nothing to roll back.
#[derive(Clone, Copy)]
pub struct OrderActionHooks {
    client: QueryClient,
    toast: ToastService,
}

impl OrderActionHooks {
    pub fn new(client: QueryClient, toast: ToastService) -> Self {
        Self { client, toast }
    }
}

impl MutationHooks<OrderActionVars, ()> for OrderActionHooks {
    type Context = ();

    fn on_mutate(&self, vars: &OrderActionVars) {
        log::debug!("{} order {}", vars.action.code(), vars.order_id);
    }

    fn on_success(&self, _: &(), vars: &OrderActionVars, _: ()) {
        let target = vars.action.target_status();
        self.client
            .update(|cache| patch_order_status(cache, &vars.order_id, target));
        self.toast.success(vars.action.success_message());
    }

    fn on_error(&self, error: &HttpError, vars: &OrderActionVars, _: ()) {
        log::error!("Failed to {} order {}: {}", vars.action.code(), vars.order_id, error);
        self.toast.error(vars.action.failure_message());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a001_order::api::orders_key;
    use crate::shared::query::run_mutation;
    use crate::shared::toast::ToastKind;
    use chrono::Utc;
    use contracts::domain::a001_order::{
        GetOrdersQuery, GetOrdersResponse, OrderAction, OrderStatus, OrderSummary, PageMeta,
    };
    use futures::executor::block_on;
    use leptos::prelude::Owner;

    fn seeded_client() -> QueryClient {
        let client = QueryClient::new();
        let orders = vec![
            OrderSummary {
                order_id: "abc-123".into(),
                created_at: Utc::now(),
                status: OrderStatus::Pending,
                customer_name: "Ana".into(),
                total: 4990,
            },
            OrderSummary {
                order_id: "def-456".into(),
                created_at: Utc::now(),
                status: OrderStatus::Processing,
                customer_name: "Bruno".into(),
                total: 3500,
            },
        ];
        client.set_query_data(
            &orders_key(&GetOrdersQuery::default()),
            &GetOrdersResponse {
                meta: PageMeta {
                    page_index: 0,
                    per_page: 10,
                    total_count: 2,
                },
                orders,
            },
        );
        client
    }

    fn statuses(client: &QueryClient) -> Vec<OrderStatus> {
        let page: GetOrdersResponse = client
            .get_query_data(&orders_key(&GetOrdersQuery::default()))
            .unwrap();
        page.orders.iter().map(|o| o.status).collect()
    }

    fn approve() -> OrderActionVars {
        OrderActionVars {
            order_id: "abc-123".into(),
            action: OrderAction::Approve,
        }
    }

    #[test]
    fn test_failed_action_leaves_cache_and_reports() {
        Owner::new().with(|| {
            let client = seeded_client();
            let toast = ToastService::persistent();
            let hooks = OrderActionHooks::new(client, toast);

            let result = block_on(run_mutation(&hooks, approve(), |_| async {
                Err::<(), _>(HttpError::Network("offline".into()))
            }));

            assert!(result.is_err());
            assert_eq!(statuses(&client), vec![OrderStatus::Pending, OrderStatus::Processing]);
            let visible = toast.visible();
            assert_eq!(visible.len(), 1);
            assert_eq!(visible[0].kind, ToastKind::Error);
            assert_eq!(visible[0].title, OrderAction::Approve.failure_message());
        });
    }

    #[test]
    fn test_confirmed_action_patches_only_that_order() {
        Owner::new().with(|| {
            let client = seeded_client();
            let toast = ToastService::persistent();
            let hooks = OrderActionHooks::new(client, toast);

            let result = block_on(run_mutation(&hooks, approve(), |_| async { Ok(()) }));

            assert!(result.is_ok());
            assert_eq!(statuses(&client), vec![OrderStatus::Processing, OrderStatus::Processing]);
            assert_eq!(toast.visible()[0].title, OrderAction::Approve.success_message());
        });
    }
}
