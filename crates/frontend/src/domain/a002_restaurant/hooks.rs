use contracts::domain::a002_restaurant::{ManagedRestaurant, UpdateProfileDto};
use leptos::prelude::{Callable, Callback};

use super::api::managed_restaurant_key;
use crate::shared::http::HttpError;
use crate::shared::query::{MutationHooks, QueryCache, QueryClient, Transaction};
use crate::shared::toast::ToastService;

pub const PROFILE_UPDATED: &str = "Perfil atualizado com sucesso!";
pub const PROFILE_UPDATE_FAILED: &str = "Falha ao atualizar perfil. As alterações foram desfeitas.";

/// Write the new profile into the cached restaurant before the request settles
pub fn apply_profile(cache: &mut QueryCache, profile: &UpdateProfileDto) -> Transaction<ManagedRestaurant> {
    Transaction::begin(cache, managed_restaurant_key(), |restaurant: ManagedRestaurant| {
        restaurant.with_profile(profile)
    })
}

/// Optimistic store profile update, undone when the backend rejects it
#[derive(Clone, Copy)]
pub struct ProfileUpdateHooks {
    client: QueryClient,
    toast: ToastService,
    on_saved: Option<Callback<()>>,
}

impl ProfileUpdateHooks {
    pub fn new(client: QueryClient, toast: ToastService) -> Self {
        Self {
            client,
            toast,
            on_saved: None,
        }
    }

    /// Run after a successful save, e.g. to close the dialog
    pub fn on_saved(mut self, callback: Callback<()>) -> Self {
        self.on_saved = Some(callback);
        self
    }
}

impl MutationHooks<UpdateProfileDto, ()> for ProfileUpdateHooks {
    type Context = Option<Transaction<ManagedRestaurant>>;

    fn on_mutate(&self, profile: &UpdateProfileDto) -> Self::Context {
        self.client.update(|cache| apply_profile(cache, profile))
    }

    fn on_success(&self, _: &(), _: &UpdateProfileDto, ctx: Self::Context) {
        if let Some(transaction) = ctx {
            transaction.commit();
        }
        self.toast.success(PROFILE_UPDATED);
        if let Some(callback) = self.on_saved {
            callback.run(());
        }
    }

    fn on_error(&self, error: &HttpError, _: &UpdateProfileDto, ctx: Self::Context) {
        log::error!("Failed to update store profile: {}", error);
        if let Some(transaction) = ctx {
            self.client.update(|cache| transaction.rollback(cache));
        }
        self.toast.error(PROFILE_UPDATE_FAILED);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::query::run_mutation;
    use crate::shared::toast::ToastKind;
    use futures::executor::block_on;
    use leptos::prelude::Owner;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    fn restaurant() -> ManagedRestaurant {
        ManagedRestaurant {
            id: "r-1".into(),
            name: "Pizza Shop".into(),
            description: Some("Forno a lenha".into()),
            manager_id: None,
            created_at: None,
            updated_at: None,
        }
    }

    fn update() -> UpdateProfileDto {
        UpdateProfileDto {
            name: "Nova Pizza".into(),
            description: None,
        }
    }

    #[test]
    fn test_profile_is_visible_before_response() {
        let mut cache = QueryCache::new();
        cache.set_query_data(&managed_restaurant_key(), &restaurant());

        let transaction = apply_profile(&mut cache, &update());
        let cached: ManagedRestaurant = cache.get_query_data(&managed_restaurant_key()).unwrap();
        assert_eq!(cached.name, "Nova Pizza");
        assert_eq!(cached.description, None);
        assert_eq!(transaction.snapshot(), Some(restaurant()));
        transaction.commit();
    }

    #[test]
    fn test_failed_update_restores_previous_profile() {
        let mut cache = QueryCache::new();
        cache.set_query_data(&managed_restaurant_key(), &restaurant());

        let transaction = apply_profile(&mut cache, &update());
        transaction.rollback(&mut cache);

        let cached: Option<ManagedRestaurant> = cache.get_query_data(&managed_restaurant_key());
        assert_eq!(cached, Some(restaurant()));
    }

    #[test]
    fn test_update_without_cached_restaurant_leaves_cache_empty() {
        let mut cache = QueryCache::new();
        let transaction = apply_profile(&mut cache, &update());
        transaction.rollback(&mut cache);
        assert!(cache.is_empty());
    }

    #[test]
    fn test_rejected_save_rolls_back_and_reports() {
        Owner::new().with(|| {
            let client = QueryClient::new();
            let toast = ToastService::persistent();
            client.set_query_data(&managed_restaurant_key(), &restaurant());
            let hooks = ProfileUpdateHooks::new(client, toast);

            let result = block_on(run_mutation(&hooks, update(), |_| async {
                Err::<(), _>(HttpError::Status {
                    status: 422,
                    body: None,
                })
            }));

            assert!(result.is_err());
            let cached: Option<ManagedRestaurant> = client.get_query_data(&managed_restaurant_key());
            assert_eq!(cached, Some(restaurant()));
            let visible = toast.visible();
            assert_eq!(visible.len(), 1);
            assert_eq!(visible[0].kind, ToastKind::Error);
            assert_eq!(visible[0].title, PROFILE_UPDATE_FAILED);
        });
    }

    #[test]
    fn test_accepted_save_keeps_profile_and_runs_callback() {
        Owner::new().with(|| {
            let client = QueryClient::new();
            let toast = ToastService::persistent();
            client.set_query_data(&managed_restaurant_key(), &restaurant());
            let saved = Arc::new(AtomicUsize::new(0));
            let counter = saved.clone();
            let hooks = ProfileUpdateHooks::new(client, toast).on_saved(Callback::new(move |_| {
                counter.fetch_add(1, Ordering::SeqCst);
            }));

            let result = block_on(run_mutation(&hooks, update(), |_| async { Ok(()) }));

            assert!(result.is_ok());
            let cached: ManagedRestaurant = client.get_query_data(&managed_restaurant_key()).unwrap();
            assert_eq!(cached.name, "Nova Pizza");
            assert_eq!(saved.load(Ordering::SeqCst), 1);
            assert_eq!(toast.visible()[0].title, PROFILE_UPDATED);
        });
    }
}
