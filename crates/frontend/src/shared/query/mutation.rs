use std::future::Future;

use crate::shared::http::HttpError;

/// Lifecycle callbacks of a write operation
///
/// `on_mutate` runs synchronously before the request is dispatched and its
/// return value is handed to whichever of `on_success`/`on_error` settles.
pub trait MutationHooks<V, T> {
    type Context;

    fn on_mutate(&self, vars: &V) -> Self::Context;

    fn on_success(&self, _data: &T, _vars: &V, _ctx: Self::Context) {}

    fn on_error(&self, _error: &HttpError, _vars: &V, _ctx: Self::Context) {}
}

/// Drive one mutation through its hooks
pub async fn run_mutation<V, T, H, F, Fut>(hooks: &H, vars: V, mutate: F) -> Result<T, HttpError>
where
    V: Clone,
    H: MutationHooks<V, T>,
    F: FnOnce(V) -> Fut,
    Fut: Future<Output = Result<T, HttpError>>,
{
    let ctx = hooks.on_mutate(&vars);
    let result = mutate(vars.clone()).await;
    match &result {
        Ok(data) => hooks.on_success(data, &vars, ctx),
        Err(err) => {
            log::warn!("Mutation failed: {}", err);
            hooks.on_error(err, &vars, ctx)
        }
    }
    result
}
